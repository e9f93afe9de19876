use super::form::FormBody;
use crate::gateway::Operation;

use common::RedactedApiKey;
use models::{
    AccountDetailsRequest, AlertContactAssignment, AlertContactUpdate, AlertContactsRequest,
    MaintenanceWindowUpdate, MaintenanceWindowsRequest, MonitorStatus, MonitorUpdate,
    MonitorsRequest, NewAlertContact, NewMaintenanceWindow, NewMonitor, NewStatusPage,
    StatusPageUpdate, StatusPagesRequest,
};

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// `newPSP` only supports one page type.
const STATUS_PAGE_TYPE: i64 = 1;
/// `editMonitor` status codes for pausing and resuming.
const RESUMED_STATUS: i64 = 1;

/// A request that knows its operation and how to lay itself out as a form.
pub trait EncodeForm {
    fn operation(&self) -> Operation;
    fn encode_into(&self, form: &mut FormBody);
}

/// Encode `request` into a complete form body, credential first.
pub fn encode<R: EncodeForm + ?Sized>(api_key: &RedactedApiKey, request: &R) -> String {
    let mut form = FormBody::new(api_key);
    request.encode_into(&mut form);
    form.finish()
}

/// Delete and reset take nothing but the entity id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ById {
    pub operation: Operation,
    pub id: i64,
}

impl ById {
    pub fn new(operation: Operation, id: i64) -> Self {
        Self { operation, id }
    }
}

impl EncodeForm for ById {
    fn operation(&self) -> Operation {
        self.operation
    }

    fn encode_into(&self, form: &mut FormBody) {
        form.pair("id", self.id);
    }
}

impl EncodeForm for AccountDetailsRequest {
    fn operation(&self) -> Operation {
        Operation::GetAccountDetails
    }

    fn encode_into(&self, _form: &mut FormBody) {}
}

impl EncodeForm for MonitorsRequest {
    fn operation(&self) -> Operation {
        Operation::GetMonitors
    }

    fn encode_into(&self, form: &mut FormBody) {
        form.list("monitors", &self.monitors)
            .list("types", &self.types)
            .list("statuses", &self.statuses)
            .list("custom_uptime_ratios", &self.custom_uptime_ratios)
            .date_ranges("custom_uptime_ranges", &self.custom_uptime_ranges)
            .flag("all_time_uptime_ratio", self.all_time_uptime_ratio)
            .flag("all_time_uptime_durations", self.all_time_uptime_durations)
            .flag("logs", self.logs)
            .opt("logs_start_date", self.logs_start_date.map(|at| at.timestamp()))
            .opt("logs_end_date", self.logs_end_date.map(|at| at.timestamp()))
            .list("log_types", &self.log_types)
            .opt("logs_limit", self.logs_limit)
            .flag("response_times", self.response_times)
            .opt("response_times_limit", self.response_times_limit)
            .opt("response_times_average", self.response_times_average)
            .opt(
                "response_times_start_date",
                self.response_times_start_date.map(|at| at.timestamp()),
            )
            .opt(
                "response_times_end_date",
                self.response_times_end_date.map(|at| at.timestamp()),
            )
            .flag("alert_contacts", self.alert_contacts)
            .flag("mwindows", self.mwindows)
            .flag("ssl", self.ssl)
            .flag("custom_http_headers", self.custom_http_headers)
            .text("search", self.search.as_deref())
            .page(&self.page);
    }
}

fn assignments(assignments: &[AlertContactAssignment]) -> Vec<String> {
    assignments
        .iter()
        .map(AlertContactAssignment::wire_value)
        .collect()
}

/// Headers travel as a JSON object string; an empty map is left off.
fn headers_json(headers: &BTreeMap<String, String>) -> Option<String> {
    if headers.is_empty() {
        return None;
    }
    let object: Map<String, Value> = headers
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();
    Some(Value::Object(object).to_string())
}

impl EncodeForm for NewMonitor {
    fn operation(&self) -> Operation {
        Operation::NewMonitor
    }

    fn encode_into(&self, form: &mut FormBody) {
        form.pair("friendly_name", &self.friendly_name)
            .text("url", Some(self.url.as_str()).filter(|url| !url.trim().is_empty()))
            .pair("type", self.monitor_type)
            .opt("sub_type", self.sub_type)
            .opt("port", self.port)
            .opt("keyword_type", self.keyword_type)
            .opt("keyword_case_type", self.keyword_case_type)
            .text("keyword_value", self.keyword_value.as_deref())
            .opt("interval", self.interval)
            .opt("timeout", self.timeout)
            .text("http_username", self.http_username.as_deref())
            .text("http_password", self.http_password.as_deref())
            .opt("http_auth_type", self.http_auth_type)
            .opt("http_method", self.http_method)
            .opt("post_type", self.post_type)
            .text("post_value", self.post_value.as_deref())
            .opt("post_content_type", self.post_content_type)
            .list("alert_contacts", &assignments(&self.alert_contacts))
            .list("mwindows", &self.mwindows)
            .text(
                "custom_http_headers",
                headers_json(&self.custom_http_headers).as_deref(),
            )
            .flag("ignore_ssl_errors", self.ignore_ssl_errors);
    }
}

impl EncodeForm for MonitorUpdate {
    fn operation(&self) -> Operation {
        Operation::EditMonitor
    }

    fn encode_into(&self, form: &mut FormBody) {
        let status = self.paused.map(|paused| {
            if paused {
                MonitorStatus::Paused.code()
            } else {
                RESUMED_STATUS
            }
        });
        let headers = self.custom_http_headers.as_ref().and_then(headers_json);

        form.pair("id", self.id)
            .text("friendly_name", self.friendly_name.as_deref())
            .text("url", self.url.as_deref())
            .opt("sub_type", self.sub_type)
            .opt("port", self.port)
            .opt("keyword_type", self.keyword_type)
            .opt("keyword_case_type", self.keyword_case_type)
            .text("keyword_value", self.keyword_value.as_deref())
            .opt("interval", self.interval)
            .opt("timeout", self.timeout)
            .text("http_username", self.http_username.as_deref())
            .text("http_password", self.http_password.as_deref())
            .opt("http_auth_type", self.http_auth_type)
            .opt("http_method", self.http_method)
            .list(
                "alert_contacts",
                &assignments(self.alert_contacts.as_deref().unwrap_or_default()),
            )
            .list("mwindows", self.mwindows.as_deref().unwrap_or_default())
            .text("custom_http_headers", headers.as_deref())
            .switch("ignore_ssl_errors", self.ignore_ssl_errors)
            .opt("status", status);
    }
}

impl EncodeForm for AlertContactsRequest {
    fn operation(&self) -> Operation {
        Operation::GetAlertContacts
    }

    fn encode_into(&self, form: &mut FormBody) {
        form.list("alert_contacts", &self.alert_contacts)
            .page(&self.page);
    }
}

impl EncodeForm for NewAlertContact {
    fn operation(&self) -> Operation {
        Operation::NewAlertContact
    }

    fn encode_into(&self, form: &mut FormBody) {
        form.pair("type", self.contact_type)
            .pair("value", &self.value)
            .pair("friendly_name", &self.friendly_name);
    }
}

impl EncodeForm for AlertContactUpdate {
    fn operation(&self) -> Operation {
        Operation::EditAlertContact
    }

    fn encode_into(&self, form: &mut FormBody) {
        form.pair("id", self.id)
            .text("friendly_name", self.friendly_name.as_deref())
            .text("value", self.value.as_deref());
    }
}

impl EncodeForm for MaintenanceWindowsRequest {
    fn operation(&self) -> Operation {
        Operation::GetMaintenanceWindows
    }

    fn encode_into(&self, form: &mut FormBody) {
        form.list("mwindows", &self.mwindows).page(&self.page);
    }
}

impl EncodeForm for NewMaintenanceWindow {
    fn operation(&self) -> Operation {
        Operation::NewMaintenanceWindow
    }

    fn encode_into(&self, form: &mut FormBody) {
        form.pair("friendly_name", &self.friendly_name)
            .pair("type", self.window_type)
            .text("value", self.value.as_deref())
            .pair("start_time", self.start_time.wire_value())
            .pair("duration", self.duration);
    }
}

impl EncodeForm for MaintenanceWindowUpdate {
    fn operation(&self) -> Operation {
        Operation::EditMaintenanceWindow
    }

    fn encode_into(&self, form: &mut FormBody) {
        form.pair("id", self.id)
            .text("friendly_name", self.friendly_name.as_deref())
            .text("value", self.value.as_deref())
            .opt(
                "start_time",
                self.start_time.as_ref().map(|start| start.wire_value()),
            )
            .opt("duration", self.duration);
    }
}

impl EncodeForm for StatusPagesRequest {
    fn operation(&self) -> Operation {
        Operation::GetStatusPages
    }

    fn encode_into(&self, form: &mut FormBody) {
        form.list("psps", &self.psps).page(&self.page);
    }
}

impl EncodeForm for NewStatusPage {
    fn operation(&self) -> Operation {
        Operation::NewStatusPage
    }

    fn encode_into(&self, form: &mut FormBody) {
        form.pair("type", STATUS_PAGE_TYPE)
            .pair("friendly_name", &self.friendly_name)
            .opt("monitors", self.monitors.wire_value())
            .text("custom_domain", self.custom_domain.as_deref())
            .text("password", self.password.as_deref())
            .opt("sort", self.sort)
            .flag("hide_url_links", self.hide_url_links)
            .opt("status", self.status);
    }
}

impl EncodeForm for StatusPageUpdate {
    fn operation(&self) -> Operation {
        Operation::EditStatusPage
    }

    fn encode_into(&self, form: &mut FormBody) {
        form.pair("id", self.id)
            .text("friendly_name", self.friendly_name.as_deref())
            .opt(
                "monitors",
                self.monitors.as_ref().and_then(|monitors| monitors.wire_value()),
            )
            .text("custom_domain", self.custom_domain.as_deref())
            .text("password", self.password.as_deref())
            .opt("sort", self.sort)
            .opt("status", self.status);
    }
}
