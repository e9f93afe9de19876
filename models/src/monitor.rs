use crate::durations::UptimeDurations;
use crate::enums::{
    AlertContactType, KeywordCaseType, KeywordType, LogType, MonitorStatus, MonitorSubType,
    MonitorType,
};
use crate::maintenance_window::MaintenanceWindow;
use crate::pagination::Pagination;
use crate::wire;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a monitor as returned by `getMonitors`.
///
/// The optional sections (`logs`, `response_times`, `alert_contacts`, ...)
/// are only present when the matching include flag was set on the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    #[serde(rename = "id", deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(rename = "friendly_name", default)]
    pub friendly_name: Option<String>,
    #[serde(rename = "url", default)]
    pub url: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "wire::opt_code")]
    pub monitor_type: Option<MonitorType>,
    #[serde(rename = "sub_type", default, deserialize_with = "wire::opt_code")]
    pub sub_type: Option<MonitorSubType>,
    #[serde(rename = "keyword_type", default, deserialize_with = "wire::opt_code")]
    pub keyword_type: Option<KeywordType>,
    #[serde(rename = "keyword_case_type", default, deserialize_with = "wire::opt_code")]
    pub keyword_case_type: Option<KeywordCaseType>,
    #[serde(rename = "keyword_value", default, deserialize_with = "wire::opt_string")]
    pub keyword_value: Option<String>,
    #[serde(rename = "http_username", default, deserialize_with = "wire::opt_string")]
    pub http_username: Option<String>,
    #[serde(rename = "http_password", default, deserialize_with = "wire::opt_string")]
    pub http_password: Option<String>,
    #[serde(rename = "port", default, deserialize_with = "wire::opt_i64")]
    pub port: Option<i64>,
    /// Check interval in seconds.
    #[serde(rename = "interval", default, deserialize_with = "wire::opt_i64")]
    pub interval: Option<i64>,
    #[serde(rename = "timeout", default, deserialize_with = "wire::opt_i64")]
    pub timeout: Option<i64>,
    #[serde(rename = "status", default, deserialize_with = "wire::opt_code")]
    pub status: Option<MonitorStatus>,
    #[serde(rename = "create_datetime", default, deserialize_with = "wire::opt_epoch")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "all_time_uptime_ratio", default, deserialize_with = "wire::opt_f64")]
    pub all_time_uptime_ratio: Option<f64>,
    #[serde(
        rename = "all_time_uptime_durations",
        default,
        deserialize_with = "wire::opt_durations"
    )]
    pub all_time_uptime_durations: Option<UptimeDurations>,
    /// One ratio per requested `custom_uptime_ratios` period, in request order.
    #[serde(rename = "custom_uptime_ratio", default, deserialize_with = "wire::opt_ratio_list")]
    pub custom_uptime_ratios: Option<Vec<f64>>,
    /// One ratio per requested `custom_uptime_ranges` range, in request order.
    #[serde(rename = "custom_uptime_ranges", default, deserialize_with = "wire::opt_ratio_list")]
    pub custom_uptime_ranges: Option<Vec<f64>>,
    #[serde(rename = "average_response_time", default, deserialize_with = "wire::opt_f64")]
    pub average_response_time: Option<f64>,
    #[serde(rename = "logs", default)]
    pub logs: Option<Vec<MonitorLog>>,
    #[serde(rename = "response_times", default)]
    pub response_times: Option<Vec<ResponseTime>>,
    #[serde(rename = "alert_contacts", default)]
    pub alert_contacts: Option<Vec<MonitorAlertContact>>,
    #[serde(rename = "mwindows", default)]
    pub mwindows: Option<Vec<MaintenanceWindow>>,
    #[serde(rename = "ssl", default)]
    pub ssl: Option<SslInfo>,
    #[serde(rename = "custom_http_headers", default, deserialize_with = "wire::opt_header_map")]
    pub custom_http_headers: Option<BTreeMap<String, String>>,
}

impl Monitor {
    pub fn is_paused(&self) -> bool {
        self.status == Some(MonitorStatus::Paused)
    }

    pub fn is_down(&self) -> bool {
        matches!(
            self.status,
            Some(MonitorStatus::Down | MonitorStatus::SeemsDown)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorLog {
    #[serde(rename = "id", default, deserialize_with = "wire::opt_i64")]
    pub id: Option<i64>,
    #[serde(rename = "type", default, deserialize_with = "wire::opt_code")]
    pub log_type: Option<LogType>,
    #[serde(rename = "datetime", default, deserialize_with = "wire::opt_epoch")]
    pub datetime: Option<DateTime<Utc>>,
    /// Seconds the monitor stayed in this state.
    #[serde(rename = "duration", default, deserialize_with = "wire::opt_i64")]
    pub duration: Option<i64>,
    #[serde(rename = "reason", default)]
    pub reason: Option<LogReason>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogReason {
    #[serde(rename = "code", default, deserialize_with = "wire::opt_string")]
    pub code: Option<String>,
    #[serde(rename = "detail", default, deserialize_with = "wire::opt_string")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTime {
    #[serde(rename = "datetime", default, deserialize_with = "wire::opt_epoch")]
    pub datetime: Option<DateTime<Utc>>,
    /// Milliseconds.
    #[serde(rename = "value", default, deserialize_with = "wire::opt_i64")]
    pub value: Option<i64>,
}

/// An alert contact as attached to a monitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorAlertContact {
    #[serde(rename = "id", deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(rename = "type", default, deserialize_with = "wire::opt_code")]
    pub contact_type: Option<AlertContactType>,
    #[serde(rename = "value", default, deserialize_with = "wire::opt_string")]
    pub value: Option<String>,
    #[serde(rename = "threshold", default, deserialize_with = "wire::opt_i64")]
    pub threshold: Option<i64>,
    #[serde(rename = "recurrence", default, deserialize_with = "wire::opt_i64")]
    pub recurrence: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslInfo {
    #[serde(rename = "brand", default, deserialize_with = "wire::opt_string")]
    pub brand: Option<String>,
    #[serde(rename = "product", default, deserialize_with = "wire::opt_string")]
    pub product: Option<String>,
    #[serde(rename = "expires", default, deserialize_with = "wire::opt_epoch")]
    pub expires: Option<DateTime<Utc>>,
}

/// `getMonitors` payload, in the order the remote returned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorsPage {
    #[serde(rename = "pagination", default)]
    pub pagination: Option<Pagination>,
    #[serde(rename = "monitors", default)]
    pub monitors: Vec<Monitor>,
}

/// Acknowledgement of a monitor mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorRef {
    #[serde(rename = "id", deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(rename = "status", default, deserialize_with = "wire::opt_code")]
    pub status: Option<MonitorStatus>,
}
