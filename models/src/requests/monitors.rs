use crate::api_error::ErrorKind;
use crate::enums::{
    HttpAuthType, HttpMethod, KeywordCaseType, KeywordType, LogType, MonitorStatus,
    MonitorSubType, MonitorType, PostContentType, PostType,
};
use crate::pagination::PageParams;
use crate::time::DateRange;
use crate::wire::RANGE_SEPARATOR;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Filters and include flags for `getMonitors`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorsRequest {
    pub monitors: Vec<i64>,
    pub types: Vec<MonitorType>,
    pub statuses: Vec<MonitorStatus>,
    /// Periods in days, e.g. `[7, 30]`.
    pub custom_uptime_ratios: Vec<u32>,
    pub custom_uptime_ranges: Vec<DateRange>,
    pub all_time_uptime_ratio: bool,
    pub all_time_uptime_durations: bool,
    pub logs: bool,
    pub logs_start_date: Option<DateTime<Utc>>,
    pub logs_end_date: Option<DateTime<Utc>>,
    pub log_types: Vec<LogType>,
    pub logs_limit: Option<u32>,
    pub response_times: bool,
    pub response_times_limit: Option<u32>,
    /// Averaging window in minutes.
    pub response_times_average: Option<u32>,
    pub response_times_start_date: Option<DateTime<Utc>>,
    pub response_times_end_date: Option<DateTime<Utc>>,
    pub alert_contacts: bool,
    pub mwindows: bool,
    pub ssl: bool,
    pub custom_http_headers: bool,
    pub search: Option<String>,
    pub page: PageParams,
}

impl MonitorsRequest {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_id(id: i64) -> Self {
        Self::for_ids([id])
    }

    pub fn for_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            monitors: ids.into_iter().collect(),
            ..Self::default()
        }
    }
}

/// An alert contact attached to a monitor, with its notification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertContactAssignment {
    pub id: i64,
    /// Minutes the monitor must be down before alerting.
    pub threshold: u32,
    /// Repeat the alert every N minutes while down; 0 disables.
    pub recurrence: u32,
}

impl AlertContactAssignment {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            threshold: 0,
            recurrence: 0,
        }
    }

    /// `id_threshold_recurrence`.
    pub fn wire_value(&self) -> String {
        format!(
            "{}{RANGE_SEPARATOR}{}{RANGE_SEPARATOR}{}",
            self.id, self.threshold, self.recurrence
        )
    }
}

/// Parameters for `newMonitor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMonitor {
    pub friendly_name: String,
    pub url: String,
    pub monitor_type: MonitorType,
    pub sub_type: Option<MonitorSubType>,
    pub port: Option<i64>,
    pub keyword_type: Option<KeywordType>,
    pub keyword_case_type: Option<KeywordCaseType>,
    pub keyword_value: Option<String>,
    /// Seconds.
    pub interval: Option<i64>,
    pub timeout: Option<i64>,
    pub http_username: Option<String>,
    pub http_password: Option<String>,
    pub http_auth_type: Option<HttpAuthType>,
    pub http_method: Option<HttpMethod>,
    pub post_type: Option<PostType>,
    pub post_value: Option<String>,
    pub post_content_type: Option<PostContentType>,
    pub alert_contacts: Vec<AlertContactAssignment>,
    pub mwindows: Vec<i64>,
    pub custom_http_headers: BTreeMap<String, String>,
    pub ignore_ssl_errors: bool,
}

impl NewMonitor {
    pub fn new(
        friendly_name: impl Into<String>,
        url: impl Into<String>,
        monitor_type: MonitorType,
    ) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            url: url.into(),
            monitor_type,
            sub_type: None,
            port: None,
            keyword_type: None,
            keyword_case_type: None,
            keyword_value: None,
            interval: None,
            timeout: None,
            http_username: None,
            http_password: None,
            http_auth_type: None,
            http_method: None,
            post_type: None,
            post_value: None,
            post_content_type: None,
            alert_contacts: Vec::new(),
            mwindows: Vec::new(),
            custom_http_headers: BTreeMap::new(),
            ignore_ssl_errors: false,
        }
    }

    /// First client-side rule this monitor breaks, if any.
    ///
    /// Every type but heartbeat needs a URL; keyword monitors need a keyword
    /// type and value; port monitors need a sub type, and a port when the
    /// sub type is custom.
    pub fn violation(&self) -> Option<ErrorKind> {
        if self.friendly_name.trim().is_empty() {
            return Some(ErrorKind::NoFriendlyName);
        }
        if self.monitor_type != MonitorType::Heartbeat && self.url.trim().is_empty() {
            return Some(ErrorKind::NoUrl);
        }
        let incomplete = match self.monitor_type {
            MonitorType::Keyword => {
                self.keyword_type.is_none()
                    || self.keyword_value.as_deref().is_none_or(|value| value.trim().is_empty())
            }
            MonitorType::Port => match self.sub_type {
                None => true,
                Some(MonitorSubType::Custom) => self.port.is_none(),
                Some(_) => false,
            },
            MonitorType::Unrecognized(_) => true,
            _ => false,
        };
        incomplete.then_some(ErrorKind::IncorrectParameters)
    }
}

/// Parameters for `editMonitor`. `None` leaves the field unchanged.
///
/// The monitor type cannot be changed after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorUpdate {
    pub id: i64,
    pub friendly_name: Option<String>,
    pub url: Option<String>,
    pub sub_type: Option<MonitorSubType>,
    pub port: Option<i64>,
    pub keyword_type: Option<KeywordType>,
    pub keyword_case_type: Option<KeywordCaseType>,
    pub keyword_value: Option<String>,
    pub interval: Option<i64>,
    pub timeout: Option<i64>,
    pub http_username: Option<String>,
    pub http_password: Option<String>,
    pub http_auth_type: Option<HttpAuthType>,
    pub http_method: Option<HttpMethod>,
    pub alert_contacts: Option<Vec<AlertContactAssignment>>,
    pub mwindows: Option<Vec<i64>>,
    pub custom_http_headers: Option<BTreeMap<String, String>>,
    pub ignore_ssl_errors: Option<bool>,
    /// `Some(true)` pauses, `Some(false)` resumes.
    pub paused: Option<bool>,
}

impl MonitorUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn pause(id: i64) -> Self {
        Self {
            paused: Some(true),
            ..Self::new(id)
        }
    }

    pub fn resume(id: i64) -> Self {
        Self {
            paused: Some(false),
            ..Self::new(id)
        }
    }
}
