use crate::api_error::ErrorKind;
use crate::enums::{HttpAuthType, KeywordType, MonitorSubType, MonitorType};
use crate::error::model_error::ModelError;
use crate::requests::monitors::{AlertContactAssignment, NewMonitor};

/// Builder for creating validated NewMonitor instances.
///
/// Fluent alternative to filling in [`NewMonitor`] by hand; `build()` applies
/// the same rules the client checks before sending `newMonitor`.
#[derive(Debug, Default)]
pub struct NewMonitorBuilder {
    friendly_name: Option<String>,
    url: Option<String>,
    monitor_type: Option<MonitorType>,
    sub_type: Option<MonitorSubType>,
    port: Option<i64>,
    keyword: Option<(KeywordType, String)>,
    interval: Option<i64>,
    timeout: Option<i64>,
    http_auth: Option<(String, String, HttpAuthType)>,
    alert_contacts: Vec<AlertContactAssignment>,
    mwindows: Vec<i64>,
    headers: Vec<(String, String)>,
    ignore_ssl_errors: bool,
}

impl NewMonitorBuilder {
    pub fn with_friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_type(mut self, monitor_type: MonitorType) -> Self {
        self.monitor_type = Some(monitor_type);
        self
    }

    pub fn with_sub_type(mut self, sub_type: MonitorSubType) -> Self {
        self.sub_type = Some(sub_type);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(i64::from(port));
        self
    }

    pub fn with_keyword(mut self, keyword_type: KeywordType, value: impl Into<String>) -> Self {
        self.keyword = Some((keyword_type, value.into()));
        self
    }

    pub fn with_interval_secs(mut self, seconds: i64) -> Self {
        self.interval = Some(seconds);
        self
    }

    pub fn with_timeout_secs(mut self, seconds: i64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    pub fn with_http_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        auth_type: HttpAuthType,
    ) -> Self {
        self.http_auth = Some((username.into(), password.into(), auth_type));
        self
    }

    pub fn with_alert_contact(mut self, assignment: AlertContactAssignment) -> Self {
        self.alert_contacts.push(assignment);
        self
    }

    pub fn with_mwindow(mut self, id: i64) -> Self {
        self.mwindows.push(id);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn ignore_ssl_errors(mut self, ignore: bool) -> Self {
        self.ignore_ssl_errors = ignore;
        self
    }

    /// Build the NewMonitor with validation.
    #[track_caller]
    pub fn build(self) -> Result<NewMonitor, ModelError> {
        let friendly_name = self
            .friendly_name
            .ok_or_else(|| ModelError::validation("Friendly name is required"))?;

        let monitor_type = self
            .monitor_type
            .ok_or_else(|| ModelError::validation("Monitor type is required"))?;

        if let Some(interval) = self.interval
            && interval <= 0
        {
            return Err(ModelError::validation(format!(
                "Interval must be positive, got {interval}"
            )));
        }

        let mut monitor =
            NewMonitor::new(friendly_name, self.url.unwrap_or_default(), monitor_type);
        monitor.sub_type = self.sub_type;
        monitor.port = self.port;
        if let Some((keyword_type, value)) = self.keyword {
            monitor.keyword_type = Some(keyword_type);
            monitor.keyword_value = Some(value);
        }
        monitor.interval = self.interval;
        monitor.timeout = self.timeout;
        if let Some((username, password, auth_type)) = self.http_auth {
            monitor.http_username = Some(username);
            monitor.http_password = Some(password);
            monitor.http_auth_type = Some(auth_type);
        }
        monitor.alert_contacts = self.alert_contacts;
        monitor.mwindows = self.mwindows;
        monitor.custom_http_headers = self.headers.into_iter().collect();
        monitor.ignore_ssl_errors = self.ignore_ssl_errors;

        match monitor.violation() {
            None => Ok(monitor),
            Some(ErrorKind::NoFriendlyName) => {
                Err(ModelError::validation("Friendly name cannot be empty"))
            }
            Some(ErrorKind::NoUrl) => Err(ModelError::validation(format!(
                "URL is required for monitor type {monitor_type}"
            ))),
            Some(_) => Err(ModelError::validation(format!(
                "Incomplete settings for monitor type {monitor_type}"
            ))),
        }
    }
}
