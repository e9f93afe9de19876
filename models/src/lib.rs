//! Wire models for the uptime monitoring API.
//!
//! Pure data: entities decoded from responses, request parameter objects,
//! and the error value every failed operation resolves to. Encoding the
//! requests onto the wire lives in `uptime-client`.
//!
//! Every decoded field declares its snake_case wire name explicitly. Fields
//! missing from a payload decode to `None`, never to zero.

pub mod account;
pub mod alert_contact;
pub mod api_error;
pub mod durations;
pub mod enums;
pub mod error;
pub mod maintenance_window;
pub mod monitor;
pub mod pagination;
pub mod requests;
pub mod status_page;
pub mod time;
pub mod wire;

#[cfg(test)]
mod tests;

pub use account::AccountDetails;
pub use alert_contact::{AlertContact, AlertContactRef, AlertContactsPage};
pub use api_error::{ApiError, ErrorKind};
pub use durations::UptimeDurations;
pub use enums::{
    AlertContactStatus, AlertContactType, HttpAuthType, HttpMethod, KeywordCaseType, KeywordType,
    LogType, MaintenanceWindowStatus, MaintenanceWindowType, MonitorStatus, MonitorSubType,
    MonitorType, PostContentType, PostType, StatusPageSort, StatusPageStatus,
};
pub use error::model_error::ModelError;
pub use maintenance_window::{MaintenanceWindow, MaintenanceWindowRef, MaintenanceWindowsPage};
pub use monitor::{
    LogReason, Monitor, MonitorAlertContact, MonitorLog, MonitorRef, MonitorsPage, ResponseTime,
    SslInfo,
};
pub use pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET, PageParams, Pagination};
pub use requests::builder::NewMonitorBuilder;
pub use requests::{
    AccountDetailsRequest, AlertContactAssignment, AlertContactUpdate, AlertContactsRequest,
    MaintenanceWindowUpdate, MaintenanceWindowsRequest, MonitorUpdate, MonitorsRequest,
    NewAlertContact, NewMaintenanceWindow, NewMonitor, NewStatusPage, StatusPageUpdate,
    StatusPagesRequest,
};
pub use status_page::{StatusPage, StatusPageMonitors, StatusPageRef, StatusPagesPage};
pub use time::{DateRange, StartTime};

pub use common::ErrorLocation;
