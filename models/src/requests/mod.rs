//! Request parameter objects, one per remote operation.
//!
//! Each field's default means "leave it off the wire". The codec in
//! `uptime-client` decides how each field is encoded.

pub mod alert_contacts;
pub mod builder;
pub mod maintenance_windows;
pub mod monitors;
pub mod status_pages;

pub use alert_contacts::{AlertContactUpdate, AlertContactsRequest, NewAlertContact};
pub use maintenance_windows::{
    MaintenanceWindowUpdate, MaintenanceWindowsRequest, NewMaintenanceWindow,
};
pub use monitors::{AlertContactAssignment, MonitorUpdate, MonitorsRequest, NewMonitor};
pub use status_pages::{NewStatusPage, StatusPageUpdate, StatusPagesRequest};

/// `getAccountDetails` takes nothing beyond the credential.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountDetailsRequest;
