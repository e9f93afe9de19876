use crate::enums::{MaintenanceWindowStatus, MaintenanceWindowType};
use crate::pagination::Pagination;
use crate::time::StartTime;
use crate::wire;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    #[serde(rename = "id", deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(rename = "user", default, deserialize_with = "wire::opt_i64")]
    pub user: Option<i64>,
    #[serde(rename = "type", default, deserialize_with = "wire::opt_code")]
    pub window_type: Option<MaintenanceWindowType>,
    #[serde(rename = "friendly_name", default)]
    pub friendly_name: Option<String>,
    #[serde(rename = "start_time", default, deserialize_with = "wire::opt_start_time")]
    pub start_time: Option<StartTime>,
    /// Minutes.
    #[serde(rename = "duration", default, deserialize_with = "wire::opt_i64")]
    pub duration: Option<i64>,
    /// Day list for weekly (`1-7`) and monthly (`1-31`, `-1` = last) windows.
    #[serde(rename = "value", default, deserialize_with = "wire::opt_string")]
    pub value: Option<String>,
    #[serde(rename = "status", default, deserialize_with = "wire::opt_code")]
    pub status: Option<MaintenanceWindowStatus>,
}

/// `getMWindows` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceWindowsPage {
    #[serde(rename = "pagination", default)]
    pub pagination: Option<Pagination>,
    #[serde(rename = "mwindows", default)]
    pub mwindows: Vec<MaintenanceWindow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceWindowRef {
    #[serde(rename = "id", deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(rename = "status", default, deserialize_with = "wire::opt_code")]
    pub status: Option<MaintenanceWindowStatus>,
}
