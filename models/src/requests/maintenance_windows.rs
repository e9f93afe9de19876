use crate::enums::MaintenanceWindowType;
use crate::pagination::PageParams;
use crate::time::StartTime;
use crate::wire;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceWindowsRequest {
    pub mwindows: Vec<i64>,
    pub page: PageParams,
}

impl MaintenanceWindowsRequest {
    pub fn for_id(id: i64) -> Self {
        Self::for_ids([id])
    }

    pub fn for_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            mwindows: ids.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMaintenanceWindow {
    pub friendly_name: String,
    pub window_type: MaintenanceWindowType,
    /// Day list, required for weekly and monthly windows.
    pub value: Option<String>,
    pub start_time: StartTime,
    /// Minutes.
    pub duration: i64,
}

impl NewMaintenanceWindow {
    pub fn once(friendly_name: impl Into<String>, start_time: StartTime, duration: i64) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            window_type: MaintenanceWindowType::Once,
            value: None,
            start_time,
            duration,
        }
    }

    pub fn daily(friendly_name: impl Into<String>, start_time: StartTime, duration: i64) -> Self {
        Self {
            window_type: MaintenanceWindowType::Daily,
            ..Self::once(friendly_name, start_time, duration)
        }
    }

    /// `days` are ISO weekdays, 1 = Monday.
    pub fn weekly(
        friendly_name: impl Into<String>,
        days: &[u8],
        start_time: StartTime,
        duration: i64,
    ) -> Self {
        Self {
            window_type: MaintenanceWindowType::Weekly,
            value: Some(wire::hyphen_join(days)),
            ..Self::once(friendly_name, start_time, duration)
        }
    }

    /// `days` are days of the month; -1 is the last day.
    pub fn monthly(
        friendly_name: impl Into<String>,
        days: &[i8],
        start_time: StartTime,
        duration: i64,
    ) -> Self {
        Self {
            window_type: MaintenanceWindowType::Monthly,
            value: Some(wire::hyphen_join(days)),
            ..Self::once(friendly_name, start_time, duration)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceWindowUpdate {
    pub id: i64,
    pub friendly_name: Option<String>,
    pub value: Option<String>,
    pub start_time: Option<StartTime>,
    pub duration: Option<i64>,
}

impl MaintenanceWindowUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}
