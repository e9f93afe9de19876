use std::fmt;

/// A remote capability; its name is the endpoint path under the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetAccountDetails,
    GetMonitors,
    NewMonitor,
    EditMonitor,
    DeleteMonitor,
    ResetMonitor,
    GetAlertContacts,
    NewAlertContact,
    EditAlertContact,
    DeleteAlertContact,
    GetMaintenanceWindows,
    NewMaintenanceWindow,
    EditMaintenanceWindow,
    DeleteMaintenanceWindow,
    GetStatusPages,
    NewStatusPage,
    EditStatusPage,
    DeleteStatusPage,
}

impl Operation {
    pub const fn name(self) -> &'static str {
        match self {
            Operation::GetAccountDetails => "getAccountDetails",
            Operation::GetMonitors => "getMonitors",
            Operation::NewMonitor => "newMonitor",
            Operation::EditMonitor => "editMonitor",
            Operation::DeleteMonitor => "deleteMonitor",
            Operation::ResetMonitor => "resetMonitor",
            Operation::GetAlertContacts => "getAlertContacts",
            Operation::NewAlertContact => "newAlertContact",
            Operation::EditAlertContact => "editAlertContact",
            Operation::DeleteAlertContact => "deleteAlertContact",
            Operation::GetMaintenanceWindows => "getMWindows",
            Operation::NewMaintenanceWindow => "newMWindow",
            Operation::EditMaintenanceWindow => "editMWindow",
            Operation::DeleteMaintenanceWindow => "deleteMWindow",
            Operation::GetStatusPages => "getPSPs",
            Operation::NewStatusPage => "newPSP",
            Operation::EditStatusPage => "editPSP",
            Operation::DeleteStatusPage => "deletePSP",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
