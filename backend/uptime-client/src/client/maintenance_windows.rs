use super::{UptimeClient, blanks_name, diff, is_blank, missing, reject, settle};
use crate::canned::CannedError;
use crate::codec::{ById, fields};
use crate::error::client::ClientError;
use crate::gateway::Operation;

use models::{
    ApiError, MaintenanceWindow, MaintenanceWindowRef, MaintenanceWindowType,
    MaintenanceWindowUpdate, MaintenanceWindowsPage, MaintenanceWindowsRequest,
    NewMaintenanceWindow,
};

/// One-off windows start at an instant, recurring ones at a time of day.
fn window_violation(window: &NewMaintenanceWindow) -> Option<CannedError> {
    if is_blank(&window.friendly_name) {
        return Some(CannedError::NoFriendlyName);
    }
    if window.window_type.needs_days() && window.value.as_deref().is_none_or(is_blank) {
        return Some(CannedError::NoValue);
    }
    let start_matches = match window.window_type {
        MaintenanceWindowType::Once => window.start_time.is_epoch(),
        MaintenanceWindowType::Unrecognized(_) => false,
        _ => !window.start_time.is_epoch(),
    };
    (!start_matches).then_some(CannedError::IncorrectParameters)
}

impl UptimeClient {
    pub async fn get_maintenance_windows(
        &self,
        request: &MaintenanceWindowsRequest,
    ) -> Result<MaintenanceWindowsPage, ApiError> {
        settle(
            Operation::GetMaintenanceWindows,
            self.fetch_page(request).await,
        )
    }

    pub async fn get_all_maintenance_windows(&self) -> Result<MaintenanceWindowsPage, ApiError> {
        self.get_maintenance_windows(&MaintenanceWindowsRequest::default())
            .await
    }

    pub async fn get_maintenance_window(
        &self,
        id: i64,
    ) -> Result<MaintenanceWindowsPage, ApiError> {
        self.get_maintenance_windows(&MaintenanceWindowsRequest::for_id(id))
            .await
    }

    pub async fn get_maintenance_windows_by_ids(
        &self,
        ids: &[i64],
    ) -> Result<MaintenanceWindowsPage, ApiError> {
        self.get_maintenance_windows(&MaintenanceWindowsRequest::for_ids(ids.iter().copied()))
            .await
    }

    pub async fn create_maintenance_window(
        &self,
        window: &NewMaintenanceWindow,
    ) -> Result<MaintenanceWindowRef, ApiError> {
        let operation = Operation::NewMaintenanceWindow;
        let result = match window_violation(window) {
            Some(canned) => Err(reject(operation, canned)),
            None => self.fetch_entity(window, fields::MAINTENANCE_WINDOW).await,
        };
        settle(operation, result)
    }

    pub async fn update_maintenance_window(
        &self,
        update: &MaintenanceWindowUpdate,
    ) -> Result<MaintenanceWindowRef, ApiError> {
        settle(
            Operation::EditMaintenanceWindow,
            self.try_update_maintenance_window(update).await,
        )
    }

    pub async fn delete_maintenance_window(
        &self,
        id: i64,
    ) -> Result<MaintenanceWindowRef, ApiError> {
        settle(
            Operation::DeleteMaintenanceWindow,
            self.try_delete_maintenance_window(id).await,
        )
    }

    async fn try_update_maintenance_window(
        &self,
        update: &MaintenanceWindowUpdate,
    ) -> Result<MaintenanceWindowRef, ClientError> {
        let operation = Operation::EditMaintenanceWindow;
        if blanks_name(update.friendly_name.as_deref()) {
            return Err(reject(operation, CannedError::NoFriendlyName));
        }
        let current = self.lookup_maintenance_window(operation, update.id).await?;
        let changes = diff::maintenance_window_changes(update, &current);
        self.fetch_entity(&changes, fields::MAINTENANCE_WINDOW)
            .await
    }

    async fn try_delete_maintenance_window(
        &self,
        id: i64,
    ) -> Result<MaintenanceWindowRef, ClientError> {
        let operation = Operation::DeleteMaintenanceWindow;
        self.lookup_maintenance_window(operation, id).await?;
        self.fetch_entity(&ById::new(operation, id), fields::MAINTENANCE_WINDOW)
            .await
    }

    async fn lookup_maintenance_window(
        &self,
        operation: Operation,
        id: i64,
    ) -> Result<MaintenanceWindow, ClientError> {
        let page: MaintenanceWindowsPage = self
            .fetch_page(&MaintenanceWindowsRequest::for_id(id))
            .await?;
        page.mwindows
            .into_iter()
            .find(|window| window.id == id)
            .ok_or_else(|| missing(operation, id))
    }
}
