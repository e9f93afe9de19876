use super::{UptimeClient, blanks_name, diff, missing, reject, settle};
use crate::canned::CannedError;
use crate::codec::{ById, fields};
use crate::error::client::ClientError;
use crate::gateway::Operation;

use models::{
    ApiError, Monitor, MonitorRef, MonitorUpdate, MonitorsPage, MonitorsRequest, NewMonitor,
};

impl UptimeClient {
    pub async fn get_monitors(&self, request: &MonitorsRequest) -> Result<MonitorsPage, ApiError> {
        settle(Operation::GetMonitors, self.fetch_page(request).await)
    }

    /// First page of every monitor on the account.
    pub async fn get_all_monitors(&self) -> Result<MonitorsPage, ApiError> {
        self.get_monitors(&MonitorsRequest::all()).await
    }

    pub async fn get_monitor(&self, id: i64) -> Result<MonitorsPage, ApiError> {
        self.get_monitors(&MonitorsRequest::for_id(id)).await
    }

    /// Monitors in the order the remote returns them.
    pub async fn get_monitors_by_ids(&self, ids: &[i64]) -> Result<MonitorsPage, ApiError> {
        self.get_monitors(&MonitorsRequest::for_ids(ids.iter().copied()))
            .await
    }

    pub async fn create_monitor(&self, monitor: &NewMonitor) -> Result<MonitorRef, ApiError> {
        settle(Operation::NewMonitor, self.try_create_monitor(monitor).await)
    }

    /// Sends only the fields that differ from the monitor's current state.
    pub async fn update_monitor(&self, update: &MonitorUpdate) -> Result<MonitorRef, ApiError> {
        settle(Operation::EditMonitor, self.try_update_monitor(update).await)
    }

    pub async fn pause_monitor(&self, id: i64) -> Result<MonitorRef, ApiError> {
        self.update_monitor(&MonitorUpdate::pause(id)).await
    }

    pub async fn resume_monitor(&self, id: i64) -> Result<MonitorRef, ApiError> {
        self.update_monitor(&MonitorUpdate::resume(id)).await
    }

    pub async fn delete_monitor(&self, id: i64) -> Result<MonitorRef, ApiError> {
        let operation = Operation::DeleteMonitor;
        settle(operation, self.try_by_id(operation, id).await)
    }

    /// Clears the monitor's logs and statistics.
    pub async fn reset_monitor(&self, id: i64) -> Result<MonitorRef, ApiError> {
        let operation = Operation::ResetMonitor;
        settle(operation, self.try_by_id(operation, id).await)
    }

    async fn try_create_monitor(&self, monitor: &NewMonitor) -> Result<MonitorRef, ClientError> {
        if let Some(canned) = monitor.violation().and_then(CannedError::from_kind) {
            return Err(reject(Operation::NewMonitor, canned));
        }
        self.fetch_entity(monitor, fields::MONITOR).await
    }

    async fn try_update_monitor(&self, update: &MonitorUpdate) -> Result<MonitorRef, ClientError> {
        let operation = Operation::EditMonitor;
        if blanks_name(update.friendly_name.as_deref()) {
            return Err(reject(operation, CannedError::NoFriendlyName));
        }
        let current = self.lookup_monitor(operation, update.id).await?;
        let changes = diff::monitor_changes(update, &current);
        self.fetch_entity(&changes, fields::MONITOR).await
    }

    async fn try_by_id(&self, operation: Operation, id: i64) -> Result<MonitorRef, ClientError> {
        self.lookup_monitor(operation, id).await?;
        self.fetch_entity(&ById::new(operation, id), fields::MONITOR)
            .await
    }

    /// Current state of monitor `id`, with the sections an update can change.
    async fn lookup_monitor(&self, operation: Operation, id: i64) -> Result<Monitor, ClientError> {
        let request = MonitorsRequest {
            alert_contacts: true,
            mwindows: true,
            custom_http_headers: true,
            ..MonitorsRequest::for_id(id)
        };
        let page: MonitorsPage = self.fetch_page(&request).await?;
        page.monitors
            .into_iter()
            .find(|monitor| monitor.id == id)
            .ok_or_else(|| missing(operation, id))
    }
}
