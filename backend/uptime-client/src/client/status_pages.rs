use super::{UptimeClient, blanks_name, diff, is_blank, missing, reject, settle};
use crate::canned::CannedError;
use crate::codec::{ById, fields};
use crate::error::client::ClientError;
use crate::gateway::Operation;

use models::{
    ApiError, NewStatusPage, StatusPage, StatusPageRef, StatusPageUpdate, StatusPagesPage,
    StatusPagesRequest,
};

impl UptimeClient {
    pub async fn get_status_pages(
        &self,
        request: &StatusPagesRequest,
    ) -> Result<StatusPagesPage, ApiError> {
        settle(Operation::GetStatusPages, self.fetch_page(request).await)
    }

    pub async fn get_all_status_pages(&self) -> Result<StatusPagesPage, ApiError> {
        self.get_status_pages(&StatusPagesRequest::default()).await
    }

    pub async fn get_status_page(&self, id: i64) -> Result<StatusPagesPage, ApiError> {
        self.get_status_pages(&StatusPagesRequest::for_id(id)).await
    }

    pub async fn get_status_pages_by_ids(&self, ids: &[i64]) -> Result<StatusPagesPage, ApiError> {
        self.get_status_pages(&StatusPagesRequest::for_ids(ids.iter().copied()))
            .await
    }

    pub async fn create_status_page(
        &self,
        page: &NewStatusPage,
    ) -> Result<StatusPageRef, ApiError> {
        let operation = Operation::NewStatusPage;
        let result = if is_blank(&page.friendly_name) {
            Err(reject(operation, CannedError::NoFriendlyName))
        } else if page.monitors.wire_value().is_none() {
            Err(reject(operation, CannedError::IncorrectParameters))
        } else {
            self.fetch_entity(page, fields::STATUS_PAGE).await
        };
        settle(operation, result)
    }

    pub async fn update_status_page(
        &self,
        update: &StatusPageUpdate,
    ) -> Result<StatusPageRef, ApiError> {
        settle(
            Operation::EditStatusPage,
            self.try_update_status_page(update).await,
        )
    }

    pub async fn delete_status_page(&self, id: i64) -> Result<StatusPageRef, ApiError> {
        settle(
            Operation::DeleteStatusPage,
            self.try_delete_status_page(id).await,
        )
    }

    async fn try_update_status_page(
        &self,
        update: &StatusPageUpdate,
    ) -> Result<StatusPageRef, ClientError> {
        let operation = Operation::EditStatusPage;
        if blanks_name(update.friendly_name.as_deref()) {
            return Err(reject(operation, CannedError::NoFriendlyName));
        }
        let current = self.lookup_status_page(operation, update.id).await?;
        let changes = diff::status_page_changes(update, &current);
        self.fetch_entity(&changes, fields::STATUS_PAGE).await
    }

    async fn try_delete_status_page(&self, id: i64) -> Result<StatusPageRef, ClientError> {
        let operation = Operation::DeleteStatusPage;
        self.lookup_status_page(operation, id).await?;
        self.fetch_entity(&ById::new(operation, id), fields::STATUS_PAGE)
            .await
    }

    async fn lookup_status_page(
        &self,
        operation: Operation,
        id: i64,
    ) -> Result<StatusPage, ClientError> {
        let page: StatusPagesPage = self.fetch_page(&StatusPagesRequest::for_id(id)).await?;
        page.psps
            .into_iter()
            .find(|status_page| status_page.id == id)
            .ok_or_else(|| missing(operation, id))
    }
}
