use super::{UptimeClient, blanks_name, diff, is_blank, missing, reject, settle};
use crate::canned::CannedError;
use crate::codec::{ById, fields};
use crate::error::client::ClientError;
use crate::gateway::Operation;

use models::{
    AlertContact, AlertContactRef, AlertContactType, AlertContactUpdate, AlertContactsPage,
    AlertContactsRequest, ApiError, NewAlertContact,
};

/// SMS contacts cannot be created through the API.
fn contact_violation(contact: &NewAlertContact) -> Option<CannedError> {
    if contact.contact_type == AlertContactType::Sms || !contact.contact_type.is_recognized() {
        Some(CannedError::IncorrectParameters)
    } else if is_blank(&contact.friendly_name) {
        Some(CannedError::NoFriendlyName)
    } else if is_blank(&contact.value) {
        Some(CannedError::NoValue)
    } else {
        None
    }
}

impl UptimeClient {
    pub async fn get_alert_contacts(
        &self,
        request: &AlertContactsRequest,
    ) -> Result<AlertContactsPage, ApiError> {
        settle(Operation::GetAlertContacts, self.fetch_page(request).await)
    }

    pub async fn get_all_alert_contacts(&self) -> Result<AlertContactsPage, ApiError> {
        self.get_alert_contacts(&AlertContactsRequest::default())
            .await
    }

    pub async fn get_alert_contact(&self, id: i64) -> Result<AlertContactsPage, ApiError> {
        self.get_alert_contacts(&AlertContactsRequest::for_id(id))
            .await
    }

    pub async fn get_alert_contacts_by_ids(
        &self,
        ids: &[i64],
    ) -> Result<AlertContactsPage, ApiError> {
        self.get_alert_contacts(&AlertContactsRequest::for_ids(ids.iter().copied()))
            .await
    }

    pub async fn create_alert_contact(
        &self,
        contact: &NewAlertContact,
    ) -> Result<AlertContactRef, ApiError> {
        let operation = Operation::NewAlertContact;
        let result = match contact_violation(contact) {
            Some(canned) => Err(reject(operation, canned)),
            None => self.fetch_entity(contact, fields::ALERT_CONTACT).await,
        };
        settle(operation, result)
    }

    /// Sends only the fields that differ; an update changing nothing sends
    /// just the id.
    pub async fn update_alert_contact(
        &self,
        update: &AlertContactUpdate,
    ) -> Result<AlertContactRef, ApiError> {
        settle(
            Operation::EditAlertContact,
            self.try_update_alert_contact(update).await,
        )
    }

    pub async fn delete_alert_contact(&self, id: i64) -> Result<AlertContactRef, ApiError> {
        settle(
            Operation::DeleteAlertContact,
            self.try_delete_alert_contact(id).await,
        )
    }

    async fn try_update_alert_contact(
        &self,
        update: &AlertContactUpdate,
    ) -> Result<AlertContactRef, ClientError> {
        let operation = Operation::EditAlertContact;
        if blanks_name(update.friendly_name.as_deref()) {
            return Err(reject(operation, CannedError::NoFriendlyName));
        }
        let current = self.lookup_alert_contact(operation, update.id).await?;
        let changes = diff::alert_contact_changes(update, &current);
        self.fetch_entity(&changes, fields::ALERT_CONTACT).await
    }

    async fn try_delete_alert_contact(&self, id: i64) -> Result<AlertContactRef, ClientError> {
        let operation = Operation::DeleteAlertContact;
        self.lookup_alert_contact(operation, id).await?;
        self.fetch_entity(&ById::new(operation, id), fields::ALERT_CONTACT)
            .await
    }

    async fn lookup_alert_contact(
        &self,
        operation: Operation,
        id: i64,
    ) -> Result<AlertContact, ClientError> {
        let page: AlertContactsPage = self
            .fetch_page(&AlertContactsRequest::for_id(id))
            .await?;
        page.alert_contacts
            .into_iter()
            .find(|contact| contact.id == id)
            .ok_or_else(|| missing(operation, id))
    }
}
