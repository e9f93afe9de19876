use super::{UptimeClient, settle};
use crate::codec::fields;
use crate::gateway::Operation;

use models::{AccountDetails, AccountDetailsRequest, ApiError};

impl UptimeClient {
    pub async fn get_account_details(&self) -> Result<AccountDetails, ApiError> {
        let result = self
            .fetch_entity(&AccountDetailsRequest, fields::ACCOUNT)
            .await;
        settle(Operation::GetAccountDetails, result)
    }
}
