//! The operation facade: one async method per remote operation.
//!
//! Every public method resolves to `Result<Payload, ApiError>`. Internally
//! failures travel as [`ClientError`] and are converted once, in [`settle`].
//! Updates, deletes and resets look the entity up first and refuse to send
//! anything when it does not exist.

mod account;
mod alert_contacts;
pub(crate) mod diff;
mod maintenance_windows;
mod monitors;
mod status_pages;

use crate::canned::{self, CannedError};
use crate::codec::{self, EncodeForm};
use crate::config::ClientConfig;
use crate::error::client::ClientError;
use crate::gateway::{Gateway, Operation};

use common::RedactedApiKey;
use models::ApiError;

use std::sync::Arc;

use log::warn;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct UptimeClient {
    gateway: Gateway,
    api_key: Arc<RedactedApiKey>,
}

impl UptimeClient {
    /// Client against the public endpoint with default settings.
    pub fn new(api_key: impl Into<RedactedApiKey>) -> Result<Self, ClientError> {
        Self::with_config(api_key, &ClientConfig::default())
    }

    pub fn with_config(
        api_key: impl Into<RedactedApiKey>,
        config: &ClientConfig,
    ) -> Result<Self, ClientError> {
        let gateway = Gateway::new(&config.base_url, config.timeout())?;
        Ok(Self {
            gateway,
            api_key: Arc::new(api_key.into()),
        })
    }

    pub fn base_url(&self) -> &url::Url {
        self.gateway.base_url()
    }

    async fn call<R: EncodeForm + ?Sized>(&self, request: &R) -> Result<String, ClientError> {
        let body = codec::encode(&self.api_key, request);
        self.gateway.send(request.operation(), body).await
    }

    async fn fetch_page<T, R>(&self, request: &R) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        R: EncodeForm + ?Sized,
    {
        let body = self.call(request).await?;
        codec::decode_page(&body)
    }

    async fn fetch_entity<T, R>(&self, request: &R, field_names: &[&str]) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        R: EncodeForm + ?Sized,
    {
        let body = self.call(request).await?;
        codec::decode_entity(&body, field_names)
    }
}

/// Refuse `operation` locally.
#[track_caller]
fn reject(operation: Operation, canned: CannedError) -> ClientError {
    ClientError::rejected(canned.build(operation))
}

/// The precondition lookup came back without the entity.
#[track_caller]
fn missing(operation: Operation, id: i64) -> ClientError {
    ClientError::rejected(canned::not_found(operation, id))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// An update may leave the name alone but never blank it out.
fn blanks_name(friendly_name: Option<&str>) -> bool {
    friendly_name.is_some_and(is_blank)
}

/// Convert an operation's internal outcome into its public result.
fn settle<T>(operation: Operation, result: Result<T, ClientError>) -> Result<T, ApiError> {
    result.map_err(|error| {
        let category = error.category();
        let api_error = ApiError::from(error);
        warn!("{operation} failed [{category}]: {}", api_error.kind);
        api_error
    })
}
