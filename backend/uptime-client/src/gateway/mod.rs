//! HTTP transport: one form-encoded POST per operation.

mod operation;

pub use operation::Operation;

use crate::error::client::ClientError;

use std::time::Duration;

use log::debug;
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use url::Url;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const NO_CACHE: &str = "no-cache";

/// Sends encoded bodies to `<base>/<operation>` and hands back the raw text.
///
/// The body is never inspected or logged; it carries the credential.
#[derive(Debug, Clone)]
pub struct Gateway {
    base_url: Url,
    client: Client,
}

impl Gateway {
    pub fn new(base_url_str: &str, timeout: Duration) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url_str)?;
        // Url::join drops the last path segment unless it ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, operation: Operation) -> Result<Url, ClientError> {
        Ok(self.base_url.join(operation.name())?)
    }

    pub async fn send(&self, operation: Operation, body: String) -> Result<String, ClientError> {
        let url = self.endpoint(operation)?;
        debug!("POST {operation} ({} byte body)", body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(CACHE_CONTROL, NO_CACHE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::from_http_response(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        let text = response.text().await?;
        debug!("{operation} answered with {} bytes", text.len());
        Ok(text)
    }
}
