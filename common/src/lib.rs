//! Shared building blocks for the uptime client workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error locations, credential handling, HTTP status helpers
//! - **models**: wire data structures for the monitoring API
//! - **uptime-client**: codec, transport and operation facade
//! - **uptimectl**: command-line front end wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
