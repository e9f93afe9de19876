//! Async client for the uptime monitoring API v2.
//!
//! Typed requests from `models` are encoded by [`codec`], posted by
//! [`gateway`], and decoded back into typed payloads. [`UptimeClient`] is the
//! entry point; every operation resolves to `Result<Payload, models::ApiError>`.

pub mod canned;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod gateway;

#[cfg(test)]
mod tests;

pub use client::UptimeClient;
pub use config::ClientConfig;
pub use gateway::Operation;

pub const UPTIME_API_HOSTNAME: &str = "api.uptimerobot.com";
pub const UPTIME_API_BASE_URL: &str =
    const_format::concatcp!("https://", UPTIME_API_HOSTNAME, "/v2/");
