use common::ErrorLocation;
use models::ApiError;
use uptime_client::error::{ClientError, ConfigError};

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the command-line front end.
///
/// Only ever printed through `Display`, which leaves out the remote's
/// `passed_value` (it can echo the credential).
#[derive(Debug, Error)]
pub enum UptimectlError {
    /// Local setup: directories, logger, client construction.
    #[error("Uptimectl Error: {message} {location}")]
    Uptimectl {
        message: String,
        location: ErrorLocation,
    },

    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// The operation itself failed, remotely or by local validation.
    #[error("API Error: {error} {location}")]
    Api {
        error: ApiError,
        location: ErrorLocation,
    },

    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },
}

impl UptimectlError {
    #[track_caller]
    pub fn setup(message: impl Into<String>) -> Self {
        UptimectlError::Uptimectl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ApiError> for UptimectlError {
    #[track_caller]
    fn from(error: ApiError) -> Self {
        UptimectlError::Api {
            error,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for UptimectlError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        UptimectlError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for UptimectlError {
    #[track_caller]
    fn from(error: ClientError) -> Self {
        UptimectlError::setup(format!("Failed to build client: {error}"))
    }
}

impl From<serde_json::Error> for UptimectlError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        UptimectlError::Output {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
