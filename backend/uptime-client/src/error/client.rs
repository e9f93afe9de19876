use common::{ErrorLocation, HttpStatusCode};
use models::ApiError;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures inside the client, before they are settled into an [`ApiError`]
/// at the operation boundary.
#[derive(Debug, ThisError)]
pub enum ClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status_code} - {message} {location}")]
    Server {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    /// The remote answered `fail`.
    #[error("Remote Error: {} {location}", .error.kind)]
    Remote {
        error: ApiError,
        location: ErrorLocation,
    },

    /// Refused locally, nothing was sent.
    #[error("Rejected: {} {location}", .error.kind)]
    Rejected {
        error: ApiError,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        ClientError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote(error: ApiError) -> Self {
        ClientError::Remote {
            error,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(error: ApiError) -> Self {
        ClientError::Rejected {
            error,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_http_response(status_code: u16, body: impl Into<String>) -> Self {
        ClientError::Server {
            status_code: HttpStatusCode(status_code),
            message: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Error category for logs.
    pub fn category(&self) -> &'static str {
        match self {
            ClientError::Http { is_timeout: true, .. } => "timeout",
            ClientError::Http { is_connection: true, .. } => "connection",
            ClientError::Http { .. } => "http",
            ClientError::Server { status_code, .. } => status_code.category(),
            ClientError::Json { .. } => "json",
            ClientError::UrlParse { .. } => "url_parse",
            ClientError::Decode { .. } => "decode",
            ClientError::Remote { .. } => "remote",
            ClientError::Rejected { .. } => "rejected",
        }
    }
}

impl From<url::ParseError> for ClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ClientError::Http {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// The single conversion point from internal failures to the public error
/// value: remote and local rejections pass through untouched, everything else
/// becomes a `system` error carrying the failure message.
impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Remote { error, .. } | ClientError::Rejected { error, .. } => error,
            other => ApiError::system(other.to_string()),
        }
    }
}
