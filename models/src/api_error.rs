//! The failure value every operation resolves to.

use crate::wire;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Taxonomy tag for an [`ApiError`].
///
/// The first group mirrors the `type` strings the remote reports; `System`
/// covers transport and decode failures plus any remote type this client does
/// not know. The last group is raised locally before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidParameter,
    MissingParameter,
    NotFound,
    AlreadyExists,
    Internal,
    System,
    NoFriendlyName,
    NoValue,
    NoUrl,
    IncorrectParameters,
}

impl ErrorKind {
    /// Map the remote `type` string; unknown or missing types become `System`.
    pub fn from_wire(type_name: Option<&str>) -> Self {
        match type_name.map(str::trim) {
            Some("invalid_parameter") => ErrorKind::InvalidParameter,
            Some("missing_parameter") => ErrorKind::MissingParameter,
            Some("not_found") => ErrorKind::NotFound,
            Some("already_exists") => ErrorKind::AlreadyExists,
            Some("internal") => ErrorKind::Internal,
            _ => ErrorKind::System,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidParameter => "invalid_parameter",
            ErrorKind::MissingParameter => "missing_parameter",
            ErrorKind::NotFound => "not_found",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::Internal => "internal",
            ErrorKind::System => "system",
            ErrorKind::NoFriendlyName => "no_friendly_name",
            ErrorKind::NoValue => "no_value",
            ErrorKind::NoUrl => "no_url",
            ErrorKind::IncorrectParameters => "incorrect_parameters",
        }
    }

    /// Raised by validation in this client rather than by the remote.
    pub fn is_client_side(self) -> bool {
        matches!(
            self,
            ErrorKind::NoFriendlyName
                | ErrorKind::NoValue
                | ErrorKind::NoUrl
                | ErrorKind::IncorrectParameters
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed operation.
///
/// `parameter_name` and `passed_value` are only ever filled from a remote
/// `fail` response. `passed_value` may echo the credential back (an invalid
/// key is reported that way), so it is left out of `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireApiError")]
pub struct ApiError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    #[serde(rename = "parameter_name")]
    pub parameter_name: Option<String>,
    #[serde(rename = "passed_value")]
    pub passed_value: Option<String>,
    #[serde(rename = "message")]
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            parameter_name: None,
            passed_value: None,
            message: Some(message.into()),
        }
    }

    /// Transport, decode and other unexpected failures.
    pub fn system(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::System, message)
    }

    pub fn is_client_side(&self) -> bool {
        self.kind.is_client_side()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(parameter) = &self.parameter_name {
            write!(f, " (parameter: {parameter})")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[derive(Deserialize)]
struct WireApiError {
    #[serde(rename = "type", default, deserialize_with = "wire::opt_string")]
    type_name: Option<String>,
    #[serde(rename = "parameter_name", default, deserialize_with = "wire::opt_string")]
    parameter_name: Option<String>,
    #[serde(rename = "passed_value", default, deserialize_with = "wire::opt_string")]
    passed_value: Option<String>,
    #[serde(rename = "message", default, deserialize_with = "wire::opt_string")]
    message: Option<String>,
}

impl From<WireApiError> for ApiError {
    fn from(raw: WireApiError) -> Self {
        Self {
            kind: ErrorKind::from_wire(raw.type_name.as_deref()),
            parameter_name: raw.parameter_name,
            passed_value: raw.passed_value,
            message: raw.message,
        }
    }
}
