//! Fixed failures for requests refused before reaching the network.

use crate::gateway::Operation;

use models::{ApiError, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CannedError {
    NoFriendlyName,
    NoValue,
    NoUrl,
    IncorrectParameters,
    NotFound,
}

impl CannedError {
    pub const fn kind(self) -> ErrorKind {
        match self {
            CannedError::NoFriendlyName => ErrorKind::NoFriendlyName,
            CannedError::NoValue => ErrorKind::NoValue,
            CannedError::NoUrl => ErrorKind::NoUrl,
            CannedError::IncorrectParameters => ErrorKind::IncorrectParameters,
            CannedError::NotFound => ErrorKind::NotFound,
        }
    }

    pub const fn explanation(self) -> &'static str {
        match self {
            CannedError::NoFriendlyName => "a friendly name is required",
            CannedError::NoValue => "a value is required",
            CannedError::NoUrl => "a URL is required",
            CannedError::IncorrectParameters => "the parameters are incorrect",
            CannedError::NotFound => "no entity with the given id exists",
        }
    }

    /// The failure as reported for `operation`.
    pub fn build(self, operation: Operation) -> ApiError {
        ApiError::new(
            self.kind(),
            format!("{operation}: {}", self.explanation()),
        )
    }

    /// Client-side kinds map back to their canned error; remote kinds do not.
    pub fn from_kind(kind: ErrorKind) -> Option<Self> {
        match kind {
            ErrorKind::NoFriendlyName => Some(CannedError::NoFriendlyName),
            ErrorKind::NoValue => Some(CannedError::NoValue),
            ErrorKind::NoUrl => Some(CannedError::NoUrl),
            ErrorKind::IncorrectParameters => Some(CannedError::IncorrectParameters),
            ErrorKind::NotFound => Some(CannedError::NotFound),
            _ => None,
        }
    }
}

/// Lookup before a mutation found nothing with `id`.
pub fn not_found(operation: Operation, id: i64) -> ApiError {
    let mut error = CannedError::NotFound.build(operation);
    error.parameter_name = Some(String::from("id"));
    error.message = Some(format!(
        "{operation}: {} ({id})",
        CannedError::NotFound.explanation()
    ));
    error
}
