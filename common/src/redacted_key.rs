//! The API credential, with redacted Debug/Display output.

use crate::RedactError;

use std::fmt;

use serde::ser::Error;
use zeroize::Zeroize;

/// The account API key attached to every outbound request.
///
/// The value never shows up in logs, debug output or error messages, and is
/// wiped from memory when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedApiKey {
    inner: String,
}

impl RedactedApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { inner: key.into() }
    }

    /// The raw key, for placing on the wire.
    ///
    /// # Security Note
    /// Only call this when building a request body.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Key length in characters (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// True when the key is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.inner.trim().is_empty()
    }
}

impl From<String> for RedactedApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for RedactedApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Debug for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedApiKey([REDACTED])")
    }
}

impl fmt::Display for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for RedactedApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Serializing would leak the key into JSON output.
impl serde::Serialize for RedactedApiKey {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::serialization(
            "RedactedApiKey cannot be serialized - use expose() explicitly",
        )))
    }
}
