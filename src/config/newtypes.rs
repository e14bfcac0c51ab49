//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use std::fmt;

use crate::error::ConfigError;

/// A validated Paymill private API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use paymill_api::ApiKey;
///
/// let key = ApiKey::new("sk_test_1234").unwrap();
/// assert_eq!(key.as_ref(), "sk_test_1234");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API endpoint URL.
///
/// The endpoint must carry an `http://` or `https://` scheme. A trailing
/// slash is stripped so paths can be appended uniformly.
///
/// # Example
///
/// ```rust
/// use paymill_api::ApiEndpoint;
///
/// let endpoint = ApiEndpoint::new("https://api.paymill.com/v2.1/").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://api.paymill.com/v2.1");
///
/// let live = ApiEndpoint::live();
/// assert_eq!(live.as_ref(), "https://api.paymill.com/v2.1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoint(String);

/// The live API endpoint.
const LIVE_ENDPOINT: &str = "https://api.paymill.com/v2.1";

impl ApiEndpoint {
    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL is empty or
    /// missing an `http://`/`https://` scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::InvalidEndpoint { url });
        }
        Ok(Self(url.trim_end_matches('/').to_string()))
    }

    /// Returns the live API endpoint.
    #[must_use]
    pub fn live() -> Self {
        Self(LIVE_ENDPOINT.to_string())
    }
}

impl AsRef<str> for ApiEndpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for ApiEndpoint {
    fn default() -> Self {
        Self::live()
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
