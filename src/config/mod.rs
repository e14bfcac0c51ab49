//! Configuration types for the Paymill API client.
//!
//! The main types in this module are:
//!
//! - [`PaymillConfig`]: The configuration struct holding credentials and endpoint
//! - [`PaymillConfigBuilder`]: A builder for constructing [`PaymillConfig`] instances
//! - [`ApiKey`]: A validated private API key newtype with masked debug output
//! - [`ApiEndpoint`]: A validated endpoint URL newtype
//!
//! Configuration is instance-based and passed explicitly into the HTTP
//! client; there is no process-wide state.
//!
//! # Example
//!
//! ```rust
//! use paymill_api::{ApiKey, PaymillConfig};
//!
//! let config = PaymillConfig::builder()
//!     .api_key(ApiKey::new("sk_test_1234").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiEndpoint, ApiKey};

use crate::error::ConfigError;

/// Configuration for the Paymill API client.
///
/// Holds the private API key used for HTTP basic authentication and the
/// endpoint the client talks to. Read-only after construction.
///
/// # Thread Safety
///
/// `PaymillConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use paymill_api::{ApiEndpoint, ApiKey, PaymillConfig};
///
/// let config = PaymillConfig::builder()
///     .api_key(ApiKey::new("sk_test_1234").unwrap())
///     .endpoint(ApiEndpoint::new("https://api.paymill.com/v2.1").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint().as_ref(), "https://api.paymill.com/v2.1");
/// ```
#[derive(Clone, Debug)]
pub struct PaymillConfig {
    api_key: ApiKey,
    endpoint: ApiEndpoint,
    user_agent_prefix: Option<String>,
}

impl PaymillConfig {
    /// Creates a new builder for constructing a `PaymillConfig`.
    #[must_use]
    pub fn builder() -> PaymillConfigBuilder {
        PaymillConfigBuilder::new()
    }

    /// Returns the private API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PaymillConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PaymillConfig>();
};

/// Builder for constructing [`PaymillConfig`] instances.
///
/// The only required field is `api_key`; the endpoint defaults to the live
/// API.
///
/// # Example
///
/// ```rust
/// use paymill_api::{ApiKey, PaymillConfig};
///
/// let config = PaymillConfig::builder()
///     .api_key(ApiKey::new("sk_test_1234").unwrap())
///     .user_agent_prefix("MyShop/2.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct PaymillConfigBuilder {
    api_key: Option<ApiKey>,
    endpoint: Option<ApiEndpoint>,
    user_agent_prefix: Option<String>,
}

impl PaymillConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the private API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the API endpoint. Defaults to [`ApiEndpoint::live`].
    #[must_use]
    pub fn endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` was not set.
    pub fn build(self) -> Result<PaymillConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(PaymillConfig {
            api_key,
            endpoint: self.endpoint.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = PaymillConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_defaults_to_live_endpoint() {
        let config = PaymillConfig::builder()
            .api_key(ApiKey::new("sk_test_1234").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.endpoint(), &ApiEndpoint::live());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_accepts_custom_endpoint() {
        let config = PaymillConfig::builder()
            .api_key(ApiKey::new("sk_test_1234").unwrap())
            .endpoint(ApiEndpoint::new("http://localhost:9090").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.endpoint().as_ref(), "http://localhost:9090");
    }

    #[test]
    fn test_builder_stores_user_agent_prefix() {
        let config = PaymillConfig::builder()
            .api_key(ApiKey::new("sk_test_1234").unwrap())
            .user_agent_prefix("MyShop/2.0")
            .build()
            .unwrap();

        assert_eq!(config.user_agent_prefix(), Some("MyShop/2.0"));
    }
}
