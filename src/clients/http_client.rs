//! HTTP client for Paymill API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the API. The client handles:
//!
//! - Base URL construction from the configured endpoint
//! - HTTP basic authentication with the private API key
//! - Form-encoded bodies for `POST`/`PUT`, query strings for `GET`
//! - Parsing every response body as JSON
//!
//! Requests are issued exactly once; there is no retry logic. A failed call
//! is reported immediately to the caller.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::config::PaymillConfig;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ordered wire-key/value pairs, as produced by the parameter mapping layer.
pub type WireParams = [(&'static str, String)];

/// HTTP client for making requests to the Paymill API.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async
/// tasks. Callers may invoke operations concurrently; the client holds no
/// mutable state.
///
/// # Example
///
/// ```rust,ignore
/// use paymill_api::{ApiKey, HttpClient, PaymillConfig};
///
/// let config = PaymillConfig::builder()
///     .api_key(ApiKey::new("sk_test_1234").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let response = client.get("transactions/tran_123", None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.paymill.com/v2.1`).
    base_url: String,
    /// The private API key, sent as the basic-auth username.
    api_key: String,
    /// Default headers included in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use paymill_api::{ApiKey, HttpClient, PaymillConfig};
    ///
    /// let config = PaymillConfig::builder()
    ///     .api_key(ApiKey::new("sk_test_1234").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.base_url(), "https://api.paymill.com/v2.1");
    /// ```
    #[must_use]
    pub fn new(config: &PaymillConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Paymill API Library v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.endpoint().as_ref().to_string(),
            api_key: config.api_key().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] for connection failures and
    /// [`HttpError::Parse`] when the response body is not valid JSON.
    pub async fn get(
        &self,
        path: &str,
        query: Option<&WireParams>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = self.client.get(self.url(path));
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.send("GET", path, builder).await
    }

    /// Sends a POST request with a form-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] for connection failures and
    /// [`HttpError::Parse`] when the response body is not valid JSON.
    pub async fn post(&self, path: &str, form: &WireParams) -> Result<HttpResponse, HttpError> {
        let builder = self.client.post(self.url(path)).form(form);
        self.send("POST", path, builder).await
    }

    /// Sends a PUT request with a form-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] for connection failures and
    /// [`HttpError::Parse`] when the response body is not valid JSON.
    pub async fn put(&self, path: &str, form: &WireParams) -> Result<HttpResponse, HttpError> {
        let builder = self.client.put(self.url(path)).form(form);
        self.send("PUT", path, builder).await
    }

    /// Sends a DELETE request to the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] for connection failures and
    /// [`HttpError::Parse`] when the response body is not valid JSON.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        let builder = self.client.delete(self.url(path));
        self.send("DELETE", path, builder).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Applies default headers and authentication, then sends the request.
    async fn send(
        &self,
        method: &str,
        path: &str,
        mut builder: reqwest::RequestBuilder,
    ) -> Result<HttpResponse, HttpError> {
        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        // Private key as username, blank password
        builder = builder.basic_auth(&self.api_key, None::<&str>);

        tracing::debug!(method, path, "sending API request");

        let response = builder.send().await?;
        let code = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str(&text)?;

        tracing::debug!(method, path, code, "received API response");

        Ok(HttpResponse::new(code, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn create_test_config() -> PaymillConfig {
        PaymillConfig::builder()
            .api_key(ApiKey::new("sk_test_1234").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_configured_endpoint() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(client.base_url(), "https://api.paymill.com/v2.1");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Paymill API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = PaymillConfig::builder()
            .api_key(ApiKey::new("sk_test_1234").unwrap())
            .user_agent_prefix("MyShop/2.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyShop/2.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(
            client.url("transactions/tran_123"),
            "https://api.paymill.com/v2.1/transactions/tran_123"
        );
        assert_eq!(
            client.url("/transactions"),
            "https://api.paymill.com/v2.1/transactions"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
