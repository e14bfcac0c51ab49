//! HTTP-specific error types.
//!
//! Transport and parse failures are internal/runtime conditions, kept
//! strictly apart from API-level rejections (which arrive inside the JSON
//! response envelope and are surfaced by the resource layer).
//!
//! # Example
//!
//! ```rust,ignore
//! use paymill_api::clients::HttpError;
//!
//! match client.get("transactions/tran_123", None).await {
//!     Ok(response) => println!("Status: {}", response.code),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Parse(e)) => println!("Malformed response: {e}"),
//! }
//! ```

use thiserror::Error;

/// Unified error type for HTTP operations.
///
/// Both variants represent failures outside the API's domain contract: the
/// request never completed, or the response body was not the JSON envelope
/// every endpoint is documented to return.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Malformed JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_wraps_serde_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = HttpError::from(serde_error);

        assert!(matches!(error, HttpError::Parse(_)));
        assert!(error.to_string().contains("Malformed JSON response"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: &dyn std::error::Error = &HttpError::Parse(serde_error);
        let _ = error;
    }
}
