//! Error types for resource operations.
//!
//! The taxonomy keeps three failure classes strictly apart:
//!
//! - [`ResourceError::Validation`]: invalid arguments, raised before any
//!   network call; recoverable by correcting input
//! - [`ResourceError::Api`]: the response envelope carried an `error` key; a
//!   business-level rejection with the server's payload preserved verbatim
//! - [`ResourceError::Http`]: transport or parse failures; internal/runtime
//!   conditions, never masked as domain errors
//!
//! # Example
//!
//! ```rust,ignore
//! use paymill_api::rest::{Resource, ResourceError};
//!
//! match Transaction::show(&client, &transaction).await {
//!     Ok(Some(transaction)) => println!("{:?}", transaction.status),
//!     Ok(None) => println!("no single object in response"),
//!     Err(ResourceError::Validation(e)) => println!("bad input: {e}"),
//!     Err(ResourceError::Api { error }) => println!("rejected: {error}"),
//!     Err(e) => println!("transport failure: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::rest::resource::Operation;
use crate::rest::validate::ValidationError;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An argument failed local validation; no request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API rejected the call. The server's error payload is preserved
    /// verbatim.
    #[error("API error: {error}")]
    Api {
        /// The `error` value from the response envelope.
        error: serde_json::Value,
    },

    /// The resource does not support the attempted operation; no request
    /// was issued.
    #[error("{resource} does not support {operation}")]
    OperationNotSupported {
        /// The resource type name.
        resource: &'static str,
        /// The unsupported operation.
        operation: Operation,
    },

    /// A transport or parse failure occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_displays_payload() {
        let error = ResourceError::Api {
            error: json!({"messages": {"amount": "is negative"}}),
        };
        let message = error.to_string();
        assert!(message.contains("API error"));
        assert!(message.contains("is negative"));
    }

    #[test]
    fn test_validation_error_converts_transparently() {
        let error: ResourceError = ValidationError::BlankId.into();
        assert_eq!(error.to_string(), "Id cannot be blank");
    }

    #[test]
    fn test_operation_not_supported_names_resource_and_operation() {
        let error = ResourceError::OperationNotSupported {
            resource: "Refund",
            operation: Operation::Create,
        };
        let message = error.to_string();
        assert!(message.contains("Refund"));
        assert!(message.contains("create"));
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let validation: &dyn std::error::Error = &ResourceError::Validation(ValidationError::BlankId);
        let _ = validation;

        let api: &dyn std::error::Error = &ResourceError::Api { error: json!({}) };
        let _ = api;
    }
}
