//! HTTP response representation.

use serde_json::Value;

/// A parsed HTTP response from the API.
///
/// The body is kept as raw JSON; envelope unwrapping and deserialization
/// into typed resources happen in the resource layer.
///
/// # Example
///
/// ```rust
/// use paymill_api::clients::HttpResponse;
/// use serde_json::json;
///
/// let response = HttpResponse::new(200, json!({"data": {"id": "tran_123"}}));
/// assert!(response.is_ok());
/// assert_eq!(response.body["data"]["id"], "tran_123");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The response body parsed as JSON.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new response from a status code and parsed body.
    #[must_use]
    pub const fn new(code: u16, body: Value) -> Self {
        Self { code, body }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_for_2xx_codes() {
        assert!(HttpResponse::new(200, json!({})).is_ok());
        assert!(HttpResponse::new(201, json!({})).is_ok());
        assert!(HttpResponse::new(299, json!({})).is_ok());
    }

    #[test]
    fn test_is_ok_false_outside_2xx() {
        assert!(!HttpResponse::new(199, json!({})).is_ok());
        assert!(!HttpResponse::new(404, json!({})).is_ok());
        assert!(!HttpResponse::new(500, json!({})).is_ok());
    }

    #[test]
    fn test_body_is_accessible() {
        let response = HttpResponse::new(200, json!({"data": []}));
        assert!(response.body["data"].is_array());
    }
}
