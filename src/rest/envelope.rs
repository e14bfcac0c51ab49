//! Response envelope unwrapping.
//!
//! Every API response body is a JSON object of shape `{"data": ...}` or
//! `{"error": ...}`. This module applies that contract uniformly:
//!
//! - an `error` key fails the call with [`ResourceError::Api`], carrying the
//!   payload verbatim
//! - a single-object `data` deserializes into the target resource
//! - an array-shaped `data` on the single-object path yields `Ok(None)`,
//!   the upstream API's long-standing behavior, kept as-is; collection calls
//!   instead use [`ResourceList`], whose shape is unambiguous
//! - a null `data` (e.g. on some deletes) or a body without `data` or
//!   `error` yields `Ok(None)`

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::HttpError;
use crate::rest::errors::ResourceError;

/// Unwraps an envelope expected to carry a single object.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] when the envelope carries an `error` key,
/// or [`ResourceError::Http`] when `data` cannot be deserialized into `T`.
pub fn single<T: DeserializeOwned>(body: Value) -> Result<Option<T>, ResourceError> {
    if let Some(error) = body.get("error") {
        return Err(ResourceError::Api {
            error: error.clone(),
        });
    }

    match body.get("data") {
        Some(Value::Array(_) | Value::Null) | None => Ok(None),
        Some(data) => {
            let value = serde_json::from_value(data.clone()).map_err(HttpError::from)?;
            Ok(Some(value))
        }
    }
}

/// Unwraps an envelope expected to carry a collection.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] when the envelope carries an `error` key,
/// or [`ResourceError::Http`] when the body does not match the
/// [`ResourceList`] shape.
pub fn collection<T: DeserializeOwned>(body: Value) -> Result<ResourceList<T>, ResourceError> {
    if let Some(error) = body.get("error") {
        return Err(ResourceError::Api {
            error: error.clone(),
        });
    }

    let list = serde_json::from_value(body).map_err(HttpError::from)?;
    Ok(list)
}

/// A collection of resources with the server-reported total count.
///
/// `data_count` is the total number of matching resources, which can exceed
/// `len()` when pagination controls limit the returned page.
///
/// The wrapper implements `Deref<Target = Vec<T>>` for transparent access
/// to the items.
///
/// # Example
///
/// ```rust
/// use paymill_api::rest::ResourceList;
/// use serde_json::json;
///
/// let list: ResourceList<String> =
///     serde_json::from_value(json!({"data": ["a", "b"], "data_count": 42})).unwrap();
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.total_count(), 42);
/// assert_eq!(list[0], "a");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceList<T> {
    data: Vec<T>,
    #[serde(default)]
    data_count: u64,
}

impl<T> ResourceList<T> {
    /// Returns the total number of matching resources on the server.
    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.data_count
    }

    /// Returns the items as a slice.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.data
    }

    /// Consumes the list and returns the items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T> Deref for ResourceList<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T> IntoIterator for ResourceList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct TestResource {
        id: String,
    }

    #[test]
    fn test_single_deserializes_data_object() {
        let body = json!({"data": {"id": "tran_123"}, "mode": "test"});

        let resource: Option<TestResource> = single(body).unwrap();
        assert_eq!(resource.unwrap().id, "tran_123");
    }

    #[test]
    fn test_single_fails_with_error_payload_verbatim() {
        let body = json!({"error": {"messages": {"token": "is invalid"}}});

        let result: Result<Option<TestResource>, _> = single(body);
        match result {
            Err(ResourceError::Api { error }) => {
                assert_eq!(error, json!({"messages": {"token": "is invalid"}}));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_single_yields_none_for_array_data() {
        let body = json!({"data": [{"id": "tran_1"}, {"id": "tran_2"}]});

        let resource: Option<TestResource> = single(body).unwrap();
        assert!(resource.is_none());
    }

    #[test]
    fn test_single_yields_none_for_null_data() {
        let body = json!({"data": null, "mode": "test"});

        let resource: Option<TestResource> = single(body).unwrap();
        assert!(resource.is_none());
    }

    #[test]
    fn test_single_yields_none_without_data_or_error() {
        let body = json!({"mode": "test"});

        let resource: Option<TestResource> = single(body).unwrap();
        assert!(resource.is_none());
    }

    #[test]
    fn test_single_surfaces_shape_mismatch_as_http_error() {
        let body = json!({"data": {"id": 42}});

        let result: Result<Option<TestResource>, _> = single(body);
        assert!(matches!(result, Err(ResourceError::Http(HttpError::Parse(_)))));
    }

    #[test]
    fn test_collection_deserializes_items_and_count() {
        let body = json!({
            "data": [{"id": "tran_1"}, {"id": "tran_2"}],
            "data_count": 17
        });

        let list: ResourceList<TestResource> = collection(body).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.total_count(), 17);
        assert_eq!(list[1].id, "tran_2");
    }

    #[test]
    fn test_collection_fails_with_error_payload() {
        let body = json!({"error": "unauthorized"});

        let result: Result<ResourceList<TestResource>, _> = collection(body);
        match result {
            Err(ResourceError::Api { error }) => assert_eq!(error, json!("unauthorized")),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_collection_count_defaults_to_zero() {
        let body = json!({"data": []});

        let list: ResourceList<TestResource> = collection(body).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.total_count(), 0);
    }

    #[test]
    fn test_list_iteration_via_deref() {
        let list: ResourceList<TestResource> = serde_json::from_value(json!({
            "data": [{"id": "a"}, {"id": "b"}],
            "data_count": 2
        }))
        .unwrap();

        let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
