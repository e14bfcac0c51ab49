//! Wire parameter mapping.
//!
//! The API accepts form-encoded bodies and query strings built from flat
//! wire-key/value pairs. Instead of inspecting fields at runtime, every type
//! that contributes parameters declares them statically:
//!
//! - Resources list their updateable fields in
//!   [`Resource::update_params`](crate::rest::Resource::update_params)
//! - Filter, order, and pagination types implement [`QueryParams`]
//! - Create-parameter builders implement [`CreateParams`], which also
//!   carries the pre-flight validation for the operation
//!
//! In each case the output is a [`ParamList`]: wire keys in declaration
//! order, unset fields omitted.

use chrono::{DateTime, Utc};

use crate::rest::validate::ValidationError;

/// An ordered list of wire-key/value pairs.
///
/// Keys are the renamed wire names (e.g. a filter's `client_id` field maps
/// to the `client` key), values are the string form the API expects. The
/// set of possible keys is fixed by the declaring type; which keys appear
/// depends only on which fields currently hold a value.
///
/// # Example
///
/// ```rust
/// use paymill_api::rest::ParamList;
///
/// let mut params = ParamList::new();
/// params.push("amount", "4200");
/// params.push_opt("description", Some("invoice 42"));
/// params.push_opt::<&str>("currency", None);
///
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("amount"), Some("4200"));
/// assert_eq!(params.get("currency"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList(Vec<(&'static str, String)>);

impl ParamList {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a wire parameter.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.push((key, value.into()));
    }

    /// Appends a wire parameter if the value is present.
    pub fn push_opt<V: ToString>(&mut self, key: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.0.push((key, value.to_string()));
        }
    }

    /// Appends all pairs from another list.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns the value for the first occurrence of `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of pairs in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the pairs as a slice, in insertion order.
    #[must_use]
    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, String)> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ParamList {
    type Item = &'a (&'static str, String);
    type IntoIter = std::slice::Iter<'a, (&'static str, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Produces query parameters from a filter, order, or pagination value.
///
/// Implementations declare the wire key for each field statically; fields
/// without a value are omitted.
pub trait QueryParams {
    /// Returns the wire-key/value pairs for every set field, in declaration
    /// order.
    fn query_params(&self) -> ParamList;
}

impl QueryParams for () {
    fn query_params(&self) -> ParamList {
        ParamList::new()
    }
}

/// Parameters for a resource `create` call.
///
/// The validation step runs before any request is built, so invalid
/// arguments are rejected without network I/O.
pub trait CreateParams: Send + Sync {
    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first violated rule.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Consumes the builder and returns the form parameters to submit.
    fn into_params(self) -> ParamList;
}

impl CreateParams for () {
    fn into_params(self) -> ParamList {
        ParamList::new()
    }
}

/// Shared state for per-resource sort-order builders.
///
/// A sort order selects at most one sortable field (last call wins) and at
/// most one direction. Setting a direction clears the opposite one. The wire
/// encoding is a single `order` key whose value is `{field}`,
/// `{field}_asc`, or `{field}_desc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOrder {
    field: Option<&'static str>,
    asc: bool,
    desc: bool,
}

impl SortOrder {
    /// Creates an order with no field or direction selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            field: None,
            asc: false,
            desc: false,
        }
    }

    /// Selects the field to sort by.
    #[must_use]
    pub fn by(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Sorts ascending, clearing any descending selection.
    #[must_use]
    pub fn asc(mut self) -> Self {
        self.asc = true;
        self.desc = false;
        self
    }

    /// Sorts descending, clearing any ascending selection.
    #[must_use]
    pub fn desc(mut self) -> Self {
        self.desc = true;
        self.asc = false;
        self
    }

    /// Returns `true` if ascending order is selected.
    #[must_use]
    pub const fn is_asc(&self) -> bool {
        self.asc
    }

    /// Returns `true` if descending order is selected.
    #[must_use]
    pub const fn is_desc(&self) -> bool {
        self.desc
    }

    /// Returns the selected sort field, if any.
    #[must_use]
    pub const fn sort_field(&self) -> Option<&'static str> {
        self.field
    }
}

impl QueryParams for SortOrder {
    fn query_params(&self) -> ParamList {
        let mut params = ParamList::new();
        if let Some(field) = self.field {
            let value = if self.desc {
                format!("{field}_desc")
            } else if self.asc {
                format!("{field}_asc")
            } else {
                field.to_string()
            };
            params.push("order", value);
        }
        params
    }
}

/// Encodes a date range as `{startEpochMillis}-{endEpochMillis}`, the wire
/// format used by `created_at`/`updated_at` filters.
#[must_use]
pub fn date_range(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("{}-{}", start.timestamp_millis(), end.timestamp_millis())
}
