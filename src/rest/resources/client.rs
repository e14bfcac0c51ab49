//! Client resource.
//!
//! A client represents a customer. Clients can hold several payments and
//! subscriptions, and both the email address and the description can be
//! changed through partial updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::params::{date_range, CreateParams, ParamList, QueryParams, SortOrder};
use crate::rest::resource::{Operation, Resource};
use crate::rest::resources::{Payment, Subscription};

/// A customer of yours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// The server-assigned client id.
    pub id: Option<String>,

    /// Email address of the client. Sent on partial updates.
    pub email: Option<String>,

    /// Free-form description. Sent on partial updates.
    pub description: Option<String>,

    /// Payments belonging to this client.
    #[serde(rename = "payment", default)]
    pub payments: Option<Vec<Payment>>,

    /// Subscriptions belonging to this client.
    #[serde(rename = "subscription", default)]
    pub subscriptions: Option<Vec<Subscription>>,

    /// When the client was created.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the client was last updated.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,

    /// App id that created this client, or `None` if created by yourself.
    pub app_id: Option<String>,
}

impl Client {
    /// Creates an instance carrying only the given id, for use with
    /// id-addressed operations.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Creates the filter builder for client lists.
    #[must_use]
    pub fn filter() -> ClientFilter {
        ClientFilter::new()
    }

    /// Creates the order builder for client lists.
    #[must_use]
    pub fn order() -> ClientOrder {
        ClientOrder::new()
    }
}

impl Resource for Client {
    type Create = CreateClient;
    type Filter = ClientFilter;
    type Order = ClientOrder;

    const NAME: &'static str = "Client";
    const PATH: &'static str = "clients";
    const OPERATIONS: &'static [Operation] = &[
        Operation::Show,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
        Operation::List,
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn update_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("email", self.email.as_ref());
        params.push_opt("description", self.description.as_ref());
        params
    }
}

/// Parameters for creating a client.
///
/// Both fields are optional; the API accepts an entirely empty client.
#[derive(Debug, Clone, Default)]
pub struct CreateClient {
    email: Option<String>,
    description: Option<String>,
}

impl CreateClient {
    /// Creates empty client parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl CreateParams for CreateClient {
    fn into_params(self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("email", self.email);
        params.push_opt("description", self.description);
        params
    }
}

/// Query filter for client lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    payment: Option<String>,
    subscription: Option<String>,
    offer: Option<String>,
    description: Option<String>,
    email: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
}

impl ClientFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by payment id.
    #[must_use]
    pub fn by_payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.payment = Some(payment_id.into());
        self
    }

    /// Filters by subscription id.
    #[must_use]
    pub fn by_subscription_id(mut self, subscription_id: impl Into<String>) -> Self {
        self.subscription = Some(subscription_id.into());
        self
    }

    /// Filters by offer id.
    #[must_use]
    pub fn by_offer_id(mut self, offer_id: impl Into<String>) -> Self {
        self.offer = Some(offer_id.into());
        self
    }

    /// Filters by description.
    #[must_use]
    pub fn by_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Filters by email address.
    #[must_use]
    pub fn by_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Filters by creation date range.
    #[must_use]
    pub fn by_created_at(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.created_at = Some(date_range(start, end));
        self
    }

    /// Filters by last-update date range.
    #[must_use]
    pub fn by_updated_at(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.updated_at = Some(date_range(start, end));
        self
    }
}

impl QueryParams for ClientFilter {
    fn query_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("payment", self.payment.as_ref());
        params.push_opt("subscription", self.subscription.as_ref());
        params.push_opt("offer", self.offer.as_ref());
        params.push_opt("description", self.description.as_ref());
        params.push_opt("email", self.email.as_ref());
        params.push_opt("created_at", self.created_at.as_ref());
        params.push_opt("updated_at", self.updated_at.as_ref());
        params
    }
}

/// Sort order for client lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientOrder(SortOrder);

impl ClientOrder {
    /// Creates an order with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts by creation date.
    #[must_use]
    pub fn by_created_at(self) -> Self {
        Self(self.0.by("created_at"))
    }

    /// Sorts by email address.
    #[must_use]
    pub fn by_email(self) -> Self {
        Self(self.0.by("email"))
    }

    /// Sorts ascending.
    #[must_use]
    pub fn asc(self) -> Self {
        Self(self.0.asc())
    }

    /// Sorts descending.
    #[must_use]
    pub fn desc(self) -> Self {
        Self(self.0.desc())
    }
}

impl QueryParams for ClientOrder {
    fn query_params(&self) -> ParamList {
        self.0.query_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_deserializes_nested_payments() {
        let client: Client = serde_json::from_value(json!({
            "id": "client_88a388d9dd48f86c3136",
            "email": "max.mustermann@example.com",
            "description": null,
            "payment": [{"id": "pay_3af44644dd6d25c820a8"}],
            "subscription": null,
            "created_at": 1342438695,
            "updated_at": 1342438695,
            "app_id": null
        }))
        .unwrap();

        assert_eq!(client.email.as_deref(), Some("max.mustermann@example.com"));
        let payments = client.payments.unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].id.as_deref(), Some("pay_3af44644dd6d25c820a8"));
        assert!(client.subscriptions.is_none());
    }

    #[test]
    fn test_update_params_contain_only_set_updateable_fields() {
        let client = Client {
            id: Some("client_88a388d9dd48f86c3136".to_string()),
            email: Some("new.address@example.com".to_string()),
            ..Client::default()
        };

        let params = client.update_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("email"), Some("new.address@example.com"));
        assert_eq!(params.get("description"), None);
        // The id is addressed via the URL path, never as a body parameter.
        assert_eq!(params.get("id"), None);
    }

    #[test]
    fn test_update_params_ignore_non_updateable_fields() {
        let client = Client {
            id: Some("client_1".to_string()),
            app_id: Some("app_1".to_string()),
            payments: Some(vec![Payment::with_id("pay_1")]),
            ..Client::default()
        };

        assert!(client.update_params().is_empty());
    }

    #[test]
    fn test_create_client_allows_empty_params() {
        let params = CreateClient::new();
        assert!(params.validate().is_ok());
        assert!(params.into_params().is_empty());
    }

    #[test]
    fn test_create_client_maps_both_fields() {
        let params = CreateClient::new()
            .email("max.mustermann@example.com")
            .description("vip")
            .into_params();

        assert_eq!(params.get("email"), Some("max.mustermann@example.com"));
        assert_eq!(params.get("description"), Some("vip"));
    }

    #[test]
    fn test_filter_renames_reference_keys() {
        let params = Client::filter()
            .by_payment_id("pay_1")
            .by_subscription_id("sub_1")
            .by_offer_id("offer_1")
            .query_params();

        assert_eq!(params.get("payment"), Some("pay_1"));
        assert_eq!(params.get("subscription"), Some("sub_1"));
        assert_eq!(params.get("offer"), Some("offer_1"));
    }

    #[test]
    fn test_order_field_selection_last_call_wins() {
        let params = Client::order().by_created_at().by_email().asc().query_params();
        assert_eq!(params.get("order"), Some("email_asc"));
    }
}
