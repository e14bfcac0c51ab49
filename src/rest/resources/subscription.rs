//! Subscription resource.
//!
//! A subscription connects a client and a payment to an offer, charging the
//! client on the offer's interval. The attached offer, the charged payment,
//! and the cancel-at-period-end flag can be changed through partial updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::params::{date_range, CreateParams, ParamList, QueryParams, SortOrder};
use crate::rest::resource::{Operation, Resource};
use crate::rest::resources::{Client, Offer, Payment};
use crate::rest::validate::{self, ValidationError};

/// A recurring charge of a client against an offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// The server-assigned subscription id.
    pub id: Option<String>,

    /// The offer the client subscribed to. Sent as its id on partial
    /// updates.
    pub offer: Option<Offer>,

    /// Whether the subscription was made with a live API key.
    pub livemode: Option<bool>,

    /// Whether the subscription ends at the current period. Sent on partial
    /// updates.
    pub cancel_at_period_end: Option<bool>,

    /// Start of the trial period.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub trial_start: Option<DateTime<Utc>>,

    /// End of the trial period.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub trial_end: Option<DateTime<Utc>>,

    /// Next charge date.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub next_capture_at: Option<DateTime<Utc>>,

    /// When the subscription was created.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the subscription was last updated.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the subscription was canceled.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub canceled_at: Option<DateTime<Utc>>,

    /// The payment charged on each interval. Sent as its id on partial
    /// updates.
    pub payment: Option<Payment>,

    /// The subscribed client.
    pub client: Option<Client>,

    /// App id that created this subscription, or `None` if created by
    /// yourself.
    pub app_id: Option<String>,
}

impl Subscription {
    /// Creates an instance carrying only the given id, for use with
    /// id-addressed operations.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Creates the filter builder for subscription lists.
    #[must_use]
    pub fn filter() -> SubscriptionFilter {
        SubscriptionFilter::new()
    }

    /// Creates the order builder for subscription lists.
    #[must_use]
    pub fn order() -> SubscriptionOrder {
        SubscriptionOrder::new()
    }
}

impl Resource for Subscription {
    type Create = CreateSubscription;
    type Filter = SubscriptionFilter;
    type Order = SubscriptionOrder;

    const NAME: &'static str = "Subscription";
    const PATH: &'static str = "subscriptions";
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
        params.push_opt("offer", self.offer.as_ref().and_then(|o| o.id.as_deref()));
        params.push_opt(
            "payment",
            self.payment.as_ref().and_then(|p| p.id.as_deref()),
        );
        params.push_opt("cancel_at_period_end", self.cancel_at_period_end);
        params
    }
}

/// Parameters for creating a subscription.
///
/// All three references are mandatory and validated before any request is
/// issued.
#[derive(Debug, Clone)]
pub struct CreateSubscription {
    client: Client,
    offer: Offer,
    payment: Payment,
}

impl CreateSubscription {
    /// Creates subscription parameters for the given client, offer, and
    /// payment.
    #[must_use]
    pub fn new(client: &Client, offer: &Offer, payment: &Payment) -> Self {
        Self {
            client: client.clone(),
            offer: offer.clone(),
            payment: payment.clone(),
        }
    }
}

impl CreateParams for CreateSubscription {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::client(Some(&self.client))?;
        validate::offer(Some(&self.offer))?;
        validate::payment(Some(&self.payment))?;
        Ok(())
    }

    fn into_params(self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("client", self.client.id);
        params.push_opt("offer", self.offer.id);
        params.push_opt("payment", self.payment.id);
        params
    }
}

/// Query filter for subscription lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionFilter {
    offer: Option<String>,
    created_at: Option<String>,
}

impl SubscriptionFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by offer id.
    #[must_use]
    pub fn by_offer_id(mut self, offer_id: impl Into<String>) -> Self {
        self.offer = Some(offer_id.into());
        self
    }

    /// Filters by creation date range.
    #[must_use]
    pub fn by_created_at(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.created_at = Some(date_range(start, end));
        self
    }
}

impl QueryParams for SubscriptionFilter {
    fn query_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("offer", self.offer.as_ref());
        params.push_opt("created_at", self.created_at.as_ref());
        params
    }
}

/// Sort order for subscription lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscriptionOrder(SortOrder);

impl SubscriptionOrder {
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

    /// Sorts by cancellation date.
    #[must_use]
    pub fn by_canceled_at(self) -> Self {
        Self(self.0.by("canceled_at"))
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

impl QueryParams for SubscriptionOrder {
    fn query_params(&self) -> ParamList {
        self.0.query_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subscription_deserializes_nested_resources() {
        let subscription: Subscription = serde_json::from_value(json!({
            "id": "sub_dea86e5c65b2087202e3",
            "offer": {"id": "offer_40237e20a7d5a231d99b", "name": "Premium"},
            "livemode": false,
            "cancel_at_period_end": false,
            "trial_start": null,
            "trial_end": null,
            "next_capture_at": 1369563095,
            "created_at": 1341935490,
            "updated_at": 1349948303,
            "canceled_at": null,
            "payment": {"id": "pay_95ba26ba2c613ebb0ca8", "type": "creditcard"},
            "client": {"id": "client_81c8ab98a8ac5d69f749"},
            "app_id": null
        }))
        .unwrap();

        assert_eq!(subscription.id.as_deref(), Some("sub_dea86e5c65b2087202e3"));
        assert_eq!(
            subscription.offer.unwrap().id.as_deref(),
            Some("offer_40237e20a7d5a231d99b")
        );
        assert_eq!(subscription.cancel_at_period_end, Some(false));
        assert!(subscription.canceled_at.is_none());
        assert_eq!(
            subscription.next_capture_at.unwrap().timestamp(),
            1_369_563_095
        );
    }

    #[test]
    fn test_update_params_send_reference_ids() {
        let subscription = Subscription {
            id: Some("sub_dea86e5c65b2087202e3".to_string()),
            offer: Some(Offer::with_id("offer_40237e20a7d5a231d99b")),
            payment: Some(Payment::with_id("pay_95ba26ba2c613ebb0ca8")),
            cancel_at_period_end: Some(true),
            ..Subscription::default()
        };

        let params = subscription.update_params();
        assert_eq!(params.get("offer"), Some("offer_40237e20a7d5a231d99b"));
        assert_eq!(params.get("payment"), Some("pay_95ba26ba2c613ebb0ca8"));
        assert_eq!(params.get("cancel_at_period_end"), Some("true"));
    }

    #[test]
    fn test_update_params_omit_absent_references() {
        let subscription = Subscription {
            id: Some("sub_1".to_string()),
            cancel_at_period_end: Some(false),
            ..Subscription::default()
        };

        let params = subscription.update_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("cancel_at_period_end"), Some("false"));
    }

    #[test]
    fn test_create_subscription_validates_all_references() {
        let client = Client::with_id("client_81c8ab98a8ac5d69f749");
        let offer = Offer::with_id("offer_40237e20a7d5a231d99b");
        let payment = Payment::with_id("pay_95ba26ba2c613ebb0ca8");

        assert!(CreateSubscription::new(&client, &offer, &payment)
            .validate()
            .is_ok());

        assert_eq!(
            CreateSubscription::new(&Client::default(), &offer, &payment).validate(),
            Err(ValidationError::MissingClient)
        );
        assert_eq!(
            CreateSubscription::new(&client, &Offer::default(), &payment).validate(),
            Err(ValidationError::MissingOffer)
        );
        assert_eq!(
            CreateSubscription::new(&client, &offer, &Payment::default()).validate(),
            Err(ValidationError::MissingPayment)
        );
    }

    #[test]
    fn test_create_subscription_params_are_reference_ids() {
        let client = Client::with_id("client_81c8ab98a8ac5d69f749");
        let offer = Offer::with_id("offer_40237e20a7d5a231d99b");
        let payment = Payment::with_id("pay_95ba26ba2c613ebb0ca8");

        let params = CreateSubscription::new(&client, &offer, &payment).into_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["client", "offer", "payment"]);
    }

    #[test]
    fn test_order_by_canceled_at() {
        let params = Subscription::order().by_canceled_at().desc().query_params();
        assert_eq!(params.get("order"), Some("canceled_at_desc"));
    }
}
