//! Offer resource.
//!
//! An offer is a recurring plan a client can subscribe to: an amount, a
//! billing interval like `1 MONTH`, and an optional trial period. Name,
//! amount, interval, and trial period can be changed through partial
//! updates; changes apply to future billings of existing subscriptions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::params::{date_range, CreateParams, ParamList, QueryParams, SortOrder};
use crate::rest::resource::{Operation, Resource};
use crate::rest::validate::{self, ValidationError};

/// A recurring billing plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// The server-assigned offer id.
    pub id: Option<String>,

    /// Display name of the offer. Sent on partial updates.
    pub name: Option<String>,

    /// Amount charged per interval, in minor currency units. Sent on
    /// partial updates.
    pub amount: Option<i64>,

    /// Billing interval (e.g., "1 MONTH", "2 WEEK"). Sent on partial
    /// updates.
    pub interval: Option<String>,

    /// Days before the first charge. Sent on partial updates.
    pub trial_period_days: Option<i32>,

    /// ISO 4217 currency code.
    pub currency: Option<String>,

    /// Counts of subscriptions attached to this offer.
    pub subscription_count: Option<SubscriptionCount>,

    /// When the offer was created.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the offer was last updated.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,

    /// App id that created this offer, or `None` if created by yourself.
    pub app_id: Option<String>,
}

/// Subscription counts reported with an offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionCount {
    /// Number of active subscriptions.
    pub active: Option<u64>,
    /// Number of inactive subscriptions.
    pub inactive: Option<u64>,
}

impl Offer {
    /// Creates an instance carrying only the given id, for use with
    /// id-addressed operations.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Creates the filter builder for offer lists.
    #[must_use]
    pub fn filter() -> OfferFilter {
        OfferFilter::new()
    }

    /// Creates the order builder for offer lists.
    #[must_use]
    pub fn order() -> OfferOrder {
        OfferOrder::new()
    }
}

impl Resource for Offer {
    type Create = CreateOffer;
    type Filter = OfferFilter;
    type Order = OfferOrder;

    const NAME: &'static str = "Offer";
    const PATH: &'static str = "offers";
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
        params.push_opt("name", self.name.as_ref());
        params.push_opt("amount", self.amount);
        params.push_opt("interval", self.interval.as_ref());
        params.push_opt("trial_period_days", self.trial_period_days);
        params
    }
}

/// Parameters for creating an offer.
#[derive(Debug, Clone)]
pub struct CreateOffer {
    amount: i64,
    currency: String,
    interval: String,
    name: String,
    trial_period_days: Option<i32>,
}

impl CreateOffer {
    /// Creates offer parameters from the required fields.
    #[must_use]
    pub fn new(
        amount: i64,
        currency: impl Into<String>,
        interval: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            interval: interval.into(),
            name: name.into(),
            trial_period_days: None,
        }
    }

    /// Sets the trial period in days.
    #[must_use]
    pub const fn trial_period_days(mut self, days: i32) -> Self {
        self.trial_period_days = Some(days);
        self
    }
}

impl CreateParams for CreateOffer {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::amount(Some(self.amount))?;
        validate::currency(&self.currency)?;
        validate::interval(&self.interval)?;
        validate::name(&self.name)?;
        validate::trial_period_days(self.trial_period_days)?;
        Ok(())
    }

    fn into_params(self) -> ParamList {
        let mut params = ParamList::new();
        params.push("amount", self.amount.to_string());
        params.push("currency", self.currency);
        params.push("interval", self.interval);
        params.push("name", self.name);
        params.push_opt("trial_period_days", self.trial_period_days);
        params
    }
}

/// Query filter for offer lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferFilter {
    amount: Option<String>,
    trial_period_days: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
}

impl OfferFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by exact amount.
    #[must_use]
    pub fn by_amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount.to_string());
        self
    }

    /// Filters by amounts strictly greater than the given value.
    #[must_use]
    pub fn by_amount_greater_than(mut self, amount: i64) -> Self {
        self.amount = Some(format!(">{amount}"));
        self
    }

    /// Filters by amounts strictly less than the given value.
    #[must_use]
    pub fn by_amount_less_than(mut self, amount: i64) -> Self {
        self.amount = Some(format!("<{amount}"));
        self
    }

    /// Filters by trial period length.
    #[must_use]
    pub fn by_trial_period_days(mut self, days: i32) -> Self {
        self.trial_period_days = Some(days.to_string());
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

impl QueryParams for OfferFilter {
    fn query_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("amount", self.amount.as_ref());
        params.push_opt("trial_period_days", self.trial_period_days.as_ref());
        params.push_opt("created_at", self.created_at.as_ref());
        params.push_opt("updated_at", self.updated_at.as_ref());
        params
    }
}

/// Sort order for offer lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OfferOrder(SortOrder);

impl OfferOrder {
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

    /// Sorts by amount.
    #[must_use]
    pub fn by_amount(self) -> Self {
        Self(self.0.by("amount"))
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

impl QueryParams for OfferOrder {
    fn query_params(&self) -> ParamList {
        self.0.query_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_offer_deserializes_wire_payload() {
        let offer: Offer = serde_json::from_value(json!({
            "id": "offer_40237e20a7d5a231d99b",
            "name": "Premium",
            "amount": 4200,
            "currency": "EUR",
            "interval": "1 MONTH",
            "trial_period_days": 14,
            "subscription_count": {"active": 3, "inactive": 0},
            "created_at": 1341935129,
            "updated_at": 1341935129,
            "app_id": null
        }))
        .unwrap();

        assert_eq!(offer.name.as_deref(), Some("Premium"));
        assert_eq!(offer.interval.as_deref(), Some("1 MONTH"));
        assert_eq!(offer.subscription_count.unwrap().active, Some(3));
    }

    #[test]
    fn test_update_params_list_all_set_updateable_fields() {
        let offer = Offer {
            id: Some("offer_40237e20a7d5a231d99b".to_string()),
            name: Some("Premium Plus".to_string()),
            amount: Some(5900),
            interval: Some("1 MONTH".to_string()),
            trial_period_days: Some(7),
            currency: Some("EUR".to_string()),
            ..Offer::default()
        };

        let params = offer.update_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["name", "amount", "interval", "trial_period_days"]);
        // currency is not updateable
        assert_eq!(params.get("currency"), None);
    }

    #[test]
    fn test_update_params_omit_unset_fields() {
        let offer = Offer {
            id: Some("offer_1".to_string()),
            name: Some("Premium".to_string()),
            ..Offer::default()
        };

        let params = offer.update_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("name"), Some("Premium"));
    }

    #[test]
    fn test_create_offer_validates_each_field() {
        assert_eq!(
            CreateOffer::new(-1, "EUR", "1 MONTH", "Premium").validate(),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            CreateOffer::new(4200, " ", "1 MONTH", "Premium").validate(),
            Err(ValidationError::BlankCurrency)
        );
        assert_eq!(
            CreateOffer::new(4200, "EUR", "", "Premium").validate(),
            Err(ValidationError::BlankInterval)
        );
        assert_eq!(
            CreateOffer::new(4200, "EUR", "1 MONTH", "").validate(),
            Err(ValidationError::BlankName)
        );
        assert_eq!(
            CreateOffer::new(4200, "EUR", "1 MONTH", "Premium")
                .trial_period_days(-1)
                .validate(),
            Err(ValidationError::NegativeTrialPeriodDays)
        );
        assert!(CreateOffer::new(4200, "EUR", "1 MONTH", "Premium")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_create_offer_params_include_trial_only_when_set() {
        let params = CreateOffer::new(4200, "EUR", "1 MONTH", "Premium").into_params();
        assert_eq!(params.get("trial_period_days"), None);

        let params = CreateOffer::new(4200, "EUR", "1 MONTH", "Premium")
            .trial_period_days(14)
            .into_params();
        assert_eq!(params.get("trial_period_days"), Some("14"));
    }

    #[test]
    fn test_filter_amount_prefix_operators() {
        assert_eq!(
            Offer::filter().by_amount_greater_than(100).query_params().get("amount"),
            Some(">100")
        );
        assert_eq!(
            Offer::filter().by_amount_less_than(100).query_params().get("amount"),
            Some("<100")
        );
    }

    #[test]
    fn test_order_by_amount() {
        let params = Offer::order().by_amount().asc().query_params();
        assert_eq!(params.get("order"), Some("amount_asc"));
    }
}
