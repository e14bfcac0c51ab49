//! Payment resource.
//!
//! A payment holds the means of payment itself: a tokenized credit card or a
//! direct-debit account. Payments are created from a bridge token and can be
//! attached to a client. They cannot be updated; replace a stale payment by
//! creating a new one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::rest::params::{date_range, CreateParams, ParamList, QueryParams, SortOrder};
use crate::rest::resource::{Operation, Resource};
use crate::rest::resources::Client;
use crate::rest::validate::{self, ValidationError};

/// A stored means of payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// The server-assigned payment id.
    pub id: Option<String>,

    /// The bridge token the payment was created from.
    pub token: Option<String>,

    /// Whether this is a credit card or direct debit payment.
    #[serde(rename = "type")]
    pub payment_type: Option<PaymentType>,

    /// Id of the client this payment belongs to.
    pub client: Option<String>,

    /// Card brand (e.g., "visa", "mastercard").
    pub card_type: Option<String>,

    /// Issuing country of the card.
    pub country: Option<String>,

    /// Card expiry month.
    pub expire_month: Option<String>,

    /// Card expiry year.
    pub expire_year: Option<String>,

    /// Name of the card holder.
    pub card_holder: Option<String>,

    /// Last four digits of the card number.
    pub last4: Option<String>,

    /// Bank code, for direct debit payments.
    pub code: Option<String>,

    /// Obfuscated account number, for direct debit payments.
    pub account: Option<String>,

    /// Name of the account holder, for direct debit payments.
    pub holder: Option<String>,

    /// When the payment was created.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the payment was last updated.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,

    /// App id that created this payment, or `None` if created by yourself.
    pub app_id: Option<String>,
}

impl Payment {
    /// Creates an instance carrying only the given id, for use with
    /// id-addressed operations.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Creates the filter builder for payment lists.
    #[must_use]
    pub fn filter() -> PaymentFilter {
        PaymentFilter::new()
    }

    /// Creates the order builder for payment lists.
    #[must_use]
    pub fn order() -> PaymentOrder {
        PaymentOrder::new()
    }
}

impl Resource for Payment {
    type Create = CreatePayment;
    type Filter = PaymentFilter;
    type Order = PaymentOrder;

    const NAME: &'static str = "Payment";
    const PATH: &'static str = "payments";
    const OPERATIONS: &'static [Operation] = &[
        Operation::Show,
        Operation::Create,
        Operation::Delete,
        Operation::List,
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// The kind of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// A tokenized credit card.
    Creditcard,
    /// A direct-debit bank account.
    Debit,
}

impl PaymentType {
    /// Returns the wire string for this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Creditcard => "creditcard",
            Self::Debit => "debit",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "creditcard" => Ok(Self::Creditcard),
            "debit" => Ok(Self::Debit),
            _ => Err(ValidationError::InvalidStatus {
                value: value.to_string(),
            }),
        }
    }
}

/// Parameters for creating a payment.
///
/// # Example
///
/// ```rust,ignore
/// let payment = Payment::create(
///     &client,
///     CreatePayment::with_token("098f6bcd4621d373cade4e832627b4f6"),
/// )
/// .await?;
/// ```
#[derive(Debug, Clone)]
pub struct CreatePayment {
    token: String,
    client: Option<Client>,
}

impl CreatePayment {
    /// Creates payment parameters from a bridge token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            client: None,
        }
    }

    /// Attaches the payment to the given client.
    #[must_use]
    pub fn client(mut self, client: &Client) -> Self {
        self.client = Some(client.clone());
        self
    }
}

impl CreateParams for CreatePayment {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::token(&self.token)?;
        if self.client.is_some() {
            validate::client(self.client.as_ref())?;
        }
        Ok(())
    }

    fn into_params(self) -> ParamList {
        let mut params = ParamList::new();
        params.push("token", self.token);
        params.push_opt("client", self.client.and_then(|c| c.id));
        params
    }
}

/// Query filter for payment lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFilter {
    card_type: Option<String>,
    created_at: Option<String>,
}

impl PaymentFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by card brand.
    #[must_use]
    pub fn by_card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    /// Filters by creation date range.
    #[must_use]
    pub fn by_created_at(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.created_at = Some(date_range(start, end));
        self
    }
}

impl QueryParams for PaymentFilter {
    fn query_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("card_type", self.card_type.as_ref());
        params.push_opt("created_at", self.created_at.as_ref());
        params
    }
}

/// Sort order for payment lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentOrder(SortOrder);

impl PaymentOrder {
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

impl QueryParams for PaymentOrder {
    fn query_params(&self) -> ParamList {
        self.0.query_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payment_deserializes_card_payload() {
        let payment: Payment = serde_json::from_value(json!({
            "id": "pay_3af44644dd6d25c820a8",
            "type": "creditcard",
            "client": "client_88a388d9dd48f86c3136",
            "card_type": "visa",
            "country": "DE",
            "expire_month": "10",
            "expire_year": "2027",
            "card_holder": "Max Mustermann",
            "last4": "1111",
            "created_at": 1349942085,
            "updated_at": 1349942085,
            "app_id": null
        }))
        .unwrap();

        assert_eq!(payment.id.as_deref(), Some("pay_3af44644dd6d25c820a8"));
        assert_eq!(payment.payment_type, Some(PaymentType::Creditcard));
        assert_eq!(payment.last4.as_deref(), Some("1111"));
        assert_eq!(payment.created_at.unwrap().timestamp(), 1_349_942_085);
    }

    #[test]
    fn test_payment_type_rejects_unknown_wire_value() {
        let result: Result<PaymentType, _> = serde_json::from_value(json!("paypal"));
        assert!(result.is_err());
    }

    #[test]
    fn test_payment_type_round_trips() {
        for payment_type in [PaymentType::Creditcard, PaymentType::Debit] {
            assert_eq!(payment_type.as_str().parse::<PaymentType>(), Ok(payment_type));
        }
    }

    #[test]
    fn test_create_payment_requires_token() {
        let params = CreatePayment::with_token("  ");
        assert_eq!(params.validate(), Err(ValidationError::BlankToken));
    }

    #[test]
    fn test_create_payment_params_include_client_id() {
        let client = Client::with_id("client_88a388d9dd48f86c3136");
        let params = CreatePayment::with_token("098f6bcd4621d373cade4e832627b4f6").client(&client);

        assert!(params.validate().is_ok());
        let params = params.into_params();
        assert_eq!(params.get("token"), Some("098f6bcd4621d373cade4e832627b4f6"));
        assert_eq!(params.get("client"), Some("client_88a388d9dd48f86c3136"));
    }

    #[test]
    fn test_create_payment_rejects_client_without_id() {
        let params = CreatePayment::with_token("tok_1").client(&Client::default());
        assert_eq!(params.validate(), Err(ValidationError::MissingClient));
    }

    #[test]
    fn test_filter_maps_wire_keys() {
        let params = Payment::filter().by_card_type("visa").query_params();
        assert_eq!(params.get("card_type"), Some("visa"));
    }

    #[test]
    fn test_order_encodes_direction() {
        let params = Payment::order().by_created_at().desc().query_params();
        assert_eq!(params.get("order"), Some("created_at_desc"));
    }
}
