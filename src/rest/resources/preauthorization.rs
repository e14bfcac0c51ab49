//! Preauthorization resource.
//!
//! A preauthorization reserves an amount on a credit card without charging
//! it. The reserved amount can later be captured by creating a transaction
//! from the preauthorization, or released again by deleting it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::rest::params::{date_range, CreateParams, ParamList, QueryParams, SortOrder};
use crate::rest::resource::{Operation, Resource};
use crate::rest::resources::{Client, Payment};
use crate::rest::validate::{self, ValidationError};

/// A reserved amount on a credit card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preauthorization {
    /// The server-assigned preauthorization id.
    pub id: Option<String>,

    /// Reserved amount in minor currency units.
    pub amount: Option<i64>,

    /// ISO 4217 currency code.
    pub currency: Option<String>,

    /// Current preauthorization status.
    pub status: Option<PreauthorizationStatus>,

    /// Whether the preauthorization was made with a live API key.
    pub livemode: Option<bool>,

    /// The reserved payment.
    pub payment: Option<Payment>,

    /// The client the preauthorization belongs to.
    pub client: Option<Client>,

    /// When the preauthorization was created.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the preauthorization was last updated.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,

    /// App id that created this preauthorization, or `None` if created by
    /// yourself.
    pub app_id: Option<String>,
}

impl Preauthorization {
    /// Creates an instance carrying only the given id, for use with
    /// id-addressed operations.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Creates the filter builder for preauthorization lists.
    #[must_use]
    pub fn filter() -> PreauthorizationFilter {
        PreauthorizationFilter::new()
    }

    /// Creates the order builder for preauthorization lists.
    #[must_use]
    pub fn order() -> PreauthorizationOrder {
        PreauthorizationOrder::new()
    }
}

impl Resource for Preauthorization {
    type Create = CreatePreauthorization;
    type Filter = PreauthorizationFilter;
    type Order = PreauthorizationOrder;

    const NAME: &'static str = "Preauthorization";
    const PATH: &'static str = "preauthorizations";
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

/// The lifecycle states of a preauthorization.
///
/// The wire mapping is a closed set; deserializing an unrecognized value is
/// a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreauthorizationStatus {
    /// Not yet processed.
    Open,
    /// Processing has started.
    Pending,
    /// Captured into a transaction.
    Closed,
    /// Released without capture.
    Deleted,
    /// Amount reserved.
    Preauth,
    /// Reservation failed.
    Failed,
}

impl PreauthorizationStatus {
    /// Returns the wire string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Closed => "closed",
            Self::Deleted => "deleted",
            Self::Preauth => "preauth",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PreauthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreauthorizationStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(Self::Open),
            "pending" => Ok(Self::Pending),
            "closed" => Ok(Self::Closed),
            "deleted" => Ok(Self::Deleted),
            "preauth" => Ok(Self::Preauth),
            "failed" => Ok(Self::Failed),
            _ => Err(ValidationError::InvalidStatus {
                value: value.to_string(),
            }),
        }
    }
}

/// The source a preauthorization reserves from.
#[derive(Debug, Clone)]
enum PreauthorizationSource {
    Token(String),
    Payment(Payment),
}

/// Parameters for creating a preauthorization.
#[derive(Debug, Clone)]
pub struct CreatePreauthorization {
    source: PreauthorizationSource,
    amount: i64,
    currency: String,
}

impl CreatePreauthorization {
    /// Reserves from a bridge token.
    #[must_use]
    pub fn with_token(token: impl Into<String>, amount: i64, currency: impl Into<String>) -> Self {
        Self {
            source: PreauthorizationSource::Token(token.into()),
            amount,
            currency: currency.into(),
        }
    }

    /// Reserves from an existing payment.
    #[must_use]
    pub fn with_payment(payment: &Payment, amount: i64, currency: impl Into<String>) -> Self {
        Self {
            source: PreauthorizationSource::Payment(payment.clone()),
            amount,
            currency: currency.into(),
        }
    }
}

impl CreateParams for CreatePreauthorization {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.source {
            PreauthorizationSource::Token(token) => validate::token(token)?,
            PreauthorizationSource::Payment(payment) => validate::payment(Some(payment))?,
        }
        validate::amount(Some(self.amount))?;
        validate::currency(&self.currency)?;
        Ok(())
    }

    fn into_params(self) -> ParamList {
        let mut params = ParamList::new();
        match self.source {
            PreauthorizationSource::Token(token) => params.push("token", token),
            PreauthorizationSource::Payment(payment) => {
                params.push_opt("payment", payment.id);
            }
        }
        params.push("amount", self.amount.to_string());
        params.push("currency", self.currency);
        params
    }
}

/// Query filter for preauthorization lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreauthorizationFilter {
    client: Option<String>,
    payment: Option<String>,
    amount: Option<String>,
    created_at: Option<String>,
}

impl PreauthorizationFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by client id.
    #[must_use]
    pub fn by_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client = Some(client_id.into());
        self
    }

    /// Filters by payment id.
    #[must_use]
    pub fn by_payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.payment = Some(payment_id.into());
        self
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

    /// Filters by creation date range.
    #[must_use]
    pub fn by_created_at(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.created_at = Some(date_range(start, end));
        self
    }
}

impl QueryParams for PreauthorizationFilter {
    fn query_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("client", self.client.as_ref());
        params.push_opt("payment", self.payment.as_ref());
        params.push_opt("amount", self.amount.as_ref());
        params.push_opt("created_at", self.created_at.as_ref());
        params
    }
}

/// Sort order for preauthorization lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreauthorizationOrder(SortOrder);

impl PreauthorizationOrder {
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

impl QueryParams for PreauthorizationOrder {
    fn query_params(&self) -> ParamList {
        self.0.query_params()
    }
}
