//! Refund resource.
//!
//! A refund pays a charged amount (or part of it) back to the client. It is
//! created by posting against the transaction to refund, so the creation
//! call is a dedicated function rather than the generic create; refunds can
//! otherwise be shown and listed but never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::clients::HttpClient;
use crate::rest::envelope;
use crate::rest::errors::ResourceError;
use crate::rest::params::{date_range, ParamList, QueryParams, SortOrder};
use crate::rest::resource::{Operation, Resource};
use crate::rest::resources::Transaction;
use crate::rest::validate::{self, ValidationError};

/// A full or partial repayment of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    /// The server-assigned refund id.
    pub id: Option<String>,

    /// The refunded transaction.
    pub transaction: Option<Box<Transaction>>,

    /// Refunded amount in minor currency units.
    pub amount: Option<i64>,

    /// Current refund status.
    pub status: Option<RefundStatus>,

    /// Free-form description.
    pub description: Option<String>,

    /// Whether the refund was made with a live API key.
    pub livemode: Option<bool>,

    /// Response code of the acquirer (20000 on success).
    pub response_code: Option<u32>,

    /// When the refund was created.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the refund was last updated.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,

    /// App id that created this refund, or `None` if created by yourself.
    pub app_id: Option<String>,
}

impl Refund {
    /// Creates an instance carrying only the given id, for use with
    /// id-addressed operations.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Creates the filter builder for refund lists.
    #[must_use]
    pub fn filter() -> RefundFilter {
        RefundFilter::new()
    }

    /// Creates the order builder for refund lists.
    #[must_use]
    pub fn order() -> RefundOrder {
        RefundOrder::new()
    }

    /// Refunds the given amount of a transaction.
    ///
    /// Issues `POST refunds/{transaction_id}`. The transaction id and the
    /// amount are validated before any request is made.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when the transaction carries no id or
    /// the amount is negative; otherwise propagates API and transport
    /// errors.
    pub async fn refund_transaction(
        client: &HttpClient,
        transaction: &Transaction,
        amount: i64,
        description: Option<&str>,
    ) -> Result<Option<Self>, ResourceError> {
        let id = transaction.id.as_deref().unwrap_or_default();
        validate::id(id)?;
        validate::amount(Some(amount))?;

        let mut form = ParamList::new();
        form.push("amount", amount.to_string());
        form.push_opt("description", description);

        let response = client
            .post(&format!("{}/{id}", Self::PATH), form.as_pairs())
            .await?;
        envelope::single(response.body)
    }
}

impl Resource for Refund {
    type Create = ();
    type Filter = RefundFilter;
    type Order = RefundOrder;

    const NAME: &'static str = "Refund";
    const PATH: &'static str = "refunds";
    const OPERATIONS: &'static [Operation] = &[Operation::Show, Operation::List];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// The lifecycle states of a refund.
///
/// The wire mapping is a closed set; deserializing an unrecognized value is
/// a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    /// Not yet processed.
    Open,
    /// Processing has started.
    Pending,
    /// Successfully paid back.
    Refunded,
}

impl RefundStatus {
    /// Returns the wire string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for RefundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefundStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(Self::Open),
            "pending" => Ok(Self::Pending),
            "refunded" => Ok(Self::Refunded),
            _ => Err(ValidationError::InvalidStatus {
                value: value.to_string(),
            }),
        }
    }
}

/// Query filter for refund lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefundFilter {
    client: Option<String>,
    transaction: Option<String>,
    amount: Option<String>,
    created_at: Option<String>,
}

impl RefundFilter {
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

    /// Filters by transaction id.
    #[must_use]
    pub fn by_transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction = Some(transaction_id.into());
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

impl QueryParams for RefundFilter {
    fn query_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("client", self.client.as_ref());
        params.push_opt("transaction", self.transaction.as_ref());
        params.push_opt("amount", self.amount.as_ref());
        params.push_opt("created_at", self.created_at.as_ref());
        params
    }
}

/// Sort order for refund lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefundOrder(SortOrder);

impl RefundOrder {
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

impl QueryParams for RefundOrder {
    fn query_params(&self) -> ParamList {
        self.0.query_params()
    }
}
