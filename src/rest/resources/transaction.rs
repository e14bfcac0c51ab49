//! Transaction resource.
//!
//! A transaction is the charging of a credit card or a direct debit. A new
//! transaction needs a valid token, payment, or preauthorization as its
//! source; every transaction gets a server-assigned unique identifier.
//! Refunds are issued through the separate refund resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::rest::params::{date_range, CreateParams, ParamList, QueryParams, SortOrder};
use crate::rest::resource::{Operation, Resource};
use crate::rest::resources::{Client, Fee, Payment, Preauthorization, Refund};
use crate::rest::validate::{self, ValidationError};

/// The charging of a credit card or a direct debit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The server-assigned transaction id.
    pub id: Option<String>,

    /// Amount in minor currency units (e.g., cents).
    pub amount: Option<i64>,

    /// The originally requested amount; differs from `amount` after partial
    /// refunds.
    pub origin_amount: Option<i64>,

    /// ISO 4217 currency code.
    pub currency: Option<String>,

    /// Current transaction status.
    pub status: Option<TransactionStatus>,

    /// Free-form description. Sent on partial updates.
    pub description: Option<String>,

    /// Whether the transaction was made with a live API key.
    pub livemode: Option<bool>,

    /// Refunds issued against this transaction.
    pub refunds: Option<Vec<Refund>>,

    /// The payment that was charged.
    pub payment: Option<Payment>,

    /// The client the transaction belongs to.
    pub client: Option<Client>,

    /// The preauthorization the transaction was captured from.
    pub preauthorization: Option<Preauthorization>,

    /// When the transaction was created.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the transaction was last updated.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Response code of the acquirer (20000 on success).
    pub response_code: Option<u32>,

    /// Short id shown on the client's bank statement.
    pub short_id: Option<String>,

    /// Whether the transaction was flagged as fraud.
    pub is_fraud: Option<bool>,

    /// Fees charged on this transaction.
    pub fees: Option<Vec<Fee>>,

    /// App id that created this transaction, or `None` if created by
    /// yourself.
    pub app_id: Option<String>,
}

impl Transaction {
    /// Creates an instance carrying only the given id, for use with
    /// id-addressed operations.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Creates the filter builder for transaction lists.
    #[must_use]
    pub fn filter() -> TransactionFilter {
        TransactionFilter::new()
    }

    /// Creates the order builder for transaction lists.
    #[must_use]
    pub fn order() -> TransactionOrder {
        TransactionOrder::new()
    }
}

impl Resource for Transaction {
    type Create = CreateTransaction;
    type Filter = TransactionFilter;
    type Order = TransactionOrder;

    const NAME: &'static str = "Transaction";
    const PATH: &'static str = "transactions";
    const OPERATIONS: &'static [Operation] = &[
        Operation::Show,
        Operation::Create,
        Operation::Update,
        Operation::List,
    ];

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn update_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("description", self.description.as_ref());
        params
    }
}

/// The lifecycle states of a transaction.
///
/// The wire mapping is a closed set; deserializing an unrecognized value is
/// a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Not yet processed.
    Open,
    /// Processing has started.
    Pending,
    /// Successfully charged.
    Closed,
    /// Charging failed.
    Failed,
    /// Partially paid back.
    PartialRefunded,
    /// Fully paid back.
    Refunded,
    /// Reserved via preauthorization, not yet captured.
    Preauth,
    /// Reversed by the card holder's bank.
    Chargeback,
}

impl TransactionStatus {
    /// Returns the wire string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Closed => "closed",
            Self::Failed => "failed",
            Self::PartialRefunded => "partial_refunded",
            Self::Refunded => "refunded",
            Self::Preauth => "preauth",
            Self::Chargeback => "chargeback",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(Self::Open),
            "pending" => Ok(Self::Pending),
            "closed" => Ok(Self::Closed),
            "failed" => Ok(Self::Failed),
            "partial_refunded" => Ok(Self::PartialRefunded),
            "refunded" => Ok(Self::Refunded),
            "preauth" => Ok(Self::Preauth),
            "chargeback" => Ok(Self::Chargeback),
            _ => Err(ValidationError::InvalidStatus {
                value: value.to_string(),
            }),
        }
    }
}

/// The source a new transaction is charged from.
#[derive(Debug, Clone)]
enum TransactionSource {
    Token(String),
    Payment(Payment),
    Preauthorization(Preauthorization),
}

/// Parameters for creating a transaction.
///
/// A transaction is created from exactly one source: a bridge token, an
/// existing payment, or a preauthorization to capture.
///
/// # Example
///
/// ```rust,ignore
/// let transaction = Transaction::create(
///     &client,
///     CreateTransaction::with_token("098f6bcd4621d373cade4e832627b4f6", 4200, "EUR")
///         .description("order 42")
///         .fee(Fee::new(420, "pay_3af44644dd6d25c820a8")),
/// )
/// .await?;
/// ```
#[derive(Debug, Clone)]
pub struct CreateTransaction {
    source: TransactionSource,
    client: Option<Client>,
    amount: i64,
    currency: String,
    description: Option<String>,
    fee: Option<Fee>,
}

impl CreateTransaction {
    fn new(source: TransactionSource, amount: i64, currency: impl Into<String>) -> Self {
        Self {
            source,
            client: None,
            amount,
            currency: currency.into(),
            description: None,
            fee: None,
        }
    }

    /// Charges a bridge token.
    #[must_use]
    pub fn with_token(token: impl Into<String>, amount: i64, currency: impl Into<String>) -> Self {
        Self::new(TransactionSource::Token(token.into()), amount, currency)
    }

    /// Charges an existing payment.
    #[must_use]
    pub fn with_payment(payment: &Payment, amount: i64, currency: impl Into<String>) -> Self {
        Self::new(
            TransactionSource::Payment(payment.clone()),
            amount,
            currency,
        )
    }

    /// Captures a preauthorization.
    #[must_use]
    pub fn with_preauthorization(
        preauthorization: &Preauthorization,
        amount: i64,
        currency: impl Into<String>,
    ) -> Self {
        Self::new(
            TransactionSource::Preauthorization(preauthorization.clone()),
            amount,
            currency,
        )
    }

    /// Associates the transaction with a client.
    #[must_use]
    pub fn client(mut self, client: &Client) -> Self {
        self.client = Some(client.clone());
        self
    }

    /// Sets the transaction description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Charges a fee on top of the transaction.
    #[must_use]
    pub fn fee(mut self, fee: Fee) -> Self {
        self.fee = Some(fee);
        self
    }
}

impl CreateParams for CreateTransaction {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.source {
            TransactionSource::Token(token) => validate::token(token)?,
            TransactionSource::Payment(payment) => validate::payment(Some(payment))?,
            TransactionSource::Preauthorization(preauthorization) => {
                validate::id(preauthorization.id.as_deref().unwrap_or_default())?;
            }
        }
        validate::amount(Some(self.amount))?;
        validate::currency(&self.currency)?;
        validate::fee(self.fee.as_ref())?;
        if self.client.is_some() {
            validate::client(self.client.as_ref())?;
        }
        Ok(())
    }

    fn into_params(self) -> ParamList {
        let mut params = ParamList::new();
        match self.source {
            TransactionSource::Token(token) => params.push("token", token),
            TransactionSource::Payment(payment) => {
                params.push_opt("payment", payment.id);
            }
            TransactionSource::Preauthorization(preauthorization) => {
                params.push_opt("preauthorization", preauthorization.id);
            }
        }
        params.push("amount", self.amount.to_string());
        params.push("currency", self.currency);
        params.push_opt("client", self.client.and_then(|c| c.id));
        params.push_opt("description", self.description);
        if let Some(fee) = self.fee {
            params.push_opt("fee_amount", fee.amount);
            params.push_opt("fee_payment", fee.payment);
            params.push_opt("fee_currency", fee.currency);
        }
        params
    }
}

/// Query filter for transaction lists.
///
/// # Example
///
/// ```rust
/// use paymill_api::rest::resources::Transaction;
/// use paymill_api::rest::QueryParams;
///
/// let filter = Transaction::filter()
///     .by_client_id("client_88a388d9dd48f86c3136")
///     .by_amount_greater_than(1000);
///
/// let params = filter.query_params();
/// assert_eq!(params.get("client"), Some("client_88a388d9dd48f86c3136"));
/// assert_eq!(params.get("amount"), Some(">1000"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    client: Option<String>,
    payment: Option<String>,
    amount: Option<String>,
    description: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
    status: Option<String>,
}

impl TransactionFilter {
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

    /// Filters by description.
    #[must_use]
    pub fn by_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

    /// Filters by transaction status.
    #[must_use]
    pub fn by_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status.as_str().to_string());
        self
    }
}

impl QueryParams for TransactionFilter {
    fn query_params(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push_opt("client", self.client.as_ref());
        params.push_opt("payment", self.payment.as_ref());
        params.push_opt("amount", self.amount.as_ref());
        params.push_opt("description", self.description.as_ref());
        params.push_opt("created_at", self.created_at.as_ref());
        params.push_opt("updated_at", self.updated_at.as_ref());
        params.push_opt("status", self.status.as_ref());
        params
    }
}

/// Sort order for transaction lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionOrder(SortOrder);

impl TransactionOrder {
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

    /// Returns `true` if ascending order is selected.
    #[must_use]
    pub const fn is_asc(&self) -> bool {
        self.0.is_asc()
    }

    /// Returns `true` if descending order is selected.
    #[must_use]
    pub const fn is_desc(&self) -> bool {
        self.0.is_desc()
    }
}

impl QueryParams for TransactionOrder {
    fn query_params(&self) -> ParamList {
        self.0.query_params()
    }
}
