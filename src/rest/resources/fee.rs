//! Fee value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fee charged on a transaction.
///
/// Fees are not a standalone resource family; they appear nested inside
/// transactions and as optional create parameters. A fee used on creation
/// must carry its `amount` and its `payment` reference together; the
/// reference is a payment id (`pay_` prefix) naming the payment the fee is
/// charged to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// The fee type (e.g., "application").
    #[serde(rename = "type")]
    pub fee_type: Option<String>,

    /// Id of the application that charges the fee.
    pub application: Option<String>,

    /// Id of the payment the fee is charged to.
    pub payment: Option<String>,

    /// Fee amount in minor currency units.
    pub amount: Option<i64>,

    /// ISO 4217 currency code of the fee.
    pub currency: Option<String>,

    /// When the fee was billed.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub billed_at: Option<DateTime<Utc>>,
}

impl Fee {
    /// Creates a fee with the given amount, charged to the given payment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use paymill_api::rest::resources::Fee;
    ///
    /// let fee = Fee::new(420, "pay_3af44644dd6d25c820a8");
    /// assert_eq!(fee.amount, Some(420));
    /// ```
    #[must_use]
    pub fn new(amount: i64, payment: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            payment: Some(payment.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fee_deserializes_wire_fields() {
        let fee: Fee = serde_json::from_value(json!({
            "type": "application",
            "application": "app_1d70acbf80c8c35ce83680715c06be0d15c06be0d",
            "payment": "pay_917018675b21ca03c4fb",
            "amount": 420,
            "currency": "EUR",
            "billed_at": 1349946151
        }))
        .unwrap();

        assert_eq!(fee.fee_type.as_deref(), Some("application"));
        assert_eq!(fee.payment.as_deref(), Some("pay_917018675b21ca03c4fb"));
        assert_eq!(fee.amount, Some(420));
        assert_eq!(fee.billed_at.unwrap().timestamp(), 1_349_946_151);
    }

    #[test]
    fn test_fee_tolerates_missing_fields() {
        let fee: Fee = serde_json::from_value(json!({})).unwrap();
        assert_eq!(fee, Fee::default());
    }

    #[test]
    fn test_new_sets_amount_and_payment() {
        let fee = Fee::new(100, "pay_1");
        assert_eq!(fee.amount, Some(100));
        assert_eq!(fee.payment.as_deref(), Some("pay_1"));
        assert!(fee.currency.is_none());
    }
}
