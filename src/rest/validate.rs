//! Pre-flight argument validation.
//!
//! Pure, stateless predicates invoked before a request is built. Each
//! returns a [`ValidationError`] naming the violated rule, so invalid
//! arguments are rejected locally without any network I/O. This is distinct
//! from server-side rejections, which arrive as API errors.
//!
//! A value is *blank* when it is empty or whitespace-only.
//!
//! # Example
//!
//! ```rust
//! use paymill_api::rest::validate;
//!
//! assert!(validate::amount(Some(0)).is_ok());
//! assert!(validate::amount(Some(-1)).is_err());
//! assert!(validate::amount(None).is_err());
//! ```

use thiserror::Error;

use crate::rest::resources::{Client, Fee, Offer, Payment};

/// The prefix identifying a payment-resource reference.
const PAYMENT_ID_PREFIX: &str = "pay_";

/// An invalid-argument error raised before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An id was blank.
    #[error("Id cannot be blank")]
    BlankId,

    /// A token was blank.
    #[error("Token cannot be blank")]
    BlankToken,

    /// A currency code was blank.
    #[error("Currency cannot be blank")]
    BlankCurrency,

    /// A name was blank.
    #[error("Name cannot be blank")]
    BlankName,

    /// An interval was blank.
    #[error("Interval cannot be blank")]
    BlankInterval,

    /// An amount was missing or negative.
    #[error("Amount cannot be blank or negative")]
    InvalidAmount,

    /// A trial period was negative.
    #[error("Trial period days cannot be negative")]
    NegativeTrialPeriodDays,

    /// A fee amount was given without a fee payment.
    #[error("When fee amount is given, fee payment is mandatory")]
    FeePaymentMissing,

    /// A fee payment was given without a fee amount.
    #[error("When fee payment is given, fee amount is mandatory")]
    FeeAmountMissing,

    /// A fee amount was negative.
    #[error("Fee amount cannot be negative")]
    NegativeFeeAmount,

    /// A fee payment reference did not carry the `pay_` prefix.
    #[error("Fee payment should start with 'pay_' prefix")]
    InvalidFeePayment,

    /// A payment reference was missing or carried a blank id.
    #[error("Payment or its id cannot be blank")]
    MissingPayment,

    /// An offer reference was missing or carried a blank id.
    #[error("Offer or its id cannot be blank")]
    MissingOffer,

    /// A client reference was missing or carried a blank id.
    #[error("Client or its id cannot be blank")]
    MissingClient,

    /// A status wire value was not part of the closed set.
    #[error("Invalid status value '{value}'")]
    InvalidStatus {
        /// The unrecognized wire value.
        value: String,
    },
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates that an id is non-blank.
///
/// # Errors
///
/// Returns [`ValidationError::BlankId`] if the id is blank.
pub fn id(id: &str) -> Result<(), ValidationError> {
    if is_blank(id) {
        return Err(ValidationError::BlankId);
    }
    Ok(())
}

/// Validates that a token is non-blank.
///
/// # Errors
///
/// Returns [`ValidationError::BlankToken`] if the token is blank.
pub fn token(token: &str) -> Result<(), ValidationError> {
    if is_blank(token) {
        return Err(ValidationError::BlankToken);
    }
    Ok(())
}

/// Validates that a currency code is non-blank.
///
/// # Errors
///
/// Returns [`ValidationError::BlankCurrency`] if the currency is blank.
pub fn currency(currency: &str) -> Result<(), ValidationError> {
    if is_blank(currency) {
        return Err(ValidationError::BlankCurrency);
    }
    Ok(())
}

/// Validates that a name is non-blank.
///
/// # Errors
///
/// Returns [`ValidationError::BlankName`] if the name is blank.
pub fn name(name: &str) -> Result<(), ValidationError> {
    if is_blank(name) {
        return Err(ValidationError::BlankName);
    }
    Ok(())
}

/// Validates that a subscription interval is non-blank.
///
/// # Errors
///
/// Returns [`ValidationError::BlankInterval`] if the interval is blank.
pub fn interval(interval: &str) -> Result<(), ValidationError> {
    if is_blank(interval) {
        return Err(ValidationError::BlankInterval);
    }
    Ok(())
}

/// Validates that an amount is present and non-negative.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAmount`] if the amount is `None` or
/// negative.
pub fn amount(amount: Option<i64>) -> Result<(), ValidationError> {
    match amount {
        Some(amount) if amount >= 0 => Ok(()),
        _ => Err(ValidationError::InvalidAmount),
    }
}

/// Validates that a trial period, when given, is non-negative.
///
/// `None` means "unspecified" and passes.
///
/// # Errors
///
/// Returns [`ValidationError::NegativeTrialPeriodDays`] if the value is
/// negative.
pub fn trial_period_days(days: Option<i32>) -> Result<(), ValidationError> {
    match days {
        Some(days) if days < 0 => Err(ValidationError::NegativeTrialPeriodDays),
        _ => Ok(()),
    }
}

/// Validates a fee.
///
/// A fee must carry its amount and payment reference together or not at
/// all. When both are present, the amount must be non-negative and the
/// payment reference must carry the `pay_` prefix. `None` passes.
///
/// # Errors
///
/// Returns the matching [`ValidationError`] variant for the first violated
/// rule.
pub fn fee(fee: Option<&Fee>) -> Result<(), ValidationError> {
    let Some(fee) = fee else { return Ok(()) };

    let payment = fee.payment.as_deref().filter(|p| !is_blank(p));
    match (fee.amount, payment) {
        (Some(_), None) => Err(ValidationError::FeePaymentMissing),
        (None, Some(_)) => Err(ValidationError::FeeAmountMissing),
        (Some(amount), Some(_)) if amount < 0 => Err(ValidationError::NegativeFeeAmount),
        (Some(_), Some(payment)) if !payment.starts_with(PAYMENT_ID_PREFIX) => {
            Err(ValidationError::InvalidFeePayment)
        }
        _ => Ok(()),
    }
}

/// Validates that a payment reference is present with a non-blank id.
///
/// # Errors
///
/// Returns [`ValidationError::MissingPayment`] otherwise.
pub fn payment(payment: Option<&Payment>) -> Result<(), ValidationError> {
    match payment.and_then(|p| p.id.as_deref()) {
        Some(id) if !is_blank(id) => Ok(()),
        _ => Err(ValidationError::MissingPayment),
    }
}

/// Validates that an offer reference is present with a non-blank id.
///
/// # Errors
///
/// Returns [`ValidationError::MissingOffer`] otherwise.
pub fn offer(offer: Option<&Offer>) -> Result<(), ValidationError> {
    match offer.and_then(|o| o.id.as_deref()) {
        Some(id) if !is_blank(id) => Ok(()),
        _ => Err(ValidationError::MissingOffer),
    }
}

/// Validates that a client reference is present with a non-blank id.
///
/// # Errors
///
/// Returns [`ValidationError::MissingClient`] otherwise.
pub fn client(client: Option<&Client>) -> Result<(), ValidationError> {
    match client.and_then(|c| c.id.as_deref()) {
        Some(id) if !is_blank(id) => Ok(()),
        _ => Err(ValidationError::MissingClient),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee_with(amount: Option<i64>, payment: Option<&str>) -> Fee {
        Fee {
            amount,
            payment: payment.map(String::from),
            ..Fee::default()
        }
    }

    #[test]
    fn test_blank_checks_reject_empty_and_whitespace() {
        assert_eq!(id(""), Err(ValidationError::BlankId));
        assert_eq!(id("   "), Err(ValidationError::BlankId));
        assert!(id("tran_123").is_ok());

        assert_eq!(token(" \t"), Err(ValidationError::BlankToken));
        assert!(token("tok_abc").is_ok());

        assert_eq!(currency(""), Err(ValidationError::BlankCurrency));
        assert!(currency("EUR").is_ok());

        assert_eq!(name(" "), Err(ValidationError::BlankName));
        assert!(name("Premium").is_ok());

        assert_eq!(interval(""), Err(ValidationError::BlankInterval));
        assert!(interval("1 MONTH").is_ok());
    }

    #[test]
    fn test_amount_rejects_none_and_negative() {
        assert_eq!(amount(None), Err(ValidationError::InvalidAmount));
        assert_eq!(amount(Some(-1)), Err(ValidationError::InvalidAmount));
        assert!(amount(Some(0)).is_ok());
        assert!(amount(Some(4200)).is_ok());
    }

    #[test]
    fn test_trial_period_days_allows_unspecified() {
        assert!(trial_period_days(None).is_ok());
        assert!(trial_period_days(Some(0)).is_ok());
        assert!(trial_period_days(Some(14)).is_ok());
        assert_eq!(
            trial_period_days(Some(-1)),
            Err(ValidationError::NegativeTrialPeriodDays)
        );
    }

    #[test]
    fn test_fee_requires_amount_and_payment_together() {
        assert!(fee(None).is_ok());
        assert!(fee(Some(&fee_with(None, None))).is_ok());

        assert_eq!(
            fee(Some(&fee_with(Some(100), None))),
            Err(ValidationError::FeePaymentMissing)
        );
        assert_eq!(
            fee(Some(&fee_with(None, Some("pay_123")))),
            Err(ValidationError::FeeAmountMissing)
        );
    }

    #[test]
    fn test_fee_rejects_negative_amount() {
        assert_eq!(
            fee(Some(&fee_with(Some(-5), Some("pay_123")))),
            Err(ValidationError::NegativeFeeAmount)
        );
    }

    #[test]
    fn test_fee_requires_payment_prefix() {
        assert_eq!(
            fee(Some(&fee_with(Some(100), Some("xyz_1")))),
            Err(ValidationError::InvalidFeePayment)
        );
        assert!(fee(Some(&fee_with(Some(100), Some("pay_1")))).is_ok());
    }

    #[test]
    fn test_fee_treats_blank_payment_as_absent() {
        assert_eq!(
            fee(Some(&fee_with(Some(100), Some("  ")))),
            Err(ValidationError::FeePaymentMissing)
        );
    }

    #[test]
    fn test_reference_checks_require_non_blank_id() {
        assert_eq!(payment(None), Err(ValidationError::MissingPayment));

        let blank = Payment {
            id: Some("  ".to_string()),
            ..Payment::default()
        };
        assert_eq!(payment(Some(&blank)), Err(ValidationError::MissingPayment));

        let payment_ok = Payment {
            id: Some("pay_123".to_string()),
            ..Payment::default()
        };
        assert!(payment(Some(&payment_ok)).is_ok());

        assert_eq!(offer(None), Err(ValidationError::MissingOffer));
        let offer_ok = Offer {
            id: Some("offer_123".to_string()),
            ..Offer::default()
        };
        assert!(offer(Some(&offer_ok)).is_ok());

        assert_eq!(client(None), Err(ValidationError::MissingClient));
        let client_ok = Client {
            id: Some("client_123".to_string()),
            ..Client::default()
        };
        assert!(client(Some(&client_ok)).is_ok());
    }
}
