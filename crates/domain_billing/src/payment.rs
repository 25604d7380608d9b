//! Payment records
//!
//! A payment is created once, validated up front, and immutable thereafter.
//! Each payment belongs to exactly one bill.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{Money, PaymentId};

use crate::error::BillingError;

/// How a payment was made
///
/// Input is matched case-insensitively; the canonical variant is what gets
/// stored. Anything outside the four recognized methods is rejected at
/// construction, so a bill never holds a payment with an unset method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash
    Cash,
    /// Credit card
    Credit,
    /// Insurance payout
    Insurance,
    /// Check/cheque
    Check,
}

impl PaymentMethod {
    /// Returns the canonical method name
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Credit => "Credit",
            PaymentMethod::Insurance => "Insurance",
            PaymentMethod::Check => "Check",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("cash") {
            Ok(PaymentMethod::Cash)
        } else if s.eq_ignore_ascii_case("credit") {
            Ok(PaymentMethod::Credit)
        } else if s.eq_ignore_ascii_case("insurance") {
            Ok(PaymentMethod::Insurance)
        } else if s.eq_ignore_ascii_case("check") {
            Ok(PaymentMethod::Check)
        } else {
            Err(BillingError::InvalidPayment(format!(
                "Invalid payment method: {s}"
            )))
        }
    }
}

/// A payment applied to a bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Amount paid, in minor units; always strictly positive
    pub amount: Money,
    /// When the payment was made
    pub occurred_at: DateTime<Utc>,
    /// How the payment was made
    pub method: PaymentMethod,
}

impl Payment {
    /// Creates a new payment
    ///
    /// # Errors
    ///
    /// Returns `BillingError::InvalidPayment` if the amount is not strictly
    /// positive.
    pub fn new(
        amount: Money,
        occurred_at: DateTime<Utc>,
        method: PaymentMethod,
    ) -> Result<Self, BillingError> {
        if !amount.is_positive() {
            return Err(BillingError::InvalidPayment(format!(
                "Payment amount must be positive: {amount}"
            )));
        }

        Ok(Self {
            id: PaymentId::new_v7(),
            amount,
            occurred_at,
            method,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_is_case_insensitive() {
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!("CREDIT".parse::<PaymentMethod>().unwrap(), PaymentMethod::Credit);
        assert_eq!("Insurance".parse::<PaymentMethod>().unwrap(), PaymentMethod::Insurance);
        assert_eq!("cHeCk".parse::<PaymentMethod>().unwrap(), PaymentMethod::Check);
    }

    #[test]
    fn test_unrecognized_method_is_rejected() {
        let result = "bitcoin".parse::<PaymentMethod>();
        assert!(matches!(result, Err(BillingError::InvalidPayment(_))));
    }

    #[test]
    fn test_canonical_name_survives_lowercase_input() {
        let method = "insurance".parse::<PaymentMethod>().unwrap();
        assert_eq!(method.to_string(), "Insurance");
    }

    #[test]
    fn test_zero_amount_payment_is_rejected() {
        let result = Payment::new(Money::ZERO, Utc::now(), PaymentMethod::Cash);
        assert!(matches!(result, Err(BillingError::InvalidPayment(_))));
    }

    #[test]
    fn test_negative_amount_payment_is_rejected() {
        let result = Payment::new(Money::from_minor(-100), Utc::now(), PaymentMethod::Cash);
        assert!(matches!(result, Err(BillingError::InvalidPayment(_))));
    }

    #[test]
    fn test_positive_amount_payment_is_accepted() {
        let payment = Payment::new(Money::from_minor(1), Utc::now(), PaymentMethod::Check).unwrap();
        assert_eq!(payment.amount.minor_units(), 1);
        assert_eq!(payment.method, PaymentMethod::Check);
    }
}
