//! Billing domain errors

use core_kernel::{Money, MoneyError};
use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// Bill not found
    #[error("Bill not found: {0}")]
    BillNotFound(String),

    /// Payment amount exceeds the remaining balance
    #[error("Tried to overpay: {attempted} exceeds remaining balance {remaining}")]
    Overpay { attempted: Money, remaining: Money },

    /// Malformed payment input (non-positive amount, unrecognized method)
    #[error("Invalid payment: {0}")]
    InvalidPayment(String),

    /// Arithmetic failure while totalling amounts
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
