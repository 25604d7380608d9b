//! Charge totalling for closed encounters
//!
//! The bridge between an encounter's attached procedure codes and a bill's
//! initial total due. Pure: it reads the resolved snapshots it is handed
//! and produces a sum, with no catalog access and no side effects.

use core_kernel::Money;
use domain_catalog::CptCode;

use crate::error::BillingError;

/// Sums the costs of the attached procedure code snapshots
///
/// The slice is the ordered attachment list resolved against the catalog
/// when the encounter closed; summation preserves that order. An empty list
/// yields a zero total, which is a valid bill.
///
/// # Errors
///
/// Returns `BillingError::Money` if the sum overflows.
pub fn total_charges(codes: &[CptCode]) -> Result<Money, BillingError> {
    Money::total(codes.iter().map(|c| &c.cost)).map_err(BillingError::from)
}
