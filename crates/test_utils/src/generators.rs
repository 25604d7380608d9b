//! Property-Based Test Data Generators
//!
//! Proptest strategies for domain inputs, shared so property tests across
//! crates draw from the same ranges.

use proptest::prelude::*;

/// Strategy for a positive payment amount in minor units
pub fn payment_amount() -> impl Strategy<Value = i64> {
    1i64..=50_000
}

/// Strategy for a sequence of positive payment amounts
pub fn payment_amounts() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(payment_amount(), 0..12)
}

/// Strategy for a bill total in minor units, zero included
pub fn bill_total() -> impl Strategy<Value = i64> {
    0i64..=100_000
}

/// Strategy for a positive procedure code cost in minor units
pub fn code_cost() -> impl Strategy<Value = i64> {
    1i64..=1_000_000
}

/// Strategy for a positive code number
pub fn code_number() -> impl Strategy<Value = u64> {
    1u64..=99_999
}
