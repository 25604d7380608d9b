//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful error
//! messages than standard assertions. Record comparison is explicit and
//! field-wise rather than relying on blanket equality, so the internal id
//! can be included or excluded deliberately.

use domain_billing::Bill;
use domain_catalog::CptCode;

/// Asserts that two procedure code records agree on every field except the
/// internal id
///
/// # Panics
///
/// Panics naming the first differing field.
pub fn assert_same_code_fields(actual: &CptCode, expected: &CptCode) {
    assert_eq!(
        actual.code, expected.code,
        "code number mismatch: actual={}, expected={}",
        actual.code, expected.code
    );
    assert_eq!(
        actual.description, expected.description,
        "description mismatch"
    );
    assert_eq!(
        actual.cost, expected.cost,
        "cost mismatch: actual={}, expected={}",
        actual.cost, expected.cost
    );
    assert_eq!(
        actual.version, expected.version,
        "version mismatch: actual={}, expected={}",
        actual.version, expected.version
    );
    assert_eq!(
        actual.is_archived, expected.is_archived,
        "archive state mismatch"
    );
    assert_eq!(
        (actual.time_range_min, actual.time_range_max),
        (expected.time_range_min, expected.time_range_max),
        "duration range mismatch"
    );
}

/// Asserts that a bill is settled: paid flag set and zero balance
///
/// # Panics
///
/// Panics if the bill is unpaid or still carries a balance.
pub fn assert_bill_settled(bill: &Bill) {
    assert!(
        bill.is_paid(),
        "expected bill {} to be paid, balance={}",
        bill.id(),
        bill.balance()
    );
    assert!(
        bill.balance().is_zero(),
        "paid bill {} has nonzero balance {}",
        bill.id(),
        bill.balance()
    );
}

/// Asserts that a bill is open with the expected remaining balance
///
/// # Panics
///
/// Panics if the bill is paid or the balance differs.
pub fn assert_bill_open(bill: &Bill, expected_balance_minor_units: i64) {
    assert!(
        !bill.is_paid(),
        "expected bill {} to be open but it is paid",
        bill.id()
    );
    assert_eq!(
        bill.balance().minor_units(),
        expected_balance_minor_units,
        "balance mismatch for bill {}",
        bill.id()
    );
}
