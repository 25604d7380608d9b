//! Bills for clinical encounters
//!
//! A bill snapshots its total due when the encounter closes and then
//! accepts payments until exactly paid off. Later catalog edits never
//! change an existing bill.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{BillId, Money, VisitId};

use crate::error::BillingError;
use crate::payment::Payment;

/// The number of days after the visit before an unpaid bill becomes
/// delinquent.
pub const DAYS_UNTIL_DELINQUENCY: i64 = 60;

/// Payment state of a bill
///
/// Paid is stored; the Unpaid/Delinquent split is derived from the clock on
/// every call and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillStatus {
    /// Fully paid; terminal
    Paid,
    /// Unpaid, with the visit more than 60 days in the past
    Delinquent,
    /// Unpaid, within the payment window
    Unpaid,
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BillStatus::Paid => "Paid",
            BillStatus::Delinquent => "Delinquent",
            BillStatus::Unpaid => "Unpaid",
        };
        write!(f, "{s}")
    }
}

/// The invoice for a single clinical encounter
///
/// # Invariants
///
/// - The payments never sum past the total due
/// - `is_paid` is true exactly when the payments cover the total
/// - The total due is fixed at creation and never recomputed
///
/// Fields are private so the only mutation is appending a payment through
/// the overpay check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier
    id: BillId,
    /// The encounter this bill pays for; read-only once set
    visit: VisitId,
    /// When the encounter took place; drives delinquency
    visit_date: DateTime<Utc>,
    /// Amount due, snapshotted at creation
    total_due: Money,
    /// Cached payoff flag
    is_paid: bool,
    /// Payments in settlement order; append-only
    payments: Vec<Payment>,
}

impl Bill {
    /// Creates an unpaid bill with the given snapshotted total due
    ///
    /// Callers normally go through `BillLedger::create_bill`, which derives
    /// the total from the encounter's attached procedure codes.
    pub fn new(id: BillId, visit: VisitId, visit_date: DateTime<Utc>, total_due: Money) -> Self {
        Self {
            id,
            visit,
            visit_date,
            total_due,
            is_paid: false,
            payments: Vec::new(),
        }
    }

    /// Returns the bill identifier
    pub fn id(&self) -> BillId {
        self.id
    }

    /// Returns the encounter this bill pays for
    pub fn visit(&self) -> VisitId {
        self.visit
    }

    /// Returns the encounter date
    pub fn visit_date(&self) -> DateTime<Utc> {
        self.visit_date
    }

    /// Returns the total amount due
    pub fn total_due(&self) -> Money {
        self.total_due
    }

    /// Returns true once the payments cover the total due
    pub fn is_paid(&self) -> bool {
        self.is_paid
    }

    /// Returns the payments in settlement order
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Total of all payments applied so far
    ///
    /// The overpay check keeps this at or below the total due, so the fold
    /// cannot overflow.
    pub fn amount_paid(&self) -> Money {
        self.payments
            .iter()
            .fold(Money::ZERO, |acc, p| acc + p.amount)
    }

    /// Remaining amount due, floored at zero
    pub fn balance(&self) -> Money {
        self.total_due.saturating_sub_floor(&self.amount_paid())
    }

    /// Applies a payment to this bill
    ///
    /// A payment below the remaining balance is appended; a payment equal
    /// to it is appended and settles the bill. There is no minimum partial
    /// amount.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::Overpay` when the amount exceeds the
    /// remaining balance, including any payment against a settled bill.
    /// The bill is left unmodified on rejection.
    pub fn add_payment(&mut self, payment: Payment) -> Result<(), BillingError> {
        let remainder = self.balance();

        if payment.amount > remainder {
            return Err(BillingError::Overpay {
                attempted: payment.amount,
                remaining: remainder,
            });
        }

        let settles = payment.amount == remainder;
        self.payments.push(payment);
        if settles {
            self.is_paid = true;
        }

        Ok(())
    }

    /// Status of the bill as of `now`
    ///
    /// Delinquency is measured in whole elapsed days from the encounter
    /// date, not from bill creation or the last payment, and is computed
    /// fresh on every call.
    pub fn status(&self, now: DateTime<Utc>) -> BillStatus {
        if self.is_paid {
            BillStatus::Paid
        } else if now.signed_duration_since(self.visit_date).num_days() > DAYS_UNTIL_DELINQUENCY {
            BillStatus::Delinquent
        } else {
            BillStatus::Unpaid
        }
    }
}
