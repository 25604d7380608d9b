//! Bill ledger
//!
//! The ledger creates bills from closed encounters and governs payment
//! acceptance against them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use core_kernel::{BillId, Money, VisitId};
use domain_catalog::CptCode;

use crate::bill::{Bill, BillStatus};
use crate::charges::total_charges;
use crate::error::BillingError;
use crate::payment::Payment;

/// The ledger of encounter bills
///
/// Owns every bill and an encounter-to-bill index; the back-reference from
/// a visit to its bill is a lookup, not an owning pointer.
///
/// # Invariants
///
/// - At most one bill exists per visit
/// - A bill's payments never sum past its total due
///
/// Mutation requires `&mut self`, so the read-check-write inside
/// [`BillLedger::add_payment`] is exclusive for any safe caller. Callers
/// that share a ledger across threads wrap it in a lock; the ledger itself
/// holds none and never blocks.
#[derive(Debug, Default)]
pub struct BillLedger {
    /// All bills by identifier
    bills: HashMap<BillId, Bill>,
    /// Lookup from encounter to its bill
    by_visit: HashMap<VisitId, BillId>,
}

impl BillLedger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the bill for a closed encounter
    ///
    /// `attached` is the ordered list of procedure code snapshots already
    /// resolved against the catalog; the total due is summed from them here
    /// and never recomputed from the live catalog. An empty list produces a
    /// valid zero-balance unpaid bill.
    ///
    /// Exactly one bill exists per visit. Invoking this again for a visit
    /// that already has a bill returns the existing bill's id without
    /// creating a second one.
    ///
    /// # Arguments
    ///
    /// * `visit` - The encounter being billed
    /// * `visit_date` - When the encounter took place; drives delinquency
    /// * `attached` - The encounter's resolved procedure code snapshots
    ///
    /// # Errors
    ///
    /// Returns `BillingError::Money` if the charge total overflows.
    pub fn create_bill(
        &mut self,
        visit: VisitId,
        visit_date: DateTime<Utc>,
        attached: &[CptCode],
    ) -> Result<BillId, BillingError> {
        if let Some(existing) = self.by_visit.get(&visit) {
            return Ok(*existing);
        }

        let total_due = total_charges(attached)?;
        let id = BillId::new_v7();
        let bill = Bill::new(id, visit, visit_date, total_due);

        info!(%id, %visit, %total_due, "created bill");
        self.bills.insert(id, bill);
        self.by_visit.insert(visit, id);

        Ok(id)
    }

    /// Applies a payment to a bill
    ///
    /// # Arguments
    ///
    /// * `bill_id` - The bill to pay against
    /// * `payment` - The validated payment to apply
    ///
    /// # Errors
    ///
    /// - `BillingError::BillNotFound` if no bill has this id
    /// - `BillingError::Overpay` if the amount exceeds the remaining
    ///   balance; the bill is left unmodified
    pub fn add_payment(&mut self, bill_id: BillId, payment: Payment) -> Result<(), BillingError> {
        let bill = self
            .bills
            .get_mut(&bill_id)
            .ok_or_else(|| BillingError::BillNotFound(bill_id.to_string()))?;

        bill.add_payment(payment)?;
        debug!(%bill_id, is_paid = bill.is_paid(), "payment accepted");

        Ok(())
    }

    /// Remaining balance on a bill, floored at zero
    ///
    /// # Errors
    ///
    /// Returns `BillingError::BillNotFound` if no bill has this id.
    pub fn balance(&self, bill_id: BillId) -> Result<Money, BillingError> {
        self.bills
            .get(&bill_id)
            .map(Bill::balance)
            .ok_or_else(|| BillingError::BillNotFound(bill_id.to_string()))
    }

    /// Status of a bill as of `now`
    ///
    /// Recomputed from the clock on every call; the Unpaid/Delinquent
    /// distinction is never stored.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::BillNotFound` if no bill has this id.
    pub fn status(&self, bill_id: BillId, now: DateTime<Utc>) -> Result<BillStatus, BillingError> {
        self.bills
            .get(&bill_id)
            .map(|bill| bill.status(now))
            .ok_or_else(|| BillingError::BillNotFound(bill_id.to_string()))
    }

    /// Gets a bill by id
    pub fn get(&self, bill_id: &BillId) -> Option<&Bill> {
        self.bills.get(bill_id)
    }

    /// Finds the bill for a visit, if one has been created
    pub fn find_bill_by_visit(&self, visit: &VisitId) -> Option<&Bill> {
        self.by_visit.get(visit).and_then(|id| self.bills.get(id))
    }

    /// Number of bills in the ledger
    pub fn len(&self) -> usize {
        self.bills.len()
    }

    /// Returns true if the ledger holds no bills
    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::PaymentMethod;
    use domain_catalog::{CptCodeCatalog, CptCodeDraft};

    fn snapshots() -> Vec<CptCode> {
        let mut catalog = CptCodeCatalog::new();
        vec![
            catalog
                .add(CptCodeDraft::new(99202, "visit", 7500))
                .unwrap(),
            catalog
                .add(CptCodeDraft::new(99215, "extended visit", 25000))
                .unwrap(),
        ]
    }

    fn payment(amount: i64) -> Payment {
        Payment::new(Money::from_minor(amount), Utc::now(), PaymentMethod::Cash).unwrap()
    }

    #[test]
    fn test_create_bill_snapshots_the_total() {
        let mut ledger = BillLedger::new();
        let bill_id = ledger
            .create_bill(VisitId::new(), Utc::now(), &snapshots())
            .unwrap();

        let bill = ledger.get(&bill_id).unwrap();
        assert_eq!(bill.total_due(), Money::from_minor(32500));
        assert!(!bill.is_paid());
    }

    #[test]
    fn test_create_bill_is_idempotent_per_visit() {
        let mut ledger = BillLedger::new();
        let visit = VisitId::new();

        let first = ledger.create_bill(visit, Utc::now(), &snapshots()).unwrap();
        let second = ledger.create_bill(visit, Utc::now(), &[]).unwrap();

        assert_eq!(first, second);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_find_bill_by_visit() {
        let mut ledger = BillLedger::new();
        let visit = VisitId::new();
        let bill_id = ledger.create_bill(visit, Utc::now(), &snapshots()).unwrap();

        assert_eq!(ledger.find_bill_by_visit(&visit).unwrap().id(), bill_id);
        assert!(ledger.find_bill_by_visit(&VisitId::new()).is_none());
    }

    #[test]
    fn test_add_payment_to_unknown_bill_is_not_found() {
        let mut ledger = BillLedger::new();
        let result = ledger.add_payment(BillId::new(), payment(100));

        assert!(matches!(result, Err(BillingError::BillNotFound(_))));
    }
}
