//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::{DateTime, Utc};
use core_kernel::{BillId, Money, VisitId};
use domain_billing::{BillLedger, Payment, PaymentMethod};
use domain_catalog::{CptCodeCatalog, CptCodeDraft};

use crate::fixtures::{CodeFixtures, TemporalFixtures};

/// Builder for procedure code drafts
pub struct CptCodeDraftBuilder {
    code: u64,
    description: String,
    cost_minor_units: i64,
    version: Option<u32>,
    time_range: Option<(u32, u32)>,
}

impl Default for CptCodeDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CptCodeDraftBuilder {
    /// Creates a builder defaulted to the office visit fixture
    pub fn new() -> Self {
        Self {
            code: 99202,
            description: "Outpatient visit, 15-29 min".to_string(),
            cost_minor_units: 7500,
            version: None,
            time_range: Some((15, 29)),
        }
    }

    /// Sets the code number
    pub fn with_code(mut self, code: u64) -> Self {
        self.code = code;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the cost in minor units
    pub fn with_cost(mut self, cost_minor_units: i64) -> Self {
        self.cost_minor_units = cost_minor_units;
        self
    }

    /// Sets an explicit starting version
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Sets the duration range
    pub fn with_time_range(mut self, min: u32, max: u32) -> Self {
        self.time_range = Some((min, max));
        self
    }

    /// Clears the duration range
    pub fn without_time_range(mut self) -> Self {
        self.time_range = None;
        self
    }

    /// Builds the draft
    pub fn build(self) -> CptCodeDraft {
        let mut draft = CptCodeDraft::new(self.code, self.description, self.cost_minor_units);
        if let Some(version) = self.version {
            draft = draft.with_version(version);
        }
        if let Some((min, max)) = self.time_range {
            draft = draft.with_time_range(min, max);
        }
        draft
    }
}

/// Builder for a ledger holding one freshly billed visit
///
/// Assembles a catalog, resolves the attached codes, and creates the bill,
/// which is the same path production takes from encounter close to bill.
pub struct BilledVisitBuilder {
    visit_date: DateTime<Utc>,
    drafts: Vec<CptCodeDraft>,
}

impl Default for BilledVisitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BilledVisitBuilder {
    /// Creates a builder with the two standard visit codes attached
    pub fn new() -> Self {
        Self {
            visit_date: TemporalFixtures::recent_visit(),
            drafts: vec![CodeFixtures::office_visit(), CodeFixtures::extended_service()],
        }
    }

    /// Sets the visit date
    pub fn with_visit_date(mut self, visit_date: DateTime<Utc>) -> Self {
        self.visit_date = visit_date;
        self
    }

    /// Replaces the attached code drafts
    pub fn with_codes(mut self, drafts: Vec<CptCodeDraft>) -> Self {
        self.drafts = drafts;
        self
    }

    /// Attaches no codes, producing a zero-balance bill
    pub fn with_no_codes(mut self) -> Self {
        self.drafts.clear();
        self
    }

    /// Builds the ledger and returns it with the new bill's id
    pub fn build(self) -> (BillLedger, BillId) {
        let mut catalog = CptCodeCatalog::new();
        let attached: Vec<_> = self
            .drafts
            .into_iter()
            .map(|draft| catalog.add(draft).expect("fixture draft is valid"))
            .collect();

        let mut ledger = BillLedger::new();
        let bill_id = ledger
            .create_bill(VisitId::new(), self.visit_date, &attached)
            .expect("fixture charges are summable");

        (ledger, bill_id)
    }
}

/// Creates a cash payment of the given amount dated now
pub fn cash_payment(amount_minor_units: i64) -> Payment {
    Payment::new(
        Money::from_minor(amount_minor_units),
        Utc::now(),
        PaymentMethod::Cash,
    )
    .expect("test payment amount is positive")
}
