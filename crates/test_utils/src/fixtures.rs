//! Test Fixtures
//!
//! Pre-built test data for common entities. Amounts and code numbers match
//! the worked examples used throughout the test suite so failures read the
//! same everywhere.

use chrono::{DateTime, Duration, Utc};
use core_kernel::Money;
use domain_catalog::CptCodeDraft;

/// Canonical money amounts in minor units
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Cost of a standard office visit, 7500 minor units
    pub fn office_visit_cost() -> Money {
        Money::from_minor(7500)
    }

    /// Cost of an extended service, 25000 minor units
    pub fn extended_service_cost() -> Money {
        Money::from_minor(25000)
    }

    /// Total for a visit attaching both standard codes
    pub fn two_code_visit_total() -> Money {
        Money::from_minor(32500)
    }
}

/// Canonical timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A visit date the given number of days in the past
    pub fn visit_days_ago(days: i64) -> DateTime<Utc> {
        Utc::now() - Duration::days(days)
    }

    /// A recent visit date, comfortably inside the payment window
    pub fn recent_visit() -> DateTime<Utc> {
        Self::visit_days_ago(1)
    }
}

/// Canonical procedure code drafts
pub struct CodeFixtures;

impl CodeFixtures {
    /// A new-patient office visit code with a duration range
    pub fn office_visit() -> CptCodeDraft {
        CptCodeDraft::new(99202, "Outpatient visit, 15-29 min", 7500).with_time_range(15, 29)
    }

    /// An extended service code without a duration range
    pub fn extended_service() -> CptCodeDraft {
        CptCodeDraft::new(99215, "Outpatient visit, established patient", 25000)
    }

    /// A vaccination code without a duration range
    pub fn flu_vaccination() -> CptCodeDraft {
        CptCodeDraft::new(90658, "Influenza vaccination", 2500)
    }
}
