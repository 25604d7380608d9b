//! Procedure code records
//!
//! A CPT code identifies a billable service. Records carry a cost in minor
//! units, an integer version advanced on every revision, and an optional
//! duration range in minutes (both bounds zero when the code has no range).

use serde::{Deserialize, Serialize};

use core_kernel::{CptCodeId, Money};

use crate::error::CatalogError;

/// Maximum description length, exclusive
pub const MAX_DESCRIPTION_LEN: usize = 250;

/// A billable procedure code
///
/// The `code` number is the externally visible identity (e.g. 99202) and is
/// permanently unique across the catalog, archived records included. The
/// `id` is internal and survives revisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CptCode {
    /// Internal identifier, stable across revisions
    pub id: CptCodeId,
    /// The procedure code number
    pub code: u64,
    /// Human-readable description of the service
    pub description: String,
    /// Cost in minor units
    pub cost: Money,
    /// Revision counter, starts at 1
    pub version: u32,
    /// Whether the code has been retired; one-way
    pub is_archived: bool,
    /// Lower bound of the duration range in minutes, zero if none
    pub time_range_min: u32,
    /// Upper bound of the duration range in minutes, zero if none
    pub time_range_max: u32,
}

impl CptCode {
    /// Returns true if the code carries a duration range
    pub fn has_time_range(&self) -> bool {
        self.time_range_min > 0
    }

    /// The duration range in minutes, if the code has one
    pub fn time_range(&self) -> Option<(u32, u32)> {
        self.has_time_range()
            .then_some((self.time_range_min, self.time_range_max))
    }
}

/// Candidate data for creating or revising a procedure code
///
/// Drafts are validated as a whole before any record is written, so a
/// rejected draft commits nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CptCodeDraft {
    /// The procedure code number
    pub code: u64,
    /// Description of the service
    pub description: String,
    /// Cost in minor units
    pub cost_minor_units: i64,
    /// Explicit starting version; a missing or non-positive value means 1
    pub version: Option<u32>,
    /// Lower bound of the duration range in minutes, zero if none
    pub time_range_min: u32,
    /// Upper bound of the duration range in minutes, zero if none
    pub time_range_max: u32,
}

impl CptCodeDraft {
    /// Creates a draft with no duration range and a defaulted version
    pub fn new(code: u64, description: impl Into<String>, cost_minor_units: i64) -> Self {
        Self {
            code,
            description: description.into(),
            cost_minor_units,
            version: None,
            time_range_min: 0,
            time_range_max: 0,
        }
    }

    /// Sets an explicit starting version
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Sets the duration range in minutes
    pub fn with_time_range(mut self, min: u32, max: u32) -> Self {
        self.time_range_min = min;
        self.time_range_max = max;
        self
    }

    /// Validates every field of the draft
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` naming the first rule violated:
    /// the code number and cost must be positive, the description must be
    /// shorter than 250 characters, and the duration range must either be
    /// absent (both bounds zero) or satisfy `max > min > 0`.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.code == 0 {
            return Err(CatalogError::Validation(
                "CPT code number must be positive".to_string(),
            ));
        }

        if self.description.chars().count() >= MAX_DESCRIPTION_LEN {
            return Err(CatalogError::Validation(format!(
                "Description length must be less than {MAX_DESCRIPTION_LEN} characters"
            )));
        }

        if self.cost_minor_units <= 0 {
            return Err(CatalogError::Validation(format!(
                "Cost must be a positive amount: {}",
                self.cost_minor_units
            )));
        }

        match (self.time_range_min, self.time_range_max) {
            (0, 0) => {}
            (0, _) => {
                return Err(CatalogError::Validation(
                    "Duration range minimum must be positive".to_string(),
                ));
            }
            (min, max) if max <= min => {
                return Err(CatalogError::Validation(format!(
                    "Duration range maximum must be greater than the minimum: {max} <= {min}"
                )));
            }
            _ => {}
        }

        Ok(())
    }

    /// The version a freshly added record starts at
    pub(crate) fn starting_version(&self) -> u32 {
        match self.version {
            Some(v) if v > 0 => v,
            _ => 1,
        }
    }

    /// Builds the stored record for a validated draft
    pub(crate) fn into_record(self, id: CptCodeId) -> CptCode {
        let version = self.starting_version();
        CptCode {
            id,
            code: self.code,
            description: self.description,
            cost: Money::from_minor(self.cost_minor_units),
            version,
            is_archived: false,
            time_range_min: self.time_range_min,
            time_range_max: self.time_range_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft_passes() {
        let draft = CptCodeDraft::new(99202, "office visit", 7500).with_time_range(15, 29);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_zero_code_rejected() {
        let draft = CptCodeDraft::new(0, "office visit", 7500);
        assert!(matches!(draft.validate(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_oversized_description_rejected() {
        let draft = CptCodeDraft::new(99202, "x".repeat(250), 7500);
        assert!(matches!(draft.validate(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_description_just_under_limit_passes() {
        let draft = CptCodeDraft::new(99202, "x".repeat(249), 7500);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_non_positive_cost_rejected() {
        let draft = CptCodeDraft::new(99202, "office visit", 0);
        assert!(matches!(draft.validate(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_inverted_time_range_rejected() {
        let draft = CptCodeDraft::new(99202, "office visit", 7500).with_time_range(30, 15);
        assert!(matches!(draft.validate(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_equal_time_range_rejected() {
        let draft = CptCodeDraft::new(99202, "office visit", 7500).with_time_range(15, 15);
        assert!(matches!(draft.validate(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_half_open_time_range_rejected() {
        let draft = CptCodeDraft::new(99202, "office visit", 7500).with_time_range(0, 29);
        assert!(matches!(draft.validate(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_no_time_range_is_valid() {
        let draft = CptCodeDraft::new(99202, "office visit", 7500);
        assert!(draft.validate().is_ok());

        let record = draft.into_record(CptCodeId::new());
        assert!(!record.has_time_range());
        assert_eq!(record.time_range(), None);
    }

    #[test]
    fn test_starting_version_defaults_to_one() {
        assert_eq!(CptCodeDraft::new(99202, "v", 7500).starting_version(), 1);
        assert_eq!(
            CptCodeDraft::new(99202, "v", 7500)
                .with_version(0)
                .starting_version(),
            1
        );
        assert_eq!(
            CptCodeDraft::new(99202, "v", 7500)
                .with_version(4)
                .starting_version(),
            4
        );
    }
}
