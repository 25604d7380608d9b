//! Procedure code catalog
//!
//! The catalog is the single source of truth for CPT codes. It enforces
//! permanent uniqueness of the code number and monotonic versioning.

use std::collections::HashMap;

use tracing::{debug, info};

use core_kernel::{CptCodeId, Money};

use crate::code::{CptCode, CptCodeDraft};
use crate::error::CatalogError;

/// The catalog of billable procedure codes
///
/// Records are keyed by their code number, so uniqueness holds by
/// construction and covers archived records. A code number once used can
/// never be reintroduced; historical invoices that reference it by number
/// stay traceable.
///
/// # Invariants
///
/// - No two records, active or archived, share a code number
/// - Versions advance by exactly one per revision
/// - Archival is one-way
///
/// Mutation requires `&mut self`, so the duplicate and version checks are
/// exclusive for any safe caller. The catalog is an explicit instance owned
/// by the process entry point, not ambient state.
#[derive(Debug, Default)]
pub struct CptCodeCatalog {
    /// All records by code number, archived included
    codes: HashMap<u64, CptCode>,
}

impl CptCodeCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new procedure code
    ///
    /// The draft is validated first, and the code number is checked against
    /// every existing record before anything is stored. New records start at
    /// version 1 unless the draft supplies an explicit positive version.
    ///
    /// # Arguments
    ///
    /// * `draft` - The candidate record to validate and store
    ///
    /// # Errors
    ///
    /// - `CatalogError::Validation` if any draft field is malformed
    /// - `CatalogError::DuplicateCode` if the number is already taken,
    ///   by an active or an archived record
    pub fn add(&mut self, draft: CptCodeDraft) -> Result<CptCode, CatalogError> {
        draft.validate()?;

        if self.codes.contains_key(&draft.code) {
            return Err(CatalogError::DuplicateCode(draft.code));
        }

        let record = draft.into_record(CptCodeId::new_v7());
        debug!(code = record.code, version = record.version, "added CPT code");
        self.codes.insert(record.code, record.clone());

        Ok(record)
    }

    /// Looks up the active record for a code number
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` when no record holds the number or
    /// when the record is archived; archived records are reachable through
    /// [`CptCodeCatalog::get`].
    pub fn find_active(&self, code: u64) -> Result<&CptCode, CatalogError> {
        self.codes
            .get(&code)
            .filter(|c| !c.is_archived)
            .ok_or(CatalogError::NotFound(code))
    }

    /// Looks up a record regardless of archive state
    pub fn get(&self, code: u64) -> Option<&CptCode> {
        self.codes.get(&code)
    }

    /// All non-archived records, ordered by code number
    pub fn list_active(&self) -> Vec<&CptCode> {
        self.list_by_archived(false)
    }

    /// All archived records, ordered by code number
    pub fn list_archived(&self) -> Vec<&CptCode> {
        self.list_by_archived(true)
    }

    fn list_by_archived(&self, archived: bool) -> Vec<&CptCode> {
        let mut records: Vec<&CptCode> = self
            .codes
            .values()
            .filter(|c| c.is_archived == archived)
            .collect();
        records.sort_by_key(|c| c.code);
        records
    }

    /// Revises an existing procedure code
    ///
    /// The record's identity and code number survive; the version advances
    /// by exactly one over the stored value (any version in the draft is
    /// ignored) and every other field is replaced from the draft.
    ///
    /// # Arguments
    ///
    /// * `code` - The number of the record to revise
    /// * `draft` - The replacement fields, validated exactly as in `add`
    ///
    /// # Errors
    ///
    /// - `CatalogError::NotFound` if no record holds the number
    /// - `CatalogError::ArchivedRecord` if the record is archived
    /// - `CatalogError::Validation` if any draft field is malformed
    pub fn revise(&mut self, code: u64, draft: CptCodeDraft) -> Result<CptCode, CatalogError> {
        let existing = self.codes.get(&code).ok_or(CatalogError::NotFound(code))?;

        if existing.is_archived {
            return Err(CatalogError::ArchivedRecord(code));
        }

        draft.validate()?;

        let revised = CptCode {
            id: existing.id,
            code: existing.code,
            description: draft.description,
            cost: Money::from_minor(draft.cost_minor_units),
            version: existing.version + 1,
            is_archived: false,
            time_range_min: draft.time_range_min,
            time_range_max: draft.time_range_max,
        };

        debug!(code, version = revised.version, "revised CPT code");
        self.codes.insert(code, revised.clone());

        Ok(revised)
    }

    /// Retires a procedure code
    ///
    /// Archival is one-way; there is no un-archive. Archiving an already
    /// archived record is a no-op success.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no record holds the number.
    pub fn archive(&mut self, code: u64) -> Result<u64, CatalogError> {
        let record = self
            .codes
            .get_mut(&code)
            .ok_or(CatalogError::NotFound(code))?;

        if !record.is_archived {
            record.is_archived = true;
            info!(code, "archived CPT code");
        }

        Ok(code)
    }

    /// Number of records in the catalog, archived included
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
