//! Catalog domain errors

use thiserror::Error;

/// Errors that can occur in the catalog domain
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input failed field validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No record holds this code number
    #[error("No CPT code found for {0}")]
    NotFound(u64),

    /// The code number is already taken, by an active or archived record
    #[error("CPT code {0} already exists")]
    DuplicateCode(u64),

    /// Archived records cannot be revised
    #[error("CPT code {0} is archived and cannot be revised")]
    ArchivedRecord(u64),
}
