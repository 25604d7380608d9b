//! Catalog Domain - Billable Procedure Code Reference Data
//!
//! This crate implements the CPT code catalog: the reference data store of
//! billable services that encounter billing resolves against.
//!
//! # Catalog Rules
//!
//! - Code numbers are permanently unique: a number once used can never be
//!   reintroduced, even after the record is archived
//! - Records are revised in place with an integer version that advances by
//!   exactly one per revision
//! - Archival retires a code one-way; archived records cannot be revised
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_catalog::{CptCodeCatalog, CptCodeDraft};
//!
//! let mut catalog = CptCodeCatalog::new();
//!
//! let code = catalog.add(
//!     CptCodeDraft::new(99202, "Outpatient visit, 15-29 min", 7500)
//!         .with_time_range(15, 29),
//! )?;
//!
//! let revised = catalog.revise(99202, CptCodeDraft::new(99202, "Outpatient visit", 8000))?;
//! assert_eq!(revised.version, code.version + 1);
//! ```

pub mod catalog;
pub mod code;
pub mod error;

pub use catalog::CptCodeCatalog;
pub use code::{CptCode, CptCodeDraft, MAX_DESCRIPTION_LEN};
pub use error::CatalogError;
