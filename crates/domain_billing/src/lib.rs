//! Billing Domain - Encounter Invoicing and Payment Lifecycle
//!
//! This crate implements the billing ledger for clinical encounters. A bill
//! snapshots its total due from the encounter's attached procedure codes at
//! the moment the encounter closes, then accepts payments until exactly
//! paid off.
//!
//! # Payment Rules
//!
//! - A payment may never exceed the remaining balance; the rejection leaves
//!   the bill unmodified
//! - A payment equal to the remaining balance settles the bill; settled is
//!   terminal
//! - Balance floors at zero; status is derived fresh from the clock, with
//!   delinquency measured from the encounter date
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::Utc;
//! use domain_billing::{BillLedger, Payment, PaymentMethod};
//!
//! let mut ledger = BillLedger::new();
//!
//! // `attached` was resolved against the catalog when the encounter closed
//! let bill_id = ledger.create_bill(visit, visit_date, &attached)?;
//!
//! let payment = Payment::new(amount, Utc::now(), PaymentMethod::Cash)?;
//! ledger.add_payment(bill_id, payment)?;
//! ```

pub mod bill;
pub mod charges;
pub mod error;
pub mod ledger;
pub mod payment;

pub use bill::{Bill, BillStatus, DAYS_UNTIL_DELINQUENCY};
pub use charges::total_charges;
pub use error::BillingError;
pub use ledger::BillLedger;
pub use payment::{Payment, PaymentMethod};
