//! Core Kernel - Foundational types for the clinic billing system
//!
//! This crate provides the fundamental building blocks used across all
//! domain modules:
//! - Money in integral minor units with checked arithmetic
//! - Strongly-typed entity identifiers

pub mod money;
pub mod identifiers;

pub use money::{Money, MoneyError};
pub use identifiers::{BillId, CptCodeId, PaymentId, VisitId};
