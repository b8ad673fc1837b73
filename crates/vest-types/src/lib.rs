//! Foundation types for the vesting ledger.
//!
//! This crate provides the data model shared by every other crate in the
//! workspace: the closed set of entry kinds, the validated ledger entry, and
//! the per-key balance aggregate produced by replay.
//!
//! # Key Types
//!
//! - [`EntryKind`] - `VEST` or `CANCEL`
//! - [`LedgerEntry`] - one immutable, validated ledger record
//! - [`CompositeKey`] - `(employee_id, award_id)` identifying a running balance
//! - [`BalanceAggregate`] - the running balance for one composite key

pub mod aggregate;
pub mod entry;
pub mod error;

pub use aggregate::{BalanceAggregate, CompositeKey};
pub use entry::{EntryKind, LedgerEntry};
pub use error::TypeError;
