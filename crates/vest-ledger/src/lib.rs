//! Deterministic replay engine for the vesting ledger.
//!
//! This crate is the heart of the workspace. It provides:
//! - Row validation from raw comma-separated records into [`LedgerEntry`] values
//! - An [`OrderedIndex`] maintaining a total order under a pluggable rule
//! - The pure balance [`transition`] for `VEST` / `CANCEL` entries
//! - The [`Aggregator`] folding chronologically ordered entries into a snapshot
//! - `LedgerSource` / `SnapshotSink` trait boundaries for the outer collaborators
//! - [`VestingService`] wiring source, replay, and sink together
//!
//! [`LedgerEntry`]: vest_types::LedgerEntry

pub mod error;
pub mod ordering;
pub mod replay;
pub mod service;
pub mod traits;
pub mod transition;
pub mod validation;

pub use error::{AccessFailure, PublishError, RowParseError, ServiceError};
pub use ordering::{
    chronological, collate, ByEmployeeAndAward, Chronological, DuplicatePolicy, OrderedIndex,
    OrderingRule,
};
pub use replay::{compute_snapshot, Aggregator, ReplayStats, Snapshot};
pub use service::{RunReport, VestingService};
pub use traits::{LedgerSource, SnapshotSink};
pub use transition::{apply, transition, Transition};
pub use validation::{parse_entry, parse_iso_date, parse_ledger, ParsedLedger, RejectedRow};
