//! Ledger sources for the vesting ledger.
//!
//! Every source implements [`LedgerSource`](vest_ledger::LedgerSource) and
//! hands back the raw ledger text, or an
//! [`AccessFailure`](vest_ledger::AccessFailure) when it cannot.
//!
//! - [`FileLedgerSource`] -- reads a ledger file through `tokio::fs`
//! - [`InMemoryLedgerSource`] -- fixed text or a fixed failure, for tests and embedding

pub mod file;
pub mod memory;

pub use file::FileLedgerSource;
pub use memory::InMemoryLedgerSource;
