//! Boundaries between the replay engine and its collaborators.

use async_trait::async_trait;
use vest_types::BalanceAggregate;

use crate::error::{AccessFailure, PublishError};

/// Read boundary: where raw ledger text comes from.
///
/// Fetching is the only suspension point of a run. Implementations release
/// whatever handle they hold before returning, on success and failure alike.
#[async_trait]
pub trait LedgerSource: Send + Sync {
    async fn fetch_raw_ledger(&self) -> Result<String, AccessFailure>;
}

/// Write boundary: where a computed snapshot goes.
///
/// Called at most once per run, and never with an empty snapshot.
pub trait SnapshotSink {
    fn publish(&mut self, aggregates: &[BalanceAggregate]) -> Result<(), PublishError>;
}
