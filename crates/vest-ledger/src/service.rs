//! One vesting run: fetch, validate, order, replay, publish.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::ServiceError;
use crate::ordering::chronological;
use crate::replay::{compute_snapshot, Snapshot};
use crate::traits::{LedgerSource, SnapshotSink};
use crate::validation::parse_ledger;

/// What a single run did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub snapshot: Snapshot,
    pub total_rows: usize,
    pub rejected_rows: usize,
    /// `false` when the source failed and the run proceeded with no entries.
    pub source_readable: bool,
    /// Whether the sink was invoked.
    pub published: bool,
}

/// Computes vested share snapshots from a ledger source into a sink.
pub struct VestingService<S, P> {
    source: S,
    sink: P,
}

impl<S: LedgerSource, P: SnapshotSink> VestingService<S, P> {
    pub fn new(source: S, sink: P) -> Self {
        Self { source, sink }
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    /// Compute vested shares for every employee and award as of
    /// `target_date`, publishing the snapshot if it is non-empty.
    ///
    /// An unreadable source is logged and treated as an empty ledger.
    pub async fn calculate_vested_shares(
        &mut self,
        target_date: NaiveDate,
    ) -> Result<RunReport, ServiceError> {
        let (raw, source_readable) = match self.source.fetch_raw_ledger().await {
            Ok(raw) => (raw, true),
            Err(error) => {
                warn!(%error, "error reading vesting ledger; continuing with no entries");
                (String::new(), false)
            }
        };

        let parsed = parse_ledger(&raw);
        let total_rows = parsed.total_rows();
        let rejected_rows = parsed.rejected.len();

        let ordered = chronological(parsed.entries);
        let snapshot = compute_snapshot(&ordered, target_date);

        let published = if snapshot.is_empty() {
            false
        } else {
            self.sink.publish(&snapshot.aggregates)?;
            true
        };

        info!(
            %target_date,
            total_rows,
            rejected_rows,
            balances = snapshot.len(),
            published,
            "vesting snapshot computed"
        );

        Ok(RunReport {
            snapshot,
            total_rows,
            rejected_rows,
            source_readable,
            published,
        })
    }
}
