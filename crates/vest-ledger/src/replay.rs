//! Replay of ordered ledger entries into per-key balances.
//!
//! Entries are folded one at a time through the balance transition; the
//! first entry for a composite key opens its balance at zero, including
//! entries dated after the target date, which contribute nothing.

use chrono::NaiveDate;
use tracing::debug;
use vest_types::{BalanceAggregate, LedgerEntry};

use crate::ordering::{ByEmployeeAndAward, OrderedIndex};
use crate::transition::{transition, Transition};

/// Counters collected while replaying a ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub entries_replayed: u64,
    /// Entries dated after the target date. They touch their key but
    /// contribute nothing.
    pub entries_deferred: u64,
    /// Cancellations ignored because they exceeded the running balance.
    pub cancels_ignored: u64,
}

/// Vested balances as of a target date, ordered by employee then award.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub target_date: NaiveDate,
    pub aggregates: Vec<BalanceAggregate>,
    pub stats: ReplayStats,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aggregates.len()
    }
}

/// Folds chronologically ordered entries into one balance per key.
///
/// Entries must be fed in replay order; the aggregator does not reorder them.
pub struct Aggregator {
    target_date: NaiveDate,
    balances: OrderedIndex<BalanceAggregate, ByEmployeeAndAward>,
    stats: ReplayStats,
}

impl Aggregator {
    pub fn new(target_date: NaiveDate) -> Self {
        Self {
            target_date,
            balances: OrderedIndex::new(ByEmployeeAndAward),
            stats: ReplayStats::default(),
        }
    }

    /// Apply one entry to the balance of its key, opening a zero balance on
    /// first sight of the key.
    pub fn apply(&mut self, entry: &LedgerEntry) {
        let quantity = entry.effective_quantity(self.target_date);
        let opened = BalanceAggregate::opened_by(entry);
        let current = self.balances.get(&opened).cloned().unwrap_or(opened);

        let step = transition(entry.kind(), current.balance(), quantity);

        self.stats.entries_replayed += 1;
        if entry.effective_date() > self.target_date {
            self.stats.entries_deferred += 1;
        }
        if let Transition::Ignored(balance) = step {
            self.stats.cancels_ignored += 1;
            debug!(
                key = %current.key(),
                balance,
                quantity,
                "cancellation exceeds vested balance; ignored"
            );
        }

        self.balances.insert(current.with_balance(step.balance()));
    }

    pub fn finish(self) -> Snapshot {
        debug!(
            target_date = %self.target_date,
            keys = self.balances.len(),
            replayed = self.stats.entries_replayed,
            deferred = self.stats.entries_deferred,
            cancels_ignored = self.stats.cancels_ignored,
            "replay complete"
        );
        Snapshot {
            target_date: self.target_date,
            aggregates: self.balances.into_vec(),
            stats: self.stats,
        }
    }
}

/// Replay `entries`, which must already be in chronological order, as of
/// `target_date`.
pub fn compute_snapshot<'a, I>(entries: I, target_date: NaiveDate) -> Snapshot
where
    I: IntoIterator<Item = &'a LedgerEntry>,
{
    let mut aggregator = Aggregator::new(target_date);
    for entry in entries {
        aggregator.apply(entry);
    }
    aggregator.finish()
}
