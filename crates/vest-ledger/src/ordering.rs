//! Ordered collections under a pluggable total order.
//!
//! An [`OrderedIndex`] keeps its values sorted by an [`OrderingRule`] as they
//! are inserted. The rule also decides what happens when an inserted value
//! compares equal to one already held:
//!
//! - [`DuplicatePolicy::Retain`] keeps both, the newer one after all equal
//!   values, so equal values come out in insertion order. Bulk extension
//!   appends and runs one stable sort.
//! - [`DuplicatePolicy::Replace`] overwrites the held value, so the index
//!   never holds two equal values.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use vest_types::{BalanceAggregate, LedgerEntry};

/// How an [`OrderedIndex`] treats a value that compares equal to a held one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuplicatePolicy {
    Retain,
    Replace,
}

/// A total order over `T` plus the duplicate policy that goes with it.
pub trait OrderingRule<T> {
    const DUPLICATES: DuplicatePolicy;

    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Ledger entries by effective date, vests before cancellations on the same
/// date. Equal entries are all retained in insertion order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Chronological;

impl OrderingRule<LedgerEntry> for Chronological {
    const DUPLICATES: DuplicatePolicy = DuplicatePolicy::Retain;

    fn compare(&self, a: &LedgerEntry, b: &LedgerEntry) -> Ordering {
        a.effective_date()
            .cmp(&b.effective_date())
            .then_with(|| a.kind().replay_rank().cmp(&b.kind().replay_rank()))
    }
}

/// Balance aggregates by employee id then award id, one aggregate per key.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByEmployeeAndAward;

impl OrderingRule<BalanceAggregate> for ByEmployeeAndAward {
    const DUPLICATES: DuplicatePolicy = DuplicatePolicy::Replace;

    fn compare(&self, a: &BalanceAggregate, b: &BalanceAggregate) -> Ordering {
        collate(a.employee_id(), b.employee_id())
            .then_with(|| collate(a.award_id(), b.award_id()))
    }
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Human-oriented string comparison.
///
/// Strings compare under the Unicode root collation at tertiary strength:
/// punctuation sorts before digits, digits before letters, accented letters
/// next to their base letter, and lowercase before uppercase. Strings the
/// collation considers equal fall back to code-point order, so two distinct
/// strings never compare equal.
pub fn collate(a: &str, b: &str) -> Ordering {
    let collated = ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => Ordering::Equal,
    });
    collated.then_with(|| a.cmp(b))
}

/// A collection kept sorted under the rule `R`.
#[derive(Clone, Debug)]
pub struct OrderedIndex<T, R> {
    rule: R,
    items: Vec<T>,
}

impl<T, R: OrderingRule<T>> OrderedIndex<T, R> {
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            items: Vec::new(),
        }
    }

    /// Insert `value` at its ordered position.
    ///
    /// Under [`DuplicatePolicy::Replace`] an equal held value is overwritten
    /// and returned.
    pub fn insert(&mut self, value: T) -> Option<T> {
        match R::DUPLICATES {
            DuplicatePolicy::Retain => {
                let at = self
                    .items
                    .partition_point(|held| self.rule.compare(held, &value) != Ordering::Greater);
                self.items.insert(at, value);
                None
            }
            DuplicatePolicy::Replace => {
                match self
                    .items
                    .binary_search_by(|held| self.rule.compare(held, &value))
                {
                    Ok(at) => Some(std::mem::replace(&mut self.items[at], value)),
                    Err(at) => {
                        self.items.insert(at, value);
                        None
                    }
                }
            }
        }
    }

    /// A held value comparing equal to `probe`, if any.
    pub fn get(&self, probe: &T) -> Option<&T> {
        self.items
            .binary_search_by(|held| self.rule.compare(held, probe))
            .ok()
            .map(|at| &self.items[at])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, R: OrderingRule<T> + Default> Default for OrderedIndex<T, R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<T, R: OrderingRule<T>> Extend<T> for OrderedIndex<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        match R::DUPLICATES {
            DuplicatePolicy::Retain => {
                self.items.extend(iter);
                self.items.sort_by(|a, b| self.rule.compare(a, b));
            }
            DuplicatePolicy::Replace => {
                for value in iter {
                    self.insert(value);
                }
            }
        }
    }
}

impl<T, R: OrderingRule<T> + Default> FromIterator<T> for OrderedIndex<T, R> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut index = Self::default();
        index.extend(iter);
        index
    }
}

impl<T, R> IntoIterator for OrderedIndex<T, R> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, R> IntoIterator for &'a OrderedIndex<T, R> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Order `entries` for replay.
pub fn chronological<I>(entries: I) -> OrderedIndex<LedgerEntry, Chronological>
where
    I: IntoIterator<Item = LedgerEntry>,
{
    entries.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use vest_types::EntryKind;

    use super::*;

    fn entry(kind: EntryKind, employee: &str, award: &str, date: &str, qty: u64) -> LedgerEntry {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        LedgerEntry::new(kind, employee, "Name", award, date, qty).unwrap()
    }

    fn aggregate(employee: &str, award: &str, balance: u64) -> BalanceAggregate {
        BalanceAggregate::new(employee, "Name", award, balance)
    }

    #[test]
    fn chronological_sorts_by_date() {
        let ordered = chronological(vec![
            entry(EntryKind::Vest, "E1", "A1", "2021-01-01", 1),
            entry(EntryKind::Vest, "E1", "A1", "2020-01-01", 2),
            entry(EntryKind::Vest, "E1", "A1", "2020-06-01", 3),
        ]);
        let quantities: Vec<u64> = ordered.iter().map(LedgerEntry::quantity).collect();
        assert_eq!(quantities, vec![2, 3, 1]);
    }

    #[test]
    fn vest_precedes_cancel_on_same_date() {
        let ordered = chronological(vec![
            entry(EntryKind::Cancel, "E1", "A1", "2020-01-01", 40),
            entry(EntryKind::Vest, "E1", "A1", "2020-01-01", 100),
        ]);
        let kinds: Vec<EntryKind> = ordered.iter().map(LedgerEntry::kind).collect();
        assert_eq!(kinds, vec![EntryKind::Vest, EntryKind::Cancel]);
    }

    #[test]
    fn equal_entries_are_all_retained_in_insertion_order() {
        let ordered = chronological(vec![
            entry(EntryKind::Vest, "E1", "A1", "2020-01-01", 1),
            entry(EntryKind::Vest, "E2", "A2", "2020-01-01", 2),
            entry(EntryKind::Vest, "E1", "A1", "2020-01-01", 3),
        ]);
        assert_eq!(ordered.len(), 3);
        let quantities: Vec<u64> = ordered.iter().map(LedgerEntry::quantity).collect();
        assert_eq!(quantities, vec![1, 2, 3]);
    }

    #[test]
    fn key_order_replaces_existing_key() {
        let mut index = OrderedIndex::new(ByEmployeeAndAward);
        assert!(index.insert(aggregate("E2", "A1", 5)).is_none());
        assert!(index.insert(aggregate("E1", "A1", 1)).is_none());
        let replaced = index.insert(aggregate("E1", "A1", 9));

        assert_eq!(replaced, Some(aggregate("E1", "A1", 1)));
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.into_vec(),
            vec![aggregate("E1", "A1", 9), aggregate("E2", "A1", 5)]
        );
    }

    #[test]
    fn key_order_breaks_ties_on_award() {
        let index: OrderedIndex<_, ByEmployeeAndAward> = vec![
            aggregate("E1", "B", 0),
            aggregate("E1", "A", 0),
            aggregate("E0", "Z", 0),
        ]
        .into_iter()
        .collect();
        let keys: Vec<String> = index.iter().map(|a| a.key().to_string()).collect();
        assert_eq!(keys, vec!["E0/Z", "E1/A", "E1/B"]);
    }

    #[test]
    fn get_finds_by_key() {
        let mut index = OrderedIndex::new(ByEmployeeAndAward);
        index.insert(aggregate("E1", "A1", 7));
        assert_eq!(index.get(&aggregate("E1", "A1", 0)).map(BalanceAggregate::balance), Some(7));
        assert!(index.get(&aggregate("E1", "A2", 0)).is_none());
    }

    #[test]
    fn collate_follows_root_collation() {
        let mut ids = vec!["Zed", "Émile", "E01", "E_1", "e1", "E1", "ä", "b"];
        ids.sort_by(|a, b| collate(a, b));
        assert_eq!(ids, vec!["ä", "b", "E_1", "E01", "e1", "E1", "Émile", "Zed"]);
    }

    #[test]
    fn extend_keeps_earlier_equal_values_first() {
        let mut index = chronological(vec![entry(EntryKind::Vest, "E1", "A1", "2020-01-01", 1)]);
        index.extend(vec![
            entry(EntryKind::Cancel, "E1", "A1", "2020-01-01", 2),
            entry(EntryKind::Vest, "E1", "A1", "2020-01-01", 3),
            entry(EntryKind::Vest, "E1", "A1", "2019-01-01", 4),
        ]);
        let quantities: Vec<u64> = index.iter().map(LedgerEntry::quantity).collect();
        assert_eq!(quantities, vec![4, 1, 3, 2]);
    }

    #[test]
    fn chronological_handles_large_newest_first_ledger() {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let count = 100_000u64;
        let entries: Vec<LedgerEntry> = (0..count)
            .rev()
            .map(|day| {
                let date = base + chrono::Duration::days(day as i64);
                LedgerEntry::new(EntryKind::Vest, "E1", "Name", "A1", date, day).unwrap()
            })
            .collect();

        let ordered = chronological(entries);
        assert_eq!(ordered.len(), count as usize);
        assert!(ordered
            .iter()
            .map(LedgerEntry::quantity)
            .eq(0..count));
    }

    #[test]
    fn collate_ignores_case_first() {
        assert_eq!(collate("alice", "Bob"), Ordering::Less);
        assert_eq!(collate("Bob", "alice"), Ordering::Greater);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("E1", "E1"), Ordering::Equal);
        assert_eq!(collate("E1", "E10"), Ordering::Less);
    }

    #[test]
    fn case_variants_are_distinct_keys() {
        let mut index = OrderedIndex::new(ByEmployeeAndAward);
        index.insert(aggregate("E1", "A1", 1));
        index.insert(aggregate("e1", "A1", 2));
        assert_eq!(index.len(), 2);
    }

    proptest! {
        #[test]
        fn collate_is_antisymmetric(a in "[a-zA-Z0-9]{0,6}", b in "[a-zA-Z0-9]{0,6}") {
            prop_assert_eq!(collate(&a, &b), collate(&b, &a).reverse());
            prop_assert_eq!(collate(&a, &b) == Ordering::Equal, a == b);
        }

        #[test]
        fn key_order_output_is_strictly_increasing(
            keys in proptest::collection::vec(("[A-Ce-g][0-9]", "[A-Ba-b]"), 0..40)
        ) {
            let mut index = OrderedIndex::new(ByEmployeeAndAward);
            for (employee, award) in &keys {
                index.insert(aggregate(employee, award, 0));
            }
            let rule = ByEmployeeAndAward;
            for pair in index.as_slice().windows(2) {
                prop_assert_eq!(rule.compare(&pair[0], &pair[1]), Ordering::Less);
            }
        }

        #[test]
        fn chronological_keeps_every_entry(
            rows in proptest::collection::vec((0u32..5, any::<bool>()), 0..40)
        ) {
            let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
            let entries: Vec<LedgerEntry> = rows
                .iter()
                .enumerate()
                .map(|(i, (offset, vest))| {
                    let kind = if *vest { EntryKind::Vest } else { EntryKind::Cancel };
                    let date = base + chrono::Duration::days(i64::from(*offset));
                    LedgerEntry::new(kind, "E1", "Name", "A1", date, i as u64).unwrap()
                })
                .collect();

            let ordered = chronological(entries.clone()).into_vec();
            prop_assert_eq!(ordered.len(), entries.len());

            let rule = Chronological;
            for pair in ordered.windows(2) {
                match rule.compare(&pair[0], &pair[1]) {
                    Ordering::Less => {}
                    // Stable: quantities carry the insertion position.
                    Ordering::Equal => prop_assert!(pair[0].quantity() < pair[1].quantity()),
                    Ordering::Greater => prop_assert!(false, "out of order"),
                }
            }
        }
    }
}
