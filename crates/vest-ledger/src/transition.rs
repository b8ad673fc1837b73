//! The balance transition applied by each ledger entry.

use vest_types::EntryKind;

/// Outcome of applying one entry to a balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The entry changed (or kept, for a zero quantity) the balance.
    Applied(u64),
    /// A cancellation exceeded the balance and was ignored.
    Ignored(u64),
}

impl Transition {
    /// The resulting balance.
    pub fn balance(self) -> u64 {
        match self {
            Self::Applied(balance) | Self::Ignored(balance) => balance,
        }
    }
}

/// Apply `quantity` of `kind` to `balance`.
///
/// A cancellation larger than the balance is never partially applied.
pub fn transition(kind: EntryKind, balance: u64, quantity: u64) -> Transition {
    match kind {
        EntryKind::Vest => Transition::Applied(balance.saturating_add(quantity)),
        EntryKind::Cancel if balance >= quantity => Transition::Applied(balance - quantity),
        EntryKind::Cancel => Transition::Ignored(balance),
    }
}

/// The new balance after applying `quantity` of `kind` to `balance`.
pub fn apply(kind: EntryKind, balance: u64, quantity: u64) -> u64 {
    transition(kind, balance, quantity).balance()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn vest_adds() {
        assert_eq!(apply(EntryKind::Vest, 10, 5), 15);
        assert_eq!(apply(EntryKind::Vest, 0, 0), 0);
    }

    #[test]
    fn cancel_within_balance() {
        assert_eq!(apply(EntryKind::Cancel, 10, 5), 5);
    }

    #[test]
    fn cancel_equal_to_balance() {
        assert_eq!(apply(EntryKind::Cancel, 10, 10), 0);
    }

    #[test]
    fn cancel_beyond_balance_is_ignored() {
        assert_eq!(transition(EntryKind::Cancel, 10, 15), Transition::Ignored(10));
        assert_eq!(apply(EntryKind::Cancel, 0, 999), 0);
    }

    #[test]
    fn zero_cancel_is_applied() {
        assert_eq!(transition(EntryKind::Cancel, 0, 0), Transition::Applied(0));
    }

    #[test]
    fn vest_saturates() {
        assert_eq!(apply(EntryKind::Vest, u64::MAX - 1, 5), u64::MAX);
    }

    proptest! {
        #[test]
        fn cancel_never_exceeds_or_undershoots(balance in any::<u64>(), qty in any::<u64>()) {
            let next = apply(EntryKind::Cancel, balance, qty);
            prop_assert!(next <= balance);
            if qty > balance {
                prop_assert_eq!(next, balance);
            } else {
                prop_assert_eq!(next, balance - qty);
            }
        }

        #[test]
        fn vest_then_cancel_same_quantity_restores(balance in 0u64..1 << 40, qty in 0u64..1 << 40) {
            let vested = apply(EntryKind::Vest, balance, qty);
            prop_assert_eq!(apply(EntryKind::Cancel, vested, qty), balance);
        }
    }
}
