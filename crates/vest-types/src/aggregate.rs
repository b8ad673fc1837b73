use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::LedgerEntry;

/// The `(employee_id, award_id)` pair identifying one running balance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompositeKey {
    pub employee_id: String,
    pub award_id: String,
}

impl CompositeKey {
    pub fn new(employee_id: impl Into<String>, award_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            award_id: award_id.into(),
        }
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.employee_id, self.award_id)
    }
}

/// Vested share balance for one employee and award.
///
/// Aggregates are plain values: replay computes a new balance and writes the
/// whole aggregate back rather than mutating a shared reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceAggregate {
    employee_id: String,
    employee_name: String,
    award_id: String,
    balance: u64,
}

impl BalanceAggregate {
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        award_id: impl Into<String>,
        balance: u64,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            award_id: award_id.into(),
            balance,
        }
    }

    /// A zero balance for the key touched by `entry`, named after its employee.
    pub fn opened_by(entry: &LedgerEntry) -> Self {
        Self::new(
            entry.employee_id(),
            entry.employee_name(),
            entry.award_id(),
            0,
        )
    }

    /// The same aggregate carrying `balance`.
    #[must_use]
    pub fn with_balance(self, balance: u64) -> Self {
        Self { balance, ..self }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn award_id(&self) -> &str {
        &self.award_id
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn key(&self) -> CompositeKey {
        CompositeKey::new(self.employee_id.clone(), self.award_id.clone())
    }
}

/// Formats the aggregate as an output record:
/// `employee_id,employee_name,award_id,balance`.
impl fmt::Display for BalanceAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.employee_id, self.employee_name, self.award_id, self.balance
        )
    }
}
