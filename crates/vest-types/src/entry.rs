use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::CompositeKey;
use crate::error::TypeError;

/// The closed set of ledger entry kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryKind {
    /// Shares vest and are added to the running balance.
    Vest,
    /// Previously vested shares are cancelled.
    Cancel,
}

impl EntryKind {
    /// Position of this kind among entries sharing an effective date.
    ///
    /// Vests replay before cancellations so that a same-day cancellation can
    /// offset a same-day vest.
    pub const fn replay_rank(self) -> u8 {
        match self {
            Self::Vest => 0,
            Self::Cancel => 1,
        }
    }

    /// The literal token used in ledger records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vest => "VEST",
            Self::Cancel => "CANCEL",
        }
    }
}

impl FromStr for EntryKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VEST" => Ok(Self::Vest),
            "CANCEL" => Ok(Self::Cancel),
            other => Err(TypeError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated vesting ledger record.
///
/// Entries are immutable once constructed. Construction fails rather than
/// producing an entry with an empty employee or award identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    kind: EntryKind,
    employee_id: String,
    employee_name: String,
    award_id: String,
    effective_date: NaiveDate,
    quantity: u64,
}

impl LedgerEntry {
    pub fn new(
        kind: EntryKind,
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        award_id: impl Into<String>,
        effective_date: NaiveDate,
        quantity: u64,
    ) -> Result<Self, TypeError> {
        let employee_id = employee_id.into();
        let award_id = award_id.into();
        if employee_id.is_empty() {
            return Err(TypeError::EmptyField {
                field: "employee_id",
            });
        }
        if award_id.is_empty() {
            return Err(TypeError::EmptyField { field: "award_id" });
        }
        Ok(Self {
            kind,
            employee_id,
            employee_name: employee_name.into(),
            award_id,
            effective_date,
            quantity,
        })
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
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

    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// The composite key of the balance this entry affects.
    pub fn key(&self) -> CompositeKey {
        CompositeKey::new(self.employee_id.clone(), self.award_id.clone())
    }

    /// Quantity this entry contributes as of `target_date`.
    ///
    /// Entries dated after the target date contribute nothing.
    pub fn effective_quantity(&self, target_date: NaiveDate) -> u64 {
        if self.effective_date <= target_date {
            self.quantity
        } else {
            0
        }
    }
}
