//! Ledger record validation.
//!
//! Records are comma-separated lines with fields in a fixed order:
//!
//! ```text
//! kind,employee_id,employee_name,award_id,date,quantity
//! VEST,E001,Alice Smith,ISO-001,2020-01-01,1000
//! ```
//!
//! There is no header row. Whitespace-only lines are not records.

use chrono::NaiveDate;
use tracing::warn;
use vest_types::{EntryKind, LedgerEntry};

use crate::error::RowParseError;

/// A record that failed validation, with its 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedRow {
    pub line: usize,
    pub error: RowParseError,
}

/// Result of validating a whole ledger text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedLedger {
    /// Valid entries in input order.
    pub entries: Vec<LedgerEntry>,
    pub rejected: Vec<RejectedRow>,
}

impl ParsedLedger {
    /// Number of records seen, valid or not.
    pub fn total_rows(&self) -> usize {
        self.entries.len() + self.rejected.len()
    }
}

/// Parse one record's fields into a [`LedgerEntry`].
///
/// Fields are trimmed before validation. Checks run in the order count,
/// kind, quantity, date, identifiers; the first failure is reported.
pub fn parse_entry(fields: &[&str]) -> Result<LedgerEntry, RowParseError> {
    let [kind, employee_id, employee_name, award_id, date, quantity] = fields else {
        return Err(RowParseError::FieldCount {
            found: fields.len(),
        });
    };

    let kind: EntryKind = kind.trim().parse()?;

    let quantity = quantity.trim();
    let quantity = parse_quantity(quantity)
        .ok_or_else(|| RowParseError::InvalidQuantity(quantity.to_string()))?;

    let date = date.trim();
    let effective_date =
        parse_iso_date(date).ok_or_else(|| RowParseError::InvalidDate(date.to_string()))?;

    Ok(LedgerEntry::new(
        kind,
        employee_id.trim(),
        employee_name.trim(),
        award_id.trim(),
        effective_date,
        quantity,
    )?)
}

/// Validate every record in `raw`, keeping the valid entries and collecting
/// the rejected ones.
pub fn parse_ledger(raw: &str) -> ParsedLedger {
    let mut parsed = ParsedLedger::default();

    for (index, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        match parse_entry(&fields) {
            Ok(entry) => parsed.entries.push(entry),
            Err(error) => {
                let line = index + 1;
                warn!(line, %error, "row dropped from vesting ledger");
                parsed.rejected.push(RejectedRow { line, error });
            }
        }
    }

    parsed
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// Unlike a bare `%Y-%m-%d` parse this rejects unpadded components, signs,
/// and extra digits, as well as impossible dates such as `2021-02-30`.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let year = s[0..4].parse().ok()?;
    let month = s[5..7].parse().ok()?;
    let day = s[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_quantity(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
