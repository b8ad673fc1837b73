//! Invocation input validation.
//!
//! Valid ledger names:
//! - Must be non-empty
//! - Must not contain control characters or any of `\ / : * ? " < > |`
//! - Must carry one of the allowed extensions (compared case-insensitively)
//!
//! Valid target dates follow `YYYY-MM-DD` and name a real calendar day.

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use vest_ledger::parse_iso_date;

/// Characters that are forbidden anywhere in a ledger name.
const FORBIDDEN_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Invalid input on the command line. Nothing is computed when this occurs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvocationError {
    #[error("{name:?} is not a valid ledger file name: {reason}")]
    InvalidLedgerName { name: String, reason: String },

    #[error("{value:?} is not a valid date or does not follow YYYY-MM-DD format")]
    InvalidTargetDate { value: String },
}

/// Validate a ledger name against the allowed extensions.
///
/// Extensions in `allowed` may be written with or without the leading dot.
pub fn validate_ledger_name(name: &str, allowed: &[String]) -> Result<(), InvocationError> {
    let invalid = |reason: String| InvocationError::InvalidLedgerName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("ledger name must not be empty".into()));
    }

    if let Some(ch) = name
        .chars()
        .find(|ch| FORBIDDEN_CHARS.contains(ch) || ch.is_control())
    {
        return Err(invalid(format!("contains forbidden character: {ch:?}")));
    }

    let extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    let permitted = extension.as_deref().is_some_and(|ext| {
        allowed
            .iter()
            .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(ext))
    });
    if !permitted {
        return Err(invalid(format!(
            "extension must be one of: {}",
            allowed.join(", ")
        )));
    }

    Ok(())
}

/// Parse a target date given on the command line.
pub fn parse_target_date(value: &str) -> Result<NaiveDate, InvocationError> {
    parse_iso_date(value).ok_or_else(|| InvocationError::InvalidTargetDate {
        value: value.to_string(),
    })
}
