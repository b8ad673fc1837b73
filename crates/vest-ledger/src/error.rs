//! Error types for the vesting ledger.

use std::path::PathBuf;

use vest_types::TypeError;

/// Why a single ledger record was rejected.
///
/// A rejected row is skipped; it never aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowParseError {
    #[error("expected 6 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid entry kind {0:?}: expected VEST or CANCEL")]
    InvalidKind(String),

    #[error("invalid quantity {0:?}: expected a non-negative base-10 integer")]
    InvalidQuantity(String),

    #[error("invalid date {0:?}: expected a calendar date formatted as YYYY-MM-DD")]
    InvalidDate(String),

    #[error("field {field} must not be empty")]
    MissingField { field: &'static str },
}

impl From<TypeError> for RowParseError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::UnknownKind(kind) => Self::InvalidKind(kind),
            TypeError::EmptyField { field } => Self::MissingField { field },
        }
    }
}

/// The ledger source could not be read.
#[derive(Debug, thiserror::Error)]
pub enum AccessFailure {
    #[error("cannot read ledger {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ledger {} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    #[error("ledger source unavailable: {0}")]
    Unavailable(String),
}

/// The output collaborator failed to publish a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors surfaced by [`VestingService`](crate::service::VestingService).
///
/// Access failures and malformed rows are absorbed by the service, so only
/// publishing can fail a run.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),
}
