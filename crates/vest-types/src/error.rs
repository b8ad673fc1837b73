use thiserror::Error;

/// Errors produced while constructing model types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown entry kind: {0:?} (expected VEST or CANCEL)")]
    UnknownKind(String),

    #[error("field {field} must not be empty")]
    EmptyField { field: &'static str },
}
