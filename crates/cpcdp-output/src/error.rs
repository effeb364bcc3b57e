use cpcdp_model::ValidationError;
use thiserror::Error;

/// Failure to produce a record's JSON document.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The record did not pass validation; nothing was encoded.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid date format pattern {pattern:?}")]
    InvalidDateFormat { pattern: String },

    #[error("field <{field}> is declared by {record} but not exposed by the record accessor")]
    UndeclaredField { record: String, field: String },

    #[error("field <{field}> holds a non-finite number")]
    NonFiniteNumber { field: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type SerializeResult<T> = Result<T, SerializeError>;
