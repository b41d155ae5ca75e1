//! Error types for result summary construction

use thiserror::Error;

/// Errors raised while building summary values from raw input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    /// Numeric statement classification outside 0..=4
    #[error("Unknown statement type code: {0}")]
    UnknownStatementTypeCode(i64),

    /// Textual statement classification not recognised
    #[error("Unknown statement type: {0}")]
    UnknownStatementType(String),

    /// Line and column are 1-based
    #[error("Invalid input position: line {line}, column {column}")]
    InvalidPosition { line: usize, column: usize },
}

pub type SummaryResult<T> = Result<T, SummaryError>;
