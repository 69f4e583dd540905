// Error types for INSERT recognition and multi-row generation.
// Every failure here is local to the call; nothing is fatal to the caller.

use thiserror::Error;

pub type InsertParseResult<T> = Result<T, InsertParseError>;
pub type BatchResult<T> = Result<T, BatchError>;

/// Why a piece of SQL text did not produce an `InsertDescriptor`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertParseError {
    #[error("statement is empty")]
    Blank,

    #[error("statement does not start with INSERT INTO")]
    NotAnInsert,

    /// Starts like an INSERT but lacks the `(columns) VALUES (` shape.
    #[error("INSERT has no explicit column list or no VALUES clause")]
    Malformed,

    #[error("INSERT column list is empty")]
    EmptyColumnList,

    #[error("INSERT table name is empty")]
    EmptyTableName,
}

/// Invalid request to the multi-row generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("no INSERT descriptor to expand")]
    MissingDescriptor,

    #[error("row count must be positive, got {0}")]
    InvalidRowCount(i64),
}
