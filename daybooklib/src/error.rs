//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaybookError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    /// Во входном тексте не нашлось ни одной корректной строки.
    #[error("no valid records in message")]
    NoRecords,

    #[error("document date is not set")]
    MissingDate,
}

pub type Result<T> = std::result::Result<T, DaybookError>;
