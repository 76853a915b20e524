//! CSV source error types

use thiserror::Error;

/// Result type for CSV source operations
pub type CsvSourceResult<T> = std::result::Result<T, CsvSourceError>;

/// Errors that can occur while loading a CSV row source
#[derive(Debug, Error)]
pub enum CsvSourceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
