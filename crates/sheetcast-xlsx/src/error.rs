//! XLSX source error types

use thiserror::Error;

/// Result type for XLSX source operations
pub type XlsxSourceResult<T> = std::result::Result<T, XlsxSourceError>;

/// Errors that can occur while loading an XLSX row source
#[derive(Debug, Error)]
pub enum XlsxSourceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XLSX library error
    #[error("XLSX error: {0}")]
    Xlsx(#[from] calamine::XlsxError),
}
