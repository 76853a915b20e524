//! Decode error types

use thiserror::Error;

use crate::record::FieldKind;

/// Boxed error returned by custom decoders and underlying parsers
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias using [`DecodeError`]
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while decoding a row into a record
///
/// Every variant aborts the row it occurred in; fields assigned before the
/// failing cell remain set on the target record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A custom decoder was invoked with a record of a different type than
    /// it was registered for
    #[error("invalid decode target for column {column}: custom decoder expects {expected}, got {found}")]
    InvalidTarget {
        column: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A header column matched no record field (only under
    /// [`UnknownColumns::Deny`](crate::options::UnknownColumns::Deny))
    #[error("no record field matches column {column} (row {row})")]
    UnknownColumn { column: String, row: u32 },

    /// A cell's text could not be parsed as the field's declared kind
    #[error("cannot convert cell [{column}:{row}] value '{value}' to {kind}")]
    Scalar {
        column: String,
        row: u32,
        value: String,
        kind: FieldKind,
        #[source]
        source: BoxError,
    },

    /// A list-typed field has no pattern registered for its column key
    #[error("no decomposition pattern registered for column {column} (row {row})")]
    MissingPattern { column: String, row: u32 },

    /// A non-empty sub-token of a list cell matched nothing
    #[error("cell [{column}:{row}] value '{value}' does not match the column pattern")]
    PatternMismatch {
        column: String,
        row: u32,
        value: String,
    },

    /// A registered custom decoder returned an error
    #[error("custom decoder failed for cell [{column}:{row}] value '{value}'")]
    Custom {
        column: String,
        row: u32,
        value: String,
        #[source]
        source: BoxError,
    },

    /// Descriptor or pattern misuse caught at the decode boundary, e.g. a
    /// pattern capturing more groups than the sub-record has fields
    #[error("descriptor misuse at column {column} (row {row}): {detail}")]
    Descriptor {
        column: String,
        row: u32,
        detail: String,
    },
}

impl DecodeError {
    pub(crate) fn scalar(
        column: &str,
        row: u32,
        value: &str,
        kind: FieldKind,
        source: impl Into<BoxError>,
    ) -> Self {
        DecodeError::Scalar {
            column: column.to_string(),
            row,
            value: value.to_string(),
            kind,
            source: source.into(),
        }
    }
}
