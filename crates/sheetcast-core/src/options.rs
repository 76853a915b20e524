//! Decoder configuration

use std::collections::HashMap;

use regex::Regex;

use crate::registry::DecoderRegistry;

/// Policy for header columns with no matching record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownColumns {
    /// Log a warning and skip the cell (default)
    #[default]
    Warn,
    /// Abort the row with [`DecodeError::UnknownColumn`](crate::DecodeError::UnknownColumn)
    Deny,
}

/// Options for constructing a [`Decoder`](crate::Decoder)
///
/// All tables are keyed by sheet-qualified column keys (`"Sheet.Column"`)
/// and are read-only once the decoder is constructed.
#[derive(Debug)]
pub struct DecodeOptions {
    /// Rename table: sheet-qualified raw header text to canonical field name
    pub rename: HashMap<String, String>,
    /// Pattern table: qualified column key to list decomposition pattern
    pub patterns: HashMap<String, Regex>,
    /// Custom decoders, checked before built-in conversion
    pub decoders: DecoderRegistry,
    /// Split delimiter for list cells (default: comma)
    pub split: String,
    /// Policy for unmatched header columns
    pub unknown_columns: UnknownColumns,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            rename: HashMap::new(),
            patterns: HashMap::new(),
            decoders: DecoderRegistry::new(),
            split: ",".to_string(),
            unknown_columns: UnknownColumns::Warn,
        }
    }
}
