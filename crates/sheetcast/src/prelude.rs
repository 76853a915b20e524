//! Prelude module - common imports for sheetcast users
//!
//! ```rust
//! use sheetcast::prelude::*;
//! ```

pub use crate::{
    // Error types
    DecodeError,
    DecodeOptions,
    DecodeResult,
    // Main types
    Decoder,
    DecoderRegistry,
    // Record types
    Descriptor,
    FieldKind,
    MemorySource,
    Record,
    RowDecoder,
    // Source types
    RowSource,
    UnknownColumns,
};

#[cfg(feature = "csv")]
pub use crate::{CsvSource, CsvSourceOptions};
#[cfg(feature = "xlsx")]
pub use crate::XlsxSource;
