//! # sheetcast
//!
//! A Rust library for decoding spreadsheet rows into typed records.
//!
//! Sheetcast reads a sheet's header row plus data rows from a
//! [`RowSource`] (XLSX via `calamine`, CSV, or in-memory) and decodes each
//! data row into a caller-declared [`Record`]:
//!
//! - header cells resolve through an optional rename table onto
//!   sheet-qualified column keys,
//! - scalar cells convert by the target field's kind,
//! - delimited list cells decompose against per-column regular expressions
//!   into nested sub-records,
//! - custom decoders registered per column key override built-in conversion.
//!
//! ## Example
//!
//! ```rust
//! use sheetcast::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Part {
//!     id: u64,
//!     name: String,
//! }
//!
//! impl Record for Part {
//!     fn descriptor() -> Descriptor<Self> {
//!         Descriptor::<Self>::new()
//!             .uint_field("Id", |part, v| part.id = v)
//!             .string_field("Name", |part, v| part.name = v)
//!     }
//! }
//!
//! let source = MemorySource::new().with_sheet("Parts", [["Id", "Name"], ["7", "bolt"]]);
//! let decoder = Decoder::new(source);
//!
//! for row in decoder.for_sheet("Parts") {
//!     let mut part = Part::default();
//!     row.decode(&mut part).unwrap();
//!     assert_eq!(part.name, "bolt");
//! }
//! ```

pub mod prelude;

use std::path::Path;

use thiserror::Error;

// Re-export core types
pub use sheetcast_core::{
    parse_bool,
    parse_float,
    parse_int,
    parse_uint,
    BoxError,
    ColumnKey,
    DecodeError,
    DecodeOptions,
    DecodeResult,
    // Main types
    Decoder,
    DecoderRegistry,
    Descriptor,
    Field,
    FieldKind,
    MemorySource,
    Record,
    RowDecoder,
    // Source types
    RowSource,
    UnknownColumns,
};

// Re-export I/O sources
#[cfg(feature = "csv")]
pub use sheetcast_csv::{CsvSource, CsvSourceError, CsvSourceOptions, CsvSourceResult};
#[cfg(feature = "xlsx")]
pub use sheetcast_xlsx::{XlsxSource, XlsxSourceError, XlsxSourceResult};

/// Errors that can occur while opening a file-backed decoder
#[derive(Debug, Error)]
pub enum OpenError {
    /// The file extension maps to no enabled row source
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// XLSX source error
    #[cfg(feature = "xlsx")]
    #[error(transparent)]
    Xlsx(#[from] XlsxSourceError),

    /// CSV source error
    #[cfg(feature = "csv")]
    #[error(transparent)]
    Csv(#[from] CsvSourceError),
}

/// Open a spreadsheet file as a [`Decoder`], dispatching on the extension.
///
/// `xlsx`/`xlsm` files load through [`XlsxSource`], `csv` files through
/// [`CsvSource`] with default options.
pub fn open<P: AsRef<Path>>(
    path: P,
    options: DecodeOptions,
) -> Result<Decoder<Box<dyn RowSource>>, OpenError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let source: Box<dyn RowSource> = match extension.as_deref() {
        #[cfg(feature = "xlsx")]
        Some("xlsx") | Some("xlsm") => Box::new(XlsxSource::open(path)?),
        #[cfg(feature = "csv")]
        Some("csv") => Box::new(CsvSource::from_path(path, &CsvSourceOptions::default())?),
        _ => {
            return Err(OpenError::UnsupportedFormat(path.display().to_string()));
        }
    };

    Ok(Decoder::with_options(source, options))
}
