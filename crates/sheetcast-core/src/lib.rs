//! # sheetcast-core
//!
//! Core row-to-record decoding engine for the sheetcast library.
//!
//! Given a header row naming columns and a target record shape, each data
//! row is decoded field-by-field:
//! - [`ColumnKey`] resolution maps raw header cells through a rename table
//!   onto sheet-qualified canonical column keys,
//! - scalar cells convert by the field's declared kind (bool, int, uint,
//!   float, string),
//! - delimited list cells decompose against a per-column regular expression
//!   into repeated sub-records,
//! - custom decoders registered per column key bypass built-in conversion.
//!
//! Record shapes are declared through [`Record`] descriptors rather than
//! runtime reflection, so decoding stays fully typed.
//!
//! ## Example
//!
//! ```rust
//! use sheetcast_core::{Decoder, Descriptor, MemorySource, Record};
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
//! let mut part = Part::default();
//! decoder.for_sheet("Parts")[0].decode(&mut part).unwrap();
//! assert_eq!(part.id, 7);
//! assert_eq!(part.name, "bolt");
//! ```

pub mod convert;
pub mod decode;
mod decompose;
pub mod error;
pub mod key;
pub mod options;
pub mod record;
pub mod registry;
pub mod source;

// Re-exports for convenience
pub use convert::{parse_bool, parse_float, parse_int, parse_uint};
pub use decode::{Decoder, RowDecoder};
pub use error::{BoxError, DecodeError, DecodeResult};
pub use key::ColumnKey;
pub use options::{DecodeOptions, UnknownColumns};
pub use record::{Descriptor, Field, FieldKind, Record};
pub use registry::DecoderRegistry;
pub use source::{MemorySource, RowSource};
