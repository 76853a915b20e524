//! # sheetcast-csv
//!
//! CSV-backed [`RowSource`](sheetcast_core::RowSource) for sheetcast. One
//! CSV file is exposed as a single named sheet whose first record is the
//! header row.

pub mod error;
pub mod options;
pub mod source;

pub use error::{CsvSourceError, CsvSourceResult};
pub use options::CsvSourceOptions;
pub use source::CsvSource;
