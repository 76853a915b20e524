//! # sheetcast-xlsx
//!
//! XLSX-backed [`RowSource`](sheetcast_core::RowSource) for sheetcast,
//! delegating workbook parsing to `calamine`.

pub mod error;
pub mod source;

pub use error::{XlsxSourceError, XlsxSourceResult};
pub use source::XlsxSource;
