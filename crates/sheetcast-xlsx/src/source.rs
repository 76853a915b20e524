//! XLSX row source

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use sheetcast_core::RowSource;

use crate::error::XlsxSourceResult;

/// An XLSX workbook exposed as named sheets of text rows
///
/// Every sheet is materialized as strings at construction, so lookups after
/// `open` never touch the file again.
#[derive(Debug, Clone)]
pub struct XlsxSource {
    sheets: Vec<(String, Vec<Vec<String>>)>,
}

impl XlsxSource {
    /// Open a workbook and read all of its sheets
    pub fn open<P: AsRef<Path>>(path: P) -> XlsxSourceResult<Self> {
        let mut workbook: Xlsx<_> = open_workbook(path)?;

        let mut sheets = Vec::new();
        for name in workbook.sheet_names().to_owned() {
            let range = workbook.worksheet_range(&name)?;
            let rows = range
                .rows()
                .map(|row| row.iter().map(render_cell).collect())
                .collect();
            sheets.push((name, rows));
        }

        Ok(Self { sheets })
    }
}

impl RowSource for XlsxSource {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn rows(&self, sheet: &str) -> Option<Vec<Vec<String>>> {
        self.sheets
            .iter()
            .find(|(name, _)| name == sheet)
            .map(|(_, rows)| rows.clone())
    }
}

/// Render one cell as the text the decoding engine consumes.
///
/// Numbers go through `Display`, so integral floats render without a
/// fractional part and re-parse as integers; booleans render as the
/// `"true"`/`"false"` forms the boolean converter recognizes.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}
