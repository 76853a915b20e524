//! Row sources
//!
//! A [`RowSource`] supplies, per named sheet, the ordered cell rows with the
//! header first. File-backed implementations live in the `sheetcast-xlsx`
//! and `sheetcast-csv` crates; [`MemorySource`] serves programmatic input
//! and tests.

/// External supplier of a named sheet's rows
pub trait RowSource {
    /// Names of all sheets, in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Every row of the sheet, header row included, or `None` for an
    /// unknown sheet name
    fn rows(&self, sheet: &str) -> Option<Vec<Vec<String>>>;
}

impl RowSource for Box<dyn RowSource> {
    fn sheet_names(&self) -> Vec<String> {
        (**self).sheet_names()
    }

    fn rows(&self, sheet: &str) -> Option<Vec<Vec<String>>> {
        (**self).rows(sheet)
    }
}

/// In-memory row source
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    sheets: Vec<(String, Vec<Vec<String>>)>,
}

impl MemorySource {
    /// Create a source with no sheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet; the first row is the header
    pub fn with_sheet<N, R, C>(mut self, name: N, rows: R) -> Self
    where
        N: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self.sheets.push((name.into(), rows));
        self
    }
}

impl RowSource for MemorySource {
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
