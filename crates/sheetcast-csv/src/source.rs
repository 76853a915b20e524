//! CSV row source

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sheetcast_core::RowSource;

use crate::error::CsvSourceResult;
use crate::options::CsvSourceOptions;

/// One CSV file exposed as a single named sheet
///
/// All records are materialized at construction; the first record is the
/// header row. Records are read in flexible mode, so ragged rows pass
/// through unchanged.
#[derive(Debug, Clone)]
pub struct CsvSource {
    name: String,
    rows: Vec<Vec<String>>,
}

impl CsvSource {
    /// Read a CSV file as a row source
    pub fn from_path<P: AsRef<Path>>(path: P, options: &CsvSourceOptions) -> CsvSourceResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file, options)
    }

    /// Read CSV from a reader as a row source
    pub fn from_reader<R: Read>(reader: R, options: &CsvSourceOptions) -> CsvSourceResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            rows.push(record.iter().map(|field| field.to_string()).collect());
        }

        Ok(Self {
            name: options.sheet_name.clone(),
            rows,
        })
    }

    /// The sheet name this source answers to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows, header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl RowSource for CsvSource {
    fn sheet_names(&self) -> Vec<String> {
        vec![self.name.clone()]
    }

    fn rows(&self, sheet: &str) -> Option<Vec<Vec<String>>> {
        (sheet == self.name).then(|| self.rows.clone())
    }
}
