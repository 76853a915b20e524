//! CSV source options

/// Options for reading a CSV file as a row source
#[derive(Debug, Clone)]
pub struct CsvSourceOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Name under which the file's rows are exposed (default: "Sheet1")
    pub sheet_name: String,
}

impl Default for CsvSourceOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            sheet_name: "Sheet1".to_string(),
        }
    }
}
