//! CSV table loading with encoding selection

use crate::config::Encoding;
use crate::PipelineError;
use digduck_domain::Article;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A CSV table with a header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Read and decode a CSV file
    pub fn from_path(path: impl AsRef<Path>, encoding: Encoding) -> Result<Self, PipelineError> {
        let bytes = fs::read(path.as_ref())?;
        Self::from_bytes(&bytes, encoding)
    }

    /// Decode CSV bytes in the given encoding
    ///
    /// A UTF-8 byte order mark is removed. Invalid byte sequences are an error
    /// rather than being replaced.
    pub fn from_bytes(bytes: &[u8], encoding: Encoding) -> Result<Self, PipelineError> {
        let (text, had_errors) = match encoding {
            Encoding::Utf8 => encoding_rs::UTF_8.decode_with_bom_removal(bytes),
            Encoding::ShiftJis => encoding_rs::SHIFT_JIS.decode_without_bom_handling(bytes),
        };
        if had_errors {
            return Err(PipelineError::Decode(encoding.to_string()));
        }
        Self::from_csv_str(&text)
    }

    /// Parse already-decoded CSV text
    ///
    /// Rows may have fewer or more fields than the header.
    pub fn from_csv_str(text: &str) -> Result<Self, PipelineError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        let table = Self { headers, rows };
        debug!(
            "Loaded table with {} columns and {} rows",
            table.headers.len(),
            table.rows.len()
        );
        Ok(table)
    }

    /// Header names in column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact name
    pub fn column_index(&self, column: &str) -> Result<usize, PipelineError> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| PipelineError::ColumnNotFound {
                column: column.to_string(),
                available: self.headers.clone(),
            })
    }

    /// One article per data row, taken from `column`
    ///
    /// Rows too short to have the column give an empty article.
    pub fn articles(&self, column: &str) -> Result<Vec<Article>, PipelineError> {
        let index = self.column_index(column)?;
        Ok(self
            .rows
            .iter()
            .enumerate()
            .map(|(row, fields)| {
                Article::new(row, fields.get(index).cloned().unwrap_or_default())
            })
            .collect())
    }
}
