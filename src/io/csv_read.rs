use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Result, ToolError};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One data row of a CSV export, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    line: u64,
    cells: HashMap<String, String>,
}

impl Row {
    /// Creates an empty row that reports the given source line.
    pub fn new(line: u64) -> Self {
        Self {
            line,
            cells: HashMap::new(),
        }
    }

    /// Builds a row from header/value pairs. Later duplicates replace
    /// earlier ones.
    pub fn from_pairs<K, V>(line: u64, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new(line);
        for (column, value) in pairs {
            row.insert(column, value);
        }
        row
    }

    /// Inserts or replaces a cell.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Returns the cell under `column`, if the header exists.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Whether the export carried a header named `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// 1-based line number of the row in its source file.
    pub fn line(&self) -> u64 {
        self.line
    }
}

/// Loads a header-driven CSV export into rows, preserving source order.
pub fn load_csv(path: &Path) -> Result<Vec<Row>> {
    let text = fs::read_to_string(path).map_err(|error| {
        if error.kind() == ErrorKind::NotFound {
            ToolError::MissingInput(path.to_path_buf())
        } else {
            ToolError::Io(error)
        }
    })?;
    let rows = parse_csv(&text)?;
    debug!(path = %path.display(), row_count = rows.len(), "loaded CSV export");
    Ok(rows)
}

/// Parses CSV text whose first record names the columns.
///
/// Rows shorter than the header get empty cells for the missing trailing
/// columns; cells beyond the header are ignored.
pub fn parse_csv(text: &str) -> Result<Vec<Row>> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let mut row = Row::new(line);
        for (index, header) in headers.iter().enumerate() {
            row.insert(header.as_str(), record.get(index).unwrap_or_default());
        }
        rows.push(row);
    }

    Ok(rows)
}
