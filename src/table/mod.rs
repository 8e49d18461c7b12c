pub mod merge;
pub mod normalize;

pub use merge::merge_reports;
pub use normalize::normalize_insurer_column;

use std::fmt;

use crate::error::{ClaimsError, ClaimsResult};

/// A single scalar value in a report cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Empty => Ok(()),
        }
    }
}

/// An in-memory rectangular dataset: ordered column names plus ordered rows.
///
/// Every row is exactly as wide as the header; `Table::new` rejects ragged
/// input so the rest of the crate can index rows by column position.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> ClaimsResult<Self> {
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ClaimsError::InvalidArgument(format!(
                    "row {} has {} fields, expected {}",
                    idx,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    /// The ordered column names. Schema equality is exact name match,
    /// order-sensitive.
    pub fn schema(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A parsed upload: the table plus the filename it came from, so merge errors
/// can tell the user which file to fix.
#[derive(Debug, Clone)]
pub struct Report {
    pub source: String,
    pub table: Table,
}
