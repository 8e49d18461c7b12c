use std::io::Cursor;

use csv::ReaderBuilder;

use crate::error::ClaimsResult;
use crate::table::{Cell, Table};

use super::ingestion_error;

/// One-shot value sniffing at ingestion time: blank fields become `Empty`,
/// numeric fields become `Number`, everything else stays `Text`.
pub(crate) fn sniff_cell(field: &str) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Cell::Number(n),
        _ => Cell::Text(field.to_string()),
    }
}

/// Parse a delimited-text report. The first record is the header; ragged
/// records are an error rather than being padded or truncated.
pub fn read_csv(filename: &str, bytes: &[u8]) -> ClaimsResult<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(bytes));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ingestion_error(filename, format!("invalid header row: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(ingestion_error(filename, "missing header row".into()));
    }

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| ingestion_error(filename, format!("record {}: {e}", idx + 1)))?;
        rows.push(record.iter().map(sniff_cell).collect());
    }

    Table::new(headers, rows)
}
