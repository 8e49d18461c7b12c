//! Upload parsing: delimited text and spreadsheet files into [`Report`]s.
//!
//! The table operations never see raw bytes; this module owns format
//! detection and parsing, and every failure surfaces as
//! [`ClaimsError::Ingestion`] naming the upload.

pub mod csv;
pub mod xlsx;

use std::path::Path;

use tracing::info;

use crate::error::{ClaimsError, ClaimsResult};
use crate::table::Report;

/// Parse one uploaded report, dispatching on the filename extension.
#[tracing::instrument(level = "info", skip(bytes), fields(file = %filename, size = bytes.len()))]
pub fn load_report(filename: &str, bytes: &[u8]) -> ClaimsResult<Report> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let table = match ext.as_str() {
        "csv" => csv::read_csv(filename, bytes)?,
        "xlsx" => xlsx::read_xlsx(filename, bytes)?,
        _ => {
            return Err(ClaimsError::Ingestion {
                source: filename.to_string(),
                reason: format!("unsupported report format '{filename}'; expected .csv or .xlsx"),
            })
        }
    };

    info!(
        rows = table.row_count(),
        columns = table.schema().len(),
        "loaded report"
    );
    Ok(Report {
        source: filename.to_string(),
        table,
    })
}

pub(crate) fn ingestion_error(source: &str, reason: String) -> ClaimsError {
    ClaimsError::Ingestion {
        source: source.to_string(),
        reason,
    }
}
