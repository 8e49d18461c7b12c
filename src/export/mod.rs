//! XLSX serialization of a merged table for download.

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::error::{ClaimsError, ClaimsResult};
use crate::table::{Cell, Table};

/// MIME type for the downloadable workbook.
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Suggested filename for the merged download.
pub const MERGED_FILENAME: &str = "merged_reports.xlsx";

/// Serialize a table into XLSX bytes: header on row 0, one worksheet row per
/// table row, empty cells left unwritten.
pub fn to_xlsx_bytes(table: &Table) -> ClaimsResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in table.schema().iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name)
            .map_err(export_failed)?;
    }

    for (idx, row) in table.rows().iter().enumerate() {
        let out_row = (idx + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(s) => {
                    worksheet
                        .write_string(out_row, col as u16, s)
                        .map_err(export_failed)?;
                }
                Cell::Number(n) => {
                    worksheet
                        .write_number(out_row, col as u16, *n)
                        .map_err(export_failed)?;
                }
                Cell::Empty => {}
            }
        }
    }

    workbook.save_to_buffer().map_err(export_failed)
}

fn export_failed(err: XlsxError) -> ClaimsError {
    ClaimsError::Export(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_a_zip_container() {
        let table = Table::new(
            vec!["claim_id".into(), "value".into()],
            vec![vec![Cell::Number(1.0), Cell::Text("x".into())]],
        )
        .unwrap();

        let bytes = to_xlsx_bytes(&table).unwrap();
        // XLSX is a ZIP archive; check the local-file-header magic.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn zero_row_table_still_serializes() {
        let table = Table::new(vec!["claim_id".into()], vec![]).unwrap();
        assert!(!to_xlsx_bytes(&table).unwrap().is_empty());
    }
}
