use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::ClaimsResult;
use crate::table::{Cell, Table};

use super::ingestion_error;

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Text(b.to_string()),
        // Serial date number; no coercion to calendar types at this layer.
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

/// Parse a spreadsheet report from the first worksheet; row 0 is the header.
pub fn read_xlsx(filename: &str, bytes: &[u8]) -> ClaimsResult<Table> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| ingestion_error(filename, format!("not a readable workbook: {e}")))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ingestion_error(filename, "workbook has no sheets".into()))?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| ingestion_error(filename, format!("failed to read sheet '{sheet}': {e}")))?;

    let mut rows_iter = range.rows();
    let header = rows_iter
        .next()
        .ok_or_else(|| ingestion_error(filename, "missing header row".into()))?;

    let columns: Vec<String> = header.iter().map(|d| d.to_string().trim().to_string()).collect();
    if columns.iter().all(|c| c.is_empty()) {
        return Err(ingestion_error(filename, "missing header row".into()));
    }

    let rows: Vec<Vec<Cell>> = rows_iter
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Table::new(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClaimsError;
    use crate::export::to_xlsx_bytes;

    #[test]
    fn garbage_bytes_are_an_ingestion_error() {
        let err = read_xlsx("junk.xlsx", b"not a zip archive").unwrap_err();
        assert!(matches!(err, ClaimsError::Ingestion { source, .. } if source == "junk.xlsx"));
    }

    #[test]
    fn reads_back_headers_and_typed_cells() {
        let table = Table::new(
            vec!["claim_id".into(), "seguradora".into(), "value".into()],
            vec![
                vec![
                    Cell::Number(1.0),
                    Cell::Text("Acme".into()),
                    Cell::Number(10.5),
                ],
                vec![Cell::Number(2.0), Cell::Text("Zeta".into()), Cell::Empty],
            ],
        )
        .unwrap();

        let bytes = to_xlsx_bytes(&table).unwrap();
        let parsed = read_xlsx("claims.xlsx", &bytes).unwrap();

        assert_eq!(parsed.schema(), table.schema());
        assert_eq!(parsed.row_count(), 2);
        assert_eq!(parsed.rows()[0][1], Cell::Text("Acme".into()));
        assert_eq!(parsed.rows()[1][2], Cell::Empty);
    }
}
