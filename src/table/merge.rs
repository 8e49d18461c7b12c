use tracing::info;

use crate::error::{ClaimsError, ClaimsResult};

use super::{Report, Table};

/// Row-wise concatenation of reports that share an identical column schema.
///
/// The first report's schema is the reference; every later report must match
/// it exactly, names and order both. A mismatch fails with the offending
/// report's position and filename so the caller can say which upload broke.
/// Rows come out in input order: all of report 0, then all of report 1, and
/// so on. An empty sequence is an invalid argument.
#[tracing::instrument(level = "info", skip(reports), fields(reports = reports.len()))]
pub fn merge_reports(reports: &[Report]) -> ClaimsResult<Table> {
    let (first, rest) = reports
        .split_first()
        .ok_or_else(|| ClaimsError::InvalidArgument("no reports to merge".into()))?;

    let reference = first.table.schema();
    for (offset, report) in rest.iter().enumerate() {
        if report.table.schema() != reference {
            return Err(ClaimsError::SchemaMismatch {
                index: offset + 1,
                source: report.source.clone(),
                expected: reference.to_vec(),
                found: report.table.schema().to_vec(),
            });
        }
    }

    let total: usize = reports.iter().map(|r| r.table.row_count()).sum();
    let mut rows = Vec::with_capacity(total);
    for report in reports {
        rows.extend_from_slice(report.table.rows());
    }

    info!(rows = rows.len(), "merged reports");
    Table::new(reference.to_vec(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    fn report(source: &str, columns: &[&str], rows: &[&[&str]]) -> Report {
        let table = Table::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|v| Cell::Text(v.to_string())).collect())
                .collect(),
        )
        .unwrap();
        Report {
            source: source.to_string(),
            table,
        }
    }

    #[test]
    fn singleton_is_identity() {
        let r = report("a.csv", &["id", "value"], &[&["1", "x"], &["2", "y"]]);
        let merged = merge_reports(std::slice::from_ref(&r)).unwrap();
        assert_eq!(merged, r.table);
    }

    #[test]
    fn concatenates_rows_in_input_order() {
        let r1 = report(
            "a.csv",
            &["id", "value"],
            &[&["1", "x"], &["2", "y"], &["3", "z"]],
        );
        let r2 = report(
            "b.csv",
            &["id", "value"],
            &[&["4", "p"], &["5", "q"], &["6", "r"], &["7", "s"], &["8", "t"]],
        );
        let merged = merge_reports(&[r1.clone(), r2.clone()]).unwrap();

        assert_eq!(merged.schema(), r1.table.schema());
        assert_eq!(merged.row_count(), 8);
        assert_eq!(merged.rows()[0], r1.table.rows()[0]);
        assert_eq!(merged.rows()[3], r2.table.rows()[0]);
        assert_eq!(merged.rows()[7], r2.table.rows()[4]);
    }

    #[test]
    fn renamed_column_is_a_mismatch() {
        let r1 = report("a.csv", &["id", "value"], &[&["1", "x"]]);
        let r3 = report("c.csv", &["id", "amount"], &[&["2", "y"]]);
        let err = merge_reports(&[r1, r3]).unwrap_err();
        match err {
            ClaimsError::SchemaMismatch {
                index,
                source,
                expected,
                found,
            } => {
                assert_eq!(index, 1);
                assert_eq!(source, "c.csv");
                assert_eq!(expected, vec!["id", "value"]);
                assert_eq!(found, vec!["id", "amount"]);
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn reordered_columns_are_a_mismatch() {
        let r1 = report("a.csv", &["id", "value"], &[&["1", "x"]]);
        let r2 = report("b.csv", &["value", "id"], &[&["y", "2"]]);
        assert!(matches!(
            merge_reports(&[r1, r2]).unwrap_err(),
            ClaimsError::SchemaMismatch { index: 1, .. }
        ));
    }

    #[test]
    fn empty_sequence_is_invalid() {
        assert!(matches!(
            merge_reports(&[]).unwrap_err(),
            ClaimsError::InvalidArgument(_)
        ));
    }
}
