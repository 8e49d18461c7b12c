use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use tracing::info;

use crate::error::{ClaimsError, ClaimsResult};

use super::{Cell, Table};

/// Column names accepted as the insurer column, compared case-insensitively.
pub const INSURER_ALIASES: &[&str] =
    &["seguradora", "insurer", "cia_seguradora", "insurance_company"];

static ALIAS_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| INSURER_ALIASES.iter().copied().collect());

fn find_insurer_column(columns: &[String]) -> Option<usize> {
    columns
        .iter()
        .position(|name| ALIAS_SET.contains(name.to_lowercase().as_str()))
}

/// Replace insurer values that are not on the allow-list with a stable
/// placeholder.
///
/// Replaced values share one counter keyed by the distinct off-list value:
/// the first unknown insurer becomes "GENERIC 1" everywhere it appears, the
/// next distinct unknown becomes "GENERIC 2", and so on. Values on the
/// allow-list are matched by their display string and left untouched.
pub fn normalize_insurer_column(
    table: &Table,
    allow_list: &HashSet<String>,
) -> ClaimsResult<Table> {
    let col = find_insurer_column(table.schema()).ok_or_else(|| ClaimsError::ColumnNotFound {
        columns: table.schema().to_vec(),
        aliases: INSURER_ALIASES,
    })?;

    let mut placeholders: HashMap<String, String> = HashMap::new();
    let mut rows = table.rows().to_vec();
    for row in &mut rows {
        let value = row[col].to_string();
        if allow_list.contains(&value) {
            continue;
        }
        let next = placeholders.len() + 1;
        let label = placeholders
            .entry(value)
            .or_insert_with(|| format!("GENERIC {next}"))
            .clone();
        row[col] = Cell::Text(label);
    }

    info!(
        column = %table.schema()[col],
        distinct_replaced = placeholders.len(),
        "normalized insurer column"
    );
    Table::new(table.schema().to_vec(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow(values: &[&str]) -> HashSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn insurer_table(column: &str, insurers: &[&str]) -> Table {
        Table::new(
            vec!["claim_id".into(), column.into()],
            insurers
                .iter()
                .enumerate()
                .map(|(i, v)| vec![Cell::Number(i as f64 + 1.0), Cell::Text(v.to_string())])
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn discovery_is_case_insensitive() {
        let table = insurer_table("SEGURADORA", &["A", "B"]);
        let out = normalize_insurer_column(&table, &allow(&["A", "B"])).unwrap();
        assert_eq!(out, table);
    }

    #[test]
    fn off_list_values_share_a_counter() {
        let table = insurer_table("insurer", &["A", "Zed", "B", "Qux", "Zed"]);
        let out = normalize_insurer_column(&table, &allow(&["A", "B"])).unwrap();

        let labels: Vec<String> = out.rows().iter().map(|r| r[1].to_string()).collect();
        assert_eq!(labels, vec!["A", "GENERIC 1", "B", "GENERIC 2", "GENERIC 1"]);
        assert_eq!(out.schema(), table.schema());
        assert_eq!(out.row_count(), table.row_count());
    }

    #[test]
    fn only_the_insurer_column_changes() {
        let table = insurer_table("Insurance_Company", &["Nope"]);
        let out = normalize_insurer_column(&table, &allow(&["A"])).unwrap();
        assert_eq!(out.rows()[0][0], Cell::Number(1.0));
        assert_eq!(out.rows()[0][1], Cell::Text("GENERIC 1".into()));
    }

    #[test]
    fn no_alias_match_fails() {
        let table = Table::new(
            vec!["claim_id".into(), "carrier".into()],
            vec![vec![Cell::Number(1.0), Cell::Text("A".into())]],
        )
        .unwrap();
        let err = normalize_insurer_column(&table, &allow(&["A"])).unwrap_err();
        match err {
            ClaimsError::ColumnNotFound { columns, aliases } => {
                assert_eq!(columns, vec!["claim_id", "carrier"]);
                assert_eq!(aliases, INSURER_ALIASES);
            }
            other => panic!("expected ColumnNotFound, got {other:?}"),
        }
    }
}
