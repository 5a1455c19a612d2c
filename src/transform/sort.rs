//! Row ordering and truncation

use std::cmp::Ordering;

use crate::error::PrepError;
use crate::model::{CellValue, Table};

/// Sort direction for [`sort_by_column`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Stable-sort rows by the named column.
///
/// Numeric cells order numerically, strings lexicographically. Empty cells
/// sort last in both directions. Ties keep their original relative order.
pub fn sort_by_column(
    table: &mut Table,
    column: &str,
    direction: SortDirection,
) -> Result<(), PrepError> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| PrepError::ColumnNotFound(column.to_string()))?;

    table.rows.sort_by(|a, b| {
        let va = a.get(idx).filter(|cell| !cell.is_empty());
        let vb = b.get(idx).filter(|cell| !cell.is_empty());
        match (va, vb) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => {
                let ordering = compare_cells(x, y);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
        }
    });
    Ok(())
}

/// Truncate the table to its first `limit` rows
pub fn head(table: &mut Table, limit: usize) {
    table.rows.truncate(limit);
}

fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
        (CellValue::String(a), CellValue::String(b)) => a.cmp(b),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    fn magnitude_table() -> Table {
        let columns = vec![Column::new("Magnitude", 0), Column::new("Date", 1)];
        let mut table = Table::new(columns);
        table.add_row(vec![CellValue::Float(6.1), CellValue::from("2023-03-01")], 2);
        table.add_row(vec![CellValue::Float(7.8), CellValue::from("2023-01-15")], 3);
        table.add_row(vec![CellValue::Null, CellValue::from("2023-02-02")], 4);
        table.add_row(vec![CellValue::Float(6.9), CellValue::from("2023-04-20")], 5);
        table.add_row(vec![CellValue::Float(7.8), CellValue::from("2023-05-05")], 6);
        table
    }

    fn magnitudes(table: &Table) -> Vec<CellValue> {
        table.rows.iter().map(|r| r.cells[0].clone()).collect()
    }

    #[test]
    fn test_ascending_adjacent_pairs() {
        let mut table = magnitude_table();
        sort_by_column(&mut table, "Magnitude", SortDirection::Ascending).unwrap();

        let values: Vec<_> = table
            .rows
            .iter()
            .filter_map(|r| r.cells[0].as_f64())
            .collect();
        for pair in values.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_descending_with_nulls_last() {
        let mut table = magnitude_table();
        sort_by_column(&mut table, "Magnitude", SortDirection::Descending).unwrap();

        assert_eq!(
            magnitudes(&table),
            vec![
                CellValue::Float(7.8),
                CellValue::Float(7.8),
                CellValue::Float(6.9),
                CellValue::Float(6.1),
                CellValue::Null,
            ]
        );
    }

    #[test]
    fn test_ties_keep_source_order() {
        let mut table = magnitude_table();
        sort_by_column(&mut table, "Magnitude", SortDirection::Descending).unwrap();

        // Both 7.8 rows tie; the one read first stays first
        assert_eq!(table.rows[0].source_line, 3);
        assert_eq!(table.rows[1].source_line, 6);
    }

    #[test]
    fn test_string_sort_is_lexicographic() {
        let mut table = magnitude_table();
        sort_by_column(&mut table, "Date", SortDirection::Ascending).unwrap();

        let first = table.rows[0].cells[1].display().into_owned();
        let last = table.rows[4].cells[1].display().into_owned();
        assert_eq!(first, "2023-01-15");
        assert_eq!(last, "2023-05-05");
    }

    #[test]
    fn test_head_truncates_after_sort() {
        let mut table = magnitude_table();
        sort_by_column(&mut table, "Magnitude", SortDirection::Descending).unwrap();
        head(&mut table, 3);

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[2].cells[0], CellValue::Float(6.9));
    }

    #[test]
    fn test_head_larger_than_table() {
        let mut table = magnitude_table();
        head(&mut table, 50);
        assert_eq!(table.row_count(), 5);
    }

    #[test]
    fn test_missing_sort_column() {
        let mut table = magnitude_table();
        let err = sort_by_column(&mut table, "Depth", SortDirection::Ascending).unwrap_err();
        assert!(matches!(err, PrepError::ColumnNotFound(_)));
    }
}
