//! Row predicates

use std::borrow::Cow;
use std::ops::RangeInclusive;

use rustc_hash::FxHashSet;

use crate::error::PrepError;
use crate::model::{CellValue, Table};

/// Remove rows whose value in `column` is empty
pub fn drop_null_rows(table: &mut Table, column: &str) -> Result<(), PrepError> {
    let idx = require_column(table, column)?;
    table
        .rows
        .retain(|row| row.get(idx).is_some_and(|cell| !cell.is_empty()));
    Ok(())
}

/// Keep rows whose integer value in `column` falls inside `range`.
///
/// The column is expected to be coerced to integers first; rows holding
/// anything else (null, text, an uncoerced float) are excluded.
pub fn filter_int_range(
    table: &mut Table,
    column: &str,
    range: RangeInclusive<i64>,
) -> Result<(), PrepError> {
    let idx = require_column(table, column)?;
    table.rows.retain(|row| match row.get(idx) {
        Some(CellValue::Int(v)) => range.contains(v),
        _ => false,
    });
    Ok(())
}

/// Uppercase every string value in `column`
pub fn uppercase_column(table: &mut Table, column: &str) -> Result<(), PrepError> {
    let idx = require_column(table, column)?;
    for row in &mut table.rows {
        if let Some(CellValue::String(s)) = row.cells.get_mut(idx) {
            if s.chars().any(|c| c.is_lowercase()) {
                let upper = s.to_uppercase();
                *s = Cow::Owned(upper);
            }
        }
    }
    Ok(())
}

/// Keep rows whose value in `column` is one of the accepted strings
pub fn filter_membership(
    table: &mut Table,
    column: &str,
    accepted: &[&str],
) -> Result<(), PrepError> {
    let idx = require_column(table, column)?;
    let accepted: FxHashSet<&str> = accepted.iter().copied().collect();

    table.rows.retain(|row| match row.get(idx) {
        Some(CellValue::String(s)) => accepted.contains(s.as_ref()),
        _ => false,
    });
    Ok(())
}

fn require_column(table: &Table, column: &str) -> Result<usize, PrepError> {
    table
        .column_index(column)
        .ok_or_else(|| PrepError::ColumnNotFound(column.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Column;

    fn sample_table() -> Table {
        let columns = vec![Column::new("Year", 0), Column::new("Country", 1)];
        let mut table = Table::new(columns);
        table.add_row(vec![CellValue::Int(2010), CellValue::from("chile")], 2);
        table.add_row(vec![CellValue::Int(2014), CellValue::from("CHILE")], 3);
        table.add_row(vec![CellValue::Int(2015), CellValue::from("Peru")], 4);
        table.add_row(vec![CellValue::Int(2016), CellValue::from("France")], 5);
        table.add_row(vec![CellValue::Null, CellValue::from("usa")], 6);
        table
    }

    #[test]
    fn test_drop_null_rows() {
        let mut table = sample_table();
        drop_null_rows(&mut table, "Year").unwrap();

        assert_eq!(table.row_count(), 4);
        assert!(table.rows.iter().all(|r| !r.cells[0].is_empty()));
    }

    #[test]
    fn test_int_range_bounds_inclusive() {
        let mut table = sample_table();
        filter_int_range(&mut table, "Year", 2014..=2016).unwrap();

        assert_eq!(table.row_count(), 3);
        for row in &table.rows {
            match row.cells[0] {
                CellValue::Int(year) => assert!((2014..=2016).contains(&year)),
                _ => panic!("non-integer year survived the filter"),
            }
        }
    }

    #[test]
    fn test_int_range_excludes_null_and_text() {
        let mut table = sample_table();
        table.add_row(vec![CellValue::from("2015"), CellValue::from("Peru")], 7);
        filter_int_range(&mut table, "Year", 2014..=2016).unwrap();

        // The null row and the text "2015" row are both gone
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_uppercase_then_membership() {
        let mut table = sample_table();
        uppercase_column(&mut table, "Country").unwrap();
        filter_membership(&mut table, "Country", &["CHILE", "PERU", "USA"]).unwrap();

        let countries: Vec<_> = table
            .rows
            .iter()
            .map(|r| r.cells[1].display().into_owned())
            .collect();
        assert_eq!(countries, vec!["CHILE", "CHILE", "PERU", "USA"]);
    }

    #[test]
    fn test_membership_excludes_null() {
        let columns = vec![Column::new("Country", 0)];
        let mut table = Table::new(columns);
        table.add_row(vec![CellValue::Null], 2);
        table.add_row(vec![CellValue::from("CHILE")], 3);

        filter_membership(&mut table, "Country", &["CHILE"]).unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_missing_column() {
        let mut table = sample_table();
        let err = filter_int_range(&mut table, "Mo", 1..=12).unwrap_err();
        assert!(matches!(err, PrepError::ColumnNotFound(_)));
    }
}
