//! Column projection

use crate::error::PrepError;
use crate::model::{Column, Row, Table};

/// Restrict a table to the named columns, in the order requested.
///
/// Every requested name must exist in the table.
pub fn select_columns(table: &Table, names: &[&str]) -> Result<Table, PrepError> {
    let indices: Vec<usize> = names
        .iter()
        .map(|name| {
            table
                .column_index(name)
                .ok_or_else(|| PrepError::ColumnNotFound(name.to_string()))
        })
        .collect::<Result<_, _>>()?;

    Ok(rebuild(table, &indices))
}

/// Drop columns whose every value is empty across all rows.
///
/// A table with no rows keeps its columns; there is no data to judge by.
pub fn drop_empty_columns(table: Table) -> Table {
    if table.rows.is_empty() {
        return table;
    }

    let keep: Vec<usize> = (0..table.column_count())
        .filter(|&idx| {
            table
                .rows
                .iter()
                .any(|row| row.get(idx).is_some_and(|cell| !cell.is_empty()))
        })
        .collect();

    if keep.len() == table.column_count() {
        return table;
    }

    rebuild(&table, &keep)
}

/// Build a new table holding the given column indices of `table`
fn rebuild(table: &Table, indices: &[usize]) -> Table {
    let columns: Vec<Column> = indices
        .iter()
        .enumerate()
        .map(|(new_idx, &old_idx)| {
            let mut column = table.columns[old_idx].clone();
            column.index = new_idx;
            column
        })
        .collect();

    let mut projected = Table::new(columns);
    for row in &table.rows {
        let cells = indices
            .iter()
            .map(|&idx| row.cells[idx].clone())
            .collect();
        projected.rows.push(Row::new(cells, row.source_line));
    }
    projected
}
