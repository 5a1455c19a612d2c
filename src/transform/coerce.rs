//! Column type coercion

use crate::error::PrepError;
use crate::model::{CellType, CellValue, Table};

/// Convert the float values in `column` to integers, truncating any
/// fractional part. Nulls pass through. Values that are not numeric are
/// left untouched; no error is raised for them.
pub fn float_to_int(table: &mut Table, column: &str) -> Result<(), PrepError> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| PrepError::ColumnNotFound(column.to_string()))?;

    let mut observed = CellType::Null;
    for row in &mut table.rows {
        if let Some(cell) = row.cells.get_mut(idx) {
            if let CellValue::Float(f) = *cell {
                *cell = CellValue::Int(f as i64);
            }
            observed = observed.widen(match cell {
                CellValue::Null => CellType::Null,
                CellValue::Int(_) => CellType::Int,
                CellValue::Float(_) => CellType::Float,
                CellValue::String(_) => CellType::String,
            });
        }
    }

    table.columns[idx].inferred_type = observed;
    Ok(())
}
