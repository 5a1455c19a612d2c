//! CSV file loader

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::PrepError;
use crate::model::{CellType, CellValue, Column, Schema, Table};

/// Read a CSV file into a Table.
///
/// The first line is the header row. Columns declared in `schema` parse
/// strictly to the declared type; undeclared columns infer a type per value.
pub fn read_table(path: &Path, schema: &Schema) -> Result<Table, PrepError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PrepError::FileNotFound(path.to_path_buf()),
        _ => PrepError::parse(path, e),
    })?;
    let reader = BufReader::new(file);
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // Read headers
    let headers = csv_reader
        .headers()
        .map_err(|e| PrepError::parse(path, e))?
        .clone();

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for name in headers.iter() {
        if !seen.insert(name) {
            return Err(PrepError::parse(path, format!("duplicate column: {}", name)));
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name.to_string(), i))
        .collect();

    let declared: Vec<Option<CellType>> = columns
        .iter()
        .map(|c| schema.declared(&c.name))
        .collect();

    let mut table = Table::new(columns);

    // Read rows
    for (line_num, result) in csv_reader.records().enumerate() {
        let record = result
            .map_err(|e| PrepError::parse(path, format!("row {}: {}", line_num + 2, e)))?;

        let cells: Vec<CellValue> = record
            .iter()
            .enumerate()
            .map(|(i, s)| parse_cell(s, declared.get(i).copied().flatten()))
            .collect();

        // Pad with nulls if row has fewer columns
        let cells = if cells.len() < table.column_count() {
            let mut padded = cells;
            padded.resize(table.column_count(), CellValue::Null);
            padded
        } else {
            cells
        };

        table.add_row(cells, line_num + 2); // +2 for 1-indexing and header
    }

    infer_column_types(&mut table);

    Ok(table)
}

/// Parse a field, honoring a declared column type when there is one
fn parse_cell(s: &str, declared: Option<CellType>) -> CellValue {
    let trimmed = s.trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") || trimmed == "NA" {
        return CellValue::Null;
    }

    match declared {
        Some(CellType::Int) => parse_int(trimmed)
            .unwrap_or_else(|| CellValue::String(Cow::Owned(trimmed.to_string()))),
        Some(CellType::Float) => parse_float(trimmed)
            .unwrap_or_else(|| CellValue::String(Cow::Owned(trimmed.to_string()))),
        Some(CellType::String) => CellValue::String(Cow::Owned(trimmed.to_string())),
        _ => infer_cell_value(trimmed),
    }
}

/// Parse a trimmed, non-empty string with type inference
fn infer_cell_value(trimmed: &str) -> CellValue {
    if let Some(v) = parse_int(trimmed) {
        return v;
    }
    if let Some(v) = parse_float(trimmed) {
        return v;
    }
    CellValue::String(Cow::Owned(trimmed.to_string()))
}

fn parse_int(s: &str) -> Option<CellValue> {
    s.parse::<i64>().ok().map(CellValue::Int)
}

fn parse_float(s: &str) -> Option<CellValue> {
    // Rust accepts "nan"/"inf" spellings; in the raw exports those are
    // placeholder text, so only finite values count as numbers here.
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(CellValue::Float(f)),
        _ => None,
    }
}

/// Record the observed type of each column
fn infer_column_types(table: &mut Table) {
    for col_idx in 0..table.column_count() {
        let mut inferred = CellType::Null;

        for row in &table.rows {
            if let Some(cell) = row.cells.get(col_idx) {
                let cell_type = match cell {
                    CellValue::Null => CellType::Null,
                    CellValue::Int(_) => CellType::Int,
                    CellValue::Float(_) => CellType::Float,
                    CellValue::String(_) => CellType::String,
                };

                inferred = inferred.widen(cell_type);
            }
        }

        if let Some(col) = table.columns.get_mut(col_idx) {
            col.inferred_type = inferred;
        }
    }
}
