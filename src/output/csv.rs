//! CSV file writer

use std::path::Path;

use crate::error::PrepError;
use crate::model::Table;

/// Serialize a table as comma-delimited text with a header row, overwriting
/// any existing file at `path`.
pub fn write_table(table: &Table, path: &Path) -> Result<(), PrepError> {
    let write_err = |source: csv::Error| PrepError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;

    writer
        .write_record(table.columns.iter().map(|c| c.name.as_str()))
        .map_err(write_err)?;

    for row in &table.rows {
        writer
            .write_record(row.cells.iter().map(|c| c.display().into_owned()))
            .map_err(write_err)?;
    }

    writer.flush().map_err(|e| write_err(csv::Error::from(e)))?;
    Ok(())
}
