//! Seismic dataset job

use crate::config::JobConfig;
use crate::error::PrepError;
use crate::model::{CellType, Schema};
use crate::output::write_table;
use crate::parser::read_table;
use crate::transform::{head, sort_by_column, SortDirection};

use super::RunSummary;

pub const MAGNITUDE_COLUMN: &str = "Magnitude";
pub const DATE_COLUMN: &str = "Date";

/// How many of the strongest events to keep
pub const STRONGEST_COUNT: usize = 5;

/// Keep the strongest quakes, reordered chronologically
pub fn rank_strongest_quakes(config: &JobConfig) -> Result<RunSummary, PrepError> {
    let mut table = read_table(&config.input, &seismic_schema())?;
    let rows_read = table.row_count();

    sort_by_column(&mut table, MAGNITUDE_COLUMN, SortDirection::Descending)?;
    head(&mut table, STRONGEST_COUNT);
    sort_by_column(&mut table, DATE_COLUMN, SortDirection::Ascending)?;
    write_table(&table, &config.output)?;

    Ok(RunSummary {
        job: "strongest-quakes",
        input: config.input.clone(),
        output: config.output.clone(),
        rows_read,
        rows_written: table.row_count(),
        columns_written: table.column_count(),
    })
}

fn seismic_schema() -> Schema {
    Schema::new()
        .column(MAGNITUDE_COLUMN, CellType::Float)
        .column(DATE_COLUMN, CellType::String)
}
