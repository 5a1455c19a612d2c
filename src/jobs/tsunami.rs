//! Tsunami dataset jobs

use std::ops::RangeInclusive;

use crate::config::JobConfig;
use crate::error::PrepError;
use crate::model::{CellType, Schema};
use crate::output::write_table;
use crate::parser::read_table;
use crate::transform::{
    drop_empty_columns, drop_null_rows, filter_int_range, filter_membership, float_to_int,
    scrub_placeholder, select_columns, uppercase_column,
};

use super::RunSummary;

/// Marker text the raw exports use for missing values
pub const PLACEHOLDER_TOKEN: &str = "Nan";

/// Columns kept by the column-selection job
pub const SELECTED_COLUMNS: &[&str] = &[
    "Sr.no",
    "Year",
    "Mo",
    "Earthquake Magnitude",
    "Country",
    "Location Name",
    "Latitude",
    "Longitude",
    "Maximum Water Height (m)",
];

/// Columns kept by the day-preparation job
pub const SELECTED_COLUMNS_WITH_DAY: &[&str] = &[
    "Sr.no",
    "Year",
    "Mo",
    "Dy",
    "Earthquake Magnitude",
    "Country",
    "Location Name",
    "Latitude",
    "Longitude",
    "Maximum Water Height (m)",
];

pub const YEAR_COLUMN: &str = "Year";
pub const DAY_COLUMN: &str = "Dy";
pub const COUNTRY_COLUMN: &str = "Country";

/// Years of interest for the affected-country subset
pub const AFFECTED_YEARS: RangeInclusive<i64> = 2014..=2016;

/// Countries a large Chilean earthquake could send a tsunami towards
pub const AFFECTED_COUNTRIES: &[&str] = &[
    "CHILE",
    "PERU",
    "ECUADOR",
    "COLOMBIA",
    "PANAMA",
    "COSTA RICA",
    "MEXICO",
    "USA",
    "JAPAN",
    "PHILIPPINES",
    "NEW ZEALAND",
    "AUSTRALIA",
    "INDONESIA",
    "RUSSIA",
    "CANADA",
    "FIJI",
    "SAMOA",
    "TONGA",
    "HAWAII",
    "PAPUA NEW GUINEA",
    "SOLOMON ISLANDS",
];

/// Project the raw tsunami export down to the columns of interest
pub fn select_tsunami_columns(config: &JobConfig) -> Result<RunSummary, PrepError> {
    run_projection(config, "select-tsunami-columns", SELECTED_COLUMNS, false)
}

/// Like [`select_tsunami_columns`], but also keeps the day of month and
/// stores it as an integer
pub fn prepare_tsunami_days(config: &JobConfig) -> Result<RunSummary, PrepError> {
    run_projection(
        config,
        "prepare-tsunami-days",
        SELECTED_COLUMNS_WITH_DAY,
        true,
    )
}

/// Keep tsunamis from 2014-2016 that struck one of the affected countries
pub fn filter_affected_countries(config: &JobConfig) -> Result<RunSummary, PrepError> {
    let mut table = read_table(&config.input, &filtered_schema())?;
    let rows_read = table.row_count();

    drop_null_rows(&mut table, YEAR_COLUMN)?;
    float_to_int(&mut table, YEAR_COLUMN)?;
    filter_int_range(&mut table, YEAR_COLUMN, AFFECTED_YEARS)?;
    uppercase_column(&mut table, COUNTRY_COLUMN)?;
    filter_membership(&mut table, COUNTRY_COLUMN, AFFECTED_COUNTRIES)?;
    write_table(&table, &config.output)?;

    Ok(RunSummary {
        job: "affected-countries",
        input: config.input.clone(),
        output: config.output.clone(),
        rows_read,
        rows_written: table.row_count(),
        columns_written: table.column_count(),
    })
}

fn run_projection(
    config: &JobConfig,
    job: &'static str,
    columns: &[&str],
    keep_day: bool,
) -> Result<RunSummary, PrepError> {
    let mut table = read_table(&config.input, &raw_schema())?;
    let rows_read = table.row_count();

    scrub_placeholder(&mut table, PLACEHOLDER_TOKEN);
    let table = select_columns(&table, columns)?;
    let mut table = drop_empty_columns(table);
    if keep_day {
        float_to_int(&mut table, DAY_COLUMN)?;
    }
    write_table(&table, &config.output)?;

    Ok(RunSummary {
        job,
        input: config.input.clone(),
        output: config.output.clone(),
        rows_read,
        rows_written: table.row_count(),
        columns_written: table.column_count(),
    })
}

fn raw_schema() -> Schema {
    Schema::new()
        .column("Sr.no", CellType::Int)
        .column(YEAR_COLUMN, CellType::Int)
        .column("Mo", CellType::Int)
        .column(DAY_COLUMN, CellType::Float)
        .column("Earthquake Magnitude", CellType::Float)
        .column(COUNTRY_COLUMN, CellType::String)
        .column("Location Name", CellType::String)
        .column("Latitude", CellType::Float)
        .column("Longitude", CellType::Float)
        .column("Maximum Water Height (m)", CellType::Float)
}

fn filtered_schema() -> Schema {
    // Year arrives float-formatted when the upstream tool wrote real NaNs
    Schema::new()
        .column(YEAR_COLUMN, CellType::Float)
        .column(COUNTRY_COLUMN, CellType::String)
}
