//! The preparation jobs, each a single linear pipeline

mod seismic;
mod tsunami;

use std::path::PathBuf;

use serde::Serialize;

pub use seismic::{rank_strongest_quakes, DATE_COLUMN, MAGNITUDE_COLUMN, STRONGEST_COUNT};
pub use tsunami::{
    filter_affected_countries, prepare_tsunami_days, select_tsunami_columns, AFFECTED_COUNTRIES,
    AFFECTED_YEARS, PLACEHOLDER_TOKEN, SELECTED_COLUMNS, SELECTED_COLUMNS_WITH_DAY,
};

/// Outcome of one job run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Job name
    pub job: &'static str,
    /// File the job read
    pub input: PathBuf,
    /// File the job wrote
    pub output: PathBuf,
    /// Rows loaded from the input
    pub rows_read: usize,
    /// Rows serialized to the output
    pub rows_written: usize,
    /// Columns serialized to the output
    pub columns_written: usize,
}
