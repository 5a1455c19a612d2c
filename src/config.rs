//! Configuration handling for seisprep

use std::path::PathBuf;

/// Report format for run summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(ReportFormat::Terminal),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

/// File paths for one job run.
///
/// The shipped defaults write each result as a new artifact next to its
/// input; no job overwrites its own input file.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Path of the CSV to load
    pub input: PathBuf,
    /// Path the result is written to
    pub output: PathBuf,
}

impl JobConfig {
    /// Create a config with input and output paths
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Directory the event datasets live in
pub const DEFAULT_DATA_DIR: &str = "Datos";

/// Raw tsunami export as downloaded
pub const RAW_TSUNAMI_FILE: &str = "tsunamis-2023-09-11_22-13-51_ 0530 (2).csv";

/// Column-filtered tsunami table
pub const FILTERED_TSUNAMI_FILE: &str = "tsunamis_filtrados.csv";

/// 2014-2016 subset for the affected countries
pub const AFFECTED_TSUNAMI_FILE: &str = "tsunamis_filtrados_2014_2016_afectados.csv";

/// Raw seismic event table
pub const RAW_SEISMIC_FILE: &str = "seismic_data.csv";

/// Strongest quakes in chronological order
pub const SORTED_SEISMIC_FILE: &str = "seismic_data_ordenado.csv";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("terminal".parse::<ReportFormat>(), Ok(ReportFormat::Terminal));
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
