//! seisprep - batch preparation jobs for seismic and tsunami event datasets

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use seisprep::config::{
    JobConfig, ReportFormat, AFFECTED_TSUNAMI_FILE, DEFAULT_DATA_DIR, FILTERED_TSUNAMI_FILE,
    RAW_SEISMIC_FILE, RAW_TSUNAMI_FILE, SORTED_SEISMIC_FILE,
};
use seisprep::jobs::{
    self, RunSummary,
};
use seisprep::output::render_to_stdout;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliReportFormat {
    Terminal,
    Json,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(f: CliReportFormat) -> Self {
        match f {
            CliReportFormat::Terminal => ReportFormat::Terminal,
            CliReportFormat::Json => ReportFormat::Json,
        }
    }
}

/// Batch preparation jobs for seismic and tsunami event CSV datasets
#[derive(Parser, Debug)]
#[command(name = "seisprep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory the event datasets live in
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Run summary format
    #[arg(short, long, value_enum, default_value = "terminal")]
    report: CliReportFormat,

    #[command(subcommand)]
    command: Command,
}

/// Per-job path overrides
#[derive(Args, Debug, Default)]
struct JobPaths {
    /// Input CSV (defaults to the standard artifact in the data directory)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output CSV (defaults to the standard artifact in the data directory)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl JobPaths {
    fn config(&self, data_dir: &Path, default_input: &str, default_output: &str) -> JobConfig {
        JobConfig::new(
            self.input
                .clone()
                .unwrap_or_else(|| data_dir.join(default_input)),
            self.output
                .clone()
                .unwrap_or_else(|| data_dir.join(default_output)),
        )
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project the raw tsunami export down to the columns of interest
    SelectTsunamiColumns(JobPaths),

    /// Column selection plus integer day-of-month
    PrepareTsunamiDays(JobPaths),

    /// Keep 2014-2016 tsunamis that struck one of the affected countries
    AffectedCountries(JobPaths),

    /// Keep the five strongest quakes, reordered chronologically
    StrongestQuakes(JobPaths),

    /// Run every job in order against the data directory
    All,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format: ReportFormat = cli.report.into();
    let data_dir = &cli.data_dir;

    let runs: Vec<RunSummary> = match &cli.command {
        Command::SelectTsunamiColumns(paths) => {
            vec![select_tsunami_columns(paths, data_dir)?]
        }
        Command::PrepareTsunamiDays(paths) => vec![prepare_tsunami_days(paths, data_dir)?],
        Command::AffectedCountries(paths) => vec![affected_countries(paths, data_dir)?],
        Command::StrongestQuakes(paths) => vec![strongest_quakes(paths, data_dir)?],
        Command::All => {
            let defaults = JobPaths::default();
            vec![
                select_tsunami_columns(&defaults, data_dir)?,
                prepare_tsunami_days(&defaults, data_dir)?,
                affected_countries(&defaults, data_dir)?,
                strongest_quakes(&defaults, data_dir)?,
            ]
        }
    };

    for summary in &runs {
        render_to_stdout(summary, format)?;
    }
    Ok(())
}

fn select_tsunami_columns(paths: &JobPaths, data_dir: &Path) -> Result<RunSummary> {
    jobs::select_tsunami_columns(&paths.config(data_dir, RAW_TSUNAMI_FILE, FILTERED_TSUNAMI_FILE))
        .context("select-tsunami-columns failed")
}

fn prepare_tsunami_days(paths: &JobPaths, data_dir: &Path) -> Result<RunSummary> {
    jobs::prepare_tsunami_days(&paths.config(data_dir, RAW_TSUNAMI_FILE, FILTERED_TSUNAMI_FILE))
        .context("prepare-tsunami-days failed")
}

fn affected_countries(paths: &JobPaths, data_dir: &Path) -> Result<RunSummary> {
    jobs::filter_affected_countries(&paths.config(
        data_dir,
        FILTERED_TSUNAMI_FILE,
        AFFECTED_TSUNAMI_FILE,
    ))
    .context("affected-countries failed")
}

fn strongest_quakes(paths: &JobPaths, data_dir: &Path) -> Result<RunSummary> {
    jobs::rank_strongest_quakes(&paths.config(data_dir, RAW_SEISMIC_FILE, SORTED_SEISMIC_FILE))
        .context("strongest-quakes failed")
}
