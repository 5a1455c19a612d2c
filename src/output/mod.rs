//! Output layer: CSV serialization and run reports

mod csv;
mod json;
mod terminal;

use anyhow::Result;

pub use self::csv::write_table;
pub use json::JsonReport;
pub use terminal::TerminalReport;

use crate::config::ReportFormat;
use crate::jobs::RunSummary;

/// Render a run summary to stdout
pub fn render_to_stdout(summary: &RunSummary, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Terminal => TerminalReport::new().render(summary),
        ReportFormat::Json => JsonReport::new().render(summary, &mut std::io::stdout()),
    }
}
