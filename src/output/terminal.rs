//! Colored terminal report

use std::io::Write;

use anyhow::Result;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::jobs::RunSummary;

/// Terminal run report with colors
pub struct TerminalReport {
    color_choice: ColorChoice,
}

impl TerminalReport {
    pub fn new() -> Self {
        Self {
            color_choice: ColorChoice::Auto,
        }
    }

    pub fn with_color_choice(color_choice: ColorChoice) -> Self {
        Self { color_choice }
    }

    /// Render the summary to stdout
    pub fn render(&self, summary: &RunSummary) -> Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);

        writeln!(stdout, " seisprep: {}", summary.job)?;
        writeln!(
            stdout,
            "   {} → {}",
            summary.input.display(),
            summary.output.display()
        )?;
        writeln!(
            stdout,
            "   {} rows read, {} rows written, {} columns",
            summary.rows_read, summary.rows_written, summary.columns_written
        )?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(stdout, " Processed and saved")?;
        stdout.reset()?;
        writeln!(stdout, " as '{}'", summary.output.display())?;
        writeln!(stdout)?;
        Ok(())
    }
}

impl Default for TerminalReport {
    fn default() -> Self {
        Self::new()
    }
}
