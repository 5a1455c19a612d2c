//! JSON run report

use std::io::Write;

use anyhow::Result;

use crate::jobs::RunSummary;

/// JSON run report
pub struct JsonReport {
    pretty: bool,
}

impl JsonReport {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Render the summary to a writer
    pub fn render(&self, summary: &RunSummary, writer: &mut dyn Write) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, summary)?;
        } else {
            serde_json::to_writer(&mut *writer, summary)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}
