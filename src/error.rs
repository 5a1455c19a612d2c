//! Error types shared by the preparation jobs

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by loading, transforming, and writing tables
#[derive(Debug, Error)]
pub enum PrepError {
    /// The input path does not exist
    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),

    /// The input exists but is not well-formed delimited text
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A named column is absent from the loaded table
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// The output path could not be written
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl PrepError {
    /// Build a parse error from any displayable cause
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        PrepError::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
