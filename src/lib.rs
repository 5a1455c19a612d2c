//! seisprep - batch preparation jobs for seismic and tsunami event datasets
//!
//! Each job loads one CSV file into an in-memory table, runs a linear
//! pipeline of transformations (placeholder scrubbing, column projection,
//! row filtering, type coercion, sorting), and writes the result to a new
//! CSV file.

pub mod config;
pub mod error;
pub mod jobs;
pub mod model;
pub mod output;
pub mod parser;
pub mod transform;

pub use config::JobConfig;
pub use error::PrepError;
pub use model::Table;
