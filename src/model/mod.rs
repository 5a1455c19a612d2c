//! Data model for tabular data representation

mod schema;
mod table;

pub use schema::{CellType, Column, Schema};
pub use table::{CellValue, Row, Table};
