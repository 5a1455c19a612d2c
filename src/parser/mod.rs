//! Parser layer for reading delimited event datasets

mod csv;

pub use self::csv::read_table;
