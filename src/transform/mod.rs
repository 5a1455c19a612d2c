//! Table transformations composed by the preparation jobs

mod coerce;
mod filter;
mod normalize;
mod project;
mod sort;

pub use coerce::float_to_int;
pub use filter::{drop_null_rows, filter_int_range, filter_membership, uppercase_column};
pub use normalize::scrub_placeholder;
pub use project::{drop_empty_columns, select_columns};
pub use sort::{head, sort_by_column, SortDirection};
