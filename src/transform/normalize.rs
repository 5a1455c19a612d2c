//! Placeholder-token scrubbing

use std::borrow::Cow;

use crate::model::{CellValue, Table};

/// What scrubbed tokens are replaced with
const BLANK: &str = " ";

/// Replace every occurrence of `token` in column headers and string cell
/// values with a blank. A field may contain the token more than once.
pub fn scrub_placeholder(table: &mut Table, token: &str) {
    if token.is_empty() {
        return;
    }

    for column in &mut table.columns {
        if column.name.contains(token) {
            column.name = column.name.replace(token, BLANK);
        }
    }

    for row in &mut table.rows {
        for cell in &mut row.cells {
            if let CellValue::String(s) = cell {
                if s.contains(token) {
                    let scrubbed = s.replace(token, BLANK);
                    *s = Cow::Owned(scrubbed);
                }
            }
        }
    }
}
