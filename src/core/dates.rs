//! Date cells → DD/MM/YYYY

use crate::error::{ConvertError, ConvertResult};
use crate::types::Cell;
use chrono::NaiveDateTime;

/// Output format for every date cell. Not locale dependent.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Format a date cell as `DD/MM/YYYY`.
///
/// Uses the calendar date the spreadsheet displays; the time portion is
/// dropped and no timezone is applied. Any other cell kind is rejected with
/// [`ConvertError::InvalidCellType`].
pub fn format_date(cell: &Cell) -> ConvertResult<String> {
    match cell {
        Cell::Date(dt) => Ok(format_datetime(dt)),
        Cell::Text(_) | Cell::Number(_) | Cell::Boolean(_) => Err(ConvertError::InvalidCellType {
            kind: cell.kind(),
        }),
    }
}

pub(crate) fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.date().format(DATE_FORMAT).to_string()
}
