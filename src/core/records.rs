//! Sheet rows → JSON records

use crate::core::dates::format_date;
use crate::error::ConvertResult;
use crate::types::{Cell, Record, Row};
use serde_json::{Number, Value};

/// Largest integer an f64 holds exactly (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Convert rows into records, one per row, in row order.
///
/// Keys are exactly the row's headers. Date cells become `DD/MM/YYYY`
/// strings, every other value is copied as is (`0` and `""` included).
/// Blank rows are kept so record indexes follow the sheet's rows.
pub fn to_records(rows: &[Row]) -> ConvertResult<Vec<Record>> {
    rows.iter().map(row_to_record).collect()
}

/// Convert a single row into a record
pub fn row_to_record(row: &Row) -> ConvertResult<Record> {
    let mut record = Record::new();
    for (header, cell) in row.iter() {
        record.insert(header.to_string(), cell_to_json(cell)?);
    }
    Ok(record)
}

/// JSON value for one cell
pub fn cell_to_json(cell: &Cell) -> ConvertResult<Value> {
    let value = match cell {
        Cell::Date(_) => Value::String(format_date(cell)?),
        Cell::Text(s) => Value::String(s.clone()),
        Cell::Number(n) => number_to_json(*n),
        Cell::Boolean(b) => Value::Bool(*b),
    };
    Ok(value)
}

/// Whole numbers are written as JSON integers so `1` stays `1`
fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Value::from(n as i64);
    }
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}
