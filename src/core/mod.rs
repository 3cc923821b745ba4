//! Conversion engine: date formatting, sheet → records, sheet selection

pub mod dates;
pub mod records;
pub mod selector;

pub use dates::format_date;
pub use records::{cell_to_json, to_records};
pub use selector::{select_sheets, EmptySelectionPolicy};
