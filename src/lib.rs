//! xlsx2json - spreadsheet workbook to JSON files
//!
//! Converts each sheet of a workbook into a JSON array of records, one file
//! per sheet, using the sheet's header row as record keys.
//!
//! # Features
//!
//! - One `<sheet>.json` per sheet, `[]` for sheets without data rows
//! - Date cells written as `DD/MM/YYYY` from the displayed calendar date
//! - Optional sheet allow-list; unknown names are skipped
//! - xlsx, xlsm, xlsb, xls and ods input (via calamine)
//!
//! # Example
//!
//! ```no_run
//! use xlsx2json::export::{run, ExportConfig};
//!
//! let config = ExportConfig::new("definition.xlsx", "sheets").with_sheets(["Jurisdiction"]);
//! let summary = run(&config)?;
//!
//! println!("Sheets written: {}", summary.len());
//! # Ok::<(), xlsx2json::error::ConvertError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod export;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use export::{run, ExportConfig, ExportSummary};
pub use types::{Cell, Record, Row, Sheet, Workbook};
