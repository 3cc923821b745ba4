//! Workbook access
//!
//! Decoding is delegated to calamine; this module turns a decoded workbook
//! into typed sheets and rows.

mod importer;

pub use importer::{convert_cell, ExcelImporter};

use crate::error::ConvertResult;
use crate::types::Workbook;
use std::path::Path;

/// Load a workbook from disk
pub fn load_workbook<P: AsRef<Path>>(path: P) -> ConvertResult<Workbook> {
    ExcelImporter::new(path).import()
}
