//! Excel importer implementation - workbook file → in-memory [`Workbook`]

use crate::core::dates::format_datetime;
use crate::error::{ConvertError, ConvertResult};
use crate::types::{Cell, Row, Sheet, Workbook};
use calamine::{open_workbook_auto, Data, Range, Reader, SheetType};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Header used for columns whose header cell is empty
const EMPTY_HEADER: &str = "__EMPTY";

/// Reads a workbook (.xlsx, .xlsm, .xlsb, .xls, .ods) into a [`Workbook`]
pub struct ExcelImporter {
    path: PathBuf,
}

impl ExcelImporter {
    /// Create a new Excel importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load every worksheet of the file. The source file is only read.
    pub fn import(&self) -> ConvertResult<Workbook> {
        if !self.path.is_file() {
            return Err(ConvertError::SourceNotFound(self.path.clone()));
        }

        let mut source = open_workbook_auto(&self.path).map_err(|e| ConvertError::SourceFormat {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        // Chart, dialog and macro sheets carry no cell grid
        let sheet_names: Vec<String> = source
            .sheets_metadata()
            .iter()
            .filter(|meta| matches!(meta.typ, SheetType::WorkSheet))
            .map(|meta| meta.name.clone())
            .collect();

        let mut workbook = Workbook::new();
        for sheet_name in sheet_names {
            let range = source
                .worksheet_range(&sheet_name)
                .map_err(|e| ConvertError::SourceFormat {
                    path: self.path.clone(),
                    message: format!("sheet '{}': {}", sheet_name, e),
                })?;

            let sheet = self.read_sheet(&sheet_name, &range);
            debug!(
                sheet = %sheet.name,
                columns = sheet.headers.len(),
                rows = sheet.row_count(),
                "loaded sheet"
            );
            workbook.add_sheet(sheet);
        }

        Ok(workbook)
    }

    /// The first row of the used range is the header row, every row below it
    /// (blank ones included) is a data row.
    fn read_sheet(&self, sheet_name: &str, range: &Range<Data>) -> Sheet {
        let mut sheet = Sheet::new(sheet_name);
        let mut rows = range.rows();

        let Some(header_row) = rows.next() else {
            return sheet; // Entirely empty sheet
        };
        sheet.headers = unique_headers(header_row.iter().map(|d| header_text(&convert_cell(d))));

        for data_row in rows {
            let row: Row = sheet
                .headers
                .iter()
                .zip(data_row.iter())
                .map(|(header, data)| (header.clone(), convert_cell(data)))
                .collect();
            sheet.rows.push(row);
        }

        sheet
    }
}

/// Convert a calamine cell into a typed [`Cell`]
pub fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Boolean(*b),
        Data::DateTime(dt) if dt.is_duration() => Cell::Number(dt.as_f64()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(Cell::Date)
            .unwrap_or_else(|| Cell::Number(dt.as_f64())),
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(Cell::Date)
            .unwrap_or_else(|| Cell::Text(s.clone())),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
        Data::Empty => Cell::empty(),
    }
}

/// Read the literal calendar date of an ISO 8601 value. Any offset suffix is
/// ignored so the date is never shifted.
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok()?;
    let time = s
        .get(11..19)
        .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M:%S").ok())
        .unwrap_or(NaiveTime::MIN);
    Some(date.and_time(time))
}

/// Display text of a header cell
fn header_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => s.clone(),
        Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
        Cell::Number(n) => n.to_string(),
        Cell::Boolean(true) => "TRUE".to_string(),
        Cell::Boolean(false) => "FALSE".to_string(),
        Cell::Date(dt) => format_datetime(dt),
    }
}

/// Make header names usable as unique record keys.
///
/// Empty headers become `__EMPTY`, repeated names get `_1`, `_2`, ... suffixes
/// (the first occurrence keeps the bare name).
fn unique_headers<I: IntoIterator<Item = String>>(raw: I) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::new();

    for name in raw {
        let base = if name.is_empty() {
            EMPTY_HEADER.to_string()
        } else {
            name
        };

        if used.insert(base.clone()) {
            headers.push(base);
            continue;
        }

        let counter = counters.entry(base.clone()).or_insert(0);
        let candidate = loop {
            *counter += 1;
            let candidate = format!("{}_{}", base, counter);
            if !used.contains(&candidate) {
                break candidate;
            }
        };
        used.insert(candidate.clone());
        headers.push(candidate);
    }

    headers
}
