use crate::error::{ConvertError, ConvertResult};
use chrono::NaiveDateTime;
use serde_json::{Map, Value};

/// A converted row: column header → JSON value, in header order.
pub type Record = Map<String, Value>;

//==============================================================================
// Cells
//==============================================================================

/// A typed cell value as read from the workbook
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text (empty cells read as empty text)
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Boolean(bool),
    /// Calendar date-time as displayed by the spreadsheet (no timezone)
    Date(NaiveDateTime),
}

impl Cell {
    pub fn empty() -> Self {
        Cell::Text(String::new())
    }

    /// Get the type name as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Cell::Text(_) => "text",
            Cell::Number(_) => "number",
            Cell::Boolean(_) => "boolean",
            Cell::Date(_) => "date",
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Text(s) if s.is_empty())
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Boolean(b)
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(dt: NaiveDateTime) -> Self {
        Cell::Date(dt)
    }
}

//==============================================================================
// Rows, sheets, workbook
//==============================================================================

/// One data row: (header, cell) pairs in header order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, Cell)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, header: impl Into<String>, cell: Cell) {
        self.cells.push((header.into(), cell));
    }

    pub fn get(&self, header: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, cell)| cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(h, c)| (h.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every cell is empty text
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, c)| c.is_blank())
    }
}

impl<H: Into<String>> FromIterator<(H, Cell)> for Row {
    fn from_iter<I: IntoIterator<Item = (H, Cell)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|(h, c)| (h.into(), c)).collect(),
        }
    }
}

/// A named worksheet with its header row and data rows
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A decoded workbook. Sheets keep the workbook's tab order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet. A sheet with an existing name replaces the old one in place.
    pub fn add_sheet(&mut self, sheet: Sheet) {
        match self.sheets.iter_mut().find(|s| s.name == sheet.name) {
            Some(existing) => *existing = sheet,
            None => self.sheets.push(sheet),
        }
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    pub fn sheet(&self, name: &str) -> ConvertResult<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ConvertError::SheetNotFound(name.to_string()))
    }

    pub fn rows_of(&self, name: &str) -> ConvertResult<&[Row]> {
        self.sheet(name).map(|s| s.rows.as_slice())
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

//==============================================================================
// Export set
//==============================================================================

/// Records of one sheet, ready to be written to `<name>.json`
#[derive(Debug, Clone, PartialEq)]
pub struct SheetExport {
    pub name: String,
    pub records: Vec<Record>,
}
