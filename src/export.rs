//! Workbook → one JSON file per sheet

use crate::core::{select_sheets, to_records, EmptySelectionPolicy};
use crate::error::{ConvertError, ConvertResult, MISSING_SHEETS_DIR, MISSING_SOURCE};
use crate::excel::load_workbook;
use crate::types::{SheetExport, Workbook};
use crate::writer::{ensure_dir, write_json};
use std::path::{Path, PathBuf};
use tracing::info;

/// Settings for one conversion run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportConfig {
    /// Workbook to read
    pub source_xlsx: PathBuf,
    /// Directory receiving `<sheet>.json` files (created if missing)
    pub sheets_dir: PathBuf,
    /// Sheets to export; empty means every sheet
    pub sheet_names: Vec<String>,
    /// Behaviour when `sheet_names` matches no sheet
    pub empty_selection: EmptySelectionPolicy,
}

impl ExportConfig {
    pub fn new(source_xlsx: impl Into<PathBuf>, sheets_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_xlsx: source_xlsx.into(),
            sheets_dir: sheets_dir.into(),
            ..Self::default()
        }
    }

    /// Build from the caller's options: source, output dir and the positional
    /// sheet filters.
    pub fn from_invocation<S: Into<String>>(
        source_xlsx: &str,
        sheets_dir: &str,
        positional: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(source_xlsx, sheets_dir).with_sheets(positional)
    }

    pub fn with_sheets<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.sheet_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_empty_selection(mut self, policy: EmptySelectionPolicy) -> Self {
        self.empty_selection = policy;
        self
    }

    /// Check required settings. Runs before any file is touched.
    pub fn validate(&self) -> ConvertResult<()> {
        if self.source_xlsx.as_os_str().is_empty() {
            return Err(ConvertError::MissingArgument(MISSING_SOURCE));
        }
        if self.sheets_dir.as_os_str().is_empty() {
            return Err(ConvertError::MissingArgument(MISSING_SHEETS_DIR));
        }
        Ok(())
    }
}

/// One written file
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedSheet {
    pub sheet: String,
    pub path: PathBuf,
    pub records: usize,
}

/// Outcome of a successful run, in write order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportSummary {
    pub sheets: Vec<ExportedSheet>,
}

impl ExportSummary {
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn total_records(&self) -> usize {
        self.sheets.iter().map(|s| s.records).sum()
    }
}

/// Path of the JSON file for `sheet` inside `sheets_dir`
pub fn sheet_path(sheets_dir: &Path, sheet: &str) -> PathBuf {
    sheets_dir.join(format!("{}.json", sheet))
}

/// Resolve the export set: selected sheets with their records, in selection order
pub fn build_export_set(
    workbook: &Workbook,
    requested: &[String],
    policy: EmptySelectionPolicy,
) -> ConvertResult<Vec<SheetExport>> {
    let selected = select_sheets(&workbook.sheet_names(), requested);
    policy.check(&selected, requested)?;

    selected
        .into_iter()
        .map(|name| {
            let records = to_records(workbook.rows_of(&name)?)?;
            Ok(SheetExport { name, records })
        })
        .collect()
}

/// Convert the configured workbook and write one JSON array per selected sheet.
///
/// Stops at the first error; files written before it stay on disk.
pub fn run(config: &ExportConfig) -> ConvertResult<ExportSummary> {
    config.validate()?;

    info!(source = %config.source_xlsx.display(), "loading workbook");
    let workbook = load_workbook(&config.source_xlsx)?;

    let export_set = build_export_set(&workbook, &config.sheet_names, config.empty_selection)?;
    drop(workbook);

    ensure_dir(&config.sheets_dir)?;

    let mut summary = ExportSummary::default();
    for export in export_set {
        let path = sheet_path(&config.sheets_dir, &export.name);
        write_json(&path, &export.records)?;
        info!(
            sheet = %export.name,
            records = export.records.len(),
            path = %path.display(),
            "sheet exported"
        );
        summary.sheets.push(ExportedSheet {
            sheet: export.name,
            path,
            records: export.records.len(),
        });
    }

    Ok(summary)
}
