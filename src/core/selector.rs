//! Which sheets get exported

use crate::error::{ConvertError, ConvertResult};
use std::collections::HashSet;
use tracing::warn;

/// What to do when the requested sheet names match nothing in the workbook
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptySelectionPolicy {
    /// Write nothing and succeed
    #[default]
    Allow,
    /// Fail with [`ConvertError::NothingToExport`]
    Reject,
}

impl EmptySelectionPolicy {
    pub fn check(self, selected: &[String], requested: &[String]) -> ConvertResult<()> {
        if self == EmptySelectionPolicy::Reject && selected.is_empty() {
            return Err(ConvertError::NothingToExport {
                requested: requested.to_vec(),
            });
        }
        Ok(())
    }
}

/// Resolve the sheets to export.
///
/// An empty `requested` list selects every sheet in workbook order. Otherwise
/// the result follows `requested` order, keeping only names present in the
/// workbook. Unknown names are skipped, repeated names are kept once.
pub fn select_sheets(all: &[String], requested: &[String]) -> Vec<String> {
    if requested.is_empty() {
        return all.to_vec();
    }

    let mut seen = HashSet::new();
    let mut selected = Vec::new();
    for name in requested {
        if !all.contains(name) {
            warn!(sheet = %name, "requested sheet not found in workbook, skipping");
            continue;
        }
        if seen.insert(name.as_str()) {
            selected.push(name.clone());
        }
    }
    selected
}
