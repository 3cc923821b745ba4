use std::path::PathBuf;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

pub const MISSING_SOURCE: &str = "spreadsheet file argument (-i) is required";
pub const MISSING_SHEETS_DIR: &str = "sheets directory argument (-D) is required";

#[derive(Error, Debug)]
pub enum ConvertError {
    /// Required configuration is missing. The message is part of the
    /// caller-facing contract and is displayed verbatim.
    #[error("{0}")]
    MissingArgument(&'static str),

    #[error("Spreadsheet file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to read workbook {}: {message}", path.display())]
    SourceFormat { path: PathBuf, message: String },

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Expected a date cell, got {kind}")]
    InvalidCellType { kind: &'static str },

    #[error("None of the requested sheets exist in the workbook: {}", requested.join(", "))]
    NothingToExport { requested: Vec<String> },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ConvertError::Json {
            path: path.into(),
            source,
        }
    }
}
