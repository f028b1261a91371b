// src/import/mod.rs

//! Source files → JSON row hand-off consumed by the normalizer.

mod csv_rows;
mod workbook;

pub use csv_rows::{read_csv, read_csv_file};
pub use workbook::WorkbookReader;

use crate::core::normalizer::RawRow;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Xlsx,
    Csv,
    Json,
}

impl InputFormat {
    /// Riconosce il formato dall'estensione del file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" => Ok(InputFormat::Xlsx),
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            _ => Err(AppError::UnsupportedInput(path.display().to_string())),
        }
    }
}

/// Read `path` and return its rows serialized as a JSON array of objects.
///
/// A `.json` input is passed through untouched; validating it is the
/// normalizer's job.
pub fn read_rows_json(path: &Path) -> AppResult<String> {
    match InputFormat::from_path(path)? {
        InputFormat::Json => Ok(fs::read_to_string(path)?),
        InputFormat::Xlsx => rows_to_json(&WorkbookReader::read_file(path)?),
        InputFormat::Csv => rows_to_json(&read_csv_file(path)?),
    }
}

pub fn rows_to_json(rows: &[RawRow]) -> AppResult<String> {
    serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))
}
