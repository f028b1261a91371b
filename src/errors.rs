//! Unified application error type.
//! All modules (core, import, export, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use crate::core::decoder::DecodeError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("Import failed, input is not valid row data: {0}")]
    Parse(String),

    #[error("Invalid spreadsheet date: {0}")]
    Decode(#[from] DecodeError),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported input file: {0}")]
    UnsupportedInput(String),

    // ---------------------------
    // Filter errors
    // ---------------------------
    #[error("Invalid month: {0} (use 1-12 or an English month name)")]
    InvalidMonth(String),

    #[error("Invalid cutoff: {0} (use 1st or 2nd)")]
    InvalidCutoff(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(e: zip::result::ZipError) -> Self {
        AppError::Workbook(e.to_string())
    }
}

impl From<quick_xml::Error> for AppError {
    fn from(e: quick_xml::Error) -> Self {
        AppError::Workbook(format!("XML error: {e}"))
    }
}

pub type AppResult<T> = Result<T, AppError>;
