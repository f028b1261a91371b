// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::RecordRow;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Export JSON pretty-printed (chiavi = intestazioni della tabella).
pub(crate) fn export_json(rows: &[RecordRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header incluso grazie a serde).
pub(crate) fn export_csv(rows: &[RecordRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
