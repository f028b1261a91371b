// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{RecordRow, get_headers, rows_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfTable;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF della tabella visualizzata.
pub(crate) fn export_pdf(rows: &[RecordRow], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let cells = rows_to_table(rows);

    PdfTable::new(title, &headers, &cells)
        .save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
