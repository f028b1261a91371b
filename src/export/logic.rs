// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::resolve_output;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{Schedule, build_rows};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::filter::FilterState;
use crate::ui::messages::warning;
use crate::utils::date::month_name;
use crate::view::TimesheetView;
use std::path::Path;

const SHEET_NAME: &str = "Timesheet";

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export della vista filtrata corrente.
    ///
    /// - `format`: esplicito, oppure dedotto dall'estensione di `file`
    /// - `file`: path assoluto del file di output (`~/` ammesso)
    ///
    /// Returns `false` (and writes nothing) when the view has no records.
    pub fn export(
        view: &TimesheetView,
        schedule: &Schedule,
        format: Option<ExportFormat>,
        file: &str,
        force: bool,
    ) -> AppResult<bool> {
        let format = match format {
            Some(f) => f,
            None => format_from_extension(Path::new(file))?,
        };

        let records = view.records();
        if records.is_empty() {
            warning("No records found for the selected filters, nothing exported.");
            return Ok(false);
        }

        let path = resolve_output(file, force)?;
        let rows = build_rows(&records, schedule);

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path, SHEET_NAME)?,
            ExportFormat::Pdf => export_pdf(&rows, &path, &build_title(view.filter()))?,
        }

        Ok(true)
    }
}

fn format_from_extension(path: &Path) -> AppResult<ExportFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        "xlsx" => Ok(ExportFormat::Xlsx),
        "pdf" => Ok(ExportFormat::Pdf),
        _ => Err(AppError::InvalidExportFormat(path.display().to_string())),
    }
}

/// Titolo del PDF in base ai filtri attivi.
pub fn build_title(filter: &FilterState) -> String {
    format!(
        "Timesheet {} - {} ({} cutoff)",
        filter.email(),
        month_name(filter.month()),
        filter.cutoff()
    )
}
