// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{RecordRow, get_headers, row_to_cells};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_EVEN: u32 = 0xEAF3FB;
const BAND_ODD: u32 = 0xFFFFFF;

/// Export XLSX: header in grassetto, righe a bande, date/ore come seriali veri.
pub(crate) fn export_xlsx(rows: &[RecordRow], path: &Path, sheet_name: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).map_err(to_xlsx_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_xlsx_error)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(to_xlsx_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    for (row_index, record) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 {
            Color::RGB(BAND_EVEN)
        } else {
            Color::RGB(BAND_ODD)
        };

        for (col, value) in row_to_cells(record).iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, band)?;
            col_widths[col] = col_widths[col].max(value.width());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_xlsx_error)?;
    }

    workbook.save(path).map_err(to_xlsx_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Data/ora → seriale con formato, numero → cella numerica, vuoto → cella vuota, altrimenti testo.
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if s.is_empty() {
        worksheet
            .write_blank(row, col, &base)
            .map_err(to_xlsx_error)?;
    } else if let Some((num_format, serial)) = parse_to_excel_date(s) {
        worksheet
            .write_with_format(row, col, serial, &base.set_num_format(num_format))
            .map_err(to_xlsx_error)?;
    } else if let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_num_format("0.00").set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_xlsx_error)?;
    } else {
        worksheet
            .write_with_format(row, col, s, &base)
            .map_err(to_xlsx_error)?;
    }

    Ok(())
}

fn to_xlsx_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}
