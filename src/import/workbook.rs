// src/import/workbook.rs

//! Lettura del primo foglio di un file XLSX come righe "header → valore".
//!
//! Only what the import needs is read: the shared strings table, the sheet
//! list of `xl/workbook.xml`, its relationships and the cell values of the
//! first worksheet. Styles, formulas and comments are ignored (a formula cell
//! contributes its cached value).

use crate::core::normalizer::RawRow;
use crate::errors::{AppError, AppResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

const DEFAULT_SHEET_PATH: &str = "xl/worksheets/sheet1.xml";

/// Cell value of one row, keyed by zero-based column index.
type SheetRow = Vec<(u32, Value)>;

pub struct WorkbookReader;

impl WorkbookReader {
    pub fn read_file<P: AsRef<Path>>(path: P) -> AppResult<Vec<RawRow>> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read the first worksheet; the first non-empty row is the header.
    pub fn read<R: Read + Seek>(reader: R) -> AppResult<Vec<RawRow>> {
        let mut archive = zip::ZipArchive::new(reader)?;

        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(AppError::Workbook(
                "missing [Content_Types].xml, not an XLSX file".into(),
            ));
        }

        let shared_strings = read_shared_strings(&mut archive)?;
        let sheet_path = first_sheet_path(&mut archive)?;
        let rows = read_sheet_rows(&mut archive, &sheet_path, &shared_strings)?;

        Ok(rows_to_objects(rows))
    }
}

fn read_shared_strings<R: Read + Seek>(archive: &mut zip::ZipArchive<R>) -> AppResult<Vec<String>> {
    let mut strings = Vec::new();

    let file = match archive.by_name("xl/sharedStrings.xml") {
        Ok(f) => f,
        Err(_) => return Ok(strings),
    };

    let mut xml = Reader::from_reader(BufReader::new(file));
    xml.trim_text(false);

    let mut buf = Vec::new();
    let mut current = String::new();
    let mut in_si = false;
    let mut in_t = false;
    // testo fonetico (<rPh>) escluso dal valore
    let mut phonetic_depth: u32 = 0;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"si" => {
                    in_si = true;
                    current.clear();
                }
                b"t" if in_si => in_t = true,
                b"rPh" => phonetic_depth += 1,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"si" => {
                    strings.push(decode_excel_escapes(&current));
                    in_si = false;
                    phonetic_depth = 0;
                }
                b"t" => in_t = false,
                b"rPh" => phonetic_depth = phonetic_depth.saturating_sub(1),
                _ => {}
            },
            Event::Empty(e) if e.local_name().as_ref() == b"si" => strings.push(String::new()),
            Event::Text(e) if in_t && phonetic_depth == 0 => current.push_str(&e.unescape()?),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(strings)
}

/// Path del primo foglio secondo workbook.xml + workbook.xml.rels.
fn first_sheet_path<R: Read + Seek>(archive: &mut zip::ZipArchive<R>) -> AppResult<String> {
    let Some(r_id) = first_sheet_rel_id(archive)? else {
        return Err(AppError::Workbook("workbook contains no sheets".into()));
    };

    let targets = read_worksheet_rels(archive)?;
    Ok(targets
        .get(&r_id)
        .cloned()
        .unwrap_or_else(|| DEFAULT_SHEET_PATH.to_string()))
}

fn first_sheet_rel_id<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
) -> AppResult<Option<String>> {
    let file = archive
        .by_name("xl/workbook.xml")
        .map_err(|_| AppError::Workbook("missing xl/workbook.xml".into()))?;

    let mut xml = Reader::from_reader(BufReader::new(file));
    xml.trim_text(true);
    let mut buf = Vec::new();

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"sheet" => {
                return Ok(attr_value(&e, b"r:id"));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
        buf.clear();
    }
}

fn read_worksheet_rels<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
) -> AppResult<HashMap<String, String>> {
    let mut rels = HashMap::new();

    let file = match archive.by_name("xl/_rels/workbook.xml.rels") {
        Ok(f) => f,
        Err(_) => return Ok(rels),
    };

    let mut xml = Reader::from_reader(BufReader::new(file));
    xml.trim_text(true);
    let mut buf = Vec::new();

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"Relationship" => {
                let id = attr_value(&e, b"Id");
                let target = attr_value(&e, b"Target");
                let rel_type = attr_value(&e, b"Type").unwrap_or_default();

                if let (Some(id), Some(target)) = (id, target)
                    && rel_type.ends_with("/worksheet")
                {
                    let full_path = match target.strip_prefix('/') {
                        Some(abs) => abs.to_string(),
                        None => format!("xl/{target}"),
                    };
                    rels.insert(id, full_path);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(rels)
}

/// Stato della cella in lettura.
#[derive(Default)]
struct PendingCell {
    col: u32,
    cell_type: Option<String>,
    value: Option<String>,
}

fn read_sheet_rows<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
    path: &str,
    shared_strings: &[String],
) -> AppResult<Vec<SheetRow>> {
    let file = archive
        .by_name(path)
        .map_err(|_| AppError::Workbook(format!("missing worksheet part {path}")))?;

    let mut xml = Reader::from_reader(BufReader::new(file));
    xml.trim_text(false);

    let mut buf = Vec::new();
    let mut rows: Vec<SheetRow> = Vec::new();
    let mut current_row: SheetRow = Vec::new();
    let mut next_col: u32 = 0;
    let mut cell: Option<PendingCell> = None;
    let mut in_value = false;
    let mut in_inline_text = false;
    let mut phonetic_depth: u32 = 0;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"row" => {
                    current_row.clear();
                    next_col = 0;
                }
                b"c" => {
                    let col = attr_value(&e, b"r")
                        .and_then(|r| column_index(&r))
                        .unwrap_or(next_col);
                    next_col = col + 1;
                    cell = Some(PendingCell {
                        col,
                        cell_type: attr_value(&e, b"t"),
                        value: None,
                    });
                }
                b"v" => in_value = true,
                b"t" => in_inline_text = cell.is_some(),
                b"rPh" => phonetic_depth += 1,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"c" => {
                    // cella senza valore: conta solo per la posizione
                    next_col = attr_value(&e, b"r")
                        .and_then(|r| column_index(&r))
                        .unwrap_or(next_col)
                        + 1;
                }
                b"row" => rows.push(Vec::new()),
                _ => {}
            },
            Event::Text(e) if in_value || (in_inline_text && phonetic_depth == 0) => {
                if let Some(c) = cell.as_mut() {
                    c.value
                        .get_or_insert_with(String::new)
                        .push_str(&e.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"v" => in_value = false,
                b"t" => in_inline_text = false,
                b"rPh" => phonetic_depth = phonetic_depth.saturating_sub(1),
                b"c" => {
                    phonetic_depth = 0;
                    if let Some(c) = cell.take()
                        && let Some(value) = cell_value(&c, shared_strings)?
                    {
                        current_row.push((c.col, value));
                    }
                }
                b"row" => rows.push(std::mem::take(&mut current_row)),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(rows)
}

fn cell_value(cell: &PendingCell, shared_strings: &[String]) -> AppResult<Option<Value>> {
    let Some(raw) = cell.value.as_deref() else {
        return Ok(None);
    };

    let value = match cell.cell_type.as_deref() {
        Some("s") => {
            let idx: usize = raw
                .trim()
                .parse()
                .map_err(|_| AppError::Workbook(format!("invalid shared string index: {raw}")))?;
            let s = shared_strings.get(idx).ok_or_else(|| {
                AppError::Workbook(format!("shared string index {idx} out of bounds"))
            })?;
            Value::String(s.clone())
        }
        Some("b") => Value::Bool(raw == "1" || raw.eq_ignore_ascii_case("true")),
        // errori (#N/A, #VALUE!...) → cella vuota
        Some("e") => return Ok(None),
        Some("str") | Some("inlineStr") => Value::String(decode_excel_escapes(raw)),
        None | Some("n") | Some("d") => match raw.trim().parse::<f64>() {
            Ok(n) => number_value(n),
            Err(_) => Value::String(raw.to_string()),
        },
        Some(_) => Value::String(raw.to_string()),
    };

    Ok(Some(value))
}

fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Header row + data rows → objects; blank rows are skipped, columns without
/// a header are dropped and repeated headers get a `_1`, `_2`… suffix.
fn rows_to_objects(rows: Vec<SheetRow>) -> Vec<RawRow> {
    let mut rows = rows.into_iter().filter(|r| !r.is_empty());

    let Some(header_row) = rows.next() else {
        return Vec::new();
    };

    let mut seen: HashMap<String, usize> = HashMap::new();
    let headers: HashMap<u32, String> = header_row
        .into_iter()
        .map(|(col, value)| {
            let base = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{base}_{count}")
            };
            *count += 1;
            (col, name)
        })
        .collect();

    rows.map(|row| {
        row.into_iter()
            .filter_map(|(col, value)| headers.get(&col).map(|h| (h.clone(), value)))
            .collect::<RawRow>()
    })
    .filter(|obj| !obj.is_empty())
    .collect()
}

fn attr_value(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .and_then(|a| a.unescape_value().ok().map(|v| v.to_string()))
}

/// "C12" → 2 (colonne zero-based).
fn column_index(cell_ref: &str) -> Option<u32> {
    let letters: Vec<u8> = cell_ref
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic())
        .collect();

    if letters.is_empty() {
        return None;
    }

    let mut col: u32 = 0;
    for b in letters {
        col = col
            .checked_mul(26)?
            .checked_add(u32::from(b.to_ascii_uppercase() - b'A') + 1)?;
    }
    Some(col - 1)
}

/// Excel encodes control characters as `_xHHHH_` inside strings.
fn decode_excel_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find("_x") {
        out.push_str(&rest[..pos]);
        let candidate = &rest[pos..];

        let decoded = candidate
            .get(2..6)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .filter(|_| candidate.as_bytes().get(6) == Some(&b'_'))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .and_then(char::from_u32);

        match decoded {
            Some(ch) => {
                out.push(ch);
                rest = &candidate[7..];
            }
            None => {
                out.push_str("_x");
                rest = &candidate[2..];
            }
        }
    }

    out.push_str(rest);
    out
}
