// src/core/normalizer.rs

use crate::core::decoder::decode_lenient;
use crate::errors::AppResult;
use crate::models::event::AttendanceEvent;
use chrono::NaiveDateTime;
use serde_json::{Map, Value};

/// Untyped row as produced by the workbook reader (header → cell value).
pub type RawRow = Map<String, Value>;

/// Nomi esatti delle colonne del foglio importato.
pub mod keys {
    pub const ID: &str = "ID";
    pub const START_TIME: &str = "Start time";
    pub const COMPLETION_TIME: &str = "Completion time";
    pub const EMAIL: &str = "Email";
    pub const NAME: &str = "Name";
    pub const DATE: &str = "date";
    pub const TYPE: &str = "Time In";
    pub const REMARKS: &str = "Remarks";

    pub const ALL: [&str; 8] = [
        ID,
        START_TIME,
        COMPLETION_TIME,
        EMAIL,
        NAME,
        DATE,
        TYPE,
        REMARKS,
    ];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedImport {
    pub events: Vec<AttendanceEvent>,
    /// Distinct non-empty emails, first-seen order.
    pub emails: Vec<String>,
    /// Rows where at least one date field could not be decoded.
    pub undecodable_rows: usize,
}

/// Parse the JSON row hand-off and normalize every row.
///
/// Fails with `AppError::Parse` when the input is not an array of objects;
/// in that case nothing is returned.
pub fn normalize_json(json: &str) -> AppResult<NormalizedImport> {
    let rows: Vec<RawRow> = serde_json::from_str(json)?;
    Ok(normalize_rows(&rows))
}

pub fn normalize_rows(rows: &[RawRow]) -> NormalizedImport {
    let mut out = NormalizedImport {
        events: Vec::with_capacity(rows.len()),
        ..Default::default()
    };

    for row in rows {
        let event = normalize_row(row);

        if event.has_invalid_dates() {
            out.undecodable_rows += 1;
        }
        if !event.email.is_empty() && !out.emails.contains(&event.email) {
            out.emails.push(event.email.clone());
        }

        out.events.push(event);
    }

    out
}

pub fn normalize_row(row: &RawRow) -> AttendanceEvent {
    AttendanceEvent {
        id: field_integer(row, keys::ID),
        start_time: field_datetime(row, keys::START_TIME),
        completion_time: field_datetime(row, keys::COMPLETION_TIME),
        email: field_text(row, keys::EMAIL),
        name: field_text(row, keys::NAME),
        date: field_datetime(row, keys::DATE),
        kind: field_text(row, keys::TYPE),
        remarks: field_text(row, keys::REMARKS),
    }
}

fn field_datetime(row: &RawRow, key: &str) -> Option<NaiveDateTime> {
    decode_lenient(field_number(row, key))
}

/// Testo della cella; numeri e booleani vengono convertiti, assente → "".
fn field_text(row: &RawRow, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(|i| i.to_string())
            .unwrap_or_else(|| n.to_string()),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Numeric coercion of a cell: blank text is 0, anything unparsable is NaN.
fn field_number(row: &RawRow, key: &str) -> f64 {
    match row.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        _ => f64::NAN,
    }
}

/// Leading-integer parse: `"42"`, `" 42abc"` → 42; numbers are truncated.
fn field_integer(row: &RawRow, key: &str) -> Option<i64> {
    match row.get(key)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => leading_integer(s),
        _ => None,
    }
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let digits_start = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[digits_start..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return None;
    }
    s[..digits_start + digits_len].parse().ok()
}
