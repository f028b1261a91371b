#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::Workbook;
use rtimesheet::core::normalizer::keys;
use serde_json::{Map, Value, json};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ALICE: &str = "alice@example.com";
pub const BOB: &str = "bob@example.com";

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Unique path inside the system temp dir; any existing file is removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Spreadsheet serial of a local date-time (days since 1899-12-30)
pub fn serial_of(dt: NaiveDateTime) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (dt - epoch).num_seconds() as f64 / 86400.0
}

pub fn dt(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

/// One imported row as the workbook reader would produce it.
pub fn event_row(id: i64, email: &str, day: NaiveDate, h: u32, mi: u32, kind: &str) -> Value {
    let start = day.and_hms_opt(h, mi, 0).unwrap();
    let mut row = Map::new();
    row.insert(keys::ID.into(), json!(id));
    row.insert(keys::START_TIME.into(), json!(serial_of(start)));
    row.insert(
        keys::COMPLETION_TIME.into(),
        json!(serial_of(start + chrono::Duration::minutes(1))),
    );
    row.insert(keys::EMAIL.into(), json!(email));
    row.insert(keys::NAME.into(), json!(email.split('@').next().unwrap()));
    row.insert(keys::DATE.into(), json!(serial_of(day.and_hms_opt(0, 0, 0).unwrap())));
    row.insert(keys::TYPE.into(), json!(kind));
    row.insert(keys::REMARKS.into(), json!(format!("row {id}")));
    Value::Object(row)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn rows_json(rows: &[Value]) -> String {
    serde_json::to_string(rows).unwrap()
}

/// June 2024 dataset: two employees, both pay periods, one orphan Time Out
pub fn june_rows() -> Vec<Value> {
    vec![
        event_row(1, ALICE, date(2024, 6, 3), 6, 30, "Time In"),
        event_row(2, BOB, date(2024, 6, 3), 7, 0, "Time In"),
        event_row(3, ALICE, date(2024, 6, 3), 15, 35, "Time Out"),
        event_row(4, ALICE, date(2024, 6, 4), 6, 45, "Time In"),
        event_row(5, ALICE, date(2024, 6, 5), 15, 30, "Time Out"),
        event_row(6, ALICE, date(2024, 6, 17), 6, 28, "Time In"),
        event_row(7, ALICE, date(2024, 6, 17), 15, 31, "Time Out"),
        event_row(8, BOB, date(2024, 6, 3), 16, 0, "Time Out"),
    ]
}

/// Write `rows` to the first sheet of a new workbook, header from `keys::ALL`
pub fn write_xlsx(path: &str, rows: &[Value]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in keys::ALL.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }

    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (col, header) in keys::ALL.iter().enumerate() {
            match row.get(*header) {
                Some(Value::Number(n)) => {
                    sheet.write_number(r, col as u16, n.as_f64().unwrap()).unwrap();
                }
                Some(Value::String(s)) => {
                    sheet.write_string(r, col as u16, s).unwrap();
                }
                _ => {}
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Workbook with the June dataset, ready for CLI tests
pub fn june_workbook(name: &str) -> String {
    let path = temp_path(name, "xlsx");
    write_xlsx(&path, &june_rows());
    path
}

/// Missing config file → defaults, without touching the user's HOME
pub fn temp_config(name: &str) -> String {
    temp_path(name, "conf")
}
