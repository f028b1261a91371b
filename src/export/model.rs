// src/export/model.rs

use crate::config::Config;
use crate::models::record::MergedRecord;
use chrono::NaiveDateTime;
use serde::Serialize;

pub const DATE_FORMAT: &str = "%m/%d/%Y";
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Colonne fisse dell'orario di lavoro (non derivate dai dati).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub work_schedule: String,
    pub morning_out: String,
    pub afternoon_in: String,
}

impl Schedule {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            work_schedule: cfg.work_schedule.clone(),
            morning_out: cfg.morning_out.clone(),
            afternoon_in: cfg.afternoon_in.clone(),
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Riga "piatta" della tabella, identica per terminale ed export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Work Schedule")]
    pub work_schedule: String,
    #[serde(rename = "Morning In")]
    pub morning_in: String,
    #[serde(rename = "Morning Out")]
    pub morning_out: String,
    #[serde(rename = "Afternoon In")]
    pub afternoon_in: String,
    #[serde(rename = "Afternoon Out")]
    pub afternoon_out: String,
    #[serde(rename = "Total Hours")]
    pub total_hours: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
}

impl RecordRow {
    pub fn from_record(rec: &MergedRecord, schedule: &Schedule) -> Self {
        Self {
            date: fmt_opt(rec.event.date, DATE_FORMAT),
            work_schedule: schedule.work_schedule.clone(),
            morning_in: fmt_opt(rec.time_in, TIME_FORMAT),
            morning_out: schedule.morning_out.clone(),
            afternoon_in: schedule.afternoon_in.clone(),
            afternoon_out: fmt_opt(rec.time_out, TIME_FORMAT),
            total_hours: rec.total_hours_str(),
            remarks: rec.event.remarks.clone(),
        }
    }
}

fn fmt_opt(dt: Option<NaiveDateTime>, fmt: &str) -> String {
    dt.map(|d| d.format(fmt).to_string()).unwrap_or_default()
}

pub fn build_rows(records: &[MergedRecord], schedule: &Schedule) -> Vec<RecordRow> {
    records
        .iter()
        .map(|r| RecordRow::from_record(r, schedule))
        .collect()
}

/// Header per tabella / CSV / XLSX / PDF
pub fn get_headers() -> Vec<&'static str> {
    vec![
        "Date",
        "Work Schedule",
        "Morning In",
        "Morning Out",
        "Afternoon In",
        "Afternoon Out",
        "Total Hours",
        "Remarks",
    ]
}

pub fn row_to_cells(r: &RecordRow) -> Vec<String> {
    vec![
        r.date.clone(),
        r.work_schedule.clone(),
        r.morning_in.clone(),
        r.morning_out.clone(),
        r.afternoon_in.clone(),
        r.afternoon_out.clone(),
        r.total_hours.clone(),
        r.remarks.clone(),
    ]
}

pub fn rows_to_table(rows: &[RecordRow]) -> Vec<Vec<String>> {
    rows.iter().map(row_to_cells).collect()
}
