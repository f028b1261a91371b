// src/import/csv_rows.rs

use crate::core::normalizer::RawRow;
use crate::errors::AppResult;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Legge un CSV con intestazione nelle stesse righe "header → valore" del foglio XLSX.
///
/// Every value stays a string (the normalizer coerces date serials); empty
/// fields are omitted like blank cells.
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> AppResult<Vec<RawRow>> {
    let rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    collect_rows(rdr)
}

pub fn read_csv<R: Read>(reader: R) -> AppResult<Vec<RawRow>> {
    let rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    collect_rows(rdr)
}

fn collect_rows<R: Read>(mut rdr: csv::Reader<R>) -> AppResult<Vec<RawRow>> {
    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();

    for record in rdr.records() {
        let record = record?;

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(_, value)| !value.is_empty())
            .map(|(h, value)| (h.to_string(), Value::String(value.to_string())))
            .collect();

        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(rows)
}
