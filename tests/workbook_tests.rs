mod common;
use common::{ALICE, BOB, june_rows, temp_path, write_xlsx};
use rtimesheet::core::normalizer::keys;
use rtimesheet::import::{InputFormat, WorkbookReader, read_csv, read_rows_json};
use rtimesheet::models::filter::{Cutoff, FilterState};
use rtimesheet::view::TimesheetView;
use serde_json::json;
use std::fs;
use std::io::Cursor;
use std::path::Path;

#[test]
fn test_workbook_rows_keyed_by_header() {
    let path = temp_path("wb_rows", "xlsx");
    write_xlsx(&path, &june_rows());

    let rows = WorkbookReader::read_file(&path).unwrap();

    assert_eq!(rows.len(), 8);
    let first = &rows[0];
    assert_eq!(first.get(keys::ID), Some(&json!(1)));
    assert_eq!(first.get(keys::EMAIL), Some(&json!(ALICE)));
    assert_eq!(first.get(keys::TYPE), Some(&json!("Time In")));
    assert_eq!(first.get(keys::REMARKS), Some(&json!("row 1")));
    // midnight dates are integral serials
    assert_eq!(first.get(keys::DATE), Some(&json!(45446)));
    assert!(first.get(keys::START_TIME).unwrap().is_f64());
}

#[test]
fn test_import_xlsx_end_to_end() {
    let path = temp_path("wb_import", "xlsx");
    write_xlsx(&path, &june_rows());

    let mut view =
        TimesheetView::new(FilterState::new(6, Cutoff::First, "employee@example.com").unwrap());
    assert_eq!(view.import_file(Path::new(&path)).unwrap(), 8);
    assert_eq!(view.emails(), &[ALICE.to_string(), BOB.to_string()]);

    let records = view.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date_key().as_deref(), Some("06/03/2024"));
    assert_eq!(records[0].total_hours_str(), "9.08");
    assert_eq!(records[1].total_hours_str(), "");
}

#[test]
fn test_blank_cells_are_omitted() {
    let path = temp_path("wb_blank", "xlsx");
    let rows = vec![json!({ "ID": 9, "Email": ALICE, "Time In": "Time In" })];
    write_xlsx(&path, &rows);

    let read = WorkbookReader::read_file(&path).unwrap();
    assert_eq!(read.len(), 1);
    assert_eq!(read[0].len(), 3);
    assert!(read[0].get(keys::REMARKS).is_none());
}

#[test]
fn test_not_a_workbook_fails() {
    let err = WorkbookReader::read(Cursor::new(b"plain text, not a zip".to_vec()));
    assert!(err.is_err());

    let path = temp_path("wb_fake", "xlsx");
    fs::write(&path, "ID,Email\n").unwrap();
    let mut view = TimesheetView::new(FilterState::for_current_month(ALICE));
    assert!(view.import_file(Path::new(&path)).is_err());
    assert!(view.events().is_empty());
}

#[test]
fn test_csv_rows_feed_the_normalizer() {
    let csv = "ID,Start time,Completion time,Email,Name,date,Time In,Remarks\n\
               1,45446.27083333333,45446.27152777778,a@x.com,A,45446,Time In,\n\
               2,45446.64930555556,45446.65,a@x.com,A,45446,Time Out,late\n";

    let rows = read_csv(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get(keys::ID), Some(&json!("1")));
    assert!(rows[0].get(keys::REMARKS).is_none());

    let path = temp_path("csv_import", "csv");
    fs::write(&path, csv).unwrap();
    let mut view = TimesheetView::new(FilterState::new(6, Cutoff::First, "a@x.com").unwrap());
    view.import_file(Path::new(&path)).unwrap();

    let records = view.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].event.id, Some(1));
    assert_eq!(records[0].total_hours_str(), "9.08");
}

#[test]
fn test_input_format_from_extension() {
    assert_eq!(InputFormat::from_path(Path::new("a.XLSX")).unwrap(), InputFormat::Xlsx);
    assert_eq!(InputFormat::from_path(Path::new("a.csv")).unwrap(), InputFormat::Csv);
    assert_eq!(InputFormat::from_path(Path::new("a.json")).unwrap(), InputFormat::Json);
    assert!(InputFormat::from_path(Path::new("a.ods")).is_err());
    assert!(read_rows_json(Path::new("/tmp/none.txt")).is_err());
}
