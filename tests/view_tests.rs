mod common;
use common::{ALICE, BOB, june_rows, rows_json};
use rtimesheet::models::filter::{Cutoff, FilterState};
use rtimesheet::view::TimesheetView;

fn june_view(email: &str) -> TimesheetView {
    TimesheetView::new(FilterState::new(6, Cutoff::First, email).unwrap())
}

#[test]
fn test_import_selects_first_email_when_default_is_absent() {
    let mut view = june_view("employee@example.com");

    let count = view.import_json(&rows_json(&june_rows())).unwrap();

    assert_eq!(count, 8);
    assert_eq!(view.emails(), &[ALICE.to_string(), BOB.to_string()]);
    assert_eq!(view.filter().email(), ALICE);
    assert_eq!(view.records().len(), 2);
}

#[test]
fn test_import_keeps_selected_email_when_present() {
    let mut view = june_view(BOB);
    view.import_json(&rows_json(&june_rows())).unwrap();

    assert_eq!(view.filter().email(), BOB);
    let records = view.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].total_hours_str(), "9.00");
}

#[test]
fn test_failed_import_leaves_state_unchanged() {
    let mut view = june_view(ALICE);
    view.import_json(&rows_json(&june_rows())).unwrap();
    let before = view.clone();

    assert!(view.import_json("{ not json").is_err());
    assert!(view.import_json(r#"{"ID": 1}"#).is_err());

    assert_eq!(view.events(), before.events());
    assert_eq!(view.emails(), before.emails());
    assert_eq!(view.filter(), before.filter());
    assert_eq!(view.records(), before.records());
}

#[test]
fn test_filter_changes_rederive_records_without_reimport() {
    let mut view = june_view(ALICE);
    view.import_json(&rows_json(&june_rows())).unwrap();
    assert_eq!(view.records().len(), 2);

    view.set_email(BOB);
    assert_eq!(view.records().len(), 1);

    view.set_email(ALICE);
    view.set_cutoff(Cutoff::Second);
    let records = view.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date_key().as_deref(), Some("06/17/2024"));

    view.set_month(7).unwrap();
    assert!(view.records().is_empty());
    assert_eq!(view.events().len(), 8);
}

#[test]
fn test_set_month_rejects_out_of_range_values() {
    let mut view = june_view(ALICE);

    assert!(view.set_month(0).is_err());
    assert!(view.set_month(13).is_err());
    assert_eq!(view.filter().month(), 6);

    view.set_month(12).unwrap();
    assert_eq!(view.filter().month(), 12);
}

#[test]
fn test_filtered_events_keep_list_order() {
    let mut view = june_view(ALICE);
    view.import_json(&rows_json(&june_rows())).unwrap();

    let ids: Vec<Option<i64>> = view.filtered_events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![Some(1), Some(3), Some(4), Some(5)]);
}

#[test]
fn test_empty_import_clears_events_and_keeps_email() {
    let mut view = june_view(ALICE);
    view.import_json(&rows_json(&june_rows())).unwrap();

    assert_eq!(view.import_json("[]").unwrap(), 0);
    assert!(view.events().is_empty());
    assert!(view.emails().is_empty());
    assert_eq!(view.filter().email(), ALICE);
    assert!(view.records().is_empty());
}

#[test]
fn test_filter_state_rejects_invalid_month() {
    assert!(FilterState::new(13, Cutoff::First, ALICE).is_err());
    assert!("3rd".parse::<Cutoff>().is_err());
    assert_eq!("2".parse::<Cutoff>().unwrap(), Cutoff::Second);
}

#[test]
fn test_undecodable_rows_are_counted_not_printed() {
    let json = r#"[
        {"ID": 1, "Email": "a@x.com", "Start time": 45446.25, "Completion time": 45446.26, "date": 45446},
        {"ID": 2, "Email": "a@x.com", "Start time": "garbage", "Completion time": 45446.26, "date": 45446}
    ]"#;
    let mut view = june_view(ALICE);
    assert_eq!(view.undecodable_rows(), 0);

    view.import_json(json).unwrap();
    assert_eq!(view.undecodable_rows(), 1);

    // a failed import keeps the count of the last good one
    assert!(view.import_json("nope").is_err());
    assert_eq!(view.undecodable_rows(), 1);

    view.import_json(&rows_json(&june_rows())).unwrap();
    assert_eq!(view.undecodable_rows(), 0);
}

#[test]
fn test_filter_state_accessors() {
    let mut filter = FilterState::new(6, Cutoff::First, ALICE).unwrap();
    assert_eq!(filter.cutoff(), Cutoff::First);
    assert_eq!(filter.email(), ALICE);

    filter.set_cutoff(Cutoff::Second);
    filter.set_email(BOB);
    assert_eq!(filter.cutoff(), Cutoff::Second);
    assert_eq!(filter.email(), BOB);
    assert_eq!(filter.month(), 6);

    let mut view = TimesheetView::new(filter);
    view.set_cutoff(Cutoff::First);
    assert_eq!(view.filter().cutoff(), Cutoff::First);
}
