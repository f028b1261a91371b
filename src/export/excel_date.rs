// src/export/excel_date.rs

use crate::core::decoder::UNIX_EPOCH_OFFSET_DAYS;
use crate::export::model::{DATE_FORMAT, TIME_FORMAT};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Interpreta una cella della tabella come data o ora,
/// restituendo il formato numerico Excel + il *seriale Excel*.
///
/// Only the two layouts the table produces are recognized (`MM/dd/yyyy` and
/// `hh:mm AM`); anything else stays text or number.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(("mm/dd/yyyy", naive_datetime_to_excel_serial(&d.and_time(NaiveTime::MIN))));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, TIME_FORMAT) {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm AM/PM", seconds / 86400.0));
    }

    None
}

/// Inverse of the import decoder: days since 1899-12-30 plus day fraction.
pub(crate) fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let unix_epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
        .unwrap_or_default()
        .and_time(NaiveTime::MIN);

    let duration = *dt - unix_epoch;
    let days = duration.num_days();
    let secs = duration.num_seconds() - days * 86400;

    days as f64 + UNIX_EPOCH_OFFSET_DAYS + secs as f64 / 86400.0
}
