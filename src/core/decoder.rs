// src/core/decoder.rs

//! Conversione dei seriali Excel (giorni dal 30/12/1899) in date/ora locali.
//!
//! The integer part of a serial counts whole days, the fractional part is the
//! time of day. No timezone conversion happens here: the result is a naive
//! wall-clock value.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Days between the spreadsheet epoch (1899-12-30) and 1970-01-01.
pub const UNIX_EPOCH_OFFSET_DAYS: f64 = 25569.0;

const SECONDS_PER_DAY: f64 = 86_400.0;
const LAST_SECOND_OF_DAY: i64 = 86_399;

/// Compensa gli errori di rappresentazione binaria (es. 0.5833333 → 13:59:59).
const FRACTION_EPSILON: f64 = 0.000_000_1;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DecodeError {
    #[error("serial {0} is not a positive day count")]
    NonPositive(f64),

    #[error("serial is not a finite number")]
    NotFinite,

    #[error("serial {0} is outside the supported calendar range")]
    OutOfRange(f64),
}

/// Decode a spreadsheet serial into a local calendar date-time.
///
/// ```
/// use rtimesheet::core::decoder::excel_serial_to_datetime;
///
/// let noon = excel_serial_to_datetime(45446.5).unwrap();
/// assert_eq!(noon.to_string(), "2024-06-03 12:00:00");
/// ```
pub fn excel_serial_to_datetime(serial: f64) -> Result<NaiveDateTime, DecodeError> {
    if !serial.is_finite() {
        return Err(DecodeError::NotFinite);
    }
    if serial <= 0.0 {
        return Err(DecodeError::NonPositive(serial));
    }

    let whole_days = serial.floor();
    let date = serial_date(whole_days - UNIX_EPOCH_OFFSET_DAYS)
        .ok_or(DecodeError::OutOfRange(serial))?;

    let fractional_day = serial - whole_days + FRACTION_EPSILON;
    let total_seconds = ((SECONDS_PER_DAY * fractional_day).floor() as i64).min(LAST_SECOND_OF_DAY);

    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;

    let time = NaiveTime::from_hms_opt(hours as u32, minutes as u32, seconds as u32)
        .ok_or(DecodeError::OutOfRange(serial))?;

    Ok(date.and_time(time))
}

/// Like [`excel_serial_to_datetime`], but an undecodable serial becomes `None`
/// (the "invalid date" of an imported row).
pub fn decode_lenient(serial: f64) -> Option<NaiveDateTime> {
    excel_serial_to_datetime(serial).ok()
}

fn serial_date(days_since_unix_epoch: f64) -> Option<NaiveDate> {
    // i64 cast saturates; try_days rejects anything chrono cannot hold
    let delta = Duration::try_days(days_since_unix_epoch as i64)?;
    NaiveDate::from_ymd_opt(1970, 1, 1)?.checked_add_signed(delta)
}
