use crate::errors::{AppError, AppResult};
use chrono::Datelike;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn current_month() -> u32 {
    chrono::Local::now().date_naive().month()
}

pub fn validate_month(month: u32) -> AppResult<u32> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(AppError::InvalidMonth(month.to_string()))
    }
}

/// English name of a month number (1-12), "?" otherwise.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("?")
}

/// Accetta "6", "06", "June", "jun".
pub fn parse_month(s: &str) -> AppResult<u32> {
    let s = s.trim();

    if let Ok(n) = s.parse::<u32>() {
        return validate_month(n);
    }

    let lower = s.to_lowercase();
    if lower.len() >= 3 {
        for (i, name) in MONTH_NAMES.iter().enumerate() {
            if name.to_lowercase().starts_with(&lower) {
                return Ok(i as u32 + 1);
            }
        }
    }

    Err(AppError::InvalidMonth(s.to_string()))
}
