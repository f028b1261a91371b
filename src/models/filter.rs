use super::event::AttendanceEvent;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Last day of the first pay period.
pub const CUTOFF_DAY: u32 = 15;

/// Pay-period half of the month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Cutoff {
    /// Days 1-15
    #[default]
    #[serde(rename = "1st")]
    #[value(name = "1st")]
    First,
    /// Days 16-31
    #[serde(rename = "2nd")]
    #[value(name = "2nd")]
    Second,
}

impl Cutoff {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cutoff::First => "1st",
            Cutoff::Second => "2nd",
        }
    }

    pub fn contains_day(&self, day: u32) -> bool {
        match self {
            Cutoff::First => day <= CUTOFF_DAY,
            Cutoff::Second => day > CUTOFF_DAY,
        }
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cutoff {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "1st" | "1" | "first" => Ok(Cutoff::First),
            "2nd" | "2" | "second" => Ok(Cutoff::Second),
            other => Err(AppError::InvalidCutoff(other.to_string())),
        }
    }
}

/// Filtri attivi sulla vista: mese, metà del mese e dipendente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    month: u32,
    cutoff: Cutoff,
    email: String,
}

impl FilterState {
    pub fn new(month: u32, cutoff: Cutoff, email: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            month: date::validate_month(month)?,
            cutoff,
            email: email.into(),
        })
    }

    /// Current calendar month, first cutoff.
    pub fn for_current_month(email: impl Into<String>) -> Self {
        Self {
            month: date::current_month(),
            cutoff: Cutoff::default(),
            email: email.into(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn set_month(&mut self, month: u32) -> AppResult<()> {
        self.month = date::validate_month(month)?;
        Ok(())
    }

    pub fn cutoff(&self) -> Cutoff {
        self.cutoff
    }

    pub fn set_cutoff(&mut self, cutoff: Cutoff) {
        self.cutoff = cutoff;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// An event with an invalid `date` never matches.
    pub fn matches(&self, event: &AttendanceEvent) -> bool {
        match (event.month(), event.day()) {
            (Some(month), Some(day)) => {
                month == self.month && event.email == self.email && self.cutoff.contains_day(day)
            }
            _ => false,
        }
    }
}
