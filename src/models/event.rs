use super::event_type::EventType;
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

/// Date key used to group events of the same day (MM/dd/yyyy).
pub const DATE_KEY_FORMAT: &str = "%m/%d/%Y";

/// One imported clock-in / clock-out row.
///
/// Date-time fields are `None` when the spreadsheet serial could not be decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceEvent {
    pub id: Option<i64>,                         // ⇔ "ID"
    pub start_time: Option<NaiveDateTime>,      // ⇔ "Start time"
    pub completion_time: Option<NaiveDateTime>, // ⇔ "Completion time"
    pub email: String,                          // ⇔ "Email"
    pub name: String,                           // ⇔ "Name"
    pub date: Option<NaiveDateTime>,            // ⇔ "date"
    #[serde(rename = "type")]
    pub kind: String, // ⇔ "Time In" (testo libero)
    pub remarks: String, // ⇔ "Remarks"
}

impl AttendanceEvent {
    pub fn event_type(&self) -> EventType {
        EventType::classify(&self.kind)
    }

    /// `MM/dd/yyyy` of the nominal date, `None` for an invalid date.
    pub fn date_key(&self) -> Option<String> {
        self.date.map(|d| d.format(DATE_KEY_FORMAT).to_string())
    }

    pub fn month(&self) -> Option<u32> {
        self.date.map(|d| d.month())
    }

    pub fn day(&self) -> Option<u32> {
        self.date.map(|d| d.day())
    }

    pub fn has_invalid_dates(&self) -> bool {
        self.start_time.is_none() || self.completion_time.is_none() || self.date.is_none()
    }

    pub fn start_time_str(&self) -> String {
        self.start_time
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default()
    }
}
