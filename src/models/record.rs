use super::event::AttendanceEvent;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One reconciled day: the event that seeded it plus the matched in/out times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRecord {
    #[serde(flatten)]
    pub event: AttendanceEvent,
    pub time_in: Option<NaiveDateTime>,
    pub time_out: Option<NaiveDateTime>,
}

impl MergedRecord {
    /// Nuovo record seminato da un evento "Time In".
    pub fn seed(event: &AttendanceEvent) -> Self {
        Self {
            event: event.clone(),
            time_in: event.start_time,
            time_out: None,
        }
    }

    pub fn date_key(&self) -> Option<String> {
        self.event.date_key()
    }

    /// `time_out - time_in` in hours, `None` when either side is missing.
    pub fn total_hours(&self) -> Option<f64> {
        match (self.time_in, self.time_out) {
            (Some(t_in), Some(t_out)) => {
                Some((t_out - t_in).num_milliseconds() as f64 / 3_600_000.0)
            }
            _ => None,
        }
    }

    pub fn total_hours_str(&self) -> String {
        self.total_hours()
            .map(|h| format!("{h:.2}"))
            .unwrap_or_default()
    }
}
