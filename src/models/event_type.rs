use serde::Serialize;

pub const TIME_IN: &str = "Time In";
pub const TIME_OUT: &str = "Time Out";

/// Classificazione di un evento a partire dal testo libero della colonna "Time In".
///
/// The two flags are independent: a value such as `"Time In, Time Out"` sets
/// both, an unrelated value sets neither.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct EventType {
    pub time_in: bool,
    pub time_out: bool,
}

impl EventType {
    pub fn classify(raw: &str) -> Self {
        Self {
            time_in: raw.contains(TIME_IN),
            time_out: raw.contains(TIME_OUT),
        }
    }

    pub fn is_in(&self) -> bool {
        self.time_in
    }

    pub fn is_out(&self) -> bool {
        self.time_out
    }

    pub fn et_as_str(&self) -> &'static str {
        match (self.time_in, self.time_out) {
            (true, true) => "in+out",
            (true, false) => "in",
            (false, true) => "out",
            (false, false) => "-",
        }
    }
}
