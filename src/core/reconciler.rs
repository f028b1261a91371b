// src/core/reconciler.rs

use crate::models::event::AttendanceEvent;
use crate::models::filter::FilterState;
use crate::models::record::MergedRecord;
use std::collections::HashMap;

/// Build one merged record per date for the events matching `filter`.
///
/// Events are processed in list order (never sorted):
/// - a "Time In" event creates or replaces the record for its date;
/// - a "Time Out" event closes the record for its date, if one exists,
///   otherwise it is dropped.
///
/// Both checks run for every event. Records come out in the order their
/// date was first seeded; a replaced record keeps its position.
pub fn reconcile(events: &[AttendanceEvent], filter: &FilterState) -> Vec<MergedRecord> {
    let mut records: Vec<MergedRecord> = Vec::new();
    let mut by_date: HashMap<String, usize> = HashMap::new();

    for event in filter_events(events, filter) {
        let Some(key) = event.date_key() else {
            continue;
        };
        let kind = event.event_type();

        if kind.is_in() {
            let seeded = MergedRecord::seed(event);
            match by_date.get(&key) {
                Some(&idx) => records[idx] = seeded,
                None => {
                    by_date.insert(key.clone(), records.len());
                    records.push(seeded);
                }
            }
        }

        if kind.is_out()
            && let Some(&idx) = by_date.get(&key)
        {
            records[idx].time_out = event.start_time;
        }
    }

    records
}

/// Eventi che passano i filtri, nell'ordine originale.
pub fn filter_events<'a>(
    events: &'a [AttendanceEvent],
    filter: &'a FilterState,
) -> impl Iterator<Item = &'a AttendanceEvent> + 'a {
    events.iter().filter(move |e| filter.matches(e))
}
