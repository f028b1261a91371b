//! Stato della vista: eventi importati, elenco dipendenti e filtri attivi.

use crate::core::normalizer::normalize_json;
use crate::core::reconciler::{filter_events, reconcile};
use crate::errors::AppResult;
use crate::import;
use crate::models::event::AttendanceEvent;
use crate::models::filter::{Cutoff, FilterState};
use crate::models::record::MergedRecord;
use std::path::Path;

/// Owns the authoritative event list and filter values.
///
/// Records are never cached: [`TimesheetView::records`] re-runs the
/// reconciler on the current state, so a filter change never requires a new
/// import.
#[derive(Debug, Clone)]
pub struct TimesheetView {
    events: Vec<AttendanceEvent>,
    emails: Vec<String>,
    filter: FilterState,
    undecodable_rows: usize,
}

impl TimesheetView {
    pub fn new(filter: FilterState) -> Self {
        Self {
            events: Vec::new(),
            emails: Vec::new(),
            filter,
            undecodable_rows: 0,
        }
    }

    /// Replace the event list with the rows of `json`.
    ///
    /// On error the previous events, emails and filters are left untouched.
    /// If the selected employee is not among the imported ones, the first
    /// imported email becomes the selection.
    pub fn import_json(&mut self, json: &str) -> AppResult<usize> {
        let imported = normalize_json(json)?;

        self.events = imported.events;
        self.emails = imported.emails;
        self.undecodable_rows = imported.undecodable_rows;

        if !self.emails.iter().any(|e| e == self.filter.email())
            && let Some(first) = self.emails.first()
        {
            self.filter.set_email(first.clone());
        }

        Ok(self.events.len())
    }

    /// Import an `.xlsx`, `.csv` or `.json` file.
    pub fn import_file(&mut self, path: &Path) -> AppResult<usize> {
        let json = import::read_rows_json(path)?;
        self.import_json(&json)
    }

    pub fn set_month(&mut self, month: u32) -> AppResult<()> {
        self.filter.set_month(month)
    }

    pub fn set_cutoff(&mut self, cutoff: Cutoff) {
        self.filter.set_cutoff(cutoff);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.filter.set_email(email);
    }

    pub fn records(&self) -> Vec<MergedRecord> {
        reconcile(&self.events, &self.filter)
    }

    pub fn filtered_events(&self) -> Vec<&AttendanceEvent> {
        filter_events(&self.events, &self.filter).collect()
    }

    pub fn events(&self) -> &[AttendanceEvent] {
        &self.events
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Rows of the last import with at least one undecodable date.
    pub fn undecodable_rows(&self) -> usize {
        self.undecodable_rows
    }
}
