//! Table rendering utilities for CLI outputs.

use crate::utils::colors::{EMPTY_CELL, colorize_in_out, grey};
use crate::utils::formatting::{bold, pad_right};
use unicode_width::UnicodeWidthStr;

/// How the cells of a column are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Plain,
    ClockIn,
    ClockOut,
}

pub struct Column {
    pub header: String,
    pub highlight: Highlight,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            highlight: Highlight::Plain,
        }
    }

    pub fn highlighted(header: &str, highlight: Highlight) -> Self {
        Self {
            header: header.to_string(),
            highlight,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: String,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: "-".to_string(),
        }
    }

    /// Carattere usato per la riga sotto l'intestazione (da config).
    pub fn with_separator(mut self, separator: &str) -> Self {
        if let Some(c) = separator.chars().next() {
            self.separator = c.to_string();
        }
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| if c.is_empty() { EMPTY_CELL.width() } else { c.width() })
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| bold(&pad_right(&col.header, *w)))
            .collect();
        out.push_str(&header.join(" "));
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&self.separator.repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (col, w))| {
                    let value = row.get(i).map(String::as_str).unwrap_or_default();
                    render_cell(value, *w, col.highlight)
                })
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}

fn render_cell(value: &str, width: usize, highlight: Highlight) -> String {
    if value.is_empty() {
        return grey(&pad_right(EMPTY_CELL, width));
    }

    let padded = pad_right(value, width);
    match highlight {
        Highlight::Plain => padded,
        Highlight::ClockIn => colorize_in_out(&padded, true),
        Highlight::ClockOut => colorize_in_out(&padded, false),
    }
}
