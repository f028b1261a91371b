pub mod config;
pub mod emails;
pub mod export;
pub mod init;
pub mod rows;
pub mod view;

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::filter::FilterState;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_month;
use crate::utils::path::expand_tilde;
use crate::view::TimesheetView;

/// Importa il file e applica i filtri: default da config, poi import, poi flag CLI.
pub(crate) fn load_view(file: &str, filters: &FilterArgs, cfg: &Config) -> AppResult<TimesheetView> {
    let mut initial = FilterState::for_current_month(cfg.default_email.clone());
    initial.set_cutoff(cfg.default_cutoff);

    let mut view = TimesheetView::new(initial);
    let count = view.import_file(&expand_tilde(file))?;
    info(format!("Imported {count} event(s) from {file}"));
    if view.undecodable_rows() > 0 {
        warning(format!(
            "{} row(s) contain dates that could not be decoded",
            view.undecodable_rows()
        ));
    }

    if let Some(m) = &filters.month {
        view.set_month(parse_month(m)?)?;
    }
    if let Some(c) = filters.cutoff {
        view.set_cutoff(c);
    }
    if let Some(e) = &filters.email {
        view.set_email(e.clone());
    }

    Ok(view)
}
