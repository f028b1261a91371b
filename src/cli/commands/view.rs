use crate::cli::commands::load_view;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::model::{Schedule, build_rows, get_headers, rows_to_table};
use crate::models::event::{AttendanceEvent, DATE_KEY_FORMAT};
use crate::ui::messages::{header, warning};
use crate::utils::date::month_name;
use crate::utils::table::{Column, Highlight, Table};
use crate::view::TimesheetView;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        file,
        filters,
        events,
    } = cmd
    {
        let view = load_view(file, filters, cfg)?;
        let filter = view.filter();

        header(format!(
            "{} | {} | {} cutoff",
            filter.email(),
            month_name(filter.month()),
            filter.cutoff()
        ));

        if *events {
            print_events(&view, cfg);
        } else {
            print_records(&view, cfg);
        }
    }
    Ok(())
}

fn print_records(view: &TimesheetView, cfg: &Config) {
    let records = view.records();
    if records.is_empty() {
        warning("No records for the selected filters.");
        return;
    }

    let columns = get_headers()
        .into_iter()
        .map(|h| match h {
            "Morning In" => Column::highlighted(h, Highlight::ClockIn),
            "Afternoon Out" => Column::highlighted(h, Highlight::ClockOut),
            _ => Column::new(h),
        })
        .collect();

    let mut table = Table::new(columns).with_separator(&cfg.separator_char);
    for row in rows_to_table(&build_rows(&records, &Schedule::from_config(cfg))) {
        table.add_row(row);
    }

    print!("{}", table.render());
    println!("{} day(s)", records.len());
}

fn print_events(view: &TimesheetView, cfg: &Config) {
    let events = view.filtered_events();
    if events.is_empty() {
        warning("No events for the selected filters.");
        return;
    }

    let columns = ["ID", "Date", "Start time", "Kind", "Type", "Remarks"]
        .into_iter()
        .map(Column::new)
        .collect();

    let mut table = Table::new(columns).with_separator(&cfg.separator_char);
    for ev in events {
        table.add_row(event_cells(ev));
    }

    print!("{}", table.render());
}

fn event_cells(ev: &AttendanceEvent) -> Vec<String> {
    vec![
        ev.id.map(|i| i.to_string()).unwrap_or_default(),
        ev.date
            .map(|d| d.format(DATE_KEY_FORMAT).to_string())
            .unwrap_or_default(),
        ev.start_time_str(),
        ev.event_type().et_as_str().to_string(),
        ev.kind.clone(),
        ev.remarks.clone(),
    ]
}
