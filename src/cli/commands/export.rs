use crate::cli::commands::load_view;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, Schedule};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        out,
        format,
        filters,
        force,
    } = cmd
    {
        let view = load_view(file, filters, cfg)?;
        ExportLogic::export(&view, &Schedule::from_config(cfg), *format, out, *force)?;
    }
    Ok(())
}
