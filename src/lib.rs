//! rTimesheet library root.
//! Exposes the import → reconcile pipeline, the CLI parser and the high-level
//! run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;
pub mod view;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Rows { file } => cli::commands::rows::handle(file),
        Commands::Emails { file } => cli::commands::emails::handle(file),
        Commands::View { .. } => cli::commands::view::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // --config sostituisce il file standard (~/.rtimesheet/rtimesheet.conf)
    let config_path = match &cli.config {
        Some(custom) => utils::path::expand_tilde(custom),
        None => Config::config_file(),
    };

    // `init` must work even when the existing file is broken
    let cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    dispatch(&cli, &cfg, &config_path)
}
