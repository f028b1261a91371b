use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{yaml}");
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}, defaults are in use (run `init`)",
                    path.display()
                ));
            } else {
                let missing = Config::missing_keys(path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!(
                        "Missing fields (defaults will be used): {}",
                        missing.join(", ")
                    ));
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            if run_editor(&editor_to_use, path) {
                success(format!("Configuration file edited using '{editor_to_use}'"));
            } else if editor_to_use != default_editor && run_editor(&default_editor, path) {
                warning(format!(
                    "Editor '{editor_to_use}' not available, used fallback '{default_editor}'"
                ));
            } else {
                error(format!("Failed to edit configuration file {}", path.display()));
            }
        }
    }

    Ok(())
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}
