// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Risolve il path di output (`~/` espanso) e verifica che sia scrivibile.
///
/// - relative paths are rejected
/// - an existing file is overwritten only with `force` or after confirmation
pub(crate) fn resolve_output(file: &str, force: bool) -> AppResult<PathBuf> {
    let path = expand_tilde(file);

    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "output file path must be absolute: {file}"
        )));
    }

    ensure_writable(&path, force)?;
    Ok(path)
}

fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        )),
    }
}
