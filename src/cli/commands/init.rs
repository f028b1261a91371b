use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        info(format!(
            "Configuration already present at {} (use --force to reset it)",
            path.display()
        ));
        return Ok(());
    }

    Config::default().save_to(path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
