use crate::errors::{AppError, AppResult};
use crate::models::filter::Cutoff;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EMAIL: &str = "employee@example.com";

/// Chiavi attese nel file di configurazione (usate da `config --check`).
pub const CONFIG_KEYS: [&str; 6] = [
    "default_email",
    "default_cutoff",
    "work_schedule",
    "morning_out",
    "afternoon_in",
    "separator_char",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Employee selected until an import says otherwise
    #[serde(default = "default_email")]
    pub default_email: String,
    #[serde(default)]
    pub default_cutoff: Cutoff,
    #[serde(default = "default_work_schedule")]
    pub work_schedule: String,
    #[serde(default = "default_morning_out")]
    pub morning_out: String,
    #[serde(default = "default_afternoon_in")]
    pub afternoon_in: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_email() -> String {
    DEFAULT_EMAIL.to_string()
}
fn default_work_schedule() -> String {
    "6:30AM - 3:30PM".to_string()
}
fn default_morning_out() -> String {
    "12:00PM".to_string()
}
fn default_afternoon_in() -> String {
    "1:00PM".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_email: default_email(),
            default_cutoff: Cutoff::default(),
            work_schedule: default_work_schedule(),
            morning_out: default_morning_out(),
            afternoon_in: default_afternoon_in(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is missing
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Scrive la configurazione su disco, creando la cartella se serve.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Keys of [`CONFIG_KEYS`] absent from the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        let value: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

        let mapping = value.as_mapping();
        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !mapping.is_some_and(|m| m.contains_key(*k)))
            .collect())
    }
}
