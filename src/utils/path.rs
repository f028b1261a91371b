//! Espansione di `~` nei path passati da riga di comando.

use std::path::PathBuf;

/// `~` and `~/…` resolve against the home directory; anything else is
/// returned as is (also when the home directory is unknown).
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path {
        "~" => Some(""),
        p => p.strip_prefix("~/"),
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
