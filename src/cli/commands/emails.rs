use crate::core::normalizer::normalize_json;
use crate::errors::AppResult;
use crate::import::read_rows_json;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(file: &str) -> AppResult<()> {
    let json = read_rows_json(&expand_tilde(file))?;
    let imported = normalize_json(&json)?;

    if imported.emails.is_empty() {
        warning("No employee emails found.");
    }
    for email in &imported.emails {
        println!("{email}");
    }
    Ok(())
}
