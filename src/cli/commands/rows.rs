use crate::errors::AppResult;
use crate::import::read_rows_json;
use crate::utils::path::expand_tilde;

/// Handle `rows`: print the JSON hand-off exactly as the importer sees it.
pub fn handle(file: &str) -> AppResult<()> {
    let json = read_rows_json(&expand_tilde(file))?;
    println!("{json}");
    Ok(())
}
