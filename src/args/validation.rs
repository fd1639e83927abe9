use std::{fs, path::PathBuf};

use super::types::Args;
use crate::model::Translations;

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a JSON object of strings
pub fn check_readable_translations(file: &str) -> Result<Translations, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The translations file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The translations file '{file}' is not readable: {e}"))?;
    Translations::from_json(&contents)
        .map_err(|e| format!("The translations file '{file}' is not a JSON object of strings: {e}"))
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the static directory is missing or the log level is unknown
    pub fn validate(&self) -> Result<(), String> {
        if !PathBuf::from(&self.static_dir).is_dir() {
            return Err(format!(
                "Static directory '{}' does not exist.",
                self.static_dir
            ));
        }
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!("Unknown log level '{other}'.")),
        }
    }
}
