use std::fs;
use std::io::{self, Read};
use std::path::Path;

use sieve_core::Condition;

use crate::errors::CliError;
use crate::ui;

/// Reads a JSON array of conditions from a file, or from stdin when the
/// path is missing or `-`.
pub fn read_conditions(input: Option<&Path>) -> Result<Vec<Condition>, CliError> {
    let source = match input {
        Some(path) if path != Path::new("-") => {
            ui::debug(&format!("Reading conditions from '{}'", path.display()));
            fs::read_to_string(path).map_err(|e| {
                ui::error_with_details(
                    &format!("Failed to read '{}'", path.display()),
                    &e.to_string(),
                );
                CliError::InputError
            })?
        }
        _ => {
            ui::debug("Reading conditions from stdin");
            let mut source = String::new();
            io::stdin().read_to_string(&mut source).map_err(|e| {
                ui::error_with_details("Failed to read stdin", &e.to_string());
                CliError::InputError
            })?;
            source
        }
    };

    parse_conditions(&source)
}

/// Parses a JSON array of conditions.
pub fn parse_conditions(source: &str) -> Result<Vec<Condition>, CliError> {
    serde_json::from_str(source).map_err(|e| {
        ui::error_with_details("Failed to parse conditions", &e.to_string());
        CliError::ParseError
    })
}
