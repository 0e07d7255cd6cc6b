use std::path::Path;

use sieve_core::{CaseMode, normalize, validate};

use crate::errors::CliError;
use crate::files::read_conditions;
use crate::ui;

/// Checks conditions and reports whether they would translate.
pub fn validate_conditions(input: Option<&Path>, case_mode: CaseMode) -> Result<(), CliError> {
    ui::header("Validating conditions");
    let conditions = read_conditions(input)?;

    let result = match case_mode {
        CaseMode::Strict => validate(&conditions),
        CaseMode::Insensitive => validate(&normalize(&conditions)),
    };

    result.map_err(|e| {
        ui::error_with_details("Conditions are invalid", &e.to_string());
        CliError::QueryError
    })?;

    ui::success(&format!("{} conditions are valid", conditions.len()));
    Ok(())
}
