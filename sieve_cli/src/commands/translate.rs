use std::io::Write;
use std::path::Path;

use sieve_core::{CaseMode, Translator};

use crate::errors::CliError;
use crate::files::read_conditions;
use crate::ui::{self, OutputFormat};

/// Translates conditions into a bool query document and writes it to `out`.
pub fn translate_conditions(
    input: Option<&Path>,
    case_mode: CaseMode,
    output_format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let conditions = read_conditions(input)?;
    ui::debug(&format!("Translating {} conditions", conditions.len()));

    let translator = Translator::new().with_case_mode(case_mode);
    let document = match output_format {
        OutputFormat::Compact => translator.translate(&conditions),
        OutputFormat::Pretty => translator.translate_pretty(&conditions),
    }
    .map_err(|e| {
        ui::error_with_details("Failed to translate conditions", &e.to_string());
        CliError::QueryError
    })?;

    out.write_all(&document)
        .and_then(|_| writeln!(out))
        .map_err(|e| {
            ui::error_with_details("Failed to write query", &e.to_string());
            CliError::OutputError
        })
}
