use std::fmt;

/// Errors reported by CLI commands. Details are printed before returning.
#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    InputError,
    ParseError,
    QueryError,
    OutputError,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputError => write!(f, "Conditions could not be read"),
            CliError::ParseError => write!(f, "Conditions are not valid JSON"),
            CliError::QueryError => write!(f, "Conditions could not be translated"),
            CliError::OutputError => write!(f, "Output could not be written"),
        }
    }
}

impl std::error::Error for CliError {}
