//! Terminal output helpers. Everything except the document goes to stderr.

use std::fmt;

use console::style;

/// How the query document is written
#[derive(Clone, Copy, Debug, Default, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON
    #[default]
    Compact,
    /// Indented JSON
    Pretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Compact => write!(f, "compact"),
            OutputFormat::Pretty => write!(f, "pretty"),
        }
    }
}

pub fn header(message: &str) {
    eprintln!("{}", style(message).bold());
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), style(message).red());
}

pub fn error_with_details(message: &str, details: &str) {
    error(message);
    eprintln!("  {}", style(details).dim());
}

pub fn debug(message: &str) {
    log::debug!("{}", message);
}
