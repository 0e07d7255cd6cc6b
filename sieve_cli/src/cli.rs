use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::ui::OutputFormat;

/// Defines the top-level interface for the Sieve CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "sieve")]
#[command(version, about = "Sieve CLI: Turn filter conditions into search bool queries.")]
pub struct SieveCli {
    /// Lower-case types and operators before validating them?
    #[arg(short = 'i', long, global = true, env = "SIEVE_CASE_INSENSITIVE")]
    pub case_insensitive: bool,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: SieveCliCommand,
}

/// Defines the available subcommands of the Sieve CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum SieveCliCommand {
    /// Translate conditions into a bool query document.
    Translate {
        /// JSON file with an array of conditions. Reads stdin if omitted or "-".
        input: Option<PathBuf>,
    },
    /// Check conditions without producing a document.
    Validate {
        /// JSON file with an array of conditions. Reads stdin if omitted or "-".
        input: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        SieveCli::command().debug_assert();
    }

    #[test]
    fn test_parse_translate_with_file() {
        let cli = SieveCli::try_parse_from(["sieve", "translate", "conditions.json", "-f", "pretty"])
            .unwrap();

        assert_eq!(
            cli.command,
            SieveCliCommand::Translate {
                input: Some(PathBuf::from("conditions.json"))
            }
        );
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(!cli.case_insensitive);
    }

    #[test]
    fn test_parse_validate_from_stdin() {
        let cli = SieveCli::try_parse_from(["sieve", "validate", "-i"]).unwrap();

        assert_eq!(cli.command, SieveCliCommand::Validate { input: None });
        assert!(cli.case_insensitive);
        assert_eq!(cli.format, OutputFormat::Compact);
    }
}
