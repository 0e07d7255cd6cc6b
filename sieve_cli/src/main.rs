mod cli;
mod commands;
mod errors;
mod files;
mod logging;
mod ui;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use sieve_core::CaseMode;

use cli::{SieveCli, SieveCliCommand};

fn main() -> ExitCode {
    let cli = SieveCli::parse();
    logging::initialize_logging(cli.verbose);

    let case_mode = if cli.case_insensitive {
        CaseMode::Insensitive
    } else {
        CaseMode::Strict
    };

    let result = match cli.command {
        SieveCliCommand::Translate { input } => commands::translate_conditions(
            input.as_deref(),
            case_mode,
            cli.format,
            &mut io::stdout().lock(),
        ),
        SieveCliCommand::Validate { input } => {
            commands::validate_conditions(input.as_deref(), case_mode)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            ui::debug(&format!("Command failed: {}", error));
            ExitCode::FAILURE
        }
    }
}
