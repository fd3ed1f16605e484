//! Deckgen CLI - adapter for the Sentinel presentation engine.
//!
//! Parses one generation request, runs the engine subprocess, validates the
//! deck directory it reports, and prints a JSON report. Every failure exits
//! with code 1 and a single error line on stderr.

use clap::Parser;
use std::process::ExitCode;

use deckgen_cli::cli_args::Cli;
use deckgen_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::generate::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
