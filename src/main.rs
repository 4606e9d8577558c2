//! Dragonsmith: generate customized Dragon analysis apps from a template.
//!
//! This is the main entry point for the `dragonsmith` CLI. It parses
//! arguments, sets up logging and the Ctrl-C handler, dispatches to the
//! appropriate command handler, and handles errors with proper exit codes.

mod artifacts;
mod cli;
mod commands;
pub mod config;
pub mod derive;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod prompt;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use log::{LevelFilter, warn};
use std::process::ExitCode;

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // RUST_LOG, when set, overrides the -v level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}

fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        eprintln!("\n\n👋 Setup cancelled by user.");
        std::process::exit(exit_codes::CANCELLED);
    });
    if let Err(err) = result {
        warn!("failed to install Ctrl-C handler: {}", err);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_logging(cli.verbose);
    install_interrupt_handler();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
