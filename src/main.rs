//! strongpass: generate strong random passwords from chosen character
//! classes.
//!
//! This file is the application entry point. It only parses arguments,
//! sets up logging, dispatches the subcommand, and maps the outcome to an
//! exit status.
//!
//! The composition algorithm lives in `composer.rs`; the interactive state
//! in `selection.rs`; terminal and clipboard helpers in `ui.rs`.

use std::process::ExitCode;

use clap::Parser;

mod charset;
mod cli;
mod commands;
mod composer;
mod error;
mod logging;
mod selection;
mod settings;
mod ui;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if let Err(e) = logging::init_tracing(cli.debug) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
