//! Command dispatch layer for strongpass.
//!
//! This module maps parsed CLI commands to their implementations. Each
//! command lives in its own file and exposes a `run()` function.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::{Cli, Commands};
use crate::settings::{self, Settings};

pub mod about;
pub mod config;
pub mod gen_pw;
pub mod shell;

pub fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Gen(args) => gen_pw::run(args, config_path),
        Commands::Shell => shell::run(config_path),
        Commands::Config { action } => config::run(action, config_path),
        Commands::About => {
            about::run();
            Ok(())
        }
    }
}

/// Resolve the settings path and load it.
pub(crate) fn load_settings(config: Option<&Path>) -> Result<(PathBuf, Settings)> {
    let path = settings::resolve_path(config)?;
    let settings = settings::load(&path)?;
    Ok((path, settings))
}
