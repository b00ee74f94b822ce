//! Command-line interface definitions for strongpass.
//!
//! This module describes how users interact with the program from the
//! terminal. It contains no application logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "strongpass",
    version,
    about = "Generate strong random passwords",
    long_about = r#"
strongpass generates random passwords from the character classes you pick
(uppercase, lowercase, digits, symbols). Every enabled class appears at least
once in each password, and the characters are shuffled so their positions
are unpredictable.

Typical usage:
  strongpass gen
  strongpass gen --length 24 --no-symbols --copy
  strongpass shell
  strongpass config set --length 20 --symbols false

Generated passwords are printed or copied, never stored or logged.
"#
)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Settings file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate random passwords
    ///
    /// Options not given on the command line come from the settings file.
    /// By default, generates one 16-character password using uppercase,
    /// lowercase, digits, and symbols.
    Gen(GenArgs),

    /// Interactive generator
    ///
    /// Shows a password, lets you adjust the length and character classes,
    /// regenerate, and copy the result to the clipboard.
    Shell,

    /// Show or change the saved defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// About strongpass
    About,
}

#[derive(Args, Clone, Debug)]
pub struct GenArgs {
    /// Length of the generated password (0–4096)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(0..=4096))]
    pub length: Option<u16>,

    /// Exclude uppercase characters (A–Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude lowercase characters (a–z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude digits (0–9)
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols (e.g. !@#$%)
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude ambiguous characters like 'I', 'l', '1', 'O', '0'
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Never output more characters than --length, even if some classes
    /// then go unrepresented
    #[arg(long)]
    pub strict_length: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for a reproducible (and therefore not secret) sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Copy the last generated password to the clipboard for 10 seconds
    #[arg(short, long)]
    pub copy: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current settings and their location
    Show,

    /// Change one or more settings and save them
    Set(SetArgs),

    /// Restore the built-in defaults
    Reset,
}

#[derive(Args, Clone, Debug, Default)]
pub struct SetArgs {
    /// Default password length (2–64)
    #[arg(long, value_parser = clap::value_parser!(u16).range(2..=64))]
    pub length: Option<u16>,

    /// Include uppercase characters
    #[arg(long, value_name = "BOOL")]
    pub uppercase: Option<bool>,

    /// Include lowercase characters
    #[arg(long, value_name = "BOOL")]
    pub lowercase: Option<bool>,

    /// Include digits
    #[arg(long, value_name = "BOOL")]
    pub digits: Option<bool>,

    /// Include symbols
    #[arg(long, value_name = "BOOL")]
    pub symbols: Option<bool>,

    /// Exclude ambiguous characters
    #[arg(long, value_name = "BOOL")]
    pub exclude_ambiguous: Option<bool>,

    /// Never output more characters than the length
    #[arg(long, value_name = "BOOL")]
    pub strict_length: Option<bool>,
}
