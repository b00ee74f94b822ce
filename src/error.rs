//! Error types for strongpass.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Text shown in place of a password when no character class is enabled.
pub const NO_CLASS_SENTINEL: &str = "Select a Character Set!";

/// Failure of the password composer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// The request enabled no character class.
    #[error("{}", NO_CLASS_SENTINEL)]
    InvalidRequest,
}

/// Errors raised by the presentation shell around the composer.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error("I/O error on {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Invalid settings file {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not determine the user configuration directory")]
    NoConfigDir,

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
