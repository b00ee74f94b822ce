//! Persisted default selection.
//!
//! Settings are stored as pretty-printed JSON in the user configuration
//! directory. They describe how passwords are generated (length, classes,
//! filters) and never contain a generated password.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::charset::{CharacterClass, ClassSet};
use crate::composer::LengthPolicy;
use crate::error::AppError;
use crate::selection::{Selection, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};

const APP_DIR: &str = "strongpass";
const FILE_NAME: &str = "settings.json";

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Password length used when none is given on the command line
    #[serde(default = "default_length")]
    pub length: usize,

    #[serde(default = "enabled")]
    pub uppercase: bool,

    #[serde(default = "enabled")]
    pub lowercase: bool,

    #[serde(default = "enabled")]
    pub digits: bool,

    #[serde(default = "enabled")]
    pub symbols: bool,

    /// Drop `I`, `l`, `1`, `O`, `0` from every alphabet
    #[serde(default)]
    pub exclude_ambiguous: bool,

    /// Never return more characters than requested
    #[serde(default)]
    pub strict_length: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
            strict_length: false,
        }
    }
}

impl Settings {
    pub fn classes(&self) -> ClassSet {
        ClassSet::from_flags(self.uppercase, self.lowercase, self.digits, self.symbols)
    }

    pub fn length_policy(&self) -> LengthPolicy {
        if self.strict_length {
            LengthPolicy::Clamp
        } else {
            LengthPolicy::Extend
        }
    }

    /// Build the interactive selection, repairing an empty class set.
    pub fn to_selection(&self) -> Selection {
        let mut classes = self.classes();
        if classes.is_empty() {
            tracing::warn!("settings enable no character class; enabling all");
            classes = ClassSet::all();
        }
        Selection::new(classes, self.length)
            .with_exclude_ambiguous(self.exclude_ambiguous)
            .with_length_policy(self.length_policy())
    }

    /// Capture an interactive selection so it can be saved.
    pub fn from_selection(selection: &Selection) -> Self {
        let request = selection.request();
        let has = |class: CharacterClass| request.classes.contains(class);
        Self {
            length: request.length,
            uppercase: has(CharacterClass::Uppercase),
            lowercase: has(CharacterClass::Lowercase),
            digits: has(CharacterClass::Digit),
            symbols: has(CharacterClass::Symbol),
            exclude_ambiguous: request.exclude_ambiguous,
            strict_length: request.length_policy == LengthPolicy::Clamp,
        }
    }
}

/// Default location of the settings file.
pub fn default_path() -> Result<PathBuf, AppError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or(AppError::NoConfigDir)
}

/// Resolve an explicit `--config` path or fall back to the default.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, AppError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_path(),
    }
}

/// Load settings from disk. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<Settings, AppError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(?path, "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(AppError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut settings: Settings = serde_json::from_str(&data).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let clamped = settings.length.clamp(MIN_LENGTH, MAX_LENGTH);
    if clamped != settings.length {
        tracing::warn!(?path, length = settings.length, clamped, "settings length out of range");
        settings.length = clamped;
    }
    Ok(settings)
}

/// Save settings to disk, creating the parent directory if needed.
pub fn save(path: &Path, settings: &Settings) -> Result<(), AppError> {
    let io_err = |source: std::io::Error| AppError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let json = serde_json::to_string_pretty(settings).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(io_err)?;
    tracing::debug!(?path, "settings saved");
    Ok(())
}
