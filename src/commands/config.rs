//! Show, change, or reset the saved defaults.

use std::path::Path;

use anyhow::{bail, Result};

use crate::cli::{ConfigAction, SetArgs};
use crate::error::NO_CLASS_SENTINEL;
use crate::settings::{self, Settings};

pub fn run(action: ConfigAction, config: Option<&Path>) -> Result<()> {
    let (path, current) = super::load_settings(config)?;

    match action {
        ConfigAction::Show => {
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(&current)?);
        }
        ConfigAction::Set(args) => {
            let updated = apply(current, &args)?;
            settings::save(&path, &updated)?;
            println!("Saved to {}", path.display());
        }
        ConfigAction::Reset => {
            settings::save(&path, &Settings::default())?;
            println!("Defaults restored in {}", path.display());
        }
    }
    Ok(())
}

/// Apply the given changes. Refuses to save a selection with no class.
pub(crate) fn apply(mut settings: Settings, args: &SetArgs) -> Result<Settings> {
    if let Some(length) = args.length {
        settings.length = usize::from(length);
    }
    if let Some(on) = args.uppercase {
        settings.uppercase = on;
    }
    if let Some(on) = args.lowercase {
        settings.lowercase = on;
    }
    if let Some(on) = args.digits {
        settings.digits = on;
    }
    if let Some(on) = args.symbols {
        settings.symbols = on;
    }
    if let Some(on) = args.exclude_ambiguous {
        settings.exclude_ambiguous = on;
    }
    if let Some(on) = args.strict_length {
        settings.strict_length = on;
    }

    if settings.classes().is_empty() {
        bail!(NO_CLASS_SENTINEL);
    }
    Ok(settings)
}
