//! Generate random passwords.

use std::path::Path;

use anyhow::Result;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::charset::ClassSet;
use crate::cli::GenArgs;
use crate::composer::{self, GenerationRequest, LengthPolicy};
use crate::error::ComposeError;
use crate::settings::Settings;
use crate::ui;

pub fn run(args: GenArgs, config: Option<&Path>) -> Result<()> {
    let (_, settings) = super::load_settings(config)?;
    let request = build_request(&args, &settings);
    if request.classes.is_empty() {
        return Err(ComposeError::InvalidRequest.into());
    }

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => {
            tracing::warn!("using a fixed seed; output is reproducible");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(OsRng),
    };

    let mut last = None;
    for _ in 0..args.count {
        let pwd = zeroize::Zeroizing::new(composer::generate(&request, &mut *rng)?);
        println!("{}", pwd.as_str());
        last = Some(pwd);
    }

    if args.copy {
        match last {
            Some(pwd) => copy_and_wait(&pwd),
            None => eprintln!("Nothing to copy."),
        }
    }

    Ok(())
}

/// Merge command-line flags over the saved settings.
pub(crate) fn build_request(args: &GenArgs, settings: &Settings) -> GenerationRequest {
    let classes = ClassSet::from_flags(
        settings.uppercase && !args.no_uppercase,
        settings.lowercase && !args.no_lowercase,
        settings.digits && !args.no_digits,
        settings.symbols && !args.no_symbols,
    );
    let policy = if args.strict_length || settings.strict_length {
        LengthPolicy::Clamp
    } else {
        LengthPolicy::Extend
    };

    GenerationRequest::new(classes, args.length.map(usize::from).unwrap_or(settings.length))
        .exclude_ambiguous(args.exclude_ambiguous || settings.exclude_ambiguous)
        .length_policy(policy)
}

fn copy_and_wait(pwd: &str) {
    match ui::copy_to_clipboard_with_timeout(pwd, ui::CLIPBOARD_CLEAR_SECS) {
        Ok(handle) => {
            eprintln!(
                "Copied to clipboard! Clearing in {} seconds.",
                ui::CLIPBOARD_CLEAR_SECS
            );
            if handle.join().is_err() {
                tracing::warn!("clipboard clearing thread panicked");
            }
        }
        Err(e) => eprintln!("Failed to copy to clipboard: {}", e),
    }
}
