//! User interaction helpers for strongpass.
//!
//! This module centralizes terminal prompting and clipboard access. No
//! composition logic lives here.

use std::io::{self, BufRead, Write};
use std::thread::JoinHandle;
use std::time::Duration;

use clipboard::{ClipboardContext, ClipboardProvider};

use crate::error::AppError;

/// Seconds a copied password stays on the clipboard.
pub const CLIPBOARD_CLEAR_SECS: u64 = 10;

/// Print `prompt` and read one line. Returns `None` on end of input.
pub fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Copy `text` to the clipboard and clear it after `secs` seconds if it
/// still holds the same value.
///
/// The returned handle belongs to the clearing thread. Callers that exit
/// right after copying should join it so the value stays available.
pub fn copy_to_clipboard_with_timeout(text: &str, secs: u64) -> Result<JoinHandle<()>, AppError> {
    let mut ctx: ClipboardContext = ClipboardProvider::new()
        .map_err(|e| AppError::Clipboard(format!("init: {}", e)))?;

    ctx.set_contents(text.to_string())
        .map_err(|e| AppError::Clipboard(format!("set: {}", e)))?;

    tracing::debug!(secs, "copied to clipboard");

    let text = zeroize::Zeroizing::new(text.to_string());
    let handle = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_secs(secs));

        let ctx2_result: Result<ClipboardContext, _> = ClipboardProvider::new();
        match ctx2_result {
            Ok(mut ctx2) => {
                clear_if_holding(&mut ctx2, &text);
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable; copied password was not cleared")
            }
        }
    });

    Ok(handle)
}

/// Empty the clipboard if it still holds `text`. Returns whether it was
/// cleared.
fn clear_if_holding<C: ClipboardProvider>(ctx: &mut C, text: &str) -> bool {
    let current_result: Result<String, _> = ctx.get_contents();
    if current_result.ok().as_deref() != Some(text) {
        return false;
    }
    match ctx.set_contents(String::new()) {
        Ok(()) => {
            tracing::debug!("clipboard cleared");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to clear clipboard");
            false
        }
    }
}
