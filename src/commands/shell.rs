//! Interactive password generator.
//!
//! A line-oriented front end over `Selection`: one password is shown on
//! start, and each command adjusts the selection, regenerates, or copies.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use anyhow::Result;
use rand::rngs::OsRng;
use rand::Rng;

use crate::charset::CharacterClass;
use crate::composer::LengthPolicy;
use crate::selection::{Selection, MAX_LENGTH, MIN_LENGTH};
use crate::settings::{self, Settings};
use crate::ui;

const HELP: &str = "\
Commands:
  g, generate        generate a new password
  c, copy            copy the shown password (cleared after 10 seconds)
  l, length <n>      set the length (2-64)
  upper | lower | digits | symbols
                     toggle a character class
  a, ambiguous       toggle excluding I l 1 O 0
  strict             toggle never exceeding the length
  show               show the current options
  save               save the options as defaults
  about              about strongpass
  h, help            this help
  q, quit            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate,
    Copy,
    Length(usize),
    Toggle(CharacterClass),
    Ambiguous,
    Strict,
    Show,
    Save,
    About,
    Help,
    Quit,
}

/// Parse one input line into an action.
pub fn parse(line: &str) -> Result<Action, String> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(Action::Generate);
    };
    let action = match word.to_lowercase().as_str() {
        "g" | "gen" | "generate" => Action::Generate,
        "c" | "copy" => Action::Copy,
        "l" | "len" | "length" => {
            let value = words
                .next()
                .ok_or_else(|| format!("usage: length <{}-{}>", MIN_LENGTH, MAX_LENGTH))?;
            let n: usize = value
                .parse()
                .map_err(|_| format!("'{}' is not a number", value))?;
            Action::Length(n)
        }
        "u" | "upper" | "uppercase" => Action::Toggle(CharacterClass::Uppercase),
        "lower" | "lowercase" => Action::Toggle(CharacterClass::Lowercase),
        "d" | "digits" | "numbers" => Action::Toggle(CharacterClass::Digit),
        "s" | "symbols" => Action::Toggle(CharacterClass::Symbol),
        "a" | "ambiguous" => Action::Ambiguous,
        "strict" => Action::Strict,
        "show" | "options" => Action::Show,
        "save" => Action::Save,
        "about" => Action::About,
        "h" | "help" | "?" => Action::Help,
        "q" | "quit" | "exit" => Action::Quit,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };
    Ok(action)
}

pub fn run(config: Option<&Path>) -> Result<()> {
    let (path, settings) = super::load_settings(config)?;
    let mut shell = Shell::new(settings.to_selection(), path);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    shell.execute(&Action::Generate, &mut OsRng, &mut out)?;
    writeln!(out, "Type 'help' for commands.")?;
    drop(out);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    while let Some(line) = ui::prompt_line(&mut input, "> ")? {
        let mut out = io::stdout().lock();
        match parse(&line) {
            Ok(action) => {
                if !shell.execute(&action, &mut OsRng, &mut out)? {
                    break;
                }
            }
            Err(msg) => writeln!(out, "{}", msg)?,
        }
    }

    shell.finish(&mut io::stdout().lock())?;
    Ok(())
}

pub struct Shell {
    selection: Selection,
    settings_path: PathBuf,
    pending_clear: Option<JoinHandle<()>>,
}

impl Shell {
    pub fn new(selection: Selection, settings_path: PathBuf) -> Self {
        Self {
            selection,
            settings_path,
            pending_clear: None,
        }
    }

    /// Wait for a pending clipboard clear so a copied password does not
    /// outlive the shell.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(handle) = self.pending_clear.take() else {
            return Ok(());
        };
        if !handle.is_finished() {
            writeln!(out, "Waiting for the clipboard to clear...")?;
            out.flush()?;
        }
        if handle.join().is_err() {
            tracing::warn!("clipboard clearing thread panicked");
        }
        Ok(())
    }

    /// Run one action. Returns `false` when the shell should exit.
    pub fn execute<R, W>(&mut self, action: &Action, rng: &mut R, out: &mut W) -> Result<bool>
    where
        R: Rng + ?Sized,
        W: Write,
    {
        match action {
            Action::Generate => match self.selection.regenerate(rng) {
                Ok(pwd) => writeln!(out, "{}", pwd)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Action::Copy => match self.selection.copyable() {
                Some(pwd) => match ui::copy_to_clipboard_with_timeout(pwd, ui::CLIPBOARD_CLEAR_SECS)
                {
                    Ok(handle) => {
                        // The newest timer supersedes older ones; they only clear
                        // their own value.
                        self.pending_clear = Some(handle);
                        writeln!(out, "Copied to clipboard!")?;
                    }
                    Err(e) => writeln!(out, "Failed to copy to clipboard: {}", e)?,
                },
                None => writeln!(out, "Nothing to copy.")?,
            },
            Action::Length(n) => {
                let applied = self.selection.set_length(*n);
                writeln!(out, "Length: {}", applied)?;
            }
            Action::Toggle(class) => {
                if self.selection.toggle(*class) {
                    let state = if self.selection.is_enabled(*class) { "on" } else { "off" };
                    writeln!(out, "{}: {}", class.label(), state)?;
                } else {
                    writeln!(out, "At least one character set must stay selected.")?;
                }
            }
            Action::Ambiguous => {
                let on = self.selection.toggle_ambiguous();
                writeln!(out, "Exclude ambiguous: {}", if on { "on" } else { "off" })?;
            }
            Action::Strict => {
                let policy = self.selection.toggle_strict_length();
                let on = policy == LengthPolicy::Clamp;
                writeln!(out, "Strict length: {}", if on { "on" } else { "off" })?;
            }
            Action::Show => self.show(out)?,
            Action::Save => {
                settings::save(&self.settings_path, &Settings::from_selection(&self.selection))?;
                writeln!(out, "Saved to {}", self.settings_path.display())?;
            }
            Action::About => writeln!(out, "{}", super::about::text())?,
            Action::Help => writeln!(out, "{}", HELP)?,
            Action::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Length: {}", self.selection.length())?;
        for class in CharacterClass::ALL {
            let mark = if self.selection.is_enabled(class) { "x" } else { " " };
            writeln!(out, "[{}] {}", mark, class.label())?;
        }
        writeln!(
            out,
            "[{}] Exclude ambiguous (I l 1 O 0)",
            if self.selection.exclude_ambiguous() { "x" } else { " " }
        )?;
        writeln!(
            out,
            "[{}] Strict length",
            if self.selection.length_policy() == LengthPolicy::Clamp { "x" } else { " " }
        )
    }
}
