//! Interactive selection state.
//!
//! Holds the toggles, length, and last displayed result of the interactive
//! shell. The selection always keeps at least one class enabled and a length
//! within `MIN_LENGTH..=MAX_LENGTH`; it is turned into an immutable
//! `GenerationRequest` each time a password is composed.

use rand::Rng;
use zeroize::Zeroizing;

use crate::charset::{CharacterClass, ClassSet};
use crate::composer::{self, GenerationRequest, LengthPolicy};
use crate::error::{ComposeError, NO_CLASS_SENTINEL};

pub const MIN_LENGTH: usize = 2;
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LENGTH: usize = 16;

/// What the shell currently shows in place of a password.
#[derive(Debug, Default)]
pub enum Shown {
    #[default]
    Nothing,
    Password(Zeroizing<String>),
    Invalid,
}

impl Shown {
    pub fn as_text(&self) -> &str {
        match self {
            Shown::Nothing => "",
            Shown::Password(pwd) => pwd.as_str(),
            Shown::Invalid => NO_CLASS_SENTINEL,
        }
    }
}

#[derive(Debug)]
pub struct Selection {
    classes: ClassSet,
    length: usize,
    exclude_ambiguous: bool,
    length_policy: LengthPolicy,
    shown: Shown,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(ClassSet::all(), DEFAULT_LENGTH)
    }
}

impl Selection {
    /// Empty `classes` are replaced by every class.
    pub fn new(classes: ClassSet, length: usize) -> Self {
        let classes = if classes.is_empty() { ClassSet::all() } else { classes };
        Self {
            classes,
            length: clamp_length(length),
            exclude_ambiguous: false,
            length_policy: LengthPolicy::Extend,
            shown: Shown::Nothing,
        }
    }

    pub fn with_exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }

    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.classes.contains(class)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn exclude_ambiguous(&self) -> bool {
        self.exclude_ambiguous
    }

    pub fn length_policy(&self) -> LengthPolicy {
        self.length_policy
    }

    /// Flip `class`. Returns `false` when the flip was refused because it
    /// would have disabled the last enabled class.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        if self.classes.contains(class) {
            if self.classes.len() == 1 {
                tracing::debug!(%class, "refusing to disable the last class");
                return false;
            }
            self.classes.remove(class);
        } else {
            self.classes.insert(class);
        }
        true
    }

    /// Set the length, clamped into range. Returns the applied value.
    pub fn set_length(&mut self, length: usize) -> usize {
        self.length = clamp_length(length);
        self.length
    }

    pub fn toggle_ambiguous(&mut self) -> bool {
        self.exclude_ambiguous = !self.exclude_ambiguous;
        self.exclude_ambiguous
    }

    pub fn toggle_strict_length(&mut self) -> LengthPolicy {
        self.length_policy = match self.length_policy {
            LengthPolicy::Extend => LengthPolicy::Clamp,
            LengthPolicy::Clamp => LengthPolicy::Extend,
        };
        self.length_policy
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.classes.clone(), self.length)
            .exclude_ambiguous(self.exclude_ambiguous)
            .length_policy(self.length_policy)
    }

    /// Compose a fresh password and show it, replacing (and wiping) the
    /// previous one.
    pub fn regenerate<R>(&mut self, rng: &mut R) -> Result<&str, ComposeError>
    where
        R: Rng + ?Sized,
    {
        match composer::generate(&self.request(), rng) {
            Ok(pwd) => {
                self.shown = Shown::Password(Zeroizing::new(pwd));
                Ok(self.shown.as_text())
            }
            Err(e) => {
                self.shown = Shown::Invalid;
                Err(e)
            }
        }
    }

    /// The password that may be copied, if one is shown.
    pub fn copyable(&self) -> Option<&str> {
        match &self.shown {
            Shown::Password(pwd) if !pwd.is_empty() => Some(pwd.as_str()),
            _ => None,
        }
    }
}

fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}
