//! Character classes and their alphabets.
//!
//! Each class maps to a fixed, non-empty ASCII alphabet. A `ClassSet` holds
//! the enabled classes in canonical order (uppercase, lowercase, digits,
//! symbols), which is also the order mandatory characters are drawn in.

use std::collections::BTreeSet;
use std::fmt;

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters that are easy to confuse when read back.
pub const AMBIGUOUS: &[u8] = b"Il1O0";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// Full alphabet of the class.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPER,
            CharacterClass::Lowercase => LOWER,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Alphabet of the class, optionally without ambiguous characters.
    ///
    /// Never empty: every class keeps most of its characters after filtering.
    pub fn filtered_alphabet(self, exclude_ambiguous: bool) -> Vec<u8> {
        self.alphabet()
            .iter()
            .copied()
            .filter(|c| !exclude_ambiguous || !AMBIGUOUS.contains(c))
            .collect()
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Digit => "Numbers (0-9)",
            CharacterClass::Symbol => "Symbols (!@#$%^)",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digits",
            CharacterClass::Symbol => "symbols",
        };
        f.write_str(name)
    }
}

/// Ordered, duplicate-free set of enabled classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet(BTreeSet<CharacterClass>);

impl ClassSet {
    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    /// Build a set from the four on/off switches used by the CLI and settings.
    pub fn from_flags(upper: bool, lower: bool, digits: bool, symbols: bool) -> Self {
        let flags = [upper, lower, digits, symbols];
        CharacterClass::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(class, on)| on.then_some(class))
            .collect()
    }

    pub fn insert(&mut self, class: CharacterClass) -> bool {
        self.0.insert(class)
    }

    pub fn remove(&mut self, class: CharacterClass) -> bool {
        self.0.remove(&class)
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0.contains(&class)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Classes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_ascii_punctuation() {
        let symbols = CharacterClass::Symbol.alphabet();
        assert_eq!(symbols.len(), 32);
        assert!(symbols.iter().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn ambiguous_filter_keeps_every_class_non_empty() {
        for class in CharacterClass::ALL {
            let filtered = class.filtered_alphabet(true);
            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|c| !AMBIGUOUS.contains(c)));
        }
        assert_eq!(CharacterClass::Digit.filtered_alphabet(true).len(), 8);
        assert_eq!(CharacterClass::Uppercase.filtered_alphabet(false).len(), 26);
    }

    #[test]
    fn from_flags_keeps_canonical_order() {
        let set = ClassSet::from_flags(false, true, false, true);
        let classes: Vec<_> = set.iter().collect();
        assert_eq!(classes, vec![CharacterClass::Lowercase, CharacterClass::Symbol]);
        assert!(ClassSet::from_flags(false, false, false, false).is_empty());
    }
}
