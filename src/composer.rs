//! Password composition.
//!
//! A password is built from one mandatory character per enabled class plus
//! characters drawn with replacement from the pool of all enabled alphabets.
//! The combined sequence is shuffled so the mandatory characters do not sit
//! at predictable positions.
//!
//! The entropy source is supplied by the caller. Production code passes
//! `OsRng`; tests pass a seeded `StdRng`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::charset::{CharacterClass, ClassSet};
use crate::error::ComposeError;

/// What to do when the requested length is below the number of enabled
/// classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LengthPolicy {
    /// Keep every mandatory character; the result may be longer than asked.
    #[default]
    Extend,
    /// Keep a random subset of mandatory characters; never exceed `length`.
    Clamp,
}

/// An immutable snapshot of everything needed to compose one password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub classes: ClassSet,
    pub length: usize,
    pub exclude_ambiguous: bool,
    pub length_policy: LengthPolicy,
}

impl GenerationRequest {
    pub fn new(classes: ClassSet, length: usize) -> Self {
        Self {
            classes,
            length,
            exclude_ambiguous: false,
            length_policy: LengthPolicy::Extend,
        }
    }

    pub fn exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }

    pub fn length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    /// Alphabet of a single class under this request's filters.
    fn alphabet(&self, class: CharacterClass) -> Vec<u8> {
        class.filtered_alphabet(self.exclude_ambiguous)
    }
}

/// Compose a password for `request`, drawing randomness from `rng`.
///
/// Returns `ComposeError::InvalidRequest` when no class is enabled. With
/// `LengthPolicy::Extend` and `length < classes.len()` the result has one
/// character per class, so it is longer than `length`.
pub fn generate<R>(request: &GenerationRequest, rng: &mut R) -> Result<String, ComposeError>
where
    R: Rng + ?Sized,
{
    if request.classes.is_empty() {
        return Err(ComposeError::InvalidRequest);
    }

    let mut pool = Vec::new();
    let mut chars = Vec::with_capacity(request.classes.len());

    for class in request.classes.iter() {
        let alphabet = request.alphabet(class);
        chars.extend(alphabet.choose(rng).copied());
        pool.extend_from_slice(&alphabet);
    }

    if request.length_policy == LengthPolicy::Clamp && chars.len() > request.length {
        chars.shuffle(rng);
        chars.truncate(request.length);
    }

    let remaining = request.length.saturating_sub(request.classes.len());
    for _ in 0..remaining {
        chars.extend(pool.choose(rng).copied());
    }

    chars.shuffle(rng);

    tracing::debug!(
        classes = request.classes.len(),
        requested = request.length,
        produced = chars.len(),
        policy = ?request.length_policy,
        "composed password"
    );

    Ok(chars.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::AMBIGUOUS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn belongs_to_any(classes: &ClassSet, c: char) -> bool {
        classes.iter().any(|class| class.contains(c))
    }

    fn all_non_empty_sets() -> Vec<ClassSet> {
        (1u8..16)
            .map(|bits| {
                ClassSet::from_flags(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0)
            })
            .collect()
    }

    #[test]
    fn empty_class_set_is_invalid_for_any_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for length in [0, 1, 16, 64] {
            let request = GenerationRequest::new(ClassSet::default(), length);
            assert_eq!(generate(&request, &mut rng), Err(ComposeError::InvalidRequest));
        }
    }

    #[test]
    fn result_has_requested_length_when_length_covers_classes() {
        let mut rng = StdRng::seed_from_u64(7);
        for classes in all_non_empty_sets() {
            for length in classes.len()..=40 {
                let request = GenerationRequest::new(classes.clone(), length);
                let pwd = generate(&request, &mut rng).unwrap();
                assert_eq!(pwd.chars().count(), length);
            }
        }
    }

    #[test]
    fn short_length_yields_one_char_per_class() {
        let mut rng = StdRng::seed_from_u64(11);
        for classes in all_non_empty_sets() {
            for length in 0..classes.len() {
                let request = GenerationRequest::new(classes.clone(), length);
                let pwd = generate(&request, &mut rng).unwrap();
                assert_eq!(pwd.len(), classes.len());
                for class in classes.iter() {
                    assert_eq!(pwd.chars().filter(|&c| class.contains(c)).count(), 1);
                }
            }
        }
    }

    #[test]
    fn clamp_policy_never_exceeds_length() {
        let mut rng = StdRng::seed_from_u64(13);
        let classes = ClassSet::all();
        for length in 0..=8 {
            let request =
                GenerationRequest::new(classes.clone(), length).length_policy(LengthPolicy::Clamp);
            let pwd = generate(&request, &mut rng).unwrap();
            assert_eq!(pwd.len(), length);
            let distinct = classes
                .iter()
                .filter(|class| pwd.chars().any(|c| class.contains(c)))
                .count();
            assert_eq!(distinct, length.min(classes.len()));
        }
    }

    #[test]
    fn every_character_comes_from_an_enabled_class() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for classes in all_non_empty_sets() {
                let pwd = generate(&GenerationRequest::new(classes.clone(), 24), &mut rng).unwrap();
                assert!(pwd.chars().all(|c| belongs_to_any(&classes, c)), "{pwd:?}");
            }
        }
    }

    #[test]
    fn every_enabled_class_is_represented() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for classes in all_non_empty_sets() {
                let request = GenerationRequest::new(classes.clone(), classes.len());
                let pwd = generate(&request, &mut rng).unwrap();
                for class in classes.iter() {
                    assert!(pwd.chars().any(|c| class.contains(c)), "{class} missing in {pwd:?}");
                }
            }
        }
    }

    #[test]
    fn digits_only() {
        let mut rng = StdRng::seed_from_u64(3);
        let request = GenerationRequest::new(ClassSet::from_flags(false, false, true, false), 4);
        let pwd = generate(&request, &mut rng).unwrap();
        assert_eq!(pwd.len(), 4);
        assert!(pwd.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn all_classes_sixteen_chars() {
        let mut rng = StdRng::seed_from_u64(42);
        let pwd = generate(&GenerationRequest::new(ClassSet::all(), 16), &mut rng).unwrap();
        assert_eq!(pwd.len(), 16);
        assert!(pwd.chars().any(|c| c.is_ascii_uppercase()));
        assert!(pwd.chars().any(|c| c.is_ascii_lowercase()));
        assert!(pwd.chars().any(|c| c.is_ascii_digit()));
        assert!(pwd.chars().any(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn upper_and_symbol_with_length_one_overruns() {
        let mut rng = StdRng::seed_from_u64(5);
        let request = GenerationRequest::new(ClassSet::from_flags(true, false, false, true), 1);
        let pwd = generate(&request, &mut rng).unwrap();
        assert_eq!(pwd.len(), 2);
        assert_eq!(pwd.chars().filter(|c| c.is_ascii_uppercase()).count(), 1);
        assert_eq!(pwd.chars().filter(|c| c.is_ascii_punctuation()).count(), 1);
    }

    #[test]
    fn ambiguous_characters_can_be_excluded() {
        let mut rng = StdRng::seed_from_u64(9);
        let request = GenerationRequest::new(ClassSet::all(), 64).exclude_ambiguous(true);
        for _ in 0..100 {
            let pwd = generate(&request, &mut rng).unwrap();
            assert!(pwd.bytes().all(|c| !AMBIGUOUS.contains(&c)));
        }
    }

    #[test]
    fn mandatory_characters_are_not_positionally_fixed() {
        // Uppercase is drawn first; after shuffling it should lead about half the time.
        let request = GenerationRequest::new(ClassSet::from_flags(true, false, true, false), 2);
        let trials = 2000;
        let mut upper_first = 0;
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..trials {
            let pwd = generate(&request, &mut rng).unwrap();
            if pwd.starts_with(|c: char| c.is_ascii_uppercase()) {
                upper_first += 1;
            }
        }
        let ratio = upper_first as f64 / trials as f64;
        assert!((0.4..0.6).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn long_single_class_password() {
        let mut rng = StdRng::seed_from_u64(21);
        let request = GenerationRequest::new(ClassSet::from_flags(false, true, false, false), 4096);
        let pwd = generate(&request, &mut rng).unwrap();
        assert_eq!(pwd.len(), 4096);
        assert!(pwd.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn filtered_alphabets_still_yield_mandatory_characters() {
        let mut rng = StdRng::seed_from_u64(23);
        let request = GenerationRequest::new(ClassSet::from_flags(true, false, true, false), 2)
            .exclude_ambiguous(true);
        for _ in 0..200 {
            let pwd = generate(&request, &mut rng).unwrap();
            assert_eq!(pwd.len(), 2);
            assert!(pwd.chars().any(|c| c.is_ascii_uppercase() && c != 'I' && c != 'O'));
            assert!(pwd.chars().any(|c| c.is_ascii_digit() && c != '1' && c != '0'));
        }
    }

    #[test]
    fn same_seed_same_password() {
        let request = GenerationRequest::new(ClassSet::all(), 20);
        let a = generate(&request, &mut StdRng::seed_from_u64(77)).unwrap();
        let b = generate(&request, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }
}
