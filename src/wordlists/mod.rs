//! Word lists
//!
//! Lists compiled into the binary, plus helpers for loading custom lists and
//! drawing random targets.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Pick a target uniformly from `answers`
///
/// Returns `None` for an empty list.
pub fn choose_target<'a, R: Rng + ?Sized>(answers: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    answers.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn lists_hold_five_letter_lowercase_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed: std::collections::HashSet<_> = ALLOWED.iter().collect();
        for answer in ANSWERS {
            assert!(allowed.contains(&answer), "Answer '{answer}' not in allowed list");
        }
    }

    #[test]
    fn default_openers_are_allowed() {
        for opener in crate::episode::DEFAULT_OPENERS {
            assert!(ALLOWED.contains(opener), "Opener '{opener}' not in allowed list");
        }
    }

    #[test]
    fn choose_target_draws_from_list() {
        let answers = loader::words_from_slice(&ANSWERS[..20]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let target = choose_target(&answers, &mut rng).unwrap();
            assert!(answers.contains(target));
        }
        assert!(choose_target(&[], &mut rng).is_none());
    }
}
