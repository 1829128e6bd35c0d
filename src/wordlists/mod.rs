//! Word lists and local collaborators
//!
//! Embedded lists compiled in by the build script, a file loader, the
//! dictionary oracle and the word sources used to pick secrets.

mod dictionary;
mod embedded;
pub mod loader;
mod source;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub(crate) use source::FALLBACK_WORD;
pub use source::{FALLBACK_SECRET, FixedSource, RandomSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn lists_contain_valid_words() {
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
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for answer in ANSWERS {
            assert!(
                allowed_set.contains(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn fallback_secret_is_an_answer() {
        assert!(ANSWERS.contains(&FALLBACK_SECRET));
    }
}
