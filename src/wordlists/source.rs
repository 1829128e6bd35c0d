//! Word sources for picking round secrets

use super::ANSWERS;
use crate::core::{SourceError, Word, WordSource};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Secret used when a source fails or yields a malformed word
pub const FALLBACK_SECRET: &str = "apple";

pub(crate) const FALLBACK_WORD: Word = Word::from_lowercase_bytes(*b"apple");

/// Uniform random pick from a word list
#[derive(Debug, Clone)]
pub struct RandomSource {
    words: Vec<String>,
    rng: StdRng,
}

impl RandomSource {
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source for reproducible games
    #[must_use]
    pub fn with_seed(words: Vec<String>, seed: u64) -> Self {
        Self {
            words,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Random pick from the embedded answer list
    #[must_use]
    pub fn answers() -> Self {
        Self::new(answer_list())
    }

    /// Seeded pick from the embedded answer list
    #[must_use]
    pub fn answers_seeded(seed: u64) -> Self {
        Self::with_seed(answer_list(), seed)
    }
}

fn answer_list() -> Vec<String> {
    ANSWERS.iter().map(|&w| w.to_string()).collect()
}

impl WordSource for RandomSource {
    fn fetch(&mut self) -> Result<String, SourceError> {
        self.words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SourceError::Empty)
    }
}

/// Always yields the same word
#[derive(Debug, Clone)]
pub struct FixedSource(String);

impl FixedSource {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }
}

impl WordSource for FixedSource {
    fn fetch(&mut self) -> Result<String, SourceError> {
        Ok(self.0.clone())
    }
}
