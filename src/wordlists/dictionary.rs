//! Dictionary-backed word-validity oracle

use super::loader::{load_from_file, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::core::{Word, WordOracle};
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Set of accepted guesses
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Every embedded allowed word
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(ALLOWED))
    }

    /// Only the embedded secret candidates
    #[must_use]
    pub fn answers_only() -> Self {
        Self::from_words(words_from_slice(ANSWERS))
    }

    /// Load a one-word-per-line dictionary file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::from_words)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordOracle for Dictionary {
    fn is_valid(&self, word: &Word) -> bool {
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn embedded_dictionary_accepts_known_words() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), ALLOWED.len());
        assert!(dictionary.is_valid(&word("crane")));
        assert!(dictionary.is_valid(&word("lolly")));
        assert!(!dictionary.is_valid(&word("xqzvk")));
    }

    #[test]
    fn answers_only_is_smaller() {
        let answers = Dictionary::answers_only();
        assert_eq!(answers.len(), ANSWERS.len());
        assert!(answers.len() <= Dictionary::embedded().len());
    }

    #[test]
    fn from_words_deduplicates() {
        let dictionary = Dictionary::from_words([word("crane"), word("CRANE"), word("slate")]);
        assert_eq!(dictionary.len(), 2);
        assert!(!dictionary.is_empty());
        assert!(Dictionary::default().is_empty());
    }
}
