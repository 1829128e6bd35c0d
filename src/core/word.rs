//! Wordle word representation
//!
//! A Word is a validated 5-letter lowercase ASCII word. Secrets and guesses
//! share this type so length and alphabet are guaranteed by construction.

use super::GuessError;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every secret and guess
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
///
/// Stored as lowercase ASCII bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    chars: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Upper-case ASCII letters are normalised to lower case.
    ///
    /// # Errors
    /// - `GuessError::InvalidLength` if the input is not exactly 5 characters
    /// - `GuessError::InvalidAlphabet` on the first character outside a-z
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, GuessError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(GuessError::InvalidLength(len));
        }

        let mut chars = [0u8; WORD_LENGTH];
        for (slot, ch) in chars.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(GuessError::InvalidAlphabet(ch));
            }
            *slot = ch.to_ascii_lowercase() as u8;
        }

        Ok(Self { chars })
    }

    /// Build a word from bytes in a const context
    ///
    /// An invalid byte fails const evaluation, so constants built this way
    /// are checked at compile time.
    pub(crate) const fn from_lowercase_bytes(chars: [u8; WORD_LENGTH]) -> Self {
        let mut i = 0;
        while i < WORD_LENGTH {
            assert!(chars[i].is_ascii_lowercase(), "word bytes must be a-z");
            i += 1;
        }
        Self { chars }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Only ASCII letters are ever stored
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Number of times `letter` occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&c| c == letter).count()
    }
}

impl FromStr for Word {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
