//! Guess evaluation
//!
//! A verdict holds one tag per guess position:
//! - Absent  (letter not available in the secret)
//! - Present (letter in the secret, wrong position)
//! - Correct (letter in the right position)
//!
//! Tags are ordered `Absent < Present < Correct`; the keyboard state relies
//! on this ordering to decide when an observation outranks an older one.

use super::word::WORD_LENGTH;
use super::{GuessError, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Absent,
    Present,
    Correct,
}

impl Tag {
    /// Emoji square used for shareable output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for one guess, one tag per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict([Tag; WORD_LENGTH]);

impl Verdict {
    /// All greens
    pub const SOLVED: Self = Self([Tag::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(tags: [Tag; WORD_LENGTH]) -> Self {
        Self(tags)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// Exact matches are claimed first so they take priority over
    /// out-of-position matches, then every remaining guess letter may consume
    /// at most one unclaimed occurrence of itself in the secret.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Tag, Verdict, Word};
    ///
    /// let secret = Word::new("allot").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    /// let verdict = Verdict::calculate(&secret, &guess);
    ///
    /// use Tag::{Absent, Correct, Present};
    /// assert_eq!(verdict.tags(), &[Present, Present, Correct, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(secret: &Word, guess: &Word) -> Self {
        let mut tags = [Tag::Absent; WORD_LENGTH];
        let mut remaining: [Option<u8>; WORD_LENGTH] = (*secret.chars()).map(Some);

        // First pass: exact positions
        for (i, &letter) in guess.chars().iter().enumerate() {
            if remaining[i] == Some(letter) {
                tags[i] = Tag::Correct;
                remaining[i] = None;
            }
        }

        // Second pass: out-of-position, consuming from what is left
        for (i, &letter) in guess.chars().iter().enumerate() {
            if tags[i] == Tag::Correct {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                tags[i] = Tag::Present;
                *slot = None;
            }
        }

        Self(tags)
    }

    #[inline]
    #[must_use]
    pub const fn tags(&self) -> &[Tag; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn tag_at(&self, position: usize) -> Tag {
        self.0[position]
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&tag| tag == Tag::Correct)
    }

    /// Count positions carrying `tag`
    #[must_use]
    pub fn count(&self, tag: Tag) -> usize {
        self.0.iter().filter(|&&t| t == tag).count()
    }

    /// Convert to a string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|tag| tag.emoji()).collect()
    }
}

/// Evaluate `guess` against `secret`
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Verdict {
    let verdict = Verdict::calculate(secret, guess);
    tracing::debug!(%secret, %guess, verdict = %verdict, "evaluated guess");
    verdict
}

/// Evaluate two raw strings, validating both first
///
/// # Errors
/// Returns `InvalidLength` or `InvalidAlphabet` if either word is malformed.
pub fn evaluate_str(secret: &str, guess: &str) -> Result<Verdict, GuessError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    Ok(evaluate(&secret, &guess))
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in self.0 {
            write!(f, "{}", tag.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Tag::{Absent, Correct, Present};
    use super::*;

    fn eval(secret: &str, guess: &str) -> Verdict {
        evaluate_str(secret, guess).unwrap()
    }

    /// Correct+present tags for `letter` never exceed its count in the secret
    fn assert_letter_bound(secret: &str, guess: &str) {
        let verdict = eval(secret, guess);
        let secret_word = Word::new(secret).unwrap();
        for &letter in guess.as_bytes() {
            let marked = guess
                .bytes()
                .zip(verdict.tags())
                .filter(|&(g, &t)| g == letter && t != Absent)
                .count();
            assert!(
                marked <= secret_word.count_of(letter),
                "{secret}/{guess}: '{}' marked {marked} times",
                letter as char
            );
        }
    }

    #[test]
    fn verdict_solved_constant() {
        assert!(Verdict::SOLVED.is_solved());
        assert_eq!(Verdict::SOLVED.count(Correct), 5);
        assert_eq!(Verdict::SOLVED.count(Present), 0);
    }

    #[test]
    fn verdict_all_absent() {
        let verdict = eval("fghij", "abcde");
        assert_eq!(verdict.tags(), &[Absent; 5]);
        assert!(!verdict.is_solved());
    }

    #[test]
    fn verdict_self_is_solved() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "allot"] {
            assert_eq!(eval(word, word), Verdict::SOLVED);
        }
    }

    #[test]
    fn verdict_duplicate_guess_letters_limited_by_secret() {
        // Only two l's in the secret; the exact match claims one first
        let verdict = eval("allot", "lolly");
        assert_eq!(verdict.tags(), &[Present, Present, Correct, Absent, Absent]);
        assert_eq!(verdict.tag_at(3), Absent);
        assert_letter_bound("allot", "lolly");
    }

    #[test]
    fn verdict_letter_not_in_secret() {
        let verdict = eval("apple", "apply");
        assert_eq!(verdict.tags(), &[Correct, Correct, Correct, Correct, Absent]);
    }

    #[test]
    fn verdict_mixed_positions() {
        let verdict = eval("crane", "trace");
        assert_eq!(verdict.tags(), &[Absent, Correct, Correct, Present, Correct]);
    }

    #[test]
    fn verdict_exact_match_beats_earlier_present() {
        // ROBOT vs FLOOR: the second o is exact, the first takes the other o
        let verdict = eval("floor", "robot");
        assert_eq!(verdict.tags(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn verdict_exact_match_claimed_before_earlier_duplicate() {
        // Single e in the secret sits at the guess's last e
        let verdict = eval("abide", "eerie");
        assert_eq!(verdict.tags(), &[Absent, Absent, Absent, Present, Correct]);
        assert_letter_bound("abide", "eerie");
    }

    #[test]
    fn verdict_duplicates_in_secret() {
        let verdict = eval("erase", "speed");
        assert_eq!(verdict.tags(), &[Present, Absent, Present, Present, Absent]);
        assert_letter_bound("erase", "speed");
    }

    #[test]
    fn verdict_letter_bound_holds_for_repeated_letters() {
        for (secret, guess) in [
            ("allot", "lolly"),
            ("aaaaa", "aabbb"),
            ("abbey", "babes"),
            ("geese", "eeeee"),
            ("sassy", "asses"),
        ] {
            assert_letter_bound(secret, guess);
            assert_eq!(eval(secret, guess).tags().len(), 5);
        }
    }

    #[test]
    fn evaluate_str_rejects_bad_input() {
        assert_eq!(evaluate_str("apple", "app"), Err(GuessError::InvalidLength(3)));
        assert_eq!(evaluate_str("apples", "apple"), Err(GuessError::InvalidLength(6)));
        assert_eq!(evaluate_str("apple", "ap-le"), Err(GuessError::InvalidAlphabet('-')));
    }

    #[test]
    fn verdict_display_and_emoji() {
        let verdict = eval("crane", "trace");
        assert_eq!(verdict.to_string(), "-GGYG");
        assert_eq!(verdict.to_emoji(), "⬜🟩🟩🟨🟩");
    }

    #[test]
    fn tag_precedence_order() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }
}
