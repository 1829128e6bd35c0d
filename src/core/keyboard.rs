//! Per-letter keyboard state
//!
//! Tracks the best tag seen for each letter across a round so an on-screen
//! keyboard can be colored. Observations only ever upgrade a letter.

use super::{Tag, Verdict, Word};

/// On-screen keyboard rows (QWERTY)
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-known tag per letter a-z
///
/// Letters that have never been guessed have no tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    letters: [Option<Tag>; 26],
}

impl KeyState {
    /// Keyboard with no observations
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: [None; 26],
        }
    }

    /// Best tag observed for `letter`, if it was guessed
    ///
    /// Non-letters always return `None`.
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Tag> {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.letters[usize::from(letter - b'a')]
        } else {
            None
        }
    }

    /// Fold one guess and its verdict into a new keyboard state
    ///
    /// A letter is updated only when the new tag outranks the stored one
    /// under `Correct > Present > Absent`. `self` is left untouched.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{evaluate, KeyState, Tag, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("paper").unwrap();
    /// let keys = KeyState::new().merge(&guess, &evaluate(&secret, &guess));
    /// assert_eq!(keys.get(b'p'), Some(Tag::Correct));
    /// assert_eq!(keys.get(b'r'), Some(Tag::Absent));
    /// ```
    #[must_use]
    pub fn merge(&self, guess: &Word, verdict: &Verdict) -> Self {
        let mut next = *self;
        for (&letter, &tag) in guess.chars().iter().zip(verdict.tags()) {
            let slot = &mut next.letters[usize::from(letter - b'a')];
            if slot.is_none_or(|current| tag > current) {
                *slot = Some(tag);
            }
        }
        next
    }

    /// Iterate over every guessed letter and its tag, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (char, Tag)> + '_ {
        (b'a'..=b'z')
            .zip(self.letters.iter())
            .filter_map(|(letter, tag)| tag.map(|t| (char::from(letter), t)))
    }
}
