//! Core domain types for Wordle
//!
//! Guess evaluation, keyboard state and the round state machine. Everything
//! here is synchronous and free of I/O; collaborators are injected through
//! the traits in [`collab`].

mod collab;
mod error;
mod keyboard;
mod round;
mod verdict;
mod word;

pub use collab::{AcceptAll, WordOracle, WordSource};
pub use error::{GuessError, SourceError};
pub use keyboard::{KEYBOARD_ROWS, KeyState};
pub use round::{GuessRow, MAX_GUESSES, Round, RoundStatus, Submission};
pub use verdict::{Tag, Verdict, evaluate, evaluate_str};
pub use word::{WORD_LENGTH, Word};
