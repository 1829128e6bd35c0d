//! Injectable collaborators
//!
//! Secrets and dictionary checks come from outside the core. Local
//! implementations live in [`crate::wordlists`].

use super::{SourceError, Word};

/// Supplies the secret for each new round
///
/// The value is treated as opaque; callers re-validate length and alphabet.
pub trait WordSource {
    /// Produce the next secret word
    ///
    /// # Errors
    /// Returns `SourceError` when no word can be produced.
    fn fetch(&mut self) -> Result<String, SourceError>;
}

impl<T: WordSource + ?Sized> WordSource for Box<T> {
    fn fetch(&mut self) -> Result<String, SourceError> {
        (**self).fetch()
    }
}

/// Decides whether a guess is an accepted dictionary word
pub trait WordOracle {
    fn is_valid(&self, word: &Word) -> bool;
}

/// Oracle that accepts every well-formed word
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl WordOracle for AcceptAll {
    fn is_valid(&self, _word: &Word) -> bool {
        true
    }
}
