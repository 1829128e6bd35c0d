//! One play-through from secret selection to win or loss

use super::{GuessError, KeyState, Verdict, Word, WordOracle, evaluate};
use std::fmt;

/// Guesses allowed per round
pub const MAX_GUESSES: usize = 6;

/// Where a round stands between submissions
///
/// Evaluation happens inside [`Round::submit`], so a round is never observed
/// mid-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    AwaitingInput,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AwaitingInput => "awaiting input",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// A submitted guess and its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRow {
    pub word: Word,
    pub verdict: Verdict,
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub verdict: Verdict,
    pub status: RoundStatus,
    pub keys: KeyState,
}

/// State of a single round
///
/// Owned by the caller and mutated only through [`Round::submit`].
#[derive(Debug, Clone)]
pub struct Round {
    secret: Word,
    rows: Vec<GuessRow>,
    keys: KeyState,
    status: RoundStatus,
}

impl Round {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            rows: Vec::with_capacity(MAX_GUESSES),
            keys: KeyState::new(),
            status: RoundStatus::AwaitingInput,
        }
    }

    /// Submit a whole guess
    ///
    /// Rejections leave the round exactly as it was. The oracle is only
    /// consulted for guesses that differ from the secret.
    ///
    /// # Errors
    /// - `RoundTerminal` if the round is already won or lost
    /// - `InvalidLength` / `InvalidAlphabet` for malformed guesses
    /// - `UnknownWord` if the oracle rejects the guess
    pub fn submit(
        &mut self,
        guess: &str,
        oracle: &impl WordOracle,
    ) -> Result<Submission, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::RoundTerminal(self.status));
        }

        let word = Word::new(guess)?;
        if word != self.secret && !oracle.is_valid(&word) {
            tracing::debug!(guess = %word, "oracle rejected guess");
            return Err(GuessError::UnknownWord(word.text().to_string()));
        }

        let verdict = evaluate(&self.secret, &word);
        self.rows.push(GuessRow { word, verdict });
        self.keys = self.keys.merge(&word, &verdict);

        self.status = if verdict.is_solved() {
            RoundStatus::Won
        } else if self.rows.len() >= MAX_GUESSES {
            RoundStatus::Lost
        } else {
            RoundStatus::AwaitingInput
        };

        tracing::debug!(
            guess = %word,
            row = self.rows.len(),
            status = %self.status,
            "guess accepted"
        );

        Ok(Submission {
            verdict,
            status: self.status,
            keys: self.keys,
        })
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub const fn keys(&self) -> &KeyState {
        &self.keys
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        MAX_GUESSES - self.rows.len()
    }
}
