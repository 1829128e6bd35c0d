//! Error types for guess submission and word sourcing

use super::RoundStatus;
use thiserror::Error;

/// Reasons a guess (or secret) is rejected
///
/// Every variant is recoverable: the caller reports it and may resubmit.
/// A rejected submission never mutates the round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("word must contain only letters a-z, found {0:?}")]
    InvalidAlphabet(char),

    #[error("round is already over ({0})")]
    RoundTerminal(RoundStatus),

    #[error("{} is not a valid word", .0.to_uppercase())]
    UnknownWord(String),
}

/// Failure to obtain a secret from a word source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("word source has no words")]
    Empty,

    #[error("failed to read word source: {0}")]
    Io(#[from] std::io::Error),
}
