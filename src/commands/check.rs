//! One-shot guess evaluation
//!
//! Evaluates a single guess against a given secret without a round.

use crate::core::{GuessError, KeyState, Verdict, Word, evaluate};

/// Result of checking one guess
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub verdict: Verdict,
    pub keys: KeyState,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not 5 letters a-z.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, GuessError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let verdict = evaluate(&secret, &guess);
    let keys = KeyState::new().merge(&guess, &verdict);

    Ok(CheckResult {
        secret,
        guess,
        verdict,
        keys,
    })
}
