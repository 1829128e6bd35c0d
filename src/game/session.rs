//! Game session: consecutive rounds sharing statistics

use super::Stats;
use crate::core::{GuessError, Round, RoundStatus, Submission, Word, WordOracle, WordSource};
use crate::wordlists::{FALLBACK_SECRET, FALLBACK_WORD};

/// Owns the collaborators, the current round and the running stats
pub struct Game<S, O> {
    source: S,
    oracle: O,
    round: Round,
    stats: Stats,
}

impl<S: WordSource, O: WordOracle> Game<S, O> {
    /// Start a session and its first round
    pub fn new(mut source: S, oracle: O, stats: Stats) -> Self {
        let round = Round::new(draw_secret(&mut source));
        Self {
            source,
            oracle,
            round,
            stats,
        }
    }

    /// Submit a guess to the current round
    ///
    /// Stats are updated when this submission ends the round.
    ///
    /// # Errors
    ///
    /// Propagates the round's rejection; nothing is changed in that case.
    pub fn submit(&mut self, guess: &str) -> Result<Submission, GuessError> {
        let submission = self.round.submit(guess, &self.oracle)?;

        match submission.status {
            RoundStatus::Won => {
                self.stats.record_win(self.round.guesses_used());
                tracing::info!(
                    secret = %self.round.secret(),
                    guesses = self.round.guesses_used(),
                    "round won"
                );
            }
            RoundStatus::Lost => {
                self.stats.record_loss();
                tracing::info!(secret = %self.round.secret(), "round lost");
            }
            RoundStatus::AwaitingInput => {}
        }

        Ok(submission)
    }

    /// Abandon the current round and start a new one
    pub fn reset(&mut self) {
        self.round = Round::new(draw_secret(&mut self.source));
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// The current answer
    #[must_use]
    pub const fn secret(&self) -> &Word {
        self.round.secret()
    }
}

/// Fetch and validate a secret, falling back on any failure
fn draw_secret(source: &mut impl WordSource) -> Word {
    let secret = source
        .fetch()
        .map_err(|e| e.to_string())
        .and_then(|text| Word::new(&text).map_err(|e| format!("{text:?}: {e}")));

    match secret {
        Ok(word) => {
            tracing::info!("new round started");
            word
        }
        Err(reason) => {
            tracing::warn!(%reason, fallback = FALLBACK_SECRET, "word source failed");
            FALLBACK_WORD
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AcceptAll, MAX_GUESSES, SourceError};
    use crate::wordlists::{Dictionary, FixedSource};

    struct FailingSource;

    impl WordSource for FailingSource {
        fn fetch(&mut self) -> Result<String, SourceError> {
            Err(SourceError::Empty)
        }
    }

    /// Yields each word in turn
    struct Sequence(Vec<&'static str>);

    impl WordSource for Sequence {
        fn fetch(&mut self) -> Result<String, SourceError> {
            if self.0.is_empty() {
                return Err(SourceError::Empty);
            }
            Ok(self.0.remove(0).to_string())
        }
    }

    fn game(secret: &str) -> Game<FixedSource, Dictionary> {
        Game::new(FixedSource::new(secret), Dictionary::embedded(), Stats::default())
    }

    #[test]
    fn win_is_recorded_once() {
        let mut game = game("crane");
        game.submit("trace").unwrap();
        let submission = game.submit("crane").unwrap();

        assert_eq!(submission.status, RoundStatus::Won);
        assert_eq!(game.stats().wins, 1);
        assert_eq!(game.stats().guess_distribution[1], 1);

        assert!(game.submit("slate").is_err());
        assert_eq!(game.stats().played(), 1);
    }

    #[test]
    fn loss_is_recorded() {
        let mut game = game("crane");
        for _ in 0..MAX_GUESSES {
            game.submit("slate").unwrap();
        }
        assert_eq!(game.round().status(), RoundStatus::Lost);
        assert_eq!(game.stats().losses, 1);
        assert_eq!(game.stats().wins, 0);
    }

    #[test]
    fn rejected_guess_leaves_stats_and_round() {
        let mut game = game("crane");
        assert_eq!(
            game.submit("xqzvk"),
            Err(GuessError::UnknownWord("xqzvk".to_string()))
        );
        assert_eq!(game.submit("cran"), Err(GuessError::InvalidLength(4)));
        assert_eq!(game.round().guesses_used(), 0);
        assert_eq!(game.stats(), &Stats::default());
    }

    #[test]
    fn reset_starts_fresh_round() {
        let mut game = Game::new(Sequence(vec!["crane", "lolly"]), AcceptAll, Stats::default());
        assert_eq!(game.secret().text(), "crane");
        game.submit("crane").unwrap();

        game.reset();
        assert_eq!(game.secret().text(), "lolly");
        assert_eq!(game.round().status(), RoundStatus::AwaitingInput);
        assert_eq!(game.round().guesses_used(), 0);
        assert_eq!(game.stats().wins, 1);
    }

    #[test]
    fn failing_source_falls_back() {
        let game = Game::new(FailingSource, AcceptAll, Stats::default());
        assert_eq!(game.secret().text(), FALLBACK_SECRET);
    }

    #[test]
    fn malformed_secret_falls_back() {
        let game = Game::new(FixedSource::new("toolong"), AcceptAll, Stats::default());
        assert_eq!(game.secret().text(), FALLBACK_SECRET);
    }

    #[test]
    fn secret_is_normalised() {
        let game = Game::new(FixedSource::new("LOLLY"), AcceptAll, Stats::default());
        assert_eq!(game.secret().text(), "lolly");
    }
}
