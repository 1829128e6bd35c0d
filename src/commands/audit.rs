//! Audit evaluation over the word list
//!
//! Evaluates every secret against every guess in parallel and checks each
//! verdict against the evaluation rules.

use crate::core::{Tag, Verdict, WORD_LENGTH, Word, evaluate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// A verdict that breaks an evaluation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub secret: String,
    pub guess: String,
    pub verdict: Verdict,
    pub rule: &'static str,
}

/// Summary of an audit run
#[derive(Debug)]
pub struct AuditReport {
    pub words: usize,
    pub pairs_checked: usize,
    pub violations: Vec<Violation>,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check a single evaluation
///
/// - Correct exactly where the letters line up
/// - Per letter, correct+present never exceeds the secret's count, and
///   equals `min(count in guess, count in secret)`
/// - A word evaluated against itself is solved
#[must_use]
pub fn check_pair(secret: &Word, guess: &Word) -> Option<&'static str> {
    let verdict = evaluate(secret, guess);

    for i in 0..WORD_LENGTH {
        let aligned = secret.char_at(i) == guess.char_at(i);
        if aligned != (verdict.tag_at(i) == Tag::Correct) {
            return Some("correct tags must match aligned letters");
        }
    }

    for &letter in guess.chars() {
        let marked = guess
            .chars()
            .iter()
            .zip(verdict.tags())
            .filter(|&(&g, &t)| g == letter && t != Tag::Absent)
            .count();
        let in_secret = secret.count_of(letter);
        if marked > in_secret {
            return Some("letter marked more often than it occurs in the secret");
        }
        if marked != guess.count_of(letter).min(in_secret) {
            return Some("available letter occurrence left unmarked");
        }
    }

    if secret == guess && !verdict.is_solved() {
        return Some("self-evaluation must be solved");
    }

    None
}

/// Audit every (secret, guess) pair drawn from `words`
///
/// `limit` caps the number of secrets; every word is still used as a guess.
pub fn run_audit(words: &[Word], limit: Option<usize>) -> AuditReport {
    let secrets = &words[..limit.unwrap_or(words.len()).min(words.len())];

    println!(
        "🔎 Auditing {} secrets × {} guesses...",
        secrets.len(),
        words.len()
    );

    let pb = ProgressBar::new(secrets.len() as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style.progress_chars("█▓▒░"));

    let start = Instant::now();

    let violations: Vec<Violation> = secrets
        .par_iter()
        .flat_map_iter(|secret| {
            let found: Vec<Violation> = words
                .iter()
                .filter_map(|guess| {
                    check_pair(secret, guess).map(|rule| Violation {
                        secret: secret.text().to_string(),
                        guess: guess.text().to_string(),
                        verdict: evaluate(secret, guess),
                        rule,
                    })
                })
                .collect();
            pb.inc(1);
            found
        })
        .collect();

    pb.finish_with_message("Complete!");

    let report = AuditReport {
        words: words.len(),
        pairs_checked: secrets.len() * words.len(),
        violations,
        duration: start.elapsed(),
    };

    tracing::info!(
        pairs = report.pairs_checked,
        violations = report.violations.len(),
        "audit finished"
    );

    report
}
