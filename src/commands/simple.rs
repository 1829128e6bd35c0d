//! Simple interactive CLI mode
//!
//! Plays rounds over stdin/stdout without the TUI.

use crate::core::{GuessError, MAX_GUESSES, RoundStatus, WordOracle, WordSource};
use crate::game::Game;
use crate::output::formatters::{keyboard_lines, verdict_row};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Options for the line-based game
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleOptions<'a> {
    /// Print the answer at the start of every round
    pub debug: bool,
    /// Where finished rounds persist stats
    pub stats_path: Option<&'a Path>,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: WordSource, O: WordOracle>(
    game: &mut Game<S, O>,
    options: SimpleOptions<'_>,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, options, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the line-based game on arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple_with<S: WordSource, O: WordOracle>(
    game: &mut Game<S, O>,
    options: SimpleOptions<'_>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                     Wordle - Simple Mode                     ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the 5-letter word in {MAX_GUESSES} tries.")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' to give up and start over\n")?;

    announce_round(game, options, out)?;

    loop {
        let prompt = format!(
            "Guess {}/{MAX_GUESSES}",
            game.round().guesses_used() + 1
        );
        let Some(line) = read_line(input, out, &prompt)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                writeln!(
                    out,
                    "The word was: {}",
                    game.secret().text().to_uppercase().bright_yellow()
                )?;
                game.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
                announce_round(game, options, out)?;
                continue;
            }
            _ => {}
        }

        let submission = match game.submit(&line) {
            Ok(submission) => submission,
            Err(GuessError::UnknownWord(word)) => {
                writeln!(out, "❌ {} is not a valid word!\n", word.to_uppercase())?;
                continue;
            }
            Err(e) => {
                writeln!(out, "❌ {e}\n")?;
                continue;
            }
        };

        writeln!(out)?;
        for row in game.round().rows() {
            writeln!(out, "  {}", verdict_row(&row.word, &row.verdict))?;
        }
        writeln!(out)?;
        for line in keyboard_lines(&submission.keys) {
            writeln!(out, "  {line}")?;
        }
        writeln!(out)?;

        if !submission.status.is_terminal() {
            let left = game.round().guesses_left();
            writeln!(
                out,
                "  {} {} left\n",
                left.to_string().bright_cyan(),
                if left == 1 { "guess" } else { "guesses" }
            )?;
            continue;
        }

        if submission.status == RoundStatus::Won {
            let guesses = game.round().guesses_used();
            writeln!(
                out,
                "{}",
                "🎉 Congratulations! You guessed it!".bright_green().bold()
            )?;
            writeln!(
                out,
                "  Solved in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            )?;
        } else {
            writeln!(
                out,
                "{} {}",
                "Out of guesses! The word was:".red().bold(),
                game.secret().text().to_uppercase().bright_yellow().bold()
            )?;
        }

        let stats = game.stats();
        writeln!(
            out,
            "  Wins: {} | Losses: {} | Distribution: {}\n",
            stats.wins,
            stats.losses,
            stats
                .guess_distribution
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" | ")
        )?;

        if let Some(path) = options.stats_path
            && let Err(e) = stats.save(path)
        {
            tracing::warn!("{e:#}");
            writeln!(out, "⚠ Could not save stats: {e}")?;
        }

        match read_line(input, out, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                game.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
                announce_round(game, options, out)?;
            }
            _ => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

fn announce_round<S: WordSource, O: WordOracle>(
    game: &Game<S, O>,
    options: SimpleOptions<'_>,
    out: &mut impl Write,
) -> io::Result<()> {
    if options.debug {
        writeln!(
            out,
            "{} {}\n",
            "Answer:".bright_black(),
            game.secret().text().to_uppercase().bright_black()
        )?;
    }
    Ok(())
}

/// Prompt and read one trimmed line; `None` on end of input
fn read_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
