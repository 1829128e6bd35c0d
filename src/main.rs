//! Wordle - CLI
//!
//! Play Wordle in a TUI or on the plain command line, check single guesses,
//! and audit the evaluator against the embedded word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordle_game::{
    commands::{SimpleOptions, check_guess, run_audit, run_simple},
    core::WordSource,
    game::{Game, Stats},
    output::{print_audit_report, print_check_result, print_stats},
    wordlists::{ANSWERS, Dictionary, FixedSource, RandomSource, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle with duplicate-aware scoring and a colored keyboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'all' (default), 'answers' (secret list only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Use a fixed secret instead of a random pick
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Seed the random secret pick for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Reveal the answer while playing
    #[arg(long, global = true)]
    debug: bool,

    /// Stats file (default: <data dir>/wordle_game/stats.json)
    #[arg(long, global = true)]
    stats: Option<PathBuf>,

    /// Keep stats in memory only
    #[arg(long, global = true)]
    no_stats: bool,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Evaluate one guess against a secret
    Check {
        /// The secret word
        target: String,

        /// The guess to evaluate
        guess: String,
    },

    /// Show win/loss statistics
    Stats,

    /// Check every verdict over the answer list for rule violations
    Audit {
        /// Limit number of secrets to audit
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Build the guess dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "all" => Ok(Dictionary::embedded()),
        "answers" => Ok(Dictionary::answers_only()),
        path => Dictionary::from_file(path)
            .with_context(|| format!("Failed to load word list from {path}")),
    }
}

fn stats_path(cli: &Cli) -> Option<PathBuf> {
    if cli.no_stats {
        return None;
    }
    cli.stats.clone().or_else(Stats::default_path)
}

fn load_stats(path: Option<&Path>) -> Stats {
    path.map_or_else(Stats::default, |p| {
        Stats::load(p).unwrap_or_else(|e| {
            tracing::warn!("{e:#}; starting with empty stats");
            Stats::default()
        })
    })
}

fn init_tracing(log_file: Option<&Path>, stderr: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
    } else if stderr {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(env_filter)
            .init();
    } else {
        // Writing to the terminal would corrupt the TUI
        tracing_subscriber::registry().with(env_filter).init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_tracing(cli.log_file.as_deref(), !matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Check { target, guess } => run_check_command(&target, &guess),
        Commands::Stats => {
            let path = stats_path(&cli);
            print_stats(&load_stats(path.as_deref()));
            Ok(())
        }
        Commands::Audit { limit } => {
            let words = words_from_slice(ANSWERS);
            let report = run_audit(&words, limit);
            print_audit_report(&report);
            Ok(())
        }
    }
}

fn word_source(cli: &Cli) -> Box<dyn WordSource> {
    match (&cli.secret, cli.seed) {
        (Some(secret), _) => Box::new(FixedSource::new(secret.clone())),
        (None, Some(seed)) => Box::new(RandomSource::answers_seeded(seed)),
        (None, None) => Box::new(RandomSource::answers()),
    }
}

fn new_game(
    cli: &Cli,
    stats_path: Option<&Path>,
) -> Result<Game<Box<dyn WordSource>, Dictionary>> {
    let dictionary = load_dictionary(&cli.wordlist)?;
    tracing::info!(words = dictionary.len(), "dictionary loaded");
    Ok(Game::new(word_source(cli), dictionary, load_stats(stats_path)))
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let path = stats_path(cli);
    let game = new_game(cli, path.as_deref())?;
    run_tui(App::new(game, cli.debug, path))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let path = stats_path(cli);
    let mut game = new_game(cli, path.as_deref())?;
    let options = SimpleOptions {
        debug: cli.debug,
        stats_path: path.as_deref(),
    };
    run_simple(&mut game, options)
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess)?;
    print_check_result(&result);
    Ok(())
}
