//! Wordle Game
//!
//! A Wordle engine with duplicate-aware guess evaluation, a monotone
//! keyboard state and an explicit round state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{AcceptAll, Round, RoundStatus, Word};
//!
//! let mut round = Round::new(Word::new("allot").unwrap());
//!
//! let submission = round.submit("lolly", &AcceptAll).unwrap();
//! println!("{}", submission.verdict.to_emoji());
//! assert_eq!(submission.status, RoundStatus::AwaitingInput);
//! ```

// Core domain types
pub mod core;

// Game sessions and statistics
pub mod game;

// Word lists and local collaborators
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
