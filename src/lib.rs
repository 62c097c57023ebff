//! Hangman
//!
//! A hangman word-guessing game: guess letters or the whole word before the
//! gallows is complete.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Guess, Outcome, RoundState, RoundStatus, SecretWord};
//!
//! let secret = SecretWord::new("banana").unwrap();
//! let mut round = RoundState::hidden(secret, 10);
//!
//! let outcome = round.guess(&Guess::parse("a").unwrap());
//! assert_eq!(outcome, Outcome::LetterFound { revealed: 3 });
//! assert_eq!(round.revealed().to_string(), "_a_a_a");
//! assert_eq!(round.status(), RoundStatus::Active);
//! ```

// Core domain types and guess evaluation
pub mod core;

// One player's round: validation, terminal checks, score reporting
pub mod game;

// Games keyed by session
pub mod session;

// Word lists
pub mod wordlists;

// Score file
pub mod scores;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
