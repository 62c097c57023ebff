//! Core domain types for Hangman
//!
//! The secret word, the player's revealed form, tried guesses and the round
//! state that ties them together. Everything here is pure: no I/O, and
//! randomness is always passed in by the caller.

mod difficulty;
mod guess;
mod revealed;
mod round;
mod word;

pub use difficulty::{Difficulty, DifficultyConfig, UnknownDifficulty};
pub use guess::{Guess, GuessError, TriedGuesses};
pub use revealed::{PLACEHOLDER, RevealedForm};
pub use round::{
    LONG_WORD_THRESHOLD, Outcome, RoundError, RoundState, RoundStatus, WRONG_LETTER_PENALTY,
    WRONG_WORD_PENALTY,
};
pub use word::{SecretWord, WordError};
