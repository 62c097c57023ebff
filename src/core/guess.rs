//! Player guesses and the record of guesses already tried

use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A syntactically valid guess: one letter or a whole word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Guess {
    Letter(char),
    Word(String),
}

/// Error type for malformed guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("please enter letters only, got {input:?}")]
    InvalidInput { input: String },
}

impl Guess {
    /// Parse raw player input into a guess
    ///
    /// Surrounding whitespace is ignored. Case is preserved.
    ///
    /// # Errors
    /// Returns `GuessError::InvalidInput` if the input is empty or contains
    /// anything other than alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Guess;
    ///
    /// assert_eq!(Guess::parse("a").unwrap(), Guess::Letter('a'));
    /// assert_eq!(Guess::parse(" chat ").unwrap(), Guess::Word("chat".into()));
    /// assert!(Guess::parse("c4t").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, GuessError> {
        let input = raw.trim();

        if input.is_empty() || !input.chars().all(char::is_alphabetic) {
            return Err(GuessError::InvalidInput {
                input: raw.to_string(),
            });
        }

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Ok(Self::Letter(letter)),
            _ => Ok(Self::Word(input.to_string())),
        }
    }

    #[must_use]
    pub const fn is_letter(&self) -> bool {
        matches!(self, Self::Letter(_))
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::Word(w) => write!(f, "{w}"),
        }
    }
}

/// Guesses already submitted in a round, in submission order
///
/// Entries are never removed. Comparison is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriedGuesses {
    order: Vec<String>,
    seen: FxHashSet<String>,
}

impl TriedGuesses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, guess: &str) -> bool {
        self.seen.contains(guess)
    }

    /// Record a guess
    ///
    /// Returns false if it was already recorded.
    pub fn insert(&mut self, guess: impl Into<String>) -> bool {
        let guess = guess.into();
        if self.seen.contains(&guess) {
            return false;
        }
        self.seen.insert(guess.clone());
        self.order.push(guess);
        true
    }

    /// Iterate in submission order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TriedGuesses {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tried = Self::new();
        for guess in iter {
            tried.insert(guess);
        }
        tried
    }
}
