//! Round state and guess evaluation
//!
//! A `RoundState` holds everything one round needs: the secret word, the
//! player's revealed form, the guesses tried so far and the lives left.
//! `RoundState::guess` is the only way a round changes.
//!
//! # Rules
//! 1. A guess already tried leaves the round untouched
//! 2. A new guess is recorded before it is evaluated
//! 3. Whole word: a match reveals everything and sets lives to 0 (win marker),
//!    a miss costs 3 lives
//! 4. Single letter: a match reveals every occurrence, a miss costs 1 life
//!
//! The evaluator never ends a round itself. Callers check [`RoundState::status`]
//! after each guess and stop submitting once it is terminal.

use super::{DifficultyConfig, Guess, PLACEHOLDER, RevealedForm, SecretWord, TriedGuesses};
use rand::Rng;
use thiserror::Error;

/// Lives lost for a wrong single letter
pub const WRONG_LETTER_PENALTY: i32 = 1;

/// Lives lost for a wrong whole word
pub const WRONG_WORD_PENALTY: i32 = 3;

/// Words at least this long start with two positions shown instead of one
pub const LONG_WORD_THRESHOLD: usize = 10;

/// What a single guess did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Guess was submitted before; nothing changed
    AlreadyTried,
    /// Letter is in the word; `revealed` positions were newly shown
    LetterFound { revealed: usize },
    LetterMissing,
    WordFound,
    WordMissing,
}

impl Outcome {
    /// User-facing message for this outcome
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AlreadyTried => "already tried",
            Self::LetterFound { .. } => "Well done!",
            Self::LetterMissing => "That letter is not in the word.",
            Self::WordFound => "Congratulations, you guessed the word!",
            Self::WordMissing => "That is not the word. You lose 3 lives.",
        }
    }

    /// Lives this outcome costs
    #[must_use]
    pub const fn penalty(self) -> i32 {
        match self {
            Self::LetterMissing => WRONG_LETTER_PENALTY,
            Self::WordMissing => WRONG_WORD_PENALTY,
            Self::AlreadyTried | Self::LetterFound { .. } | Self::WordFound => 0,
        }
    }

    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::LetterFound { .. } | Self::WordFound)
    }
}

/// Where a round stands, as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Error type for rebuilding a round from stored parts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("revealed form has {found} characters but the secret has {expected}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("revealed form shows {found:?} at position {position}, which the secret does not have")]
    Contradiction { position: usize, found: char },
}

/// State of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    secret: SecretWord,
    revealed: RevealedForm,
    tried: TriedGuesses,
    lives: i32,
}

impl RoundState {
    /// Start a round with the initial reveal applied
    ///
    /// Words shorter than [`LONG_WORD_THRESHOLD`] show one random position,
    /// longer words two distinct ones. Every occurrence of the letters at
    /// those positions is shown, unless that would reveal the whole word:
    /// a started round is never already won.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Difficulty, RoundState, SecretWord};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let secret = SecretWord::new("banana").unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let round = RoundState::start(secret, Difficulty::Easy.config(), &mut rng);
    ///
    /// assert_eq!(round.lives(), 10);
    /// assert!(round.revealed().hidden_count() < 6);
    /// ```
    pub fn start<R: Rng + ?Sized>(
        secret: SecretWord,
        config: DifficultyConfig,
        rng: &mut R,
    ) -> Self {
        let mut round = Self::hidden(secret, config.attempts);

        let shown = if round.secret.len() >= LONG_WORD_THRESHOLD {
            2
        } else {
            1
        };
        for position in rand::seq::index::sample(rng, round.secret.len(), shown) {
            let letter = round.secret.char_at(position);
            let unrevealed = round
                .secret
                .positions_of(letter)
                .iter()
                .filter(|&&i| !round.revealed.is_revealed(i))
                .count();
            // A fresh round always leaves something to guess
            if unrevealed < round.revealed.hidden_count() {
                round.revealed.reveal_letter(&round.secret, letter);
            }
        }

        round
    }

    /// Start a round with every position hidden
    #[must_use]
    pub fn hidden(secret: SecretWord, lives: i32) -> Self {
        let revealed = RevealedForm::hidden(&secret);
        Self {
            secret,
            revealed,
            tried: TriedGuesses::new(),
            lives,
        }
    }

    /// Rebuild a round from stored parts
    ///
    /// # Errors
    /// Returns `RoundError` if `revealed` does not have the secret's length or
    /// shows a character the secret does not have at that position.
    pub fn from_parts(
        secret: SecretWord,
        revealed: &str,
        tried: TriedGuesses,
        lives: i32,
    ) -> Result<Self, RoundError> {
        let slots: Vec<char> = revealed.chars().collect();

        if slots.len() != secret.len() {
            return Err(RoundError::LengthMismatch {
                expected: secret.len(),
                found: slots.len(),
            });
        }

        if let Some((position, &found)) = slots
            .iter()
            .enumerate()
            .find(|&(i, &c)| c != PLACEHOLDER && c != secret.char_at(i))
        {
            return Err(RoundError::Contradiction { position, found });
        }

        Ok(Self {
            secret,
            revealed: RevealedForm::from_slots(slots),
            tried,
            lives,
        })
    }

    /// Apply a guess to the round
    pub fn guess(&mut self, guess: &Guess) -> Outcome {
        let key = guess.to_string();
        if !self.tried.insert(key) {
            return Outcome::AlreadyTried;
        }

        let outcome = match guess {
            Guess::Word(word) if word == self.secret.text() => {
                self.revealed.reveal_all(&self.secret);
                // Win marker: a full reveal with zero lives is a win, not a loss
                self.lives = self.lives.min(0);
                Outcome::WordFound
            }
            Guess::Word(_) => Outcome::WordMissing,
            Guess::Letter(letter) if self.secret.has_letter(*letter) => Outcome::LetterFound {
                revealed: self.revealed.reveal_letter(&self.secret, *letter),
            },
            Guess::Letter(_) => Outcome::LetterMissing,
        };

        self.lives -= outcome.penalty();
        outcome
    }

    /// Apply a guess to a copy of the round, leaving this one untouched
    #[must_use]
    pub fn evaluate(&self, guess: &Guess) -> (Self, Outcome) {
        let mut next = self.clone();
        let outcome = next.guess(guess);
        (next, outcome)
    }

    /// Where the round stands
    ///
    /// A full reveal wins regardless of lives; otherwise no lives left loses.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.revealed.is_complete(&self.secret) {
            RoundStatus::Won
        } else if self.lives <= 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::Active
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> &RevealedForm {
        &self.revealed
    }

    #[inline]
    #[must_use]
    pub const fn tried(&self) -> &TriedGuesses {
        &self.tried
    }

    #[inline]
    #[must_use]
    pub const fn lives(&self) -> i32 {
        self.lives
    }
}
