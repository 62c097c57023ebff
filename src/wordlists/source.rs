//! Word sources
//!
//! A round draws its secret word from a `WordSource`. The randomness is
//! passed in so callers (and tests) control it.

use crate::core::{Difficulty, SecretWord};
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// No word could be drawn to start a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no words available in {source_name}")]
pub struct NoWordsAvailableError {
    pub source_name: String,
}

/// Something that can supply secret words
pub trait WordSource {
    /// Draw a secret word
    ///
    /// # Errors
    /// Returns `NoWordsAvailableError` if the source has nothing to offer.
    fn choose(&self, rng: &mut dyn rand::RngCore) -> Result<SecretWord, NoWordsAvailableError>;
}

/// An in-memory list of candidate words
#[derive(Debug, Clone)]
pub struct WordList {
    name: String,
    words: Vec<SecretWord>,
}

impl WordList {
    #[must_use]
    pub fn new(name: impl Into<String>, words: Vec<SecretWord>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }

    /// The embedded list for a difficulty
    #[must_use]
    pub fn embedded(difficulty: Difficulty) -> Self {
        let slice = match difficulty {
            Difficulty::Easy => super::EASY,
            Difficulty::Medium => super::MEDIUM,
            Difficulty::Hard => super::HARD,
        };
        Self::new(
            format!("{difficulty} word list"),
            super::loader::words_from_slice(slice),
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&SecretWord> {
        self.words.choose(rng)
    }
}

impl WordSource for WordList {
    fn choose(&self, rng: &mut dyn rand::RngCore) -> Result<SecretWord, NoWordsAvailableError> {
        self.pick(rng).cloned().ok_or_else(|| NoWordsAvailableError {
            source_name: self.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn choose_returns_a_listed_word() {
        let list = WordList::new("test", words_from_slice(&["chat", "chien", "loup"]));
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            let word = list.choose(&mut rng).unwrap();
            assert!(list.words().contains(&word));
        }
    }

    #[test]
    fn choose_from_empty_list_fails() {
        let list = WordList::new("empty list", Vec::new());
        let mut rng = StdRng::seed_from_u64(1);

        let err = list.choose(&mut rng).unwrap_err();
        assert_eq!(err.source_name, "empty list");
        assert_eq!(err.to_string(), "no words available in empty list");
    }

    #[test]
    fn choose_is_deterministic_for_a_seed() {
        let list = WordList::embedded(Difficulty::Medium);
        let a = list.choose(&mut StdRng::seed_from_u64(9)).unwrap();
        let b = list.choose(&mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn embedded_lists_are_not_empty() {
        for difficulty in Difficulty::ALL {
            let list = WordList::embedded(difficulty);
            assert!(!list.is_empty(), "{} is empty", list.name());
        }
    }
}
