//! Word lists for Hangman
//!
//! Embedded per-difficulty lists compiled into the binary, file loading, and
//! the `WordSource` trait rounds draw their secret word from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};
pub use source::{NoWordsAvailableError, WordList, WordSource};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;

    #[test]
    fn counts_match_consts() {
        assert_eq!(EASY.len(), EASY_COUNT);
        assert_eq!(MEDIUM.len(), MEDIUM_COUNT);
        assert_eq!(HARD.len(), HARD_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in EASY.iter().chain(MEDIUM).chain(HARD) {
            assert!(SecretWord::new(word).is_ok(), "Word '{word}' is not a valid secret");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn hard_words_are_longer_on_average() {
        let average = |list: &[&str]| {
            list.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / list.len() as f64
        };
        assert!(average(EASY) < average(MEDIUM));
        assert!(average(MEDIUM) < average(HARD));
    }
}
