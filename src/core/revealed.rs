//! Revealed form of the secret word
//!
//! Tracks which positions of the secret word the player can see. Hidden
//! positions hold the placeholder `_`.

use super::SecretWord;
use std::fmt;

/// Placeholder for a hidden position
pub const PLACEHOLDER: char = '_';

/// The player's view of the secret word
///
/// Always the same length as the secret it was built for. Positions only ever
/// go from hidden to revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedForm {
    slots: Vec<char>,
}

impl RevealedForm {
    /// Create a fully hidden form for `secret`
    #[must_use]
    pub fn hidden(secret: &SecretWord) -> Self {
        Self {
            slots: vec![PLACEHOLDER; secret.len()],
        }
    }

    /// Create a form from raw slots without checking them against a secret
    pub(crate) const fn from_slots(slots: Vec<char>) -> Self {
        Self { slots }
    }

    /// Reveal every occurrence of `letter`
    ///
    /// Returns the number of positions that were hidden before this call.
    pub fn reveal_letter(&mut self, secret: &SecretWord, letter: char) -> usize {
        let mut newly_revealed = 0;
        for &pos in secret.positions_of(letter) {
            if self.slots[pos] == PLACEHOLDER {
                newly_revealed += 1;
            }
            self.slots[pos] = letter;
        }
        newly_revealed
    }

    /// Reveal the whole word
    pub fn reveal_all(&mut self, secret: &SecretWord) {
        self.slots.copy_from_slice(secret.chars());
    }

    /// Check whether every position is revealed
    #[must_use]
    pub fn is_complete(&self, secret: &SecretWord) -> bool {
        self.slots == secret.chars()
    }

    /// Check whether a position is revealed
    ///
    /// # Panics
    /// Panics if `position` is out of bounds
    #[inline]
    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.slots[position] != PLACEHOLDER
    }

    /// Number of hidden positions
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|&&c| c == PLACEHOLDER).count()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[char] {
        &self.slots
    }
}

impl fmt::Display for RevealedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.slots {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
