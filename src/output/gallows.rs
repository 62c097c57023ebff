//! Gallows artwork
//!
//! Nine drawings, from an empty post to the full figure. The stage is picked
//! from the lives left: `9 - lives`, clamped to the available drawings.

/// Number of drawings
pub const STAGE_COUNT: usize = 9;

const STAGES: [&str; STAGE_COUNT] = [
    "
      |
      |
      |
      |
      |
  ___/",
    "
  ____
      |
      |
      |
      |
      |
  ___/",
    "
  ____
  |   |
      |
      |
      |
      |
  ___/",
    "
  ____
  |   |
  o   |
      |
      |
      |
  ___/",
    "
  ____
  |   |
  o   |
  |   |
      |
      |
  ___/",
    "
  ____
  |   |
  o   |
 /|   |
      |
      |
  ___/",
    r"
  ____
  |   |
  o   |
 /|\  |
      |
      |
  ___/",
    r"
  ____
  |   |
  o   |
 /|\  |
 /    |
      |
  ___/",
    r"
  ____
  |   |
  o   |
 /|\  |
 / \  |
      |
  ___/",
];

/// Stage index for the lives left
///
/// # Examples
/// ```
/// use hangman::output::gallows::stage_for_lives;
///
/// assert_eq!(stage_for_lives(9), 0);
/// assert_eq!(stage_for_lives(4), 5);
/// assert_eq!(stage_for_lives(-2), 8);
/// ```
#[must_use]
pub fn stage_for_lives(lives: i32) -> usize {
    let stage = (STAGE_COUNT as i32 - lives).clamp(0, STAGE_COUNT as i32 - 1);
    stage as usize
}

/// Drawing for a stage index, clamped to the last drawing
#[must_use]
pub fn drawing(stage: usize) -> &'static str {
    STAGES[stage.min(STAGE_COUNT - 1)]
}

/// Drawing for the lives left
#[must_use]
pub fn for_lives(lives: i32) -> &'static str {
    drawing(stage_for_lives(lives))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_clamps_at_both_ends() {
        assert_eq!(stage_for_lives(100), 0);
        assert_eq!(stage_for_lives(10), 0);
        assert_eq!(stage_for_lives(9), 0);
        assert_eq!(stage_for_lives(1), 8);
        assert_eq!(stage_for_lives(0), 8);
        assert_eq!(stage_for_lives(-5), 8);
    }

    #[test]
    fn stages_grow_as_lives_drop() {
        let stages: Vec<usize> = (1..=9).rev().map(stage_for_lives).collect();
        assert_eq!(stages, (0..=8).collect::<Vec<_>>());
    }

    #[test]
    fn drawings_are_distinct() {
        for pair in STAGES.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn last_drawing_has_full_figure() {
        assert!(for_lives(0).contains(r"/ \"));
        assert!(!for_lives(9).contains('o'));
    }

    #[test]
    fn drawing_clamps_index() {
        assert_eq!(drawing(42), drawing(STAGE_COUNT - 1));
    }
}
