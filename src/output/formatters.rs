//! Formatting utilities for terminal output

use crate::core::{RevealedForm, TriedGuesses};

/// Revealed form with a space between positions, easier to count
///
/// # Examples
/// ```
/// use hangman::core::{RevealedForm, SecretWord};
/// use hangman::output::formatters::spaced;
///
/// let secret = SecretWord::new("chat").unwrap();
/// assert_eq!(spaced(&RevealedForm::hidden(&secret)), "_ _ _ _");
/// ```
#[must_use]
pub fn spaced(form: &RevealedForm) -> String {
    let mut result = String::with_capacity(form.len() * 2);
    for (i, c) in form.slots().iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(*c);
    }
    result
}

/// Comma-separated tried guesses in submission order
#[must_use]
pub fn tried_list(tried: &TriedGuesses) -> String {
    if tried.is_empty() {
        return "none".to_string();
    }
    tried.iter().collect::<Vec<_>>().join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Lives left as a bar against the starting lives
#[must_use]
pub fn lives_bar(lives: i32, starting_lives: i32) -> String {
    let width = usize::try_from(starting_lives).unwrap_or(0);
    create_progress_bar(f64::from(lives), f64::from(starting_lives), width)
}

/// Percentage of `part` in `total`, 0 for an empty total
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
