//! Simple line mode
//!
//! Text-based play without the TUI: the screen is cleared every turn, the
//! gallows and the word are printed, and one line of input is read.

use crate::core::{DifficultyConfig, RoundStatus};
use crate::game::{Game, GameError, closing_remark};
use crate::output::{clear_screen, print_round, print_round_end};
use crate::scores::ScoreSink;
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use rand::RngCore;
use std::io::{self, BufRead, Write};

/// Input that abandons the current round
pub const QUIT: &str = "*";

/// Input that starts another round
pub const REPLAY: &str = "+";

/// Rounds played in one line-mode run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleSummary {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

/// How a single round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    Abandoned,
    InputClosed,
}

/// Run the line mode on stdin
///
/// # Errors
///
/// Returns an error if no word can be drawn or if reading input fails.
pub fn run_simple<S: WordSource + ?Sized>(
    source: &S,
    player: &str,
    config: DifficultyConfig,
    sink: &dyn ScoreSink,
) -> Result<SimpleSummary> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    play_rounds(&mut input, source, player, config, sink, &mut rand::rng())
}

/// Play rounds until the player declines a replay or input runs out
///
/// # Errors
///
/// Returns an error if no word can be drawn or if reading input fails.
pub fn play_rounds<R: BufRead, S: WordSource + ?Sized>(
    input: &mut R,
    source: &S,
    player: &str,
    config: DifficultyConfig,
    sink: &dyn ScoreSink,
    rng: &mut dyn RngCore,
) -> Result<SimpleSummary> {
    let mut summary = SimpleSummary::default();

    loop {
        let mut game = Game::start(player, config, source, rng)?;
        let end = play_round(&mut game, input, sink)?;

        clear_screen();
        match end {
            RoundEnd::Finished => {
                let won = game.status() == RoundStatus::Won;
                summary.rounds_played += 1;
                summary.rounds_won += usize::from(won);
                print_round_end(&game, closing_remark(won, rng));
            }
            RoundEnd::Abandoned => {
                println!("{}", "You left the game.".yellow());
                print_round_end(&game, "");
            }
            RoundEnd::InputClosed => break,
        }

        let answer = read_input(input, "Play again? ('+' to replay, '*' to quit)")?;
        if answer.as_deref() != Some(REPLAY) {
            break;
        }
    }

    println!("\n👋 Thanks for playing! See you soon.\n");
    Ok(summary)
}

fn play_round<R: BufRead>(
    game: &mut Game,
    input: &mut R,
    sink: &dyn ScoreSink,
) -> Result<RoundEnd> {
    loop {
        clear_screen();
        print_round(game);
        println!();

        let Some(line) = read_input(input, "Enter a letter or the whole word (* to quit)")? else {
            return Ok(RoundEnd::InputClosed);
        };
        if line == QUIT {
            return Ok(RoundEnd::Abandoned);
        }

        match game.submit(&line, sink) {
            Ok(turn) if turn.status.is_over() => return Ok(RoundEnd::Finished),
            Err(GameError::RoundOver) => return Ok(RoundEnd::Finished),
            // Rejected input leaves a message on the game for the next redraw
            Ok(_) | Err(GameError::InvalidInput(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }
}

/// Prompt and read one trimmed line, `None` once input is exhausted
fn read_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::scores::{NullSink, ScoreError};
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use rand::{SeedableRng, rngs::StdRng};
    use std::cell::RefCell;
    use std::io::Cursor;

    #[derive(Default)]
    struct MemorySink(RefCell<Vec<bool>>);

    impl ScoreSink for MemorySink {
        fn record(&self, _player: &str, won: bool) -> Result<(), ScoreError> {
            self.0.borrow_mut().push(won);
            Ok(())
        }
    }

    fn play(script: &str, words: &[&str], sink: &dyn ScoreSink) -> SimpleSummary {
        let source = WordList::new("test", words_from_slice(words));
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut rng = StdRng::seed_from_u64(21);
        play_rounds(
            &mut input,
            &source,
            "tester",
            Difficulty::Hard.config(),
            sink,
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn whole_word_wins_and_declined_replay_stops() {
        let sink = MemorySink::default();
        let summary = play("loup\n*\n", &["loup"], &sink);

        assert_eq!(
            summary,
            SimpleSummary {
                rounds_played: 1,
                rounds_won: 1
            }
        );
        assert_eq!(*sink.0.borrow(), vec![true]);
    }

    #[test]
    fn replay_plays_another_round() {
        let sink = MemorySink::default();
        // Hard gives 5 lives: two wrong words lose the second round
        let summary = play("loup\n+\nchat\nchien\n*\n", &["loup"], &sink);

        assert_eq!(summary.rounds_played, 2);
        assert_eq!(summary.rounds_won, 1);
        assert_eq!(*sink.0.borrow(), vec![true, false]);
    }

    #[test]
    fn invalid_input_is_ignored() {
        let summary = play("l0up\n!!\nloup\n", &["loup"], &NullSink);
        assert_eq!(summary.rounds_won, 1);
    }

    #[test]
    fn one_letter_word_round_can_be_played() {
        let sink = MemorySink::default();
        let summary = play("b\na\n*\n", &["a"], &sink);

        assert_eq!(
            summary,
            SimpleSummary {
                rounds_played: 1,
                rounds_won: 1
            }
        );
        assert_eq!(*sink.0.borrow(), vec![true]);
    }

    #[test]
    fn quitting_abandons_without_score() {
        let sink = MemorySink::default();
        let summary = play("z\n*\n*\n", &["loup"], &sink);

        assert_eq!(summary, SimpleSummary::default());
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn closed_input_ends_quietly() {
        let summary = play("z\n", &["loup"], &NullSink);
        assert_eq!(summary, SimpleSummary::default());
    }

    #[test]
    fn empty_word_list_is_an_error() {
        let source = WordList::new("empty", Vec::new());
        let mut input = Cursor::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);

        let result = play_rounds(
            &mut input,
            &source,
            "tester",
            Difficulty::Easy.config(),
            &NullSink,
            &mut rng,
        );
        assert!(result.is_err());
    }
}
