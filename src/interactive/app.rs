//! TUI application state and logic

use crate::core::{Difficulty, DifficultyConfig, Outcome, RoundStatus};
use crate::game::{Game, GameError, closing_remark};
use crate::scores::ScoreSink;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input accepted in the guess box
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<'a> {
    pub source: &'a dyn WordSource,
    pub sink: &'a dyn ScoreSink,
    pub player: String,
    pub difficulty: Difficulty,
    pub config: DifficultyConfig,
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        crate::output::formatters::percentage(self.games_won, self.total_games)
    }
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if no word can be drawn from `source`.
    pub fn new(
        source: &'a dyn WordSource,
        sink: &'a dyn ScoreSink,
        player: impl Into<String>,
        difficulty: Difficulty,
        config: DifficultyConfig,
        mut rng: StdRng,
    ) -> Result<Self> {
        let player = player.into();
        let game = Game::start(player.clone(), config, source, &mut rng)?;

        let mut app = Self {
            source,
            sink,
            player,
            difficulty,
            config,
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        };
        app.add_message(
            "Welcome! Type a letter or the whole word and press Enter.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&input, self.sink) {
            Ok(turn) => {
                let style = match turn.outcome {
                    Outcome::LetterFound { .. } | Outcome::WordFound => MessageStyle::Success,
                    Outcome::AlreadyTried => MessageStyle::Info,
                    Outcome::LetterMissing | Outcome::WordMissing => MessageStyle::Error,
                };
                self.add_message(&format!("{}: {}", turn.guess, turn.outcome.message()), style);

                if turn.status.is_over() {
                    self.end_round(turn.status == RoundStatus::Won);
                }
            }
            Err(GameError::InvalidInput(_)) => {
                self.add_message(crate::game::INVALID_INPUT_MESSAGE, MessageStyle::Error);
            }
            Err(GameError::RoundOver) => {
                let won = self.game.status() == RoundStatus::Won;
                self.end_round(won);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn end_round(&mut self, won: bool) {
        self.stats.total_games += 1;
        self.stats.games_won += usize::from(won);
        self.input_mode = InputMode::RoundOver;

        let remark = closing_remark(won, &mut self.rng);
        let style = if won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(
            &format!("{remark} The word was {}.", self.game.round().secret()),
            style,
        );
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match Game::start(self.player.clone(), self.config, self.source, &mut self.rng) {
            Ok(game) => {
                self.game = game;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New round started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::NullSink;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn app<'a>(source: &'a WordList) -> App<'a> {
        App::new(
            source,
            &NullSink,
            "tester",
            Difficulty::Hard,
            Difficulty::Hard.config(),
            StdRng::seed_from_u64(31),
        )
        .unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_enter_submits_a_guess() {
        let source = WordList::new("test", words_from_slice(&["loup"]));
        let mut app = app(&source);

        type_line(&mut app, "z");

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.game.round().lives(), 4);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn backspace_edits_the_buffer() {
        let source = WordList::new("test", words_from_slice(&["loup"]));
        let mut app = app(&source);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.input_buffer, "a");
    }

    #[test]
    fn letters_q_and_n_are_guesses_while_playing() {
        let source = WordList::new("test", words_from_slice(&["loup"]));
        let mut app = app(&source);

        type_line(&mut app, "q");

        assert!(!app.should_quit);
        assert!(app.game.round().tried().contains("q"));
    }

    #[test]
    fn invalid_input_shows_error() {
        let source = WordList::new("test", words_from_slice(&["loup"]));
        let mut app = app(&source);

        type_line(&mut app, "4");

        assert_eq!(app.game.round().lives(), 5);
        assert_eq!(
            app.messages.last().unwrap().text,
            crate::game::INVALID_INPUT_MESSAGE
        );
    }

    #[test]
    fn winning_switches_to_round_over_then_new_game() {
        let source = WordList::new("test", words_from_slice(&["loup"]));
        let mut app = app(&source);

        type_line(&mut app, "loup");
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.status(), RoundStatus::Active);
        assert!(app.game.round().tried().is_empty());
    }

    #[test]
    fn one_letter_word_can_be_won() {
        let source = WordList::new("test", words_from_slice(&["a"]));
        let mut app = app(&source);

        type_line(&mut app, "b");
        assert_eq!(app.input_mode, InputMode::Guessing);

        type_line(&mut app, "a");
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn losing_counts_a_game() {
        let source = WordList::new("test", words_from_slice(&["loup"]));
        let mut app = app(&source);

        type_line(&mut app, "chat");
        type_line(&mut app, "chien");

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn quit_keys() {
        let source = WordList::new("test", words_from_slice(&["loup"]));

        let mut app = app(&source);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = app_with_ctrl_c(&source);
        assert!(app.should_quit);
        app.should_quit = false;
        type_line(&mut app, "loup");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    fn app_with_ctrl_c<'a>(source: &'a WordList) -> App<'a> {
        let mut app = app(source);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        app
    }

    #[test]
    fn messages_are_capped() {
        let source = WordList::new("test", words_from_slice(&["loup"]));
        let mut app = app(&source);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
