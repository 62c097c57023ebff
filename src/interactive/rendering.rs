//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::RoundStatus;
use crate::output::formatters::{spaced, tried_list};
use crate::output::gallows;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word, lives, messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_round_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "HANGMAN - {} ({})",
        app.player,
        app.difficulty.name()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.game.status() {
        RoundStatus::Active => Color::White,
        RoundStatus::Won => Color::Green,
        RoundStatus::Lost => Color::Red,
    };

    let drawing = Paragraph::new(gallows::drawing(app.game.gallows_stage()))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(drawing, area);
}

fn render_round_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(3), // Lives
            Constraint::Length(3), // Tried guesses
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_lives(f, app, chunks[1]);
    render_tried(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let round = app.game.round();
    let text = if app.input_mode == InputMode::RoundOver {
        round.secret().chars().iter().map(char::to_string).collect::<Vec<_>>().join(" ")
    } else {
        spaced(round.revealed())
    };

    let word = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(format!(" Word ({} letters) ", round.secret().len()))
            .borders(Borders::ALL),
    );
    f.render_widget(word, area);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let lives = app.game.display_lives();
    let starting = app.game.starting_lives().max(1);
    let percent = (f64::from(lives.max(0)) / f64::from(starting) * 100.0).min(100.0) as u16;

    let color = if percent > 50 {
        Color::Green
    } else if percent > 20 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Lives ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{lives}/{starting}"));
    f.render_widget(gauge, area);
}

fn render_tried(f: &mut Frame, app: &App, area: Rect) {
    let tried = Paragraph::new(tried_list(app.game.round().tried()))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Tried ").borders(Borders::ALL));
    f.render_widget(tried, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => match app.game.status() {
            RoundStatus::Won => (
                " YOU WON! | Press 'n' for a new round or 'q' to quit ",
                "",
                Color::Green,
            ),
            _ => (
                " GAME OVER | Press 'n' for a new round or 'q' to quit ",
                "",
                Color::Red,
            ),
        },
        InputMode::Guessing => (
            " Enter a letter or the whole word | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats_text = format!(
        "Rounds: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
        InputMode::RoundOver => "q: Quit | n: New Round",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
