//! Interactive TUI interface
//!
//! Full-screen play with ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
