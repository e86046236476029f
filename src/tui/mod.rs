//! Terminal User Interface module
//!
//! The interactive interface for Outlay, built with ratatui. One view per
//! screen of the app: home, add expense, transactions, weekly and monthly
//! summaries, and income.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
