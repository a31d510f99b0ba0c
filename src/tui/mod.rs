//! Terminal User Interface module
//!
//! This module provides the interactive booking TUI using ratatui: a
//! landing screen and a modal four-step booking dialog with toast
//! notifications and a celebration effect.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
