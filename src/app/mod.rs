//! Editor state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete editor state
//! - [`Message`]: All possible events and actions
//! - [`update`]: State transitions, i.e. the modal state machine
//! - [`App::run`]: Main event loop with rendering

mod commands;
mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use input::message_for_key;
pub use model::{Mode, Model, StatusLevel};
pub use update::{Message, handle_key, update};

use std::path::PathBuf;

use crate::media::{MediaPreviewer, TerminalPreviewer};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    syntax_enabled: bool,
    show_line_numbers: bool,
    previewer: Box<dyn MediaPreviewer>,
}

impl App {
    /// Create a new application, optionally editing `file_path`.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            syntax_enabled: true,
            show_line_numbers: true,
            previewer: Box::new(TerminalPreviewer),
        }
    }

    /// Enable or disable syntax highlighting at startup.
    #[must_use]
    pub const fn with_syntax(mut self, enabled: bool) -> Self {
        self.syntax_enabled = enabled;
        self
    }

    /// Show or hide the line-number gutter at startup.
    #[must_use]
    pub const fn with_line_numbers(mut self, visible: bool) -> Self {
        self.show_line_numbers = visible;
        self
    }

    /// Use a different media previewer.
    #[must_use]
    pub fn with_previewer(mut self, previewer: Box<dyn MediaPreviewer>) -> Self {
        self.previewer = previewer;
        self
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("file_path", &self.file_path)
            .field("syntax_enabled", &self.syntax_enabled)
            .field("show_line_numbers", &self.show_line_numbers)
            .finish_non_exhaustive()
    }
}
