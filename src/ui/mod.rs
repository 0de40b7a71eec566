//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position and visible range management
//! - the text area with its line-number gutter and selection
//! - the status bar and command line
//! - the image preview overlay

pub mod viewport;

mod overlays;
mod render;
mod status;

pub use render::{display_width, gutter_width, line_number_width, render};
pub use status::{command_line, status_line};

/// Columns a tab character occupies on screen.
pub const TAB_WIDTH: usize = 4;
