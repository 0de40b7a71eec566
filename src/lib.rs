// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. media::MediaKind)
    clippy::module_name_repetitions
)]

//! # Crane
//!
//! A modal, keyboard-driven terminal text editor.
//!
//! Crane edits plain UTF-8 text with:
//! - NORMAL, INSERT, VISUAL and COMMAND modes
//! - Bounded undo/redo history
//! - Search and replace-all
//! - Syntax highlighting and a line-number gutter
//! - Image (ASCII) and audio previews
//!
//! ## Architecture
//!
//! Crane uses The Elm Architecture (TEA) pattern:
//! - **Model**: Editor state
//! - **Message**: Events and actions
//! - **Update**: The modal state machine
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: Document, cursor and history
//! - [`command`]: Colon-command parsing
//! - [`search`]: Forward search
//! - [`input`]: Key translation
//! - [`ui`]: Terminal UI components
//! - [`highlight`]: Syntax highlighting
//! - [`media`]: Audio and image previews
//! - [`config`]: Persisted default flags

pub mod app;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod input;
pub mod media;
pub mod search;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Mode, Model, handle_key, update};
    pub use crate::editor::{Cursor, Direction, Document, History};
    pub use crate::error::{EditorError, Result};
    pub use crate::input::Key;
    pub use crate::ui::viewport::Viewport;
}
