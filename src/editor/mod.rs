//! The editing core: document storage, cursor motion, and undo history.
//!
//! These types know nothing about modes or terminals. The application
//! layer composes them into the editor state machine.

mod cursor;
mod document;
mod history;

pub use cursor::{Cursor, Direction, Selection};
pub use document::Document;
pub use history::{HISTORY_LIMIT, History};
