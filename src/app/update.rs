use std::path::PathBuf;

use crate::app::Model;
use crate::app::model::{Mode, StatusLevel};
use crate::editor::{Cursor, Direction, Selection};
use crate::input::Key;
use crate::media::MediaKind;

use super::input::message_for_key;

/// All possible events and actions in the editor.
///
/// Key presses are turned into messages by [`message_for_key`], which
/// knows what each key means in the active mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Mode transitions
    /// NORMAL -> INSERT
    EnterInsert,
    /// NORMAL -> VISUAL, anchoring a selection at the cursor
    EnterVisual,
    /// NORMAL -> COMMAND with an empty buffer
    EnterCommand,
    /// NORMAL -> COMMAND with a `/` buffer
    EnterSearch,
    /// Back to NORMAL, dropping the selection and command buffer
    ExitToNormal,

    // Motion
    /// Move cursor one step
    MoveCursor(Direction),

    // Editing
    /// Insert a character at the cursor
    InsertChar(char),
    /// Split line at cursor (Enter)
    SplitLine,
    /// Delete before cursor, joining lines at column 0 (Backspace)
    Backspace,
    /// Restore the previous snapshot
    Undo,
    /// Re-apply the last undone snapshot
    Redo,

    // Command line
    /// Append a character to the command buffer
    CommandInput(char),
    /// Remove the last character of the command buffer
    CommandBackspace,
    /// Run the command buffer as a command or search
    SubmitCommand,

    // Media
    /// Preview the file named by the word under the cursor
    PreviewUnderCursor,
    /// Close the image preview overlay
    DismissPreview,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the editor (Ctrl-C)
    Quit,
}

/// Update the model based on a message.
///
/// This is the editor state machine: every mode transition and edit
/// happens here. Edits snapshot the document exactly once before mutating.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::EnterInsert => {
            model.mode = Mode::Insert;
        }
        Message::EnterVisual => {
            model.mode = Mode::Visual;
            model.selection = Some(Selection::new(model.cursor));
        }
        Message::EnterCommand => {
            model.mode = Mode::Command;
            model.command_buffer.clear();
        }
        Message::EnterSearch => {
            model.mode = Mode::Command;
            model.command_buffer = "/".to_string();
        }
        Message::ExitToNormal => {
            model.mode = Mode::Normal;
            model.selection = None;
            model.command_buffer.clear();
        }

        Message::MoveCursor(direction) => {
            model.cursor = model.cursor.moved(direction, &model.document);
            if let Some(selection) = model.selection.as_mut() {
                selection.active = model.cursor;
            }
        }

        Message::InsertChar(ch) => {
            let Cursor { row, col } = model.cursor;
            model.snapshot();
            model.document.insert_char(row, col, ch);
            model.cursor = Cursor::at(row, col + 1);
        }
        Message::SplitLine => {
            let Cursor { row, col } = model.cursor;
            model.snapshot();
            model.document.split_line(row, col);
            model.cursor = Cursor::at(row + 1, 0);
        }
        Message::Backspace => {
            let Cursor { row, col } = model.cursor;
            if col > 0 {
                model.snapshot();
                model.document.delete_char_before(row, col);
                model.cursor = Cursor::at(row, col - 1);
            } else if row > 0 {
                let prev_len = model.document.line_len(row - 1);
                model.snapshot();
                model.document.join_with_previous(row);
                model.cursor = Cursor::at(row - 1, prev_len);
            }
        }
        Message::Undo => model.undo(),
        Message::Redo => model.redo(),

        Message::CommandInput(ch) => {
            model.command_buffer.push(ch);
        }
        Message::CommandBackspace => {
            model.command_buffer.pop();
        }
        Message::SubmitCommand => {
            let line = std::mem::take(&mut model.command_buffer);
            model.mode = Mode::Normal;
            model.run_command_line(&line);
        }

        Message::PreviewUnderCursor => {
            let word = model
                .document
                .word_at(model.cursor.row, model.cursor.col)
                .map(PathBuf::from);
            match word {
                Some(path) if MediaKind::for_path(&path).is_some() => model.request_preview(path),
                Some(path) => model.set_status(
                    StatusLevel::Warning,
                    format!("Cannot preview: {}", path.display()),
                ),
                None => {}
            }
        }
        Message::DismissPreview => {
            model.preview = None;
        }

        Message::Resize(width, height) => {
            model.viewport.resize(width, height.saturating_sub(2));
        }

        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}

/// Route a key through the active mode and apply the resulting message.
///
/// Keys with no meaning in the current mode leave the model untouched.
pub fn handle_key(model: Model, key: Key) -> Model {
    match message_for_key(&model, key) {
        Some(msg) => update(model, msg),
        None => model,
    }
}
