use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::model::Mode;
use crate::app::{App, Message, Model};
use crate::editor::Direction;
use crate::input::Key;

impl App {
    pub(super) fn handle_event(&self, event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if is_quit_chord(key) => Some(Message::Quit),
            Event::Key(key) => Key::from_event(key).and_then(|key| message_for_key(model, key)),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }
}

/// Ctrl-C quits from any mode, like `:q`.
fn is_quit_chord(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && key.modifiers == KeyModifiers::CONTROL
        && matches!(key.code, KeyCode::Char('c' | 'C'))
}

/// What `key` means in the model's current mode.
///
/// Returns `None` for keys the mode ignores. While an image preview is open,
/// any key closes it.
pub fn message_for_key(model: &Model, key: Key) -> Option<Message> {
    if model.preview.is_some() {
        return Some(Message::DismissPreview);
    }
    match model.mode {
        Mode::Normal => normal_key(key),
        Mode::Insert => insert_key(key),
        Mode::Visual => visual_key(key),
        Mode::Command => command_key(key),
    }
}

fn motion(key: Key) -> Option<Direction> {
    match key {
        Key::Char('h') | Key::Left => Some(Direction::Left),
        Key::Char('j') | Key::Down => Some(Direction::Down),
        Key::Char('k') | Key::Up => Some(Direction::Up),
        Key::Char('l') | Key::Right => Some(Direction::Right),
        _ => None,
    }
}

fn normal_key(key: Key) -> Option<Message> {
    if let Some(direction) = motion(key) {
        return Some(Message::MoveCursor(direction));
    }
    match key {
        Key::Char('i') => Some(Message::EnterInsert),
        Key::Char('v') => Some(Message::EnterVisual),
        Key::Char(':') => Some(Message::EnterCommand),
        Key::Char('/') => Some(Message::EnterSearch),
        Key::Char('u') => Some(Message::Undo),
        Key::Char('r') => Some(Message::Redo),
        Key::Char('p') => Some(Message::PreviewUnderCursor),
        _ => None,
    }
}

fn insert_key(key: Key) -> Option<Message> {
    match key {
        Key::Esc => Some(Message::ExitToNormal),
        Key::Enter => Some(Message::SplitLine),
        Key::Backspace => Some(Message::Backspace),
        Key::Char(ch) => Some(Message::InsertChar(ch)),
        Key::Left => Some(Message::MoveCursor(Direction::Left)),
        Key::Right => Some(Message::MoveCursor(Direction::Right)),
        Key::Up => Some(Message::MoveCursor(Direction::Up)),
        Key::Down => Some(Message::MoveCursor(Direction::Down)),
    }
}

fn visual_key(key: Key) -> Option<Message> {
    if let Some(direction) = motion(key) {
        return Some(Message::MoveCursor(direction));
    }
    match key {
        Key::Esc | Key::Enter => Some(Message::ExitToNormal),
        _ => None,
    }
}

fn command_key(key: Key) -> Option<Message> {
    match key {
        Key::Enter => Some(Message::SubmitCommand),
        Key::Esc => Some(Message::ExitToNormal),
        Key::Backspace => Some(Message::CommandBackspace),
        Key::Char(ch) => Some(Message::CommandInput(ch)),
        Key::Left | Key::Right | Key::Up | Key::Down => None,
    }
}
