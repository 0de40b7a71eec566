//! Keyboard input, independent of the terminal backend.
//!
//! The editor state machine consumes [`Key`] values. [`Key::from_event`]
//! translates crossterm key events and drops the ones the editor ignores.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key press the editor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character (including tab).
    Char(char),
    Enter,
    Esc,
    Backspace,
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Translate a crossterm key event.
    ///
    /// Releases and Ctrl or Alt chords are ignored. Ctrl+Alt together is
    /// AltGr on Windows and still yields the character.
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let alt = event.modifiers.contains(KeyModifiers::ALT);
        if ctrl != alt {
            return None;
        }
        match event.code {
            KeyCode::Char(c) => Some(Self::Char(c)),
            KeyCode::Tab => Some(Self::Char('\t')),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Esc => Some(Self::Esc),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            _ => None,
        }
    }

    /// Keys for each character of `text`, for scripting input in tests.
    pub fn chars(text: &str) -> impl Iterator<Item = Self> + '_ {
        text.chars().map(Self::Char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_char_translates() {
        let key = Key::from_event(&press(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(key, Some(Key::Char('x')));
    }

    #[test]
    fn test_shifted_char_translates() {
        let key = Key::from_event(&press(KeyCode::Char('X'), KeyModifiers::SHIFT));
        assert_eq!(key, Some(Key::Char('X')));
    }

    #[test]
    fn test_control_chord_is_ignored() {
        let key = Key::from_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(key, None);
    }

    #[test]
    fn test_alt_chord_is_ignored() {
        let key = Key::from_event(&press(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(key, None);
    }

    #[test]
    fn test_altgr_char_translates() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        assert_eq!(Key::from_event(&press(KeyCode::Char('@'), altgr)), Some(Key::Char('@')));
        assert_eq!(Key::from_event(&press(KeyCode::Char('{'), altgr)), Some(Key::Char('{')));
    }

    #[test]
    fn test_tab_is_a_char() {
        let key = Key::from_event(&press(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(key, Some(Key::Char('\t')));
    }

    #[test]
    fn test_release_is_ignored() {
        let mut event = press(KeyCode::Enter, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(Key::from_event(&event), None);
    }

    #[test]
    fn test_function_keys_are_ignored() {
        assert_eq!(Key::from_event(&press(KeyCode::F(1), KeyModifiers::NONE)), None);
    }
}
