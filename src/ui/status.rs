use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::{Mode, Model, StatusLevel};

/// The status bar text: mode, file name, dirty marker, position, message.
pub fn status_line(model: &Model) -> String {
    let dirty = if model.dirty { " [+]" } else { "" };
    let mut line = format!(
        "--{}-- {}{}  Ln {}, Col {}",
        model.mode.indicator(),
        model.display_name(),
        dirty,
        model.cursor.row + 1,
        model.cursor.col + 1
    );
    if let Some((message, _)) = model.status() {
        line.push_str("  ");
        line.push_str(message);
    }
    line
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let style = match model.status().map(|(_, level)| level) {
        Some(StatusLevel::Warning) => Style::default().bg(Color::Yellow).fg(Color::Black),
        Some(StatusLevel::Error) => Style::default().bg(Color::Red).fg(Color::White),
        Some(StatusLevel::Info) | None => Style::default().bg(Color::DarkGray).fg(Color::White),
    };
    frame.render_widget(Paragraph::new(status_line(model)).style(style), area);
}

/// What the bottom row shows: the command buffer in COMMAND mode, else nothing.
///
/// A search buffer already carries its `/`; a command gets a `:` prompt.
pub fn command_line(model: &Model) -> String {
    if model.mode != Mode::Command {
        return String::new();
    }
    if model.command_buffer.starts_with('/') {
        model.command_buffer.clone()
    } else {
        format!(":{}", model.command_buffer)
    }
}

/// Screen columns used by the command line, where the cursor sits.
pub fn command_line_width(model: &Model) -> u16 {
    u16::try_from(command_line(model).width()).unwrap_or(u16::MAX)
}

pub fn render_command_line(model: &Model, frame: &mut Frame, area: Rect) {
    frame.render_widget(Paragraph::new(command_line(model)), area);
}
