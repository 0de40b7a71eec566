use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::app::{Mode, Model};
use crate::highlight::{StyledSpan, SyntaxHighlighter};

use super::{TAB_WIDTH, overlays, status};

const SELECTION_BG: Color = Color::DarkGray;

/// Render the complete UI.
///
/// The text area takes every row except the last two, which hold the status
/// bar and the command line. The viewport is scrolled here so the cursor row
/// stays on screen.
pub fn render(model: &mut Model, frame: &mut Frame, highlighter: &dyn SyntaxHighlighter) {
    let area = frame.area();
    let text_area = Rect {
        height: area.height.saturating_sub(2),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(2),
        height: area.height.min(1),
        ..area
    };
    let command_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.saturating_sub(1).min(1),
        ..area
    };

    model.viewport.resize(text_area.width, text_area.height);
    model.viewport.set_total_lines(model.document.line_count());
    model.viewport.scroll_to_show(model.cursor.row);

    let gutter = gutter_width(model);
    let mut content: Vec<Line> = Vec::new();
    for row in model.viewport.visible_range() {
        let text = model.document.line(row).unwrap_or_default();
        let mut spans = Vec::new();
        if model.show_line_numbers {
            spans.push(Span::styled(
                format!("{:>width$} ", row + 1, width = gutter.saturating_sub(1) as usize),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let styled = if model.syntax_enabled {
            highlighter.highlight_line(text, model.file_path())
        } else {
            vec![StyledSpan::plain(text)]
        };
        let selected = model
            .selection
            .as_ref()
            .and_then(|selection| selection.columns_on_row(row, model.document.line_len(row)));
        spans.extend(line_spans(&styled, selected));
        content.push(Line::from(spans));
    }

    frame.render_widget(Clear, text_area);
    frame.render_widget(Paragraph::new(content), text_area);

    status::render_status_bar(model, frame, status_area);
    status::render_command_line(model, frame, command_area);

    if model.mode == Mode::Command {
        let x = command_area.x + status::command_line_width(model);
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), command_area.y));
    } else if let Some(line) = model.document.line(model.cursor.row) {
        let screen_row = model.cursor.row.saturating_sub(model.viewport.offset());
        let col = display_width(line, model.cursor.col);
        let x = usize::from(text_area.x) + usize::from(gutter) + col;
        let max_x = usize::from(text_area.right().saturating_sub(1));
        let x = u16::try_from(x.min(max_x)).unwrap_or(u16::MAX);
        let y = u16::try_from(screen_row).map_or(u16::MAX, |r| text_area.y.saturating_add(r));
        if y < text_area.bottom() {
            frame.set_cursor_position((x, y));
        }
    }

    if let Some(preview) = &model.preview {
        overlays::render_preview_overlay(preview, frame, area);
    }
}

/// Width of the line-number gutter including its trailing space, or 0 when hidden.
pub fn gutter_width(model: &Model) -> u16 {
    if model.show_line_numbers {
        line_number_width(model.document.line_count()) + 1
    } else {
        0
    }
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}

/// Screen columns taken by the first `col` characters of `line`.
pub fn display_width(line: &str, col: usize) -> usize {
    line.chars().take(col).map(char_width).sum()
}

fn char_width(ch: char) -> usize {
    if ch == '\t' {
        TAB_WIDTH
    } else {
        ch.width().unwrap_or(0)
    }
}

/// Convert highlighted spans into ratatui spans, expanding tabs and laying the
/// selection background over the `selected` character columns.
fn line_spans(
    styled: &[StyledSpan],
    selected: Option<std::ops::Range<usize>>,
) -> Vec<Span<'static>> {
    let mut out: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut current_style = Style::default();
    let mut col = 0usize;

    for span in styled {
        let base = span.fg.map_or_else(Style::default, |fg| {
            Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b))
        });
        for ch in span.text.chars() {
            let style = if selected.as_ref().is_some_and(|range| range.contains(&col)) {
                base.bg(SELECTION_BG)
            } else {
                base
            };
            if style != current_style && !current.is_empty() {
                out.push(Span::styled(std::mem::take(&mut current), current_style));
            }
            current_style = style;
            if ch == '\t' {
                current.push_str(&" ".repeat(TAB_WIDTH));
            } else {
                current.push(ch);
            }
            col += 1;
        }
    }
    if !current.is_empty() {
        out.push(Span::styled(current, current_style));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_number_width() {
        assert_eq!(line_number_width(1), 1);
        assert_eq!(line_number_width(9), 1);
        assert_eq!(line_number_width(10), 2);
        assert_eq!(line_number_width(12_345), 5);
    }

    #[test]
    fn test_display_width_expands_tabs() {
        assert_eq!(display_width("\tab", 1), TAB_WIDTH);
        assert_eq!(display_width("\tab", 3), TAB_WIDTH + 2);
    }

    #[test]
    fn test_display_width_counts_wide_chars() {
        assert_eq!(display_width("日本", 2), 4);
    }

    #[test]
    fn test_line_spans_splits_at_selection_edges() {
        let spans = line_spans(&[StyledSpan::plain("abcdef")], Some(2..4));
        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["ab", "cd", "ef"]);
        assert_eq!(spans[1].style.bg, Some(SELECTION_BG));
        assert_eq!(spans[0].style.bg, None);
    }

    #[test]
    fn test_line_spans_keeps_highlight_colors() {
        let fg = crate::highlight::HighlightColor { r: 1, g: 2, b: 3 };
        let spans = line_spans(
            &[
                StyledSpan {
                    text: "fn".to_string(),
                    fg: Some(fg),
                },
                StyledSpan::plain(" main"),
            ],
            None,
        );
        assert_eq!(spans[0].style.fg, Some(Color::Rgb(1, 2, 3)));
        assert_eq!(spans[1].content, " main");
    }
}
