use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

/// Show an ASCII image preview in a centered popup.
pub fn render_preview_overlay(preview: &[String], frame: &mut Frame, area: Rect) {
    let content_width = preview.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    // Border(1) + padding(1) on each side
    let popup_width = u16::try_from(content_width + 4).unwrap_or(u16::MAX);
    let popup_height = u16::try_from(preview.len() + 5).unwrap_or(u16::MAX);
    let popup = centered_popup_rect(popup_width.max(24), popup_height, area);

    let mut lines: Vec<Line> = preview.iter().map(|l| Line::raw(l.clone())).collect();
    lines.push(Line::styled(
        "any key closes",
        Style::default().fg(Color::Indexed(245)),
    ));

    let block = Block::default()
        .title("Preview")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_popup_rect(44, 24, area);
        assert_eq!(popup, area);
    }

    #[test]
    fn test_centered_popup_rect_centers() {
        let popup = centered_popup_rect(20, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(popup, Rect::new(30, 7, 20, 10));
    }
}
