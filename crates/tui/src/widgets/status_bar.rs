//! Status bar rendering widget.
//!
//! This module provides the footer status bar with keybinding hints and a
//! short status message.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the status bar with a status message and keybinding hints.
///
/// # Layout
///
/// ```text
/// +--------------------------------------------------------------+
/// | 8 of 20 tasks  |  q Quit  ↑↓ Focus  Enter Open  Esc Cancel   |
/// +--------------------------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskdeck_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 100, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar("8 of 20 tasks", area, &mut buf);
/// ```
pub fn render_status_bar(message: &str, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let message_style = Style::default().fg(Color::Cyan);

    let mut spans = Vec::new();
    if !message.is_empty() {
        spans.push(Span::styled(message, message_style));
        spans.push(Span::styled("  |  ", text_style));
    }
    spans.extend([
        Span::styled("q", key_style),
        Span::styled(" Quit  ", text_style),
        Span::styled("↑↓", key_style),
        Span::styled(" Focus  ", text_style),
        Span::styled("Enter", key_style),
        Span::styled(" Open/Save  ", text_style),
        Span::styled("Esc", key_style),
        Span::styled(" Cancel  ", text_style),
        Span::styled("1-3", key_style),
        Span::styled(" Sort", text_style),
    ]);

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}
