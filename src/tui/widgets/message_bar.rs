// Message bar widget: the last user-facing message.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the message bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {}", state.message),
        Style::default().fg(Color::Yellow),
    )))
    .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}
