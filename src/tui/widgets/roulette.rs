// Roulette banner widget: the big label the draw animates.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the roulette banner into the given area.
///
/// Teaser ticks show a bare group number; the final tick shows
/// "Grupo N" highlighted.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(display_label(state))
        .alignment(Alignment::Center)
        .style(label_style(state))
        .block(Block::default().borders(Borders::ALL).title("Sorteo"));
    frame.render_widget(paragraph, area);
}

/// Text for the banner; a placeholder before the first spin.
pub fn display_label(state: &ViewState) -> String {
    if state.spin_label.is_empty() {
        "—".to_string()
    } else {
        state.spin_label.clone()
    }
}

/// Teaser labels dim while spinning; the final reveal is bold.
pub fn label_style(state: &ViewState) -> Style {
    if state.spinning {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
