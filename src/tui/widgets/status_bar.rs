// Status bar widget: draw progress, current selection, spin indicator.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::draw::player::Roster;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [spin indicator] [drawn counter] [selection]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    let (dot, dot_color) = spin_indicator(state.spinning);
    spans.push(Span::styled(
        format!(" {} ", dot),
        Style::default().fg(dot_color),
    ));

    spans.push(Span::styled(
        format!("Sorteados {}/{}", state.drawn_count, Roster::CAPACITY),
        Style::default().fg(Color::White),
    ));

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));

    spans.push(Span::styled(
        selection_label(state),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Return the spin dot character and its color.
pub fn spin_indicator(spinning: bool) -> (&'static str, Color) {
    if spinning {
        ("●", Color::Yellow)
    } else {
        ("●", Color::Green)
    }
}

/// Human-readable description of the current selection.
pub fn selection_label(state: &ViewState) -> String {
    match state.selected {
        Some(id) => {
            let name = state
                .players
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.name.as_str())
                .unwrap_or("?");
            format!("Seleccionado: {name}")
        }
        None => "Sin selección".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_indicator_colors() {
        assert_eq!(spin_indicator(true), ("●", Color::Yellow));
        assert_eq!(spin_indicator(false), ("●", Color::Green));
    }

    #[test]
    fn selection_label_without_selection() {
        let state = ViewState::default();
        assert_eq!(selection_label(&state), "Sin selección");
    }

    #[test]
    fn selection_label_resolves_name() {
        let mut state = ViewState::default();
        state.players = Roster::with_default_players("Jugador").players().to_vec();
        state.selected = Some(3);
        assert_eq!(selection_label(&state), "Seleccionado: Jugador 3");
    }

    #[test]
    fn selection_label_with_stale_id() {
        let mut state = ViewState::default();
        state.selected = Some(99);
        assert_eq!(selection_label(&state), "Seleccionado: ?");
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
