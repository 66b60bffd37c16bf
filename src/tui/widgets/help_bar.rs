// Help bar widget: keyboard shortcut hints.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the help bar into the given area. The hints follow the active
/// input mode.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        help_text(state),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Shortcut hints for the current input mode.
pub fn help_text(state: &ViewState) -> &'static str {
    if state.confirm_quit {
        " s:Salir | n:Cancelar"
    } else if state.entry_mode {
        " Enter:Agregar | Esc:Cancelar"
    } else {
        " ↑↓:Mover | Enter:Seleccionar | s:Sortear | a:Agregar | d:Eliminar | o:Ordenar | q:Salir"
    }
}
