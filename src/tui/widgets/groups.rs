// Groups panel: the eight groups and their two slots each.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::protocol::GroupRow;
use crate::tui::ViewState;

/// Render the groups panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let lines: Vec<Line> = state.groups.iter().map(group_line).collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Grupos "));
    frame.render_widget(paragraph, area);
}

/// Build one group row: "Grupo 3: Jugador 1, Jugador 9" with empty slots
/// shown as dashes. Full groups render dim.
pub fn group_line(group: &GroupRow) -> Line<'static> {
    let slot = |s: &Option<String>| s.clone().unwrap_or_else(|| "—".to_string());
    let text = format!(
        " Grupo {}: {}, {}",
        group.number,
        slot(&group.slot_one),
        slot(&group.slot_two)
    );

    let style = if group.is_full() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(Span::styled(text, style))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
