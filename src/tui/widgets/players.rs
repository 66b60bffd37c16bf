// Players panel: the roster with cursor, selection, and draw status.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::draw::player::Player;
use crate::tui::ViewState;

/// Render the roster panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut lines: Vec<Line> = state
        .players
        .iter()
        .enumerate()
        .map(|(i, p)| player_line(p, i == state.cursor, state.selected == Some(p.id)))
        .collect();

    // The name entry prompt appears as an extra row at the bottom.
    if state.entry_mode {
        lines.push(Line::from(Span::styled(
            format!("  Nombre: {}_", state.entry_text),
            Style::default().fg(Color::Cyan),
        )));
    }

    let title = format!(" Jugadores ({}) ", state.players.len());
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

/// Build one roster row.
///
/// Format: "> Jugador 3  ✓ G5" with the cursor marker, a check for drawn
/// players, and the assigned group.
pub fn player_line(player: &Player, at_cursor: bool, is_selected: bool) -> Line<'static> {
    let marker = if at_cursor { "> " } else { "  " };
    let status = match player.group {
        Some(g) => format!(" ✓ G{g}"),
        None => String::new(),
    };

    let mut style = if player.drawn {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    if is_selected {
        style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    if at_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Line::from(Span::styled(
        format!("{marker}{}{status}", player.name),
        style,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::player::Roster;

    fn player(id: u32, drawn: bool, group: Option<u8>) -> Player {
        Player {
            id,
            name: format!("Jugador {id}"),
            drawn,
            group,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn undrawn_player_has_no_group_suffix() {
        let line = player_line(&player(1, false, None), false, false);
        assert_eq!(line_text(&line), "  Jugador 1");
    }

    #[test]
    fn drawn_player_shows_check_and_group() {
        let line = player_line(&player(2, true, Some(5)), false, false);
        assert_eq!(line_text(&line), "  Jugador 2 ✓ G5");
    }

    #[test]
    fn cursor_row_gets_marker_and_reverse() {
        let line = player_line(&player(3, false, None), true, false);
        assert_eq!(line_text(&line), "> Jugador 3");
        assert!(line.spans[0].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn selected_player_is_bold_cyan() {
        let line = player_line(&player(4, false, None), false, true);
        let style = line.spans[0].style;
        assert_eq!(style.fg, Some(Color::Cyan));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn render_does_not_panic_with_full_roster() {
        let backend = ratatui::backend::TestBackend::new(50, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.players = Roster::with_default_players("Jugador").players().to_vec();
        state.entry_mode = true;
        state.entry_text = "Ana".to_string();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
