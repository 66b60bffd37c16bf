// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the draw dashboard:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Roulette Banner (3 rows)                          |
// +-------------------------+------------------------+
// | Players (50%)           | Groups (50%)           |
// |                         |                        |
// +-------------------------+------------------------+
// | Message Bar (1 row)                               |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: draw progress, selection, spin indicator.
    pub status_bar: Rect,
    /// Second zone: the roulette label.
    pub roulette_banner: Rect,
    /// Left side of the middle section: the player roster.
    pub players: Rect,
    /// Right side of the middle section: the eight groups.
    pub groups: Rect,
    /// Second-to-last row: user-facing messages.
    pub message_bar: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
///
/// Fixed heights for the bars and the roulette banner, with the remaining
/// space split evenly between the players panel and the groups panel.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | roulette(3) | middle(fill) | message(1) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(3), // roulette banner
            Constraint::Min(10),   // middle section (players + groups)
            Constraint::Length(1), // message bar
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let roulette_banner = vertical[1];
    let middle = vertical[2];
    let message_bar = vertical[3];
    let help_bar = vertical[4];

    // Horizontal: players (50%) | groups (50%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(middle);

    AppLayout {
        status_bar,
        roulette_banner,
        players: horizontal[0],
        groups: horizontal[1],
        message_bar,
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
