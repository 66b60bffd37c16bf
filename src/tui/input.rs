// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (cursor movement,
// the name entry prompt, quit confirmation).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;
use crate::protocol::UserCommand;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator (select, draw, add, remove, quit). Returns `None` when
/// the key press was handled locally by mutating `ViewState`.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    // Quit confirmation mode: only s/y/q confirm, n/Esc cancel, the rest blocked
    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    // Name entry mode: capture printable characters and special keys
    if view_state.entry_mode {
        return handle_entry_mode(key_event, view_state);
    }

    // Normal mode key dispatch
    match key_event.code {
        // Cursor movement over the roster
        KeyCode::Up | KeyCode::Char('k') => {
            cursor_up(view_state);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            cursor_down(view_state);
            None
        }

        // Select the player under the cursor
        KeyCode::Enter => view_state.cursor_player_id().map(UserCommand::SelectPlayer),

        // Run the roulette for the selected player
        KeyCode::Char('s') => Some(UserCommand::StartDraw),

        // Reorder the roster by assigned group
        KeyCode::Char('o') => Some(UserCommand::SortByGroup),

        // Open the name entry prompt for a new player
        KeyCode::Char('a') => {
            view_state.entry_mode = true;
            view_state.entry_text.clear();
            None
        }

        // Remove the player under the cursor
        KeyCode::Char('d') | KeyCode::Delete => {
            view_state.cursor_player_id().map(UserCommand::RemovePlayer)
        }

        // Escape drops the current selection
        KeyCode::Esc => Some(UserCommand::ClearSelection),

        // Quit: enter confirmation mode instead of quitting immediately
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// Handle key events while in quit confirmation mode.
///
/// - `s`, `y` or `q` confirms quit (sends UserCommand::Quit)
/// - `n` or `Esc` cancels (returns to normal mode)
/// - All other keys are blocked (no-op)
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('s') | KeyCode::Char('S')
        | KeyCode::Char('y') | KeyCode::Char('Y')
        | KeyCode::Char('q') | KeyCode::Char('Q') => Some(UserCommand::Quit),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None, // Block all other input
    }
}

/// Handle key events while the name entry prompt is open.
///
/// - Printable characters are appended to entry_text
/// - Backspace removes the last character
/// - Enter submits a non-empty name as AddPlayer
/// - Esc cancels and discards the text
fn handle_entry_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.entry_mode = false;
            view_state.entry_text.clear();
            None
        }
        KeyCode::Enter => {
            view_state.entry_mode = false;
            let name = view_state.entry_text.trim().to_string();
            view_state.entry_text.clear();
            if name.is_empty() {
                None
            } else {
                Some(UserCommand::AddPlayer(name))
            }
        }
        KeyCode::Backspace => {
            view_state.entry_text.pop();
            None
        }
        KeyCode::Char(c) => {
            view_state.entry_text.push(c);
            None
        }
        _ => None,
    }
}

/// Move the roster cursor up one row.
fn cursor_up(view_state: &mut ViewState) {
    view_state.cursor = view_state.cursor.saturating_sub(1);
}

/// Move the roster cursor down one row, clamped to the last player.
fn cursor_down(view_state: &mut ViewState) {
    if view_state.cursor + 1 < view_state.players.len() {
        view_state.cursor += 1;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
