// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors relevant parts of the application
// state. The app orchestrator pushes `UiUpdate` messages over an mpsc channel;
// the TUI applies them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::draw::player::Player;
use crate::protocol::{AppSnapshot, GroupRow, UiUpdate, UserCommand};

use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
///
/// Updated incrementally via `UiUpdate` messages from the app orchestrator.
/// The `render_frame` function reads this struct to draw the dashboard.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Roster in its current order.
    pub players: Vec<Player>,
    /// All eight groups with resolved occupant names.
    pub groups: Vec<GroupRow>,
    /// Id of the currently selected player, if any.
    pub selected: Option<u32>,
    /// Whether a roulette spin is running.
    pub spinning: bool,
    /// How many players have been drawn so far.
    pub drawn_count: usize,
    /// The roulette label currently on display.
    pub spin_label: String,
    /// Last user-facing message.
    pub message: String,
    /// Roster cursor position.
    pub cursor: usize,
    /// Whether the name entry prompt is open.
    pub entry_mode: bool,
    /// Text typed into the name entry prompt.
    pub entry_text: String,
    /// Whether the quit confirmation dialog is shown.
    pub confirm_quit: bool,
}

impl ViewState {
    /// Apply a full state snapshot from the app orchestrator.
    ///
    /// Fields the snapshot does not cover (message, cursor, input modes)
    /// are left unchanged; the cursor is clamped to the new roster length.
    pub fn apply_snapshot(&mut self, snapshot: AppSnapshot) {
        self.players = snapshot.players;
        self.groups = snapshot.groups;
        self.selected = snapshot.selected;
        self.spinning = snapshot.spinning;
        self.drawn_count = snapshot.drawn_count;
        self.spin_label = snapshot.spin_label;
        if self.cursor >= self.players.len() {
            self.cursor = self.players.len().saturating_sub(1);
        }
    }

    /// Id of the player under the cursor, if the roster is non-empty.
    pub fn cursor_player_id(&self) -> Option<u32> {
        self.players.get(self.cursor).map(|p| p.id)
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::StateSnapshot(snapshot) => {
            state.apply_snapshot(*snapshot);
        }
        UiUpdate::SpinLabel(label) => {
            state.spin_label = label;
        }
        UiUpdate::Message(message) => {
            state.message = message;
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::roulette::render(frame, layout.roulette_banner, state);
    widgets::players::render(frame, layout.players, state);
    widgets::groups::render(frame, layout.groups, state);
    widgets::message_bar::render(frame, layout.message_bar, state);
    widgets::help_bar::render(frame, layout.help_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// This is the main entry point for the terminal UI. It:
/// 1. Initializes the terminal (enters raw mode, enables alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal even when a render or handler panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    // Render interval (~30fps)
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // UI updates from the app orchestrator
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update);
                    }
                    None => {
                        // Channel closed: app is shutting down
                        break;
                    }
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse events, resize events, etc.
                    }
                    Some(Err(_)) => {
                        break;
                    }
                    None => {
                        // Stream ended
                        break;
                    }
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::player::Roster;

    fn snapshot_with_players(count: usize) -> AppSnapshot {
        let roster = Roster::with_default_players("Jugador");
        AppSnapshot {
            players: roster.players()[..count].to_vec(),
            groups: Vec::new(),
            selected: None,
            spinning: false,
            spin_label: String::new(),
            drawn_count: 0,
        }
    }

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert!(state.players.is_empty());
        assert!(state.groups.is_empty());
        assert!(state.selected.is_none());
        assert!(!state.spinning);
        assert_eq!(state.drawn_count, 0);
        assert!(state.spin_label.is_empty());
        assert!(state.message.is_empty());
        assert_eq!(state.cursor, 0);
        assert!(!state.entry_mode);
        assert!(state.entry_text.is_empty());
        assert!(!state.confirm_quit);
    }

    #[test]
    fn apply_snapshot_replaces_draw_state() {
        let mut state = ViewState::default();
        let mut snapshot = snapshot_with_players(16);
        snapshot.selected = Some(4);
        snapshot.spinning = true;
        snapshot.spin_label = "5".to_string();
        snapshot.drawn_count = 3;

        state.apply_snapshot(snapshot);
        assert_eq!(state.players.len(), 16);
        assert_eq!(state.selected, Some(4));
        assert!(state.spinning);
        assert_eq!(state.spin_label, "5");
        assert_eq!(state.drawn_count, 3);
    }

    #[test]
    fn apply_snapshot_preserves_message_and_modes() {
        let mut state = ViewState::default();
        state.message = "hola".to_string();
        state.entry_mode = true;
        state.entry_text = "An".to_string();

        state.apply_snapshot(snapshot_with_players(2));
        assert_eq!(state.message, "hola");
        assert!(state.entry_mode);
        assert_eq!(state.entry_text, "An");
    }

    #[test]
    fn apply_snapshot_clamps_cursor() {
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot_with_players(16));
        state.cursor = 15;

        state.apply_snapshot(snapshot_with_players(4));
        assert_eq!(state.cursor, 3);

        state.apply_snapshot(snapshot_with_players(0));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn cursor_player_id_follows_roster_order() {
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot_with_players(16));
        assert_eq!(state.cursor_player_id(), Some(1));
        state.cursor = 9;
        assert_eq!(state.cursor_player_id(), Some(10));
    }

    #[test]
    fn apply_ui_update_spin_label() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::SpinLabel("7".to_string()));
        assert_eq!(state.spin_label, "7");
        apply_ui_update(&mut state, UiUpdate::SpinLabel("Grupo 7".to_string()));
        assert_eq!(state.spin_label, "Grupo 7");
    }

    #[test]
    fn apply_ui_update_message() {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::Message("Selecciona un jugador.".to_string()),
        );
        assert_eq!(state.message, "Selecciona un jugador.");
    }

    #[test]
    fn apply_ui_update_state_snapshot() {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::StateSnapshot(Box::new(snapshot_with_players(16))),
        );
        assert_eq!(state.players.len(), 16);
    }

    #[test]
    fn render_frame_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render_frame(frame, &state))
            .unwrap();
    }

    #[test]
    fn render_frame_does_not_panic_with_overlay() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.apply_snapshot(snapshot_with_players(16));
        state.confirm_quit = true;
        terminal
            .draw(|frame| render_frame(frame, &state))
            .unwrap();
    }
}
