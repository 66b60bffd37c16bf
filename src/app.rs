// Application state and orchestration logic.
//
// The central event loop that coordinates spin timer ticks and user commands
// from the TUI. Maintains the draw engine and pushes UI updates to the TUI
// render loop.

use std::time::Duration;

use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::draw::engine::{DrawEngine, SpinTick, SPIN_TICKS};
use crate::protocol::{AppSnapshot, GroupRow, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// Events from the spin timer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    Tick,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub engine: DrawEngine,
    /// Randomness source for target and teaser rolls. Seeded from the OS in
    /// production, from a fixed seed in tests.
    rng: StdRng,
    /// Handle of the running spin timer task, if any.
    spin_task: Option<tokio::task::JoinHandle<()>>,
    /// Sender the spin timer uses to deliver ticks back to the event loop.
    spin_tx: mpsc::Sender<SpinEvent>,
}

impl AppState {
    pub fn new(
        config: Config,
        engine: DrawEngine,
        rng: StdRng,
        spin_tx: mpsc::Sender<SpinEvent>,
    ) -> Self {
        AppState {
            config,
            engine,
            rng,
            spin_task: None,
            spin_tx,
        }
    }

    /// Cancel the spin timer task if one is running.
    pub fn cancel_spin_task(&mut self) {
        if let Some(handle) = self.spin_task.take() {
            handle.abort();
            info!("Cancelled spin timer task");
        }
    }

    /// Spawn the spin timer: one tick per configured interval, exactly
    /// `SPIN_TICKS` ticks, then the task ends on its own.
    fn spawn_spin_timer(&mut self) {
        self.cancel_spin_task();

        let period = Duration::from_millis(self.config.draw.tick_interval_ms);
        let tx = self.spin_tx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately; consume it so the first
            // delivered tick happens after one full interval.
            ticker.tick().await;
            for _ in 0..SPIN_TICKS {
                ticker.tick().await;
                if tx.send(SpinEvent::Tick).await.is_err() {
                    break;
                }
            }
        });
        self.spin_task = Some(handle);
    }

    /// Build an `AppSnapshot` from the current engine state, resolving the
    /// group slot ids to player names for display.
    pub fn build_snapshot(&self) -> AppSnapshot {
        let roster = self.engine.roster();
        let resolve = |id: Option<u32>| id.and_then(|i| roster.get(i)).map(|p| p.name.clone());

        let groups = self
            .engine
            .groups()
            .groups()
            .iter()
            .map(|g| GroupRow {
                number: g.number,
                slot_one: resolve(g.slot_one),
                slot_two: resolve(g.slot_two),
            })
            .collect();

        AppSnapshot {
            players: roster.players().to_vec(),
            groups,
            selected: self.engine.selected_id(),
            spinning: self.engine.is_spinning(),
            spin_label: self.engine.label().to_string(),
            drawn_count: roster.drawn_count(),
        }
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the main application event loop.
///
/// Listens on two channels using `tokio::select!`:
/// 1. Spin timer ticks
/// 2. User commands from the TUI
///
/// Pushes UI updates through `ui_tx` for the TUI render loop.
pub async fn run(
    mut spin_rx: mpsc::Receiver<SpinEvent>,
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    // Initial snapshot so the TUI has something to draw before the first
    // user action.
    let _ = ui_tx
        .send(UiUpdate::StateSnapshot(Box::new(state.build_snapshot())))
        .await;

    loop {
        tokio::select! {
            // --- Spin timer ticks ---
            event = spin_rx.recv() => {
                match event {
                    Some(SpinEvent::Tick) => {
                        handle_spin_tick(&mut state, &ui_tx).await;
                    }
                    None => {
                        info!("Spin channel closed, shutting down");
                        break;
                    }
                }
            }

            // --- User commands ---
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_user_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }
        }
    }

    // Cleanup
    state.cancel_spin_task();
    info!("Application event loop exiting");
    Ok(())
}

/// Handle one tick from the spin timer.
async fn handle_spin_tick(state: &mut AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    match state.engine.advance_spin(&mut state.rng) {
        Ok(SpinTick::Teaser { label }) => {
            let _ = ui_tx.send(UiUpdate::SpinLabel(label)).await;
        }
        Ok(SpinTick::Committed {
            player_id,
            group_number,
            label,
        }) => {
            state.cancel_spin_task();
            let name = state
                .engine
                .roster()
                .get(player_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| format!("Jugador {player_id}"));
            let _ = ui_tx.send(UiUpdate::SpinLabel(label)).await;
            let _ = ui_tx
                .send(UiUpdate::Message(format!(
                    "{name} queda en el Grupo {group_number}."
                )))
                .await;
            send_snapshot(state, ui_tx).await;
        }
        Err(crate::draw::engine::DrawError::SpinNotActive) => {
            // A tick raced past the commit; nothing to advance.
            debug!("Discarding spin tick with no active draw");
        }
        Err(e) => {
            warn!("Spin tick failed: {e}");
            state.cancel_spin_task();
            let _ = ui_tx.send(UiUpdate::Message(e.to_string())).await;
            send_snapshot(state, ui_tx).await;
        }
    }
}

/// Handle a user command from the TUI.
async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match cmd {
        UserCommand::SelectPlayer(id) => {
            match state.engine.select_player(id) {
                Ok(()) => info!("Player {} selected", id),
                Err(e) => {
                    let _ = ui_tx.send(UiUpdate::Message(e.to_string())).await;
                }
            }
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::ClearSelection => {
            state.engine.clear_selection();
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::AddPlayer(name) => {
            match state.engine.add_player(name) {
                Ok(id) => {
                    let _ = ui_tx
                        .send(UiUpdate::Message(format!("Jugador {id} agregado.")))
                        .await;
                }
                Err(e) => {
                    let _ = ui_tx.send(UiUpdate::Message(e.to_string())).await;
                }
            }
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::RemovePlayer(id) => {
            if state.engine.remove_player(id) {
                let _ = ui_tx
                    .send(UiUpdate::Message(format!("Jugador {id} eliminado.")))
                    .await;
            }
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::StartDraw => match state.engine.start_draw(&mut state.rng) {
            Ok(()) => {
                state.spawn_spin_timer();
                send_snapshot(state, ui_tx).await;
            }
            Err(e) => {
                info!("Draw rejected: {e}");
                let _ = ui_tx.send(UiUpdate::Message(e.to_string())).await;
            }
        },
        UserCommand::SortByGroup => {
            state.engine.sorted_players();
            info!("Roster sorted by group");
            send_snapshot(state, ui_tx).await;
        }
        UserCommand::Quit => {
            // Handled in the main loop
        }
    }
}

async fn send_snapshot(state: &AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    let _ = ui_tx
        .send(UiUpdate::StateSnapshot(Box::new(state.build_snapshot())))
        .await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
