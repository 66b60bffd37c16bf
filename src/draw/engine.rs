// The draw engine: roster and group state plus the roulette state machine.
//
// A draw runs Idle -> Spinning -> Idle. `start_draw` checks the
// preconditions and picks the target group uniformly among the available
// ones; the caller then drives exactly `SPIN_TICKS` calls to `advance_spin`
// from its timer. Every tick before the last produces a teaser label; the
// last tick reveals the target and commits the assignment.

use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

use super::group::{Group, GroupSet};
use super::player::{Player, Roster};

/// Number of timed ticks in a spin; the commit fires on the last one.
pub const SPIN_TICKS: u8 = 3;

/// Default interval between spin ticks, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 400;

/// How many extra rolls a teaser tick may take to avoid repeating the
/// previously displayed label. Repeat reduction only, not a guarantee.
const LABEL_REROLL_LIMIT: u8 = 2;

/// Everything that can go wrong during roster management or a draw.
///
/// The `Display` text doubles as the user-facing message; none of these are
/// fatal and none mutate state at the point of failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("Ya has agregado el máximo de {max} jugadores.")]
    CapacityExceeded { max: usize },

    #[error("Necesitas {needed} jugadores para sortear.")]
    RosterIncomplete { needed: usize },

    #[error("Todos los jugadores ya han sido sorteados.")]
    AllDrawn,

    #[error("No hay grupos con cupo disponible.")]
    NoGroupAvailable,

    #[error("Selecciona un jugador.")]
    NoPlayerSelected,

    #[error("El jugador {id} no está disponible para el sorteo.")]
    PlayerNotAvailable { id: u32 },

    #[error("El grupo {number} no tiene asignación.")]
    AssignmentConflict { number: u8 },

    #[error("Ya hay un sorteo en curso.")]
    SpinInProgress,

    #[error("No hay ningún sorteo en curso.")]
    SpinNotActive,
}

/// Draw controller state. While spinning, the in-flight player and target
/// are pinned here so that selection changes cannot redirect a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinStatus {
    Idle,
    Spinning {
        /// Player being drawn.
        player: u32,
        /// Group the draw will commit to on the final tick.
        target: u8,
        /// Available group numbers captured when the spin started; teaser
        /// labels are rolled from this list.
        candidates: Vec<u8>,
        ticks_done: u8,
    },
}

/// Result of advancing the spin by one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinTick {
    /// A non-final tick: only the displayed label changed.
    Teaser { label: String },
    /// The final tick: the assignment was committed.
    Committed {
        player_id: u32,
        group_number: u8,
        label: String,
    },
}

/// The whole draw state: 16-player roster, 8-group table, current
/// selection, spin status, and the displayed roulette label.
#[derive(Debug, Clone)]
pub struct DrawEngine {
    roster: Roster,
    groups: GroupSet,
    selected: Option<u32>,
    status: SpinStatus,
    label: String,
}

impl Default for DrawEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawEngine {
    /// Engine with an empty roster and 8 empty groups.
    pub fn new() -> Self {
        DrawEngine {
            roster: Roster::new(),
            groups: GroupSet::new(),
            selected: None,
            status: SpinStatus::Idle,
            label: String::new(),
        }
    }

    /// Engine pre-populated with 16 default-named players, the state the
    /// session starts in.
    pub fn with_default_players(prefix: &str) -> Self {
        DrawEngine {
            roster: Roster::with_default_players(prefix),
            ..Self::new()
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn groups(&self) -> &GroupSet {
        &self.groups
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.selected.and_then(|id| self.roster.get(id))
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.status, SpinStatus::Spinning { .. })
    }

    pub fn status(&self) -> &SpinStatus {
        &self.status
    }

    /// The roulette label currently on display (empty before the first spin).
    pub fn label(&self) -> &str {
        &self.label
    }

    // -- Roster operations --------------------------------------------------

    /// Append a player; see [`Roster::add`].
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<u32, DrawError> {
        let id = self.roster.add(name)?;
        info!("Player {} added to roster ({}/16)", id, self.roster.len());
        Ok(id)
    }

    /// Remove a player by id, freeing any group slot that referenced it and
    /// dropping a matching selection. Returns `false` (no-op) when the id is
    /// unknown.
    pub fn remove_player(&mut self, id: u32) -> bool {
        let Some(removed) = self.roster.remove(id) else {
            return false;
        };
        self.groups.clear_player(id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        info!(
            "Player {} ('{}') removed, roster at {}/16",
            id,
            removed.name,
            self.roster.len()
        );
        true
    }

    /// Select the player the next draw will assign. Only undrawn players in
    /// the roster can be selected.
    pub fn select_player(&mut self, id: u32) -> Result<(), DrawError> {
        match self.roster.get(id) {
            Some(p) if !p.drawn => {
                self.selected = Some(id);
                Ok(())
            }
            _ => Err(DrawError::PlayerNotAvailable { id }),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Undrawn players, recomputed per call.
    pub fn available_players(&self) -> Vec<&Player> {
        self.roster.available().collect()
    }

    /// Roster ordered by group, unassigned last; reorders the stored roster
    /// as a side effect (see [`Roster::sort_by_group`]).
    pub fn sorted_players(&mut self) -> &[Player] {
        self.roster.sort_by_group()
    }

    /// Groups with a free slot, recomputed per call.
    pub fn available_groups(&self) -> Vec<&Group> {
        self.groups.available()
    }

    // -- Draw state machine -------------------------------------------------

    /// Validate the draw preconditions and enter `Spinning`.
    ///
    /// Fails without touching state when a spin is already running, the
    /// roster is not at capacity, every player is drawn, no group has a free
    /// slot, or no (valid) player is selected.
    pub fn start_draw<R: Rng>(&mut self, rng: &mut R) -> Result<(), DrawError> {
        if self.is_spinning() {
            return Err(DrawError::SpinInProgress);
        }
        if self.roster.len() < Roster::CAPACITY {
            return Err(DrawError::RosterIncomplete {
                needed: Roster::CAPACITY,
            });
        }
        if self.roster.available().next().is_none() {
            return Err(DrawError::AllDrawn);
        }
        let candidates = self.groups.available_numbers();
        if candidates.is_empty() {
            return Err(DrawError::NoGroupAvailable);
        }
        let player = self.selected.ok_or(DrawError::NoPlayerSelected)?;
        match self.roster.get(player) {
            Some(p) if !p.drawn => {}
            _ => return Err(DrawError::PlayerNotAvailable { id: player }),
        }

        let Some(&target) = candidates.choose(rng) else {
            return Err(DrawError::NoGroupAvailable);
        };
        info!(
            "Draw started: player {} -> group {} ({} groups in play)",
            player,
            target,
            candidates.len()
        );
        self.status = SpinStatus::Spinning {
            player,
            target,
            candidates,
            ticks_done: 0,
        };
        Ok(())
    }

    /// Advance the spin by one tick.
    ///
    /// Ticks before the last roll a teaser label from the candidate list,
    /// re-rolling up to [`LABEL_REROLL_LIMIT`] times when the roll textually
    /// repeats the label already on display. The final tick sets the label
    /// to `"Grupo {target}"`, commits via [`DrawEngine::assign`], and
    /// returns to `Idle` (also on a conflict, which leaves the player
    /// untouched).
    pub fn advance_spin<R: Rng>(&mut self, rng: &mut R) -> Result<SpinTick, DrawError> {
        let SpinStatus::Spinning {
            player,
            target,
            candidates,
            ticks_done,
        } = &mut self.status
        else {
            return Err(DrawError::SpinNotActive);
        };
        *ticks_done += 1;

        if *ticks_done < SPIN_TICKS {
            let mut label = roll_label(candidates, rng);
            let mut rerolls = 0;
            while label == self.label && rerolls < LABEL_REROLL_LIMIT {
                label = roll_label(candidates, rng);
                rerolls += 1;
            }
            self.label = label.clone();
            Ok(SpinTick::Teaser { label })
        } else {
            let player = *player;
            let target = *target;
            self.status = SpinStatus::Idle;
            self.label = format!("Grupo {target}");
            match self.assign(player, target) {
                Ok(()) => Ok(SpinTick::Committed {
                    player_id: player,
                    group_number: target,
                    label: self.label.clone(),
                }),
                Err(e) => {
                    warn!("Spin commit failed: {e}");
                    Err(e)
                }
            }
        }
    }

    /// Assign a player to a group: slot one first, then slot two. On success
    /// the player's `drawn`/`group` fields are set and the selection and
    /// spinning flag are cleared. A full (or unknown) group signals an
    /// assignment conflict and the player is not mutated.
    pub fn assign(&mut self, player_id: u32, group_number: u8) -> Result<(), DrawError> {
        match self.roster.get(player_id) {
            Some(p) if !p.drawn => {}
            _ => return Err(DrawError::PlayerNotAvailable { id: player_id }),
        }
        let Some(group) = self.groups.get_mut(group_number) else {
            return Err(DrawError::AssignmentConflict {
                number: group_number,
            });
        };
        if !group.place(player_id) {
            return Err(DrawError::AssignmentConflict {
                number: group_number,
            });
        }
        if let Some(p) = self.roster.get_mut(player_id) {
            p.drawn = true;
            p.group = Some(group_number);
        }
        self.selected = None;
        self.status = SpinStatus::Idle;
        info!("Player {} assigned to group {}", player_id, group_number);
        Ok(())
    }
}

/// Pick a teaser label uniformly from the candidate group numbers.
fn roll_label<R: Rng>(candidates: &[u8], rng: &mut R) -> String {
    candidates
        .choose(rng)
        .map(|n| n.to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
