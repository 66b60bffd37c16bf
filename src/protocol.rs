// Message types exchanged between the app orchestrator and the TUI.
//
// The TUI sends `UserCommand` over an mpsc channel; the orchestrator answers
// with `UiUpdate` messages the render loop applies to its `ViewState`.

use crate::draw::player::Player;

/// Commands the user can issue from the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Select the player the next draw will assign.
    SelectPlayer(u32),
    /// Drop the current selection.
    ClearSelection,
    /// Append a new player to the roster.
    AddPlayer(String),
    /// Remove a player and free any group slot it holds.
    RemovePlayer(u32),
    /// Run the roulette for the selected player.
    StartDraw,
    /// Reorder the roster by assigned group, unassigned last.
    SortByGroup,
    /// Shut down the application.
    Quit,
}

/// Updates pushed from the orchestrator to the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// Full state snapshot. Boxed to keep the enum small.
    StateSnapshot(Box<AppSnapshot>),
    /// New roulette label (teaser tick or final reveal).
    SpinLabel(String),
    /// User-facing message for the message bar.
    Message(String),
}

/// One group for display, slot ids already resolved to player names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow {
    pub number: u8,
    pub slot_one: Option<String>,
    pub slot_two: Option<String>,
}

impl GroupRow {
    pub fn occupant_count(&self) -> usize {
        self.slot_one.iter().count() + self.slot_two.iter().count()
    }

    pub fn is_full(&self) -> bool {
        self.slot_one.is_some() && self.slot_two.is_some()
    }
}

/// Complete view of the draw state, captured after every state change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppSnapshot {
    /// Roster in its current order.
    pub players: Vec<Player>,
    /// All eight groups with resolved occupant names.
    pub groups: Vec<GroupRow>,
    /// Id of the currently selected player, if any.
    pub selected: Option<u32>,
    /// Whether a roulette spin is running.
    pub spinning: bool,
    /// The roulette label currently on display.
    pub spin_label: String,
    /// How many players have been drawn so far.
    pub drawn_count: usize,
}
