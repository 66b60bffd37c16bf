// Player roster: the 16-player pool the draw pulls from.

use super::engine::DrawError;

/// A tournament participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Identifier assigned as `roster length + 1` at creation.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Whether the player has already been assigned to a group.
    pub drawn: bool,
    /// The group the player was drawn into, `None` until assigned.
    pub group: Option<u8>,
}

impl Player {
    fn new(id: u32, name: String) -> Self {
        Player {
            id,
            name,
            drawn: false,
            group: None,
        }
    }
}

/// Ordered pool of up to 16 players. Insertion order is preserved on add;
/// removal is by id. Reading the grouped view reorders the pool in place
/// (see [`Roster::sort_by_group`]).
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Fixed roster capacity.
    pub const CAPACITY: usize = 16;

    /// Create an empty roster.
    pub fn new() -> Self {
        Roster {
            players: Vec::with_capacity(Self::CAPACITY),
        }
    }

    /// Create a roster pre-populated to capacity with default-named players
    /// ("{prefix} 1" .. "{prefix} 16").
    pub fn with_default_players(prefix: &str) -> Self {
        let mut roster = Roster::new();
        while roster.players.len() < Self::CAPACITY {
            let id = roster.players.len() as u32 + 1;
            roster.players.push(Player::new(id, format!("{prefix} {id}")));
        }
        roster
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= Self::CAPACITY
    }

    /// The full pool in its current stored order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id (first match).
    pub fn get(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Append a new undrawn player with `id = len + 1`.
    ///
    /// Returns the assigned id, or `CapacityExceeded` when the roster is
    /// already full (the roster is left unchanged).
    pub fn add(&mut self, name: impl Into<String>) -> Result<u32, DrawError> {
        if self.is_full() {
            return Err(DrawError::CapacityExceeded {
                max: Self::CAPACITY,
            });
        }
        let id = self.players.len() as u32 + 1;
        self.players.push(Player::new(id, name.into()));
        Ok(id)
    }

    /// Remove the first player with the given id, returning it. The removed
    /// player's own `drawn`/`group` fields are discarded as-is; clearing the
    /// group slot that referenced it is the caller's job.
    pub fn remove(&mut self, id: u32) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(idx))
    }

    /// Players not yet drawn, in stored order. Recomputed on every call.
    pub fn available(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.drawn)
    }

    /// Number of players already assigned to a group.
    pub fn drawn_count(&self) -> usize {
        self.players.iter().filter(|p| p.drawn).count()
    }

    /// Reorder the pool in place by group number ascending, unassigned
    /// players last, and return the freshly ordered slice. The sort is
    /// stable, so relative order among equal/unassigned entries is kept.
    /// Callers must treat the stored order as a side effect of this read.
    pub fn sort_by_group(&mut self) -> &[Player] {
        self.players.sort_by(|a, b| match (a.group, b.group) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (Some(_), None) => std::cmp::Ordering::Less,
            (Some(x), Some(y)) => x.cmp(&y),
        });
        &self.players
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
