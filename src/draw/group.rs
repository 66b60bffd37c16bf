// Group table: 8 fixed two-slot groups that receive drawn players.

/// Number of groups, fixed for the whole session.
pub const GROUP_COUNT: usize = 8;

/// Assignment positions per group.
pub const SLOTS_PER_GROUP: usize = 2;

/// One tournament group. Slots hold player ids; `None` means free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Group identity, 1..=8, fixed at initialization.
    pub number: u8,
    pub slot_one: Option<u32>,
    pub slot_two: Option<u32>,
}

impl Group {
    fn new(number: u8) -> Self {
        Group {
            number,
            slot_one: None,
            slot_two: None,
        }
    }

    /// A group is available while at least one slot is free.
    pub fn has_free_slot(&self) -> bool {
        self.slot_one.is_none() || self.slot_two.is_none()
    }

    pub fn occupant_count(&self) -> usize {
        usize::from(self.slot_one.is_some()) + usize::from(self.slot_two.is_some())
    }

    /// Whether either slot holds the given player id.
    pub fn holds(&self, id: u32) -> bool {
        self.slot_one == Some(id) || self.slot_two == Some(id)
    }

    /// Occupy the first free slot (slot one before slot two). Returns
    /// `false` without mutating when both slots are taken.
    pub(crate) fn place(&mut self, id: u32) -> bool {
        if self.slot_one.is_none() {
            self.slot_one = Some(id);
            true
        } else if self.slot_two.is_none() {
            self.slot_two = Some(id);
            true
        } else {
            false
        }
    }

    /// Free any slot holding the given player id.
    pub(crate) fn clear_player(&mut self, id: u32) {
        if self.slot_one == Some(id) {
            self.slot_one = None;
        } else if self.slot_two == Some(id) {
            self.slot_two = None;
        }
    }
}

/// The fixed set of 8 groups, created once per session and never resized.
#[derive(Debug, Clone)]
pub struct GroupSet {
    groups: Vec<Group>,
}

impl Default for GroupSet {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupSet {
    /// Create the 8 empty groups, numbered 1..=8.
    pub fn new() -> Self {
        GroupSet {
            groups: (1..=GROUP_COUNT as u8).map(Group::new).collect(),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Look up a group by its number.
    pub fn get(&self, number: u8) -> Option<&Group> {
        self.groups.iter().find(|g| g.number == number)
    }

    pub(crate) fn get_mut(&mut self, number: u8) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.number == number)
    }

    /// Groups with at least one free slot. Recomputed on every call.
    pub fn available(&self) -> Vec<&Group> {
        self.groups.iter().filter(|g| g.has_free_slot()).collect()
    }

    /// Numbers of the available groups, in group order.
    pub fn available_numbers(&self) -> Vec<u8> {
        self.groups
            .iter()
            .filter(|g| g.has_free_slot())
            .map(|g| g.number)
            .collect()
    }

    /// Free every slot holding the given player id (a player appears in at
    /// most one slot, but the scan covers the whole table).
    pub(crate) fn clear_player(&mut self, id: u32) {
        for group in &mut self.groups {
            group.clear_player(id);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_has_eight_empty_groups() {
        let set = GroupSet::new();
        assert_eq!(set.groups().len(), GROUP_COUNT);
        for (i, group) in set.groups().iter().enumerate() {
            assert_eq!(group.number, i as u8 + 1);
            assert!(group.has_free_slot());
            assert_eq!(group.occupant_count(), 0);
        }
        assert_eq!(set.available().len(), GROUP_COUNT);
    }

    #[test]
    fn place_fills_slot_one_then_slot_two() {
        let mut group = Group::new(1);
        assert!(group.place(7));
        assert_eq!(group.slot_one, Some(7));
        assert_eq!(group.slot_two, None);

        assert!(group.place(9));
        assert_eq!(group.slot_two, Some(9));
        assert!(!group.has_free_slot());

        // Third placement is rejected and nothing changes.
        assert!(!group.place(11));
        assert_eq!(group.slot_one, Some(7));
        assert_eq!(group.slot_two, Some(9));
    }

    #[test]
    fn full_groups_are_not_available() {
        let mut set = GroupSet::new();
        let g3 = set.get_mut(3).unwrap();
        g3.place(1);
        g3.place(2);

        let numbers = set.available_numbers();
        assert_eq!(numbers, vec![1, 2, 4, 5, 6, 7, 8]);
        assert!(set.available().iter().all(|g| g.has_free_slot()));
    }

    #[test]
    fn half_full_group_stays_available() {
        let mut set = GroupSet::new();
        set.get_mut(5).unwrap().place(1);
        assert!(set.available_numbers().contains(&5));
    }

    #[test]
    fn clear_player_frees_the_slot() {
        let mut set = GroupSet::new();
        let g2 = set.get_mut(2).unwrap();
        g2.place(4);
        g2.place(8);

        set.clear_player(4);
        let g2 = set.get(2).unwrap();
        assert_eq!(g2.slot_one, None);
        assert_eq!(g2.slot_two, Some(8));
        assert!(g2.has_free_slot(), "clearing a slot makes the group available again");
    }

    #[test]
    fn clear_unknown_player_is_noop() {
        let mut set = GroupSet::new();
        set.get_mut(1).unwrap().place(3);
        set.clear_player(42);
        assert_eq!(set.get(1).unwrap().slot_one, Some(3));
    }

    #[test]
    fn available_is_idempotent_without_mutation() {
        let mut set = GroupSet::new();
        set.get_mut(1).unwrap().place(1);
        let first = set.available_numbers();
        let second = set.available_numbers();
        assert_eq!(first, second);
    }
}
