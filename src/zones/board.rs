//! The action board: placement slots awaiting turn resolution.
//!
//! Occupancy is an explicit slot -> instance mapping. Slot index order is
//! the resolution order, so `occupied_in_order` is the single source of
//! truth for which token resolves first.

use smallvec::SmallVec;

use crate::core::ids::{ActionSlot, InstanceId};

/// Fixed set of action slots.
#[derive(Clone, Debug)]
pub struct ActionBoard {
    slots: SmallVec<[Option<InstanceId>; 8]>,
}

impl ActionBoard {
    /// Create a board with `slot_count` empty slots.
    #[must_use]
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: smallvec::smallvec![None; slot_count],
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Check whether a slot index exists on this board.
    #[must_use]
    pub fn has_slot(&self, slot: ActionSlot) -> bool {
        slot.index() < self.slots.len()
    }

    /// Check whether a slot holds a token.
    #[must_use]
    pub fn is_occupied(&self, slot: ActionSlot) -> bool {
        self.slots.get(slot.index()).is_some_and(Option::is_some)
    }

    /// The instance in a slot.
    #[must_use]
    pub fn get(&self, slot: ActionSlot) -> Option<InstanceId> {
        self.slots.get(slot.index()).copied().flatten()
    }

    /// The slot an instance occupies.
    #[must_use]
    pub fn slot_of(&self, instance: InstanceId) -> Option<ActionSlot> {
        self.slots
            .iter()
            .position(|s| *s == Some(instance))
            .map(|i| ActionSlot::new(i as u8))
    }

    /// Put an instance into a slot. The slot must exist and be free.
    pub fn place(&mut self, slot: ActionSlot, instance: InstanceId) {
        debug_assert!(
            self.slots[slot.index()].is_none(),
            "action slot {slot} already occupied"
        );
        self.slots[slot.index()] = Some(instance);
    }

    /// Take an instance off the board. Returns the slot it held.
    pub fn remove(&mut self, instance: InstanceId) -> Option<ActionSlot> {
        let slot = self.slot_of(instance)?;
        self.slots[slot.index()] = None;
        Some(slot)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Occupied slots in ascending slot order: the resolution order.
    #[must_use]
    pub fn occupied_in_order(&self) -> SmallVec<[(ActionSlot, InstanceId); 8]> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|id| (ActionSlot::new(i as u8), id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_remove() {
        let mut board = ActionBoard::new(4);
        let id = InstanceId::new(10);

        assert!(!board.is_occupied(ActionSlot::new(2)));
        board.place(ActionSlot::new(2), id);

        assert!(board.is_occupied(ActionSlot::new(2)));
        assert_eq!(board.get(ActionSlot::new(2)), Some(id));
        assert_eq!(board.slot_of(id), Some(ActionSlot::new(2)));

        assert_eq!(board.remove(id), Some(ActionSlot::new(2)));
        assert!(!board.is_occupied(ActionSlot::new(2)));
        assert_eq!(board.remove(id), None);
    }

    #[test]
    fn test_occupied_in_order_is_slot_ascending() {
        let mut board = ActionBoard::new(5);

        // Place out of order; iteration is still by slot index
        board.place(ActionSlot::new(3), InstanceId::new(30));
        board.place(ActionSlot::new(0), InstanceId::new(10));
        board.place(ActionSlot::new(2), InstanceId::new(20));

        let order: Vec<_> = board.occupied_in_order().into_vec();
        assert_eq!(
            order,
            vec![
                (ActionSlot::new(0), InstanceId::new(10)),
                (ActionSlot::new(2), InstanceId::new(20)),
                (ActionSlot::new(3), InstanceId::new(30)),
            ]
        );
    }

    #[test]
    fn test_has_slot() {
        let board = ActionBoard::new(3);
        assert!(board.has_slot(ActionSlot::new(2)));
        assert!(!board.has_slot(ActionSlot::new(3)));
    }

    #[test]
    fn test_occupied_count() {
        let mut board = ActionBoard::new(3);
        assert_eq!(board.occupied_count(), 0);
        board.place(ActionSlot::new(1), InstanceId::new(1));
        assert_eq!(board.occupied_count(), 1);
    }
}
