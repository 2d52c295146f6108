//! The player's hand: fixed-capacity slot assignment for drawn tokens.
//!
//! Occupancy is tracked here as an explicit slot -> instance mapping,
//! independent of the deck and the board. A token in a hand slot is in no
//! other collection; moving it elsewhere always goes through `remove`.

use smallvec::SmallVec;

use super::deck::Deck;
use crate::core::ids::{HandSlot, InstanceId};
use crate::core::rng::CombatRng;
use crate::tokens::{Placement, TokenArena, TokenRegistry};

/// Fixed-capacity hand slots.
#[derive(Clone, Debug)]
pub struct Hand {
    slots: SmallVec<[Option<InstanceId>; 8]>,
}

impl Hand {
    /// Create a hand with `capacity` empty slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: smallvec::smallvec![None; capacity],
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Lowest-index free slot, if any.
    #[must_use]
    pub fn first_free_slot(&self) -> Option<HandSlot> {
        self.slots
            .iter()
            .position(|s| s.is_none())
            .map(|i| HandSlot::new(i as u8))
    }

    /// The instance in a slot.
    #[must_use]
    pub fn get(&self, slot: HandSlot) -> Option<InstanceId> {
        self.slots.get(slot.index()).copied().flatten()
    }

    /// The slot an instance occupies.
    #[must_use]
    pub fn slot_of(&self, instance: InstanceId) -> Option<HandSlot> {
        self.slots
            .iter()
            .position(|s| *s == Some(instance))
            .map(|i| HandSlot::new(i as u8))
    }

    /// Put an instance into a slot. The slot must be free.
    pub fn place(&mut self, slot: HandSlot, instance: InstanceId) {
        debug_assert!(
            self.slots[slot.index()].is_none(),
            "hand slot {slot} already occupied"
        );
        self.slots[slot.index()] = Some(instance);
    }

    /// Take an instance out of the hand. Returns the slot it held.
    pub fn remove(&mut self, instance: InstanceId) -> Option<HandSlot> {
        let slot = self.slot_of(instance)?;
        self.slots[slot.index()] = None;
        Some(slot)
    }

    /// Iterate over occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (HandSlot, InstanceId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|id| (HandSlot::new(i as u8), id)))
    }

    /// Discard the current hand and draw a fresh one.
    ///
    /// Every held instance is removed from the arena and its definition
    /// discarded to the deck. Then up to `count` tokens are drawn, each
    /// rolled uniformly in `[1, sides]` and placed into free slots in
    /// index order. A short draw (deck exhausted) is not an error.
    ///
    /// Returns the number of tokens drawn.
    pub fn draw_new_hand(
        &mut self,
        count: usize,
        deck: &mut Deck,
        arena: &mut TokenArena,
        registry: &TokenRegistry,
        rng: &mut CombatRng,
    ) -> usize {
        for slot in self.slots.iter_mut() {
            if let Some(instance) = slot.take() {
                if let Some(inst) = arena.remove(instance) {
                    deck.discard(inst.token);
                } else {
                    log::warn!("hand held unknown instance {instance}");
                }
            }
        }

        let mut drawn = 0;
        for _ in 0..count {
            let Some(token) = deck.draw(rng) else {
                break;
            };
            let Some(def) = registry.get(token) else {
                // Unregistered ids are filtered out at setup; don't lose
                // the card if one slips through.
                log::warn!("drew unregistered token {token}, returning to discard");
                deck.discard(token);
                continue;
            };
            let Some(slot) = self.first_free_slot() else {
                deck.discard(token);
                break;
            };

            let roll = rng.roll(def.sides.max_roll());
            let instance = arena.spawn(token, roll);
            if let Some(inst) = arena.get_mut(instance) {
                inst.placement = Placement::Hand(slot);
            }
            self.place(slot, instance);
            drawn += 1;
        }

        log::debug!(
            "hand: drew {drawn} tokens, {} slots occupied",
            self.occupied_count()
        );
        drawn
    }
}
