//! Identifier newtypes for tokens, instances, and slots.
//!
//! Definitions and instances have separate id spaces: a `TokenId` names an
//! authored token definition ("Fire Strike d6"), while an `InstanceId` names
//! one drawn copy of it, alive from draw until discard.
//!
//! Slots are plain indices. A token's location is always an explicit
//! slot-id -> instance-id mapping, never implied by any visual parenting.

use serde::{Deserialize, Serialize};

/// Identifier for a token definition.
///
/// Identifies the authored "type" of token, not a drawn copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u32);

impl TokenId {
    /// Create a new token ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Identifier for a live token instance.
///
/// Allocated by the `TokenArena` when a token is drawn; the id is never
/// reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Index of a hand slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandSlot(pub u8);

impl HandSlot {
    /// Create a new hand slot index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for HandSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HandSlot({})", self.0)
    }
}

/// Index of an action slot on the placement board.
///
/// Slot order is the resolution order: slot 0 resolves before slot 1,
/// regardless of when tokens were placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActionSlot(pub u8);

impl ActionSlot {
    /// Create a new action slot index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ActionSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ActionSlot({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_id() {
        let id = TokenId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Token(7)");
    }

    #[test]
    fn test_instance_id() {
        let id = InstanceId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Instance(42)");
    }

    #[test]
    fn test_slot_ordering() {
        assert!(ActionSlot::new(0) < ActionSlot::new(2));
        assert!(HandSlot::new(1) < HandSlot::new(4));
        assert_eq!(ActionSlot::new(3).index(), 3);
    }

    #[test]
    fn test_serialization() {
        let id = TokenId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        let back: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
