//! Token instances - one drawn copy of a definition.
//!
//! An instance exists from the moment it is drawn (when its roll value is
//! fixed) until it is discarded back to the deck. Its location is tracked
//! explicitly via `Placement`; nothing about where a token sits is implied
//! by presentation state.

use serde::{Deserialize, Serialize};

use crate::core::ids::{ActionSlot, HandSlot, InstanceId, TokenId};

/// Where a live token instance currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// In a hand slot.
    Hand(HandSlot),
    /// In an action slot on the board, awaiting resolution.
    Board(ActionSlot),
    /// In transit between slots (being relocated by the input surface).
    Loose,
}

/// A drawn token: definition reference plus rolled value and placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInstance {
    /// Unique identifier for this instance.
    pub id: InstanceId,

    /// The definition this instance was drawn from.
    pub token: TokenId,

    /// Roll value, fixed at draw time: uniform in `[1, sides]`.
    pub roll: i32,

    /// Current location.
    pub placement: Placement,
}

impl TokenInstance {
    /// Create a new instance with the given roll, not yet in any slot.
    #[must_use]
    pub fn new(id: InstanceId, token: TokenId, roll: i32) -> Self {
        Self {
            id,
            token,
            roll,
            placement: Placement::Loose,
        }
    }

    /// Check whether this instance sits in a hand slot.
    #[must_use]
    pub fn in_hand(&self) -> bool {
        matches!(self.placement, Placement::Hand(_))
    }

    /// Check whether this instance sits in an action slot.
    #[must_use]
    pub fn on_board(&self) -> bool {
        matches!(self.placement, Placement::Board(_))
    }
}
