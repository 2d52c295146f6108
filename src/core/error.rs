//! Error types for setup, placement, and turn submission.
//!
//! Three distinct failure surfaces, matching how the engine recovers:
//!
//! - `SetupError`: fatal at setup. The controller refuses to construct and
//!   no combat runs.
//! - `PlacementError`: a rejected input request. Engine state is unchanged
//!   and the caller may retry with different arguments.
//! - `SubmitError`: a rejected turn submission (wrong phase, or a second
//!   submission while the first is still resolving).
//!
//! Running out of cards is deliberately not an error anywhere: `Deck::draw`
//! yields `None` and hands simply come up short.

use super::ids::{ActionSlot, InstanceId, TokenId};

/// Fatal configuration problems detected before combat starts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("enemy roster is empty")]
    EmptyEnemyRoster,

    #[error("starting deck is empty")]
    EmptyDeck,

    #[error("duplicate token definition {0}")]
    DuplicateToken(TokenId),

    #[error("deck references unknown token {0}")]
    UnknownDeckToken(TokenId),

    #[error("player max health must be positive (got {0})")]
    InvalidPlayerHealth(i32),

    #[error("player max mana must not be negative (got {0})")]
    InvalidPlayerMana(i32),

    #[error("hand size must be positive")]
    InvalidHandSize,

    #[error("board must have at least one action slot")]
    InvalidBoardSize,

    #[error("enemy `{name}` has non-positive max health {max_health}")]
    InvalidEnemyHealth { name: String, max_health: i32 },

    #[error("enemy `{name}` has inverted attack range {min}..={max}")]
    InvalidAttackRange { name: String, min: i32, max: i32 },
}

/// A rejected placement or reclaim request.
///
/// The request is refused locally; no engine state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("placement requests are only accepted during the player's turn")]
    NotPlayerTurn,

    #[error("no live token with id {0}")]
    UnknownInstance(InstanceId),

    #[error("action slot {0} is already occupied")]
    SlotOccupied(ActionSlot),

    #[error("action slot {0} does not exist")]
    NoSuchSlot(ActionSlot),

    #[error("insufficient mana: need {cost}, have {available}")]
    InsufficientMana { cost: i32, available: i32 },

    #[error("token {0} is not on the board")]
    NotOnBoard(InstanceId),

    #[error("no free hand slot to reclaim into")]
    HandFull,
}

/// A rejected turn submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("turn submission is only accepted during the player's turn")]
    NotPlayerTurn,

    #[error("a turn is already resolving")]
    AlreadyResolving,
}
