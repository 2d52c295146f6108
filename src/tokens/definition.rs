//! Token definitions - static, authored token data.
//!
//! A `TokenDefinition` holds the immutable properties of a die token:
//! how many faces it has, what it costs to place, and what its action does
//! when resolved. Roll values and slot placement are per-instance state and
//! live in `TokenInstance`.

use serde::{Deserialize, Serialize};

use crate::core::ids::TokenId;

/// Face count of a die.
///
/// The enumerated set of physical dice the game ships with. The face count
/// is also the maximum roll value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieSides {
    D4,
    D6,
    D8,
    D10,
}

impl DieSides {
    /// Maximum roll value for this die.
    #[must_use]
    pub const fn max_roll(self) -> i32 {
        match self {
            DieSides::D4 => 4,
            DieSides::D6 => 6,
            DieSides::D8 => 8,
            DieSides::D10 => 10,
        }
    }
}

/// Rarity tier of a token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Mythic,
}

/// Elemental tag of a token.
///
/// Cosmetic only: the resolver never reads it. Carried so presentation
/// layers can theme tokens without a side table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[default]
    None,
    Fire,
    Earth,
    Air,
    Water,
}

/// What a resolved token does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Attack,
    Block,
    Heal,
}

/// Who a resolved token affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// The combatant that played the token (the player).
    Owner,
    /// The single current enemy.
    SingleEnemy,
}

/// Static token definition.
///
/// ## Example
///
/// ```
/// use dice_combat::tokens::{ActionKind, DieSides, TargetKind, TokenDefinition};
/// use dice_combat::core::TokenId;
///
/// let strike = TokenDefinition::new(
///     TokenId::new(1),
///     "Strike",
///     DieSides::D6,
///     ActionKind::Attack,
///     TargetKind::SingleEnemy,
/// )
/// .with_cost(1);
///
/// assert_eq!(strike.sides.max_roll(), 6);
/// assert_eq!(strike.mana_cost, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDefinition {
    /// Unique identifier for this definition.
    pub id: TokenId,

    /// Token name (for display/debugging).
    pub name: String,

    /// Die face count; the maximum roll value.
    pub sides: DieSides,

    /// Rarity tier.
    #[serde(default)]
    pub rarity: Rarity,

    /// Mana cost to move this token from hand to the board.
    pub mana_cost: u32,

    /// Elemental tag (cosmetic).
    #[serde(default)]
    pub element: Element,

    /// Action performed at resolution.
    pub action: ActionKind,

    /// Target the action applies to.
    pub target: TargetKind,
}

impl TokenDefinition {
    /// Create a new token definition with zero cost, common rarity,
    /// and no element.
    #[must_use]
    pub fn new(
        id: TokenId,
        name: impl Into<String>,
        sides: DieSides,
        action: ActionKind,
        target: TargetKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sides,
            rarity: Rarity::Common,
            mana_cost: 0,
            element: Element::None,
            action,
            target,
        }
    }

    /// Set the mana cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.mana_cost = cost;
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set the element (builder pattern).
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Mana cost as a signed amount, for pool arithmetic.
    #[must_use]
    pub fn cost(&self) -> i32 {
        self.mana_cost as i32
    }
}
