//! Combatants and the player's mana pool.
//!
//! Player and enemies share the same health/block arithmetic; only the
//! player carries a `ManaPool`. All mutators treat non-positive amounts as
//! no-ops, so callers never need to pre-filter garbage rolls.

use serde::{Deserialize, Serialize};

/// Result of applying damage to a combatant.
///
/// `defeated` is true exactly when this hit moved health from above zero
/// to zero; repeated hits on a downed combatant report `defeated: false`,
/// so the defeat notification fires once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// Damage soaked by block.
    pub absorbed: i32,
    /// Damage that reached health.
    pub dealt: i32,
    /// Health crossed zero on this hit.
    pub defeated: bool,
}

impl DamageOutcome {
    /// A hit that changed nothing (non-positive amount).
    pub const NONE: Self = Self {
        absorbed: 0,
        dealt: 0,
        defeated: false,
    };
}

/// Health and block for one participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name.
    pub name: String,
    health: i32,
    max_health: i32,
    block: i32,
}

impl Combatant {
    /// Create a combatant at full health with no block.
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: i32) -> Self {
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            block: 0,
        }
    }

    /// Current health, always in `[0, max_health]`.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Maximum health.
    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Current block.
    #[must_use]
    pub fn block(&self) -> i32 {
        self.block
    }

    /// Check if this combatant is out of the fight.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Apply damage: block absorbs first, remainder hits health.
    ///
    /// Health clamps at zero. Non-positive amounts change nothing.
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if amount <= 0 {
            return DamageOutcome::NONE;
        }

        let was_alive = self.health > 0;
        let absorbed = self.block.min(amount);
        self.block -= absorbed;

        let dealt = (amount - absorbed).min(self.health);
        self.health -= dealt;

        DamageOutcome {
            absorbed,
            dealt,
            defeated: was_alive && self.health == 0,
        }
    }

    /// Gain block. Accumulates without an upper bound within a turn.
    ///
    /// Non-positive amounts change nothing.
    pub fn add_block(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.block += amount;
    }

    /// Reset block to zero. Called at the start of this combatant's own
    /// turn, not at the end of the opponent's.
    pub fn clear_block(&mut self) {
        self.block = 0;
    }

    /// Heal, clamped at maximum health. Returns the amount actually healed.
    ///
    /// Non-positive amounts change nothing.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if amount <= 0 {
            return 0;
        }
        let healed = amount.min(self.max_health - self.health);
        self.health += healed;
        healed
    }
}

/// The player's per-turn spendable resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaPool {
    current: i32,
    max: i32,
}

impl ManaPool {
    /// Create a pool filled to its maximum.
    #[must_use]
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Current mana.
    #[must_use]
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Maximum mana.
    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Spend mana. Fails without mutation if `amount` is negative or
    /// exceeds the current pool.
    #[must_use]
    pub fn spend(&mut self, amount: i32) -> bool {
        if amount < 0 || amount > self.current {
            return false;
        }
        self.current -= amount;
        true
    }

    /// Gain mana, clamped at the maximum. Non-positive amounts change
    /// nothing.
    pub fn gain(&mut self, amount: i32) {
        if amount <= 0 {
            return;
        }
        self.current = (self.current + amount).min(self.max);
    }

    /// Refill to maximum. Called at the start of every player turn.
    pub fn refill(&mut self) {
        self.current = self.max;
    }
}
