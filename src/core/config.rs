//! Combat configuration.
//!
//! Loaded once at setup, before any combat state exists. A config bundles
//! the authored content (token definitions, the starting deck, the enemy
//! roster) with the player's starting numbers. Validation is strict:
//! anything malformed refuses to start combat rather than failing later
//! mid-turn.

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::ids::TokenId;
use crate::combat::EnemyDefinition;
use crate::tokens::{TokenDefinition, TokenRegistry};

fn default_action_slots() -> usize {
    5
}

/// Player starting numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Maximum (and starting) health.
    pub max_health: i32,
    /// Maximum mana; refilled to this at the start of every player turn.
    pub max_mana: i32,
    /// Number of hand slots, and the number of tokens drawn each turn.
    pub hand_size: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 100,
            max_mana: 3,
            hand_size: 5,
        }
    }
}

/// Full configuration for one combat run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Player starting numbers.
    #[serde(default)]
    pub player: PlayerConfig,

    /// Every token definition the deck may reference.
    pub tokens: Vec<TokenDefinition>,

    /// The starting deck as a multiset of definition ids.
    pub deck: Vec<TokenId>,

    /// Ordered enemy roster; enemies are fought one at a time.
    pub enemies: Vec<EnemyDefinition>,

    /// Number of action slots on the placement board.
    #[serde(default = "default_action_slots")]
    pub action_slots: usize,
}

impl CombatConfig {
    /// Check the configuration for fatal problems.
    ///
    /// Returns the first problem found; a config that passes here cannot
    /// fail setup for content reasons.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.player.max_health <= 0 {
            return Err(SetupError::InvalidPlayerHealth(self.player.max_health));
        }
        if self.player.max_mana < 0 {
            return Err(SetupError::InvalidPlayerMana(self.player.max_mana));
        }
        if self.player.hand_size == 0 {
            return Err(SetupError::InvalidHandSize);
        }
        if self.action_slots == 0 {
            return Err(SetupError::InvalidBoardSize);
        }

        let mut seen = std::collections::HashSet::new();
        for token in &self.tokens {
            if !seen.insert(token.id) {
                return Err(SetupError::DuplicateToken(token.id));
            }
        }

        if self.deck.is_empty() {
            return Err(SetupError::EmptyDeck);
        }
        for id in &self.deck {
            if !seen.contains(id) {
                return Err(SetupError::UnknownDeckToken(*id));
            }
        }

        if self.enemies.is_empty() {
            return Err(SetupError::EmptyEnemyRoster);
        }
        for enemy in &self.enemies {
            if enemy.max_health <= 0 {
                return Err(SetupError::InvalidEnemyHealth {
                    name: enemy.name.clone(),
                    max_health: enemy.max_health,
                });
            }
            if enemy.min_attack > enemy.max_attack {
                return Err(SetupError::InvalidAttackRange {
                    name: enemy.name.clone(),
                    min: enemy.min_attack,
                    max: enemy.max_attack,
                });
            }
        }

        Ok(())
    }

    /// Build the definition registry from this config.
    ///
    /// Call `validate` first; duplicate ids panic here.
    #[must_use]
    pub fn build_registry(&self) -> TokenRegistry {
        let mut registry = TokenRegistry::new();
        for token in &self.tokens {
            registry.register(token.clone());
        }
        registry
    }
}
