//! Enemies: definitions, live state, and intent selection.
//!
//! An enemy telegraphs one intent per turn cycle. The intent is chosen
//! while the player is still acting (so presentation can show it) and is
//! executed unmodified on the enemy's turn. The player can see it but
//! never change it.

use serde::{Deserialize, Serialize};

use super::combatant::{Combatant, DamageOutcome};
use crate::core::rng::CombatRng;

/// Authored enemy content: stats for one enemy type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    /// Display name.
    pub name: String,
    /// Starting (and maximum) health.
    pub max_health: i32,
    /// Inclusive lower bound of attack intent magnitude.
    pub min_attack: i32,
    /// Inclusive upper bound of attack intent magnitude.
    pub max_attack: i32,
}

impl EnemyDefinition {
    /// Create a new enemy definition.
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: i32, min_attack: i32, max_attack: i32) -> Self {
        Self {
            name: name.into(),
            max_health,
            min_attack,
            max_attack,
        }
    }
}

/// What an enemy intends to do on its next turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    /// Damage the player.
    Attack,
    /// Gain block on itself.
    Block,
}

/// A pre-committed enemy action, visible to the player before it executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyIntent {
    pub kind: IntentKind,
    pub magnitude: i32,
}

/// Effect of an executed intent, for event reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentEffect {
    /// The player took a hit.
    Damage(DamageOutcome),
    /// The enemy gained block.
    Block { gained: i32, total: i32 },
}

/// An executed intent paired with what it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutedIntent {
    pub intent: EnemyIntent,
    pub effect: IntentEffect,
}

/// A live enemy: definition, combat state, and its stored intent.
#[derive(Clone, Debug)]
pub struct Enemy {
    definition: EnemyDefinition,
    combatant: Combatant,
    intent: Option<EnemyIntent>,
}

impl Enemy {
    /// Spawn a fresh enemy at full health with no intent yet.
    #[must_use]
    pub fn spawn(definition: EnemyDefinition) -> Self {
        let combatant = Combatant::new(definition.name.clone(), definition.max_health);
        Self {
            definition,
            combatant,
            intent: None,
        }
    }

    /// The authored definition this enemy was spawned from.
    #[must_use]
    pub fn definition(&self) -> &EnemyDefinition {
        &self.definition
    }

    /// Combat state (health, block).
    #[must_use]
    pub fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    /// Mutable combat state.
    pub fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }

    /// The currently telegraphed intent, if one has been prepared.
    #[must_use]
    pub fn intent(&self) -> Option<EnemyIntent> {
        self.intent
    }

    /// Select and store the intent for the upcoming enemy turn.
    ///
    /// Baseline policy: always attack, magnitude uniform in
    /// `[min_attack, max_attack]`. Called once per player-turn-start;
    /// the result replaces any previous intent.
    pub fn prepare_intent(&mut self, rng: &mut CombatRng) -> EnemyIntent {
        let intent = EnemyIntent {
            kind: IntentKind::Attack,
            magnitude: rng.range_inclusive(self.definition.min_attack, self.definition.max_attack),
        };
        self.intent = Some(intent);
        intent
    }

    /// Execute and consume the stored intent.
    ///
    /// Attack damages the player with the usual block-first arithmetic;
    /// Block adds block to this enemy itself. Returns `None` when no
    /// intent was prepared.
    pub fn execute_intent(&mut self, player: &mut Combatant) -> Option<ExecutedIntent> {
        let intent = self.intent.take()?;

        let effect = match intent.kind {
            IntentKind::Attack => IntentEffect::Damage(player.take_damage(intent.magnitude)),
            IntentKind::Block => {
                self.combatant.add_block(intent.magnitude);
                IntentEffect::Block {
                    gained: intent.magnitude,
                    total: self.combatant.block(),
                }
            }
        };

        Some(ExecutedIntent { intent, effect })
    }
}
