//! Action resolution - turning a placed token into combatant mutations.
//!
//! The policy table is closed: the three authored action/target pairs are
//! handled and anything else is skipped with a reported reason. A skipped
//! token never aborts the rest of the phase.

use super::combatant::{Combatant, DamageOutcome};
use crate::tokens::{ActionKind, TargetKind, TokenDefinition};

/// What resolving one token did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Attack hit the enemy.
    Attack(DamageOutcome),
    /// Player gained block.
    Block { gained: i32, total: i32 },
    /// Player healed.
    Heal { healed: i32, health: i32 },
    /// The action/target pair is outside the policy table; nothing mutated.
    Skipped { action: ActionKind, target: TargetKind },
}

impl ResolveOutcome {
    /// Check if this token was skipped.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, ResolveOutcome::Skipped { .. })
    }
}

/// Resolve one token against the player and the current enemy.
///
/// Mutates exactly one combatant per the definition's action/target pair:
///
/// | action | target      | effect                      |
/// |--------|-------------|-----------------------------|
/// | Attack | SingleEnemy | `enemy.take_damage(roll)`   |
/// | Block  | Owner       | `player.add_block(roll)`    |
/// | Heal   | Owner       | `player.heal(roll)`         |
///
/// Every other combination yields `Skipped` with no mutation.
pub fn resolve_token(
    def: &TokenDefinition,
    roll: i32,
    player: &mut Combatant,
    enemy: &mut Combatant,
) -> ResolveOutcome {
    match (def.action, def.target) {
        (ActionKind::Attack, TargetKind::SingleEnemy) => {
            ResolveOutcome::Attack(enemy.take_damage(roll))
        }
        (ActionKind::Block, TargetKind::Owner) => {
            player.add_block(roll);
            ResolveOutcome::Block {
                gained: roll.max(0),
                total: player.block(),
            }
        }
        (ActionKind::Heal, TargetKind::Owner) => {
            let healed = player.heal(roll);
            ResolveOutcome::Heal {
                healed,
                health: player.health(),
            }
        }
        (action, target) => ResolveOutcome::Skipped { action, target },
    }
}
