//! Combat arithmetic: combatants, mana, enemies, and action resolution.
//!
//! ## Key Types
//!
//! - `Combatant`: health/block with block-first damage absorption
//! - `ManaPool`: the player's per-turn spendable resource
//! - `Enemy` / `EnemyDefinition` / `EnemyIntent`: telegraphed enemy turns
//! - `resolve_token`: the closed action/target policy table

pub mod combatant;
pub mod enemy;
pub mod resolver;

pub use combatant::{Combatant, DamageOutcome, ManaPool};
pub use enemy::{Enemy, EnemyDefinition, EnemyIntent, ExecutedIntent, IntentEffect, IntentKind};
pub use resolver::{resolve_token, ResolveOutcome};
