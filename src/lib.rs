//! # dice-combat
//!
//! A turn-based dice combat engine: the player draws dice tokens from a
//! deck, spends mana to place them on action slots, and submits the turn;
//! placed tokens resolve in slot order, then the enemy executes its
//! telegraphed intent.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through one seeded
//!    `CombatRng`. The same config and seed replay the same combat.
//!
//! 2. **Conservation**: Tokens never enter or leave the card pool after
//!    setup. Every token is in exactly one of draw pile, discard pile,
//!    hand slot, or action slot.
//!
//! 3. **Headless Core**: No rendering, timing, or input handling. The
//!    engine publishes `CombatEvent`s; presentation subscribes through
//!    the `EventBus` and stays out of the rules.
//!
//! ## Modules
//!
//! - `core`: identifiers, RNG, configuration, errors
//! - `tokens`: token definitions, live instances, registry, arena
//! - `zones`: deck piles, hand slots, the action board
//! - `combat`: combatants, mana, enemies, action resolution
//! - `session`: the turn controller and the event stream
//!
//! ## Quick Start
//!
//! ```
//! use dice_combat::core::{ActionSlot, CombatConfig, PlayerConfig, TokenId};
//! use dice_combat::combat::EnemyDefinition;
//! use dice_combat::session::TurnController;
//! use dice_combat::tokens::{ActionKind, DieSides, TargetKind, TokenDefinition};
//!
//! let config = CombatConfig {
//!     player: PlayerConfig::default(),
//!     tokens: vec![TokenDefinition::new(
//!         TokenId::new(1),
//!         "Strike",
//!         DieSides::D6,
//!         ActionKind::Attack,
//!         TargetKind::SingleEnemy,
//!     )
//!     .with_cost(1)],
//!     deck: vec![TokenId::new(1); 8],
//!     enemies: vec![EnemyDefinition::new("Goblin", 20, 3, 5)],
//!     action_slots: 5,
//! };
//!
//! let mut combat = TurnController::new(config, 42)?;
//! let (_, token) = combat.hand().iter().next().unwrap();
//! combat.request_place(token, ActionSlot::new(0))?;
//! combat.submit_turn()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod combat;
pub mod core;
pub mod session;
pub mod tokens;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionSlot, CombatConfig, CombatRng, HandSlot, InstanceId, PlacementError, PlayerConfig,
    SetupError, SubmitError, TokenId,
};

pub use crate::tokens::{
    ActionKind, DieSides, TargetKind, TokenArena, TokenDefinition, TokenInstance, TokenRegistry,
};

pub use crate::combat::{
    Combatant, DamageOutcome, Enemy, EnemyDefinition, EnemyIntent, IntentKind, ManaPool,
    ResolveOutcome,
};

pub use crate::zones::{ActionBoard, Deck, Hand};

pub use crate::session::{
    CombatEvent, CombatObserver, EventBus, EventLog, Phase, Side, TurnController,
};
