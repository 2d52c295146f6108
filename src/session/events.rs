//! Combat events and the observer seam.
//!
//! The controller publishes every externally visible state change as a
//! `CombatEvent`. Presentation layers subscribe through the `EventBus`
//! with explicit register/unregister calls; the core never knows how (or
//! whether) an event is displayed.
//!
//! Events are fire-and-forget notifications: observers return nothing and
//! cannot veto or reorder what the controller does.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::combat::EnemyIntent;
use crate::core::ids::{ActionSlot, TokenId};
use crate::tokens::ActionKind;

/// Which participant an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// A notification published by the turn controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// Combat setup finished; the first player turn is about to begin.
    SetupComplete,
    /// A player turn began (block cleared, mana refilled, hand drawn).
    PlayerTurnStart { turn: u32 },
    /// The submitted turn began resolving placed tokens.
    ActionPhaseStart,
    /// One placed token resolved.
    DieResolved {
        token: TokenId,
        action: ActionKind,
        roll: i32,
        slot: ActionSlot,
    },
    /// A placed token had an unhandled action/target pair and was skipped.
    DieSkipped { token: TokenId, slot: ActionSlot },
    /// Every placed token has resolved and been discarded.
    ActionPhaseEnd,
    /// The enemy's turn began.
    EnemyTurnStart,
    /// The enemy executed its telegraphed intent.
    EnemyActionResolved { intent: EnemyIntent },
    /// The enemy's turn ended.
    EnemyTurnEnd,
    /// The current enemy was defeated. `index` is its roster position.
    EnemyDefeated { index: usize },
    /// Every enemy in the roster is defeated. Terminal.
    AllEnemiesDefeated,
    /// The player's health reached zero. Terminal.
    PlayerDefeated,
    /// A combatant's health changed.
    HealthChanged {
        side: Side,
        health: i32,
        max_health: i32,
    },
    /// A combatant's block changed.
    BlockChanged { side: Side, block: i32 },
    /// The player's mana changed.
    ManaChanged { mana: i32, max_mana: i32 },
    /// A new enemy intent was telegraphed.
    IntentChanged { intent: EnemyIntent },
}

/// Receiver of combat events.
pub trait CombatObserver {
    fn on_event(&mut self, event: &CombatEvent);
}

/// Handle returned by `EventBus::register`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Registry of subscribed observers.
///
/// Subscription is an explicit call; there is no ambient wiring. Events
/// are delivered in registration order.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<(ObserverId, Box<dyn CombatObserver>)>,
    next_id: u64,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe an observer. Returns the handle needed to unsubscribe.
    pub fn register(&mut self, observer: Box<dyn CombatObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Unsubscribe an observer. Returns false if the handle was unknown.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Number of subscribed observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver an event to every observer.
    pub fn emit(&mut self, event: &CombatEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_event(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Recording observer with a shared handle.
///
/// Clones share the same buffer, so a test can keep one handle and hand
/// another to the bus. Single-threaded by design, like the rest of the
/// engine.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<CombatEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded event.
    #[must_use]
    pub fn events(&self) -> Vec<CombatEvent> {
        self.events.borrow().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<CombatEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Check whether an event was recorded.
    #[must_use]
    pub fn contains(&self, event: &CombatEvent) -> bool {
        self.events.borrow().iter().any(|e| e == event)
    }
}

impl CombatObserver for EventLog {
    fn on_event(&mut self, event: &CombatEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
