//! The combat session: turn controller, phases, and the event stream.

pub mod controller;
pub mod events;

pub use controller::{Phase, TurnController};
pub use events::{CombatEvent, CombatObserver, EventBus, EventLog, ObserverId, Side};
