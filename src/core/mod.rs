//! Core engine types: identifiers, RNG, configuration, and errors.
//!
//! These are the building blocks the rest of the engine is assembled from.
//! Nothing here knows about turn sequencing.

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;

pub use config::{CombatConfig, PlayerConfig};
pub use error::{PlacementError, SetupError, SubmitError};
pub use ids::{ActionSlot, HandSlot, InstanceId, TokenId};
pub use rng::CombatRng;
