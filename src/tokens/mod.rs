//! Token system: definitions, instances, registry, and arena.
//!
//! ## Key Types
//!
//! - `TokenDefinition`: immutable authored data (sides, cost, action)
//! - `TokenRegistry`: definition lookup by `TokenId`
//! - `TokenInstance`: one drawn copy with a fixed roll and a placement
//! - `TokenArena`: owner of live instances, draw-to-discard lifecycle

pub mod arena;
pub mod definition;
pub mod instance;
pub mod registry;

pub use arena::TokenArena;
pub use definition::{ActionKind, DieSides, Element, Rarity, TargetKind, TokenDefinition};
pub use instance::{Placement, TokenInstance};
pub use registry::TokenRegistry;
