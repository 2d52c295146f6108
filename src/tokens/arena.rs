//! Arena of live token instances.
//!
//! Instances are spawned when drawn and removed when discarded; the arena
//! is the single owner of `TokenInstance` values. Hand and board slots
//! refer to instances by id only, so a token is never duplicated across
//! collections.

use rustc_hash::FxHashMap;

use super::instance::TokenInstance;
use crate::core::ids::{InstanceId, TokenId};

/// Owner of all live token instances in a session.
#[derive(Clone, Debug, Default)]
pub struct TokenArena {
    tokens: FxHashMap<InstanceId, TokenInstance>,
    next_id: u32,
}

impl TokenArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a new instance with the given roll value.
    ///
    /// Returns the freshly allocated id. Ids are never reused.
    pub fn spawn(&mut self, token: TokenId, roll: i32) -> InstanceId {
        let id = InstanceId::new(self.next_id);
        self.next_id += 1;
        self.tokens.insert(id, TokenInstance::new(id, token, roll));
        id
    }

    /// Get an instance by id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&TokenInstance> {
        self.tokens.get(&id)
    }

    /// Get a mutable instance by id.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut TokenInstance> {
        self.tokens.get_mut(&id)
    }

    /// Remove an instance, ending its identity.
    ///
    /// Returns the removed instance so callers can discard its definition.
    pub fn remove(&mut self, id: InstanceId) -> Option<TokenInstance> {
        self.tokens.remove(&id)
    }

    /// Check if an instance is alive.
    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.tokens.contains_key(&id)
    }

    /// Number of live instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no instances are alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over all live instances.
    pub fn iter(&self) -> impl Iterator<Item = &TokenInstance> {
        self.tokens.values()
    }
}
