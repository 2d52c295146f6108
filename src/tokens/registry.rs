//! Token registry for definition lookup.

use rustc_hash::FxHashMap;

use super::definition::TokenDefinition;
use crate::core::ids::TokenId;

/// Registry of token definitions.
///
/// Stores every authored definition for a combat session and provides
/// lookup by id.
///
/// ## Example
///
/// ```
/// use dice_combat::tokens::{ActionKind, DieSides, TargetKind, TokenDefinition, TokenRegistry};
/// use dice_combat::core::TokenId;
///
/// let mut registry = TokenRegistry::new();
/// registry.register(TokenDefinition::new(
///     TokenId::new(1),
///     "Strike",
///     DieSides::D6,
///     ActionKind::Attack,
///     TargetKind::SingleEnemy,
/// ));
///
/// assert_eq!(registry.get(TokenId::new(1)).unwrap().name, "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TokenRegistry {
    tokens: FxHashMap<TokenId, TokenDefinition>,
}

impl TokenRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token definition.
    ///
    /// Panics if a definition with the same ID already exists; duplicate
    /// ids are a configuration error callers validate beforehand.
    pub fn register(&mut self, token: TokenDefinition) {
        if self.tokens.contains_key(&token.id) {
            panic!("Token with ID {} already registered", token.id);
        }
        self.tokens.insert(token.id, token);
    }

    /// Get a token definition by ID.
    #[must_use]
    pub fn get(&self, id: TokenId) -> Option<&TokenDefinition> {
        self.tokens.get(&id)
    }

    /// Check if a token ID is registered.
    #[must_use]
    pub fn contains(&self, id: TokenId) -> bool {
        self.tokens.contains_key(&id)
    }

    /// Get the number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &TokenDefinition> {
        self.tokens.values()
    }
}
