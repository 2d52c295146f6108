//! Draw and discard piles.
//!
//! The deck holds definition ids only; drawn copies live in the
//! `TokenArena` until they return here as discards. Deck operations
//! relocate ids and never create or destroy them, so
//! `draw_count + discard_count + live instances` stays constant for a
//! whole session.

use crate::core::ids::TokenId;
use crate::core::rng::CombatRng;

/// An ordered draw pile (top = last element) plus an unordered discard pile.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    draw_pile: Vec<TokenId>,
    discard_pile: Vec<TokenId>,
}

impl Deck {
    /// Create a deck from the starting definition list, shuffled.
    #[must_use]
    pub fn new(cards: Vec<TokenId>, rng: &mut CombatRng) -> Self {
        let mut deck = Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
        };
        rng.shuffle(&mut deck.draw_pile);
        deck
    }

    /// Draw the top card.
    ///
    /// If the draw pile is empty and discards exist, every discard moves
    /// into the draw pile, the pile is shuffled, and the draw proceeds.
    /// Both piles empty yields `None` without mutating either pile; the
    /// caller treats that as "fewer tokens available", not an error.
    pub fn draw(&mut self, rng: &mut CombatRng) -> Option<TokenId> {
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                log::debug!("deck: both piles empty, nothing to draw");
                return None;
            }
            log::debug!(
                "deck: draw pile empty, reshuffling {} discards",
                self.discard_pile.len()
            );
            self.draw_pile.append(&mut self.discard_pile);
            rng.shuffle(&mut self.draw_pile);
        }

        self.draw_pile.pop()
    }

    /// Append a definition id to the discard pile.
    ///
    /// Unconditional: the deck does not check where the id came from.
    /// Callers are responsible for not double-discarding.
    pub fn discard(&mut self, id: TokenId) {
        self.discard_pile.push(id);
    }

    /// Number of cards in the draw pile.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw_pile.len()
    }

    /// Number of cards in the discard pile.
    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discard_pile.len()
    }

    /// Total cards across both piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u32) -> Vec<TokenId> {
        (0..n).map(TokenId::new).collect()
    }

    #[test]
    fn test_new_deck_is_shuffled() {
        let mut rng = CombatRng::new(42);
        let deck = Deck::new(ids(30), &mut rng);

        assert_eq!(deck.draw_count(), 30);
        assert_eq!(deck.discard_count(), 0);
    }

    #[test]
    fn test_draw_is_lifo() {
        let mut rng = CombatRng::new(42);
        let mut deck = Deck {
            draw_pile: vec![TokenId::new(1), TokenId::new(2), TokenId::new(3)],
            discard_pile: Vec::new(),
        };

        assert_eq!(deck.draw(&mut rng), Some(TokenId::new(3)));
        assert_eq!(deck.draw(&mut rng), Some(TokenId::new(2)));
        assert_eq!(deck.draw_count(), 1);
    }

    #[test]
    fn test_reshuffle_on_exhaustion() {
        let mut rng = CombatRng::new(42);
        let mut deck = Deck::new(ids(2), &mut rng);

        let a = deck.draw(&mut rng).unwrap();
        let b = deck.draw(&mut rng).unwrap();
        deck.discard(a);
        deck.discard(b);
        assert_eq!(deck.draw_count(), 0);
        assert_eq!(deck.discard_count(), 2);

        // Draw triggers the reshuffle: discards move in, discard empties
        let drawn = deck.draw(&mut rng).unwrap();
        assert!(drawn == a || drawn == b);
        assert_eq!(deck.discard_count(), 0);
        assert_eq!(deck.draw_count(), 1);
    }

    #[test]
    fn test_empty_deck_draws_nothing() {
        let mut rng = CombatRng::new(42);
        let mut deck = Deck::new(ids(1), &mut rng);

        assert!(deck.draw(&mut rng).is_some());
        assert_eq!(deck.draw(&mut rng), None);
        assert_eq!(deck.draw(&mut rng), None);
        assert_eq!(deck.draw_count(), 0);
        assert_eq!(deck.discard_count(), 0);
    }

    #[test]
    fn test_discard_is_unconditional() {
        let mut rng = CombatRng::new(42);
        let mut deck = Deck::new(ids(1), &mut rng);

        deck.discard(TokenId::new(99));
        deck.discard(TokenId::new(99));
        assert_eq!(deck.discard_count(), 2);
        assert_eq!(deck.total(), 3);
    }

    #[test]
    fn test_conservation_over_cycles() {
        let mut rng = CombatRng::new(7);
        let mut deck = Deck::new(ids(10), &mut rng);

        for _ in 0..50 {
            if let Some(id) = deck.draw(&mut rng) {
                deck.discard(id);
            }
            assert_eq!(deck.total(), 10);
        }
    }
}
