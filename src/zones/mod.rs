//! Zones a token can occupy: deck piles, hand slots, and the action board.
//!
//! Together with the `TokenArena` these enforce the conservation rule:
//! every token in the starting deck is in exactly one of draw pile,
//! discard pile, hand slot, or action slot at all times.

pub mod board;
pub mod deck;
pub mod hand;

pub use board::ActionBoard;
pub use deck::Deck;
pub use hand::Hand;
