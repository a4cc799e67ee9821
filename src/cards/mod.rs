//! Card data model: card values, the deck, and hands.

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{full_deck, Card, Color, Rank, DECK_SIZE};
pub use deck::Deck;
pub use hand::Hand;

/// A stack of same-rank cards played in one move.
///
/// Inline storage for the common case; real stacks are almost always
/// one or two cards.
pub type CardStack = smallvec::SmallVec<[Card; 4]>;
