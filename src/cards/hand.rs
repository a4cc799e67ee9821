//! A player's hand.
//!
//! A [`Hand`] is a multiset of cards owned by one seat in the
//! registry. Only the engine mutates it: cards arrive on deals and
//! draws, and leave when a validated move is committed. Player
//! implementations observe it read-only through their turn view.

use serde::{Deserialize, Serialize};

use crate::cards::card::Card;
use crate::error::EngineError;

/// Multiset of cards held by one player, kept in display order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand holding the given cards.
    #[must_use]
    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self::new();
        hand.add_all(cards);
        hand
    }

    /// Add one card, keeping the hand sorted.
    pub fn add(&mut self, card: Card) {
        let pos = self.cards.partition_point(|c| *c <= card);
        self.cards.insert(pos, card);
    }

    /// Add several cards.
    pub fn add_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.add(card);
        }
    }

    /// Number of copies of `card` in the hand.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|c| **c == card).count()
    }

    /// Whether at least one copy of `card` is held.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove one copy of `card`, if held.
    pub fn remove(&mut self, card: Card) -> Option<Card> {
        let pos = self.cards.iter().position(|c| *c == card)?;
        Some(self.cards.remove(pos))
    }

    /// Remove an entire validated stack, all-or-nothing.
    ///
    /// Fails with [`EngineError::NotInHand`] without touching the hand
    /// if any copy is missing; the validator checks this first, so a
    /// failure here means the hand changed between validation and
    /// commit (an engine bug).
    pub fn remove_stack(&mut self, cards: &[Card]) -> Result<(), EngineError> {
        for (i, &card) in cards.iter().enumerate() {
            let proposed_copies = cards[..=i].iter().filter(|c| **c == card).count();
            if self.count(card) < proposed_copies {
                return Err(EngineError::NotInHand(card));
            }
        }
        for &card in cards {
            self.remove(card);
        }
        Ok(())
    }

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand is empty (the win condition).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::{Color, Rank};

    fn red(n: u8) -> Card {
        Card::colored(Color::Red, Rank::Number(n))
    }

    #[test]
    fn test_add_keeps_sorted() {
        let mut hand = Hand::new();
        hand.add(Card::wild());
        hand.add(red(7));
        hand.add(Card::colored(Color::Blue, Rank::Skip));
        hand.add(red(2));

        let codes: Vec<_> = hand.cards().iter().map(|c| c.sort_code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_multiset_counting() {
        let mut hand = Hand::new();
        hand.add(red(5));
        hand.add(red(5));

        assert_eq!(hand.count(red(5)), 2);
        hand.remove(red(5));
        assert_eq!(hand.count(red(5)), 1);
        assert!(hand.contains(red(5)));
    }

    #[test]
    fn test_remove_stack_all_or_nothing() {
        let mut hand = Hand::new();
        hand.add(red(5));
        hand.add(Card::colored(Color::Blue, Rank::Number(5)));

        // Two copies proposed, one held.
        let err = hand.remove_stack(&[red(5), red(5)]);
        assert_eq!(err, Err(EngineError::NotInHand(red(5))));
        assert_eq!(hand.len(), 2);

        hand.remove_stack(&[red(5), Card::colored(Color::Blue, Rank::Number(5))])
            .unwrap();
        assert!(hand.is_empty());
    }
}
