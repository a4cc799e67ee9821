//! Draw and discard pile lifecycle.
//!
//! The [`Deck`] owns the two ordered piles. Drawing recycles the
//! discard pile automatically: when the draw pile runs out mid-draw,
//! everything but the top discard is shuffled into a fresh draw pile
//! and the draw continues. The top discard stays put, so the card to
//! match (and the active color) is unaffected by recycling.
//!
//! The union of both piles and all hands is always the fixed 108-card
//! set; the deck never invents or loses cards.

use serde::{Deserialize, Serialize};

use crate::cards::card::{full_deck, Card};
use crate::core::GameRng;
use crate::error::EngineError;

/// Draw pile plus discard pile.
///
/// Both piles are ordered with the top at the end of the backing `Vec`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Full 108-card set, shuffled into the draw pile. Discard starts
    /// empty; flip the opening card with [`Deck::flip_start_card`].
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut draw_pile = full_deck();
        rng.shuffle(&mut draw_pile);
        Self { draw_pile, discard_pile: Vec::new() }
    }

    /// Build a deck from explicit piles (top of each pile last).
    ///
    /// For scenario setup in tests and harnesses; normal games start
    /// from [`Deck::shuffled`].
    #[must_use]
    pub fn from_piles(draw_pile: Vec<Card>, discard_pile: Vec<Card>) -> Self {
        Self { draw_pile, discard_pile }
    }

    /// Remove and return `n` cards from the top of the draw pile,
    /// recycling the discard pile if it runs out mid-draw.
    ///
    /// Fails with [`EngineError::DeckExhausted`] only if recycling
    /// still cannot supply enough cards, which implies a violated
    /// conservation invariant.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Result<Vec<Card>, EngineError> {
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            drawn.push(self.draw_one(rng)?);
        }
        Ok(drawn)
    }

    /// Remove and return the top card of the draw pile, recycling if
    /// the pile is empty.
    pub fn draw_one(&mut self, rng: &mut GameRng) -> Result<Card, EngineError> {
        if self.draw_pile.is_empty() {
            self.recycle(rng);
        }
        self.draw_pile.pop().ok_or(EngineError::DeckExhausted)
    }

    /// Append a played stack to the discard pile in play order; the
    /// last card becomes the new top.
    pub fn play(&mut self, cards: &[Card]) {
        self.discard_pile.extend_from_slice(cards);
    }

    /// Flip the opening discard at game start.
    pub fn flip_start_card(&mut self, rng: &mut GameRng) -> Result<Card, EngineError> {
        let card = self.draw_one(rng)?;
        self.discard_pile.push(card);
        Ok(card)
    }

    /// Top of the discard pile, if any.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    /// Cards remaining in the draw pile.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards in both piles (excludes hands).
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// Shuffle all but the top discard into a fresh draw pile.
    ///
    /// The single top card remains as the new discard top.
    fn recycle(&mut self, rng: &mut GameRng) {
        if self.discard_pile.len() <= 1 {
            return;
        }
        let top = self.discard_pile.pop();
        self.draw_pile.append(&mut self.discard_pile);
        rng.shuffle(&mut self.draw_pile);
        self.discard_pile.extend(top);
    }
}
