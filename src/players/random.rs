//! Seeded random reference player.
//!
//! Exists as the contract's reference implementation and as the driver
//! for self-play tests; its decision quality is deliberately not part
//! of the engine.

use crate::cards::{CardStack, Color};
use crate::core::GameRng;
use crate::players::{Player, TurnView};

/// Plays a uniformly chosen playable card (plus any same-rank copies
/// it holds) and picks wild colors at random.
pub struct RandomPlayer {
    name: String,
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a seeded random player.
    #[must_use]
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self { name: name.into(), rng: GameRng::new(seed) }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, view: &TurnView<'_>) -> CardStack {
        let playable = view.playable_cards();
        let Some(&first) = self.rng.choose(&playable) else {
            return CardStack::new();
        };

        // Stack every copy of the chosen rank; one instance of the
        // opener goes first so the table match is judged against it.
        let mut stack = CardStack::new();
        stack.push(first);
        let mut skipped_opener = false;
        for &card in view.hand {
            if card.rank != first.rank {
                continue;
            }
            if card == first && !skipped_opener {
                skipped_opener = true;
                continue;
            }
            stack.push(card);
        }
        stack
    }

    fn choose_color(&mut self, _view: &TurnView<'_>) -> Color {
        *self
            .rng
            .choose(&Color::ALL)
            .expect("Color::ALL is non-empty")
    }
}
