//! Effect resolution for accepted stacks.
//!
//! [`StackEffect::of`] is the pure left-to-right fold over a validated
//! stack; the controller applies the result to the table (direction,
//! pending penalty, color choice) after committing the cards to the
//! discard pile. Keeping the fold pure makes every rank combination
//! directly testable without a game instance.

use crate::cards::{Card, Rank};

/// Accumulated consequences of one played stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StackEffect {
    /// Extra seats to skip beyond the normal turn advance.
    pub extra_skips: usize,
    /// Direction toggles to apply (Reverse with 3+ players).
    pub direction_flips: usize,
    /// Draw penalty added to the table's pending count.
    pub draw_penalty: u32,
    /// Whether the acting player must supply a new active color.
    pub needs_color: bool,
}

impl StackEffect {
    /// Fold the effects of `cards`, played left to right.
    ///
    /// With exactly two players a Reverse behaves as an additional
    /// Skip rather than a direction flip.
    #[must_use]
    pub fn of(cards: &[Card], player_count: usize) -> Self {
        let mut effect = StackEffect::default();

        for card in cards {
            match card.rank {
                Rank::Number(_) => {}
                Rank::Skip => effect.extra_skips += 1,
                Rank::Reverse => {
                    if player_count == 2 {
                        effect.extra_skips += 1;
                    } else {
                        effect.direction_flips += 1;
                    }
                }
                Rank::DrawTwo => effect.draw_penalty += 2,
                Rank::Wild => effect.needs_color = true,
                Rank::WildDrawFour => {
                    effect.needs_color = true;
                    effect.draw_penalty += 4;
                }
            }
        }

        effect
    }
}
