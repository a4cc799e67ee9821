//! Move legality.
//!
//! Pure functions; nothing here mutates engine state. Rules are
//! checked in a fixed order so callers always see the most specific
//! failure:
//!
//! 1. every proposed card must be in the hand ([`EngineError::NotInHand`]),
//! 2. all proposed cards must share one rank ([`EngineError::InvalidStack`]),
//! 3. the first card must be legal against the table, and while a draw
//!    penalty is pending it must itself be a draw-action rank
//!    ([`EngineError::IllegalMove`]).
//!
//! An empty proposal is always legal: it is the "no play, draw"
//! request resolved by the controller.

use crate::cards::{Card, Color, Hand};
use crate::error::EngineError;
use crate::game::TableState;

/// Whether a single card could legally open a move right now.
///
/// Legal when the card is a wild rank, its color equals the active
/// color, or its rank equals the top card's rank. While a penalty is
/// pending, only draw-action ranks qualify at all (the penalty chain
/// must be continued or paid).
///
/// Takes the table fields individually so player implementations can
/// call it from their read-only [`TurnView`](crate::players::TurnView).
#[must_use]
pub fn card_is_playable(card: Card, top_card: Card, active_color: Color, pending_draw: u32) -> bool {
    if pending_draw > 0 && !card.rank.is_draw_action() {
        return false;
    }
    card.is_wild() || card.color == Some(active_color) || card.rank == top_card.rank
}

/// Validate a proposed move against the hand and table.
///
/// Accepts exactly the moves the rules above allow; on acceptance
/// the proposed cards are committed by the controller in the given
/// order.
pub fn validate_move(
    hand: &Hand,
    proposed: &[Card],
    table: &TableState,
) -> Result<(), EngineError> {
    if proposed.is_empty() {
        return Ok(());
    }

    // Multiset containment: enough copies of every proposed card.
    for (i, &card) in proposed.iter().enumerate() {
        let copies_proposed = proposed[..=i].iter().filter(|c| **c == card).count();
        if hand.count(card) < copies_proposed {
            return Err(EngineError::NotInHand(card));
        }
    }

    let first = proposed[0];
    if proposed.iter().any(|c| c.rank != first.rank) {
        return Err(EngineError::InvalidStack);
    }

    if !card_is_playable(first, table.top_card, table.active_color, table.pending_draw) {
        return Err(EngineError::IllegalMove);
    }

    Ok(())
}
