//! Engine error taxonomy.
//!
//! Every variant is a player-input-validation failure raised
//! synchronously from the step that detects it. The engine never
//! retries or downgrades a failure on its own; a retry policy belongs
//! to the calling layer, which may re-prompt the same player against
//! the unchanged table state.

use thiserror::Error;

use crate::cards::Card;

/// Errors surfaced by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A proposed card is not in the acting player's hand (caller bug).
    #[error("card {0} is not in the acting player's hand")]
    NotInHand(Card),

    /// A single move mixed cards of different ranks.
    #[error("all cards in one move must share the same rank")]
    InvalidStack,

    /// The first card does not match the table, or a non-draw card was
    /// played while a draw penalty is pending.
    #[error("move is not legal against the current table state")]
    IllegalMove,

    /// Both piles ran dry mid-draw. Unreachable while card conservation
    /// holds; treated as fatal to the game instance if it ever fires.
    #[error("draw pile and discard pile cannot supply the requested cards")]
    DeckExhausted,
}
