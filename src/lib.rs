//! # uno-engine
//!
//! A deterministic UNO game engine for human and programmatic players.
//!
//! The crate is only the engine: the turn state machine, move
//! legality, special-card effect resolution, deck/discard lifecycle,
//! and win detection. Rendering, prompting, and argument parsing are
//! thin wrappers that live outside and talk to [`Game`] through its
//! observers.
//!
//! ## Design Principles
//!
//! 1. **One mutator**: hands, piles, and table state change only
//!    inside the engine, in response to a single player's turn.
//!    Players observe read-only [`TurnView`] snapshots.
//!
//! 2. **No ambient state**: direction, pending penalty, and the active
//!    color live in one [`TableState`] value per game, so independent
//!    instances run concurrently without any shared mutable state.
//!
//! 3. **Deterministic**: all shuffling goes through a seeded
//!    [`GameRng`]; a game replayed with the same seed and the same
//!    player decisions is identical.
//!
//! 4. **Errors, not guesses**: an illegal move comes back as an
//!    [`EngineError`] with state untouched. The calling layer decides
//!    whether to re-prompt; the engine never substitutes a draw.
//!
//! ## Modules
//!
//! - `core`: player identity, deterministic RNG
//! - `cards`: card values, the 108-card deck, hands
//! - `rules`: move validation and stack effect resolution
//! - `game`: table state and the turn controller
//! - `players`: the `Player` capability and the seat registry
//!
//! ## Example
//!
//! ```
//! use uno_engine::{Game, PlayerList, RandomPlayer, Player};
//!
//! let players = PlayerList::new(vec![
//!     Box::new(RandomPlayer::new("alice", 1)) as Box<dyn Player>,
//!     Box::new(RandomPlayer::new("bob", 2)),
//! ]);
//!
//! let mut game = Game::new(players, 42).unwrap();
//! let outcome = game.run().unwrap();
//! assert!(outcome.hand_sizes[outcome.winner.index()] == 0);
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod players;
pub mod rules;

// Re-export the public surface.
pub use crate::cards::{full_deck, Card, CardStack, Color, Deck, Hand, Rank, DECK_SIZE};
pub use crate::core::{GameRng, PlayerId};
pub use crate::error::EngineError;
pub use crate::game::{Direction, Game, GameOptions, GameOutcome, Phase, TableState, TurnOutcome};
pub use crate::players::{Player, PlayerList, RandomPlayer, TurnView};
pub use crate::rules::{card_is_playable, validate_move, StackEffect};
