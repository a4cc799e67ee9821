//! Table state and the turn controller.

pub mod controller;
pub mod table;

pub use controller::{Game, GameOptions, GameOutcome, TurnOutcome};
pub use table::{Direction, Phase, TableState};
