//! Shared table state.
//!
//! Everything a turn is judged against lives in one [`TableState`]
//! value owned by the controller: the card to match, the active color,
//! the play direction, the accumulated draw penalty, whose turn it is,
//! and the state-machine phase. Nothing here is ambient or global, so
//! independent game instances never interfere.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::core::PlayerId;

/// Turn order direction around the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Flip the direction (Reverse card).
    #[must_use]
    pub fn toggled(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Seat reached from `from` after `steps` steps in this direction.
    #[must_use]
    pub fn step(self, from: PlayerId, player_count: usize, steps: usize) -> PlayerId {
        let n = player_count as i64;
        let delta = match self {
            Direction::Forward => steps as i64,
            Direction::Backward => -(steps as i64),
        };
        let index = (from.index() as i64 + delta).rem_euclid(n);
        PlayerId::new(index as u8)
    }
}

/// State-machine phase of the turn loop.
///
/// The intermediate phases are transient within one `play_turn` call;
/// between calls the table sits in `AwaitingMove` or `GameOver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Current player must respond with a move.
    AwaitingMove,
    /// A proposed move is being checked.
    Validating,
    /// An accepted move's effects are being applied.
    ResolvingEffect,
    /// A wild was played and its color has not been chosen yet.
    AwaitingColorChoice,
    /// Moving to the next seat.
    AdvancingTurn,
    /// A winner has been determined; no further turns occur.
    GameOver,
}

/// The table as all players see it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TableState {
    /// Card plays are matched against. Mirrors the top of the discard
    /// pile at all times.
    pub top_card: Card,
    /// Color plays must match. Equals `top_card`'s printed color except
    /// after a wild, when it is the color its player chose.
    pub active_color: Color,
    /// Current play direction.
    pub direction: Direction,
    /// Accumulated draw penalty not yet paid.
    pub pending_draw: u32,
    /// Seat that acts next.
    pub current: PlayerId,
    /// Turn-loop phase.
    pub phase: Phase,
}

impl TableState {
    /// Opening table: forward play, no penalty, first seat to act.
    #[must_use]
    pub fn opening(top_card: Card, active_color: Color) -> Self {
        Self {
            top_card,
            active_color,
            direction: Direction::Forward,
            pending_draw: 0,
            current: PlayerId::new(0),
            phase: Phase::AwaitingMove,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_forward_wraps() {
        let d = Direction::Forward;
        assert_eq!(d.step(PlayerId::new(2), 4, 1), PlayerId::new(3));
        assert_eq!(d.step(PlayerId::new(3), 4, 1), PlayerId::new(0));
        assert_eq!(d.step(PlayerId::new(0), 4, 6), PlayerId::new(2));
    }

    #[test]
    fn test_step_backward_wraps() {
        let d = Direction::Backward;
        assert_eq!(d.step(PlayerId::new(1), 4, 1), PlayerId::new(0));
        assert_eq!(d.step(PlayerId::new(0), 4, 1), PlayerId::new(3));
        assert_eq!(d.step(PlayerId::new(0), 4, 5), PlayerId::new(3));
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Direction::Forward.toggled(), Direction::Backward);
        assert_eq!(Direction::Backward.toggled().toggled(), Direction::Backward);
    }
}
