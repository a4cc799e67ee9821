//! Player capability and the seat registry.
//!
//! A [`Player`] is a decision source with exactly one required move
//! operation plus the color callback wilds need. Implementations see
//! only a read-only [`TurnView`]: their own hand, the card to match,
//! the active color, the pending penalty, and opponents' hand *sizes*,
//! never opponents' hand contents.
//!
//! The [`PlayerList`] fixes the cyclic turn order at construction:
//! the first entry acts first, and hands live next to their seats so
//! the engine is the only code that ever mutates them.

pub mod random;

use crate::cards::{Card, CardStack, Color, Hand};
use crate::core::PlayerId;
use crate::game::Direction;
use crate::rules::card_is_playable;

pub use random::RandomPlayer;

/// Read-only snapshot handed to a player when it must act.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    /// Card the move is matched against.
    pub top_card: Card,
    /// Color the move must match.
    pub active_color: Color,
    /// Unpaid draw penalty; non-zero means stack a draw card or submit
    /// an empty move to pay it.
    pub pending_draw: u32,
    /// Current play direction.
    pub direction: Direction,
    /// The acting player's own hand, in display order.
    pub hand: &'a [Card],
    /// Opponents' hand sizes, ordered from the seat immediately
    /// following the acting player in current turn order.
    pub other_hand_sizes: &'a [usize],
}

impl TurnView<'_> {
    /// Cards in the hand that could legally open a move right now.
    #[must_use]
    pub fn playable_cards(&self) -> Vec<Card> {
        self.hand
            .iter()
            .copied()
            .filter(|&c| card_is_playable(c, self.top_card, self.active_color, self.pending_draw))
            .collect()
    }
}

/// A decision source seated at the table.
///
/// Returning an empty stack from [`Player::choose_move`] signals "no
/// play; draw" (or "pay the pending penalty" when one is open).
/// Returning cards commits to that exact stack; the engine validates
/// it and surfaces an error rather than substituting a draw.
pub trait Player {
    /// Display identity.
    fn name(&self) -> &str;

    /// Choose the stack to play this turn.
    fn choose_move(&mut self, view: &TurnView<'_>) -> CardStack;

    /// Choose the active color after playing a wild.
    fn choose_color(&mut self, view: &TurnView<'_>) -> Color;
}

struct Seat {
    player: Box<dyn Player>,
    hand: Hand,
}

/// Ordered, cyclic registry of seats.
///
/// Order defines the turn sequence; the direction flag lives in
/// [`TableState`](crate::game::TableState), not here.
pub struct PlayerList {
    seats: Vec<Seat>,
}

impl PlayerList {
    /// Seat players in the given order; the first entry acts first.
    #[must_use]
    pub fn new(players: Vec<Box<dyn Player>>) -> Self {
        let seats = players
            .into_iter()
            .map(|player| Seat { player, hand: Hand::new() })
            .collect();
        Self { seats }
    }

    /// Seat players with pre-set hands.
    ///
    /// For scenario setup in tests and harnesses; normal games deal
    /// through [`Game::new`](crate::game::Game::new).
    ///
    /// Panics unless one hand is supplied per player.
    #[must_use]
    pub fn with_hands(players: Vec<Box<dyn Player>>, hands: Vec<Hand>) -> Self {
        assert_eq!(players.len(), hands.len(), "one hand per player");
        let seats = players
            .into_iter()
            .zip(hands)
            .map(|(player, hand)| Seat { player, hand })
            .collect();
        Self { seats }
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Display name of a seat.
    #[must_use]
    pub fn name(&self, id: PlayerId) -> &str {
        self.seats[id.index()].player.name()
    }

    /// A seat's hand (read-only; presentation layers render from this).
    #[must_use]
    pub fn hand(&self, id: PlayerId) -> &Hand {
        &self.seats[id.index()].hand
    }

    pub(crate) fn hand_mut(&mut self, id: PlayerId) -> &mut Hand {
        &mut self.seats[id.index()].hand
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut dyn Player {
        self.seats[id.index()].player.as_mut()
    }

    /// Hand sizes for every seat, in seat order.
    #[must_use]
    pub fn hand_sizes(&self) -> Vec<usize> {
        self.seats.iter().map(|s| s.hand.len()).collect()
    }

    /// Opponents' hand sizes as seen from `from`, ordered starting with
    /// the seat immediately following in the given direction.
    #[must_use]
    pub fn other_hand_sizes(&self, from: PlayerId, direction: Direction) -> Vec<usize> {
        let n = self.len();
        (1..n)
            .map(|steps| {
                let seat = direction.step(from, n, steps);
                self.seats[seat.index()].hand.len()
            })
            .collect()
    }

    /// Total cards held across all seats.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.seats.iter().map(|s| s.hand.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Rank};

    struct Silent(&'static str);

    impl Player for Silent {
        fn name(&self) -> &str {
            self.0
        }
        fn choose_move(&mut self, _view: &TurnView<'_>) -> CardStack {
            CardStack::new()
        }
        fn choose_color(&mut self, _view: &TurnView<'_>) -> Color {
            Color::Red
        }
    }

    fn registry(n: usize) -> PlayerList {
        let names = ["a", "b", "c", "d"];
        PlayerList::new(
            (0..n)
                .map(|i| Box::new(Silent(names[i])) as Box<dyn Player>)
                .collect(),
        )
    }

    #[test]
    fn test_seat_order_fixed_by_construction() {
        let players = registry(3);
        assert_eq!(players.len(), 3);
        assert_eq!(players.name(PlayerId::new(0)), "a");
        assert_eq!(players.name(PlayerId::new(2)), "c");
    }

    #[test]
    fn test_other_hand_sizes_follow_direction() {
        let mut players = registry(3);
        for (i, count) in [1usize, 2, 3].into_iter().enumerate() {
            for _ in 0..count {
                players
                    .hand_mut(PlayerId::new(i as u8))
                    .add(Card::colored(Color::Red, Rank::Number(1)));
            }
        }

        // Seat 0, forward: next is seat 1 (2 cards), then seat 2 (3).
        assert_eq!(
            players.other_hand_sizes(PlayerId::new(0), Direction::Forward),
            vec![2, 3]
        );
        // Seat 0, backward: next is seat 2 (3 cards), then seat 1 (2).
        assert_eq!(
            players.other_hand_sizes(PlayerId::new(0), Direction::Backward),
            vec![3, 2]
        );
    }

    #[test]
    fn test_playable_cards_respects_pending() {
        let hand = [
            Card::colored(Color::Red, Rank::Number(5)),
            Card::colored(Color::Red, Rank::DrawTwo),
            Card::wild(),
        ];
        let sizes = [7usize];
        let mut view = TurnView {
            top_card: Card::colored(Color::Red, Rank::DrawTwo),
            active_color: Color::Red,
            pending_draw: 0,
            direction: Direction::Forward,
            hand: &hand,
            other_hand_sizes: &sizes,
        };

        assert_eq!(view.playable_cards().len(), 3);

        view.pending_draw = 2;
        assert_eq!(
            view.playable_cards(),
            vec![Card::colored(Color::Red, Rank::DrawTwo)]
        );
    }
}
