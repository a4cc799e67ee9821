//! Card values: colors, ranks, and the fixed 108-card set.
//!
//! A [`Card`] is an immutable value. Wild ranks carry no intrinsic
//! color (`color == None`) until played, at which point the acting
//! player's chosen color becomes the table's active color; the card
//! itself never changes.
//!
//! Two cards are *matching* for stacking purposes iff their ranks are
//! equal, regardless of color.

use serde::{Deserialize, Serialize};

/// One of the four UNO colors.
///
/// Wildness is modeled as `Card::color == None`, not a fifth variant,
/// so a `Color` value always names a real, matchable color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// All four colors, in sort order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    fn sort_index(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Yellow => 1,
            Color::Green => 2,
            Color::Blue => 3,
        }
    }

    /// Lowercase display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank: a numeral, an action, or a wild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Numeral 0-9.
    Number(u8),
    /// Next player loses their turn.
    Skip,
    /// Play direction flips (acts as Skip with two players).
    Reverse,
    /// Next player draws two unless they stack.
    DrawTwo,
    /// Player declares the active color.
    Wild,
    /// Wild plus a draw-four penalty.
    WildDrawFour,
}

impl Rank {
    /// Whether this rank is a wild (playable on anything, color chosen
    /// by the player).
    #[must_use]
    pub fn is_wild(self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }

    /// Whether this rank participates in a pending draw-penalty chain.
    #[must_use]
    pub fn is_draw_action(self) -> bool {
        matches!(self, Rank::DrawTwo | Rank::WildDrawFour)
    }

    /// Cards the next player must draw per copy of this rank.
    #[must_use]
    pub fn draw_penalty(self) -> u32 {
        match self {
            Rank::DrawTwo => 2,
            Rank::WildDrawFour => 4,
            _ => 0,
        }
    }

    fn sort_index(self) -> u8 {
        match self {
            Rank::Number(n) => n,
            Rank::Skip => 11,
            Rank::Reverse => 12,
            Rank::DrawTwo => 13,
            Rank::WildDrawFour => 21,
            Rank::Wild => 22,
        }
    }

    /// Lowercase display name (numerals render as the digit).
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Rank::Number(n) => n.to_string(),
            Rank::Skip => "skip".to_string(),
            Rank::Reverse => "reverse".to_string(),
            Rank::DrawTwo => "draw2".to_string(),
            Rank::Wild => "wild".to_string(),
            Rank::WildDrawFour => "draw4".to_string(),
        }
    }
}

/// One physical card.
///
/// Immutable once created. `color` is `None` iff the rank is wild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Printed color; `None` for wild ranks.
    pub color: Option<Color>,
    /// Printed rank.
    pub rank: Rank,
}

impl Card {
    /// Create a colored (numeral or action) card.
    ///
    /// Panics if the rank is wild or the numeral is out of 0-9; the
    /// full set comes from [`full_deck`] in practice.
    #[must_use]
    pub fn colored(color: Color, rank: Rank) -> Self {
        assert!(!rank.is_wild(), "wild cards carry no printed color");
        if let Rank::Number(n) = rank {
            assert!(n <= 9, "numerals run 0-9");
        }
        Self { color: Some(color), rank }
    }

    /// Create a wild card.
    #[must_use]
    pub fn wild() -> Self {
        Self { color: None, rank: Rank::Wild }
    }

    /// Create a wild-draw-four card.
    #[must_use]
    pub fn wild_draw_four() -> Self {
        Self { color: None, rank: Rank::WildDrawFour }
    }

    /// Whether this is a wild card.
    #[must_use]
    pub fn is_wild(self) -> bool {
        self.rank.is_wild()
    }

    /// Whether two cards match for stacking (equal ranks).
    #[must_use]
    pub fn matches_rank(self, other: Card) -> bool {
        self.rank == other.rank
    }

    /// Color-major sort code; wilds sort last. Used to keep hands in
    /// display order.
    #[must_use]
    pub fn sort_code(self) -> u16 {
        let color = self.color.map_or(4, Color::sort_index);
        u16::from(color) * 100 + u16::from(self.rank.sort_index())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_code().cmp(&other.sort_code())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color {
            Some(color) => write!(f, "{}({})", self.rank.name(), color),
            None => f.write_str(&self.rank.name()),
        }
    }
}

/// Total number of cards in the UNO set.
pub const DECK_SIZE: usize = 108;

/// Build the fixed 108-card UNO set, unshuffled.
///
/// Per color: one `0`, two each of `1`-`9`, two each of Skip, Reverse
/// and DrawTwo. Plus four Wild and four WildDrawFour.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for color in Color::ALL {
        cards.push(Card::colored(color, Rank::Number(0)));
        for n in 1..=9 {
            for _ in 0..2 {
                cards.push(Card::colored(color, Rank::Number(n)));
            }
        }
        for rank in [Rank::Skip, Rank::Reverse, Rank::DrawTwo] {
            for _ in 0..2 {
                cards.push(Card::colored(color, rank));
            }
        }
    }

    for _ in 0..4 {
        cards.push(Card::wild());
        cards.push(Card::wild_draw_four());
    }

    debug_assert_eq!(cards.len(), DECK_SIZE);
    cards
}
