//! Turn controller.
//!
//! [`Game`] owns the deck, the seat registry, and the table, and
//! drives the turn state machine: ask the current player for a move,
//! validate it, commit it, resolve its effects, check for a winner,
//! advance. All mutation of hands, piles, and table state happens
//! here, in response to exactly one player's turn at a time.
//!
//! Failed validation leaves every piece of state untouched and
//! surfaces the error to the caller, which may re-prompt the same
//! player against the same table. The engine never silently turns an
//! illegal play into a draw.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardStack, Color, Deck, DECK_SIZE};
use crate::core::{GameRng, PlayerId};
use crate::error::EngineError;
use crate::game::table::{Phase, TableState};
use crate::players::{PlayerList, TurnView};
use crate::rules::{card_is_playable, validate_move, StackEffect};

/// Tunable house rules.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GameOptions {
    /// When a player with no play draws, may the drawn card be played
    /// immediately if legal? Off by default (draw-then-pass).
    pub draw_then_play: bool,
    /// Cards dealt to each seat at game start.
    pub starting_hand_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { draw_then_play: false, starting_hand_size: 7 }
    }
}

/// What one call to [`Game::play_turn`] did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The player played a validated stack.
    Played {
        player: PlayerId,
        stack: Vec<Card>,
        won: bool,
    },
    /// The player had (or claimed) no play and drew one card.
    /// `played_drawn` is set when the draw-then-play option let the
    /// drawn card be played on the spot.
    Drew {
        player: PlayerId,
        played_drawn: Option<Card>,
    },
    /// The player paid a pending draw penalty and forfeited the turn.
    PaidPenalty { player: PlayerId, cards: u32 },
}

/// Terminal result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Seat that emptied its hand.
    pub winner: PlayerId,
    /// Display name of the winner.
    pub winner_name: String,
    /// Remaining hand sizes of every seat, in seat order (the winner's
    /// entry is zero). Input for any out-of-scope scoring layer.
    pub hand_sizes: Vec<usize>,
    /// Turns taken, counting every move, draw, and penalty payment.
    pub turns: u32,
}

/// One game instance: deck, seats, table, and the turn loop.
pub struct Game {
    players: PlayerList,
    deck: Deck,
    table: TableState,
    rng: GameRng,
    options: GameOptions,
    turns: u32,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Deal a fresh game with default options.
    ///
    /// Shuffles the 108-card set with the given seed, deals each seat
    /// its starting hand, and flips the opening discard. If the
    /// opening card is a wild, the first seat chooses the starting
    /// color; the opening card's action effect is not applied.
    ///
    /// Panics if the registry has fewer than two seats.
    pub fn new(players: PlayerList, seed: u64) -> Result<Self, EngineError> {
        Self::with_options(players, seed, GameOptions::default())
    }

    /// Deal a fresh game with explicit options.
    pub fn with_options(
        players: PlayerList,
        seed: u64,
        options: GameOptions,
    ) -> Result<Self, EngineError> {
        assert!(players.len() >= 2, "a game of UNO requires at least 2 players");
        assert!(
            players.len() * options.starting_hand_size + 1 < DECK_SIZE,
            "starting hands cannot consume the whole deck"
        );

        let mut rng = GameRng::new(seed);
        let deck = Deck::shuffled(&mut rng);

        let mut game = Self {
            // Top card and color are placeholders until the opening
            // card is flipped below.
            table: TableState::opening(Card::wild(), Color::Red),
            players,
            deck,
            rng,
            options,
            turns: 0,
            outcome: None,
        };

        for _ in 0..game.options.starting_hand_size {
            for id in PlayerId::all(game.players.len()) {
                let card = game.deck.draw_one(&mut game.rng)?;
                game.players.hand_mut(id).add(card);
            }
        }

        let start = game.deck.flip_start_card(&mut game.rng)?;
        game.table.top_card = start;
        game.table.active_color = match start.color {
            Some(color) => color,
            // Opening wild: the first seat declares the color.
            None => game.ask_color(game.table.current),
        };

        Ok(game)
    }

    /// Assemble a game from explicit parts instead of dealing.
    ///
    /// For scenario setup in tests and harnesses. The caller is
    /// responsible for consistency: the top of `deck`'s discard pile
    /// must equal `table.top_card`, and the piles plus hands should
    /// form the full 108-card set if conservation matters to the
    /// scenario.
    #[must_use]
    pub fn from_parts(
        players: PlayerList,
        deck: Deck,
        table: TableState,
        options: GameOptions,
        seed: u64,
    ) -> Self {
        assert!(players.len() >= 2, "a game of UNO requires at least 2 players");
        Self {
            players,
            deck,
            table,
            rng: GameRng::new(seed),
            options,
            turns: 0,
            outcome: None,
        }
    }

    // === Turn loop ===

    /// Drive the state machine to completion and return the outcome.
    pub fn run(&mut self) -> Result<GameOutcome, EngineError> {
        loop {
            if let Some(outcome) = &self.outcome {
                return Ok(outcome.clone());
            }
            self.play_turn()?;
        }
    }

    /// Run one full turn of the state machine.
    ///
    /// Returns what happened so presentation layers can render per
    /// turn. A validation failure leaves the table, the deck, and the
    /// acting player's hand exactly as they were.
    ///
    /// Panics if called after the game is over.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, EngineError> {
        assert!(
            self.table.phase != Phase::GameOver,
            "play_turn called on a finished game"
        );

        let acting = self.table.current;
        self.table.phase = Phase::AwaitingMove;
        let proposed = self.ask_move(acting);

        self.table.phase = Phase::Validating;
        if proposed.is_empty() {
            return if self.table.pending_draw > 0 {
                self.pay_penalty(acting)
            } else {
                self.draw_and_pass(acting)
            };
        }

        if let Err(err) = validate_move(self.players.hand(acting), &proposed, &self.table) {
            // Same player retries; nothing was mutated.
            self.table.phase = Phase::AwaitingMove;
            return Err(err);
        }

        let won = self.commit_play(acting, &proposed)?;
        self.turns += 1;
        Ok(TurnOutcome::Played { player: acting, stack: proposed.to_vec(), won })
    }

    /// Commit an already-validated stack: move cards to the discard,
    /// resolve effects, check the win condition, advance the turn.
    fn commit_play(&mut self, acting: PlayerId, stack: &[Card]) -> Result<bool, EngineError> {
        self.table.phase = Phase::ResolvingEffect;
        self.players.hand_mut(acting).remove_stack(stack)?;
        self.deck.play(stack);

        let last_card = stack[stack.len() - 1];
        self.table.top_card = last_card;

        let effect = StackEffect::of(stack, self.players.len());

        if effect.needs_color {
            self.table.phase = Phase::AwaitingColorChoice;
            let color = self.ask_color(acting);
            self.table.phase = Phase::ResolvingEffect;
            self.table.active_color = color;
        } else if let Some(color) = last_card.color {
            self.table.active_color = color;
        }

        self.table.pending_draw += effect.draw_penalty;

        // Win detection: checked the instant a play empties the hand.
        if self.players.hand(acting).is_empty() {
            self.table.phase = Phase::GameOver;
            self.outcome = Some(GameOutcome {
                winner: acting,
                winner_name: self.players.name(acting).to_string(),
                hand_sizes: self.players.hand_sizes(),
                turns: self.turns + 1,
            });
            return Ok(true);
        }

        self.table.phase = Phase::AdvancingTurn;
        for _ in 0..effect.direction_flips {
            self.table.direction = self.table.direction.toggled();
        }
        self.table.current = self.table.direction.step(
            acting,
            self.players.len(),
            1 + effect.extra_skips,
        );
        self.table.phase = Phase::AwaitingMove;
        Ok(false)
    }

    /// The acting player pays the accumulated penalty and forfeits the
    /// turn. No play is offered; a penalty draw can never win.
    fn pay_penalty(&mut self, acting: PlayerId) -> Result<TurnOutcome, EngineError> {
        self.table.phase = Phase::ResolvingEffect;
        let owed = self.table.pending_draw;
        let cards = self.deck.draw(owed as usize, &mut self.rng)?;
        self.players.hand_mut(acting).add_all(cards);
        self.table.pending_draw = 0;

        self.advance_one(acting);
        self.turns += 1;
        Ok(TurnOutcome::PaidPenalty { player: acting, cards: owed })
    }

    /// No play: draw one card. Under draw-then-pass the card always
    /// goes to the hand; under draw-then-play a legal drawn card is
    /// played immediately instead.
    fn draw_and_pass(&mut self, acting: PlayerId) -> Result<TurnOutcome, EngineError> {
        self.table.phase = Phase::ResolvingEffect;
        let card = self.deck.draw_one(&mut self.rng)?;

        let playable = card_is_playable(
            card,
            self.table.top_card,
            self.table.active_color,
            self.table.pending_draw,
        );
        if self.options.draw_then_play && playable {
            self.players.hand_mut(acting).add(card);
            self.commit_play(acting, &[card])?;
            self.turns += 1;
            return Ok(TurnOutcome::Drew { player: acting, played_drawn: Some(card) });
        }

        self.players.hand_mut(acting).add(card);
        self.advance_one(acting);
        self.turns += 1;
        Ok(TurnOutcome::Drew { player: acting, played_drawn: None })
    }

    fn advance_one(&mut self, from: PlayerId) {
        self.table.phase = Phase::AdvancingTurn;
        self.table.current = self.table.direction.step(from, self.players.len(), 1);
        self.table.phase = Phase::AwaitingMove;
    }

    // === Player callbacks ===

    fn ask_move(&mut self, acting: PlayerId) -> CardStack {
        let hand: Vec<Card> = self.players.hand(acting).cards().to_vec();
        let other_sizes = self.players.other_hand_sizes(acting, self.table.direction);
        let view = TurnView {
            top_card: self.table.top_card,
            active_color: self.table.active_color,
            pending_draw: self.table.pending_draw,
            direction: self.table.direction,
            hand: &hand,
            other_hand_sizes: &other_sizes,
        };
        self.players.player_mut(acting).choose_move(&view)
    }

    fn ask_color(&mut self, acting: PlayerId) -> Color {
        let hand: Vec<Card> = self.players.hand(acting).cards().to_vec();
        let other_sizes = self.players.other_hand_sizes(acting, self.table.direction);
        let view = TurnView {
            top_card: self.table.top_card,
            active_color: self.table.active_color,
            pending_draw: self.table.pending_draw,
            direction: self.table.direction,
            hand: &hand,
            other_hand_sizes: &other_sizes,
        };
        self.players.player_mut(acting).choose_color(&view)
    }

    // === Observers (presentation layers read these) ===

    /// Card current plays are matched against.
    #[must_use]
    pub fn top_card(&self) -> Card {
        self.table.top_card
    }

    /// Color current plays must match.
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.table.active_color
    }

    /// Full table snapshot.
    #[must_use]
    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// Current state-machine phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.table.phase
    }

    /// The seat registry (hands readable for the human-facing view).
    #[must_use]
    pub fn players(&self) -> &PlayerList {
        &self.players
    }

    /// The two piles.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Terminal outcome, once reached.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// Turns taken so far.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Every card in the game: both piles plus all hands. Always 108.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.total_len() + self.players.total_cards()
    }
}
