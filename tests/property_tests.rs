//! Property-based checks: legal-move soundness over generated table
//! states, and card conservation across whole self-play games.

use proptest::prelude::*;

use uno_engine::{
    validate_move, Card, Color, EngineError, Game, Hand, Phase, Player, PlayerList, RandomPlayer,
    Rank, TableState,
};

fn arb_color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Red),
        Just(Color::Yellow),
        Just(Color::Green),
        Just(Color::Blue),
    ]
}

fn arb_colored_rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        (0u8..=9).prop_map(Rank::Number),
        Just(Rank::Skip),
        Just(Rank::Reverse),
        Just(Rank::DrawTwo),
    ]
}

fn arb_card() -> impl Strategy<Value = Card> {
    prop_oneof![
        8 => (arb_color(), arb_colored_rank()).prop_map(|(c, r)| Card::colored(c, r)),
        1 => Just(Card::wild()),
        1 => Just(Card::wild_draw_four()),
    ]
}

/// The four legality rules, restated independently of the validator:
/// multiset containment, uniform rank, first-card table match, and the
/// draw-action requirement while a penalty is pending.
fn rules_oracle(
    hand: &[Card],
    proposed: &[Card],
    top: Card,
    active: Color,
    pending: u32,
) -> Result<(), EngineError> {
    if proposed.is_empty() {
        return Ok(());
    }

    for (i, &card) in proposed.iter().enumerate() {
        let needed = proposed[..=i].iter().filter(|c| **c == card).count();
        let held = hand.iter().filter(|c| **c == card).count();
        if held < needed {
            return Err(EngineError::NotInHand(card));
        }
    }

    let first = proposed[0];
    if !proposed.iter().all(|c| c.rank == first.rank) {
        return Err(EngineError::InvalidStack);
    }

    let table_match =
        first.rank.is_wild() || first.color == Some(active) || first.rank == top.rank;
    let penalty_ok = pending == 0 || first.rank.is_draw_action();
    if table_match && penalty_ok {
        Ok(())
    } else {
        Err(EngineError::IllegalMove)
    }
}

proptest! {
    /// The validator agrees with the restated rules for arbitrary
    /// hands, proposals, and table states.
    #[test]
    fn prop_validator_matches_rules(
        hand_cards in prop::collection::vec(arb_card(), 0..12),
        proposed in prop::collection::vec(arb_card(), 0..4),
        top in arb_card(),
        active in arb_color(),
        pending in prop_oneof![Just(0u32), (1u32..=4).prop_map(|n| n * 2)],
    ) {
        let hand = Hand::with_cards(hand_cards.clone());
        let mut table = TableState::opening(top, active);
        table.pending_draw = pending;

        prop_assert_eq!(
            validate_move(&hand, &proposed, &table),
            rules_oracle(&hand_cards, &proposed, top, active, pending)
        );
    }

    /// A uniform-rank stack actually held is judged entirely by its
    /// first card; acceptance never depends on the rest of the stack.
    #[test]
    fn prop_held_stack_judged_by_first_card(
        rank in arb_colored_rank(),
        colors in prop::collection::vec(arb_color(), 1..4),
        noise in prop::collection::vec(arb_card(), 0..6),
        top in arb_card(),
        active in arb_color(),
        pending in prop_oneof![Just(0u32), Just(2u32)],
    ) {
        let stack: Vec<Card> = colors.iter().map(|&c| Card::colored(c, rank)).collect();
        let mut hand_cards = stack.clone();
        hand_cards.extend(noise);
        let hand = Hand::with_cards(hand_cards);

        let mut table = TableState::opening(top, active);
        table.pending_draw = pending;

        let first = stack[0];
        let first_alone = validate_move(&hand, &stack[..1], &table);
        let whole_stack = validate_move(&hand, &stack, &table);
        prop_assert_eq!(first_alone, whole_stack);

        let table_match =
            first.color == Some(active) || first.rank == top.rank;
        let penalty_ok = pending == 0 || first.rank.is_draw_action();
        prop_assert_eq!(whole_stack.is_ok(), table_match && penalty_ok);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Self-play games conserve all 108 cards after every turn, only
    /// hold a pending penalty while the top card is a draw action, and
    /// end only by a play emptying a hand.
    #[test]
    fn prop_self_play_invariants(seed in any::<u64>(), player_count in 2usize..=4) {
        let players = PlayerList::new(
            (0..player_count)
                .map(|i| {
                    Box::new(RandomPlayer::new(format!("p{i}"), seed ^ (i as u64 + 1)))
                        as Box<dyn Player>
                })
                .collect(),
        );
        let mut game = Game::new(players, seed).unwrap();
        prop_assert_eq!(game.total_cards(), 108);

        for _ in 0..20_000 {
            if game.phase() == Phase::GameOver {
                break;
            }
            game.play_turn().unwrap();
            prop_assert_eq!(game.total_cards(), 108);
            if game.table().pending_draw > 0 {
                prop_assert!(game.top_card().rank.is_draw_action());
            }
        }

        prop_assert_eq!(game.phase(), Phase::GameOver);
        let outcome = game.outcome().unwrap();
        prop_assert_eq!(
            game.players().hand(outcome.winner).len(),
            0
        );
    }
}
