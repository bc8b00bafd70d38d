//! Property tests for engine invariants under arbitrary play.

use proptest::prelude::*;

use pattern_game::{
    ColorToken, FeedbackKind, GameRng, ManualClock, Palette, Pattern, PatternGameBuilder,
    PatternGameEngine,
};

#[derive(Clone, Debug)]
enum Move {
    Select(u8),
    Place(usize),
    Reset,
    Wait(u64),
}

fn arb_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        4 => (0u8..8).prop_map(Move::Select),
        6 => (0usize..8).prop_map(Move::Place),
        1 => Just(Move::Reset),
        1 => (0u64..5_000).prop_map(Move::Wait),
    ]
}

fn engine(seed: u64, clock: &ManualClock) -> PatternGameEngine {
    PatternGameBuilder::new()
        .seed(seed)
        .clock(clock.clone())
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn prop_pattern_is_permutation(seed in any::<u64>()) {
        let palette = Palette::standard();
        let mut rng = GameRng::new(seed);
        let pattern = Pattern::generate(&palette, &mut rng);

        prop_assert_eq!(pattern.len(), palette.len());
        let mut sorted = pattern.as_slice().to_vec();
        sorted.sort();
        prop_assert_eq!(sorted, palette.tokens().collect::<Vec<_>>());
    }

    #[test]
    fn prop_invariants_hold_under_play(
        seed in any::<u64>(),
        moves in prop::collection::vec(arb_move(), 0..120),
    ) {
        let clock = ManualClock::new();
        let mut engine = engine(seed, &clock);
        let mut completions_this_round = 0;

        for m in moves {
            match m {
                Move::Select(c) => {
                    let accepted = engine.select_color(ColorToken::new(c));
                    prop_assert_eq!(accepted, c < 6);
                }
                Move::Wait(ms) => clock.advance_ms(ms),
                Move::Reset => {
                    engine.reset();
                    completions_this_round = 0;
                    prop_assert_eq!(engine.board().filled_count(), 0);
                    prop_assert_eq!(engine.current_stats().attempts(), 0);
                    prop_assert!(engine.pattern().is_permutation_of(engine.palette()));
                }
                Move::Place(slot) => {
                    let before = engine.current_stats();
                    let board_before = engine.board().clone();
                    let outcome = engine.attempt_placement(slot);
                    let after = engine.current_stats();

                    if outcome.is_placed() {
                        prop_assert_eq!(after.correct_count, before.correct_count + 1);
                        prop_assert_eq!(after.streak_count, before.streak_count + 1);
                        prop_assert_eq!(engine.board().placed(slot), engine.pattern().get(slot));
                        prop_assert_eq!(outcome.events[0].kind, FeedbackKind::Success);
                    } else if outcome.is_rejected() {
                        prop_assert_eq!(after.fail_count, before.fail_count + 1);
                        prop_assert_eq!(after.streak_count, 0);
                        prop_assert_eq!(engine.board(), &board_before);
                        prop_assert_eq!(outcome.events.len(), 1);
                        prop_assert_eq!(outcome.events[0].kind, FeedbackKind::Failure);
                    } else {
                        prop_assert_eq!(after, before);
                        prop_assert_eq!(engine.board(), &board_before);
                        prop_assert!(outcome.events.is_empty());
                    }

                    if outcome.completed_round() {
                        completions_this_round += 1;
                    }
                }
            }

            // Every filled slot holds its pattern colour
            for (i, slot) in engine.board().as_slice().iter().enumerate() {
                if let Some(token) = slot {
                    prop_assert_eq!(Some(*token), engine.pattern().get(i));
                }
            }

            let stats = engine.current_stats();
            prop_assert_eq!(stats.correct_count as usize, engine.board().filled_count());
            prop_assert!(stats.streak_count <= stats.correct_count);
            prop_assert_eq!(engine.is_complete(), !engine.is_round_active());
            prop_assert!(completions_this_round <= 1);
            prop_assert_eq!(completions_this_round == 1, engine.is_complete());
        }
    }
}
