//! Property tests for the rule engine and referee invariants.

use proptest::prelude::*;
use proptest::sample::select;

use rps_plus::core::{MatchState, Move};
use rps_plus::referee::{Referee, ScriptedOpponent};
use rps_plus::rules::{resolve_round, update_game_state, validate_move, RoundWinner};

fn any_move() -> impl Strategy<Value = Move> {
    select(Move::ALL.to_vec())
}

fn classic_move() -> impl Strategy<Value = Move> {
    select(Move::CLASSIC.to_vec())
}

fn any_winner() -> impl Strategy<Value = Option<RoundWinner>> {
    prop_oneof![
        Just(None),
        Just(Some(RoundWinner::User)),
        Just(Some(RoundWinner::Bot)),
        Just(Some(RoundWinner::Draw)),
    ]
}

/// Raw inputs: mostly real moves in odd casing and padding, some junk.
fn raw_input() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (select(vec!["rock", "paper", "scissors", "bomb"]), "[ \t]{0,2}", "[ \t]{0,2}", any::<bool>())
            .prop_map(|(mv, pre, post, upper)| {
                let mv = if upper { mv.to_uppercase() } else { mv.to_string() };
                format!("{pre}{mv}{post}")
            }),
        1 => "[a-zA-Z ]{0,10}",
    ]
}

proptest! {
    #[test]
    fn prop_resolve_is_antisymmetric(a in any_move(), b in any_move()) {
        prop_assert_eq!(resolve_round(a, b), resolve_round(b, a).swapped());
    }

    #[test]
    fn prop_bomb_beats_classic(mv in classic_move()) {
        prop_assert_eq!(resolve_round(Move::Bomb, mv), RoundWinner::User);
        prop_assert_eq!(resolve_round(mv, Move::Bomb), RoundWinner::Bot);
    }

    #[test]
    fn prop_classic_unequal_never_draws(a in classic_move(), b in classic_move()) {
        prop_assume!(a != b);
        prop_assert_ne!(resolve_round(a, b), RoundWinner::Draw);
    }

    #[test]
    fn prop_unknown_tokens_rejected(token in "[a-z]{0,12}", bomb_used in any::<bool>()) {
        prop_assume!(Move::from_token(&token).is_none());
        prop_assert!(!validate_move(&token, bomb_used));
    }

    #[test]
    fn prop_bomb_valid_iff_unused(bomb_used in any::<bool>()) {
        prop_assert_eq!(validate_move("bomb", bomb_used), !bomb_used);
    }

    #[test]
    fn prop_match_over_after_exactly_three(winners in prop::collection::vec(any_winner(), 0..6)) {
        let mut state = MatchState::new();
        for (i, winner) in winners.iter().enumerate() {
            prop_assert!(!state.match_over || i >= 3);
            update_game_state(&mut state, *winner);
            prop_assert_eq!(state.match_over, i + 1 >= 3);
            prop_assert!(state.user_score + state.bot_score <= state.round_number);
        }
    }

    #[test]
    fn prop_referee_invariants(
        inputs in prop::collection::vec(raw_input(), 0..8),
        bot in prop::collection::vec(any_move(), 1..4),
    ) {
        let mut referee = Referee::new(ScriptedOpponent::new(bot));
        let mut previous = referee.state().clone();

        for input in &inputs {
            let was_over = referee.is_over();
            let report = referee.play_round(input);
            let state = referee.state();

            if was_over {
                prop_assert!(report.is_none());
                prop_assert_eq!(state, &previous);
            } else {
                prop_assert_eq!(state.round_number, previous.round_number + 1);
            }
            prop_assert!(state.round_number <= 3);
            prop_assert!(state.user_score + state.bot_score <= state.round_number);
            prop_assert!(!previous.user_bomb_used || state.user_bomb_used);
            prop_assert!(!previous.bot_bomb_used || state.bot_bomb_used);

            previous = state.clone();
        }

        prop_assert_eq!(referee.conclude().is_some(), inputs.len() >= 3);
    }
}
