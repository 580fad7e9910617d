mod helpers;

use elemental_engine::deck::DECK_SIZE;
use elemental_engine::engine::GameManager;
use elemental_engine::game::{GameMode, GamePhase};
use elemental_engine::policy::BettingDecision;
use elemental_engine::hand::HandRank;
use elemental_engine::player::{PlayerAction, PlayerId, STARTING_CHIPS};

use helpers::{assert_cards_accounted, heads_up, Scripted};

#[test]
fn full_hand_reaches_showdown_and_pays_the_best_hand() {
    // four hydrogens against a five-card run
    let (m, state) = heads_up([[1, 1, 1, 1, 2], [10, 11, 12, 13, 14]], &[]);
    let (ada, grace) = (PlayerId::human(0), PlayerId::human(1));

    assert_eq!(
        state.players()[0].hand_result().map(|r| r.rank),
        Some(HandRank::FourOfAKind)
    );
    assert_eq!(
        state.players()[1].hand_result().map(|r| r.rank),
        Some(HandRank::Straight)
    );

    let state = m.process_player_action(&state, &ada, PlayerAction::Call);
    assert_eq!(state.current_player_index(), 1);
    let state = m.process_player_action(&state, &grace, PlayerAction::Call);
    assert_eq!(state.phase(), GamePhase::Draw);
    assert_eq!(state.current_player_index(), 0);
    assert!(state.players().iter().all(|p| !p.has_acted()));

    let state = m.process_card_draw(&state, &ada, &[]);
    let state = m.process_card_draw(&state, &grace, &[]);
    assert_eq!(state.phase(), GamePhase::SecondBetting);

    let state = m.process_player_action(&state, &ada, PlayerAction::Raise(None));
    assert_eq!(state.pot(), 50);
    assert_eq!(state.current_bet(), 50);
    let state = m.process_player_action(&state, &grace, PlayerAction::Call);

    assert_eq!(state.phase(), GamePhase::Showdown);
    assert_eq!(state.winner_id(), Some(&ada));
    assert_eq!(state.winner().map(|p| p.name()), Some("Ada"));
    assert_eq!(state.pot(), 100);
    assert_eq!(state.players()[0].chips(), STARTING_CHIPS + 50);
    assert_eq!(state.players()[1].chips(), STARTING_CHIPS - 50);
}

#[test]
fn phases_only_move_forward() {
    let (m, state) = heads_up([[1, 1, 1, 1, 2], [10, 11, 12, 13, 14]], &[]);
    let (ada, grace) = (PlayerId::human(0), PlayerId::human(1));
    let mut seen = vec![state.phase()];
    let mut s = state;
    for step in 0..6 {
        let who = if step % 2 == 0 { &ada } else { &grace };
        s = match s.phase() {
            GamePhase::Draw => m.process_card_draw(&s, who, &[]),
            _ => m.process_player_action(&s, who, PlayerAction::Call),
        };
        seen.push(s.phase());
    }
    assert!(seen.windows(2).all(|w| w[0] <= w[1]), "{:?}", seen);
    assert_eq!(s.phase(), GamePhase::Showdown);
}

#[test]
fn can_player_act_tracks_the_turn() {
    let (m, state) = heads_up([[1, 1, 1, 1, 2], [10, 11, 12, 13, 14]], &[]);
    let (ada, grace) = (PlayerId::human(0), PlayerId::human(1));
    assert!(m.can_player_act(&state, &ada));
    assert!(!m.can_player_act(&state, &grace));
    assert!(!m.can_player_act(&state, &PlayerId::from("nobody")));

    let state = m.process_player_action(&state, &ada, PlayerAction::Call);
    assert!(!m.can_player_act(&state, &ada));
    assert!(m.can_player_act(&state, &grace));

    let state = m.process_player_action(&state, &grace, PlayerAction::Call);
    assert_eq!(state.phase(), GamePhase::Draw);
    assert!(!m.can_player_act(&state, &ada));
}

#[test]
fn next_round_keeps_chips_and_deals_from_a_fresh_deck() {
    let (mut m, state) = heads_up([[1, 1, 1, 1, 2], [10, 11, 12, 13, 14]], &[]);
    let (ada, grace) = (PlayerId::human(0), PlayerId::human(1));
    let state = m.process_player_action(&state, &ada, PlayerAction::Raise(Some(200)));
    let state = m.process_player_action(&state, &grace, PlayerAction::Fold);
    assert_eq!(state.phase(), GamePhase::Showdown);

    let next = m.next_round(&state);
    assert_eq!(next.phase(), GamePhase::Waiting);
    assert_eq!(next.pot(), 0);
    assert_eq!(next.current_bet(), 0);
    assert!(next.winner_id().is_none());
    assert_eq!(next.deck().remaining(), DECK_SIZE);
    assert_eq!(next.players()[0].chips(), STARTING_CHIPS);
    assert_eq!(next.players()[1].chips(), STARTING_CHIPS);
    for p in next.players() {
        assert!(p.hand().is_empty());
        assert!(!p.has_folded());
        assert_eq!(p.current_bet(), 0);
    }

    let dealt = m.deal_cards(&next);
    assert_eq!(dealt.phase(), GamePhase::FirstBetting);
}

#[test]
fn next_round_before_showdown_is_ignored() {
    let (mut m, state) = heads_up([[1, 1, 1, 1, 2], [10, 11, 12, 13, 14]], &[]);
    assert_eq!(m.next_round(&state), state);
    assert!(m.try_next_round(&state).is_err());
}

#[test]
fn new_game_resets_chips_and_keeps_names() {
    let (mut m, state) = heads_up([[1, 1, 1, 1, 2], [10, 11, 12, 13, 14]], &[]);
    let (ada, grace) = (PlayerId::human(0), PlayerId::human(1));
    let state = m.process_player_action(&state, &ada, PlayerAction::Raise(Some(300)));
    let state = m.process_player_action(&state, &grace, PlayerAction::Fold);
    assert_eq!(state.players()[0].chips(), STARTING_CHIPS);

    let fresh = m.new_game(&state).expect("new game");
    assert_eq!(fresh.phase(), GamePhase::Waiting);
    assert_eq!(fresh.human_names(), vec!["Ada", "Grace"]);
    assert!(fresh.players().iter().all(|p| p.chips() == STARTING_CHIPS));
}

#[test]
fn every_card_is_accounted_for_through_a_full_game() {
    let mut m = GameManager::with_seed(
        17,
        Scripted::boxed(BettingDecision::Call, vec![0, 1, 2]),
    );
    let ada = PlayerId::human(0);

    let state = m.initialize_game(GameMode::VsComputer, &["Ada"]).unwrap();
    assert_cards_accounted(&state);
    let state = m.try_deal_cards(&state).unwrap();
    assert_cards_accounted(&state);

    let state = m.apply_action(&state, &ada, PlayerAction::Call).unwrap();
    assert_cards_accounted(&state);
    let state = m.try_computer_turn(&state).unwrap();
    assert_eq!(state.phase(), GamePhase::Draw);
    assert_cards_accounted(&state);

    let state = m.apply_card_draw(&state, &ada, &[4, 3]).unwrap();
    assert_cards_accounted(&state);
    let state = m.try_computer_turn(&state).unwrap();
    assert_eq!(state.phase(), GamePhase::SecondBetting);
    assert_eq!(state.discards().len(), 5);
    assert_eq!(state.deck().remaining(), DECK_SIZE - 15);
    assert_cards_accounted(&state);

    let state = m.apply_action(&state, &ada, PlayerAction::Call).unwrap();
    let state = m.try_computer_turn(&state).unwrap();
    assert_eq!(state.phase(), GamePhase::Showdown);
    assert_cards_accounted(&state);

    let state = m.try_next_round(&state).unwrap();
    assert!(state.discards().is_empty());
    assert_eq!(state.deck().remaining(), DECK_SIZE);
    assert_cards_accounted(&state);
}
