mod helpers;

use elemental_engine::deck::DECK_SIZE;
use elemental_engine::engine::GameManager;
use elemental_engine::errors::GameError;
use elemental_engine::game::{GameMode, GamePhase, TableConfig};
use elemental_engine::player::{PlayerId, STARTING_CHIPS};

use helpers::Scripted;

fn manager(seed: u64) -> GameManager {
    GameManager::with_seed(seed, Scripted::calls())
}

#[test]
fn vs_computer_appends_a_computer_seat() {
    let mut m = manager(1);
    let state = m
        .initialize_game(GameMode::VsComputer, &["Ada"])
        .expect("init");

    assert_eq!(state.mode(), GameMode::VsComputer);
    assert_eq!(state.phase(), GamePhase::Waiting);
    assert_eq!(state.players().len(), 2);
    assert_eq!(state.players()[0].id(), &PlayerId::human(0));
    assert_eq!(state.players()[0].name(), "Ada");
    assert!(!state.players()[0].is_computer());
    assert_eq!(state.players()[1].id(), &PlayerId::computer());
    assert_eq!(state.players()[1].name(), "Computer");
    assert!(state.players()[1].is_computer());
    assert_eq!(state.pot(), 0);
    assert_eq!(state.current_bet(), 0);
    assert_eq!(state.deck().remaining(), DECK_SIZE);
    assert!(state.winner_id().is_none());
    for p in state.players() {
        assert_eq!(p.chips(), STARTING_CHIPS);
        assert!(p.hand().is_empty());
        assert!(p.hand_result().is_none());
    }
}

#[test]
fn multiplayer_seats_every_name_in_order() {
    let mut m = manager(2);
    let state = m
        .initialize_game(GameMode::Multiplayer, &["Ada", " Grace ", "Linus"])
        .expect("init");
    let names: Vec<&str> = state.players().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Ada", "Grace", "Linus"]);
    assert!(state.players().iter().all(|p| !p.is_computer()));
    assert_eq!(state.human_names(), vec!["Ada", "Grace", "Linus"]);
}

#[test]
fn player_count_is_validated() {
    let mut m = manager(3);
    let none: [&str; 0] = [];
    assert_eq!(
        m.initialize_game(GameMode::Multiplayer, &none),
        Err(GameError::InvalidPlayerCount { count: 0, max: 4 })
    );
    assert_eq!(
        m.initialize_game(GameMode::Multiplayer, &["a", "b", "c", "d", "e"]),
        Err(GameError::InvalidPlayerCount { count: 5, max: 4 })
    );
    assert_eq!(
        m.initialize_game(GameMode::Single, &["a", "b"]),
        Err(GameError::InvalidPlayerCount { count: 2, max: 1 })
    );
}

#[test]
fn blank_names_are_rejected() {
    let mut m = manager(4);
    assert_eq!(
        m.initialize_game(GameMode::Multiplayer, &["Ada", "   "]),
        Err(GameError::EmptyPlayerName { seat: 1 })
    );
}

#[test]
fn table_config_sets_starting_chips() {
    let config = TableConfig {
        starting_chips: 250,
        seed: Some(9),
        ..TableConfig::default()
    };
    let mut m = GameManager::new(config, Scripted::calls());
    let state = m
        .initialize_game(GameMode::VsComputer, &["Ada"])
        .expect("init");
    assert!(state.players().iter().all(|p| p.chips() == 250));
}

#[test]
fn same_seed_shuffles_the_same_deck() {
    let a = manager(77)
        .initialize_game(GameMode::Multiplayer, &["a", "b"])
        .expect("init");
    let b = manager(77)
        .initialize_game(GameMode::Multiplayer, &["a", "b"])
        .expect("init");
    let c = manager(78)
        .initialize_game(GameMode::Multiplayer, &["a", "b"])
        .expect("init");
    assert_eq!(a.deck(), b.deck());
    assert_ne!(a.deck(), c.deck());
}

#[test]
fn dealing_gives_five_cards_and_a_result_to_every_seat() {
    let mut m = manager(5);
    let state = m
        .initialize_game(GameMode::VsComputer, &["Ada"])
        .expect("init");
    let dealt = m.deal_cards(&state);

    assert_eq!(dealt.phase(), GamePhase::FirstBetting);
    assert_eq!(dealt.current_player_index(), 0);
    assert_eq!(dealt.deck().remaining(), DECK_SIZE - 10);
    for p in dealt.players() {
        assert_eq!(p.hand().len(), 5);
        assert!(p.hand_result().is_some());
        assert!(!p.has_acted());
        assert!(!p.has_folded());
    }
    // the input snapshot is untouched
    assert_eq!(state.phase(), GamePhase::Waiting);
    assert!(state.players()[0].hand().is_empty());
}

#[test]
fn dealing_twice_is_ignored() {
    let mut m = manager(6);
    let state = m
        .initialize_game(GameMode::Multiplayer, &["a", "b"])
        .expect("init");
    let dealt = m.deal_cards(&state);
    assert_eq!(m.deal_cards(&dealt), dealt);
    assert!(matches!(
        m.try_deal_cards(&dealt),
        Err(GameError::WrongPhase {
            actual: GamePhase::FirstBetting,
            ..
        })
    ));
}
