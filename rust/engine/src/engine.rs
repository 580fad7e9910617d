use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{GameMode, GamePhase, GameState, TableConfig};
use crate::hand::{best_hand_index, HandResult, HAND_SIZE};
use crate::player::{Player, PlayerAction, PlayerId};
use crate::policy::{BettingDecision, ComputerPolicy};

/// Owns the rules of a game and produces every state transition.
///
/// Each intent comes in two forms: a checked `apply_*`/`try_*` method that
/// says why it was refused, and a forgiving method that returns the input
/// snapshot unchanged instead. Neither form modifies the snapshot it is given.
///
/// # Examples
///
/// ```
/// use elemental_engine::engine::GameManager;
/// use elemental_engine::game::{GameMode, GamePhase, TableConfig};
/// use elemental_engine::player::{PlayerAction, PlayerId};
/// # use elemental_engine::cards::Card;
/// # use elemental_engine::player::Player;
/// # use elemental_engine::policy::{BettingDecision, ComputerPolicy};
/// # struct Calls;
/// # impl ComputerPolicy for Calls {
/// #     fn select_discards(&self, _: &[Card]) -> Vec<usize> { Vec::new() }
/// #     fn decide_betting(&self, _: &Player, _: u32, _: u32, _: &mut dyn rand::RngCore) -> BettingDecision {
/// #         BettingDecision::Call
/// #     }
/// #     fn name(&self) -> &str { "Calls" }
/// # }
///
/// let mut manager = GameManager::with_seed(7, Box::new(Calls));
/// let state = manager
///     .initialize_game(GameMode::Multiplayer, &["Ada", "Grace"])
///     .expect("two named players");
/// let state = manager.deal_cards(&state);
/// assert_eq!(state.phase(), GamePhase::FirstBetting);
///
/// let state = manager.process_player_action(&state, &PlayerId::human(0), PlayerAction::Call);
/// let state = manager.process_player_action(&state, &PlayerId::human(1), PlayerAction::Call);
/// assert_eq!(state.phase(), GamePhase::Draw);
/// ```
pub struct GameManager {
    config: TableConfig,
    policy: Box<dyn ComputerPolicy>,
    rng: ChaCha20Rng,
}

impl std::fmt::Debug for GameManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameManager")
            .field("config", &self.config)
            .field("policy", &self.policy.name())
            .finish()
    }
}

impl GameManager {
    pub fn new(config: TableConfig, policy: Box<dyn ComputerPolicy>) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            config,
            policy,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn with_seed(seed: u64, policy: Box<dyn ComputerPolicy>) -> Self {
        Self::new(
            TableConfig {
                seed: Some(seed),
                ..TableConfig::default()
            },
            policy,
        )
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn policy(&self) -> &dyn ComputerPolicy {
        self.policy.as_ref()
    }

    /// Swaps the computer policy, e.g. to change difficulty between games.
    pub fn set_policy(&mut self, policy: Box<dyn ComputerPolicy>) {
        self.policy = policy;
    }

    /// Seats the named players (plus a computer seat in
    /// [`GameMode::VsComputer`]) with a freshly shuffled deck.
    pub fn initialize_game<S: AsRef<str>>(
        &mut self,
        mode: GameMode,
        names: &[S],
    ) -> Result<GameState, GameError> {
        let deck = Deck::shuffled(&mut self.rng);
        self.initialize_game_with_deck(mode, names, deck)
    }

    /// Same as [`GameManager::initialize_game`] but deals from `deck` in the
    /// order given, for replays and stacked-deck tests.
    pub fn initialize_game_with_deck<S: AsRef<str>>(
        &self,
        mode: GameMode,
        names: &[S],
        deck: Deck,
    ) -> Result<GameState, GameError> {
        let max = match mode {
            GameMode::Single => 1,
            GameMode::VsComputer | GameMode::Multiplayer => self.config.max_players,
        };
        if names.is_empty() || names.len() > max {
            return Err(GameError::InvalidPlayerCount {
                count: names.len(),
                max,
            });
        }

        let mut players = Vec::with_capacity(names.len() + 1);
        for (seat, name) in names.iter().enumerate() {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(GameError::EmptyPlayerName { seat });
            }
            players.push(Player::new(
                PlayerId::human(seat),
                name,
                false,
                self.config.starting_chips,
            ));
        }
        if mode == GameMode::VsComputer {
            players.push(Player::new(
                PlayerId::computer(),
                "Computer",
                true,
                self.config.starting_chips,
            ));
        }

        info!(?mode, seats = players.len(), "game initialized");
        Ok(GameState::new(mode, players, deck))
    }

    /// A fresh game with the same mode and human names; chips are reset.
    pub fn new_game(&mut self, state: &GameState) -> Result<GameState, GameError> {
        let names = state.human_names();
        self.initialize_game(state.mode(), &names)
    }

    /// Starts another deal at the same table after a showdown, keeping chip
    /// stacks. A contested table with fewer than two funded seats ends in
    /// [`GamePhase::GameOver`] instead.
    pub fn try_next_round(&mut self, state: &GameState) -> Result<GameState, GameError> {
        if state.phase != GamePhase::Showdown {
            return Err(GameError::WrongPhase {
                expected: "showdown",
                actual: state.phase,
            });
        }
        let mut next = state.clone();
        for p in next.players.iter_mut() {
            p.reset_for_new_round();
        }
        next.pot = 0;
        next.current_bet = 0;
        next.winner = None;
        next.current_player_index = 0;
        next.deck = Deck::shuffled(&mut self.rng);
        next.discards.clear();

        let funded = next.players.iter().filter(|p| p.chips() > 0).count();
        next.phase = if next.players.len() > 1 && funded < 2 {
            GamePhase::GameOver
        } else {
            GamePhase::Waiting
        };
        info!(phase = ?next.phase, funded, "next round prepared");
        Ok(next)
    }

    pub fn next_round(&mut self, state: &GameState) -> GameState {
        let result = self.try_next_round(state);
        or_unchanged(state, "next_round", result)
    }

    pub fn try_deal_cards(&self, state: &GameState) -> Result<GameState, GameError> {
        if state.phase != GamePhase::Waiting {
            return Err(GameError::WrongPhase {
                expected: "waiting",
                actual: state.phase,
            });
        }
        let needed = state.players.len() * HAND_SIZE;
        if state.deck.remaining() < needed {
            return Err(GameError::DeckExhausted {
                needed,
                remaining: state.deck.remaining(),
            });
        }

        let mut next = state.clone();
        next.phase = GamePhase::Dealing;
        for p in next.players.iter_mut() {
            p.receive_hand(next.deck.draw_n(HAND_SIZE));
        }
        next.phase = GamePhase::FirstBetting;
        next.current_player_index = 0;
        next.pot = 0;
        next.current_bet = 0;
        next.winner = None;

        debug!(
            seats = next.players.len(),
            deck_remaining = next.deck.remaining(),
            "cards dealt"
        );
        Ok(next)
    }

    /// Deals five cards to every seat; only valid while waiting.
    pub fn deal_cards(&self, state: &GameState) -> GameState {
        or_unchanged(state, "deal_cards", self.try_deal_cards(state))
    }

    /// Applies fold, call or raise for `player_id`.
    ///
    /// Betting actions must come from the seat whose turn it is. A fold is
    /// also accepted during the draw.
    pub fn apply_action(
        &self,
        state: &GameState,
        player_id: &PlayerId,
        action: PlayerAction,
    ) -> Result<GameState, GameError> {
        let seat = state
            .seat_of(player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.clone()))?;
        check_can_move(&state.players[seat])?;

        match (state.phase, action) {
            (phase, _) if phase.is_betting() => {
                if seat != state.current_player_index {
                    return Err(GameError::NotPlayersTurn {
                        expected: state.players[state.current_player_index].id().clone(),
                        actual: player_id.clone(),
                    });
                }
            }
            (GamePhase::Draw, PlayerAction::Fold) => {}
            (actual, _) => {
                return Err(GameError::WrongPhase {
                    expected: "first_betting or second_betting",
                    actual,
                });
            }
        }

        let mut next = state.clone();
        let table_bet = next.current_bet;
        let player = &mut next.players[seat];
        match action {
            PlayerAction::Fold => player.fold(),
            PlayerAction::Call => {
                let owed = player.to_call(table_bet);
                next.pot += player.commit(owed);
            }
            PlayerAction::Raise(amount) => {
                let amount = amount
                    .filter(|&a| a > 0)
                    .unwrap_or(self.config.default_raise);
                next.pot += player.commit(amount);
                next.current_bet = next.current_bet.max(player.current_bet());
            }
        }
        player.set_acted(true);

        debug!(
            player = %player_id,
            ?action,
            pot = next.pot,
            current_bet = next.current_bet,
            "action applied"
        );
        Ok(self.advance_turn(next, seat))
    }

    pub fn process_player_action(
        &self,
        state: &GameState,
        player_id: &PlayerId,
        action: PlayerAction,
    ) -> GameState {
        let result = self.apply_action(state, player_id, action);
        or_unchanged(state, "player_action", result)
    }

    /// Replaces the hand slots named in `indices`, in that order, with cards
    /// from the front of the deck, then re-evaluates the hand.
    ///
    /// An empty selection stands pat. Either way the player has finished the
    /// draw. If the deck runs short, the trailing slots keep their cards.
    pub fn apply_card_draw(
        &self,
        state: &GameState,
        player_id: &PlayerId,
        indices: &[usize],
    ) -> Result<GameState, GameError> {
        if state.phase != GamePhase::Draw {
            return Err(GameError::WrongPhase {
                expected: "draw",
                actual: state.phase,
            });
        }
        let seat = state
            .seat_of(player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.clone()))?;
        check_can_move(&state.players[seat])?;
        validate_indices(indices)?;

        let mut next = state.clone();
        let replacements = next.deck.draw_n(indices.len());
        if replacements.len() < indices.len() {
            warn!(
                player = %player_id,
                requested = indices.len(),
                available = replacements.len(),
                "deck exhausted during draw"
            );
        }
        let player = &mut next.players[seat];
        for (&index, card) in indices.iter().zip(replacements) {
            next.discards.push(player.replace_card(index, card));
        }
        player.clear_selection();
        player.refresh_hand_result();
        player.set_acted(true);

        debug!(
            player = %player_id,
            replaced = ?indices,
            rank = ?player.hand_result().map(|r| r.rank),
            "cards drawn"
        );
        Ok(self.advance_turn(next, seat))
    }

    pub fn process_card_draw(
        &self,
        state: &GameState,
        player_id: &PlayerId,
        indices: &[usize],
    ) -> GameState {
        let result = self.apply_card_draw(state, player_id, indices);
        or_unchanged(state, "card_draw", result)
    }

    /// Adds or removes one hand slot from the player's pending discards.
    pub fn try_toggle_card_selection(
        &self,
        state: &GameState,
        player_id: &PlayerId,
        index: usize,
    ) -> Result<GameState, GameError> {
        if state.phase != GamePhase::Draw {
            return Err(GameError::WrongPhase {
                expected: "draw",
                actual: state.phase,
            });
        }
        let seat = state
            .seat_of(player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.clone()))?;
        check_can_move(&state.players[seat])?;
        if index >= HAND_SIZE {
            return Err(GameError::InvalidCardIndex(index));
        }
        let mut next = state.clone();
        next.players[seat].toggle_selection(index);
        Ok(next)
    }

    pub fn toggle_card_selection(
        &self,
        state: &GameState,
        player_id: &PlayerId,
        index: usize,
    ) -> GameState {
        let result = self.try_toggle_card_selection(state, player_id, index);
        or_unchanged(state, "toggle_card_selection", result)
    }

    /// Draws using the player's own pending selection.
    pub fn draw_selected(&self, state: &GameState, player_id: &PlayerId) -> GameState {
        match state.player(player_id) {
            Some(p) => {
                let selection = p.selected_cards().to_vec();
                self.process_card_draw(state, player_id, &selection)
            }
            None => or_unchanged(
                state,
                "draw_selected",
                Err(GameError::UnknownPlayer(player_id.clone())),
            ),
        }
    }

    /// Lets the policy move for the computer seat whose turn it is: a
    /// betting decision in a betting phase, a discard choice in the draw.
    pub fn try_computer_turn(&mut self, state: &GameState) -> Result<GameState, GameError> {
        let Some(player) = state.current_player() else {
            return Err(GameError::InvalidPlayerCount {
                count: 0,
                max: self.config.max_players,
            });
        };
        if !player.is_computer() {
            return Err(GameError::NotComputerSeat(player.id().clone()));
        }
        let id = player.id().clone();

        match state.phase {
            phase if phase.is_betting() => {
                let decision = self.policy.decide_betting(
                    player,
                    state.current_bet,
                    state.pot,
                    &mut self.rng,
                );
                let action = match decision {
                    BettingDecision::Fold => PlayerAction::Fold,
                    BettingDecision::Call => PlayerAction::Call,
                    BettingDecision::Raise => PlayerAction::Raise(Some(self.config.default_raise)),
                };
                debug!(player = %id, ?decision, "computer betting decision");
                self.apply_action(state, &id, action)
            }
            GamePhase::Draw => {
                let discards = self.policy.select_discards(player.hand());
                debug!(player = %id, ?discards, "computer discard decision");
                self.apply_card_draw(state, &id, &discards)
            }
            actual => Err(GameError::WrongPhase {
                expected: "a betting or draw phase",
                actual,
            }),
        }
    }

    pub fn process_computer_turn(&mut self, state: &GameState) -> GameState {
        let result = self.try_computer_turn(state);
        or_unchanged(state, "computer_turn", result)
    }

    /// Runs computer turns until a human seat is to move or the game leaves
    /// the betting and draw phases.
    pub fn play_computer_turns(&mut self, state: &GameState) -> GameState {
        let mut current = state.clone();
        // every computer move marks a seat acted or ends a phase
        let limit = current.players.len() * 4 + 1;
        for _ in 0..limit {
            match self.try_computer_turn(&current) {
                Ok(next) => current = next,
                Err(_) => break,
            }
        }
        current
    }

    /// True when `player_id` may bet right now.
    pub fn can_player_act(&self, state: &GameState, player_id: &PlayerId) -> bool {
        let Some(player) = state.player(player_id) else {
            return false;
        };
        !player.has_folded()
            && !player.has_acted()
            && state.current_player().is_some_and(|c| c.id() == player_id)
            && state.phase.is_betting()
    }

    fn advance_turn(&self, mut state: GameState, actor: usize) -> GameState {
        let active = state.active_players().count();
        let contested = state.players.len() > 1;
        if active == 0 || (contested && active == 1) {
            return resolve_showdown(state);
        }
        if state.active_players().all(|p| p.has_acted()) {
            return advance_phase(state);
        }
        if actor == state.current_player_index {
            let n = state.players.len();
            for step in 1..=n {
                let idx = (state.current_player_index + step) % n;
                let p = &state.players[idx];
                if !p.has_folded() && !p.has_acted() {
                    state.current_player_index = idx;
                    break;
                }
            }
        }
        state
    }
}

fn advance_phase(mut state: GameState) -> GameState {
    let from = state.phase;
    state.phase = match from {
        GamePhase::FirstBetting => GamePhase::Draw,
        GamePhase::Draw => GamePhase::SecondBetting,
        GamePhase::SecondBetting => return resolve_showdown(state),
        other => other,
    };
    start_round(&mut state);
    debug!(?from, to = ?state.phase, "phase advanced");
    state
}

fn resolve_showdown(mut state: GameState) -> GameState {
    state.phase = GamePhase::Showdown;
    if let Some(seat) = determine_winner(&mut state.players) {
        let pot = state.pot;
        let winner = &mut state.players[seat];
        winner.add_chips(pot);
        info!(
            winner = %winner.id(),
            score = winner.hand_result().map(|r| r.score),
            pot,
            "showdown resolved"
        );
        state.winner = Some(winner.id().clone());
    } else {
        info!("showdown resolved with no active players");
    }
    start_round(&mut state);
    state
}

fn start_round(state: &mut GameState) {
    for p in state.players.iter_mut() {
        p.set_acted(false);
    }
    state.current_player_index = state.first_active_seat();
}

/// Seat index of the winner among players who have not folded.
///
/// A lone survivor wins without a comparison. Otherwise missing hand results
/// are filled in and the highest score wins; on equal scores the earlier seat
/// wins.
pub fn determine_winner(players: &mut [Player]) -> Option<usize> {
    let active: Vec<usize> = (0..players.len())
        .filter(|&i| !players[i].has_folded())
        .collect();
    match active.as_slice() {
        [] => None,
        [only] => Some(*only),
        _ => {
            let results: Vec<HandResult> = active
                .iter()
                .map(|&i| players[i].ensure_hand_result())
                .collect();
            best_hand_index(&results).map(|best| active[best])
        }
    }
}

fn check_can_move(player: &Player) -> Result<(), GameError> {
    if player.has_folded() {
        return Err(GameError::PlayerFolded(player.id().clone()));
    }
    if player.has_acted() {
        return Err(GameError::AlreadyActed(player.id().clone()));
    }
    Ok(())
}

fn validate_indices(indices: &[usize]) -> Result<(), GameError> {
    for (pos, &index) in indices.iter().enumerate() {
        if index >= HAND_SIZE {
            return Err(GameError::InvalidCardIndex(index));
        }
        if indices[..pos].contains(&index) {
            return Err(GameError::DuplicateCardIndex(index));
        }
    }
    Ok(())
}

fn or_unchanged(
    state: &GameState,
    intent: &'static str,
    result: Result<GameState, GameError>,
) -> GameState {
    result.unwrap_or_else(|error| {
        debug!(intent, %error, "intent rejected");
        state.clone()
    })
}
