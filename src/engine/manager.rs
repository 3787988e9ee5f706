use std::collections::HashMap;

use tracing::warn;

use crate::domain::{Chips, Game, GameConfig, GameId, Player, PlayerId};
use crate::engine::game_loop::{self, ActionOutcome};
use crate::engine::lobby;
use crate::engine::{EngineError, RandomSource};
use crate::infra::IdGenerator;

/// Менеджер игр:
/// - хранит игроков, ещё не севших за стол;
/// - хранит игры по GameId и знает, кто где сидит;
/// - каждое действие – вызов движка над `Game` и замена сохранённого значения.
///
/// Вызовы против одной игры должны идти последовательно; `&mut self`
/// это и гарантирует.
#[derive(Debug)]
pub struct GameManager {
    config: GameConfig,
    ids: IdGenerator,
    lobby: HashMap<PlayerId, Player>,
    games: HashMap<GameId, Game>,
    seats: HashMap<PlayerId, GameId>,
}

impl GameManager {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            ids: IdGenerator::new(),
            lobby: HashMap::new(),
            games: HashMap::new(),
            seats: HashMap::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Игра по id (read-only).
    pub fn game(&self, game_id: GameId) -> Option<&Game> {
        self.games.get(&game_id)
    }

    /// Игра, за которой сидит игрок.
    pub fn game_of(&self, player_id: PlayerId) -> Option<&Game> {
        self.seats
            .get(&player_id)
            .and_then(|game_id| self.games.get(game_id))
    }

    /// Игрок в лобби или за столом.
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.lobby
            .get(&player_id)
            .or_else(|| self.game_of(player_id).and_then(|g| g.player(player_id)))
    }

    pub fn create_player(&mut self, name: impl Into<String>) -> Player {
        let player = lobby::create_player(self.ids.next_player_id(), name, &self.config);
        self.lobby.insert(player.id, player.clone());
        player
    }

    /// Создатель уходит из лобби за новый стол.
    pub fn create_game(&mut self, creator_id: PlayerId) -> Result<Game, EngineError> {
        let creator = self.take_from_lobby(creator_id)?;
        let game = lobby::create_game(self.ids.next_game_id(), creator, self.config.clone());

        self.seats.insert(creator_id, game.id);
        self.games.insert(game.id, game.clone());
        Ok(game)
    }

    pub fn join_game(&mut self, player_id: PlayerId, game_id: GameId) -> Result<Game, EngineError> {
        let game = self
            .games
            .get(&game_id)
            .ok_or(EngineError::GameNotFound(game_id))?;
        if self.seats.contains_key(&player_id) {
            return Err(EngineError::PlayerAlreadySeated(player_id));
        }
        let player = self
            .lobby
            .get(&player_id)
            .cloned()
            .ok_or(EngineError::PlayerNotFound(player_id))?;

        let next = lobby::join_game(game, player)?;

        self.lobby.remove(&player_id);
        self.seats.insert(player_id, game_id);
        self.games.insert(game_id, next.clone());
        Ok(next)
    }

    pub fn start_game<R: RandomSource>(
        &mut self,
        game_id: GameId,
        rng: &mut R,
    ) -> Result<ActionOutcome, EngineError> {
        let game = self
            .games
            .get(&game_id)
            .ok_or(EngineError::GameNotFound(game_id))?;
        let outcome = lobby::start_game(game, rng)?;
        self.store(outcome.game.clone());
        Ok(outcome)
    }

    pub fn bet<R: RandomSource>(
        &mut self,
        player_id: PlayerId,
        amount: Chips,
        rng: &mut R,
    ) -> Result<ActionOutcome, EngineError> {
        self.act(player_id, |game, rng| game_loop::bet(game, player_id, amount, rng), rng)
    }

    pub fn call<R: RandomSource>(
        &mut self,
        player_id: PlayerId,
        rng: &mut R,
    ) -> Result<ActionOutcome, EngineError> {
        self.act(player_id, |game, rng| game_loop::call(game, player_id, rng), rng)
    }

    pub fn raise<R: RandomSource>(
        &mut self,
        player_id: PlayerId,
        raise_by: Chips,
        rng: &mut R,
    ) -> Result<ActionOutcome, EngineError> {
        self.act(player_id, |game, rng| game_loop::raise(game, player_id, raise_by, rng), rng)
    }

    pub fn fold<R: RandomSource>(
        &mut self,
        player_id: PlayerId,
        rng: &mut R,
    ) -> Result<ActionOutcome, EngineError> {
        self.act(player_id, |game, rng| game_loop::fold(game, player_id, rng), rng)
    }

    fn act<R, F>(&mut self, player_id: PlayerId, op: F, rng: &mut R) -> Result<ActionOutcome, EngineError>
    where
        R: RandomSource,
        F: FnOnce(&Game, &mut R) -> Result<ActionOutcome, EngineError>,
    {
        let game_id = *self
            .seats
            .get(&player_id)
            .ok_or(EngineError::PlayerNotFound(player_id))?;
        let game = self
            .games
            .get(&game_id)
            .ok_or(EngineError::GameNotFound(game_id))?;

        let outcome = op(game, rng).map_err(|err| {
            warn!(game_id, player_id, error = %err, "action rejected");
            err
        })?;
        self.store(outcome.game.clone());
        Ok(outcome)
    }

    /// Сохранить новое состояние; вылетевшие больше ни за каким столом не сидят.
    fn store(&mut self, game: Game) {
        let game_id = game.id;
        self.seats
            .retain(|player_id, seat_game| *seat_game != game_id || game.player(*player_id).is_some());
        self.games.insert(game_id, game);
    }

    fn take_from_lobby(&mut self, player_id: PlayerId) -> Result<Player, EngineError> {
        if self.seats.contains_key(&player_id) {
            return Err(EngineError::PlayerAlreadySeated(player_id));
        }
        self.lobby
            .remove(&player_id)
            .ok_or(EngineError::PlayerNotFound(player_id))
    }
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
