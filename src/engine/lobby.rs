//! Сборка стола до первой раздачи: игроки, создание игры, посадка, старт.

use tracing::info;

use crate::domain::{Game, GameConfig, GameId, Player, PlayerId};
use crate::engine::errors::EngineError;
use crate::engine::game_loop::{begin_hand, ActionOutcome};
use crate::engine::positions::initialise_roles;
use crate::engine::RandomSource;

/// Новый игрок со стартовым стеком из конфига.
pub fn create_player(id: PlayerId, name: impl Into<String>, config: &GameConfig) -> Player {
    Player::new(id, name, config.starting_money)
}

/// Новая игра; создатель сразу садится на место 0.
pub fn create_game(id: GameId, creator: Player, config: GameConfig) -> Game {
    let mut game = Game::new(id, config);
    info!(game_id = id, creator = creator.id, "game created");
    game.players.push(creator);
    game
}

/// Посадить игрока на следующее свободное место.
pub fn join_game(game: &Game, player: Player) -> Result<Game, EngineError> {
    if game.started {
        return Err(EngineError::GameAlreadyStarted);
    }
    if game.player(player.id).is_some() {
        return Err(EngineError::PlayerAlreadySeated(player.id));
    }
    let max = game.config.max_players;
    if game.players.len() >= max {
        return Err(EngineError::TooManyPlayers(max));
    }

    let mut next = game.clone();
    info!(game_id = game.id, player_id = player.id, seat = next.players.len(), "player joined");
    next.players.push(player);
    Ok(next)
}

/// Раздать роли (место 0 – SB, место 1 – BB) и начать первую раздачу.
pub fn start_game<R: RandomSource>(game: &Game, rng: &mut R) -> Result<ActionOutcome, EngineError> {
    if game.started {
        return Err(EngineError::GameAlreadyStarted);
    }
    if game.players.len() < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    let mut next = game.clone();
    next.players = initialise_roles(&game.players)?;
    next.started = true;

    info!(game_id = game.id, players = next.players.len(), "game started");

    let mut events = Vec::new();
    let game = begin_hand(&next, rng, &mut events)?;
    Ok(ActionOutcome { game, events })
}
