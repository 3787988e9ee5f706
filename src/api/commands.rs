use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::chips::Chips;
use crate::domain::{GameId, PlayerId};

/// Команда от клиента.
///
/// Кодирование на проводе – забота транспорта; здесь только serde-форма
/// (`{"type": "bet", "player_id": 1, "amount": 10}`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Зарегистрировать игрока (попадает в лобби).
    CreatePlayer { name: String },

    /// Создать игру; создатель сразу садится за стол.
    CreateGame { creator_id: PlayerId },

    JoinGame { player_id: PlayerId, game_id: GameId },

    StartGame { game_id: GameId },

    /// Ставка; 0 – чек.
    Bet { player_id: PlayerId, amount: Chips },

    Fold { player_id: PlayerId },
}

impl Command {
    pub fn from_json(s: &str) -> Result<Self, ApiError> {
        serde_json::from_str(s).map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}
