use serde::{Deserialize, Serialize};

use crate::domain::{Game, PlayerId};
use crate::engine::GameEvent;

/// Что сервер рассылает клиентам в ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    PlayerCreated {
        player_id: PlayerId,
        name: String,
    },
    GameCreated {
        game: Game,
    },
    GameJoined {
        player_id: PlayerId,
        game: Game,
    },
    GameStarted {
        game: Game,
        events: Vec<GameEvent>,
    },
    /// Новое состояние игры для всех, кто за столом (`recipients`).
    GameUpdated {
        recipients: Vec<PlayerId>,
        game: Game,
        events: Vec<GameEvent>,
    },
}

impl ServerEvent {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
