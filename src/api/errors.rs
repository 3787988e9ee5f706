use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{GameId, PlayerId};
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    #[error("Игра {0} не найдена")]
    GameNotFound(GameId),

    #[error("Игрок {0} не найден")]
    PlayerNotFound(PlayerId),

    /// Ошибка движка (ставки, очередность, состояние игры).
    #[error("{0}")]
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::GameNotFound(id) => ApiError::GameNotFound(id),
            EngineError::PlayerNotFound(id) => ApiError::PlayerNotFound(id),
            other => ApiError::EngineError(other.to_string()),
        }
    }
}
