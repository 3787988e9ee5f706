use crate::domain::{Chips, GameId, PlayerId};
use crate::eval::EvalError;

use thiserror::Error;

/// Ошибки движка покера.
///
/// Все ошибки – нарушенные предусловия. Отклонённая операция никогда
/// не меняет состояние игры.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Игрок {player_id}: недостаточно фишек для ставки {requested} (есть {available})")]
    InsufficientFunds {
        player_id: PlayerId,
        requested: Chips,
        available: Chips,
    },

    #[error("Сейчас не ход игрока с id={0}")]
    OutOfTurn(PlayerId),

    #[error("Игрок {0} не найден")]
    PlayerNotFound(PlayerId),

    #[error("Игра {0} не найдена")]
    GameNotFound(GameId),

    #[error("Торговля не активна")]
    InvalidBettingState,

    #[error("Недостаточно игроков для раздачи")]
    NotEnoughPlayers,

    #[error("Игра уже началась")]
    GameAlreadyStarted,

    #[error("Игра не идёт")]
    GameNotStarted,

    #[error("Игрок {0} уже сидит за столом")]
    PlayerAlreadySeated(PlayerId),

    #[error("Стол заполнен ({0} мест)")]
    TooManyPlayers(usize),

    #[error("Игрок {0} уже сфолдил")]
    PlayerNotInPlay(PlayerId),

    #[error("В колоде не хватает карт: нужно {needed}, осталось {left}")]
    DeckExhausted { needed: usize, left: usize },

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}
