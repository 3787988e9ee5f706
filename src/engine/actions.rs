use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId};

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlayerActionKind {
    /// Поставить ровно столько фишек (0 – чек).
    Bet(Chips),
    /// Доплатить до текущей ставки стола.
    Call,
    /// Доплатить до ставки стола и поднять её ещё на столько.
    Raise(Chips),
    Fold,
}

/// Конкретное действие игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// Какой игрок действует.
    pub player_id: PlayerId,
    /// Само действие.
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn new(player_id: PlayerId, kind: PlayerActionKind) -> Self {
        Self { player_id, kind }
    }
}
