use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Роль игрока в текущей раздаче.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SmallBlind,
    BigBlind,
    Other,
}

/// Игрок за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    /// Карманные карты (0, либо 2 после раздачи).
    pub cards: Vec<Card>,
    /// Фишки вне банка.
    pub money: Chips,
    /// Фишки, поставленные в текущей раздаче (по всем улицам).
    pub money_in_pot: Chips,
    /// false после фолда.
    pub in_play: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, money: Chips) -> Self {
        Self {
            id,
            name: name.into(),
            role: Role::Other,
            cards: Vec::new(),
            money,
            money_in_pot: Chips::ZERO,
            in_play: true,
        }
    }

    /// В раздаче, но стек пуст – дальше ставить не может.
    pub fn is_all_in(&self) -> bool {
        self.in_play && self.money.is_zero()
    }

    /// Может ли игрок получать ход.
    pub fn can_act(&self) -> bool {
        self.in_play && !self.money.is_zero()
    }

    /// Должен ли доплатить до текущей ставки стола.
    /// All-in игроки никому ничего не должны.
    pub fn owes(&self, bet_amount: Chips) -> bool {
        self.can_act() && self.money_in_pot < bet_amount
    }

    /// Все фишки игрока: стек + поставленное.
    pub fn total_chips(&self) -> Chips {
        self.money + self.money_in_pot
    }
}
