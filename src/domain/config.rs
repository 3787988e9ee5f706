use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::blinds::BlindStructure;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;

/// Ошибки загрузки/проверки конфига игры.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректный конфиг: {0}")]
    Invalid(String),
}

/// Конфиг игры: стартовый стек, сетка блайндов, размер стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub starting_money: Chips,
    pub blinds: BlindStructure,
    pub max_players: usize,
}

impl GameConfig {
    /// Больше игроков колода не прокормит: 2 карты на руки + 5 на борд.
    pub const MAX_SEATS: usize = (Deck::FULL_SIZE - 5) / 2;

    /// Загрузить конфиг из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.blinds.validate().map_err(ConfigError::Invalid)?;

        if self.starting_money.is_zero() {
            return Err(ConfigError::Invalid("starting_money = 0".into()));
        }
        if !(2..=Self::MAX_SEATS).contains(&self.max_players) {
            return Err(ConfigError::Invalid(format!(
                "max_players = {} (ожидается 2..={})",
                self.max_players,
                Self::MAX_SEATS
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_money: Chips::new(500),
            blinds: BlindStructure::default(),
            max_players: 10,
        }
    }
}
