//! Доменная модель: карты, колода, фишки, игроки, игра, блайнды и конфиг.

pub mod blinds;
pub mod card;
pub mod chips;
pub mod config;
pub mod deck;
pub mod game;
pub mod player;

// Базовые идентификаторы.
pub type PlayerId = u64;
pub type GameId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use blinds::*;
pub use card::*;
pub use chips::*;
pub use config::*;
pub use deck::*;
pub use game::*;
pub use player::*;
