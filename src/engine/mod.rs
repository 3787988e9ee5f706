//! Покерный движок: ставки, переход улиц, расчёт банка, ход игры.
//!
//! Все операции берут `&Game` и возвращают новое значение `Game`
//! (или ошибку – тогда исходная игра не тронута).
//! Основные операции:
//!   - `start_game` – роли + первая раздача
//!   - `bet` / `call` / `raise` / `fold` – действие игрока
//!   - `deal_street` / `settle_round` – вызываются автоматически

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod lobby;
pub mod manager;
pub mod positions;
pub mod settlement;

pub use actions::{PlayerAction, PlayerActionKind};
pub use betting::{advance_betting_round, next_player_to_bet, place_bet, StreetProgress};
pub use errors::EngineError;
pub use game_loop::{
    apply_action, bet, blinds_round, call, deal_street, fold, group_players_by_score,
    prepare_for_round, raise, reset_after_round, reveal_cards, settle_round, ActionOutcome,
    GameEvent,
};
pub use lobby::{create_game, create_player, join_game, start_game};
pub use manager::GameManager;
pub use positions::{betting_order, first_actor_from, initialise_roles, rotate_blinds};
pub use settlement::{settle_pots, Settlement};

/// RNG интерфейс для engine. Реализации – в `infra::rng`.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
