//! Ставки и очередность хода внутри одной улицы.
//!
//! Все функции берут `&Game` и возвращают новую игру: при ошибке
//! исходное состояние не тронуто.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{BettingInfo, BettingRound, Chips, Game, Player, PlayerId};
use crate::engine::errors::EngineError;

/// Что произошло с улицей после хода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StreetProgress {
    /// Торговля на улице продолжается, ход у `next`.
    Continue { next: PlayerId },
    /// Улица `completed` закрыта.
    StreetComplete { completed: BettingRound },
}

/// Поставить `amount` фишек: стек → банк, ставка стола поднимается
/// до вклада игрока, если он стал больше.
pub fn place_bet(game: &Game, player_id: PlayerId, amount: Chips) -> Result<Game, EngineError> {
    let seat = game
        .seat_of(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;

    let available = game.players[seat].money;
    if amount > available {
        return Err(EngineError::InsufficientFunds {
            player_id,
            requested: amount,
            available,
        });
    }

    let mut next = game.clone();
    let player = &mut next.players[seat];
    player.money -= amount;
    player.money_in_pot += amount;
    next.bet_amount = next.bet_amount.max(player.money_in_pot);

    debug!(
        game_id = game.id,
        player_id,
        amount = amount.0,
        in_pot = player.money_in_pot.0,
        bet_amount = next.bet_amount.0,
        "bet placed"
    );

    Ok(next)
}

/// Уравнять: поставить `bet_amount - money_in_pot`.
pub fn call(game: &Game, player_id: PlayerId) -> Result<Game, EngineError> {
    let player = game
        .player(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    let to_call = game.bet_amount.saturating_sub(player.money_in_pot);
    place_bet(game, player_id, to_call)
}

/// Рейз на `raise_by` сверх текущей ставки стола.
pub fn raise(game: &Game, player_id: PlayerId, raise_by: Chips) -> Result<Game, EngineError> {
    let player = game
        .player(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    let target = game.bet_amount + raise_by;
    place_bet(game, player_id, target.saturating_sub(player.money_in_pot))
}

/// Фолд: игрок выбывает из раздачи, поставленное остаётся в банке.
pub fn fold(game: &Game, player_id: PlayerId) -> Result<Game, EngineError> {
    let seat = game
        .seat_of(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;

    let mut next = game.clone();
    next.players[seat].in_play = false;

    debug!(game_id = game.id, player_id, "player folded");
    Ok(next)
}

/// Кто ходит следующим, или None – улица закрыта.
///
/// Смотрим игроков в игре после текущего по порядку мест. Если текущий –
/// последний, круг закрыт, если только кто-то не должен доплатить: тогда
/// ход переходит к первому должнику. Во втором круге ход получают
/// только должники. All-in игроки ход не получают.
pub fn next_player_to_bet(game: &Game) -> Option<PlayerId> {
    let players = &game.players;
    let owing = |p: &&Player| p.owes(game.bet_amount);

    let Some(current) = game.turn_to_bet.and_then(|id| game.seat_of(id)) else {
        return players.iter().find(|p| p.can_act()).map(|p| p.id);
    };

    let second_pass = game.betting_info.map_or(false, |info| info.is_second_pass);
    let after = &players[current + 1..];

    if second_pass {
        return after
            .iter()
            .chain(players[..=current].iter())
            .find(owing)
            .map(|p| p.id);
    }

    match after.iter().find(|p| p.can_act()) {
        Some(p) => Some(p.id),
        None => players.iter().find(owing).map(|p| p.id),
    }
}

/// Передать ход дальше или закрыть улицу.
///
/// Закрытие: BLINDS → FLOP → TURN → RIVER → торговля окончена
/// (`betting_info` = None). Если следующий игрок сидит раньше текущего,
/// начался второй круг.
pub fn advance_betting_round(game: &Game) -> Result<(Game, StreetProgress), EngineError> {
    let mut info = game.betting_info.ok_or(EngineError::InvalidBettingState)?;
    let mut next = game.clone();

    match next_player_to_bet(game) {
        None => {
            next.betting_info = info.round.next().map(BettingInfo::new);
            next.turn_to_bet = match next.betting_info {
                Some(_) => next.players.iter().find(|p| p.can_act()).map(|p| p.id),
                None => None,
            };

            debug!(
                game_id = game.id,
                completed = ?info.round,
                next_round = ?next.betting_info.map(|i| i.round),
                "street complete"
            );

            Ok((
                next,
                StreetProgress::StreetComplete {
                    completed: info.round,
                },
            ))
        }
        Some(next_id) => {
            let current_seat = game.turn_to_bet.and_then(|id| game.seat_of(id));
            let next_seat = game.seat_of(next_id);
            if let (Some(cur), Some(nxt)) = (current_seat, next_seat) {
                if nxt < cur {
                    info.is_second_pass = true;
                }
            }

            next.turn_to_bet = Some(next_id);
            next.betting_info = Some(info);
            Ok((next, StreetProgress::Continue { next: next_id }))
        }
    }
}
