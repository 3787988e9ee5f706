//! Порядок мест: кто ставит первым, кому переходят блайнды.

use crate::domain::{Player, PlayerId, Role};
use crate::engine::errors::EngineError;

/// Найти первого игрока, который может ходить, по кругу начиная с `start`.
pub fn first_actor_from(players: &[Player], start: usize) -> Option<PlayerId> {
    let n = players.len();
    if n == 0 {
        return None;
    }
    (0..n)
        .map(|offset| &players[(start + offset) % n])
        .find(|p| p.can_act())
        .map(|p| p.id)
}

/// Повернуть список мест (не пересортировать) так, чтобы small blind стал первым.
pub fn betting_order(players: &[Player]) -> Result<Vec<Player>, EngineError> {
    let sb_idx = players
        .iter()
        .position(|p| p.role == Role::SmallBlind)
        .ok_or(EngineError::NotEnoughPlayers)?;

    let mut ordered = Vec::with_capacity(players.len());
    ordered.extend_from_slice(&players[sb_idx..]);
    ordered.extend_from_slice(&players[..sb_idx]);
    Ok(ordered)
}

/// Начальные роли: место 0 – SB, место 1 – BB, остальные – OTHER.
pub fn initialise_roles(players: &[Player]) -> Result<Vec<Player>, EngineError> {
    if players.len() < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    Ok(players
        .iter()
        .enumerate()
        .map(|(idx, p)| Player {
            role: match idx {
                0 => Role::SmallBlind,
                1 => Role::BigBlind,
                _ => Role::Other,
            },
            ..p.clone()
        })
        .collect())
}

/// Передать блайнды на одно место вперёд.
///
/// `previous` – состав стола до расчёта раздачи (в нём ещё есть вылетевшие).
/// Новый SB – первый оставшийся игрок после старого SB по старому порядку,
/// BB – следующий за ним оставшийся игрок по текущему порядку.
pub fn rotate_blinds(players: &[Player], previous: &[Player]) -> Result<Vec<Player>, EngineError> {
    if players.len() < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    let old_sb = previous
        .iter()
        .position(|p| p.role == Role::SmallBlind)
        .unwrap_or(0);

    let survives = |id: PlayerId| players.iter().any(|p| p.id == id);

    let new_sb = (1..=previous.len())
        .map(|offset| previous[(old_sb + offset) % previous.len()].id)
        .find(|&id| survives(id))
        .unwrap_or(players[0].id);

    let sb_seat = players
        .iter()
        .position(|p| p.id == new_sb)
        .ok_or(EngineError::PlayerNotFound(new_sb))?;
    let bb_seat = (sb_seat + 1) % players.len();

    Ok(players
        .iter()
        .enumerate()
        .map(|(idx, p)| Player {
            role: if idx == sb_seat {
                Role::SmallBlind
            } else if idx == bb_seat {
                Role::BigBlind
            } else {
                Role::Other
            },
            ..p.clone()
        })
        .collect())
}
