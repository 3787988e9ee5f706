//! Ход раздачи: перемешивание, блайнды, раздача, улицы, расчёт банка,
//! переход к следующей раздаче.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{
    BettingInfo, BettingRound, Card, Chips, Deck, Game, Player, PlayerId, Role,
};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::betting::{self, advance_betting_round, StreetProgress};
use crate::engine::errors::EngineError;
use crate::engine::positions::{betting_order, first_actor_from, rotate_blinds};
use crate::engine::settlement::{settle_pots, Settlement};
use crate::engine::RandomSource;
use crate::eval::{compare_evaluated, evaluate, HandEvaluation};

/// Событие, которое сессионный слой может разослать игрокам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Новая раздача: блайнды поставлены, карты розданы.
    HandStarted {
        round: u32,
        small_blind: Chips,
        big_blind: Chips,
    },
    /// Открыты карты улицы.
    StreetDealt {
        round: BettingRound,
        cards: Vec<Card>,
    },
    /// Банк разыгран.
    HandSettled { settlement: Settlement },
    /// За столом остался один игрок (или никого).
    GameFinished { winner: Option<PlayerId> },
}

/// Результат операции: новое состояние + что произошло по пути.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub game: Game,
    pub events: Vec<GameEvent>,
}

/// Подготовка к раздаче: перемешать колоду и повернуть стол так,
/// чтобы small blind сидел на месте 0.
pub fn prepare_for_round<R: RandomSource>(game: &Game, rng: &mut R) -> Result<Game, EngineError> {
    let mut next = game.clone();
    next.players = betting_order(&game.players)?;
    rng.shuffle(&mut next.deck.cards);
    Ok(next)
}

/// Раунд блайндов: по 2 карты каждому (место 0 – первые две карты,
/// место 1 – следующие две, …), SB и BB ставятся как обычные ставки,
/// ход у места после блайндов.
pub fn blinds_round(game: &Game) -> Result<Game, EngineError> {
    let n = game.players.len();
    if n < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    let mut next = game.clone();
    let needed = 2 * n;
    let dealt = next.deck.draw_n(needed).ok_or(EngineError::DeckExhausted {
        needed,
        left: game.deck.len(),
    })?;
    for (player, hole) in next.players.iter_mut().zip(dealt.chunks(2)) {
        player.cards.extend_from_slice(hole);
    }

    // Короткий стек ставит блайнд на всё, что есть.
    let level = game.config.blinds.level_for_round(game.round);
    let sb = &next.players[0];
    let (sb_id, sb_amount) = (sb.id, level.small_blind.min(sb.money));
    next = betting::place_bet(&next, sb_id, sb_amount)?;

    let bb = &next.players[1];
    let (bb_id, bb_amount) = (bb.id, level.big_blind.min(bb.money));
    next = betting::place_bet(&next, bb_id, bb_amount)?;

    next.betting_info = Some(BettingInfo::new(BettingRound::Blinds));
    next.turn_to_bet = first_actor_from(&next.players, 2 % n);

    info!(
        game_id = game.id,
        round = game.round,
        small_blind = sb_amount.0,
        big_blind = bb_amount.0,
        "blinds posted"
    );

    Ok(next)
}

/// Выложить n карт с верха колоды на стол.
pub fn reveal_cards(game: &Game, n: usize) -> Result<Game, EngineError> {
    let mut next = game.clone();
    let cards = next.deck.draw_n(n).ok_or(EngineError::DeckExhausted {
        needed: n,
        left: game.deck.len(),
    })?;
    next.cards_on_table.extend(cards);
    Ok(next)
}

/// Открыть карты текущей улицы: флоп – 3, тёрн и ривер – по 1.
pub fn deal_street(game: &Game) -> Result<Game, EngineError> {
    let info = game.betting_info.ok_or(EngineError::InvalidBettingState)?;
    let n = info.round.cards_to_reveal();
    if n == 0 {
        return Err(EngineError::InvalidBettingState);
    }

    let next = reveal_cards(game, n)?;
    info!(
        game_id = game.id,
        street = ?info.round,
        board = %format_cards(&next.cards_on_table),
        "street dealt"
    );
    Ok(next)
}

/// Сгруппировать игроков по силе руки (hole + board), сильнейшие первыми.
/// В одну группу попадают только полностью равные руки (с учётом кикеров).
pub fn group_players_by_score(
    players: &[Player],
    board: &[Card],
) -> Result<Vec<Vec<PlayerId>>, EngineError> {
    let mut scored: Vec<(PlayerId, Vec<Card>, HandEvaluation)> = players
        .iter()
        .map(|p| -> Result<_, EngineError> {
            let hand = [p.cards.as_slice(), board].concat();
            let evaluation = evaluate(&hand)?;
            Ok((p.id, hand, evaluation))
        })
        .collect::<Result<_, EngineError>>()?;

    scored.sort_by(|a, b| compare_evaluated(&b.1, &b.2, &a.1, &a.2));

    let mut tiers: Vec<Vec<PlayerId>> = Vec::new();
    let mut leader: Option<usize> = None;
    for (idx, (id, hand, evaluation)) in scored.iter().enumerate() {
        let same_tier = leader.map_or(false, |l| {
            let (_, lead_hand, lead_eval) = &scored[l];
            compare_evaluated(hand, evaluation, lead_hand, lead_eval) == Ordering::Equal
        });

        match tiers.last_mut() {
            Some(tier) if same_tier => tier.push(*id),
            _ => {
                tiers.push(vec![*id]);
                leader = Some(idx);
            }
        }
    }

    Ok(tiers)
}

/// Конец раздачи: расчёт банка, сброс, ротация блайндов и старт
/// следующей раздачи (если за столом ещё есть хотя бы двое).
pub fn settle_round<R: RandomSource>(game: &Game, rng: &mut R) -> Result<ActionOutcome, EngineError> {
    ensure_running(game)?;
    let mut events = Vec::new();
    let game = settle_into(game, rng, &mut events)?;
    Ok(ActionOutcome { game, events })
}

/// Сброс полей раздачи после расчёта. `previous` – состав стола до расчёта
/// (нужен, чтобы передать блайнды мимо вылетевших).
pub fn reset_after_round(game: &Game, previous: &[Player]) -> Result<Game, EngineError> {
    let mut next = game.clone();
    next.bet_amount = Chips::ZERO;
    next.deck = Deck::standard_52();
    next.cards_on_table.clear();
    next.betting_info = None;
    next.turn_to_bet = None;
    next.round += 1;

    for p in next.players.iter_mut() {
        p.cards.clear();
        p.money_in_pot = Chips::ZERO;
        p.in_play = true;
    }

    if next.players.len() < 2 {
        next.finished = true;
        for p in next.players.iter_mut() {
            p.role = Role::Other;
        }
        return Ok(next);
    }

    next.players = rotate_blinds(&next.players, previous)?;
    Ok(next)
}

/// Применить действие игрока, у которого сейчас ход.
///
/// После действия: если в игре остался один – сразу расчёт; иначе ход
/// переходит дальше, закрытая улица открывает карты следующей, закрытый
/// ривер ведёт к расчёту и новой раздаче.
pub fn apply_action<R: RandomSource>(
    game: &Game,
    action: PlayerAction,
    rng: &mut R,
) -> Result<ActionOutcome, EngineError> {
    ensure_running(game)?;
    if game.betting_info.is_none() {
        return Err(EngineError::InvalidBettingState);
    }

    let player_id = action.player_id;
    let player = game
        .player(player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    if !player.in_play {
        return Err(EngineError::PlayerNotInPlay(player_id));
    }
    if game.turn_to_bet != Some(player_id) {
        return Err(EngineError::OutOfTurn(player_id));
    }

    let acted = match action.kind {
        PlayerActionKind::Bet(amount) => betting::place_bet(game, player_id, amount)?,
        PlayerActionKind::Call => betting::call(game, player_id)?,
        PlayerActionKind::Raise(raise_by) => betting::raise(game, player_id, raise_by)?,
        PlayerActionKind::Fold => betting::fold(game, player_id)?,
    };

    let mut events = Vec::new();

    // Остался один – раздача заканчивается независимо от ставок.
    if acted.players_in_play() < 2 {
        debug!(game_id = game.id, "fewer than two players in play, settling");
        let game = settle_into(&acted, rng, &mut events)?;
        return Ok(ActionOutcome { game, events });
    }

    let (next, progress) = advance_betting_round(&acted)?;
    let game = match progress {
        StreetProgress::Continue { .. } => next,
        StreetProgress::StreetComplete { .. } => run_streets(next, rng, &mut events)?,
    };

    Ok(ActionOutcome { game, events })
}

pub fn bet<R: RandomSource>(
    game: &Game,
    player_id: PlayerId,
    amount: Chips,
    rng: &mut R,
) -> Result<ActionOutcome, EngineError> {
    apply_action(game, PlayerAction::new(player_id, PlayerActionKind::Bet(amount)), rng)
}

pub fn call<R: RandomSource>(
    game: &Game,
    player_id: PlayerId,
    rng: &mut R,
) -> Result<ActionOutcome, EngineError> {
    apply_action(game, PlayerAction::new(player_id, PlayerActionKind::Call), rng)
}

pub fn raise<R: RandomSource>(
    game: &Game,
    player_id: PlayerId,
    raise_by: Chips,
    rng: &mut R,
) -> Result<ActionOutcome, EngineError> {
    apply_action(game, PlayerAction::new(player_id, PlayerActionKind::Raise(raise_by)), rng)
}

pub fn fold<R: RandomSource>(
    game: &Game,
    player_id: PlayerId,
    rng: &mut R,
) -> Result<ActionOutcome, EngineError> {
    apply_action(game, PlayerAction::new(player_id, PlayerActionKind::Fold), rng)
}

/// Начать раздачу: подготовка + блайнды. Если после блайндов торговать
/// некому (все, кроме одного, в all-in), карты докладываются без торговли.
pub(crate) fn begin_hand<R: RandomSource>(
    game: &Game,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> Result<Game, EngineError> {
    let next = blinds_round(&prepare_for_round(game, rng)?)?;

    let level = next.config.blinds.level_for_round(next.round);
    events.push(GameEvent::HandStarted {
        round: next.round,
        small_blind: level.small_blind,
        big_blind: level.big_blind,
    });

    let someone_owes = next.players.iter().any(|p| p.owes(next.bet_amount));
    if next.turn_to_bet.is_some() && (next.players_able_to_act() >= 2 || someone_owes) {
        return Ok(next);
    }

    info!(game_id = next.id, "no betting possible after blinds, running the board out");
    run_streets(next, rng, events)
}

/// Улица закрыта: открываем карты следующих улиц. Пока торговать могут
/// меньше двух игроков, улицы проходят без торговли; после ривера – расчёт.
fn run_streets<R: RandomSource>(
    mut game: Game,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> Result<Game, EngineError> {
    loop {
        let Some(info) = game.betting_info else {
            return settle_into(&game, rng, events);
        };

        if info.round.cards_to_reveal() > 0 {
            let before = game.cards_on_table.len();
            game = deal_street(&game)?;
            events.push(GameEvent::StreetDealt {
                round: info.round,
                cards: game.cards_on_table[before..].to_vec(),
            });
        }

        if game.players_able_to_act() >= 2 {
            return Ok(game);
        }

        game.betting_info = info.round.next().map(BettingInfo::new);
        game.turn_to_bet = None;
    }
}

fn settle_into<R: RandomSource>(
    game: &Game,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> Result<Game, EngineError> {
    let previous = game.players.clone();
    let in_play: Vec<Player> = game.players.iter().filter(|p| p.in_play).cloned().collect();
    let tiers = group_players_by_score(&in_play, &game.cards_on_table)?;

    let (roster, settlement) = settle_pots(&game.players, &tiers);

    info!(
        game_id = game.id,
        round = game.round,
        pot = game.pot().0,
        winners = ?tiers.first(),
        busted = ?settlement.busted,
        "hand settled"
    );
    events.push(GameEvent::HandSettled { settlement });

    let mut settled = game.clone();
    settled.players = roster;
    let next = reset_after_round(&settled, &previous)?;

    if next.finished {
        let winner = next.players.first().map(|p| p.id);
        info!(game_id = next.id, winner = ?winner, "game finished");
        events.push(GameEvent::GameFinished { winner });
        return Ok(next);
    }

    begin_hand(&next, rng, events)
}

fn ensure_running(game: &Game) -> Result<(), EngineError> {
    if !game.started || game.finished {
        return Err(EngineError::GameNotStarted);
    }
    Ok(())
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
