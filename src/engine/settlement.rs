//! Расчёт банка с учётом сайд-потов и all-in.
//!
//! Игроки приходят сгруппированными по силе руки (`tiers`, сильнейшие
//! первыми, ничьи в одной группе). За один проход победители верхней
//! группы забирают у каждого проигравшего не больше, чем поставили сами,
//! поровну между собой. Если у проигравших что-то осталось в банке –
//! повторяем со следующей группой.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{Chips, Player, PlayerId};

/// Итог расчёта банка.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    /// Выигрыш сверх возвращённой собственной ставки.
    pub winnings: BTreeMap<PlayerId, Chips>,
    /// Игроки, оставшиеся без фишек и убранные со стола.
    pub busted: Vec<PlayerId>,
    /// Фишки, которые некому было отдать (группы кончились) – вернулись владельцам.
    pub returned: BTreeMap<PlayerId, Chips>,
    /// Сколько проходов понадобилось.
    pub passes: u32,
}

impl Settlement {
    pub fn won_by(&self, player_id: PlayerId) -> Chips {
        self.winnings.get(&player_id).copied().unwrap_or(Chips::ZERO)
    }

    pub fn total_returned(&self) -> Chips {
        self.returned.values().sum()
    }
}

/// Разыграть банк.
///
/// `players` – полный состав стола (сфолдившие тоже: их ставки на кону),
/// `tiers` – id игроков в игре, сгруппированные по силе руки.
/// Возвращает новый состав стола (без вылетевших) и отчёт.
pub fn settle_pots(players: &[Player], tiers: &[Vec<PlayerId>]) -> (Vec<Player>, Settlement) {
    let mut roster = players.to_vec();
    let mut settlement = Settlement::default();

    settle_pass(&mut roster, tiers, &mut settlement);

    // Группы кончились, а в банке что-то осталось (остаток от деления,
    // лишнее от сфолдивших): возвращаем владельцам.
    for player in roster.iter_mut().filter(|p| !p.money_in_pot.is_zero()) {
        let left = player.money_in_pot;
        player.money += left;
        player.money_in_pot = Chips::ZERO;
        *settlement.returned.entry(player.id).or_insert(Chips::ZERO) += left;
        warn!(player_id = player.id, chips = left.0, "unclaimed chips returned to owner");
    }

    (roster, settlement)
}

fn settle_pass(roster: &mut Vec<Player>, tiers: &[Vec<PlayerId>], settlement: &mut Settlement) {
    let Some((top, lower)) = tiers.split_first() else {
        return;
    };
    settlement.passes += 1;

    let winner_ids: Vec<PlayerId> = top
        .iter()
        .copied()
        .filter(|id| roster.iter().any(|p| p.id == *id))
        .collect();
    let lower_ids: HashSet<PlayerId> = lower.iter().flatten().copied().collect();

    let winners: Vec<usize> = roster
        .iter()
        .enumerate()
        .filter(|(_, p)| winner_ids.contains(&p.id))
        .map(|(idx, _)| idx)
        .collect();
    let losers: Vec<usize> = roster
        .iter()
        .enumerate()
        .filter(|(_, p)| !winner_ids.contains(&p.id) && (lower_ids.contains(&p.id) || !p.in_play))
        .map(|(idx, _)| idx)
        .collect();

    if winners.is_empty() {
        settle_pass(roster, lower, settlement);
        return;
    }

    // Ставки проигравших на начало прохода: делим их поровну между победителями.
    let stakes: Vec<Chips> = losers.iter().map(|&l| roster[l].money_in_pot).collect();
    let mut taken = vec![Chips::ZERO; losers.len()];

    for &w in &winners {
        let own_stake = roster[w].money_in_pot;
        let mut won = Chips::ZERO;

        for (i, stake) in stakes.iter().enumerate() {
            // Победитель не может выиграть у одного игрока больше, чем рискнул сам.
            let take = own_stake.min(stake.split(winners.len()));
            taken[i] += take;
            won += take;
        }

        let winner = &mut roster[w];
        winner.money += won + own_stake;
        winner.money_in_pot = Chips::ZERO;
        if !won.is_zero() {
            *settlement.winnings.entry(winner.id).or_insert(Chips::ZERO) += won;
        }

        debug!(
            player_id = winner.id,
            won = won.0,
            reclaimed = own_stake.0,
            "pot share awarded"
        );
    }

    for (i, &l) in losers.iter().enumerate() {
        roster[l].money_in_pot -= taken[i];
    }

    // Вылет: ни фишек в стеке, ни ставки, которую ещё можно вернуть.
    // Победитель all-in к этому моменту уже забрал свою ставку.
    let involved: HashSet<PlayerId> = winners
        .iter()
        .chain(losers.iter())
        .map(|&idx| roster[idx].id)
        .collect();
    roster.retain(|p| {
        let bust = involved.contains(&p.id) && p.money.is_zero() && p.money_in_pot.is_zero();
        if bust {
            info!(player_id = p.id, "player busted out");
            settlement.busted.push(p.id);
        }
        !bust
    });

    let residual = roster
        .iter()
        .any(|p| !p.money_in_pot.is_zero() && involved.contains(&p.id));
    if residual {
        settle_pass(roster, lower, settlement);
    }
}
