//! Расчёт банка: основные поты, сайд-поты, all-in, дележ, вылеты.
//!
//! `tiers` задаём руками – сила рук здесь не важна.

use holdem_rules::domain::{Chips, Player, PlayerId};
use holdem_rules::engine::settle_pots;

/// Игрок: (id, стек, в банке, в игре?).
fn player(id: PlayerId, money: u64, in_pot: u64, in_play: bool) -> Player {
    let mut p = Player::new(id, format!("p{id}"), Chips(money));
    p.money_in_pot = Chips(in_pot);
    p.in_play = in_play;
    p
}

fn total(players: &[Player]) -> Chips {
    players.iter().map(Player::total_chips).sum()
}

fn money_of(players: &[Player], id: PlayerId) -> Option<u64> {
    players.iter().find(|p| p.id == id).map(|p| p.money.0)
}

#[test]
fn single_winner_takes_the_pot() {
    let players = vec![player(1, 100, 300, true), player(2, 200, 300, true)];

    let (after, report) = settle_pots(&players, &[vec![1], vec![2]]);

    assert_eq!(money_of(&after, 1), Some(700));
    assert_eq!(money_of(&after, 2), Some(200));
    assert!(after.iter().all(|p| p.money_in_pot.is_zero()));
    assert_eq!(report.won_by(1), Chips(300));
    assert_eq!(report.won_by(2), Chips::ZERO);
    assert!(report.busted.is_empty());
}

#[test]
fn tie_returns_each_stake() {
    let players = vec![player(1, 100, 300, true), player(2, 200, 300, true)];

    let (after, report) = settle_pots(&players, &[vec![1, 2]]);

    assert_eq!(money_of(&after, 1), Some(400));
    assert_eq!(money_of(&after, 2), Some(500));
    assert!(report.winnings.is_empty());
}

#[test]
fn losers_with_nothing_left_bust_out() {
    let players = vec![
        player(1, 0, 200, true),
        player(2, 200, 200, true),
        player(3, 200, 200, true),
    ];

    let (after, report) = settle_pots(&players, &[vec![2], vec![1, 3]]);

    assert_eq!(after.len(), 2);
    assert_eq!(after[0].id, 2);
    assert_eq!(after[0].money, Chips(800));
    assert_eq!(after[1].id, 3);
    assert_eq!(after[1].money, Chips(200));
    assert_eq!(report.busted, vec![1]);
}

#[test]
fn all_in_winner_is_not_removed() {
    // Победитель поставил всё: стек 0, но в банке 200 – он не вылетает.
    let players = vec![
        player(1, 0, 200, true),
        player(2, 200, 200, true),
        player(3, 200, 200, true),
    ];

    let (after, report) = settle_pots(&players, &[vec![1], vec![2, 3]]);

    assert_eq!(after.len(), 3);
    assert_eq!(money_of(&after, 1), Some(600));
    assert_eq!(money_of(&after, 2), Some(200));
    assert_eq!(money_of(&after, 3), Some(200));
    assert!(report.busted.is_empty());
}

#[test]
fn short_all_in_winner_only_takes_matching_side_pot() {
    let players = vec![
        player(1, 200, 200, true),
        player(2, 200, 500, true),
        player(3, 200, 500, true),
    ];

    let (after, report) = settle_pots(&players, &[vec![1], vec![2], vec![3]]);

    // Первый проход: p1 берёт по 200 с каждого; второй: p2 забирает у p3 остаток.
    assert_eq!(money_of(&after, 1), Some(800));
    assert_eq!(money_of(&after, 2), Some(800));
    assert_eq!(money_of(&after, 3), Some(200));
    assert_eq!(report.passes, 2);
    assert_eq!(total(&after), total(&players));
}

#[test]
fn folded_players_lose_their_stake() {
    let players = vec![
        player(1, 100, 50, false),
        player(2, 100, 100, true),
        player(3, 100, 100, true),
    ];

    let (after, _) = settle_pots(&players, &[vec![3], vec![2]]);

    assert_eq!(money_of(&after, 1), Some(100));
    assert_eq!(money_of(&after, 2), Some(100));
    assert_eq!(money_of(&after, 3), Some(350));
}

#[test]
fn uneven_split_keeps_every_chip() {
    // 601 на двоих: каждый победитель получает по 300, лишняя фишка
    // остаётся проигравшему.
    let players = vec![
        player(1, 0, 601, true),
        player(2, 0, 601, true),
        player(3, 0, 601, true),
    ];

    let (after, report) = settle_pots(&players, &[vec![1, 2], vec![3]]);

    assert_eq!(report.won_by(1), Chips(300));
    assert_eq!(report.won_by(2), Chips(300));
    assert_eq!(money_of(&after, 1), Some(901));
    assert_eq!(money_of(&after, 2), Some(901));
    assert_eq!(money_of(&after, 3), Some(1));
    assert_eq!(total(&after), Chips(1_803));
    assert!(after.iter().all(|p| p.money_in_pot.is_zero()));
}

#[test]
fn unclaimed_chips_are_returned() {
    // Сфолдивший поставил больше, чем рискнул победитель.
    let players = vec![player(1, 0, 300, false), player(2, 0, 100, true)];

    let (after, report) = settle_pots(&players, &[vec![2]]);

    assert_eq!(money_of(&after, 2), Some(200));
    assert_eq!(money_of(&after, 1), Some(200));
    assert_eq!(report.total_returned(), Chips(200));
    assert_eq!(total(&after), total(&players));
}

#[test]
fn winner_takes_no_more_than_own_stake_from_each_loser() {
    let players = vec![
        player(1, 0, 50, true),
        player(2, 0, 300, true),
        player(3, 0, 20, true),
    ];

    let (after, report) = settle_pots(&players, &[vec![1], vec![2, 3]]);

    // 50 с p2 и все 20 с p3.
    assert_eq!(report.won_by(1), Chips(70));
    assert_eq!(money_of(&after, 1), Some(120));
    assert_eq!(total(&after), total(&players));
    assert!(report.busted.contains(&3));
}

#[test]
fn chips_are_conserved_in_a_multiway_pot() {
    let players = vec![
        player(1, 10, 40, true),
        player(2, 0, 120, true),
        player(3, 55, 120, false),
        player(4, 0, 75, true),
        player(5, 300, 200, true),
    ];
    let tiers = [vec![4], vec![1, 5], vec![2]];

    let (after, report) = settle_pots(&players, &tiers);

    assert_eq!(total(&after), total(&players));
    assert!(after.iter().all(|p| p.money_in_pot.is_zero()));
    for id in &report.busted {
        assert!(after.iter().all(|p| p.id != *id));
    }
}
