use crate::domain::card::{Card, Rank};

/// Битовая маска рангов.
///
/// Используем 13 бит: бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маски всех стритов (5 подряд), индекс = старшая карта стрита минус 3.
///
///   0: A-5 (wheel)     : A2345 – туз играет как "-1", только здесь
///   1: 6-2             : 23456
///   ...
///   9: A-T (broadway)  : TJQKA
///
/// Других "заворотов" через туза нет: QKA23 стритом не считается.
pub const STRAIGHT_MASKS: [RankMask; 10] = [
    mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]),
    mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]),
    mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]),
    mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]),
    mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]),
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]),
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]),
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]),
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]),
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]),
];

/// Старшие карты стритов в том же порядке, что и STRAIGHT_MASKS.
const STRAIGHT_HIGH_CARDS: [Rank; 10] = [
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Получить битовую маску для одного ранга.
pub const fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << (rank as u8)
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        mask |= rank_to_bit(ranks[i]);
        i += 1;
    }
    mask
}

/// Маска рангов для набора карт (повторы схлопываются).
pub fn mask_from_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> RankMask {
    cards
        .into_iter()
        .fold(0, |mask, card| mask | rank_to_bit(card.rank))
}

/// Найти старший стрит в маске рангов.
/// Возвращает старшую карту стрита; для wheel (A2345) это пятёрка.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    STRAIGHT_MASKS
        .iter()
        .zip(STRAIGHT_HIGH_CARDS.iter())
        .rev()
        .find(|(sm, _)| rank_mask & **sm == **sm)
        .map(|(_, high)| *high)
}
