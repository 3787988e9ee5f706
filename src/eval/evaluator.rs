use crate::domain::card::{Card, Rank, Suit};

use super::errors::EvalError;
use super::hand_rank::{HandEvaluation, HandTier, HandValue};
use super::lookup_tables::{detect_straight, mask_from_cards};

/// Проверка одной категории: значение руки или None ("не подходит").
pub type HandChecker = fn(&[Card]) -> Option<HandValue>;

/// Проверки от сильнейшей категории к слабейшей.
/// Порядок определяет иерархию рук – не переставлять.
pub const HAND_CHECKERS: [(HandTier, HandChecker); 9] = [
    (HandTier::StraightFlush, find_straight_flush),
    (HandTier::FourOfAKind, find_four_of_a_kind),
    (HandTier::FullHouse, find_full_house),
    (HandTier::Flush, find_flush),
    (HandTier::Straight, find_straight),
    (HandTier::ThreeOfAKind, find_three_of_a_kind),
    (HandTier::TwoPair, find_two_pair),
    (HandTier::Pair, find_pair),
    (HandTier::HighCard, find_high_card),
];

/// Главная функция: оценить набор карт (обычно hole + board).
///
/// Берётся первая сработавшая проверка из `HAND_CHECKERS`.
/// Ошибка возможна только для пустого набора: старшая карта есть всегда.
pub fn evaluate(cards: &[Card]) -> Result<HandEvaluation, EvalError> {
    HAND_CHECKERS
        .iter()
        .find_map(|(tier, check)| check(cards).map(|value| HandEvaluation::new(*tier, value)))
        .ok_or(EvalError::NoMatchingTier { cards: cards.len() })
}

/// Оценить руку игрока: карманные карты + борд.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<HandEvaluation, EvalError> {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate(&all_cards)
}

/// Счётчики карт по рангам.
fn rank_counts(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for card in cards {
        counts[card.rank.index() as usize] += 1;
    }
    counts
}

/// Старший ранг, карт которого ровно `size` штук.
fn find_group(counts: &[u8; 13], size: u8) -> Option<Rank> {
    Rank::ALL
        .iter()
        .rev()
        .find(|r| counts[r.index() as usize] == size)
        .copied()
}

fn cards_of_suit(cards: &[Card], suit: Suit) -> impl Iterator<Item = &Card> {
    cards.iter().filter(move |c| c.suit == suit)
}

fn find_straight_flush(cards: &[Card]) -> Option<HandValue> {
    // Стрит ищем только среди карт одной масти.
    Suit::ALL
        .iter()
        .filter_map(|&suit| detect_straight(mask_from_cards(cards_of_suit(cards, suit))))
        .max()
        .map(HandValue::single)
}

fn find_four_of_a_kind(cards: &[Card]) -> Option<HandValue> {
    find_group(&rank_counts(cards), 4).map(HandValue::single)
}

fn find_full_house(cards: &[Card]) -> Option<HandValue> {
    let mut counts = rank_counts(cards);
    let trips = find_group(&counts, 3)?;
    counts[trips.index() as usize] = 0;
    // Вторая тройка тоже годится: из неё берём две карты.
    let pair = find_group(&counts, 2).or_else(|| find_group(&counts, 3))?;
    Some(HandValue::compound(trips, pair))
}

fn find_flush(cards: &[Card]) -> Option<HandValue> {
    Suit::ALL
        .iter()
        .filter(|&&suit| cards_of_suit(cards, suit).count() >= 5)
        .filter_map(|&suit| cards_of_suit(cards, suit).map(|c| c.rank).max())
        .max()
        .map(HandValue::single)
}

fn find_straight(cards: &[Card]) -> Option<HandValue> {
    detect_straight(mask_from_cards(cards)).map(HandValue::single)
}

fn find_three_of_a_kind(cards: &[Card]) -> Option<HandValue> {
    find_group(&rank_counts(cards), 3).map(HandValue::single)
}

fn find_two_pair(cards: &[Card]) -> Option<HandValue> {
    let mut counts = rank_counts(cards);
    let first = find_group(&counts, 2)?;
    counts[first.index() as usize] = 0;
    let second = find_group(&counts, 2)?;
    Some(HandValue::compound(first, second))
}

fn find_pair(cards: &[Card]) -> Option<HandValue> {
    find_group(&rank_counts(cards), 2).map(HandValue::single)
}

fn find_high_card(cards: &[Card]) -> Option<HandValue> {
    cards.iter().map(|c| c.rank).max().map(HandValue::single)
}

/// Старшая карта набора (для разбора кикеров).
pub(crate) fn high_card(cards: &[Card]) -> Option<Rank> {
    find_high_card(cards).map(|v| v.major)
}
