//! Сравнение рук: категория → значение → кикеры.

use core::cmp::Ordering;

use crate::domain::card::Card;

use super::errors::EvalError;
use super::evaluator::{evaluate, high_card};
use super::hand_rank::HandEvaluation;

/// Сравнить две оценки. `Greater` – первая сильнее.
///
/// Меньший индекс категории побеждает; при равной категории – большее значение.
pub fn compare_evaluations(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.cmp(b)
}

/// Полное сравнение двух наборов карт с разбором кикеров.
pub fn compare_hands(hand1: &[Card], hand2: &[Card]) -> Result<Ordering, EvalError> {
    let eval1 = evaluate(hand1)?;
    let eval2 = evaluate(hand2)?;
    Ok(compare_evaluated(hand1, &eval1, hand2, &eval2))
}

/// То же, что `compare_hands`, но с уже посчитанными оценками.
pub fn compare_evaluated(
    hand1: &[Card],
    eval1: &HandEvaluation,
    hand2: &[Card],
    eval2: &HandEvaluation,
) -> Ordering {
    let initial = compare_evaluations(eval1, eval2);
    if initial != Ordering::Equal {
        return initial;
    }

    // Стрит/флеш/фулл-хаус полностью определяются пятью картами.
    let Some(consumed) = eval1.tier.cards_consumed() else {
        return Ordering::Equal;
    };
    let window = 5usize.saturating_sub(consumed);

    let kickers1 = leftover_kickers(hand1, eval1, window);
    let kickers2 = leftover_kickers(hand2, eval2, window);

    compare_by_high_cards(&kickers1, &kickers2)
}

/// Убрать карты, из которых сложилось значение руки, и оставить
/// `window` старших из остатка.
fn leftover_kickers(cards: &[Card], evaluation: &HandEvaluation, window: usize) -> Vec<Card> {
    let mut leftovers: Vec<Card> = cards
        .iter()
        .filter(|c| !evaluation.value.ranks().any(|r| r == c.rank))
        .copied()
        .collect();
    leftovers.sort_by(|a, b| b.rank.cmp(&a.rank));
    leftovers.truncate(window);
    leftovers
}

/// Сравнение по старшим картам: снимаем совпавшую старшую карту с обеих
/// сторон, пока не найдётся разница или одна из сторон не кончится (ничья).
pub fn compare_by_high_cards(hand1: &[Card], hand2: &[Card]) -> Ordering {
    let (Some(high1), Some(high2)) = (high_card(hand1), high_card(hand2)) else {
        return Ordering::Equal;
    };

    match high1.cmp(&high2) {
        Ordering::Equal => {
            let rest1: Vec<Card> = hand1.iter().filter(|c| c.rank != high1).copied().collect();
            let rest2: Vec<Card> = hand2.iter().filter(|c| c.rank != high2).copied().collect();
            compare_by_high_cards(&rest1, &rest2)
        }
        other => other,
    }
}
