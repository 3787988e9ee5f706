//! Модуль оценки силы покерных рук.
//!
//! Основные функции:
//!   `evaluate(cards) -> HandEvaluation`
//!   `compare_hands(hand1, hand2) -> Ordering`

pub mod comparison;
pub mod errors;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use comparison::{compare_by_high_cards, compare_evaluated, compare_evaluations, compare_hands};
pub use errors::EvalError;
pub use evaluator::{evaluate, evaluate_best_hand, HandChecker, HAND_CHECKERS};
pub use hand_rank::{describe_hand, HandEvaluation, HandTier, HandValue};
