use thiserror::Error;

/// Ошибки оценки рук.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Ни одна проверка не сработала. Старшая карта есть в любом непустом
    /// наборе, поэтому на практике это означает пустую руку – нарушение инварианта.
    #[error("Не удалось оценить руку из {cards} карт")]
    NoMatchingTier { cards: usize },
}
