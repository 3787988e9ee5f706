use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория покерной руки. Порядок = порядок проверки, от сильнейшей к слабейшей:
/// индекс 0 – самая сильная рука.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandTier {
    StraightFlush = 0,
    FourOfAKind = 1,
    FullHouse = 2,
    Flush = 3,
    Straight = 4,
    ThreeOfAKind = 5,
    TwoPair = 6,
    Pair = 7,
    HighCard = 8,
}

impl HandTier {
    pub const ALL: [HandTier; 9] = [
        HandTier::StraightFlush,
        HandTier::FourOfAKind,
        HandTier::FullHouse,
        HandTier::Flush,
        HandTier::Straight,
        HandTier::ThreeOfAKind,
        HandTier::TwoPair,
        HandTier::Pair,
        HandTier::HighCard,
    ];

    /// handRank: 0 = сильнейшая категория.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Значение категории кодирует две компоненты (старшая + младшая).
    pub fn is_compound(self) -> bool {
        matches!(self, HandTier::FullHouse | HandTier::TwoPair)
    }

    /// Сколько карт из пяти "съедает" сама комбинация.
    ///
    /// None – комбинация полностью определяется пятью картами,
    /// кикеры при равенстве не смотрим.
    pub fn cards_consumed(self) -> Option<usize> {
        match self {
            HandTier::StraightFlush | HandTier::FullHouse | HandTier::Flush | HandTier::Straight => {
                None
            }
            HandTier::FourOfAKind => Some(4),
            HandTier::ThreeOfAKind => Some(3),
            HandTier::TwoPair => Some(4),
            HandTier::Pair => Some(2),
            HandTier::HighCard => Some(1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HandTier::StraightFlush => "Straight flush",
            HandTier::FourOfAKind => "Four of a kind",
            HandTier::FullHouse => "Full house",
            HandTier::Flush => "Flush",
            HandTier::Straight => "Straight",
            HandTier::ThreeOfAKind => "Three of a kind",
            HandTier::TwoPair => "Two pair",
            HandTier::Pair => "Pair",
            HandTier::HighCard => "High card",
        }
    }
}

/// Значение руки внутри категории.
///
/// Для составных категорий (фулл-хаус, две пары) `minor` – вторая компонента
/// (ранг пары). Сравнение лексикографическое: major, затем minor, что
/// эквивалентно числу `major + minor * 0.01`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandValue {
    pub major: Rank,
    pub minor: Option<Rank>,
}

impl HandValue {
    pub fn single(rank: Rank) -> Self {
        Self {
            major: rank,
            minor: None,
        }
    }

    pub fn compound(major: Rank, minor: Rank) -> Self {
        Self {
            major,
            minor: Some(minor),
        }
    }

    /// Числовое представление `major + minor * 0.01`.
    pub fn as_f64(&self) -> f64 {
        let minor = self.minor.map(|r| r.index() as f64 * 0.01).unwrap_or(0.0);
        self.major.index() as f64 + minor
    }

    /// Ранги, из которых сложилось значение.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> {
        core::iter::once(self.major).chain(self.minor)
    }
}

/// Результат оценки набора карт.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct HandEvaluation {
    pub tier: HandTier,
    pub value: HandValue,
}

impl HandEvaluation {
    pub fn new(tier: HandTier, value: HandValue) -> Self {
        Self { tier, value }
    }

    pub fn hand_rank(&self) -> u8 {
        self.tier.index()
    }

    pub fn hand_value(&self) -> f64 {
        self.value.as_f64()
    }
}

/// `Greater` = рука сильнее.
impl Ord for HandEvaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .tier
            .index()
            .cmp(&self.tier.index())
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd for HandEvaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.tier, self.value.minor) {
            (HandTier::FullHouse, Some(minor)) => write!(
                f,
                "{}, {}s full of {}s",
                self.tier.name(),
                self.value.major.name(),
                minor.name()
            ),
            (HandTier::TwoPair, Some(minor)) => write!(
                f,
                "{}, {}s and {}s",
                self.tier.name(),
                self.value.major.name(),
                minor.name()
            ),
            _ => write!(f, "{}, {}", self.tier.name(), self.value.major.name()),
        }
    }
}

/// Человеческое описание руки.
pub fn describe_hand(evaluation: &HandEvaluation) -> String {
    evaluation.to_string()
}
