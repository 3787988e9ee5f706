use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::config::GameConfig;
use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::{GameId, PlayerId};

/// Улица торговли.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BettingRound {
    Blinds,
    Flop,
    Turn,
    River,
}

impl BettingRound {
    /// Следующая улица; после River торговля окончена (шоудаун).
    pub fn next(self) -> Option<BettingRound> {
        match self {
            BettingRound::Blinds => Some(BettingRound::Flop),
            BettingRound::Flop => Some(BettingRound::Turn),
            BettingRound::Turn => Some(BettingRound::River),
            BettingRound::River => None,
        }
    }

    /// Сколько карт открывается на борд при входе в эту улицу.
    pub fn cards_to_reveal(self) -> usize {
        match self {
            BettingRound::Blinds => 0,
            BettingRound::Flop => 3,
            BettingRound::Turn | BettingRound::River => 1,
        }
    }
}

/// Состояние текущей улицы.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingInfo {
    pub round: BettingRound,
    /// Идёт ли второй круг (после рейза кто-то ещё должен доплатить).
    pub is_second_pass: bool,
}

impl BettingInfo {
    pub fn new(round: BettingRound) -> Self {
        Self {
            round,
            is_second_pass: false,
        }
    }
}

/// Полное состояние игры за одним столом.
///
/// Порядок `players` = порядок ставок и ротации блайндов.
/// Движок никогда не мутирует `Game` по ссылке извне: каждая операция
/// возвращает новое значение.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub players: Vec<Player>,
    /// Чей ход (None – вне торговли или ходить некому).
    pub turn_to_bet: Option<PlayerId>,
    /// Ещё не розданные карты.
    pub deck: Deck,
    /// Общие карты (0–5).
    pub cards_on_table: Vec<Card>,
    /// Максимальная сумма, поставленная одним игроком в этой раздаче.
    pub bet_amount: Chips,
    pub started: bool,
    /// За столом остался один игрок – новых раздач не будет.
    pub finished: bool,
    /// Счётчик раздач (от него зависят блайнды).
    pub round: u32,
    /// Есть тогда и только тогда, когда идёт торговля.
    pub betting_info: Option<BettingInfo>,
    pub config: GameConfig,
}

impl Game {
    pub fn new(id: GameId, config: GameConfig) -> Self {
        Self {
            id,
            players: Vec::new(),
            turn_to_bet: None,
            deck: Deck::standard_52(),
            cards_on_table: Vec::new(),
            bet_amount: Chips::ZERO,
            started: false,
            finished: false,
            round: 0,
            betting_info: None,
            config,
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Индекс места игрока.
    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn players_in_play(&self) -> usize {
        self.players.iter().filter(|p| p.in_play).count()
    }

    /// Сколько игроков ещё может ставить (в игре и не all-in).
    pub fn players_able_to_act(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    /// Сумма всех фишек за столом – инвариант для всех операций.
    pub fn total_chips(&self) -> Chips {
        self.players.iter().map(Player::total_chips).sum()
    }

    /// Фишки в банке.
    pub fn pot(&self) -> Chips {
        self.players.iter().map(|p| p.money_in_pot).sum()
    }

    /// Колода + борд + карманные карты. Во время раздачи всегда 52.
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.cards_on_table.len()
            + self.players.iter().map(|p| p.cards.len()).sum::<usize>()
    }

    pub fn is_betting(&self) -> bool {
        self.betting_info.is_some()
    }
}
