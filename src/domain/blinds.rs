// src/domain/blinds.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Один уровень блайндов. BB всегда = 2 * SB.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindLevel {
    /// Номер уровня, начиная с 0.
    pub level: usize,
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl BlindLevel {
    pub fn from_small_blind(level: usize, small_blind: Chips) -> Self {
        Self {
            level,
            small_blind,
            big_blind: small_blind + small_blind,
        }
    }
}

/// Растущая сетка блайндов: уровень повышается каждые
/// `rounds_per_increase` раздач, после последнего уровня – стоим на нём.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindStructure {
    pub small_blinds: Vec<Chips>,
    pub rounds_per_increase: u32,
}

impl BlindStructure {
    pub fn new(small_blinds: Vec<Chips>, rounds_per_increase: u32) -> Self {
        Self {
            small_blinds,
            rounds_per_increase,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.small_blinds.is_empty() {
            return Err("BlindStructure: empty levels".into());
        }
        if self.rounds_per_increase == 0 {
            return Err("BlindStructure: rounds_per_increase = 0".into());
        }

        let mut prev = Chips::ZERO;
        for (idx, sb) in self.small_blinds.iter().enumerate() {
            if sb.is_zero() {
                return Err(format!("BlindStructure: level {idx}: small_blind = 0"));
            }
            if *sb < prev {
                return Err(format!(
                    "BlindStructure: level {idx}: small_blind ({sb}) < previous ({prev})"
                ));
            }
            prev = *sb;
        }

        Ok(())
    }

    /// Уровень для раздачи с номером `round`:
    /// `min(round / rounds_per_increase, последний)`.
    pub fn level_for_round(&self, round: u32) -> BlindLevel {
        let last = self.small_blinds.len().saturating_sub(1);
        let idx = (round / self.rounds_per_increase.max(1)) as usize;
        let idx = idx.min(last);
        let sb = self.small_blinds.get(idx).copied().unwrap_or(Chips::ZERO);
        BlindLevel::from_small_blind(idx, sb)
    }
}

impl Default for BlindStructure {
    fn default() -> Self {
        let small_blinds = [1, 2, 4, 5, 10, 20, 30, 50, 80, 100]
            .into_iter()
            .map(Chips::new)
            .collect();
        BlindStructure::new(small_blinds, 4)
    }
}
