//! Opponent AI tuning per difficulty.

use serde::Deserialize;

use crate::core::Difficulty;

pub const PURSUE_CHANCE_EASY: f32 = 0.2;
pub const PURSUE_CHANCE_MEDIUM: f32 = 0.5;
/// Hard opponents always chase.
pub const PURSUE_CHANCE_HARD: f32 = 1.0;

pub const CONTACT_DECISION_DELAY_EASY: f32 = 1.0;
pub const CONTACT_DECISION_DELAY_MEDIUM: f32 = 0.07;
pub const CONTACT_DECISION_DELAY_HARD: f32 = 0.01;

pub const NON_CONTACT_DECISION_DELAY: f32 = 0.5;
pub const BLOCK_CHANCE: f32 = 0.4;
/// Eight out of ten times an opponent in reach attacks.
pub const ATTACK_CHANCE: f32 = 0.8;

/// Behaviour that changes with difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DifficultyTuning {
    /// Chance to chase the player on each roaming decision
    pub pursue_chance: f32,
    /// Reaction time between decisions while in reach
    pub contact_decision_delay: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AiTuning {
    pub easy: DifficultyTuning,
    pub medium: DifficultyTuning,
    pub hard: DifficultyTuning,
    pub non_contact_decision_delay: f32,
    pub block_chance: f32,
    pub attack_chance: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            easy: DifficultyTuning {
                pursue_chance: PURSUE_CHANCE_EASY,
                contact_decision_delay: CONTACT_DECISION_DELAY_EASY,
            },
            medium: DifficultyTuning {
                pursue_chance: PURSUE_CHANCE_MEDIUM,
                contact_decision_delay: CONTACT_DECISION_DELAY_MEDIUM,
            },
            hard: DifficultyTuning {
                pursue_chance: PURSUE_CHANCE_HARD,
                contact_decision_delay: CONTACT_DECISION_DELAY_HARD,
            },
            non_contact_decision_delay: NON_CONTACT_DECISION_DELAY,
            block_chance: BLOCK_CHANCE,
            attack_chance: ATTACK_CHANCE,
        }
    }
}

impl AiTuning {
    pub fn for_difficulty(&self, difficulty: Difficulty) -> &DifficultyTuning {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}
