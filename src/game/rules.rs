//! Round timing and match length.

use bevy::prelude::*;
use serde::Deserialize;

pub const START_ROUND_DELAY: f32 = 2.0;
pub const END_ROUND_DELAY: f32 = 2.0;
/// Best of three: first to two rounds wins.
pub const MAX_ROUNDS: u32 = 3;
pub const MAX_ROUND_TIME: f32 = 99.99;
/// Below this the HUD clock turns red.
pub const CRITICAL_ROUND_TIME: f32 = 10.0;

pub const PLAYER_START_POSITION_X: f32 = 60.0;
pub const OPPONENT_START_POSITION_X: f32 = 100.0;
pub const FIGHTER_START_POSITION_Y: f32 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoundRules {
    pub start_delay: f32,
    pub end_delay: f32,
    pub max_rounds: u32,
    pub max_round_time: f32,
    pub critical_round_time: f32,
    pub player_start_x: f32,
    pub opponent_start_x: f32,
    pub start_y: f32,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            start_delay: START_ROUND_DELAY,
            end_delay: END_ROUND_DELAY,
            max_rounds: MAX_ROUNDS,
            max_round_time: MAX_ROUND_TIME,
            critical_round_time: CRITICAL_ROUND_TIME,
            player_start_x: PLAYER_START_POSITION_X,
            opponent_start_x: OPPONENT_START_POSITION_X,
            start_y: FIGHTER_START_POSITION_Y,
        }
    }
}

impl RoundRules {
    /// A side wins the match once its round count exceeds this.
    pub fn majority_threshold(&self) -> u32 {
        self.max_rounds / 2
    }

    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.player_start_x, self.start_y)
    }

    pub fn opponent_start(&self) -> Vec2 {
        Vec2::new(self.opponent_start_x, self.start_y)
    }
}
