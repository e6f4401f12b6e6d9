//! Fighter tuning values.

use serde::Deserialize;

/// How fast a fighter walks, in world units per second.
pub const MOVEMENT_SPEED: f32 = 15.0;
pub const MAX_LIFE: f32 = 100.0;
/// Fraction of damage that gets through a block (5 * 0.2 = 1).
pub const BLOCK_DAMAGE_FACTOR: f32 = 0.2;

/// Punch and kick animations are six frames of 0.05s.
pub const ATTACK_DURATION: f32 = 0.3;
/// The strike lands during the middle third of the attack.
pub const ATTACK_ACTIVE_START: f32 = 1.0 / 3.0;
pub const ATTACK_ACTIVE_END: f32 = 2.0 / 3.0;
/// Hurt animation is six frames of 0.03s.
pub const HURT_DURATION: f32 = 0.18;

/// Timing of one attack.
///
/// `active_start`/`active_end` are fractions of `duration` bounding the
/// contact window; outside it the attack is wind-up or recovery.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AttackTiming {
    pub duration: f32,
    pub active_start: f32,
    pub active_end: f32,
}

impl Default for AttackTiming {
    fn default() -> Self {
        Self {
            duration: ATTACK_DURATION,
            active_start: ATTACK_ACTIVE_START,
            active_end: ATTACK_ACTIVE_END,
        }
    }
}

impl AttackTiming {
    /// Whether `state_time` falls inside the contact window.
    pub fn is_active_at(&self, state_time: f32) -> bool {
        state_time >= self.duration * self.active_start
            && state_time <= self.duration * self.active_end
    }

    pub fn is_finished_at(&self, state_time: f32) -> bool {
        state_time >= self.duration
    }
}

/// Per-fighter movement, life and animation timings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FighterTuning {
    pub movement_speed: f32,
    pub max_life: f32,
    pub block_damage_factor: f32,
    pub punch: AttackTiming,
    pub kick: AttackTiming,
    pub hurt_duration: f32,
}

impl Default for FighterTuning {
    fn default() -> Self {
        Self {
            movement_speed: MOVEMENT_SPEED,
            max_life: MAX_LIFE,
            block_damage_factor: BLOCK_DAMAGE_FACTOR,
            punch: AttackTiming::default(),
            kick: AttackTiming::default(),
            hurt_duration: HURT_DURATION,
        }
    }
}
