//! Blood splatter effects spawned by unblocked hits.
//!
//! The simulation only tracks where splatters are and how old they are; the
//! renderer picks frames from `state_time`.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::Side;

/// Splatters kept per fighter; the oldest one is reused.
pub const BLOOD_SPLATTER_AMOUNT: usize = 5;
pub const BLOOD_SPLATTER_OFFSET_X: f32 = 10.0;
pub const BLOOD_SPLATTER_OFFSET_Y: f32 = 25.0;
/// Nine frames of 0.03s.
pub const BLOOD_SPLATTER_LIFETIME: f32 = 0.27;

/// Blood effect settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BloodTuning {
    /// Whether splatters are drawn at all
    pub showing: bool,
    pub pool_size: usize,
    pub offset_x: f32,
    pub offset_y: f32,
    pub lifetime: f32,
}

impl Default for BloodTuning {
    fn default() -> Self {
        Self {
            showing: true,
            pool_size: BLOOD_SPLATTER_AMOUNT,
            offset_x: BLOOD_SPLATTER_OFFSET_X,
            offset_y: BLOOD_SPLATTER_OFFSET_Y,
            lifetime: BLOOD_SPLATTER_LIFETIME,
        }
    }
}

/// A single splatter animation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BloodSplatter {
    pub position: Vec2,
    pub state_time: f32,
    pub active: bool,
}

impl BloodSplatter {
    pub fn activate(&mut self, position: Vec2) {
        self.active = true;
        self.state_time = 0.0;
        self.position = position;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn update(&mut self, delta: f32, lifetime: f32) {
        if !self.active {
            return;
        }

        self.state_time += delta;
        if self.state_time >= lifetime {
            self.deactivate();
        }
    }
}

/// Fixed ring of splatters for one fighter.
#[derive(Debug, Clone)]
struct SplatterPool {
    splatters: Vec<BloodSplatter>,
    next: usize,
}

impl SplatterPool {
    fn new(size: usize) -> Self {
        Self {
            splatters: vec![BloodSplatter::default(); size],
            next: 0,
        }
    }

    fn spill(&mut self, position: Vec2) -> Option<Vec2> {
        let splatter = self.splatters.get_mut(self.next)?;
        splatter.activate(position);
        self.next = (self.next + 1) % self.splatters.len();
        Some(position)
    }

    fn clear(&mut self) {
        for splatter in &mut self.splatters {
            splatter.deactivate();
        }
        self.next = 0;
    }
}

/// Blood splatters for both fighters.
#[derive(Debug, Clone)]
pub struct BloodEffects {
    tuning: BloodTuning,
    showing: bool,
    player: SplatterPool,
    opponent: SplatterPool,
}

impl BloodEffects {
    pub fn new(tuning: BloodTuning) -> Self {
        Self {
            tuning,
            showing: tuning.showing,
            player: SplatterPool::new(tuning.pool_size),
            opponent: SplatterPool::new(tuning.pool_size),
        }
    }

    fn pool_mut(&mut self, side: Side) -> &mut SplatterPool {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Spawn a splatter above a fighter that just took a hit.
    ///
    /// Returns where it spawned, or `None` if blood is hidden or the pool is
    /// empty.
    pub fn spill(&mut self, side: Side, fighter_position: Vec2) -> Option<Vec2> {
        if !self.showing {
            return None;
        }
        let offset = Vec2::new(self.tuning.offset_x, self.tuning.offset_y);
        self.pool_mut(side).spill(fighter_position + offset)
    }

    pub fn update(&mut self, delta: f32) {
        let lifetime = self.tuning.lifetime;
        for splatter in self
            .player
            .splatters
            .iter_mut()
            .chain(self.opponent.splatters.iter_mut())
        {
            splatter.update(delta, lifetime);
        }
    }

    /// Splatters belonging to one fighter, active or not.
    pub fn splatters(&self, side: Side) -> &[BloodSplatter] {
        match side {
            Side::Player => &self.player.splatters,
            Side::Opponent => &self.opponent.splatters,
        }
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }

    pub fn set_showing(&mut self, showing: bool) {
        self.showing = showing;
    }

    pub fn reset(&mut self) {
        self.player.clear();
        self.opponent.clear();
    }
}
