//! Random source for opponent decisions.

use rand::rngs::StdRng;
use rand::Rng;

/// Uniform random draws used by the opponent policy.
///
/// This is the only source of randomness in a match. Seeding it makes a
/// whole match reproducible.
pub trait DecisionRng: Send + Sync {
    /// Uniform value in `[0, 1)`.
    fn chance(&mut self) -> f32;

    /// Uniform index in `0..count`.
    fn pick(&mut self, count: u32) -> u32;
}

impl DecisionRng for StdRng {
    fn chance(&mut self) -> f32 {
        self.gen::<f32>()
    }

    fn pick(&mut self, count: u32) -> u32 {
        self.gen_range(0..count)
    }
}

/// Replays fixed draws in a loop.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRng {
    chances: Vec<f32>,
    picks: Vec<u32>,
    next_chance: usize,
    next_pick: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(chances: &[f32], picks: &[u32]) -> Self {
        Self {
            chances: chances.to_vec(),
            picks: picks.to_vec(),
            next_chance: 0,
            next_pick: 0,
        }
    }
}

#[cfg(test)]
impl DecisionRng for ScriptedRng {
    fn chance(&mut self) -> f32 {
        let value = self.chances[self.next_chance % self.chances.len()];
        self.next_chance += 1;
        value
    }

    fn pick(&mut self, count: u32) -> u32 {
        let value = self.picks[self.next_pick % self.picks.len()];
        self.next_pick += 1;
        value % count
    }
}
