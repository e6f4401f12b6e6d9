//! Opponent AI: a timer-gated decision loop driving the AI fighter.
//!
//! The policy only uses the fighter's public command surface (move, stop,
//! block, punch, kick), the same one keyboard input goes through.
//!
//! Two regimes:
//! - **Out of reach**: every decision delay, either chase the player or pick
//!   a random direction per axis. While chasing, keep steering every tick.
//! - **In reach**: block or back off when the player is swinging, otherwise
//!   mostly attack. Reaction time depends on difficulty.

use bevy::prelude::*;

use super::dice::DecisionRng;
use super::tuning::AiTuning;
use crate::combat::ContactRules;
use crate::core::Difficulty;
use crate::fighter::Fighter;

pub struct OpponentPolicy {
    tuning: AiTuning,
    rules: ContactRules,
    rng: Box<dyn DecisionRng>,
    timer: f32,
    making_contact_decision: bool,
    pursuing_player: bool,
}

impl OpponentPolicy {
    pub fn new(tuning: AiTuning, rules: ContactRules, rng: Box<dyn DecisionRng>) -> Self {
        Self {
            tuning,
            rules,
            rng,
            timer: 0.0,
            making_contact_decision: false,
            pursuing_player: false,
        }
    }

    /// Forget any pending decision. Called whenever the fighter is readied.
    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.making_contact_decision = false;
        self.pursuing_player = false;
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn is_making_contact_decision(&self) -> bool {
        self.making_contact_decision
    }

    pub fn is_pursuing_player(&self) -> bool {
        self.pursuing_player
    }

    /// Run one tick of the policy for `me` against `target`.
    pub fn tick(&mut self, delta: f32, difficulty: Difficulty, me: &mut Fighter, target: &Fighter) {
        let in_contact = self.rules.in_contact(me.position(), target.position());

        if self.making_contact_decision {
            if me.is_blocking() {
                // Drop the guard once the threat is gone.
                if !in_contact || !target.is_attacking() || target.has_made_contact() {
                    me.stop_blocking();
                }
            } else if !me.is_attacking() {
                if !in_contact {
                    self.making_contact_decision = false;
                } else if self.timer <= 0.0 {
                    self.decide_in_contact(difficulty, me, target);
                } else {
                    self.timer -= delta;
                }
            }
        } else if in_contact {
            self.decide_in_contact(difficulty, me, target);
        } else if self.timer <= 0.0 {
            let pursue_chance = self.tuning.for_difficulty(difficulty).pursue_chance;
            if self.rng.chance() <= pursue_chance {
                self.pursuing_player = true;
                self.move_toward(me, target);
            } else {
                self.pursuing_player = false;
                self.move_randomly(me);
            }
            debug!("Opponent roaming (pursuing: {})", self.pursuing_player);
            self.timer = self.tuning.non_contact_decision_delay;
        } else {
            if self.pursuing_player {
                self.move_toward(me, target);
            }
            self.timer -= delta;
        }
    }

    fn decide_in_contact(&mut self, difficulty: Difficulty, me: &mut Fighter, target: &Fighter) {
        self.making_contact_decision = true;

        if target.is_attacking() {
            // Nothing to react to once the hit already landed.
            if !target.has_made_contact() {
                if self.rng.chance() <= self.tuning.block_chance {
                    me.block();
                } else {
                    self.move_away(me, target);
                }
            }
        } else if self.rng.chance() <= self.tuning.attack_chance {
            if self.rng.pick(2) == 0 {
                me.punch();
            } else {
                me.kick();
            }
        } else {
            self.move_away(me, target);
        }
        debug!("Opponent contact decision: {:?}", me.action());

        self.timer = self.tuning.for_difficulty(difficulty).contact_decision_delay;
    }

    /// Steer toward the target on each axis still outside reach.
    fn move_toward(&self, me: &mut Fighter, target: &Fighter) {
        let mine = me.position();
        let theirs = target.position();

        if mine.x > theirs.x + self.rules.distance_x {
            me.move_left();
        } else if mine.x < theirs.x - self.rules.distance_x {
            me.move_right();
        } else {
            me.stop_moving_left();
            me.stop_moving_right();
        }

        if mine.y < theirs.y - self.rules.distance_y {
            me.move_up();
        } else if mine.y > theirs.y + self.rules.distance_y {
            me.move_down();
        } else {
            me.stop_moving_up();
            me.stop_moving_down();
        }
    }

    fn move_randomly(&mut self, me: &mut Fighter) {
        match self.rng.pick(3) {
            0 => me.move_left(),
            1 => me.move_right(),
            _ => {
                me.stop_moving_left();
                me.stop_moving_right();
            }
        }

        match self.rng.pick(3) {
            0 => me.move_up(),
            1 => me.move_down(),
            _ => {
                me.stop_moving_up();
                me.stop_moving_down();
            }
        }
    }

    fn move_away(&self, me: &mut Fighter, target: &Fighter) {
        let mine = me.position();
        let theirs = target.position();

        if mine.x > theirs.x {
            me.move_right();
        } else {
            me.move_left();
        }

        if mine.y > theirs.y {
            me.move_up();
        } else {
            me.move_down();
        }
    }
}
