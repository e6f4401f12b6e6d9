//! Per-fighter action state machine.

use bevy::prelude::*;

use super::tuning::FighterTuning;

/// What a fighter is currently doing.
///
/// `Win` and `Lose` are only entered through the match controller at the
/// end of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Walk,
    Block,
    Punch,
    Kick,
    Hurt,
    Win,
    Lose,
}

impl ActionState {
    pub fn is_attack(self) -> bool {
        matches!(self, ActionState::Punch | ActionState::Kick)
    }
}

/// Horizontal direction a fighter's sprite faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Horizontal scale for the sprite (-1 mirrors it).
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// One fighter in the ring.
#[derive(Debug, Clone)]
pub struct Fighter {
    name: String,
    tuning: FighterTuning,
    action: ActionState,
    state_time: f32,
    /// Snapshot for the renderer, only refreshed on non-zero ticks
    render_action: ActionState,
    render_state_time: f32,
    position: Vec2,
    /// Each axis is -1, 0 or 1
    movement: Vec2,
    life: f32,
    facing: Facing,
    /// The current attack already landed its hit
    made_contact: bool,
}

impl Fighter {
    pub fn new(name: impl Into<String>, tuning: FighterTuning) -> Self {
        Self {
            name: name.into(),
            tuning,
            action: ActionState::Idle,
            state_time: 0.0,
            render_action: ActionState::Idle,
            render_state_time: 0.0,
            position: Vec2::ZERO,
            movement: Vec2::ZERO,
            life: tuning.max_life,
            facing: Facing::default(),
            made_contact: false,
        }
    }

    /// Reset for a new round at the given spot.
    pub fn get_ready(&mut self, position: Vec2) {
        self.action = ActionState::Idle;
        self.render_action = ActionState::Idle;
        self.state_time = 0.0;
        self.render_state_time = 0.0;
        self.position = position;
        self.movement = Vec2::ZERO;
        self.life = self.tuning.max_life;
        self.made_contact = false;
    }

    /// Advance the fighter by `delta` seconds.
    ///
    /// A zero delta keeps the render snapshot frozen so a paused game keeps
    /// showing the last frame.
    pub fn update(&mut self, delta: f32) {
        self.state_time += delta;

        if delta > 0.0 {
            self.render_action = self.action;
            self.render_state_time = self.state_time;
        }

        match self.action {
            ActionState::Walk => {
                self.position += self.movement * self.tuning.movement_speed * delta;
            }
            ActionState::Punch if self.tuning.punch.is_finished_at(self.state_time) => {
                self.settle();
            }
            ActionState::Kick if self.tuning.kick.is_finished_at(self.state_time) => {
                self.settle();
            }
            ActionState::Hurt if self.state_time >= self.tuning.hurt_duration => {
                self.settle();
            }
            _ => {}
        }
    }

    fn change_state(&mut self, action: ActionState) {
        self.action = action;
        self.state_time = 0.0;
    }

    /// Return to walking or standing after a one-shot action.
    fn settle(&mut self) {
        if self.movement != Vec2::ZERO {
            self.change_state(ActionState::Walk);
        } else {
            self.change_state(ActionState::Idle);
        }
    }

    fn set_movement(&mut self, x: f32, y: f32) {
        self.movement = Vec2::new(x, y);
        let moving = x != 0.0 || y != 0.0;
        if self.action == ActionState::Walk && !moving {
            self.change_state(ActionState::Idle);
        } else if self.action == ActionState::Idle && moving {
            self.change_state(ActionState::Walk);
        }
    }

    pub fn move_left(&mut self) {
        self.set_movement(-1.0, self.movement.y);
    }

    pub fn move_right(&mut self) {
        self.set_movement(1.0, self.movement.y);
    }

    pub fn move_up(&mut self) {
        self.set_movement(self.movement.x, 1.0);
    }

    pub fn move_down(&mut self) {
        self.set_movement(self.movement.x, -1.0);
    }

    // A released key only clears its own direction, so letting go of one
    // key never cancels a still-held opposite one.

    pub fn stop_moving_left(&mut self) {
        if self.movement.x == -1.0 {
            self.set_movement(0.0, self.movement.y);
        }
    }

    pub fn stop_moving_right(&mut self) {
        if self.movement.x == 1.0 {
            self.set_movement(0.0, self.movement.y);
        }
    }

    pub fn stop_moving_up(&mut self) {
        if self.movement.y == 1.0 {
            self.set_movement(self.movement.x, 0.0);
        }
    }

    pub fn stop_moving_down(&mut self) {
        if self.movement.y == -1.0 {
            self.set_movement(self.movement.x, 0.0);
        }
    }

    /// Raise the guard. Holding block again does not restart it.
    pub fn block(&mut self) {
        if self.action != ActionState::Block {
            self.change_state(ActionState::Block);
        }
    }

    pub fn stop_blocking(&mut self) {
        if self.action == ActionState::Block {
            self.settle();
        }
    }

    /// Start a punch, overriding any attack in flight.
    pub fn punch(&mut self) {
        self.change_state(ActionState::Punch);
        self.made_contact = false;
    }

    /// Start a kick, overriding any attack in flight.
    pub fn kick(&mut self) {
        self.change_state(ActionState::Kick);
        self.made_contact = false;
    }

    /// Take a hit and return the damage actually applied.
    pub fn get_hit(&mut self, amount: f32) -> f32 {
        let blocking = self.is_blocking();
        let damage = if blocking {
            amount * self.tuning.block_damage_factor
        } else {
            amount
        };
        self.life = (self.life - damage).max(0.0);

        if !blocking {
            self.change_state(ActionState::Hurt);
        }
        damage
    }

    pub fn win(&mut self) {
        self.change_state(ActionState::Win);
    }

    pub fn lose(&mut self) {
        self.change_state(ActionState::Lose);
    }

    /// Mark the current attack as spent.
    pub fn make_contact(&mut self) {
        self.made_contact = true;
    }

    pub fn face_left(&mut self) {
        self.facing = Facing::Left;
    }

    pub fn face_right(&mut self) {
        self.facing = Facing::Right;
    }

    /// Can the current attack still land its hit right now?
    pub fn is_attack_active(&self) -> bool {
        if self.made_contact {
            return false;
        }
        match self.action {
            ActionState::Punch => self.tuning.punch.is_active_at(self.state_time),
            ActionState::Kick => self.tuning.kick.is_active_at(self.state_time),
            _ => false,
        }
    }

    /// In a punch or kick, whether or not it can still hit.
    pub fn is_attacking(&self) -> bool {
        self.action.is_attack()
    }

    pub fn is_blocking(&self) -> bool {
        self.action == ActionState::Block
    }

    pub fn has_made_contact(&self) -> bool {
        self.made_contact
    }

    pub fn has_lost(&self) -> bool {
        self.life <= 0.0
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self) -> ActionState {
        self.action
    }

    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    /// Action to draw; lags `action` while the game is paused.
    pub fn render_action(&self) -> ActionState {
        self.render_action
    }

    pub fn render_state_time(&self) -> f32 {
        self.render_state_time
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn movement(&self) -> Vec2 {
        self.movement
    }

    pub fn life(&self) -> f32 {
        self.life
    }

    /// Remaining life as a 0.0 - 1.0 fraction, for health bars.
    pub fn life_fraction(&self) -> f32 {
        self.life / self.tuning.max_life
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }
}
