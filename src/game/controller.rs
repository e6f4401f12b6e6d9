//! Match controller - rounds, timer, and the per-tick sequence.
//!
//! Each tick runs, in order:
//! 1. Round-state transitions (start delay, end delay, next round / game over)
//! 2. Fighter and blood effect updates
//! 3. Ring bounds and facing
//! 4. While a round is in progress: round clock, opponent AI, combat

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::commands::{Command, MenuButton};
use super::context::MatchContext;
use super::rules::RoundRules;
use crate::combat::BloodEffects;
use crate::config::MatchConfig;
use crate::core::{Difficulty, GameState, MatchEvent, Outcome, RoundState, Side};
use crate::fighter::Fighter;
use crate::opponent::DecisionRng;

/// Owns a match from the first round to game over.
#[derive(Resource)]
pub struct MatchController {
    context: MatchContext,
    rules: RoundRules,
    game_state: GameState,
    difficulty: Difficulty,
    round_state: RoundState,
    round_state_time: f32,
    round_timer: f32,
    current_round: u32,
    rounds_won: u32,
    rounds_lost: u32,
    /// Events queued since the last drain. Grows until `drain_events` is
    /// called, which `GamePlugin` does every frame.
    events: Vec<MatchEvent>,
}

impl MatchController {
    /// Build a match with an injected random source and start it.
    pub fn new(config: &MatchConfig, rng: Box<dyn DecisionRng>) -> Self {
        let mut controller = Self {
            context: MatchContext::new(config, rng),
            rules: config.rounds,
            game_state: GameState::Running,
            difficulty: config.difficulty,
            round_state: RoundState::Starting,
            round_state_time: 0.0,
            round_timer: config.rounds.max_round_time,
            current_round: 1,
            rounds_won: 0,
            rounds_lost: 0,
            events: Vec::new(),
        };
        controller.start_game();
        controller
    }

    /// A reproducible match.
    pub fn seeded(config: &MatchConfig, seed: u64) -> Self {
        Self::new(config, Box::new(StdRng::seed_from_u64(seed)))
    }

    pub fn from_entropy(config: &MatchConfig) -> Self {
        Self::new(config, Box::new(StdRng::from_entropy()))
    }

    pub fn start_game(&mut self) {
        self.game_state = GameState::Running;
        self.rounds_won = 0;
        self.rounds_lost = 0;
        self.current_round = 1;
        self.context.blood.reset();

        info!("Match started on {}", self.difficulty.label());
        self.events.push(MatchEvent::GameStarted);
        self.start_round();
    }

    pub fn start_round(&mut self) {
        self.context.player.get_ready(self.rules.player_start());
        self.context.opponent.get_ready(self.rules.opponent_start());
        self.context.policy.reset();
        self.update_facing();

        self.round_state = RoundState::Starting;
        self.round_state_time = 0.0;
        self.round_timer = self.rules.max_round_time;

        info!("Round {} ready", self.current_round);
        self.events.push(MatchEvent::RoundStarted {
            round: self.current_round,
        });
    }

    fn end_round(&mut self) {
        self.round_state = RoundState::Ending;
        self.round_state_time = 0.0;
    }

    /// The player takes the current round.
    pub fn win_round(&mut self) {
        self.context.player.win();
        self.context.opponent.lose();
        self.rounds_won += 1;

        info!(
            "Round {} won ({}-{})",
            self.current_round, self.rounds_won, self.rounds_lost
        );
        self.events.push(MatchEvent::RoundWon {
            round: self.current_round,
        });
        self.end_round();
    }

    /// The opponent takes the current round.
    pub fn lose_round(&mut self) {
        self.context.player.lose();
        self.context.opponent.win();
        self.rounds_lost += 1;

        info!(
            "Round {} lost ({}-{})",
            self.current_round, self.rounds_won, self.rounds_lost
        );
        self.events.push(MatchEvent::RoundLost {
            round: self.current_round,
        });
        self.end_round();
    }

    /// Advance the match by `delta` seconds.
    ///
    /// When the game is not running the fighters receive a zero delta, so
    /// their clocks and render snapshots stay frozen.
    pub fn tick(&mut self, delta: f32) {
        let running = self.game_state == GameState::Running;
        let delta = if running { delta } else { 0.0 };

        if running {
            self.advance_round_state(delta);
        }

        let ctx = &mut self.context;
        ctx.player.update(delta);
        ctx.opponent.update(delta);
        ctx.blood.update(delta);

        let player_position = ctx.ring.clamp(ctx.player.position());
        ctx.player.set_position(player_position);
        let opponent_position = ctx.ring.clamp(ctx.opponent.position());
        ctx.opponent.set_position(opponent_position);

        self.update_facing();

        if self.game_state == GameState::Running && self.round_state == RoundState::InProgress {
            self.fight(delta);
        }
    }

    fn advance_round_state(&mut self, delta: f32) {
        match self.round_state {
            RoundState::Starting if self.round_state_time >= self.rules.start_delay => {
                self.round_state = RoundState::InProgress;
                self.round_state_time = 0.0;

                info!("Round {}: fight!", self.current_round);
                self.events.push(MatchEvent::FightStarted {
                    round: self.current_round,
                });
            }
            RoundState::Ending if self.round_state_time >= self.rules.end_delay => {
                if let Some(outcome) = self.decided_outcome() {
                    self.game_state = GameState::GameOver;
                    info!(
                        "Game over: {} ({}-{})",
                        outcome.text(),
                        self.rounds_won,
                        self.rounds_lost
                    );
                    self.events.push(MatchEvent::GameOver { outcome });
                } else {
                    self.current_round += 1;
                    self.start_round();
                }
            }
            _ => self.round_state_time += delta,
        }
    }

    /// Round clock, opponent AI and hit resolution.
    fn fight(&mut self, delta: f32) {
        self.round_timer -= delta;
        if self.round_timer <= 0.0 {
            self.round_timer = 0.0;
            // Time out: the higher (or equal) life takes the round.
            if self.context.player.life() >= self.context.opponent.life() {
                self.win_round();
            } else {
                self.lose_round();
            }
            return;
        }

        let ctx = &mut self.context;
        ctx.policy
            .tick(delta, self.difficulty, &mut ctx.opponent, &ctx.player);

        let hits = ctx.resolver.resolve(&mut ctx.player, &mut ctx.opponent);
        let mut knocked_out = None;
        for hit in &hits {
            if hit.blocked {
                self.events.push(MatchEvent::HitBlocked {
                    defender: hit.defender,
                });
            } else {
                let defender_position = match hit.defender {
                    Side::Player => ctx.player.position(),
                    Side::Opponent => ctx.opponent.position(),
                };
                let splatter = ctx.blood.spill(hit.defender, defender_position);
                self.events.push(MatchEvent::HitLanded {
                    defender: hit.defender,
                    splatter,
                });
            }

            // The player's knockout is checked first, so a double knockout
            // goes to the player like a timer tie does.
            if hit.knockout && knocked_out.is_none() {
                knocked_out = Some(hit.defender);
            }
        }

        match knocked_out {
            Some(Side::Opponent) => self.win_round(),
            Some(Side::Player) => self.lose_round(),
            None => {}
        }
    }

    /// Fighters always face each other; ties face the player right.
    fn update_facing(&mut self) {
        let ctx = &mut self.context;
        if ctx.player.position().x <= ctx.opponent.position().x {
            ctx.player.face_right();
            ctx.opponent.face_left();
        } else {
            ctx.player.face_left();
            ctx.opponent.face_right();
        }
    }

    fn decided_outcome(&self) -> Option<Outcome> {
        let threshold = self.rules.majority_threshold();
        if self.rounds_won > threshold {
            Some(Outcome::Victory)
        } else if self.rounds_lost > threshold {
            Some(Outcome::Defeat)
        } else {
            None
        }
    }

    /// Apply a command from the input collaborator.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::TogglePause => self.toggle_pause(),
            Command::SkipDelay => self.skip_delay(),
            Command::CycleDifficulty => self.cycle_difficulty(),
            Command::Restart => self.restart(),
            _ if command.is_release() => self.release(command),
            _ if self.accepts_fight_input() => self.press(command),
            _ => {}
        }
    }

    fn accepts_fight_input(&self) -> bool {
        self.game_state == GameState::Running && self.round_state == RoundState::InProgress
    }

    fn press(&mut self, command: Command) {
        let player = &mut self.context.player;
        match command {
            Command::MoveLeft => player.move_left(),
            Command::MoveRight => player.move_right(),
            Command::MoveUp => player.move_up(),
            Command::MoveDown => player.move_down(),
            Command::Block => player.block(),
            Command::Punch => player.punch(),
            Command::Kick => player.kick(),
            _ => {}
        }
    }

    fn release(&mut self, command: Command) {
        let player = &mut self.context.player;
        match command {
            Command::StopMovingLeft => player.stop_moving_left(),
            Command::StopMovingRight => player.stop_moving_right(),
            Command::StopMovingUp => player.stop_moving_up(),
            Command::StopMovingDown => player.stop_moving_down(),
            Command::StopBlocking => player.stop_blocking(),
            _ => {}
        }
    }

    /// Handle a click on one of the overlay buttons.
    pub fn click(&mut self, button: MenuButton) {
        let clicked = match (self.game_state, button) {
            (GameState::Running, MenuButton::Pause) => {
                self.pause();
                true
            }
            (GameState::Running, MenuButton::Screen) => {
                self.skip_delay();
                false
            }
            (GameState::Paused, MenuButton::Continue) => {
                self.resume();
                true
            }
            (GameState::GameOver, MenuButton::PlayAgain) => {
                self.start_game();
                true
            }
            _ => false,
        };

        if clicked {
            self.events.push(MatchEvent::UiClick);
        }
    }

    pub fn pause(&mut self) {
        if self.game_state != GameState::Running {
            return;
        }
        self.game_state = GameState::Paused;
        info!("Game paused");
        self.events.push(MatchEvent::Paused);
    }

    pub fn resume(&mut self) {
        if self.game_state != GameState::Paused {
            return;
        }
        self.game_state = GameState::Running;
        info!("Game resumed");
        self.events.push(MatchEvent::Resumed);
    }

    pub fn toggle_pause(&mut self) {
        match self.game_state {
            GameState::Running => self.pause(),
            GameState::Paused => self.resume(),
            GameState::GameOver => {}
        }
    }

    /// Jump to the end of the current start/end delay; the next tick
    /// performs the transition.
    pub fn skip_delay(&mut self) {
        if self.game_state != GameState::Running {
            return;
        }
        match self.round_state {
            RoundState::Starting => self.round_state_time = self.rules.start_delay,
            RoundState::Ending => self.round_state_time = self.rules.end_delay,
            RoundState::InProgress => {}
        }
    }

    pub fn cycle_difficulty(&mut self) {
        self.difficulty = self.difficulty.next();
        info!("Difficulty set to {}", self.difficulty.label());
        self.events.push(MatchEvent::DifficultyChanged(self.difficulty));
    }

    /// Start over after game over.
    pub fn restart(&mut self) {
        if self.game_state == GameState::GameOver {
            self.start_game();
        }
    }

    /// Take the events queued since the last call.
    ///
    /// Nothing else empties the queue, so callers driving `tick` by hand
    /// should drain once per tick.
    pub fn drain_events(&mut self) -> impl Iterator<Item = MatchEvent> + '_ {
        self.events.drain(..)
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn round_state(&self) -> RoundState {
        self.round_state
    }

    pub fn round_state_time(&self) -> f32 {
        self.round_state_time
    }

    pub fn round_timer(&self) -> f32 {
        self.round_timer
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    pub fn rounds_lost(&self) -> u32 {
        self.rounds_lost
    }

    pub fn rules(&self) -> &RoundRules {
        &self.rules
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        match side {
            Side::Player => &self.context.player,
            Side::Opponent => &self.context.opponent,
        }
    }

    pub fn player(&self) -> &Fighter {
        &self.context.player
    }

    pub fn opponent(&self) -> &Fighter {
        &self.context.opponent
    }

    pub fn blood(&self) -> &BloodEffects {
        &self.context.blood
    }

    pub fn set_showing_blood(&mut self, showing: bool) {
        self.context.blood.set_showing(showing);
    }

    /// Final result once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.game_state != GameState::GameOver {
            return None;
        }
        if self.rounds_won > self.rounds_lost {
            Some(Outcome::Victory)
        } else {
            Some(Outcome::Defeat)
        }
    }

    /// "YOU WON!" / "YOU LOST!" once the game is over.
    pub fn outcome_text(&self) -> Option<&'static str> {
        self.outcome().map(Outcome::text)
    }

    #[cfg(test)]
    pub(crate) fn context_mut(&mut self) -> &mut MatchContext {
        &mut self.context
    }

    /// "ROUND n" for the first half of the start delay, then "FIGHT!".
    pub fn round_banner(&self) -> Option<String> {
        if self.game_state == GameState::GameOver || self.round_state != RoundState::Starting {
            return None;
        }
        if self.round_state_time < self.rules.start_delay * 0.5 {
            Some(format!("ROUND {}", self.current_round))
        } else {
            Some("FIGHT!".to_string())
        }
    }

    /// Whole seconds left, zero-padded to two digits.
    pub fn timer_display(&self) -> String {
        format!("{:02}", self.round_timer.max(0.0) as u32)
    }

    pub fn is_timer_critical(&self) -> bool {
        self.round_timer < self.rules.critical_round_time
    }

    /// The fighter nearer the camera (lower Y), drawn last.
    pub fn front_fighter(&self) -> Side {
        if self.context.player.position().y > self.context.opponent.position().y {
            Side::Opponent
        } else {
            Side::Player
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{RingBounds, RING_MIN_Y};
    use crate::combat::HIT_STRENGTH;
    use crate::fighter::{ActionState, Facing, BLOCK_DAMAGE_FACTOR, MAX_LIFE};
    use crate::game::rules::{MAX_ROUND_TIME, START_ROUND_DELAY};
    use crate::opponent::ScriptedRng;

    const FRAME: f32 = 0.06;

    /// The scripted opponent never attacks or blocks with these draws.
    fn passive_controller() -> MatchController {
        scripted_controller(&[0.9])
    }

    fn scripted_controller(chances: &[f32]) -> MatchController {
        MatchController::new(
            &MatchConfig::default(),
            Box::new(ScriptedRng::new(chances, &[2])),
        )
    }

    fn start_fight(controller: &mut MatchController) {
        controller.skip_delay();
        controller.tick(0.0);
        assert_eq!(controller.round_state(), RoundState::InProgress);
    }

    fn end_round_now(controller: &mut MatchController, player_wins: bool) {
        if player_wins {
            controller.win_round();
        } else {
            controller.lose_round();
        }
        controller.skip_delay();
        controller.tick(0.0);
    }

    fn place_opponent_in_reach(controller: &mut MatchController) {
        let position = controller.player().position() + Vec2::new(10.0, 0.0);
        controller.context_mut().opponent.set_position(position);
    }

    fn events(controller: &mut MatchController) -> Vec<MatchEvent> {
        controller.drain_events().collect()
    }

    #[test]
    fn new_match_starts_round_one() {
        let mut controller = passive_controller();
        assert_eq!(controller.game_state(), GameState::Running);
        assert_eq!(controller.round_state(), RoundState::Starting);
        assert_eq!(controller.current_round(), 1);
        assert_eq!(controller.round_timer(), MAX_ROUND_TIME);
        assert_eq!(controller.player().position(), Vec2::new(60.0, 35.0));
        assert_eq!(controller.opponent().position(), Vec2::new(100.0, 35.0));
        assert_eq!(
            events(&mut controller),
            vec![MatchEvent::GameStarted, MatchEvent::RoundStarted { round: 1 }]
        );
    }

    #[test]
    fn start_delay_elapses_into_the_fight() {
        let mut controller = passive_controller();
        controller.drain_events().for_each(drop);

        controller.tick(1.5);
        assert_eq!(controller.round_state(), RoundState::Starting);
        controller.tick(0.5);
        assert_eq!(controller.round_state(), RoundState::Starting);
        controller.tick(FRAME);
        assert_eq!(controller.round_state(), RoundState::InProgress);
        assert_eq!(controller.round_state_time(), 0.0);
        assert!(events(&mut controller).contains(&MatchEvent::FightStarted { round: 1 }));
    }

    #[test]
    fn round_timer_only_runs_in_progress() {
        let mut controller = passive_controller();
        assert_eq!(controller.rules(), &RoundRules::default());
        controller.tick(1.0);
        assert_eq!(controller.round_timer(), MAX_ROUND_TIME);

        start_fight(&mut controller);
        controller.tick(1.0);
        assert!((controller.round_timer() - (MAX_ROUND_TIME - 1.0)).abs() < 1e-4);
    }

    #[test]
    fn skip_delay_fires_on_next_tick() {
        let mut controller = passive_controller();
        controller.skip_delay();
        assert_eq!(controller.round_state_time(), START_ROUND_DELAY);
        assert_eq!(controller.round_state(), RoundState::Starting);
        controller.tick(0.0);
        assert_eq!(controller.round_state(), RoundState::InProgress);

        // Nothing to skip mid-round.
        controller.skip_delay();
        assert_eq!(controller.round_state_time(), 0.0);
    }

    #[test]
    fn fight_commands_wait_for_the_round() {
        let mut controller = passive_controller();
        controller.apply(Command::MoveRight);
        controller.apply(Command::Punch);
        assert_eq!(controller.player().movement(), Vec2::ZERO);
        assert_eq!(controller.player().action(), ActionState::Idle);

        start_fight(&mut controller);
        controller.apply(Command::MoveRight);
        assert_eq!(controller.player().movement(), Vec2::new(1.0, 0.0));
        assert_eq!(controller.player().action(), ActionState::Walk);

        controller.pause();
        controller.apply(Command::MoveUp);
        assert_eq!(controller.player().movement(), Vec2::new(1.0, 0.0));
        // Releases always go through.
        controller.apply(Command::StopMovingRight);
        assert_eq!(controller.player().movement(), Vec2::ZERO);
    }

    #[test]
    fn timer_expiry_goes_to_the_healthier_fighter() {
        let mut controller = passive_controller();
        controller.context_mut().player.get_hit(40.0);
        controller.context_mut().opponent.get_hit(60.0);
        start_fight(&mut controller);
        controller.drain_events().for_each(drop);

        controller.tick(MAX_ROUND_TIME + 1.0);

        assert_eq!(controller.round_timer(), 0.0);
        assert_eq!(controller.rounds_won(), 1);
        assert_eq!(controller.rounds_lost(), 0);
        assert_eq!(controller.round_state(), RoundState::Ending);
        assert_eq!(controller.player().action(), ActionState::Win);
        assert_eq!(controller.opponent().action(), ActionState::Lose);
        assert_eq!(events(&mut controller), vec![MatchEvent::RoundWon { round: 1 }]);
    }

    #[test]
    fn timer_expiry_with_less_life_loses_the_round() {
        let mut controller = passive_controller();
        controller.context_mut().player.get_hit(60.0);
        controller.context_mut().opponent.get_hit(40.0);
        start_fight(&mut controller);

        controller.tick(MAX_ROUND_TIME + 1.0);

        assert_eq!(controller.rounds_lost(), 1);
        assert_eq!(controller.player().action(), ActionState::Lose);
        assert_eq!(controller.opponent().action(), ActionState::Win);
    }

    #[test]
    fn timer_tie_goes_to_the_player() {
        let mut controller = passive_controller();
        start_fight(&mut controller);
        controller.tick(MAX_ROUND_TIME + 1.0);
        assert_eq!(controller.rounds_won(), 1);
        assert_eq!(controller.rounds_lost(), 0);

        // The clock stays at zero through the end delay.
        controller.tick(0.5);
        assert_eq!(controller.round_timer(), 0.0);
        assert_eq!(controller.rounds_won(), 1);
    }

    #[test]
    fn second_round_win_ends_the_game() {
        let mut controller = passive_controller();
        end_round_now(&mut controller, true);
        assert_eq!(controller.current_round(), 2);
        assert_eq!(controller.round_state(), RoundState::Starting);
        assert_eq!(controller.player().action(), ActionState::Idle);

        controller.win_round();
        assert_eq!(controller.rounds_won(), 2);
        // The winner celebrates through the end delay first.
        assert_eq!(controller.game_state(), GameState::Running);
        assert_eq!(controller.outcome(), None);

        controller.skip_delay();
        controller.tick(0.0);
        assert_eq!(controller.game_state(), GameState::GameOver);
        assert_eq!(controller.outcome(), Some(Outcome::Victory));
        assert_eq!(controller.outcome_text(), Some("YOU WON!"));
        assert!(events(&mut controller).contains(&MatchEvent::GameOver {
            outcome: Outcome::Victory
        }));
    }

    #[test]
    fn split_rounds_go_to_a_decider() {
        let mut controller = passive_controller();
        end_round_now(&mut controller, true);
        end_round_now(&mut controller, false);

        assert_eq!(controller.rounds_won(), 1);
        assert_eq!(controller.rounds_lost(), 1);
        assert_eq!(controller.game_state(), GameState::Running);
        assert_eq!(controller.current_round(), 3);

        end_round_now(&mut controller, false);
        assert_eq!(controller.game_state(), GameState::GameOver);
        assert_eq!(controller.outcome_text(), Some("YOU LOST!"));
    }

    #[test]
    fn pause_freezes_the_simulation() {
        let mut controller = passive_controller();
        start_fight(&mut controller);
        controller.apply(Command::MoveRight);
        controller.tick(0.5);

        let timer = controller.round_timer();
        let position = controller.player().position();
        let state_time = controller.player().state_time();
        let render_time = controller.player().render_state_time();

        controller.pause();
        for _ in 0..10 {
            controller.tick(0.5);
        }

        assert_eq!(controller.game_state(), GameState::Paused);
        assert_eq!(controller.round_timer(), timer);
        assert_eq!(controller.player().position(), position);
        assert_eq!(controller.player().state_time(), state_time);
        assert_eq!(controller.player().render_state_time(), render_time);

        controller.resume();
        controller.tick(0.5);
        assert!((controller.round_timer() - (timer - 0.5)).abs() < 1e-4);
        assert!(controller.player().position().x > position.x);
    }

    #[test]
    fn pause_and_resume_ignore_the_wrong_state() {
        let mut controller = passive_controller();
        controller.drain_events().for_each(drop);

        controller.resume();
        assert!(events(&mut controller).is_empty());

        controller.pause();
        controller.pause();
        assert_eq!(events(&mut controller), vec![MatchEvent::Paused]);

        controller.toggle_pause();
        assert_eq!(controller.game_state(), GameState::Running);
        assert_eq!(events(&mut controller), vec![MatchEvent::Resumed]);
    }

    #[test]
    fn restart_only_after_game_over() {
        let mut controller = passive_controller();
        end_round_now(&mut controller, true);
        controller.drain_events().for_each(drop);

        controller.restart();
        assert_eq!(controller.current_round(), 2);
        assert!(events(&mut controller).is_empty());

        end_round_now(&mut controller, true);
        assert_eq!(controller.game_state(), GameState::GameOver);
        controller.pause();
        assert_eq!(controller.game_state(), GameState::GameOver);

        controller.apply(Command::Restart);
        assert_eq!(controller.game_state(), GameState::Running);
        assert_eq!(controller.current_round(), 1);
        assert_eq!(controller.rounds_won(), 0);
        assert_eq!(controller.player().life(), MAX_LIFE);
    }

    #[test]
    fn punch_lands_once_per_swing() {
        let mut controller = passive_controller();
        start_fight(&mut controller);
        controller.drain_events().for_each(drop);

        place_opponent_in_reach(&mut controller);
        controller.apply(Command::Punch);
        for _ in 0..8 {
            controller.tick(FRAME);
        }

        assert_eq!(controller.opponent().life(), MAX_LIFE - HIT_STRENGTH);
        let landed: Vec<_> = events(&mut controller)
            .into_iter()
            .filter(|event| matches!(event, MatchEvent::HitLanded { .. }))
            .collect();
        assert_eq!(landed.len(), 1);
        assert!(matches!(
            landed[0],
            MatchEvent::HitLanded {
                defender: Side::Opponent,
                splatter: Some(_),
            }
        ));
    }

    #[test]
    fn hidden_blood_reports_no_splatter() {
        let mut controller = passive_controller();
        controller.set_showing_blood(false);
        start_fight(&mut controller);
        controller.drain_events().for_each(drop);

        place_opponent_in_reach(&mut controller);
        controller.apply(Command::Kick);
        for _ in 0..8 {
            controller.tick(FRAME);
        }

        assert!(events(&mut controller).contains(&MatchEvent::HitLanded {
            defender: Side::Opponent,
            splatter: None,
        }));
    }

    #[test]
    fn blocking_opponent_takes_chip_damage() {
        // 0.3 roams on the first tick, then blocks the incoming punch.
        let mut controller = scripted_controller(&[0.3]);
        start_fight(&mut controller);
        controller.drain_events().for_each(drop);

        place_opponent_in_reach(&mut controller);
        controller.apply(Command::Punch);
        controller.tick(FRAME);
        assert!(controller.opponent().is_blocking());
        controller.tick(FRAME);

        let blocked_damage = HIT_STRENGTH * BLOCK_DAMAGE_FACTOR;
        assert!((controller.opponent().life() - (MAX_LIFE - blocked_damage)).abs() < 1e-4);
        assert!(events(&mut controller).contains(&MatchEvent::HitBlocked {
            defender: Side::Opponent
        }));
    }

    #[test]
    fn knockout_wins_the_round() {
        let mut controller = passive_controller();
        start_fight(&mut controller);

        let mut punches = 0;
        while controller.round_state() == RoundState::InProgress && punches < 50 {
            place_opponent_in_reach(&mut controller);
            controller.apply(Command::Punch);
            for _ in 0..6 {
                controller.tick(FRAME);
            }
            punches += 1;
        }

        assert_eq!(punches, (MAX_LIFE / HIT_STRENGTH) as i32);
        assert_eq!(controller.opponent().life(), 0.0);
        assert!(controller.opponent().has_lost());
        assert_eq!(controller.rounds_won(), 1);
        assert_eq!(controller.round_state(), RoundState::Ending);
        assert_eq!(controller.opponent().action(), ActionState::Lose);
    }

    #[test]
    fn opponent_knockout_loses_the_round() {
        let mut controller = passive_controller();
        start_fight(&mut controller);
        controller.context_mut().player.get_hit(MAX_LIFE - HIT_STRENGTH);
        place_opponent_in_reach(&mut controller);
        controller.context_mut().opponent.punch();
        controller.drain_events().for_each(drop);

        controller.tick(FRAME);
        controller.tick(FRAME);

        assert!(controller.player().has_lost());
        assert_eq!(controller.rounds_lost(), 1);
        assert_eq!(controller.rounds_won(), 0);
        assert_eq!(controller.round_state(), RoundState::Ending);
        assert_eq!(controller.player().action(), ActionState::Lose);
        assert_eq!(controller.opponent().action(), ActionState::Win);
        assert!(events(&mut controller).contains(&MatchEvent::RoundLost { round: 1 }));
    }

    #[test]
    fn double_knockout_goes_to_the_player() {
        let mut controller = passive_controller();
        start_fight(&mut controller);
        place_opponent_in_reach(&mut controller);
        {
            let ctx = controller.context_mut();
            ctx.player.get_hit(MAX_LIFE - HIT_STRENGTH);
            ctx.opponent.get_hit(MAX_LIFE - HIT_STRENGTH);
            ctx.player.punch();
            ctx.opponent.punch();
        }
        controller.drain_events().for_each(drop);

        controller.tick(FRAME);
        controller.tick(FRAME);

        assert!(controller.player().has_lost());
        assert!(controller.opponent().has_lost());
        assert_eq!(controller.rounds_won(), 1);
        assert_eq!(controller.rounds_lost(), 0);
        assert_eq!(controller.player().action(), ActionState::Win);

        let results: Vec<_> = events(&mut controller)
            .into_iter()
            .filter(|event| {
                matches!(
                    event,
                    MatchEvent::RoundWon { .. } | MatchEvent::RoundLost { .. }
                )
            })
            .collect();
        assert_eq!(results, vec![MatchEvent::RoundWon { round: 1 }]);
    }

    #[test]
    fn fighters_face_each_other() {
        let mut controller = passive_controller();
        controller.tick(0.0);
        assert_eq!(controller.player().facing(), Facing::Right);
        assert_eq!(controller.opponent().facing(), Facing::Left);

        controller
            .context_mut()
            .player
            .set_position(Vec2::new(120.0, 35.0));
        controller.tick(0.0);
        assert_eq!(controller.player().facing(), Facing::Left);
        assert_eq!(controller.opponent().facing(), Facing::Right);
    }

    #[test]
    fn fighters_are_kept_inside_the_ring() {
        let mut controller = passive_controller();
        controller
            .context_mut()
            .player
            .set_position(Vec2::new(500.0, -20.0));
        controller.tick(0.0);

        let ring = RingBounds::default();
        assert!(ring.contains(controller.player().position()));
        assert_eq!(controller.player().position().y, RING_MIN_Y);
    }

    #[test]
    fn difficulty_cycles_in_any_state() {
        let mut controller = passive_controller();
        controller.pause();
        controller.drain_events().for_each(drop);

        controller.apply(Command::CycleDifficulty);
        assert_eq!(controller.difficulty(), Difficulty::Medium);
        assert_eq!(
            events(&mut controller),
            vec![MatchEvent::DifficultyChanged(Difficulty::Medium)]
        );
    }

    #[test]
    fn menu_clicks() {
        let mut controller = passive_controller();
        controller.drain_events().for_each(drop);

        // A screen click skips the delay silently.
        controller.click(MenuButton::Screen);
        assert_eq!(controller.round_state_time(), START_ROUND_DELAY);
        assert!(events(&mut controller).is_empty());

        controller.click(MenuButton::PlayAgain);
        assert!(events(&mut controller).is_empty());

        controller.click(MenuButton::Pause);
        assert_eq!(
            events(&mut controller),
            vec![MatchEvent::Paused, MatchEvent::UiClick]
        );

        controller.click(MenuButton::Continue);
        assert_eq!(controller.game_state(), GameState::Running);
        assert_eq!(
            events(&mut controller),
            vec![MatchEvent::Resumed, MatchEvent::UiClick]
        );
    }

    #[test]
    fn banner_counts_in_the_round() {
        let mut controller = passive_controller();
        assert_eq!(controller.round_banner().as_deref(), Some("ROUND 1"));
        controller.tick(1.0);
        assert_eq!(controller.round_banner().as_deref(), Some("FIGHT!"));
        controller.tick(1.0);
        controller.tick(FRAME);
        assert_eq!(controller.round_state(), RoundState::InProgress);
        assert_eq!(controller.round_banner(), None);
    }

    #[test]
    fn hud_queries() {
        let mut controller = passive_controller();
        assert_eq!(controller.timer_display(), "99");
        assert!(!controller.is_timer_critical());

        start_fight(&mut controller);
        controller.tick(MAX_ROUND_TIME - 5.0);
        assert_eq!(controller.timer_display(), "05");
        assert!(controller.is_timer_critical());

        controller
            .context_mut()
            .player
            .set_position(Vec2::new(60.0, 30.0));
        assert_eq!(controller.front_fighter(), Side::Player);
        controller
            .context_mut()
            .player
            .set_position(Vec2::new(60.0, 40.0));
        assert_eq!(controller.front_fighter(), Side::Opponent);
    }

    #[test]
    fn seeded_matches_replay_identically() {
        let config = MatchConfig::default();
        let mut a = MatchController::seeded(&config, 42);
        let mut b = MatchController::seeded(&config, 42);

        for frame in 0..600 {
            if frame % 20 == 0 {
                a.apply(Command::Punch);
                b.apply(Command::Punch);
            }
            a.tick(1.0 / 60.0);
            b.tick(1.0 / 60.0);
            assert_eq!(a.opponent().position(), b.opponent().position());
            assert_eq!(a.opponent().action(), b.opponent().action());
            assert_eq!(a.player().life(), b.player().life());
        }
    }

    #[test]
    fn life_stays_in_range_over_a_long_match() {
        let config = MatchConfig {
            difficulty: Difficulty::Hard,
            ..default()
        };
        let mut controller = MatchController::seeded(&config, 7);

        for frame in 0..20_000 {
            match frame % 30 {
                0 => controller.apply(Command::MoveRight),
                10 => controller.apply(Command::Kick),
                20 => controller.apply(Command::StopMovingRight),
                _ => {}
            }
            controller.apply(Command::Restart);
            controller.tick(1.0 / 60.0);

            for side in [Side::Player, Side::Opponent] {
                let life = controller.fighter(side).life();
                assert!((0.0..=MAX_LIFE).contains(&life));
            }
        }
    }
}
