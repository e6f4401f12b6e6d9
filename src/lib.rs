//! Ring Fighter - a two-fighter arcade boxing match in Bevy.
//!
//! A human fighter and an AI opponent trade punches and kicks inside a
//! trapezoid ring over a best-of-three match with a round clock.
//!
//! # Architecture
//!
//! The simulation is plain Rust owned by a single `MatchController`
//! resource; Bevy plugins only load config, feed input and forward events.
//!
//! - **Core**: Game/round states, match events, audio cues
//! - **Config**: RON tuning data
//! - **Arena**: Ring bounds
//! - **Fighter**: Per-fighter action state machine
//! - **Combat**: Contact, damage, blocking, blood effects
//! - **Opponent**: AI decision loop
//! - **Game**: Round flow, commands, keyboard input

pub mod arena;
pub mod combat;
pub mod config;
pub mod core;
pub mod fighter;
pub mod game;
pub mod opponent;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct RingFighterPlugin;

impl Plugin for RingFighterPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core events (must be first)
            .add_plugins(core::CorePlugin)

            // Tuning data
            .add_plugins(config::ConfigPlugin)

            // Match flow
            .add_plugins(game::GamePlugin);
    }
}
