//! Ring Fighter - Entry Point
//!
//! Controls:
//! - WASD / Arrows: Move
//! - Space: Block
//! - J / K: Punch / Kick
//! - P / Escape: Pause/Unpause
//! - Enter: Skip round intro, play again
//! - N: Change difficulty

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ring Fighter".to_string(),
                resolution: (960.0, 540.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(ring_fighter::RingFighterPlugin)

        .run();
}
