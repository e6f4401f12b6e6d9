//! Game plugin - owns the match controller and drives it each frame.

use bevy::prelude::*;

use super::controller::MatchController;
use super::input::keyboard_commands;
use crate::config::{load_match_config, MatchConfig};
use crate::core::MatchEvent;

/// Game plugin - creates the match once the config is loaded, then runs
/// input, simulation and event forwarding in that order every frame.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_match.after(load_match_config))
            .add_systems(
                Update,
                (keyboard_commands, tick_match, forward_match_events)
                    .chain()
                    .run_if(resource_exists::<MatchController>),
            );
    }
}

/// Create the match from the loaded config.
fn setup_match(mut commands: Commands, config: Res<MatchConfig>) {
    let controller = match config.seed {
        Some(seed) => {
            info!("Opponent seeded with {}", seed);
            MatchController::seeded(&config, seed)
        }
        None => MatchController::from_entropy(&config),
    };
    commands.insert_resource(controller);
}

fn tick_match(time: Res<Time>, mut controller: ResMut<MatchController>) {
    controller.tick(time.delta_secs());
}

/// Publish the controller's queued events to the rest of the app.
fn forward_match_events(
    mut controller: ResMut<MatchController>,
    mut events: EventWriter<MatchEvent>,
) {
    for event in controller.drain_events() {
        events.send(event);
    }
}
