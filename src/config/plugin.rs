//! Config plugin - loads match tuning at startup.

use bevy::prelude::*;

use super::data::{load_match_config, MatchConfig};

/// Loads `assets/data/match.ron` into the `MatchConfig` resource.
pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MatchConfig>()
            .add_systems(Startup, load_match_config);
    }
}
