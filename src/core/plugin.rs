//! Core plugin that registers the match events.

use bevy::prelude::*;

use super::events::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Match events (hits, round results, pause hooks)
/// - Audio cues for the sound collaborator
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Register global events
            .add_event::<MatchEvent>()
            .add_event::<AudioCue>()

            // Audio cues are derived from match events
            .add_systems(PostUpdate, emit_audio_cues);
    }
}

/// Translate match events into audio cues.
fn emit_audio_cues(mut events: EventReader<MatchEvent>, mut cues: EventWriter<AudioCue>) {
    for event in events.read() {
        if let Some(cue) = event.audio_cue() {
            cues.send(cue);
        }
    }
}
