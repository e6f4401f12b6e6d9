//! Events emitted by the match simulation.
//!
//! The controller queues these while it ticks; the game plugin forwards them
//! into Bevy's event queues once per frame so that renderers and the audio
//! collaborator can react without touching simulation state.

use bevy::prelude::*;

use super::states::{Difficulty, Outcome, Side};

/// Sound cues for the external audio collaborator.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// An unblocked hit landed
    Hit,
    /// A hit landed on a blocking fighter
    Block,
    /// The player won a round
    Cheer,
    /// The player lost a round
    Boo,
    /// A menu button was clicked
    Click,
}

/// Discrete things that happened during a tick.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum MatchEvent {
    /// A new match began (round counters reset)
    GameStarted,
    /// Fighters were reset for a new round
    RoundStarted { round: u32 },
    /// The start delay elapsed and fighters may act
    FightStarted { round: u32 },
    /// An attack connected with an unguarded fighter.
    ///
    /// `splatter` is where the blood effect spawned, if blood is enabled.
    HitLanded {
        defender: Side,
        splatter: Option<Vec2>,
    },
    /// An attack connected with a blocking fighter
    HitBlocked { defender: Side },
    /// The player took the round
    RoundWon { round: u32 },
    /// The opponent took the round
    RoundLost { round: u32 },
    /// The match is decided
    GameOver { outcome: Outcome },
    /// Game sounds should pause
    Paused,
    /// Game sounds should resume
    Resumed,
    DifficultyChanged(Difficulty),
    /// A menu button did something
    UiClick,
}

impl MatchEvent {
    /// The sound this event should trigger, if any.
    pub fn audio_cue(&self) -> Option<AudioCue> {
        match self {
            MatchEvent::HitLanded { .. } => Some(AudioCue::Hit),
            MatchEvent::HitBlocked { .. } => Some(AudioCue::Block),
            MatchEvent::RoundWon { .. } => Some(AudioCue::Cheer),
            MatchEvent::RoundLost { .. } => Some(AudioCue::Boo),
            MatchEvent::UiClick => Some(AudioCue::Click),
            _ => None,
        }
    }
}
