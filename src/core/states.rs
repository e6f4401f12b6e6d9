//! Match, round and difficulty state definitions.
//!
//! These are plain enums owned by the match controller. The controller keeps
//! ticking while paused (with a frozen clock), so the flow is not driven by
//! Bevy `States` run conditions.

use serde::Deserialize;

/// Overall game flow for one match.
///
/// - Start `Running` when a match begins
/// - `Paused` freezes the simulation but keeps the last frame visible
/// - `GameOver` once one side has won more than half of the maximum rounds
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Active gameplay
    #[default]
    Running,
    /// Frozen; waiting for a resume command
    Paused,
    /// Match decided; waiting for a restart command
    GameOver,
}

/// Phase of the current round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum RoundState {
    /// "ROUND n" / "FIGHT!" banner; fighters cannot act
    #[default]
    Starting,
    /// Fighting; the round clock runs
    InProgress,
    /// Winner celebrates, loser slumps; fighters cannot act
    Ending,
}

/// Opponent difficulty. Cycles Easy → Medium → Hard → Easy.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The next difficulty in the cycle.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Upper-case label used by the HUD.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

/// Which corner of the ring a fighter belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Side {
    /// Human-controlled fighter
    Player,
    /// AI-controlled fighter
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Final result of a match, from the player's point of view.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    /// Text shown on the game-over overlay.
    pub fn text(self) -> &'static str {
        match self {
            Outcome::Victory => "YOU WON!",
            Outcome::Defeat => "YOU LOST!",
        }
    }
}
