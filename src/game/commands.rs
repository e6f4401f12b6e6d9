//! Commands accepted by the match controller.

/// A discrete player or system command.
///
/// Press commands (movement, block, punch, kick) are ignored unless a round
/// is in progress and the game is running. Releases are always accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    StopMovingLeft,
    StopMovingRight,
    StopMovingUp,
    StopMovingDown,
    Block,
    StopBlocking,
    Punch,
    Kick,
    Pause,
    Resume,
    TogglePause,
    /// Cut the current start/end-of-round delay short
    SkipDelay,
    CycleDifficulty,
    /// Start a new match after game over
    Restart,
}

impl Command {
    /// Release commands are never gated on the round state.
    pub fn is_release(self) -> bool {
        matches!(
            self,
            Command::StopMovingLeft
                | Command::StopMovingRight
                | Command::StopMovingUp
                | Command::StopMovingDown
                | Command::StopBlocking
        )
    }
}

/// On-screen buttons the external UI can report clicks on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    /// Corner pause button while running
    Pause,
    /// Resume from the pause overlay
    Continue,
    /// New match from the game-over overlay
    PlayAgain,
    /// Anywhere else on screen
    Screen,
}
