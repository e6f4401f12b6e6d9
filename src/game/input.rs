//! Keyboard bindings for the human fighter.
//!
//! - WASD / arrows: move
//! - Space: block (hold)
//! - J: punch, K: kick
//! - P / Escape: pause or resume
//! - Enter: skip the round delay, or restart after game over
//! - N: next difficulty

use bevy::prelude::*;

use super::commands::Command;
use super::controller::MatchController;

/// Held-key bindings: (keys, on press, on release).
const HOLD_BINDINGS: [(&[KeyCode], Command, Command); 5] = [
    (
        &[KeyCode::KeyA, KeyCode::ArrowLeft],
        Command::MoveLeft,
        Command::StopMovingLeft,
    ),
    (
        &[KeyCode::KeyD, KeyCode::ArrowRight],
        Command::MoveRight,
        Command::StopMovingRight,
    ),
    (
        &[KeyCode::KeyW, KeyCode::ArrowUp],
        Command::MoveUp,
        Command::StopMovingUp,
    ),
    (
        &[KeyCode::KeyS, KeyCode::ArrowDown],
        Command::MoveDown,
        Command::StopMovingDown,
    ),
    (&[KeyCode::Space], Command::Block, Command::StopBlocking),
];

/// One-shot bindings fired on press.
const TAP_BINDINGS: [(&[KeyCode], Command); 5] = [
    (&[KeyCode::KeyJ], Command::Punch),
    (&[KeyCode::KeyK], Command::Kick),
    (&[KeyCode::KeyP, KeyCode::Escape], Command::TogglePause),
    (&[KeyCode::Enter], Command::SkipDelay),
    (&[KeyCode::KeyN], Command::CycleDifficulty),
];

/// Translate this frame's key transitions into controller commands.
pub fn commands_from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Vec<Command> {
    let mut commands = Vec::new();

    for (keys, press, release) in HOLD_BINDINGS {
        if keyboard.any_just_pressed(keys.iter().copied()) {
            commands.push(press);
        }
        if keyboard.any_just_released(keys.iter().copied()) {
            commands.push(release);
        }
    }

    for (keys, command) in TAP_BINDINGS {
        if keyboard.any_just_pressed(keys.iter().copied()) {
            commands.push(command);
        }
    }

    // Enter doubles as "play again" on the game-over screen.
    if keyboard.just_pressed(KeyCode::Enter) {
        commands.push(Command::Restart);
    }

    commands
}

/// Feed keyboard input to the match.
pub fn keyboard_commands(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut controller: ResMut<MatchController>,
) {
    for command in commands_from_keyboard(&keyboard) {
        controller.apply(command);
    }
}
