//! Match flow: rounds, timer, commands and the per-frame driver.

mod commands;
mod context;
mod controller;
mod input;
mod plugin;
mod rules;

pub use commands::{Command, MenuButton};
pub use context::MatchContext;
pub use controller::MatchController;
pub use input::{commands_from_keyboard, keyboard_commands};
pub use plugin::GamePlugin;
pub use rules::*;
