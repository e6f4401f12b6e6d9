//! Fighter module - per-fighter action states, movement and life.

mod state;
mod tuning;

pub use state::{ActionState, Facing, Fighter};
pub use tuning::*;
