//! Opponent module - the AI that fights the player.

mod dice;
mod policy;
mod tuning;

pub use dice::DecisionRng;
#[cfg(test)]
pub(crate) use dice::ScriptedRng;
pub use policy::OpponentPolicy;
pub use tuning::*;
