//! Combat module - contact detection, hits, blocking and hit effects.

mod effects;
mod resolver;

pub use effects::*;
pub use resolver::*;
