//! Arena module - the ring floor fighters stand on.

mod bounds;

pub use bounds::*;
