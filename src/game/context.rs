//! Everything a match owns, built once from the config.

use crate::arena::RingBounds;
use crate::combat::{BloodEffects, CombatResolver};
use crate::config::MatchConfig;
use crate::fighter::Fighter;
use crate::opponent::{DecisionRng, OpponentPolicy};

/// The two fighters and the services that act on them.
///
/// Owned by the `MatchController` for the lifetime of the match.
pub struct MatchContext {
    pub player: Fighter,
    pub opponent: Fighter,
    pub policy: OpponentPolicy,
    pub resolver: CombatResolver,
    pub ring: RingBounds,
    pub blood: BloodEffects,
}

impl MatchContext {
    pub fn new(config: &MatchConfig, rng: Box<dyn DecisionRng>) -> Self {
        Self {
            player: Fighter::new(config.player_name.clone(), config.fighter),
            opponent: Fighter::new(config.opponent_name.clone(), config.fighter),
            policy: OpponentPolicy::new(config.ai, config.contact, rng),
            resolver: CombatResolver::new(config.contact),
            ring: config.ring,
            blood: BloodEffects::new(config.blood),
        }
    }
}
