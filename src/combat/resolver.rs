//! Contact detection and hit resolution between the two fighters.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::Side;
use crate::fighter::Fighter;

/// Fighters can reach each other within this horizontal distance.
pub const CONTACT_DISTANCE_X: f32 = 17.0;
/// Fighters can reach each other within this depth distance.
pub const CONTACT_DISTANCE_Y: f32 = 3.0;
/// Damage of a punch or kick before blocking.
pub const HIT_STRENGTH: f32 = 5.0;

/// Reach and damage rules.
///
/// Reach is a per-axis box, not a radius: the ring is wide and shallow.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactRules {
    pub distance_x: f32,
    pub distance_y: f32,
    pub hit_strength: f32,
}

impl Default for ContactRules {
    fn default() -> Self {
        Self {
            distance_x: CONTACT_DISTANCE_X,
            distance_y: CONTACT_DISTANCE_Y,
            hit_strength: HIT_STRENGTH,
        }
    }
}

impl ContactRules {
    pub fn in_contact(&self, a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() <= self.distance_x && (a.y - b.y).abs() <= self.distance_y
    }
}

/// One hit that landed during a resolve pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitReport {
    pub attacker: Side,
    pub defender: Side,
    /// Damage after blocking
    pub damage: f32,
    pub blocked: bool,
    /// The defender has no life left
    pub knockout: bool,
}

/// Applies hits between fighters in contact.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatResolver {
    rules: ContactRules,
}

impl CombatResolver {
    pub fn new(rules: ContactRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ContactRules {
        &self.rules
    }

    pub fn in_contact(&self, a: &Fighter, b: &Fighter) -> bool {
        self.rules.in_contact(a.position(), b.position())
    }

    /// Resolve one tick of combat.
    ///
    /// Both attack windows are sampled before any damage is applied, so two
    /// strikes landing on the same tick trade instead of the first one
    /// cancelling the second.
    pub fn resolve(&self, player: &mut Fighter, opponent: &mut Fighter) -> Vec<HitReport> {
        let mut hits = Vec::new();
        if !self.in_contact(player, opponent) {
            return hits;
        }

        let player_active = player.is_attack_active();
        let opponent_active = opponent.is_attack_active();

        if player_active {
            hits.push(self.strike(Side::Player, player, opponent));
        }
        if opponent_active {
            hits.push(self.strike(Side::Opponent, opponent, player));
        }
        hits
    }

    fn strike(&self, attacker_side: Side, attacker: &mut Fighter, defender: &mut Fighter) -> HitReport {
        let blocked = defender.is_blocking();
        let damage = defender.get_hit(self.rules.hit_strength);
        attacker.make_contact();

        let report = HitReport {
            attacker: attacker_side,
            defender: attacker_side.other(),
            damage,
            blocked,
            knockout: defender.has_lost(),
        };
        debug!(
            "{} hit {} for {:.1} (blocked: {}, life left: {:.1})",
            attacker.name(),
            defender.name(),
            damage,
            blocked,
            defender.life()
        );
        report
    }
}
