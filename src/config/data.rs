//! Match tuning data and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;
use crate::arena::RingBounds;
use crate::combat::{BloodTuning, ContactRules};
use crate::core::Difficulty;
use crate::fighter::{FighterTuning, MAX_LIFE};
use crate::game::RoundRules;
use crate::opponent::AiTuning;

/// Where the match tuning file lives, relative to the working directory.
pub const MATCH_CONFIG_PATH: &str = "assets/data/match.ron";

/// Every tunable number in a match.
///
/// All sections default to the stock values, so a data file only needs the
/// fields it changes.
#[derive(Resource, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct MatchConfig {
    pub player_name: String,
    pub opponent_name: String,
    /// Difficulty a fresh match starts on
    pub difficulty: Difficulty,
    /// Fixed seed for the opponent's decisions; random when absent
    pub seed: Option<u64>,
    pub ring: RingBounds,
    pub fighter: FighterTuning,
    pub contact: ContactRules,
    pub rounds: RoundRules,
    pub ai: AiTuning,
    pub blood: BloodTuning,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_name: "PLAYER".to_string(),
            opponent_name: "OPPONENT".to_string(),
            difficulty: Difficulty::default(),
            seed: None,
            ring: RingBounds::default(),
            fighter: FighterTuning::default(),
            contact: ContactRules::default(),
            rounds: RoundRules::default(),
            ai: AiTuning::default(),
            blood: BloodTuning::default(),
        }
    }
}

fn invalid(field: &'static str, details: impl Into<String>) -> DataLoadError {
    DataLoadError::InvalidValue {
        field,
        details: details.into(),
    }
}

impl MatchConfig {
    /// Parse and validate a RON document. `path` is only used in errors.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let config = ron::from_str::<MatchConfig>(contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a RON file.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(DataLoadError::FileNotFound(display));
        }

        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;
        Self::from_ron(&display, &contents)
    }

    /// Every float in the document, by field name.
    fn float_fields(&self) -> [(&'static str, f32); 31] {
        let (ring, fighter, contact) = (&self.ring, &self.fighter, &self.contact);
        let (rounds, ai, blood) = (&self.rounds, &self.ai, &self.blood);
        [
            ("ring.min_x", ring.min_x),
            ("ring.max_x", ring.max_x),
            ("ring.min_y", ring.min_y),
            ("ring.max_y", ring.max_y),
            ("ring.slope", ring.slope),
            ("fighter.movement_speed", fighter.movement_speed),
            ("fighter.max_life", fighter.max_life),
            ("fighter.block_damage_factor", fighter.block_damage_factor),
            ("fighter.punch.duration", fighter.punch.duration),
            ("fighter.punch.active_start", fighter.punch.active_start),
            ("fighter.punch.active_end", fighter.punch.active_end),
            ("fighter.kick.duration", fighter.kick.duration),
            ("fighter.kick.active_start", fighter.kick.active_start),
            ("fighter.kick.active_end", fighter.kick.active_end),
            ("fighter.hurt_duration", fighter.hurt_duration),
            ("contact.distance_x", contact.distance_x),
            ("contact.distance_y", contact.distance_y),
            ("contact.hit_strength", contact.hit_strength),
            ("rounds.start_delay", rounds.start_delay),
            ("rounds.end_delay", rounds.end_delay),
            ("rounds.max_round_time", rounds.max_round_time),
            ("rounds.critical_round_time", rounds.critical_round_time),
            ("rounds.player_start_x", rounds.player_start_x),
            ("rounds.opponent_start_x", rounds.opponent_start_x),
            ("rounds.start_y", rounds.start_y),
            ("ai.non_contact_decision_delay", ai.non_contact_decision_delay),
            ("ai.block_chance", ai.block_chance),
            ("ai.attack_chance", ai.attack_chance),
            ("blood.offset_x", blood.offset_x),
            ("blood.offset_y", blood.offset_y),
            ("blood.lifetime", blood.lifetime),
        ]
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        for (field, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {}", value)));
            }
        }
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let tuning = self.ai.for_difficulty(difficulty);
            if !tuning.pursue_chance.is_finite() || !tuning.contact_decision_delay.is_finite() {
                return Err(invalid("ai", format!("{} tuning must be finite", difficulty.label())));
            }
        }

        let ring = &self.ring;
        if ring.slope <= 0.0 {
            return Err(invalid("ring.slope", format!("must be positive, got {}", ring.slope)));
        }
        if ring.min_y > ring.max_y {
            return Err(invalid("ring", "min_y is above max_y"));
        }
        let (left, right) = ring.x_range(ring.max_y);
        if left > right {
            return Err(invalid("ring", "ropes cross before the back of the ring"));
        }

        let rounds = &self.rounds;
        if rounds.max_rounds == 0 || rounds.max_rounds % 2 == 0 {
            return Err(invalid(
                "rounds.max_rounds",
                format!("must be odd and non-zero, got {}", rounds.max_rounds),
            ));
        }
        if rounds.max_round_time <= 0.0 {
            return Err(invalid("rounds.max_round_time", "must be positive"));
        }
        if rounds.start_delay < 0.0 || rounds.end_delay < 0.0 {
            return Err(invalid("rounds", "delays cannot be negative"));
        }

        let fighter = &self.fighter;
        if fighter.max_life <= 0.0 || fighter.max_life > MAX_LIFE {
            return Err(invalid(
                "fighter.max_life",
                format!("must be in (0, {}], got {}", MAX_LIFE, fighter.max_life),
            ));
        }
        if !(0.0..=1.0).contains(&fighter.block_damage_factor) {
            return Err(invalid("fighter.block_damage_factor", "must be within [0, 1]"));
        }
        for (field, timing) in [("fighter.punch", fighter.punch), ("fighter.kick", fighter.kick)] {
            if timing.duration <= 0.0 || timing.active_start > timing.active_end {
                return Err(invalid(field, "needs a positive duration and an ordered window"));
            }
        }

        if self.contact.distance_x < 0.0 || self.contact.distance_y < 0.0 {
            return Err(invalid("contact", "reach cannot be negative"));
        }
        if self.contact.hit_strength < 0.0 {
            return Err(invalid("contact.hit_strength", "cannot be negative"));
        }
        Ok(())
    }
}

/// Load the match tuning file into the `MatchConfig` resource.
///
/// Falls back to the stock tuning when the file is missing or broken.
pub fn load_match_config(mut config: ResMut<MatchConfig>) {
    match MatchConfig::load(Path::new(MATCH_CONFIG_PATH)) {
        Ok(loaded) => {
            info!(
                "Loaded match config: best of {} on {}",
                loaded.rounds.max_rounds,
                loaded.difficulty.label()
            );
            *config = loaded;
        }
        Err(DataLoadError::FileNotFound(path)) => {
            warn!("Match config not found at {}, using defaults", path);
        }
        Err(e) => {
            error!("Failed to load match config: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let config = MatchConfig::from_ron(
            "test.ron",
            "(difficulty: Hard, seed: Some(9), rounds: (max_rounds: 5), ai: (block_chance: 0.5))",
        )
        .unwrap();

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.rounds.max_rounds, 5);
        assert_eq!(config.rounds.max_round_time, 99.99);
        assert_eq!(config.ai.block_chance, 0.5);
        assert_eq!(config.ai.attack_chance, 0.8);
        assert_eq!(config.ring, RingBounds::default());
    }

    #[test]
    fn even_round_count_is_rejected() {
        let err = MatchConfig::from_ron("test.ron", "(rounds: (max_rounds: 4))").unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::InvalidValue {
                field: "rounds.max_rounds",
                ..
            }
        ));
    }

    #[test]
    fn flat_ring_is_rejected() {
        let err = MatchConfig::from_ron("test.ron", "(ring: (slope: 0.0))").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { field: "ring.slope", .. }));
    }

    fn rejected_field(document: &str) -> &'static str {
        match MatchConfig::from_ron("test.ron", document) {
            Err(DataLoadError::InvalidValue { field, .. }) => field,
            other => panic!("expected an invalid value, got {other:?}"),
        }
    }

    #[test]
    fn negative_hit_strength_is_rejected() {
        assert_eq!(
            rejected_field("(contact: (hit_strength: -5.0))"),
            "contact.hit_strength"
        );
    }

    #[test]
    fn block_factor_must_be_a_fraction() {
        assert_eq!(
            rejected_field("(fighter: (block_damage_factor: 1.5))"),
            "fighter.block_damage_factor"
        );
        assert_eq!(
            rejected_field("(fighter: (block_damage_factor: -0.2))"),
            "fighter.block_damage_factor"
        );
    }

    #[test]
    fn max_life_is_capped() {
        assert_eq!(rejected_field("(fighter: (max_life: 150.0))"), "fighter.max_life");
        assert_eq!(rejected_field("(fighter: (max_life: 0.0))"), "fighter.max_life");
        assert!(MatchConfig::from_ron("test.ron", "(fighter: (max_life: 50.0))").is_ok());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(rejected_field("(ring: (min_y: NaN))"), "ring.min_y");
        assert_eq!(rejected_field("(rounds: (max_round_time: inf))"), "rounds.max_round_time");
        assert_eq!(rejected_field("(ai: (hard: (pursue_chance: NaN, contact_decision_delay: 0.01)))"), "ai");
    }

    #[test]
    fn malformed_document_reports_path() {
        let err = MatchConfig::from_ron("broken.ron", "(rounds: (").unwrap_err();
        match err {
            DataLoadError::ParseError { path, .. } => assert_eq!(path, "broken.ron"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_reported() {
        let err = MatchConfig::load(Path::new("assets/data/does_not_exist.ron")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound(_)));
    }

    #[test]
    fn shipped_config_is_valid() {
        let config = MatchConfig::load(Path::new(MATCH_CONFIG_PATH)).unwrap();
        assert_eq!(config.rounds.max_rounds, 3);
        assert_eq!(config.contact, ContactRules::default());
    }
}
