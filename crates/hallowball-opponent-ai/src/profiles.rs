//! Difficulty profiles: immutable parameter bundles per tier.
//!
//! The four tiers are a built-in data table so balancing stays data-driven;
//! hosts may override any tier from external JSON. A profile is selected
//! once at actor creation and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use hallowball_core::enums::DifficultyTier;

/// Immutable difficulty parameter bundle.
///
/// The source material's single "mistake chance" is split into two
/// independently tunable probabilities: `threat_miss_chance` (a real threat
/// goes unperceived for a tick) and `hesitation_chance` (a ready throw is
/// delayed by a tick). The built-in table sets them equal per tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Seconds of continuous threat before the actor reacts to it.
    pub reaction_delay_secs: f32,
    /// Standard deviation of aim/positioning error, in degrees.
    pub aim_inaccuracy_degrees: f32,
    /// Minimum seconds between throws while holding the ball.
    pub throw_cooldown_secs: f32,
    /// Probability of committing a dash when evading, per decision tick.
    pub dodge_probability: f32,
    /// Probability of jumping over a low threat, per decision tick.
    pub jump_probability: f32,
    /// How strongly the actor favors offense; ≥ 0, 1.0 is baseline.
    pub aggression: f32,
    /// Probability that a real threat goes unperceived this tick.
    pub threat_miss_chance: f32,
    /// Probability that a ready throw is delayed this tick.
    pub hesitation_chance: f32,
    /// Divides the reaction delay; > 1.0 reacts faster.
    pub reaction_speed_multiplier: f32,
    /// Cap on discrete actions issued per second.
    pub max_actions_per_second: f32,
    /// How well the actor leads a moving ball, 0.0–1.0.
    pub prediction_accuracy: f32,
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::for_tier(DifficultyTier::Normal)
    }
}

impl DifficultyProfile {
    /// Built-in parameter table, one row per tier.
    pub fn for_tier(tier: DifficultyTier) -> Self {
        match tier {
            DifficultyTier::Easy => Self {
                reaction_delay_secs: 0.5,
                aim_inaccuracy_degrees: 12.0,
                throw_cooldown_secs: 2.5,
                dodge_probability: 0.30,
                jump_probability: 0.25,
                aggression: 0.6,
                threat_miss_chance: 0.25,
                hesitation_chance: 0.25,
                reaction_speed_multiplier: 0.7,
                max_actions_per_second: 1.5,
                prediction_accuracy: 0.5,
            },
            DifficultyTier::Normal => Self {
                reaction_delay_secs: 0.35,
                aim_inaccuracy_degrees: 8.0,
                throw_cooldown_secs: 2.0,
                dodge_probability: 0.45,
                jump_probability: 0.35,
                aggression: 1.0,
                threat_miss_chance: 0.15,
                hesitation_chance: 0.15,
                reaction_speed_multiplier: 1.0,
                max_actions_per_second: 2.0,
                prediction_accuracy: 0.7,
            },
            DifficultyTier::Hard => Self {
                reaction_delay_secs: 0.22,
                aim_inaccuracy_degrees: 4.0,
                throw_cooldown_secs: 1.4,
                dodge_probability: 0.60,
                jump_probability: 0.45,
                aggression: 1.4,
                threat_miss_chance: 0.08,
                hesitation_chance: 0.08,
                reaction_speed_multiplier: 1.3,
                max_actions_per_second: 2.5,
                prediction_accuracy: 0.85,
            },
            DifficultyTier::Nightmare => Self {
                reaction_delay_secs: 0.12,
                aim_inaccuracy_degrees: 1.5,
                throw_cooldown_secs: 0.9,
                dodge_probability: 0.80,
                jump_probability: 0.55,
                aggression: 2.0,
                threat_miss_chance: 0.03,
                hesitation_chance: 0.03,
                reaction_speed_multiplier: 1.6,
                max_actions_per_second: 3.0,
                prediction_accuracy: 0.95,
            },
        }
    }

    /// Effective reaction delay after the speed multiplier.
    pub fn effective_reaction_delay(&self) -> f32 {
        if self.reaction_speed_multiplier > 0.0 {
            self.reaction_delay_secs / self.reaction_speed_multiplier
        } else {
            self.reaction_delay_secs
        }
    }

    /// Reject profiles with non-finite or out-of-range values.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let finite = [
            self.reaction_delay_secs,
            self.aim_inaccuracy_degrees,
            self.throw_cooldown_secs,
            self.dodge_probability,
            self.jump_probability,
            self.aggression,
            self.threat_miss_chance,
            self.hesitation_chance,
            self.reaction_speed_multiplier,
            self.max_actions_per_second,
            self.prediction_accuracy,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(ProfileError::NonFinite);
        }
        let unit_ranged = [
            self.dodge_probability,
            self.jump_probability,
            self.threat_miss_chance,
            self.hesitation_chance,
            self.prediction_accuracy,
        ];
        if unit_ranged.iter().any(|v| !(0.0..=1.0).contains(v)) {
            return Err(ProfileError::ProbabilityOutOfRange);
        }
        if self.aggression < 0.0 || self.max_actions_per_second <= 0.0 {
            return Err(ProfileError::NonPositiveRate);
        }
        Ok(())
    }
}

/// Why a profile was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileError {
    NonFinite,
    ProbabilityOutOfRange,
    NonPositiveRate,
}

/// External per-tier overrides, parsed from host configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSet {
    #[serde(default)]
    tiers: HashMap<DifficultyTier, DifficultyProfile>,
}

impl ProfileSet {
    /// Parse a tier override table from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve a tier: override if present and valid, else the built-in row.
    ///
    /// An invalid override is logged and ignored so the actor stays
    /// functional rather than idle.
    pub fn resolve(&self, tier: DifficultyTier) -> DifficultyProfile {
        match self.tiers.get(&tier) {
            Some(profile) => match profile.validate() {
                Ok(()) => profile.clone(),
                Err(err) => {
                    log::warn!("invalid {tier:?} profile override ({err:?}), using built-in");
                    DifficultyProfile::for_tier(tier)
                }
            },
            None => DifficultyProfile::for_tier(tier),
        }
    }
}

/// Parse host configuration, falling back to the built-in table on error.
pub fn load_profiles(json: &str) -> ProfileSet {
    match ProfileSet::from_json(json) {
        Ok(set) => set,
        Err(err) => {
            log::warn!("malformed difficulty profile config ({err}), using built-in table");
            ProfileSet::default()
        }
    }
}
