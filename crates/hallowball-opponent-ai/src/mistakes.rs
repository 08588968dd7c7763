//! Mistake injection: calibrated imperfection.
//!
//! Two independent rolls per decision category: a perception miss drops a
//! real threat for one tick, a hesitation skips an otherwise-ready throw.
//! Keeping the categories separate lets profile tiers tune false-negative
//! perception and decision hesitation independently.

use rand::Rng;

use crate::profiles::DifficultyProfile;

/// Per-actor mistake probabilities, fixed at spawn from the profile.
#[derive(Debug, Clone, Copy)]
pub struct MistakeInjector {
    threat_miss_chance: f32,
    hesitation_chance: f32,
}

impl MistakeInjector {
    pub fn from_profile(profile: &DifficultyProfile) -> Self {
        Self {
            threat_miss_chance: profile.threat_miss_chance,
            hesitation_chance: profile.hesitation_chance,
        }
    }

    /// Roll: does the actor fail to perceive a real threat this tick?
    pub fn misses_threat<R: Rng>(&self, rng: &mut R) -> bool {
        rng.gen::<f32>() < self.threat_miss_chance
    }

    /// Roll: does the actor hesitate on a ready throw this tick?
    pub fn hesitates<R: Rng>(&self, rng: &mut R) -> bool {
        rng.gen::<f32>() < self.hesitation_chance
    }
}
