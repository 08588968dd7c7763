//! Duck sub-behavior, applied within Evade and EngageWithBall.
//!
//! Ducking only makes sense against a ball arriving in a narrow height
//! band; outside it the probability is cut hard so jump/dash wins instead.
//! Aggressive ball-holders play "planted": wider detection, flat high
//! probability.

use hallowball_core::constants::{
    DUCK_BAND_MAX, DUCK_BAND_MIN, DUCK_IN_BAND_FACTOR, DUCK_OUT_OF_BAND_FACTOR,
    DUCK_PROB_AGGRESSIVE_HOLDING, DUCK_RADIUS, DUCK_RADIUS_AGGRESSIVE_HOLDING,
};
use hallowball_core::enums::ArchetypeTag;

/// Whether an incoming height falls in the duck-relevant band.
pub fn in_duck_band(height_above_ground: f32) -> bool {
    (DUCK_BAND_MIN..=DUCK_BAND_MAX).contains(&height_above_ground)
}

/// Detection radius inside which an incoming ball is duck-relevant.
pub fn duck_detection_radius(archetype: ArchetypeTag, holds_ball: bool) -> f32 {
    if archetype == ArchetypeTag::Aggressive && holds_ball {
        DUCK_RADIUS_AGGRESSIVE_HOLDING
    } else {
        DUCK_RADIUS
    }
}

/// Duck probability for one trial given the incoming ball height.
///
/// `base_probability` is the profile's dodge probability; the band shaping
/// guarantees strictly lower probability outside [0.5, 2.5] than inside,
/// holding all else equal.
pub fn duck_probability(
    base_probability: f32,
    height_above_ground: f32,
    archetype: ArchetypeTag,
    holds_ball: bool,
) -> f32 {
    if archetype == ArchetypeTag::Aggressive && holds_ball {
        return DUCK_PROB_AGGRESSIVE_HOLDING;
    }
    let factor = if in_duck_band(height_above_ground) {
        DUCK_IN_BAND_FACTOR
    } else {
        DUCK_OUT_OF_BAND_FACTOR
    };
    (base_probability * factor).clamp(0.0, 1.0)
}
