//! Spatial helpers shared by threat assessment and steering.
//!
//! The arena is a side-view stage: actors move along the x axis, the ball
//! travels in full 3D (y is up). All helpers are pure functions over
//! `glam::Vec3` so the decision crate stays free of engine types.

use glam::Vec3;

/// Alignment of `forward` with the direction from `from` toward `to`.
///
/// Returns the dot product of the normalized vectors, in [-1, 1];
/// 0.0 when the two points coincide.
pub fn facing_alignment(forward: Vec3, from: Vec3, to: Vec3) -> f32 {
    let dir = (to - from).normalize_or_zero();
    forward.normalize_or_zero().dot(dir)
}

/// Whether `velocity` is carrying a point at `from` closer to `target`.
pub fn is_closing(from: Vec3, velocity: Vec3, target: Vec3) -> bool {
    velocity.dot(target - from) > 0.0
}

/// Movement-axis command steering from `from_x` toward `to_x`.
///
/// Full-speed ±1.0 outside the dead zone, 0.0 inside it.
pub fn axis_toward(from_x: f32, to_x: f32) -> f32 {
    let dx = to_x - from_x;
    if dx.abs() < crate::constants::MOVE_DEADZONE {
        0.0
    } else {
        dx.signum()
    }
}

/// Movement-axis command steering directly away from `threat_x`.
pub fn axis_away(from_x: f32, threat_x: f32) -> f32 {
    let dx = from_x - threat_x;
    // No dead zone when fleeing: even a grazing threat deserves distance.
    // A coincident threat pushes in the positive direction arbitrarily.
    if dx == 0.0 {
        1.0
    } else {
        dx.signum()
    }
}
