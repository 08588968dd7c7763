//! Read-only view of the arena, injected into the decision engine.
//!
//! The engine never looks entities up in a live scene; the host implements
//! `WorldView` over whatever scene graph or replication state it owns. This
//! keeps decision passes deterministic and unit-testable without a running
//! game. Implementations must tolerate concurrent read access from multiple
//! brains; the engine never mutates the view.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::Possession;

/// Snapshot of the opposing actor for one decision tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OpponentView {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Unit-ish facing direction; need not be normalized.
    pub forward: Vec3,
}

/// Snapshot of the contested ball for one decision tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BallView {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Height of the ball above the ground plane (units).
    pub height_above_ground: f32,
    pub possession: Possession,
}

/// The controlled actor's own stats for one decision tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelfStats {
    pub position: Vec3,
    pub forward: Vec3,
    /// Remaining health fraction, 0.0–1.0.
    pub health_pct: f32,
    /// Ultimate charge fraction, 0.0–1.0.
    pub ultimate_charge: f32,
    /// Trick-throw charge fraction, 0.0–1.0.
    pub trick_charge: f32,
    /// Treat-throw charge fraction, 0.0–1.0.
    pub treat_charge: f32,
}

/// Read-only world queries consumed by the decision engine.
///
/// `opponent` and `ball` return `None` while the entity is transiently
/// absent (destroyed, respawning); downstream logic treats that as
/// "no threat, no opportunity" rather than an error.
pub trait WorldView {
    fn opponent(&self) -> Option<OpponentView>;
    fn ball(&self) -> Option<BallView>;
    fn self_stats(&self) -> SelfStats;
}
