//! Threat assessment: per-tick judgment of immediate danger.
//!
//! Pure function over world snapshots; recomputed every decision tick and
//! never persisted. Two sources of danger: a ball-holding opponent in range
//! (with the dual distance/facing rule), and the ball itself airborne and
//! closing on the actor.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use hallowball_core::constants::{
    BALL_GROUNDED_HEIGHT, FACING_DOT_THRESHOLD, POINT_BLANK_RADIUS, THREAT_RADIUS,
};
use hallowball_core::enums::Possession;
use hallowball_core::types::{facing_alignment, is_closing};
use hallowball_core::world::{BallView, OpponentView};

/// Ephemeral per-tick threat record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreatSnapshot {
    pub has_threat: bool,
    /// Distance to the nearest threat source (opponent or ball), units.
    pub threat_distance: f32,
    pub opponent_facing_actor: bool,
    /// Height above ground of an incoming airborne ball, if any.
    pub incoming_object_height: Option<f32>,
    /// Arena-axis x of the nearest threat source, for fleeing away from it.
    pub threat_x: f32,
}

/// Evaluate threat for one decision tick.
///
/// A missing opponent or ball contributes no threat; the snapshot defaults
/// to "clear" rather than erroring.
pub fn assess(
    self_position: Vec3,
    opponent: Option<&OpponentView>,
    ball: Option<&BallView>,
) -> ThreatSnapshot {
    let mut snapshot = ThreatSnapshot::default();

    if let Some(opp) = opponent {
        let distance = self_position.distance(opp.position);
        let facing =
            facing_alignment(opp.forward, opp.position, self_position) > FACING_DOT_THRESHOLD;
        snapshot.opponent_facing_actor = facing;

        let holds_ball = matches!(ball.map(|b| b.possession), Some(Possession::Opponent));
        // Point-blank always counts regardless of aim; beyond that the
        // opponent must actually be facing us to plausibly connect.
        if holds_ball && distance < THREAT_RADIUS && (facing || distance < POINT_BLANK_RADIUS) {
            snapshot.has_threat = true;
            snapshot.threat_distance = distance;
            snapshot.threat_x = opp.position.x;
        }
    }

    if let Some(b) = ball {
        let airborne =
            b.possession == Possession::Free && b.height_above_ground > BALL_GROUNDED_HEIGHT;
        if airborne && is_closing(b.position, b.velocity, self_position) {
            let distance = self_position.distance(b.position);
            if !snapshot.has_threat || distance < snapshot.threat_distance {
                snapshot.threat_distance = distance;
                snapshot.threat_x = b.position.x;
            }
            snapshot.has_threat = true;
            snapshot.incoming_object_height = Some(b.height_above_ground);
        }
    }

    snapshot
}
