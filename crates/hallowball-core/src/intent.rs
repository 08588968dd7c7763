//! The intent frame, the engine's sole output.

use serde::{Deserialize, Serialize};

/// Desired movement and actions for one decision tick.
///
/// Produced fresh every tick and handed to the external input layer, which
/// translates it into actual movement, physics, animation, and replication.
/// Stale frames are never reused. The default value is the neutral frame
/// (no movement, no actions) emitted when the world is unavailable or a
/// decision pass faults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentFrame {
    /// Desired movement along the arena axis, in [-1, 1].
    pub move_axis: f32,
    pub jump_requested: bool,
    pub dash_requested: bool,
    pub duck_held: bool,
    pub ultimate_requested: bool,
    /// Trick-throw: the curving, feinting throw flavor.
    pub trick_requested: bool,
    /// Treat-throw: the lobbed, baiting throw flavor.
    pub treat_requested: bool,
}

impl IntentFrame {
    /// The all-false, zero-movement frame.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Whether this frame requests no movement and no actions.
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}
