//! Action economy: a regenerating budget that caps action output.
//!
//! Two limits apply to every discrete action: a stamina-like pool with fixed
//! per-action costs, and a minimum interval between issued actions derived
//! from the profile's `max_actions_per_second`. Failed requests mutate
//! nothing; the requested action simply drops from the intent frame.

use serde::{Deserialize, Serialize};

use hallowball_core::constants::{
    BUDGET_MAX, BUDGET_REGEN_PER_SEC, COST_ABILITY, COST_DASH, COST_JUMP,
};
use hallowball_core::enums::ActionKind;

/// Fixed budget cost of an action category.
pub fn action_cost(kind: ActionKind) -> f32 {
    match kind {
        ActionKind::Jump => COST_JUMP,
        ActionKind::Dash => COST_DASH,
        ActionKind::Ability => COST_ABILITY,
    }
}

/// Per-actor regenerating action budget.
///
/// Invariant: `0 ≤ current ≤ max` after every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionBudget {
    current: f32,
    max: f32,
    regen_per_sec: f32,
    /// Minimum seconds between successful consumes (1 / max actions per sec).
    min_action_interval: f32,
    /// Seconds since the last successful consume, saturating.
    since_last_action: f32,
}

impl Default for ActionBudget {
    fn default() -> Self {
        Self::new(BUDGET_MAX, BUDGET_REGEN_PER_SEC, f32::INFINITY)
    }
}

impl ActionBudget {
    /// Budget with an explicit pool size, regen rate, and action rate cap.
    pub fn new(max: f32, regen_per_sec: f32, max_actions_per_second: f32) -> Self {
        let min_action_interval = if max_actions_per_second > 0.0 {
            1.0 / max_actions_per_second
        } else {
            0.0
        };
        Self {
            current: max,
            max,
            regen_per_sec,
            min_action_interval,
            // Start ready: the first action is never rate-blocked.
            since_last_action: min_action_interval,
        }
    }

    /// Standard pool limits with the given action rate cap.
    pub fn with_rate_cap(max_actions_per_second: f32) -> Self {
        Self::new(BUDGET_MAX, BUDGET_REGEN_PER_SEC, max_actions_per_second)
    }

    /// Advance time: refill the pool (clamped to max) and age the rate gate.
    pub fn regenerate(&mut self, dt_secs: f32) {
        if dt_secs <= 0.0 {
            return;
        }
        self.current = (self.current + self.regen_per_sec * dt_secs).clamp(0.0, self.max);
        self.since_last_action = (self.since_last_action + dt_secs).min(f32::MAX);
    }

    /// Try to pay for an action. Returns `false` without mutation when the
    /// pool is short or actions are being issued faster than the rate cap.
    pub fn try_consume(&mut self, kind: ActionKind) -> bool {
        if self.since_last_action < self.min_action_interval {
            return false;
        }
        let cost = action_cost(kind);
        if self.current < cost {
            return false;
        }
        self.current -= cost;
        self.since_last_action = 0.0;
        true
    }

    /// Current stored budget.
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Pool capacity.
    pub fn max(&self) -> f32 {
        self.max
    }

    #[cfg(test)]
    pub fn set_current_for_test(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max);
    }
}
