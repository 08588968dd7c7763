//! Behavior finite state machine.
//!
//! Pure function that computes the next high-level state from the current
//! tick's snapshot. No hidden history: transitions depend only on the
//! context passed in, which makes every (state, snapshot) combination
//! directly testable.

use hallowball_core::constants::{BALL_REACHABLE_RADIUS, PANIC_RADIUS};
use hallowball_core::enums::{AiState, Possession};

use crate::threat::ThreatSnapshot;

/// Input to the state machine for a single decision tick.
#[derive(Debug, Clone)]
pub struct StateContext {
    pub state: AiState,
    /// Whether the ball currently exists in the world.
    pub ball_present: bool,
    pub possession: Possession,
    /// Distance from the actor to the ball; meaningless when absent.
    pub ball_distance: f32,
    /// Threat after mistake injection and reaction-delay gating.
    pub threat: ThreatSnapshot,
}

/// Output from the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateUpdate {
    pub new_state: AiState,
    pub state_changed: bool,
}

/// Evaluate one transition. Exactly one next state applies for every
/// reachable combination; no state is terminal.
pub fn evaluate(ctx: &StateContext) -> StateUpdate {
    let new_state = match ctx.state {
        AiState::SeekBall => next_from_seek(ctx),
        AiState::ApproachAndPickup => next_from_approach(ctx),
        AiState::EngageWithBall => next_from_engage(ctx),
        AiState::Evade => next_from_evade(ctx),
    };
    StateUpdate {
        new_state,
        state_changed: new_state != ctx.state,
    }
}

fn next_from_seek(ctx: &StateContext) -> AiState {
    if ctx.threat.has_threat {
        return AiState::Evade;
    }
    if ctx.possession == Possession::Ours {
        return AiState::EngageWithBall;
    }
    if ctx.ball_present
        && ctx.possession == Possession::Free
        && ctx.ball_distance <= BALL_REACHABLE_RADIUS
    {
        return AiState::ApproachAndPickup;
    }
    AiState::SeekBall
}

fn next_from_approach(ctx: &StateContext) -> AiState {
    if ctx.possession == Possession::Ours {
        return AiState::EngageWithBall;
    }
    if ctx.threat.has_threat {
        return AiState::Evade;
    }
    // Ball vanished or the opponent beat us to the pickup.
    if !ctx.ball_present || ctx.possession == Possession::Opponent {
        return AiState::SeekBall;
    }
    AiState::ApproachAndPickup
}

fn next_from_engage(ctx: &StateContext) -> AiState {
    if ctx.possession != Possession::Ours {
        return AiState::SeekBall;
    }
    // Holding the ball, evasion only preempts inside the panic radius;
    // otherwise the attack logic runs and aggressive actors may trade.
    if ctx.threat.has_threat && ctx.threat.threat_distance < PANIC_RADIUS {
        return AiState::Evade;
    }
    AiState::EngageWithBall
}

fn next_from_evade(ctx: &StateContext) -> AiState {
    if !ctx.threat.has_threat {
        return AiState::SeekBall;
    }
    AiState::Evade
}
