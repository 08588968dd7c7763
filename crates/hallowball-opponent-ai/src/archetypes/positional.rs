//! Positional (striker) archetype: race, set up the sweet band, disengage.

use rand_chacha::ChaCha8Rng;

use hallowball_core::constants::{
    POSITIONAL_BAND_MAX, POSITIONAL_BAND_MIN, POSITIONAL_DISENGAGE_PROB,
    POSITIONAL_DISENGAGE_RADIUS, POSITIONAL_RACE_PROB, POSITIONAL_SETUP_PROB,
};
use hallowball_core::enums::{ActionKind, ArchetypeTag, Possession};
use hallowball_core::intent::IntentFrame;
use hallowball_core::types::{axis_away, axis_toward};

use crate::budget::ActionBudget;

use super::{ArchetypeStrategy, Scenario, StrategyContext};

pub struct Positional;

impl ArchetypeStrategy for Positional {
    fn tag(&self) -> ArchetypeTag {
        ArchetypeTag::Positional
    }

    fn match_scenario(&self, ctx: &StrategyContext) -> Option<Scenario> {
        // Race: grounded free ball the opponent would win on foot speed.
        if ctx.possession == Possession::Free
            && !ctx.ball_incoming
            && ctx.opponent_to_ball < ctx.self_to_ball
        {
            return Some(Scenario::Race);
        }
        // Setup: holding with special charged but range outside the band.
        if ctx.possession == Possession::Ours && ctx.ultimate_charge >= 1.0 {
            let in_band =
                (POSITIONAL_BAND_MIN..=POSITIONAL_BAND_MAX).contains(&ctx.self_to_opponent);
            if !in_band && ctx.self_to_opponent.is_finite() {
                return Some(Scenario::Setup);
            }
        }
        // Disengage: holding opponent on top of us, or a ball inbound.
        let opponent_pressuring = ctx.possession == Possession::Opponent
            && ctx.self_to_opponent < POSITIONAL_DISENGAGE_RADIUS;
        let ball_inbound = ctx.ball_incoming && ctx.self_to_ball < POSITIONAL_DISENGAGE_RADIUS;
        if opponent_pressuring || ball_inbound {
            return Some(Scenario::Disengage);
        }
        None
    }

    fn trigger_probability(&self, scenario: Scenario) -> f32 {
        match scenario {
            Scenario::Race => POSITIONAL_RACE_PROB,
            Scenario::Setup => POSITIONAL_SETUP_PROB,
            Scenario::Disengage => POSITIONAL_DISENGAGE_PROB,
            _ => 0.0,
        }
    }

    fn execute(
        &self,
        scenario: Scenario,
        ctx: &StrategyContext,
        budget: &mut ActionBudget,
        _rng: &mut ChaCha8Rng,
        intent: &mut IntentFrame,
    ) {
        match scenario {
            Scenario::Race => {
                if let Some(ball) = ctx.ball_position {
                    intent.move_axis = axis_toward(ctx.self_position.x, ball.x);
                }
                if budget.try_consume(ActionKind::Dash) {
                    intent.dash_requested = true;
                }
            }
            Scenario::Setup => {
                if let Some(opp) = ctx.opponent_position {
                    // Burst toward the band edge we are on the wrong side of.
                    intent.move_axis = if ctx.self_to_opponent > POSITIONAL_BAND_MAX {
                        axis_toward(ctx.self_position.x, opp.x)
                    } else {
                        axis_away(ctx.self_position.x, opp.x)
                    };
                }
                if budget.try_consume(ActionKind::Dash) {
                    intent.dash_requested = true;
                }
            }
            Scenario::Disengage => {
                let threat_x = if ctx.ball_incoming {
                    ctx.ball_position.map(|b| b.x)
                } else {
                    ctx.opponent_position.map(|o| o.x)
                };
                if let Some(x) = threat_x {
                    intent.move_axis = axis_away(ctx.self_position.x, x);
                }
                if budget.try_consume(ActionKind::Dash) {
                    intent.dash_requested = true;
                }
            }
            _ => {}
        }
    }
}
