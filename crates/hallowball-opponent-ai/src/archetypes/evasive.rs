//! Evasive (trickster) archetype: dodge, steal, ambush.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use hallowball_core::constants::{
    EVASIVE_AMBUSH_MIN_RANGE, EVASIVE_AMBUSH_PROB, EVASIVE_DODGE_PROB, EVASIVE_DODGE_RADIUS,
    EVASIVE_STEAL_PROB, EVASIVE_STEAL_RADIUS,
};
use hallowball_core::enums::{ActionKind, ArchetypeTag, Possession};
use hallowball_core::intent::IntentFrame;
use hallowball_core::types::{axis_away, axis_toward};

use crate::budget::ActionBudget;

use super::{ArchetypeStrategy, Scenario, StrategyContext};

pub struct Evasive;

impl ArchetypeStrategy for Evasive {
    fn tag(&self) -> ArchetypeTag {
        ArchetypeTag::Evasive
    }

    fn match_scenario(&self, ctx: &StrategyContext) -> Option<Scenario> {
        // Dodge: ball closing within a tight radius.
        if ctx.ball_incoming && ctx.self_to_ball < EVASIVE_DODGE_RADIUS {
            return Some(Scenario::Dodge);
        }
        // Steal: free ball, opponent strictly closer but still contestable.
        if ctx.possession == Possession::Free
            && !ctx.ball_incoming
            && ctx.opponent_to_ball < ctx.self_to_ball
            && ctx.opponent_to_ball < EVASIVE_STEAL_RADIUS
        {
            return Some(Scenario::Steal);
        }
        // Ambush: holding the ball with the opponent far away.
        if ctx.possession == Possession::Ours && ctx.self_to_opponent > EVASIVE_AMBUSH_MIN_RANGE {
            return Some(Scenario::Ambush);
        }
        None
    }

    fn trigger_probability(&self, scenario: Scenario) -> f32 {
        match scenario {
            Scenario::Dodge => EVASIVE_DODGE_PROB,
            Scenario::Steal => EVASIVE_STEAL_PROB,
            Scenario::Ambush => EVASIVE_AMBUSH_PROB,
            _ => 0.0,
        }
    }

    fn execute(
        &self,
        scenario: Scenario,
        ctx: &StrategyContext,
        budget: &mut ActionBudget,
        rng: &mut ChaCha8Rng,
        intent: &mut IntentFrame,
    ) {
        match scenario {
            Scenario::Dodge => {
                if let Some(ball) = ctx.ball_position {
                    intent.move_axis = axis_away(ctx.self_position.x, ball.x);
                }
                if budget.try_consume(ActionKind::Dash) {
                    intent.dash_requested = true;
                }
            }
            Scenario::Steal => {
                if let Some(ball) = ctx.ball_position {
                    intent.move_axis = axis_toward(ctx.self_position.x, ball.x);
                }
                if budget.try_consume(ActionKind::Dash) {
                    intent.dash_requested = true;
                }
            }
            Scenario::Ambush => {
                if let Some(opp) = ctx.opponent_position {
                    intent.move_axis = axis_toward(ctx.self_position.x, opp.x);
                }
                // Approach erratically: mix in hops so the closing line
                // is harder to read.
                if rng.gen_bool(0.5) && budget.try_consume(ActionKind::Jump) {
                    intent.jump_requested = true;
                }
            }
            _ => {}
        }
    }
}
