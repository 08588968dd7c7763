//! Aggressive (tank) archetype: block, push, survive.

use rand_chacha::ChaCha8Rng;

use hallowball_core::constants::{
    AGGRESSIVE_BLOCK_PROB, AGGRESSIVE_BLOCK_RADIUS, AGGRESSIVE_PUSH_PROB, AGGRESSIVE_PUSH_RADIUS,
    AGGRESSIVE_SURVIVAL_HEALTH, AGGRESSIVE_SURVIVAL_PROB,
};
use hallowball_core::enums::{ActionKind, ArchetypeTag, Possession};
use hallowball_core::intent::IntentFrame;
use hallowball_core::types::axis_toward;

use crate::budget::ActionBudget;

use super::{ArchetypeStrategy, Scenario, StrategyContext};

pub struct Aggressive;

impl ArchetypeStrategy for Aggressive {
    fn tag(&self) -> ArchetypeTag {
        ArchetypeTag::Aggressive
    }

    fn match_scenario(&self, ctx: &StrategyContext) -> Option<Scenario> {
        // Survival overrides everything else below the health floor.
        if ctx.health_pct < AGGRESSIVE_SURVIVAL_HEALTH {
            return Some(Scenario::Survival);
        }
        // Defensive block: holding opponent in range and aiming at us.
        if ctx.possession == Possession::Opponent
            && ctx.self_to_opponent < AGGRESSIVE_BLOCK_RADIUS
            && ctx.opponent_facing_actor
        {
            return Some(Scenario::DefensiveBlock);
        }
        // Push: we hold, special ready, opponent close enough to commit.
        if ctx.possession == Possession::Ours
            && ctx.ultimate_charge >= 1.0
            && ctx.self_to_opponent <= AGGRESSIVE_PUSH_RADIUS
        {
            return Some(Scenario::Push);
        }
        None
    }

    fn trigger_probability(&self, scenario: Scenario) -> f32 {
        match scenario {
            Scenario::Survival => AGGRESSIVE_SURVIVAL_PROB,
            Scenario::DefensiveBlock => AGGRESSIVE_BLOCK_PROB,
            Scenario::Push => AGGRESSIVE_PUSH_PROB,
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
            // Both stances are the same damage-mitigating crouch.
            Scenario::Survival | Scenario::DefensiveBlock => {
                if budget.try_consume(ActionKind::Ability) {
                    intent.duck_held = true;
                }
            }
            Scenario::Push => {
                // Advance while mitigating, then commit the special.
                if let Some(opp) = ctx.opponent_position {
                    intent.move_axis = axis_toward(ctx.self_position.x, opp.x);
                }
                if budget.try_consume(ActionKind::Ability) {
                    intent.duck_held = true;
                    intent.ultimate_requested = true;
                }
            }
            _ => {}
        }
    }
}
