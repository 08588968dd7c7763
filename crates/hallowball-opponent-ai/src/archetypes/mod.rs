//! Archetype strategy library.
//!
//! One strategy module per behavioral archetype. Each exposes three
//! mutually-exclusive scenario checks (first matching precondition wins)
//! plus an execution hook that writes movement and budget-gated actions
//! into the intent frame. Scenario checks only run for the actor whose
//! archetype tag matches.

mod aggressive;
mod evasive;
mod positional;

pub use aggressive::Aggressive;
pub use evasive::Evasive;
pub use positional::Positional;

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use hallowball_core::enums::{ArchetypeTag, Possession};
use hallowball_core::intent::IntentFrame;

use crate::budget::ActionBudget;

/// Which archetype scenario fired, for telemetry and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    // Evasive
    Dodge,
    Steal,
    Ambush,
    // Aggressive
    Survival,
    DefensiveBlock,
    Push,
    // Positional
    Race,
    Setup,
    Disengage,
}

/// Situation digest handed to scenario checks each decision tick.
///
/// Distances are `f32::INFINITY` when the relevant entity is absent, so
/// every range precondition fails naturally on a missing reference.
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext {
    pub self_position: Vec3,
    pub opponent_position: Option<Vec3>,
    pub ball_position: Option<Vec3>,
    pub possession: Possession,
    /// Ball is airborne and closing on the actor.
    pub ball_incoming: bool,
    pub self_to_ball: f32,
    pub opponent_to_ball: f32,
    pub self_to_opponent: f32,
    pub opponent_facing_actor: bool,
    pub health_pct: f32,
    pub ultimate_charge: f32,
}

/// A behavioral archetype's scenario table.
pub trait ArchetypeStrategy {
    fn tag(&self) -> ArchetypeTag;

    /// First scenario whose precondition holds, in priority order.
    /// Pure: no randomness, no budget.
    fn match_scenario(&self, ctx: &StrategyContext) -> Option<Scenario>;

    /// Per-tick trigger probability for a matched scenario.
    fn trigger_probability(&self, scenario: Scenario) -> f32;

    /// Execution hook: write the fired scenario's movement and actions.
    /// All bursts, stances, and specials route through the budget and
    /// silently drop when it refuses.
    fn execute(
        &self,
        scenario: Scenario,
        ctx: &StrategyContext,
        budget: &mut ActionBudget,
        rng: &mut ChaCha8Rng,
        intent: &mut IntentFrame,
    );
}

/// Resolve the strategy for an archetype tag.
pub fn strategy_for(tag: ArchetypeTag) -> &'static dyn ArchetypeStrategy {
    match tag {
        ArchetypeTag::Evasive => &Evasive,
        ArchetypeTag::Aggressive => &Aggressive,
        ArchetypeTag::Positional => &Positional,
    }
}

/// Run one scenario pass: match, roll the trigger gate, execute.
///
/// Returns the scenario that fired, if any.
pub fn run(
    strategy: &dyn ArchetypeStrategy,
    ctx: &StrategyContext,
    budget: &mut ActionBudget,
    rng: &mut ChaCha8Rng,
    intent: &mut IntentFrame,
) -> Option<Scenario> {
    let scenario = strategy.match_scenario(ctx)?;
    if rng.gen::<f32>() >= strategy.trigger_probability(scenario) {
        return None;
    }
    strategy.execute(scenario, ctx, budget, rng, intent);
    Some(scenario)
}
