//! The opponent brain: fixed-cadence decision scheduler plus the glue
//! between perception, state machine, mistakes, and archetype strategies.
//!
//! One brain per controlled actor. The host calls [`OpponentBrain::update`]
//! from its simulation loop every frame; the brain runs a full decision
//! pass only when its accumulator crosses the decision interval, which
//! bounds output rate independent of frame rate. All randomness comes from
//! a single seeded `ChaCha8Rng`, so a fixed (seed, world sequence) pair
//! reproduces the exact intent-frame sequence.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use hallowball_core::constants::{
    DECISION_INTERVAL_SECS, ENGAGE_THROW_RANGE, FACING_DOT_THRESHOLD, PREDICTION_LEAD_SECS,
};
use hallowball_core::enums::{ActionKind, AiState, ArchetypeTag, DifficultyTier};
use hallowball_core::intent::IntentFrame;
use hallowball_core::types::{axis_away, axis_toward, facing_alignment};
use hallowball_core::world::{BallView, OpponentView, SelfStats, WorldView};

use crate::archetypes::{self, Scenario, StrategyContext};
use crate::budget::ActionBudget;
use crate::duck;
use crate::fsm::{self, StateContext};
use crate::mistakes::MistakeInjector;
use crate::profiles::DifficultyProfile;
use crate::threat::{self, ThreatSnapshot};

/// Configuration for spawning a brain.
#[derive(Debug, Clone)]
pub struct BrainConfig {
    /// RNG seed for determinism. Same seed + same world = same frames.
    pub seed: u64,
    pub archetype: ArchetypeTag,
    pub tier: DifficultyTier,
    /// Explicit profile, overriding the tier table when present.
    pub profile_override: Option<DifficultyProfile>,
    /// Seconds between decision passes.
    pub decision_interval_secs: f32,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            archetype: ArchetypeTag::Evasive,
            tier: DifficultyTier::Normal,
            profile_override: None,
            decision_interval_secs: DECISION_INTERVAL_SECS,
        }
    }
}

/// Why a decision pass was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionError {
    /// The host handed back non-finite positions; nothing sane to decide.
    CorruptWorld,
}

/// The autonomous opponent decision engine for one actor.
pub struct OpponentBrain {
    profile: DifficultyProfile,
    archetype: ArchetypeTag,
    state: AiState,
    budget: ActionBudget,
    mistakes: MistakeInjector,
    rng: ChaCha8Rng,

    decision_interval_secs: f32,
    accumulator_secs: f32,
    /// Seconds the current threat has persisted, for reaction-delay gating.
    threat_age_secs: f32,
    /// Seconds since the last throw.
    throw_timer_secs: f32,

    // Telemetry for visualization tooling; not consumed by gameplay logic.
    last_threat: ThreatSnapshot,
    last_scenario: Option<Scenario>,
}

impl OpponentBrain {
    pub fn new(config: BrainConfig) -> Self {
        let profile = match config.profile_override {
            Some(profile) => match profile.validate() {
                Ok(()) => profile,
                Err(err) => {
                    log::warn!("invalid profile override ({err:?}), using {:?} tier", config.tier);
                    DifficultyProfile::for_tier(config.tier)
                }
            },
            None => DifficultyProfile::for_tier(config.tier),
        };
        let budget = ActionBudget::with_rate_cap(profile.max_actions_per_second);
        let mistakes = MistakeInjector::from_profile(&profile);
        Self {
            profile,
            archetype: config.archetype,
            state: AiState::default(),
            budget,
            mistakes,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            decision_interval_secs: config.decision_interval_secs,
            accumulator_secs: 0.0,
            threat_age_secs: 0.0,
            throw_timer_secs: f32::MAX / 2.0, // first throw is never cooldown-blocked
            last_threat: ThreatSnapshot::default(),
            last_scenario: None,
        }
    }

    /// Advance time and, when the decision interval elapses, run one full
    /// decision pass. Returns `Some(frame)` only on decision ticks.
    ///
    /// A faulted pass is logged and degrades to a neutral frame; the
    /// scheduler keeps ticking on subsequent intervals either way.
    pub fn update(&mut self, world: &dyn WorldView, dt_secs: f32) -> Option<IntentFrame> {
        self.budget.regenerate(dt_secs);
        self.throw_timer_secs = (self.throw_timer_secs + dt_secs).min(f32::MAX / 2.0);

        self.accumulator_secs += dt_secs;
        if self.accumulator_secs < self.decision_interval_secs {
            return None;
        }
        self.accumulator_secs = 0.0;

        let frame = match self.decision_pass(world) {
            Ok(frame) => frame,
            Err(err) => {
                log::warn!("decision pass aborted ({err:?}); emitting neutral frame");
                IntentFrame::neutral()
            }
        };
        Some(frame)
    }

    /// Current behavior state (debug/telemetry hook).
    pub fn state(&self) -> AiState {
        self.state
    }

    /// Threat snapshot from the most recent decision pass (debug hook).
    pub fn last_threat(&self) -> &ThreatSnapshot {
        &self.last_threat
    }

    /// Archetype scenario that fired on the most recent pass, if any.
    pub fn last_scenario(&self) -> Option<Scenario> {
        self.last_scenario
    }

    pub fn archetype(&self) -> ArchetypeTag {
        self.archetype
    }

    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    pub fn budget(&self) -> &ActionBudget {
        &self.budget
    }

    /// Clear per-round state (timers, behavior state) between rounds.
    /// The RNG stream is deliberately left alone.
    pub fn reset(&mut self) {
        self.state = AiState::default();
        self.accumulator_secs = 0.0;
        self.threat_age_secs = 0.0;
        self.throw_timer_secs = f32::MAX / 2.0;
        self.last_threat = ThreatSnapshot::default();
        self.last_scenario = None;
    }

    // ---- Decision pipeline ----

    fn decision_pass(&mut self, world: &dyn WorldView) -> Result<IntentFrame, DecisionError> {
        let stats = world.self_stats();
        if !stats.position.is_finite() {
            return Err(DecisionError::CorruptWorld);
        }
        let opponent = world.opponent().filter(|o| o.position.is_finite());
        let ball = world.ball().filter(|b| b.position.is_finite());

        let raw_threat = threat::assess(stats.position, opponent.as_ref(), ball.as_ref());
        self.last_threat = raw_threat;

        // Calibrated imperfection: occasionally a real threat goes unseen,
        // which also resets the reaction clock.
        let mut perceived = raw_threat;
        if perceived.has_threat && self.mistakes.misses_threat(&mut self.rng) {
            perceived.has_threat = false;
            perceived.incoming_object_height = None;
        }

        // A threat only becomes actionable after the reaction delay.
        if perceived.has_threat {
            self.threat_age_secs += self.decision_interval_secs;
            if self.threat_age_secs < self.profile.effective_reaction_delay() {
                perceived.has_threat = false;
                perceived.incoming_object_height = None;
            }
        } else {
            self.threat_age_secs = 0.0;
        }

        let possession = ball.map(|b| b.possession).unwrap_or_default();
        let ball_distance = ball
            .map(|b| stats.position.distance(b.position))
            .unwrap_or(f32::INFINITY);

        let update = fsm::evaluate(&StateContext {
            state: self.state,
            ball_present: ball.is_some(),
            possession,
            ball_distance,
            threat: perceived,
        });
        self.state = update.new_state;

        let mut intent = IntentFrame::neutral();
        match self.state {
            AiState::SeekBall | AiState::ApproachAndPickup => {
                self.steer_to_ball(&stats, ball.as_ref(), &mut intent);
            }
            AiState::EngageWithBall => {
                self.engage(&stats, opponent.as_ref(), &mut intent);
            }
            AiState::Evade => {
                self.evade(&stats, &perceived, &mut intent);
            }
        }

        let strategy_ctx =
            build_strategy_context(&stats, opponent.as_ref(), ball.as_ref(), &perceived);
        let strategy = archetypes::strategy_for(self.archetype);
        self.last_scenario = archetypes::run(
            strategy,
            &strategy_ctx,
            &mut self.budget,
            &mut self.rng,
            &mut intent,
        );

        Ok(intent)
    }

    /// Move toward where the ball will be, imperfectly.
    ///
    /// The lead scales with prediction accuracy and the target is smeared
    /// by gaussian aim error proportional to range, so weaker profiles
    /// chase the ball rather than meet it.
    fn steer_to_ball(&mut self, stats: &SelfStats, ball: Option<&BallView>, intent: &mut IntentFrame) {
        let Some(ball) = ball else {
            return; // no opportunity: stand still
        };
        let lead = ball.velocity.x * PREDICTION_LEAD_SECS * self.profile.prediction_accuracy;
        let range = stats.position.distance(ball.position);
        let target_x = ball.position.x + lead + self.aim_error(range);
        intent.move_axis = axis_toward(stats.position.x, target_x);
    }

    /// Holding the ball: close to throw range, duck if planted, and throw
    /// on cooldown unless hesitation strikes.
    fn engage(&mut self, stats: &SelfStats, opponent: Option<&OpponentView>, intent: &mut IntentFrame) {
        let Some(opp) = opponent else {
            return; // nobody to attack
        };
        let range = stats.position.distance(opp.position);

        if range > ENGAGE_THROW_RANGE {
            let target_x = opp.position.x + self.aim_error(range);
            intent.move_axis = axis_toward(stats.position.x, target_x);
        }

        // Planted playstyle: an aggressive holder ducks under return fire
        // at a wider radius instead of giving ground.
        let duck_radius = duck::duck_detection_radius(self.archetype, true);
        if self.archetype == ArchetypeTag::Aggressive && range <= duck_radius {
            let facing =
                facing_alignment(opp.forward, opp.position, stats.position) > FACING_DOT_THRESHOLD;
            let p = duck::duck_probability(self.profile.dodge_probability, 0.0, self.archetype, true);
            if facing && self.rng.gen::<f32>() < p {
                intent.duck_held = true;
            }
        }

        // Attack timing: cooldown gate, hesitation roll, budget gate.
        // Aggression compresses the cooldown, so hotter profiles throw more.
        let cooldown = self.profile.throw_cooldown_secs / self.profile.aggression.max(0.1);
        let ready = self.throw_timer_secs >= cooldown && range <= ENGAGE_THROW_RANGE;
        if ready && !self.mistakes.hesitates(&mut self.rng) {
            if self.budget.try_consume(ActionKind::Ability) {
                self.pick_throw_flavor(stats, intent);
                self.throw_timer_secs = 0.0;
            }
        }
    }

    /// Choose trick vs. treat throw, weighted by charge.
    fn pick_throw_flavor(&mut self, stats: &SelfStats, intent: &mut IntentFrame) {
        let total = stats.trick_charge + stats.treat_charge;
        let trick = if total > 0.0 {
            self.rng.gen::<f32>() < stats.trick_charge / total
        } else {
            self.rng.gen_bool(0.5)
        };
        if trick {
            intent.trick_requested = true;
        } else {
            intent.treat_requested = true;
        }
    }

    /// Under threat: put distance on, duck inside the band, jump over the
    /// rest, and dash when the dodge roll and the budget both allow it.
    fn evade(&mut self, stats: &SelfStats, threat: &ThreatSnapshot, intent: &mut IntentFrame) {
        if !threat.has_threat {
            return;
        }
        intent.move_axis = axis_away(stats.position.x, threat.threat_x);
        let mut ducked = false;
        if let Some(height) = threat.incoming_object_height {
            let radius = duck::duck_detection_radius(self.archetype, false);
            if threat.threat_distance <= radius {
                let p = duck::duck_probability(
                    self.profile.dodge_probability,
                    height,
                    self.archetype,
                    false,
                );
                if self.rng.gen::<f32>() < p {
                    intent.duck_held = true;
                    ducked = true;
                }
            }
        }
        if !ducked
            && self.rng.gen::<f32>() < self.profile.jump_probability
            && self.budget.try_consume(ActionKind::Jump)
        {
            intent.jump_requested = true;
        }
        if self.rng.gen::<f32>() < self.profile.dodge_probability
            && self.budget.try_consume(ActionKind::Dash)
        {
            intent.dash_requested = true;
        }
    }

    /// Gaussian positional error derived from the profile's angular aim
    /// inaccuracy at the given range.
    fn aim_error(&mut self, range: f32) -> f32 {
        let sigma = self.profile.aim_inaccuracy_degrees.to_radians() * range.max(1.0);
        match Normal::new(0.0, sigma) {
            Ok(normal) => normal.sample(&mut self.rng),
            Err(_) => 0.0,
        }
    }
}

fn build_strategy_context(
    stats: &SelfStats,
    opponent: Option<&OpponentView>,
    ball: Option<&BallView>,
    threat: &ThreatSnapshot,
) -> StrategyContext {
    let self_to_ball = ball
        .map(|b| stats.position.distance(b.position))
        .unwrap_or(f32::INFINITY);
    let opponent_to_ball = match (opponent, ball) {
        (Some(o), Some(b)) => o.position.distance(b.position),
        _ => f32::INFINITY,
    };
    let self_to_opponent = opponent
        .map(|o| stats.position.distance(o.position))
        .unwrap_or(f32::INFINITY);
    StrategyContext {
        self_position: stats.position,
        opponent_position: opponent.map(|o| o.position),
        ball_position: ball.map(|b| b.position),
        possession: ball.map(|b| b.possession).unwrap_or_default(),
        ball_incoming: threat.incoming_object_height.is_some(),
        self_to_ball,
        opponent_to_ball,
        self_to_opponent,
        opponent_facing_actor: threat.opponent_facing_actor,
        health_pct: stats.health_pct,
        ultimate_charge: stats.ultimate_charge,
    }
}
