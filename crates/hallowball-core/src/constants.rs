//! Tuning constants for the opponent AI.

// --- Decision cadence ---

/// Seconds between decision passes (10 Hz), independent of host frame rate.
pub const DECISION_INTERVAL_SECS: f32 = 0.1;

// --- Threat assessment ---

/// Range within which a ball-holding opponent is considered a threat (units).
pub const THREAT_RADIUS: f32 = 8.0;

/// Range below which a holding opponent threatens regardless of facing.
pub const POINT_BLANK_RADIUS: f32 = 4.0;

/// Minimum dot of opponent-forward with direction-to-actor to count as
/// "facing the actor".
pub const FACING_DOT_THRESHOLD: f32 = 0.3;

/// Below this threat distance, Evade preempts EngageWithBall even while
/// holding the ball.
pub const PANIC_RADIUS: f32 = 3.0;

/// Height above ground below which the ball is treated as grounded (units).
pub const BALL_GROUNDED_HEIGHT: f32 = 0.05;

// --- State machine ---

/// Range at which a free ball counts as reachable (SeekBall → Approach).
pub const BALL_REACHABLE_RADIUS: f32 = 12.0;

// --- Action economy ---

/// Maximum stored action budget.
pub const BUDGET_MAX: f32 = 3.0;

/// Budget regeneration per second.
pub const BUDGET_REGEN_PER_SEC: f32 = 2.0;

/// Budget cost of a jump.
pub const COST_JUMP: f32 = 1.0;

/// Budget cost of a dash.
pub const COST_DASH: f32 = 1.5;

/// Budget cost of any special activation.
pub const COST_ABILITY: f32 = 0.5;

// --- Duck sub-behavior ---

/// Lower bound of the duck-relevant incoming height band (units).
pub const DUCK_BAND_MIN: f32 = 0.5;

/// Upper bound of the duck-relevant incoming height band (units).
pub const DUCK_BAND_MAX: f32 = 2.5;

/// Duck probability multiplier inside the band.
pub const DUCK_IN_BAND_FACTOR: f32 = 1.2;

/// Duck probability multiplier outside the band (favor jump/dash instead).
pub const DUCK_OUT_OF_BAND_FACTOR: f32 = 0.4;

/// Duck detection radius for most actors (units).
pub const DUCK_RADIUS: f32 = 7.0;

/// Wider duck detection radius for a planted Aggressive ball-holder.
pub const DUCK_RADIUS_AGGRESSIVE_HOLDING: f32 = 9.0;

/// Flat duck probability for a planted Aggressive ball-holder.
pub const DUCK_PROB_AGGRESSIVE_HOLDING: f32 = 0.85;

// --- Evasive archetype scenarios ---

/// Dodge: incoming ball closing within this range triggers relocation.
pub const EVASIVE_DODGE_RADIUS: f32 = 3.0;

/// Dodge trigger probability per decision tick.
pub const EVASIVE_DODGE_PROB: f32 = 0.30;

/// Steal: opponent must be within this range of the free ball.
pub const EVASIVE_STEAL_RADIUS: f32 = 6.0;

/// Steal trigger probability per decision tick.
pub const EVASIVE_STEAL_PROB: f32 = 0.35;

/// Ambush: opponent must be beyond this range while we hold the ball.
pub const EVASIVE_AMBUSH_MIN_RANGE: f32 = 8.0;

/// Ambush trigger probability per decision tick.
pub const EVASIVE_AMBUSH_PROB: f32 = 0.25;

// --- Aggressive archetype scenarios ---

/// Defensive block: holding opponent within this range, facing us.
pub const AGGRESSIVE_BLOCK_RADIUS: f32 = 8.0;

/// Defensive block trigger probability per decision tick.
pub const AGGRESSIVE_BLOCK_PROB: f32 = 0.40;

/// Push: opponent within this range while we hold with special ready.
pub const AGGRESSIVE_PUSH_RADIUS: f32 = 12.0;

/// Push trigger probability per decision tick.
pub const AGGRESSIVE_PUSH_PROB: f32 = 0.55;

/// Survival stance fires below this health fraction.
pub const AGGRESSIVE_SURVIVAL_HEALTH: f32 = 0.4;

/// Survival stance trigger probability per decision tick.
pub const AGGRESSIVE_SURVIVAL_PROB: f32 = 0.70;

// --- Positional archetype scenarios ---

/// Race trigger probability per decision tick.
pub const POSITIONAL_RACE_PROB: f32 = 0.40;

/// Lower edge of the setup "sweet band" (units from opponent).
pub const POSITIONAL_BAND_MIN: f32 = 8.0;

/// Upper edge of the setup "sweet band" (units from opponent).
pub const POSITIONAL_BAND_MAX: f32 = 12.0;

/// Setup trigger probability per decision tick.
pub const POSITIONAL_SETUP_PROB: f32 = 0.45;

/// Disengage: holding opponent or incoming ball within this range.
pub const POSITIONAL_DISENGAGE_RADIUS: f32 = 6.0;

/// Disengage trigger probability per decision tick.
pub const POSITIONAL_DISENGAGE_PROB: f32 = 0.50;

// --- Engagement ---

/// Preferred range to release a throw from; beyond it the holder closes in.
pub const ENGAGE_THROW_RANGE: f32 = 10.0;

// --- Movement ---

/// Dead zone on the arena axis to avoid jittery back-and-forth steering.
pub const MOVE_DEADZONE: f32 = 0.25;

/// Lookahead when leading a moving ball (seconds), scaled by the profile's
/// prediction accuracy.
pub const PREDICTION_LEAD_SECS: f32 = 0.4;
