//! Enumeration types used throughout the opponent AI.

use serde::{Deserialize, Serialize};

/// Behavioral archetype of the controlled actor.
///
/// Resolved once from the actor's configuration asset at spawn and immutable
/// thereafter. Determines which strategy module's scenario checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchetypeTag {
    /// Trickster playstyle: dodges, steals, ambushes from range.
    Evasive,
    /// Tank playstyle: blocks, pushes through hits, plants when holding.
    Aggressive,
    /// Striker playstyle: races for position and works a range band.
    Positional,
}

impl ArchetypeTag {
    /// Map an archetype label from the actor's configuration asset.
    ///
    /// Returns `None` for unrecognized labels; callers pick their own
    /// fallback. Matching is case-insensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "evasive" | "trickster" => Some(Self::Evasive),
            "aggressive" | "tank" => Some(Self::Aggressive),
            "positional" | "striker" => Some(Self::Positional),
            _ => None,
        }
    }
}

/// High-level behavior state. Exactly one is active per actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiState {
    /// Ball is free and far; wander toward it.
    #[default]
    SeekBall,
    /// Ball is free and reachable; close in for the pickup.
    ApproachAndPickup,
    /// Actor holds the ball; evaluate attack timing and openings.
    EngageWithBall,
    /// Under threat; dodge, duck, jump, or dash away.
    Evade,
}

/// Discrete action categories charged against the action budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Jump,
    Dash,
    /// Any special activation: stance, throw, ultimate, trick, treat.
    Ability,
}

/// Difficulty tier selecting a built-in parameter bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    Easy,
    #[default]
    Normal,
    Hard,
    Nightmare,
}

/// Who currently holds the contested ball.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Possession {
    /// Nobody holds it: on the ground or in flight.
    #[default]
    Free,
    /// The controlled actor holds it.
    Ours,
    /// The opposing actor holds it.
    Opponent,
}
