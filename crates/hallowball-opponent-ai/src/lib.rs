//! Opponent decision engine for HALLOWBALL.
//!
//! A tick-driven brain for the non-human competitor in the throw/catch/dodge
//! arena: perceives the world through an injected [`WorldView`], weighs
//! threats, manages a humanlike action budget, injects calibrated mistakes,
//! and emits one [`IntentFrame`] per decision tick for the input layer to
//! execute. Fully deterministic for a fixed seed and world sequence.
//!
//! [`WorldView`]: hallowball_core::world::WorldView
//! [`IntentFrame`]: hallowball_core::intent::IntentFrame

pub mod archetypes;
pub mod brain;
pub mod budget;
pub mod duck;
pub mod fsm;
pub mod mistakes;
pub mod profiles;
pub mod threat;

pub use hallowball_core as core;

pub use brain::{BrainConfig, OpponentBrain};
