//! Core types and definitions for the HALLOWBALL opponent AI.
//!
//! This crate defines the vocabulary shared between the decision engine and
//! its host: enums, constants, the intent frame handed to the input layer,
//! and the world-view trait the engine perceives through. It has no
//! dependency on any runtime framework.

pub mod constants;
pub mod enums;
pub mod intent;
pub mod types;
pub mod world;
