//! Simulation engine for LIFEBOAT.
//!
//! Owns the encounter state, resolves ticks in a fixed system order,
//! and produces `EncounterSnapshot`s for the frontend.

pub mod encounter;
pub mod engine;
pub mod power;
pub mod random;
pub mod systems;

pub use engine::{EncounterController, SimConfig};
