//! Tick systems that advance the encounter.
//!
//! Systems are free functions over `EncounterState`. They do not own
//! state; the controller calls them in a fixed order each tick.

pub mod approach;
pub mod enemy_fire;
pub mod heat;
pub mod life_support;
pub mod regulation;
pub mod repair;
pub mod snapshot;
pub mod subsystems;
pub mod victory;
pub mod wave_spawner;
pub mod weapons;
