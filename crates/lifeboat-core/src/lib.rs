//! Core types and definitions for the LIFEBOAT simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the value registry, subsystem panels, ship layout, slot model,
//! commands, events, snapshots, and tuning configuration.
//! It has no dependency on any runtime or presentation framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod layout;
pub mod panels;
pub mod registry;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests;
