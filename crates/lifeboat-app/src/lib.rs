//! LIFEBOAT headless driver.
//!
//! This crate stands in for the presentation layer: it feeds real elapsed
//! time into the encounter controller on a frame loop and hands snapshots to
//! a `Frontend`.

pub mod frontend;
pub mod game_loop;
pub mod state;
pub mod summary;

pub use lifeboat_core as core;
