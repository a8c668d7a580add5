//! Player commands sent from the frontend to the simulation.
//!
//! Power commands address a slot by its layout index. Commands that make no
//! sense in the current state are ignored, never treated as errors.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Step a slot's power level up, wrapping to off (left click).
    TogglePower { slot: usize },
    /// Step a slot's power level down, wrapping to max (right click).
    CyclePowerDown { slot: usize },
    /// Bring in a fresh wave after the current one is beaten.
    NextWave,
    /// Throw away the encounter and start over.
    Restart,
}

/// Result of applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Applied,
    Ignored(IgnoreReason),
}

/// Why a command was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No slot at that index.
    UnknownSlot,
    /// The slot has no hull left.
    Destroyed,
    /// The subsystem has no power control (cargo hold).
    Unpowerable,
    /// The slot is locked out while it cools down.
    Autocooling,
    /// Turning it on would exceed generation.
    InsufficientPower,
    /// The wave is still being fought.
    WaveInProgress,
    /// The encounter is already decided.
    EncounterOver,
}
