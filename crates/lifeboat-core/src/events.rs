//! Events emitted by the simulation for audio and effects collaborators.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{DestructionCause, SubsystemKind};

/// Semantic things that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A fresh enemy wave arrived.
    WaveSpawned { num_ships: usize },
    /// A weapon slot discharged at an enemy ship.
    WeaponFired { slot: usize, enemy: usize, target: Vec2 },
    /// An enemy volley was evaded.
    EnemyMissed { enemy: usize },
    /// A shield absorbed (part of) an enemy volley.
    ShieldHit { enemy: usize, slot: usize, absorbed: f64 },
    /// A subsystem lost hull to enemy fire.
    SlotDamaged { enemy: usize, slot: usize, damage: u32 },
    /// A subsystem's hull reached zero.
    SlotDestroyed {
        slot: usize,
        kind: SubsystemKind,
        cause: DestructionCause,
    },
    /// A subsystem shut itself down after overheating too long.
    OverheatShutdown { slot: usize },
    /// Arbitration shed a subsystem for lack of generation.
    AutoPowerOff { slot: usize },
    /// Arbitration powered a shed subsystem back on.
    AutoPowerRestored { slot: usize },
    /// The repair bay patched another subsystem.
    Repaired { slot: usize, target: usize, amount: u32 },
    /// A refugee died from lack of O2.
    PassengerLost { slot: usize },
    /// Every enemy ship in the wave is down.
    WaveWon,
    /// Enemy fire found nothing left to hit.
    ShipLost,
}
