//! Encounter snapshot: the complete read-only state handed to the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::{EnemyShip, FireTarget};
use crate::enums::{EncounterPhase, ResourceKind, SubsystemKind};
use crate::events::SimEvent;
use crate::stats::ShipStats;

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    /// Number of ticks resolved so far.
    pub tick: u64,
    pub phase: EncounterPhase,
    /// Ship-wide O2 supply.
    pub o2: f64,
    pub stats: ShipStats,
    pub slots: Vec<SlotView>,
    pub wave: WaveView,
    /// Powered slots, oldest first.
    pub on_priority: Vec<usize>,
    /// Most recent log lines, oldest first.
    pub messages: Vec<String>,
    /// Events raised since the previous snapshot.
    pub events: Vec<SimEvent>,
    /// Time left before the next tick.
    pub tick_countdown_ms: u64,
}

/// One subsystem panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotView {
    pub index: usize,
    pub kind: SubsystemKind,
    pub anchor: Vec2,
    pub vert: bool,
    pub power: u8,
    /// Power levels the player can cycle through.
    pub power_levels: u8,
    pub hp: u32,
    pub destroyed: bool,
    pub autocool: bool,
    pub autooff: bool,
    /// Off, and turning it on would exceed generation.
    pub disabled: bool,
    pub fire_at: Option<FireTarget>,
    /// Panel bars in display order; `None` is a decorative gap.
    pub values: Vec<Option<ValueView>>,
}

/// One bar on a panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueView {
    pub resource: ResourceKind,
    pub value: f64,
    pub max: f64,
    pub label: String,
}

/// The active wave.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub num_ships: usize,
    pub alive: usize,
    pub damage: f64,
    pub won: bool,
    pub ships: Vec<EnemyShip>,
}
