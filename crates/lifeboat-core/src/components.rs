//! Mutable simulation records: ship slots, enemy ships, and the active wave.
//!
//! These are plain data with small accessors. Tick rules live in the
//! systems of `lifeboat-sim`, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{ResourceKind, SubsystemKind};
use crate::layout::SlotLayout;
use crate::registry::ValueRegistry;

/// Aim point of a shot fired this tick, for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireTarget {
    pub at: Vec2,
    /// Whether the target panel is vertical (affects spread when drawn).
    pub vert: bool,
}

/// Type-specific payload of a slot. Each variant carries exactly the
/// resources its panel declares (hull points live on `Slot`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Subsystem {
    Engine { heat: f64, evade: f64 },
    Shield { heat: f64, shield: f64 },
    Weapon { heat: f64, charge: f64 },
    Generator { heat: f64, gen: f64 },
    Repair,
    LifeSupport { heat: f64, o2: f64 },
    Cargo { passengers: u32 },
}

impl Subsystem {
    /// A freshly installed subsystem with every resource at its registry start,
    /// clamped into bounds.
    pub fn fresh(kind: SubsystemKind, registry: &ValueRegistry) -> Self {
        let heat = registry.heat.initial();
        match kind {
            SubsystemKind::Engine => Subsystem::Engine {
                heat,
                evade: registry.evade.initial(),
            },
            SubsystemKind::Shield => Subsystem::Shield {
                heat,
                shield: registry.shield.initial(),
            },
            SubsystemKind::Weapon => Subsystem::Weapon {
                heat,
                charge: registry.charge.initial(),
            },
            SubsystemKind::Generator => Subsystem::Generator {
                heat,
                gen: registry.gen.initial(),
            },
            SubsystemKind::Repair => Subsystem::Repair,
            SubsystemKind::LifeSupport => Subsystem::LifeSupport {
                heat,
                o2: registry.o2.initial(),
            },
            SubsystemKind::Cargo => Subsystem::Cargo {
                passengers: registry.cargo.initial() as u32,
            },
        }
    }

    pub fn kind(&self) -> SubsystemKind {
        match self {
            Subsystem::Engine { .. } => SubsystemKind::Engine,
            Subsystem::Shield { .. } => SubsystemKind::Shield,
            Subsystem::Weapon { .. } => SubsystemKind::Weapon,
            Subsystem::Generator { .. } => SubsystemKind::Generator,
            Subsystem::Repair => SubsystemKind::Repair,
            Subsystem::LifeSupport { .. } => SubsystemKind::LifeSupport,
            Subsystem::Cargo { .. } => SubsystemKind::Cargo,
        }
    }

    pub fn heat(&self) -> Option<f64> {
        match self {
            Subsystem::Engine { heat, .. }
            | Subsystem::Shield { heat, .. }
            | Subsystem::Weapon { heat, .. }
            | Subsystem::Generator { heat, .. }
            | Subsystem::LifeSupport { heat, .. } => Some(*heat),
            Subsystem::Repair | Subsystem::Cargo { .. } => None,
        }
    }

    pub fn heat_mut(&mut self) -> Option<&mut f64> {
        match self {
            Subsystem::Engine { heat, .. }
            | Subsystem::Shield { heat, .. }
            | Subsystem::Weapon { heat, .. }
            | Subsystem::Generator { heat, .. }
            | Subsystem::LifeSupport { heat, .. } => Some(heat),
            Subsystem::Repair | Subsystem::Cargo { .. } => None,
        }
    }

    /// The resource this subsystem regulates with its power level, if any.
    pub fn output_mut(&mut self) -> Option<(ResourceKind, &mut f64)> {
        match self {
            Subsystem::Engine { evade, .. } => Some((ResourceKind::Evade, evade)),
            Subsystem::Shield { shield, .. } => Some((ResourceKind::Shield, shield)),
            Subsystem::Weapon { charge, .. } => Some((ResourceKind::Charge, charge)),
            Subsystem::Generator { gen, .. } => Some((ResourceKind::Gen, gen)),
            Subsystem::LifeSupport { o2, .. } => Some((ResourceKind::O2, o2)),
            Subsystem::Repair | Subsystem::Cargo { .. } => None,
        }
    }

    /// Value of a declared non-hull resource.
    pub fn value(&self, resource: ResourceKind) -> Option<f64> {
        match (self, resource) {
            (_, ResourceKind::Heat) => self.heat(),
            (Subsystem::Engine { evade, .. }, ResourceKind::Evade) => Some(*evade),
            (Subsystem::Shield { shield, .. }, ResourceKind::Shield) => Some(*shield),
            (Subsystem::Weapon { charge, .. }, ResourceKind::Charge) => Some(*charge),
            (Subsystem::Generator { gen, .. }, ResourceKind::Gen) => Some(*gen),
            (Subsystem::LifeSupport { o2, .. }, ResourceKind::O2) => Some(*o2),
            (Subsystem::Cargo { passengers }, ResourceKind::Cargo) => Some(f64::from(*passengers)),
            _ => None,
        }
    }
}

/// One physical subsystem position and its operational state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Position in the ship layout. Stable identity.
    pub index: usize,
    /// Power level: 0 = off, 1 = on, 2 = overdrive.
    pub power: u8,
    /// Hull points. 0 means destroyed for good.
    pub hp: u32,
    /// Consecutive ticks spent above max heat.
    pub heat_damage: u32,
    /// Forced off by overheating; locked until it cools to half heat.
    pub autocool: bool,
    /// Forced off by power arbitration; restored when generation allows.
    pub autooff: bool,
    /// This tick's shot, if the slot fired.
    pub fire_at: Option<FireTarget>,
    /// Panel centre, the aim point for enemy fire.
    pub anchor: Vec2,
    pub vert: bool,
    pub system: Subsystem,
}

impl Slot {
    pub fn new(index: usize, layout: &SlotLayout, registry: &ValueRegistry) -> Self {
        Self {
            index,
            power: 0,
            hp: registry.max_hp(),
            heat_damage: 0,
            autocool: false,
            autooff: false,
            fire_at: None,
            anchor: layout.center(),
            vert: layout.initial_kind.panel().vert,
            system: Subsystem::fresh(layout.initial_kind, registry),
        }
    }

    pub fn kind(&self) -> SubsystemKind {
        self.system.kind()
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Value of any declared resource, hull included.
    pub fn value(&self, resource: ResourceKind) -> Option<f64> {
        if !self.kind().panel().declares(resource) {
            return None;
        }
        match resource {
            ResourceKind::Hp => Some(f64::from(self.hp)),
            other => self.system.value(other),
        }
    }

    /// Power this slot draws from the ship budget.
    pub fn power_draw(&self) -> u32 {
        if self.is_alive() && self.kind().draws_power() {
            u32::from(self.power)
        } else {
            0
        }
    }

    /// Aim point for incoming fire on this slot.
    pub fn target(&self) -> FireTarget {
        FireTarget {
            at: self.anchor,
            vert: self.vert,
        }
    }
}

/// One enemy ship of the active wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyShip {
    pub position: Vec2,
    pub hp: u32,
    /// Ticks left before this ship fires again.
    pub fire_countdown: u32,
    pub fire_at: Option<FireTarget>,
}

impl EnemyShip {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// The batch of enemy ships currently engaging the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub num_ships: usize,
    pub max_hp: u32,
    /// Damage dealt by each enemy volley.
    pub damage: f64,
    pub ships: Vec<EnemyShip>,
    pub won: bool,
}

impl Wave {
    pub fn alive_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_alive()).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.ships.iter().all(|s| !s.is_alive())
    }
}
