//! Ship-wide totals, recomputed from the slots whenever they are needed.

use serde::{Deserialize, Serialize};

use crate::components::Slot;
use crate::enums::ResourceKind;

/// Aggregate of every live slot. Destroyed slots contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipStats {
    /// Power drawn by non-generator subsystems.
    pub power: u32,
    /// Generation capacity: base power plus generator output, floored.
    pub gen: u32,
    pub heat: f64,
    pub hp: f64,
    pub evade: f64,
    pub shield: f64,
    pub charge: f64,
    pub o2: f64,
    pub cargo: f64,
}

impl ShipStats {
    pub fn aggregate(slots: &[Slot], base_power: f64) -> Self {
        let mut stats = ShipStats::default();
        let mut gen = base_power;
        for slot in slots.iter().filter(|s| s.is_alive()) {
            stats.power += slot.power_draw();
            for resource in slot.kind().panel().resources() {
                let Some(value) = slot.value(resource) else {
                    continue;
                };
                match resource {
                    ResourceKind::Gen => gen += value,
                    ResourceKind::Heat => stats.heat += value,
                    ResourceKind::Hp => stats.hp += value,
                    ResourceKind::Evade => stats.evade += value,
                    ResourceKind::Shield => stats.shield += value,
                    ResourceKind::Charge => stats.charge += value,
                    ResourceKind::O2 => stats.o2 += value,
                    ResourceKind::Cargo => stats.cargo += value,
                }
            }
        }
        stats.gen = gen.max(0.0).floor() as u32;
        stats
    }

    /// Whether every unit of generation is already spoken for.
    pub fn at_capacity(&self) -> bool {
        self.power >= self.gen
    }
}
