//! Value registry: bounds and labels for every resource a panel can track.

use serde::{Deserialize, Serialize};

use crate::enums::ResourceKind;

/// Bounds and display metadata for one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDef {
    /// Value a fresh slot starts with.
    #[serde(default)]
    pub start: f64,
    /// Hard clamp ceiling.
    pub max: f64,
    /// Short panel label.
    pub label: String,
}

impl ValueDef {
    fn new(start: f64, max: f64, label: &str) -> Self {
        Self {
            start,
            max,
            label: label.to_owned(),
        }
    }

    /// Clamp a value into `[0, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(0.0, self.max)
    }

    /// Starting value, clamped into bounds.
    pub fn initial(&self) -> f64 {
        self.clamp(self.start)
    }
}

/// Read-only table of resource definitions, one entry per `ResourceKind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueRegistry {
    pub heat: ValueDef,
    pub hp: ValueDef,
    pub evade: ValueDef,
    pub shield: ValueDef,
    pub charge: ValueDef,
    pub gen: ValueDef,
    pub o2: ValueDef,
    pub cargo: ValueDef,
}

impl Default for ValueRegistry {
    fn default() -> Self {
        Self {
            heat: ValueDef::new(0.0, 100.0, "HEAT"),
            hp: ValueDef::new(100.0, 100.0, "HP"),
            evade: ValueDef::new(0.0, 33.0, "EVADE"),
            shield: ValueDef::new(0.0, 100.0, "SHIELD"),
            charge: ValueDef::new(0.0, 100.0, "CHARGE"),
            gen: ValueDef::new(0.0, 6.0, "POWER"),
            o2: ValueDef::new(0.0, 100.0, "O2 PROD"),
            cargo: ValueDef::new(20.0, 20.0, "CARGO"),
        }
    }
}

impl ValueRegistry {
    pub fn get(&self, kind: ResourceKind) -> &ValueDef {
        match kind {
            ResourceKind::Heat => &self.heat,
            ResourceKind::Hp => &self.hp,
            ResourceKind::Evade => &self.evade,
            ResourceKind::Shield => &self.shield,
            ResourceKind::Charge => &self.charge,
            ResourceKind::Gen => &self.gen,
            ResourceKind::O2 => &self.o2,
            ResourceKind::Cargo => &self.cargo,
        }
    }

    /// Maximum hull points of any slot.
    pub fn max_hp(&self) -> u32 {
        self.hp.max as u32
    }
}
