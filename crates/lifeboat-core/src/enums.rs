//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Subsystem type installed in a ship slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubsystemKind {
    /// Builds evasion while powered.
    Engine,
    /// Builds shield charge that absorbs enemy fire.
    Shield,
    /// Charges and fires at the enemy wave.
    Weapon,
    /// Raises ship power generation.
    Generator,
    /// Spends its own hull to patch up other subsystems.
    Repair,
    /// Produces O2 for the crew and passengers.
    LifeSupport,
    /// Refugee hold. Passive, cannot be powered.
    Cargo,
}

impl SubsystemKind {
    pub const ALL: [SubsystemKind; 7] = [
        SubsystemKind::Engine,
        SubsystemKind::Shield,
        SubsystemKind::Weapon,
        SubsystemKind::Generator,
        SubsystemKind::Repair,
        SubsystemKind::LifeSupport,
        SubsystemKind::Cargo,
    ];

    /// Upper-case name used in the message log.
    pub fn display_name(self) -> &'static str {
        match self {
            SubsystemKind::Engine => "ENGINE",
            SubsystemKind::Shield => "SHIELD",
            SubsystemKind::Weapon => "WEAPON",
            SubsystemKind::Generator => "GEN",
            SubsystemKind::Repair => "REPAIR",
            SubsystemKind::LifeSupport => "LIFE",
            SubsystemKind::Cargo => "CARGO",
        }
    }

    /// Whether the player can change this subsystem's power level at all.
    pub fn is_powerable(self) -> bool {
        self != SubsystemKind::Cargo
    }

    /// Whether this subsystem draws from the ship's power budget.
    pub fn draws_power(self) -> bool {
        !matches!(self, SubsystemKind::Generator | SubsystemKind::Cargo)
    }
}

/// Resource tracked by a subsystem panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Heat,
    Hp,
    Evade,
    Shield,
    Charge,
    Gen,
    O2,
    Cargo,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Heat,
        ResourceKind::Hp,
        ResourceKind::Evade,
        ResourceKind::Shield,
        ResourceKind::Charge,
        ResourceKind::Gen,
        ResourceKind::O2,
        ResourceKind::Cargo,
    ];
}

/// Top-level encounter state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    /// Subsystems and combat advance every tick.
    #[default]
    Active,
    /// Every enemy in the wave is down.
    Won,
    /// Enemy fire found no live subsystem to hit.
    Lost,
}

/// Why a subsystem was destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestructionCause {
    Heat,
    Enemy,
    /// Repair bay burned through its own hull.
    Repair,
}

impl DestructionCause {
    pub fn display_name(self) -> &'static str {
        match self {
            DestructionCause::Heat => "HEAT",
            DestructionCause::Enemy => "ENEMY",
            DestructionCause::Repair => "REPAIRS",
        }
    }
}
