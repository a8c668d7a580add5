//! Panel table: which resources each subsystem kind tracks, in display order.

use crate::enums::{ResourceKind, SubsystemKind};

/// Static description of a subsystem kind's panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTypeDef {
    /// Tracked resources in display order. `None` is a decorative empty slot.
    pub values: &'static [Option<ResourceKind>],
    /// Vertical panel orientation. Layout only.
    pub vert: bool,
}

impl PanelTypeDef {
    /// Declared resources, skipping decorative gaps.
    pub fn resources(&self) -> impl Iterator<Item = ResourceKind> + '_ {
        self.values.iter().flatten().copied()
    }

    pub fn declares(&self, resource: ResourceKind) -> bool {
        self.resources().any(|r| r == resource)
    }
}

use ResourceKind as R;

const ENGINE: PanelTypeDef = PanelTypeDef {
    values: &[Some(R::Heat), Some(R::Evade), Some(R::Hp)],
    vert: false,
};
const SHIELD: PanelTypeDef = PanelTypeDef {
    values: &[Some(R::Heat), Some(R::Shield), Some(R::Hp)],
    vert: false,
};
const WEAPON: PanelTypeDef = PanelTypeDef {
    values: &[Some(R::Heat), Some(R::Charge), Some(R::Hp)],
    vert: false,
};
const GENERATOR: PanelTypeDef = PanelTypeDef {
    values: &[Some(R::Heat), Some(R::Gen), Some(R::Hp)],
    vert: true,
};
const REPAIR: PanelTypeDef = PanelTypeDef {
    values: &[None, Some(R::Hp), None],
    vert: true,
};
const LIFE_SUPPORT: PanelTypeDef = PanelTypeDef {
    values: &[Some(R::Heat), Some(R::O2), Some(R::Hp)],
    vert: false,
};
const CARGO: PanelTypeDef = PanelTypeDef {
    values: &[Some(R::Cargo)],
    vert: false,
};

impl SubsystemKind {
    pub fn panel(self) -> &'static PanelTypeDef {
        match self {
            SubsystemKind::Engine => &ENGINE,
            SubsystemKind::Shield => &SHIELD,
            SubsystemKind::Weapon => &WEAPON,
            SubsystemKind::Generator => &GENERATOR,
            SubsystemKind::Repair => &REPAIR,
            SubsystemKind::LifeSupport => &LIFE_SUPPORT,
            SubsystemKind::Cargo => &CARGO,
        }
    }
}
