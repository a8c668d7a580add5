//! Ship hardware topology: the fixed set of subsystem positions.

use glam::Vec2;

use crate::constants::{PANEL_H, PANEL_W};
use crate::enums::SubsystemKind;

/// One physical subsystem position on the ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    /// Top-left corner of the panel, relative to the ship sprite.
    pub position: Vec2,
    pub initial_kind: SubsystemKind,
}

impl SlotLayout {
    const fn new(x: f32, y: f32, initial_kind: SubsystemKind) -> Self {
        Self {
            position: Vec2::new(x, y),
            initial_kind,
        }
    }

    /// Panel size, rotated for vertical panels.
    pub fn panel_size(&self) -> Vec2 {
        if self.initial_kind.panel().vert {
            Vec2::new(PANEL_H, PANEL_W)
        } else {
            Vec2::new(PANEL_W, PANEL_H)
        }
    }

    /// Panel centre, used as the aim point for incoming fire.
    pub fn center(&self) -> Vec2 {
        self.position + self.panel_size() / 2.0
    }
}

use SubsystemKind as K;

/// The ship's 14 subsystem positions, in slot-index order.
pub const SHIP_LAYOUT: [SlotLayout; 14] = [
    SlotLayout::new(158.0, 24.0, K::Weapon),
    SlotLayout::new(162.0, 56.0, K::Weapon),
    SlotLayout::new(162.0, 200.0, K::Weapon),
    SlotLayout::new(158.0, 232.0, K::Weapon),
    SlotLayout::new(194.0, 96.0, K::Engine),
    SlotLayout::new(194.0, 128.0, K::Engine),
    SlotLayout::new(194.0, 160.0, K::Engine),
    SlotLayout::new(66.0, 96.0, K::Shield),
    SlotLayout::new(66.0, 128.0, K::Cargo),
    SlotLayout::new(66.0, 160.0, K::Shield),
    SlotLayout::new(162.0, 96.0, K::Generator),
    SlotLayout::new(130.0, 96.0, K::Repair),
    SlotLayout::new(34.0, 112.0, K::Generator),
    SlotLayout::new(130.0, 160.0, K::LifeSupport),
];
