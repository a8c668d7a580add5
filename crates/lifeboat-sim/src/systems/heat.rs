//! Heat accumulation, overheat damage, and forced cooldown.

use lifeboat_core::components::Slot;
use lifeboat_core::config::TuningConfig;
use lifeboat_core::enums::ResourceKind;

/// What the heat step did to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatOutcome {
    /// No heat tracked, or at or under max.
    Nominal,
    /// Above max: took damage and counted another overheated tick.
    Overheated,
    /// Overheated long enough to be forced off into autocool.
    Shutdown,
    /// Overheat damage took the last of its hull.
    Destroyed,
}

/// Apply one tick of heat to a live slot.
///
/// Shutdown only zeroes `power`; the caller removes the slot from the
/// priority stack.
pub fn apply(slot: &mut Slot, tuning: &TuningConfig) -> HeatOutcome {
    let delta = tuning.delta(ResourceKind::Heat, slot.power);
    let max = tuning.values.heat.max;
    let Some(heat) = slot.system.heat_mut() else {
        return HeatOutcome::Nominal;
    };

    *heat = (*heat + delta).max(0.0);
    if *heat > max {
        *heat = max;
        slot.hp = slot.hp.saturating_sub(tuning.overheat_damage);
        if slot.hp == 0 {
            return HeatOutcome::Destroyed;
        }
        slot.heat_damage += 1;
        if slot.heat_damage >= tuning.overheat_ticks {
            slot.power = 0;
            slot.autocool = true;
            return HeatOutcome::Shutdown;
        }
        HeatOutcome::Overheated
    } else {
        slot.heat_damage = 0;
        if slot.autocool && *heat < max / 2.0 {
            slot.autocool = false;
        }
        HeatOutcome::Nominal
    }
}
