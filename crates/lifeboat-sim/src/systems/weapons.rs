//! Weapon charging and firing.

use lifeboat_core::components::{FireTarget, Subsystem};
use lifeboat_core::config::TuningConfig;
use lifeboat_core::enums::ResourceKind;
use lifeboat_core::events::SimEvent;

use crate::encounter::EncounterState;
use crate::random::RandomSource;

/// Run the weapon in slot `index` for one tick.
///
/// A fully charged weapon discharges at a random live enemy, destroying it
/// outright. Otherwise charge moves by the delta for the current power.
pub fn apply(
    state: &mut EncounterState,
    index: usize,
    tuning: &TuningConfig,
    rng: &mut dyn RandomSource,
) {
    let def = &tuning.values.charge;
    let delta = tuning.delta(ResourceKind::Charge, state.slots[index].power);
    let Subsystem::Weapon { charge, .. } = &mut state.slots[index].system else {
        return;
    };
    if *charge < def.max {
        *charge = def.clamp(*charge + delta);
        return;
    }
    *charge = 0.0;

    let targets: Vec<usize> = state
        .wave
        .ships
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_alive())
        .map(|(i, _)| i)
        .collect();
    let Some(pick) = rng.pick(targets.len()) else {
        return;
    };
    let enemy = targets[pick];
    let ship = &mut state.wave.ships[enemy];
    ship.hp = 0;
    let target = ship.position;
    state.slots[index].fire_at = Some(FireTarget {
        at: target,
        vert: false,
    });
    state.events.push(SimEvent::WeaponFired {
        slot: index,
        enemy,
        target,
    });
}
