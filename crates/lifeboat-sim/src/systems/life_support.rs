//! Ship-wide O2 balance and passenger loss.

use lifeboat_core::components::Subsystem;
use lifeboat_core::config::TuningConfig;
use lifeboat_core::constants::O2_SUPPLY_MAX;
use lifeboat_core::events::SimEvent;
use lifeboat_core::stats::ShipStats;

use crate::encounter::EncounterState;
use crate::random::RandomSource;

/// Consume O2, add life-support production, and suffocate a passenger if the
/// supply is empty.
///
/// With no O2 left, one random live slot is chosen; if it is a cargo hold
/// with passengers, one dies. Any other pick costs nothing this tick.
pub fn run(
    state: &mut EncounterState,
    stats: &ShipStats,
    tuning: &TuningConfig,
    rng: &mut dyn RandomSource,
) {
    let production = stats.o2 * (tuning.o2_consumption * 4.0 / 100.0);
    state.o2 = (state.o2 - tuning.o2_consumption + production).clamp(0.0, O2_SUPPLY_MAX);
    if state.o2 > 0.0 {
        return;
    }

    let live = state.live_slots();
    let Some(pick) = rng.pick(live.len()) else {
        return;
    };
    let index = live[pick];
    if let Subsystem::Cargo { passengers } = &mut state.slots[index].system {
        if *passengers > 0 {
            *passengers -= 1;
            state.events.push(SimEvent::PassengerLost { slot: index });
            state.log("Refugee lost to asphyxiation");
        }
    }
}
