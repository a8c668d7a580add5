//! Win detection, evaluated at the start of each tick.

use tracing::info;

use lifeboat_core::enums::EncounterPhase;
use lifeboat_core::events::SimEvent;

use crate::encounter::EncounterState;

/// Returns `true` when the tick must not advance: the encounter was already
/// decided, or every enemy ship has just been found destroyed.
pub fn check(state: &mut EncounterState) -> bool {
    if state.is_over() {
        return true;
    }
    if !state.wave.all_destroyed() {
        return false;
    }
    state.wave.won = true;
    state.phase = EncounterPhase::Won;
    state.clear_fire();
    info!(tick = state.tick, "wave defeated");
    state.log("Encounter won!");
    state.events.push(SimEvent::WaveWon);
    true
}
