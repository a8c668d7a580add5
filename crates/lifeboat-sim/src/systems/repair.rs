//! Repair bay: trades its own hull for hull on a damaged subsystem.

use lifeboat_core::config::TuningConfig;
use lifeboat_core::enums::DestructionCause;
use lifeboat_core::events::SimEvent;

use crate::encounter::EncounterState;
use crate::random::RandomSource;

/// Run the repair bay in slot `index` for one tick.
///
/// The bay spends up to `repair_size` of its hull and restores
/// `repair_factor` times that on one other live slot picked at random from
/// those with enough missing hull to take the whole patch. Nothing happens
/// if no slot qualifies.
pub fn apply(
    state: &mut EncounterState,
    index: usize,
    tuning: &TuningConfig,
    rng: &mut dyn RandomSource,
) {
    let bay = &state.slots[index];
    if bay.power == 0 || !bay.is_alive() {
        return;
    }
    let spend = bay.hp.min(tuning.repair_size);
    let patch = spend * tuning.repair_factor;
    let max_hp = tuning.values.max_hp();
    let threshold = max_hp.saturating_sub(patch);

    let candidates: Vec<usize> = state
        .slots
        .iter()
        .filter(|s| s.index != index && s.is_alive() && s.hp < threshold)
        .map(|s| s.index)
        .collect();
    let Some(pick) = rng.pick(candidates.len()) else {
        return;
    };
    let target = candidates[pick];

    state.slots[index].hp -= spend;
    let patched = &mut state.slots[target];
    patched.hp = (patched.hp + patch).min(max_hp);
    state.events.push(SimEvent::Repaired {
        slot: index,
        target,
        amount: patch,
    });

    if state.slots[index].hp == 0 {
        state.destroy_slot(index, DestructionCause::Repair);
    }
}
