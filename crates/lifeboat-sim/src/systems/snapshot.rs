//! Snapshot system: builds the read-only view a frontend draws from.
//!
//! This system never modifies the encounter.

use lifeboat_core::components::{Slot, Wave};
use lifeboat_core::config::TuningConfig;
use lifeboat_core::events::SimEvent;
use lifeboat_core::state::*;
use lifeboat_core::stats::ShipStats;

use crate::encounter::EncounterState;
use crate::power;

/// Build a complete snapshot of the current encounter.
pub fn build_snapshot(
    state: &EncounterState,
    tuning: &TuningConfig,
    events: Vec<SimEvent>,
) -> EncounterSnapshot {
    let stats = state.stats(tuning);
    EncounterSnapshot {
        tick: state.tick,
        phase: state.phase,
        o2: state.o2,
        stats,
        slots: state
            .slots
            .iter()
            .map(|slot| build_slot(slot, tuning, &stats))
            .collect(),
        wave: build_wave(&state.wave),
        on_priority: state.on_priority.to_vec(),
        messages: state.messages.to_vec(),
        events,
        tick_countdown_ms: state.tick_countdown.as_millis() as u64,
    }
}

fn build_slot(slot: &Slot, tuning: &TuningConfig, stats: &ShipStats) -> SlotView {
    let kind = slot.kind();
    let values = kind
        .panel()
        .values
        .iter()
        .copied()
        .map(|entry| {
            entry.and_then(|resource| {
                let def = tuning.values.get(resource);
                slot.value(resource).map(|value| ValueView {
                    resource,
                    value,
                    max: def.max,
                    label: def.label.clone(),
                })
            })
        })
        .collect();

    SlotView {
        index: slot.index,
        kind,
        anchor: slot.anchor,
        vert: slot.vert,
        power: slot.power,
        power_levels: tuning.power_levels(kind),
        hp: slot.hp,
        destroyed: !slot.is_alive(),
        autocool: slot.autocool,
        autooff: slot.autooff,
        disabled: slot.is_alive() && power::lacks_capacity(slot, stats),
        fire_at: slot.fire_at,
        values,
    }
}

fn build_wave(wave: &Wave) -> WaveView {
    WaveView {
        num_ships: wave.num_ships,
        alive: wave.alive_count(),
        damage: wave.damage,
        won: wave.won,
        ships: wave.ships.clone(),
    }
}
