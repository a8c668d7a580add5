//! Per-slot tick: heat first, then the subsystem's own behavior.
//!
//! Slots are processed in index order, each to completion before the next,
//! so a repair or a weapon shot sees the slots before it already updated.

use tracing::debug;

use lifeboat_core::config::TuningConfig;
use lifeboat_core::enums::{DestructionCause, SubsystemKind};
use lifeboat_core::events::SimEvent;

use crate::encounter::EncounterState;
use crate::random::RandomSource;
use crate::systems::heat::{self, HeatOutcome};
use crate::systems::{regulation, repair, weapons};

pub fn run(state: &mut EncounterState, tuning: &TuningConfig, rng: &mut dyn RandomSource) {
    for index in 0..state.slots.len() {
        if !state.slots[index].is_alive() {
            continue;
        }

        match heat::apply(&mut state.slots[index], tuning) {
            HeatOutcome::Destroyed => {
                state.destroy_slot(index, DestructionCause::Heat);
                continue;
            }
            HeatOutcome::Shutdown => {
                state.power_off(index);
                let kind = state.slots[index].kind();
                debug!(slot = index, ?kind, "overheat shutdown");
                state.log(format!("{} overheated", kind.display_name()));
                state.events.push(SimEvent::OverheatShutdown { slot: index });
            }
            HeatOutcome::Overheated | HeatOutcome::Nominal => {}
        }

        match state.slots[index].kind() {
            SubsystemKind::Shield
            | SubsystemKind::Engine
            | SubsystemKind::LifeSupport
            | SubsystemKind::Generator => regulation::apply(&mut state.slots[index], tuning),
            SubsystemKind::Repair => repair::apply(state, index, tuning, rng),
            SubsystemKind::Weapon => weapons::apply(state, index, tuning, rng),
            SubsystemKind::Cargo => {}
        }
    }
}
