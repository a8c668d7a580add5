//! Encounter state: everything one playthrough owns.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::info;

use lifeboat_core::components::{Slot, Wave};
use lifeboat_core::config::TuningConfig;
use lifeboat_core::enums::{DestructionCause, EncounterPhase};
use lifeboat_core::events::SimEvent;
use lifeboat_core::layout::SHIP_LAYOUT;
use lifeboat_core::stats::ShipStats;

use crate::power::PowerPriority;
use crate::random::RandomSource;
use crate::systems::wave_spawner;

/// Player-facing message log, keeping only the newest lines.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// Mutable state of one playthrough.
#[derive(Debug, Clone)]
pub struct EncounterState {
    pub slots: Vec<Slot>,
    pub wave: Wave,
    /// Ship-wide O2 supply.
    pub o2: f64,
    pub on_priority: PowerPriority,
    pub messages: MessageLog,
    pub phase: EncounterPhase,
    /// Ticks resolved so far.
    pub tick: u64,
    /// Real time left before the next tick.
    pub tick_countdown: Duration,
    /// Events raised since the last snapshot.
    pub events: Vec<SimEvent>,
}

impl EncounterState {
    /// Fresh ship from the standard layout, facing its first wave.
    pub fn new(tuning: &TuningConfig, rng: &mut dyn RandomSource) -> Self {
        let slots = SHIP_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, layout)| Slot::new(i, layout, &tuning.values))
            .collect();
        let wave = wave_spawner::next_wave(&tuning.wave, rng);
        let mut state = Self {
            slots,
            wave,
            o2: tuning.o2_initial,
            on_priority: PowerPriority::default(),
            messages: MessageLog::new(tuning.message_log_len),
            phase: EncounterPhase::Active,
            tick: 0,
            tick_countdown: tuning.tick_first(),
            events: Vec::new(),
        };
        state.events.push(SimEvent::WaveSpawned {
            num_ships: state.wave.num_ships,
        });
        state
    }

    pub fn stats(&self, tuning: &TuningConfig) -> ShipStats {
        ShipStats::aggregate(&self.slots, tuning.base_power)
    }

    pub fn log(&mut self, line: impl Into<String>) {
        let line = line.into();
        info!(tick = self.tick, "{line}");
        self.messages.push(line);
    }

    /// Indices of slots that still have hull.
    pub fn live_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .filter(|s| s.is_alive())
            .map(|s| s.index)
            .collect()
    }

    /// Switch a slot off and drop it from the priority stack.
    pub fn power_off(&mut self, index: usize) {
        self.slots[index].power = 0;
        self.on_priority.remove(index);
    }

    /// Zero a slot's hull and release everything it held.
    pub fn destroy_slot(&mut self, index: usize, cause: DestructionCause) {
        self.power_off(index);
        let slot = &mut self.slots[index];
        slot.hp = 0;
        slot.autooff = false;
        slot.autocool = false;
        let kind = slot.kind();
        self.log(format!(
            "{} destroyed by {}",
            kind.display_name(),
            cause.display_name()
        ));
        self.events.push(SimEvent::SlotDestroyed {
            slot: index,
            kind,
            cause,
        });
    }

    /// Clear every per-tick shot marker.
    pub fn clear_fire(&mut self) {
        for slot in &mut self.slots {
            slot.fire_at = None;
        }
        for ship in &mut self.wave.ships {
            ship.fire_at = None;
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase != EncounterPhase::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_log_keeps_newest() {
        let mut log = MessageLog::new(2);
        log.push("a");
        log.push("b");
        log.push("c");
        assert_eq!(log.to_vec(), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(log.len(), 2);
    }
}
