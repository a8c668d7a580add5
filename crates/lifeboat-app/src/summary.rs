//! Run summary: a compact record of one session, printed as JSON on exit.

use serde::Serialize;

use lifeboat_core::enums::{DestructionCause, EncounterPhase};
use lifeboat_core::events::SimEvent;
use lifeboat_core::state::EncounterSnapshot;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub phase: EncounterPhase,
    pub waves_won: u32,
    pub enemies_destroyed: u32,
    pub slots_lost_to_heat: u32,
    pub slots_lost_to_enemy: u32,
    pub passengers_lost: u32,
    pub o2: f64,
    pub hull: f64,
    pub passengers: f64,
}

impl RunSummary {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Fold one snapshot in. Each snapshot's events must be observed once.
    pub fn observe(&mut self, snapshot: &EncounterSnapshot) {
        for event in &snapshot.events {
            match event {
                SimEvent::WaveWon => self.waves_won += 1,
                SimEvent::WeaponFired { .. } => self.enemies_destroyed += 1,
                SimEvent::PassengerLost { .. } => self.passengers_lost += 1,
                SimEvent::SlotDestroyed { cause, .. } => match cause {
                    DestructionCause::Heat => self.slots_lost_to_heat += 1,
                    DestructionCause::Enemy => self.slots_lost_to_enemy += 1,
                    DestructionCause::Repair => {}
                },
                _ => {}
            }
        }
        self.ticks = snapshot.tick;
        self.phase = snapshot.phase;
        self.o2 = snapshot.o2;
        self.hull = snapshot.stats.hp;
        self.passengers = snapshot.stats.cargo;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeboat_core::enums::SubsystemKind;

    #[test]
    fn test_observe_counts_events() {
        let mut summary = RunSummary::new(7);
        let snapshot = EncounterSnapshot {
            tick: 12,
            phase: EncounterPhase::Won,
            o2: 40.0,
            events: vec![
                SimEvent::WeaponFired {
                    slot: 0,
                    enemy: 1,
                    target: glam::Vec2::ZERO,
                },
                SimEvent::SlotDestroyed {
                    slot: 4,
                    kind: SubsystemKind::Engine,
                    cause: DestructionCause::Heat,
                },
                SimEvent::PassengerLost { slot: 8 },
                SimEvent::WaveWon,
            ],
            ..Default::default()
        };
        summary.observe(&snapshot);

        assert_eq!(summary.seed, 7);
        assert_eq!(summary.ticks, 12);
        assert_eq!(summary.phase, EncounterPhase::Won);
        assert_eq!(summary.waves_won, 1);
        assert_eq!(summary.enemies_destroyed, 1);
        assert_eq!(summary.slots_lost_to_heat, 1);
        assert_eq!(summary.slots_lost_to_enemy, 0);
        assert_eq!(summary.passengers_lost, 1);
        assert_eq!(summary.o2, 40.0);
    }

    #[test]
    fn test_summary_serializes_flat() {
        let summary = RunSummary::new(1);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["seed"], 1);
        assert_eq!(json["waves_won"], 0);
        assert_eq!(json["phase"], "Active");
    }
}
