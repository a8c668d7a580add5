//! Frontend seam: where player input comes from and where frames go.
//!
//! The simulation never draws or reads devices itself. A `Frontend` is
//! handed each snapshot to present and asked for the commands gathered
//! since the previous frame.

use std::io::Write;

use lifeboat_core::commands::PlayerCommand;
use lifeboat_core::enums::{EncounterPhase, ResourceKind, SubsystemKind};
use lifeboat_core::events::SimEvent;
use lifeboat_core::state::{EncounterSnapshot, SlotView};

use crate::summary::RunSummary;

/// Input and presentation collaborator of the encounter controller.
pub trait Frontend {
    /// Player commands gathered since the last frame.
    fn poll_input(&mut self, snapshot: &EncounterSnapshot) -> Vec<PlayerCommand>;

    /// Present one frame.
    fn present(&mut self, snapshot: &EncounterSnapshot);
}

/// Switch-on order the autopilot works through.
const PRIORITY: [SubsystemKind; 6] = [
    SubsystemKind::Generator,
    SubsystemKind::Weapon,
    SubsystemKind::Shield,
    SubsystemKind::Engine,
    SubsystemKind::LifeSupport,
    SubsystemKind::Repair,
];

/// Heat fraction at which a powered slot is switched off.
const HOT: f64 = 0.9;
/// Heat fraction a slot must cool below before it is switched back on.
const COOL: f64 = 0.5;

/// Stand-in player for headless runs.
///
/// Keeps generation, weapons and shields fed, switches slots off before
/// they overheat, and calls the next wave after each win. Issues at most
/// one command per frame and never repeats a command within the same tick,
/// since the previous one may not have reached the controller yet.
#[derive(Debug, Default, Clone)]
pub struct Autopilot {
    last: Option<(u64, PlayerCommand)>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decide(&mut self, snapshot: &EncounterSnapshot) -> Option<PlayerCommand> {
        let command = Self::choose(snapshot)?;
        if self.last == Some((snapshot.tick, command)) {
            return None;
        }
        self.last = Some((snapshot.tick, command));
        Some(command)
    }

    fn choose(snapshot: &EncounterSnapshot) -> Option<PlayerCommand> {
        match snapshot.phase {
            EncounterPhase::Won => return Some(PlayerCommand::NextWave),
            EncounterPhase::Lost => return None,
            EncounterPhase::Active => {}
        }
        if let Some(slot) = snapshot
            .slots
            .iter()
            .find(|s| s.power > 0 && !s.destroyed && heat_fraction(s) >= HOT)
        {
            return Some(PlayerCommand::CyclePowerDown { slot: slot.index });
        }
        PRIORITY.iter().find_map(|&kind| {
            snapshot
                .slots
                .iter()
                .find(|s| s.kind == kind && switchable(s))
                .map(|s| PlayerCommand::TogglePower { slot: s.index })
        })
    }
}

fn heat_fraction(slot: &SlotView) -> f64 {
    slot.values
        .iter()
        .flatten()
        .find(|v| v.resource == ResourceKind::Heat)
        .map(|v| v.value / v.max)
        .unwrap_or(0.0)
}

fn switchable(slot: &SlotView) -> bool {
    slot.power == 0
        && slot.power_levels > 1
        && !slot.destroyed
        && !slot.autocool
        && !slot.autooff
        && !slot.disabled
        && heat_fraction(slot) < COOL
}

/// Text frontend: one status line per tick plus a line for each notable
/// event. Input comes from the autopilot.
pub struct ConsoleFrontend<W: Write> {
    out: W,
    autopilot: Autopilot,
    summary: RunSummary,
    last_tick: Option<u64>,
}

impl<W: Write> ConsoleFrontend<W> {
    pub fn new(out: W, seed: u64) -> Self {
        Self {
            out,
            autopilot: Autopilot::new(),
            summary: RunSummary::new(seed),
            last_tick: None,
        }
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Frontend for ConsoleFrontend<W> {
    fn poll_input(&mut self, snapshot: &EncounterSnapshot) -> Vec<PlayerCommand> {
        self.autopilot.decide(snapshot).into_iter().collect()
    }

    fn present(&mut self, snapshot: &EncounterSnapshot) {
        self.summary.observe(snapshot);
        for event in &snapshot.events {
            if let Some(line) = describe(event) {
                let _ = writeln!(self.out, "[{:>4}] {line}", snapshot.tick);
            }
        }
        if self.last_tick == Some(snapshot.tick) {
            return;
        }
        self.last_tick = Some(snapshot.tick);
        let stats = &snapshot.stats;
        let _ = writeln!(
            self.out,
            "[{:>4}] {:?} power {}/{} o2 {:.0} hull {:.0} shield {:.0} evade {:.0}% enemies {}/{}",
            snapshot.tick,
            snapshot.phase,
            stats.power,
            stats.gen,
            snapshot.o2,
            stats.hp,
            stats.shield,
            stats.evade,
            snapshot.wave.alive,
            snapshot.wave.num_ships,
        );
    }
}

fn describe(event: &SimEvent) -> Option<String> {
    let line = match event {
        SimEvent::WaveSpawned { num_ships } => format!("{num_ships} enemy ships approaching"),
        SimEvent::WeaponFired { slot, enemy, .. } => {
            format!("weapon {slot} destroyed enemy {enemy}")
        }
        SimEvent::SlotDestroyed { slot, kind, cause } => format!(
            "{} ({slot}) destroyed by {}",
            kind.display_name(),
            cause.display_name()
        ),
        SimEvent::OverheatShutdown { slot } => format!("slot {slot} overheated"),
        SimEvent::PassengerLost { .. } => "refugee lost".to_string(),
        SimEvent::WaveWon => "wave defeated".to_string(),
        SimEvent::ShipLost => "ship destroyed".to_string(),
        _ => return None,
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeboat_sim::engine::{EncounterController, SimConfig};

    fn fresh_snapshot() -> EncounterSnapshot {
        EncounterController::new(SimConfig::default()).snapshot()
    }

    #[test]
    fn test_autopilot_powers_generator_first() {
        let mut pilot = Autopilot::new();
        let snap = fresh_snapshot();
        assert_eq!(
            pilot.decide(&snap),
            Some(PlayerCommand::TogglePower { slot: 10 })
        );
    }

    #[test]
    fn test_autopilot_does_not_repeat_within_tick() {
        let mut pilot = Autopilot::new();
        let snap = fresh_snapshot();
        assert!(pilot.decide(&snap).is_some());
        assert!(pilot.decide(&snap).is_none());

        let later = EncounterSnapshot {
            tick: snap.tick + 1,
            ..snap
        };
        assert!(pilot.decide(&later).is_some());
    }

    #[test]
    fn test_autopilot_calls_next_wave_after_win() {
        let mut pilot = Autopilot::new();
        let snap = EncounterSnapshot {
            phase: EncounterPhase::Won,
            ..fresh_snapshot()
        };
        assert_eq!(pilot.decide(&snap), Some(PlayerCommand::NextWave));
    }

    #[test]
    fn test_autopilot_cuts_hot_slot() {
        let mut pilot = Autopilot::new();
        let mut snap = fresh_snapshot();
        let slot = &mut snap.slots[4];
        slot.power = 1;
        for value in slot.values.iter_mut().flatten() {
            if value.resource == ResourceKind::Heat {
                value.value = 95.0;
            }
        }
        assert_eq!(
            pilot.decide(&snap),
            Some(PlayerCommand::CyclePowerDown { slot: 4 })
        );
    }

    #[test]
    fn test_console_prints_status_once_per_tick() {
        let mut console = ConsoleFrontend::new(Vec::new(), 42);
        let snap = fresh_snapshot();
        console.present(&snap);
        console.present(&EncounterSnapshot {
            events: Vec::new(),
            ..snap
        });
        let text = String::from_utf8(console.into_inner()).unwrap();
        let status_lines = text.lines().filter(|l| l.contains("power 0/3")).count();
        assert_eq!(status_lines, 1);
        assert!(text.contains("2 enemy ships approaching"));
    }
}
