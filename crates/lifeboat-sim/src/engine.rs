//! Encounter controller: the core of the game.
//!
//! `EncounterController` owns the encounter state and the random source,
//! converts real elapsed time into discrete ticks, applies player commands,
//! and produces `EncounterSnapshot`s. Completely headless, so encounters
//! are reproducible from a seed.

use std::collections::VecDeque;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use lifeboat_core::commands::{CommandOutcome, IgnoreReason, PlayerCommand};
use lifeboat_core::config::TuningConfig;
use lifeboat_core::enums::EncounterPhase;
use lifeboat_core::events::SimEvent;
use lifeboat_core::state::EncounterSnapshot;
use lifeboat_core::stats::ShipStats;

use crate::encounter::EncounterState;
use crate::power;
use crate::random::RandomSource;
use crate::systems;

/// Configuration for starting a new encounter.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same encounter.
    pub seed: u64,
    pub tuning: TuningConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: TuningConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum PowerStep {
    Up,
    Down,
}

/// Owns one playthrough and advances it.
pub struct EncounterController<R: RandomSource = ChaCha8Rng> {
    tuning: TuningConfig,
    rng: R,
    state: EncounterState,
    command_queue: VecDeque<PlayerCommand>,
}

impl EncounterController<ChaCha8Rng> {
    /// Start an encounter with a seeded ChaCha source.
    pub fn new(config: SimConfig) -> Self {
        Self::with_random(config.tuning, ChaCha8Rng::seed_from_u64(config.seed))
    }
}

impl<R: RandomSource> EncounterController<R> {
    /// Start an encounter drawing randomness from `rng`.
    pub fn with_random(tuning: TuningConfig, mut rng: R) -> Self {
        let state = EncounterState::new(&tuning, &mut rng);
        info!(ships = state.wave.num_ships, "encounter started");
        Self {
            tuning,
            rng,
            state,
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a player command for the next `advance`.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance real time by one frame of `dt` and return the resulting
    /// snapshot.
    ///
    /// Queued commands apply first. A tick fires once the accumulated time
    /// reaches the countdown; the next countdown is the nominal interval
    /// minus the overshoot, but never less than half the interval, so a
    /// long frame cannot trigger a burst of catch-up ticks.
    pub fn advance(&mut self, dt: Duration) -> EncounterSnapshot {
        self.process_commands();
        systems::approach::run(&mut self.state.wave, dt, self.tuning.enemy_speed);

        if dt >= self.state.tick_countdown {
            let overshoot = dt - self.state.tick_countdown;
            self.step();
            let each = self.tuning.tick_each();
            self.state.tick_countdown = each.saturating_sub(overshoot).max(each / 2);
        } else {
            self.state.tick_countdown -= dt;
        }

        self.snapshot()
    }

    /// Resolve exactly one simulation tick.
    pub fn step(&mut self) {
        if !self.begin_tick() {
            return;
        }
        let stats = self.resolve_ship();
        self.resolve_combat(&stats);
    }

    /// Win check and per-tick reset. Returns `false` once the encounter is
    /// decided and the tick must not advance.
    pub(crate) fn begin_tick(&mut self) -> bool {
        if systems::victory::check(&mut self.state) {
            return false;
        }
        self.state.tick += 1;
        self.state.clear_fire();
        true
    }

    /// Slot pass and power arbitration. Returns the aggregate arbitration
    /// reconciled, which the combat phase also reads.
    pub(crate) fn resolve_ship(&mut self) -> ShipStats {
        // 1. Heat, regulation, repair, weapons, slot by slot
        systems::subsystems::run(&mut self.state, &self.tuning, &mut self.rng);

        // 2. Power arbitration
        let stats = self.state.stats(&self.tuning);
        let report = power::arbitrate(&mut self.state.slots, &mut self.state.on_priority, &stats);
        for &slot in &report.shed {
            self.state.events.push(SimEvent::AutoPowerOff { slot });
        }
        for &slot in &report.restored {
            self.state.events.push(SimEvent::AutoPowerRestored { slot });
        }
        debug!(
            tick = self.state.tick,
            power = stats.power,
            gen = stats.gen,
            shed = report.shed.len(),
            restored = report.restored.len(),
            "power arbitrated"
        );
        stats
    }

    /// Ship O2, then the enemy wave.
    pub(crate) fn resolve_combat(&mut self, stats: &ShipStats) {
        // 3. Ship O2
        systems::life_support::run(&mut self.state, stats, &self.tuning, &mut self.rng);

        // 4. Enemy wave
        systems::enemy_fire::run(&mut self.state, stats, &self.tuning, &mut self.rng);

        debug!(tick = self.state.tick, o2 = self.state.o2, "tick resolved");
    }

    /// Apply a player command immediately.
    pub fn apply_command(&mut self, command: PlayerCommand) -> CommandOutcome {
        let outcome = match command {
            PlayerCommand::TogglePower { slot } => self.change_power(slot, PowerStep::Up),
            PlayerCommand::CyclePowerDown { slot } => self.change_power(slot, PowerStep::Down),
            PlayerCommand::NextWave => self.next_wave(),
            PlayerCommand::Restart => {
                self.state = EncounterState::new(&self.tuning, &mut self.rng);
                info!("encounter restarted");
                CommandOutcome::Applied
            }
        };
        match outcome {
            CommandOutcome::Ignored(IgnoreReason::UnknownSlot) => {
                warn!(?command, "command addressed a slot that does not exist");
            }
            CommandOutcome::Ignored(reason) => debug!(?command, ?reason, "command ignored"),
            CommandOutcome::Applied => {}
        }
        outcome
    }

    /// Build a snapshot, draining events raised since the last one.
    pub fn snapshot(&mut self) -> EncounterSnapshot {
        let events = std::mem::take(&mut self.state.events);
        systems::snapshot::build_snapshot(&self.state, &self.tuning, events)
    }

    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    /// Mutable access for scenario setup in tests.
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut EncounterState {
        &mut self.state
    }

    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    pub fn phase(&self) -> EncounterPhase {
        self.state.phase
    }

    pub fn stats(&self) -> ShipStats {
        self.state.stats(&self.tuning)
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.apply_command(command);
        }
    }

    fn change_power(&mut self, index: usize, step: PowerStep) -> CommandOutcome {
        let stats = self.state.stats(&self.tuning);
        let Some(slot) = self.state.slots.get_mut(index) else {
            return CommandOutcome::Ignored(IgnoreReason::UnknownSlot);
        };
        let kind = slot.kind();
        if !slot.is_alive() {
            return CommandOutcome::Ignored(IgnoreReason::Destroyed);
        }
        if !kind.is_powerable() {
            return CommandOutcome::Ignored(IgnoreReason::Unpowerable);
        }
        if slot.autocool {
            return CommandOutcome::Ignored(IgnoreReason::Autocooling);
        }
        if power::lacks_capacity(slot, &stats) {
            return CommandOutcome::Ignored(IgnoreReason::InsufficientPower);
        }

        let levels = self.tuning.power_levels(kind);
        match step {
            PowerStep::Up if slot.autooff => {
                slot.autooff = false;
                slot.power = 0;
            }
            PowerStep::Up => {
                slot.power = if slot.power >= levels - 1 {
                    0
                } else {
                    slot.power + 1
                };
            }
            PowerStep::Down => {
                slot.autooff = false;
                slot.power = match slot.power {
                    0 => levels - 1,
                    p => (p - 1).min(levels - 1),
                };
            }
        }

        let powered = slot.power > 0 && kind.draws_power();
        self.state.on_priority.remove(index);
        if powered {
            self.state.on_priority.push(index);
        }
        CommandOutcome::Applied
    }

    fn next_wave(&mut self) -> CommandOutcome {
        if self.state.phase == EncounterPhase::Lost {
            return CommandOutcome::Ignored(IgnoreReason::EncounterOver);
        }
        if !self.state.wave.won {
            return CommandOutcome::Ignored(IgnoreReason::WaveInProgress);
        }
        self.state.wave = systems::wave_spawner::next_wave(&self.tuning.wave, &mut self.rng);
        self.state.phase = EncounterPhase::Active;
        self.state.events.push(SimEvent::WaveSpawned {
            num_ships: self.state.wave.num_ships,
        });
        self.state.log("Enemy wave approaching");
        CommandOutcome::Applied
    }
}
