//! Tuning configuration: tick cadence, delta tables, resource bounds, waves.
//!
//! `TuningConfig::default()` is the canonical game balance. A JSON tuning
//! file may override any subset of fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::{ResourceKind, SubsystemKind};
use crate::registry::ValueRegistry;

/// Failure to load or validate a tuning file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Enemy wave parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    pub num_ships: usize,
    pub max_hp: u32,
    /// Damage per enemy volley.
    pub damage: f64,
    /// Base ticks before a fresh enemy first fires.
    pub initial_countdown: u32,
    /// Random extra ticks on the first volley, exclusive bound.
    pub initial_jitter: u32,
    /// Inclusive bounds on ticks between volleys.
    pub fire_countdown_min: u32,
    pub fire_countdown_max: u32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            num_ships: WAVE_NUM_SHIPS,
            max_hp: WAVE_MAX_HP,
            damage: WAVE_DAMAGE,
            initial_countdown: ENEMY_INITIAL_COUNTDOWN,
            initial_jitter: ENEMY_INITIAL_JITTER,
            fire_countdown_min: ENEMY_FIRE_COUNTDOWN.0,
            fire_countdown_max: ENEMY_FIRE_COUNTDOWN.1,
        }
    }
}

/// All tunable simulation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    pub tick_first_ms: u64,
    pub tick_each_ms: u64,
    /// Number of power levels a subsystem may cycle through.
    pub max_power: u8,
    pub base_power: f64,
    pub heat_delta: Vec<f64>,
    pub shield_delta: Vec<f64>,
    pub evade_delta: Vec<f64>,
    pub charge_delta: Vec<f64>,
    pub o2prod_delta: Vec<f64>,
    pub gen_delta: Vec<f64>,
    pub overheat_damage: u32,
    pub overheat_ticks: u32,
    pub repair_size: u32,
    pub repair_factor: u32,
    pub o2_consumption: f64,
    pub o2_initial: f64,
    pub values: ValueRegistry,
    pub wave: WaveParams,
    /// Enemy approach speed in pixels per second.
    pub enemy_speed: f32,
    pub message_log_len: usize,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            tick_first_ms: TICK_FIRST_MS,
            tick_each_ms: TICK_EACH_MS,
            max_power: MAX_POWER,
            base_power: POWER_BASE,
            heat_delta: HEAT_DELTA.to_vec(),
            shield_delta: SHIELD_DELTA.to_vec(),
            evade_delta: EVADE_DELTA.to_vec(),
            charge_delta: CHARGE_DELTA.to_vec(),
            o2prod_delta: O2PROD_DELTA.to_vec(),
            gen_delta: GEN_DELTA.to_vec(),
            overheat_damage: OVERHEAT_DAMAGE,
            overheat_ticks: OVERHEAT_TICKS,
            repair_size: REPAIR_SIZE,
            repair_factor: REPAIR_FACTOR,
            o2_consumption: O2_CONSUMPTION,
            o2_initial: O2_INITIAL,
            values: ValueRegistry::default(),
            wave: WaveParams::default(),
            enemy_speed: ENEMY_SHIP_SPEED,
            message_log_len: MESSAGE_LOG_LEN,
        }
    }
}

impl TuningConfig {
    /// Parse and validate a tuning file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate tuning JSON. Missing fields keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: TuningConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_power == 0 {
            return Err(ConfigError::Invalid("max_power must be at least 1".into()));
        }
        if self.tick_each_ms == 0 {
            return Err(ConfigError::Invalid("tick_each_ms must be positive".into()));
        }
        let tables = [
            ("heat_delta", &self.heat_delta),
            ("shield_delta", &self.shield_delta),
            ("evade_delta", &self.evade_delta),
            ("charge_delta", &self.charge_delta),
            ("o2prod_delta", &self.o2prod_delta),
            ("gen_delta", &self.gen_delta),
        ];
        for (name, table) in tables {
            if table.is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }
        for resource in ResourceKind::ALL {
            let def = self.values.get(resource);
            if def.max <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{resource:?} max must be positive"
                )));
            }
            if !(0.0..=def.max).contains(&def.start) {
                return Err(ConfigError::Invalid(format!(
                    "{resource:?} start {} outside [0, {}]",
                    def.start, def.max
                )));
            }
        }
        if self.wave.fire_countdown_min > self.wave.fire_countdown_max {
            return Err(ConfigError::Invalid(
                "wave fire countdown range is inverted".into(),
            ));
        }
        Ok(())
    }

    /// Per-power delta table for a regulated resource.
    pub fn delta_table(&self, resource: ResourceKind) -> Option<&[f64]> {
        let table = match resource {
            ResourceKind::Heat => &self.heat_delta,
            ResourceKind::Shield => &self.shield_delta,
            ResourceKind::Evade => &self.evade_delta,
            ResourceKind::Charge => &self.charge_delta,
            ResourceKind::O2 => &self.o2prod_delta,
            ResourceKind::Gen => &self.gen_delta,
            ResourceKind::Hp | ResourceKind::Cargo => return None,
        };
        Some(table)
    }

    /// Delta applied to `resource` at `power`. Power levels past the end of
    /// a table are unreachable (see `power_levels`), so they fall back to
    /// the last entry.
    pub fn delta(&self, resource: ResourceKind, power: u8) -> f64 {
        self.delta_table(resource)
            .and_then(|table| table.get(usize::from(power)).or(table.last()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Number of power levels reachable by `kind`: `max_power`, capped by
    /// the length of every delta table the kind is driven by.
    pub fn power_levels(&self, kind: SubsystemKind) -> u8 {
        if !kind.is_powerable() {
            return 1;
        }
        kind.panel()
            .resources()
            .filter_map(|r| self.delta_table(r))
            .map(|t| u8::try_from(t.len()).unwrap_or(u8::MAX))
            .fold(self.max_power, u8::min)
            .max(1)
    }

    pub fn tick_first(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_first_ms)
    }

    pub fn tick_each(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_each_ms)
    }
}
