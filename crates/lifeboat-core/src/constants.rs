//! Simulation constants and tuning defaults.
//!
//! Values that a tuning file may override live in `config::TuningConfig`;
//! the constants here are its defaults plus fixed playfield geometry.

// --- Playfield geometry (virtual pixels) ---

/// Virtual viewport width.
pub const GAME_WIDTH: f32 = 384.0;

/// Virtual viewport height.
pub const GAME_HEIGHT: f32 = 288.0;

/// Player ship sprite width.
pub const SHIP_W: f32 = 288.0;

/// Player ship sprite height.
pub const SHIP_H: f32 = 288.0;

/// Left edge of the player ship on screen.
pub const SHIP_X: f32 = 18.0;

/// Long side of a subsystem panel.
pub const PANEL_W: f32 = 64.0;

/// Short side of a subsystem panel.
pub const PANEL_H: f32 = 32.0;

/// Enemy sprite height; also the vertical margin for spawns.
pub const ENEMY_SHIP_H: f32 = 64.0;

/// X coordinate at which enemies enter (just past the right edge).
pub const ENEMY_SHIP_X0: f32 = GAME_WIDTH + 32.0;

/// X coordinate at which enemies hold station.
pub const ENEMY_SHIP_X1: f32 = SHIP_X + SHIP_W + (GAME_WIDTH - SHIP_W - SHIP_X) / 2.0;

/// Horizontal spawn jitter (pixels subtracted from `ENEMY_SHIP_X0`).
pub const ENEMY_SPAWN_JITTER_X: f32 = 10.0;

/// Ship-relative point enemy fire is drawn to when it misses.
pub const MISS_TARGET: (f32, f32) = (SHIP_W, SHIP_H / 2.0);

// --- Tick cadence ---

/// Delay before the first tick of an encounter (milliseconds).
pub const TICK_FIRST_MS: u64 = 5000;

/// Nominal interval between ticks (milliseconds).
pub const TICK_EACH_MS: u64 = 1000;

// --- Power ---

/// Number of power levels (0 = off, 1 = on). 2 would make overdrive reachable.
pub const MAX_POWER: u8 = 2;

/// Generation available before any generator contributes.
pub const POWER_BASE: f64 = 3.0;

// --- Per-power-level deltas (indexed by power) ---

pub const HEAT_DELTA: [f64; 3] = [-5.0, 5.0, 20.0];
pub const SHIELD_DELTA: [f64; 3] = [-5.0, 10.0, 40.0];
pub const EVADE_DELTA: [f64; 3] = [-5.0 / 3.0, 10.0 / 3.0, 40.0 / 3.0];
pub const CHARGE_DELTA: [f64; 3] = [-5.0, 10.0, 40.0];
pub const O2PROD_DELTA: [f64; 2] = [-25.0, 25.0];
pub const GEN_DELTA: [f64; 2] = [-0.5, 1.0];

// --- Heat ---

/// Hull damage applied each tick a subsystem sits above max heat.
pub const OVERHEAT_DAMAGE: u32 = 5;

/// Consecutive overheated ticks before a forced shutdown.
pub const OVERHEAT_TICKS: u32 = 5;

// --- Repair bay ---

/// Hull points the repair bay spends per tick.
pub const REPAIR_SIZE: u32 = 5;

/// Hull points restored per point spent.
pub const REPAIR_FACTOR: u32 = 5;

// --- Life support ---

/// Ship O2 consumed per tick.
pub const O2_CONSUMPTION: f64 = 2.0;

/// Ship O2 level at the start of an encounter.
pub const O2_INITIAL: f64 = 80.0;

/// Ceiling of the ship-wide O2 supply.
pub const O2_SUPPLY_MAX: f64 = 100.0;

// --- Enemy waves ---

pub const WAVE_NUM_SHIPS: usize = 2;
pub const WAVE_MAX_HP: u32 = 4;
pub const WAVE_DAMAGE: f64 = 5.0;

/// Ticks before a fresh enemy fires for the first time.
pub const ENEMY_INITIAL_COUNTDOWN: u32 = 5;

/// Extra random ticks added to the initial countdown (exclusive bound).
pub const ENEMY_INITIAL_JITTER: u32 = 3;

/// Inclusive range of ticks between enemy volleys.
pub const ENEMY_FIRE_COUNTDOWN: (u32, u32) = (2, 3);

/// Enemy approach speed (pixels per second).
pub const ENEMY_SHIP_SPEED: f32 = 40.0;

// --- Display ---

/// Number of log messages retained for display.
pub const MESSAGE_LOG_LEN: usize = 2;
