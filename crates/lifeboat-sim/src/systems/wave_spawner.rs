//! Wave generator: builds the next batch of enemy ships.

use glam::Vec2;

use lifeboat_core::components::{EnemyShip, Wave};
use lifeboat_core::config::WaveParams;
use lifeboat_core::constants::*;

use crate::random::RandomSource;

/// Build a fresh wave. Ships enter just past the right edge with a little
/// horizontal jitter, anywhere in the vertical playfield, and fire first
/// after the base countdown plus random jitter.
pub fn next_wave(params: &WaveParams, rng: &mut dyn RandomSource) -> Wave {
    let mut ships = Vec::with_capacity(params.num_ships);
    for _ in 0..params.num_ships {
        let x = ENEMY_SHIP_X0 - rng.next_unit() as f32 * ENEMY_SPAWN_JITTER_X;
        let y = ENEMY_SHIP_H + rng.next_unit() as f32 * (GAME_HEIGHT - ENEMY_SHIP_H * 2.0);
        ships.push(EnemyShip {
            position: Vec2::new(x, y),
            hp: params.max_hp,
            fire_countdown: params.initial_countdown + rng.below(params.initial_jitter),
            fire_at: None,
        });
    }
    Wave {
        num_ships: params.num_ships,
        max_hp: params.max_hp,
        damage: params.damage,
        ships,
        won: false,
    }
}
