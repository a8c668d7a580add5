//! Enemy approach: live ships glide in from the right edge to their station.

use std::time::Duration;

use lifeboat_core::components::Wave;
use lifeboat_core::constants::ENEMY_SHIP_X1;

/// Move every live enemy left by `speed * dt`, stopping at station.
pub fn run(wave: &mut Wave, dt: Duration, speed: f32) {
    let dist = speed * dt.as_secs_f32();
    for ship in wave.ships.iter_mut().filter(|s| s.is_alive()) {
        if ship.position.x > ENEMY_SHIP_X1 {
            ship.position.x = (ship.position.x - dist).max(ENEMY_SHIP_X1);
        }
    }
}
