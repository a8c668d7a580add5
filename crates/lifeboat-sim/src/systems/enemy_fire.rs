//! Enemy wave AI: countdown, evasion roll, shield absorption, hull damage.

use glam::Vec2;
use tracing::{debug, info};

use lifeboat_core::components::{FireTarget, Subsystem};
use lifeboat_core::config::TuningConfig;
use lifeboat_core::constants::MISS_TARGET;
use lifeboat_core::enums::{DestructionCause, EncounterPhase};
use lifeboat_core::events::SimEvent;
use lifeboat_core::stats::ShipStats;

use crate::encounter::EncounterState;
use crate::random::RandomSource;

/// Resolve one tick of enemy fire, ships in wave order.
///
/// A ship whose countdown has run out fires a volley of the wave's damage.
/// The volley may be evaded (chance = total evade / 100). What is not
/// evaded drains live shields in slot order; whatever gets through lands on
/// a random live slot's hull. If no live slot is left, the ship is lost and
/// the remaining enemies hold fire.
pub fn run(
    state: &mut EncounterState,
    stats: &ShipStats,
    tuning: &TuningConfig,
    rng: &mut dyn RandomSource,
) {
    let evade_chance = stats.evade / 100.0;

    for enemy in 0..state.wave.ships.len() {
        let ship = &mut state.wave.ships[enemy];
        ship.fire_at = None;
        if !ship.is_alive() {
            continue;
        }
        if ship.fire_countdown > 0 {
            ship.fire_countdown -= 1;
            continue;
        }

        let mut damage = state.wave.damage;
        let mut fire_at = None;
        if rng.chance(evade_chance) {
            damage = 0.0;
            fire_at = Some(FireTarget {
                at: Vec2::new(MISS_TARGET.0, MISS_TARGET.1),
                vert: true,
            });
            state.log("Enemy misses!");
            state.events.push(SimEvent::EnemyMissed { enemy });
        }

        for slot in state.slots.iter_mut().filter(|s| s.is_alive()) {
            if damage <= 0.0 {
                break;
            }
            let target = slot.target();
            let Subsystem::Shield { shield, .. } = &mut slot.system else {
                continue;
            };
            if *shield <= 0.0 {
                continue;
            }
            if fire_at.is_none() {
                fire_at = Some(target);
            }
            let absorbed = damage.min(*shield);
            *shield -= absorbed;
            damage -= absorbed;
            state.events.push(SimEvent::ShieldHit {
                enemy,
                slot: slot.index,
                absorbed,
            });
        }

        if damage > 0.0 {
            let live = state.live_slots();
            let Some(pick) = rng.pick(live.len()) else {
                state.wave.ships[enemy].fire_at = fire_at;
                info!(tick = state.tick, "ship lost");
                state.log("Ship destroyed");
                state.phase = EncounterPhase::Lost;
                state.events.push(SimEvent::ShipLost);
                break;
            };
            let index = live[pick];
            // Hull is whole points; a partial hit still costs one.
            let hit = damage.ceil() as u32;
            fire_at = Some(state.slots[index].target());
            state.events.push(SimEvent::SlotDamaged {
                enemy,
                slot: index,
                damage: hit,
            });
            if hit >= state.slots[index].hp {
                state.destroy_slot(index, DestructionCause::Enemy);
            } else {
                state.slots[index].hp -= hit;
            }
            debug!(enemy, slot = index, hit, "hull hit");
        }

        let ship = &mut state.wave.ships[enemy];
        ship.fire_at = fire_at;
        ship.fire_countdown =
            rng.range_inclusive(tuning.wave.fire_countdown_min, tuning.wave.fire_countdown_max);
    }
}
