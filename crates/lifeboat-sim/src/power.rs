//! Power arbitration: keeping total draw within generation capacity.
//!
//! `PowerPriority` remembers the order in which subsystems were switched on.
//! When draw exceeds generation, the most recently powered subsystem is
//! shed first; when capacity frees up, shed subsystems come back in slot
//! order.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use lifeboat_core::components::Slot;
use lifeboat_core::stats::ShipStats;

/// Powered, power-drawing slot indices, oldest first. No duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerPriority {
    order: VecDeque<usize>,
}

impl PowerPriority {
    /// Record `index` as the most recently powered slot.
    pub fn push(&mut self, index: usize) {
        self.remove(index);
        self.order.push_back(index);
    }

    /// Take the most recently powered slot.
    pub fn pop_latest(&mut self) -> Option<usize> {
        self.order.pop_back()
    }

    /// Forget `index`. Returns whether it was present.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.order.iter().position(|&i| i == index) {
            Some(pos) => {
                self.order.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.order.contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.order.iter().copied().collect()
    }
}

/// Whether an unpowered slot is locked off because generation is already
/// fully spoken for. Generators stay switchable so the player can always
/// raise capacity, and auto-off slots can always be cleared.
pub fn lacks_capacity(slot: &Slot, stats: &ShipStats) -> bool {
    slot.power == 0 && !slot.autooff && slot.kind().draws_power() && stats.at_capacity()
}

/// Slots switched off or back on by one arbitration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArbitrationReport {
    pub shed: Vec<usize>,
    pub restored: Vec<usize>,
}

/// Reconcile requested power against generation.
///
/// `stats` must be an aggregate of `slots` taken after this tick's resource
/// updates.
///
/// # Panics
///
/// Panics if draw still exceeds generation with nothing left on the
/// priority stack. That means slot power and the stack have drifted apart.
pub fn arbitrate(
    slots: &mut [Slot],
    priority: &mut PowerPriority,
    stats: &ShipStats,
) -> ArbitrationReport {
    let mut report = ArbitrationReport::default();
    let mut power = stats.power;
    let gen = stats.gen;

    if power > gen {
        while power > gen {
            let Some(index) = priority.pop_latest() else {
                panic!(
                    "power arbitration desync: {power} drawn against {gen} generated \
                     with an empty priority stack"
                );
            };
            let slot = &mut slots[index];
            assert!(
                slot.power > 0,
                "slot {index} is on the priority stack but unpowered"
            );
            power = power.saturating_sub(slot.power_draw());
            slot.power = 0;
            slot.autooff = true;
            report.shed.push(index);
        }
    } else if power < gen {
        for slot in slots.iter_mut() {
            if power >= gen {
                break;
            }
            if slot.autooff && slot.is_alive() {
                slot.autooff = false;
                slot.power = 1;
                priority.push(slot.index);
                power += 1;
                report.restored.push(slot.index);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeboat_core::constants::POWER_BASE;
    use lifeboat_core::layout::SHIP_LAYOUT;
    use lifeboat_core::registry::ValueRegistry;

    fn fresh_slots() -> Vec<Slot> {
        let registry = ValueRegistry::default();
        SHIP_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, l)| Slot::new(i, l, &registry))
            .collect()
    }

    fn power_on(slots: &mut [Slot], priority: &mut PowerPriority, indices: &[usize]) {
        for &i in indices {
            slots[i].power = 1;
            priority.push(i);
        }
    }

    #[test]
    fn test_priority_push_moves_to_back_without_duplicates() {
        let mut p = PowerPriority::default();
        p.push(3);
        p.push(5);
        p.push(3);
        assert_eq!(p.to_vec(), vec![5, 3]);
        assert!(p.remove(5));
        assert!(!p.remove(5));
        assert_eq!(p.pop_latest(), Some(3));
        assert!(p.is_empty());
    }

    #[test]
    fn test_sheds_most_recent_first() {
        // gen = 3, five subsystems requesting one unit each.
        let mut slots = fresh_slots();
        let mut priority = PowerPriority::default();
        power_on(&mut slots, &mut priority, &[4, 0, 7, 1, 5]);

        let stats = ShipStats::aggregate(&slots, POWER_BASE);
        assert_eq!((stats.power, stats.gen), (5, 3));

        let report = arbitrate(&mut slots, &mut priority, &stats);
        assert_eq!(report.shed, vec![5, 1]);
        assert!(report.restored.is_empty());
        assert_eq!(priority.to_vec(), vec![4, 0, 7]);
        assert!(slots[5].autooff && slots[1].autooff);
        assert_eq!(slots[5].power, 0);

        let after = ShipStats::aggregate(&slots, POWER_BASE);
        assert!(after.power <= after.gen);
        assert_eq!(after.power, 3);
    }

    #[test]
    fn test_restores_in_slot_order_until_capacity() {
        let mut slots = fresh_slots();
        let mut priority = PowerPriority::default();
        power_on(&mut slots, &mut priority, &[4]);
        for i in [9, 2, 6] {
            slots[i].autooff = true;
        }

        let stats = ShipStats::aggregate(&slots, POWER_BASE);
        let report = arbitrate(&mut slots, &mut priority, &stats);
        assert_eq!(report.restored, vec![2, 6]);
        assert!(slots[9].autooff, "no room left for slot 9");
        assert_eq!(slots[9].power, 0);
        assert_eq!(priority.to_vec(), vec![4, 2, 6]);
    }

    #[test]
    fn test_balanced_budget_is_untouched() {
        let mut slots = fresh_slots();
        let mut priority = PowerPriority::default();
        power_on(&mut slots, &mut priority, &[0, 1, 2]);
        slots[3].autooff = true;
        let stats = ShipStats::aggregate(&slots, POWER_BASE);
        let report = arbitrate(&mut slots, &mut priority, &stats);
        assert_eq!(report, ArbitrationReport::default());
        assert!(slots[3].autooff);
    }

    #[test]
    fn test_dead_slots_are_not_restored() {
        let mut slots = fresh_slots();
        let mut priority = PowerPriority::default();
        slots[0].autooff = true;
        slots[0].hp = 0;
        let stats = ShipStats::aggregate(&slots, POWER_BASE);
        let report = arbitrate(&mut slots, &mut priority, &stats);
        assert!(report.restored.is_empty());
    }

    #[test]
    #[should_panic(expected = "power arbitration desync")]
    fn test_desync_panics() {
        let mut slots = fresh_slots();
        let mut priority = PowerPriority::default();
        for slot in slots.iter_mut().take(5) {
            slot.power = 1;
        }
        let stats = ShipStats::aggregate(&slots, POWER_BASE);
        arbitrate(&mut slots, &mut priority, &stats);
    }
}
