//! Shield, evasion, O2 production, and generator output regulation.
//!
//! Each of these subsystems moves its output toward full while powered and
//! lets it decay while off, by the delta table for its resource.

use lifeboat_core::components::Slot;
use lifeboat_core::config::TuningConfig;
use lifeboat_core::enums::SubsystemKind;

/// Step the regulated output of a shield, engine, life support, or generator.
/// Other kinds are left alone.
pub fn apply(slot: &mut Slot, tuning: &TuningConfig) {
    if !matches!(
        slot.kind(),
        SubsystemKind::Shield
            | SubsystemKind::Engine
            | SubsystemKind::LifeSupport
            | SubsystemKind::Generator
    ) {
        return;
    }
    let power = slot.power;
    if let Some((resource, value)) = slot.system.output_mut() {
        let def = tuning.values.get(resource);
        *value = def.clamp(*value + tuning.delta(resource, power));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeboat_core::enums::ResourceKind;
    use lifeboat_core::layout::SHIP_LAYOUT;

    fn slot(index: usize, tuning: &TuningConfig) -> Slot {
        Slot::new(index, &SHIP_LAYOUT[index], &tuning.values)
    }

    #[test]
    fn test_shield_charges_and_caps() {
        let tuning = TuningConfig::default();
        let mut shield = slot(7, &tuning);
        shield.power = 1;
        for _ in 0..12 {
            apply(&mut shield, &tuning);
        }
        assert_eq!(shield.value(ResourceKind::Shield), Some(100.0));
        shield.power = 0;
        apply(&mut shield, &tuning);
        assert_eq!(shield.value(ResourceKind::Shield), Some(95.0));
    }

    #[test]
    fn test_engine_evade_bounded_by_33() {
        let tuning = TuningConfig::default();
        let mut engine = slot(4, &tuning);
        engine.power = 1;
        for _ in 0..20 {
            apply(&mut engine, &tuning);
        }
        assert_eq!(engine.value(ResourceKind::Evade), Some(33.0));
    }

    #[test]
    fn test_generator_decays_to_zero_when_off() {
        let tuning = TuningConfig::default();
        let mut gen = slot(10, &tuning);
        gen.power = 1;
        apply(&mut gen, &tuning);
        apply(&mut gen, &tuning);
        assert_eq!(gen.value(ResourceKind::Gen), Some(2.0));
        gen.power = 0;
        for _ in 0..10 {
            apply(&mut gen, &tuning);
        }
        assert_eq!(gen.value(ResourceKind::Gen), Some(0.0));
    }

    #[test]
    fn test_life_support_production() {
        let tuning = TuningConfig::default();
        let mut life = slot(13, &tuning);
        life.power = 1;
        for _ in 0..3 {
            apply(&mut life, &tuning);
        }
        assert_eq!(life.value(ResourceKind::O2), Some(75.0));
    }

    #[test]
    fn test_weapon_charge_untouched() {
        let tuning = TuningConfig::default();
        let mut weapon = slot(0, &tuning);
        weapon.power = 1;
        apply(&mut weapon, &tuning);
        assert_eq!(weapon.value(ResourceKind::Charge), Some(0.0));
    }
}
