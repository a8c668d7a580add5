#[cfg(test)]
mod tests {
    use crate::commands::{CommandOutcome, IgnoreReason, PlayerCommand};
    use crate::components::{Slot, Subsystem};
    use crate::config::{ConfigError, TuningConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::layout::SHIP_LAYOUT;
    use crate::registry::ValueRegistry;
    use crate::state::EncounterSnapshot;
    use crate::stats::ShipStats;

    fn fresh_slots() -> Vec<Slot> {
        let registry = ValueRegistry::default();
        SHIP_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, layout)| Slot::new(i, layout, &registry))
            .collect()
    }

    // ---- Registry and panels ----

    #[test]
    fn test_every_panel_resource_has_positive_max() {
        let registry = ValueRegistry::default();
        for kind in SubsystemKind::ALL {
            for resource in kind.panel().resources() {
                assert!(
                    registry.get(resource).max > 0.0,
                    "{kind:?} declares {resource:?} without a usable max"
                );
            }
        }
    }

    #[test]
    fn test_registry_canonical_bounds() {
        let registry = ValueRegistry::default();
        assert_eq!(registry.evade.max, 33.0);
        assert_eq!(registry.gen.max, 6.0);
        assert_eq!(registry.hp.start, 100.0);
        assert_eq!(registry.cargo.start, 20.0);
        assert_eq!(registry.max_hp(), 100);
    }

    #[test]
    fn test_repair_panel_has_decorative_gaps() {
        let panel = SubsystemKind::Repair.panel();
        assert_eq!(panel.values.len(), 3);
        assert_eq!(panel.values[0], None);
        assert_eq!(panel.values[1], Some(ResourceKind::Hp));
        assert!(panel.vert);
        assert!(!panel.declares(ResourceKind::Heat));
    }

    // ---- Layout and slot creation ----

    #[test]
    fn test_layout_topology() {
        assert_eq!(SHIP_LAYOUT.len(), 14);
        let count = |kind| SHIP_LAYOUT.iter().filter(|l| l.initial_kind == kind).count();
        assert_eq!(count(SubsystemKind::Weapon), 4);
        assert_eq!(count(SubsystemKind::Engine), 3);
        assert_eq!(count(SubsystemKind::Shield), 2);
        assert_eq!(count(SubsystemKind::Generator), 2);
        assert_eq!(count(SubsystemKind::Repair), 1);
        assert_eq!(count(SubsystemKind::LifeSupport), 1);
        assert_eq!(count(SubsystemKind::Cargo), 1);
    }

    #[test]
    fn test_vertical_panel_center() {
        // Slot 10 is a vertical generator at (162, 96): 32 wide, 64 tall.
        let center = SHIP_LAYOUT[10].center();
        assert_eq!(center.x, 162.0 + PANEL_H / 2.0);
        assert_eq!(center.y, 96.0 + PANEL_W / 2.0);
    }

    #[test]
    fn test_new_slot_starts_at_registry_values() {
        let slots = fresh_slots();
        for slot in &slots {
            assert_eq!(slot.hp, 100);
            assert_eq!(slot.power, 0);
            assert_eq!(slot.heat_damage, 0);
            assert!(!slot.autocool && !slot.autooff);
        }
        assert_eq!(slots[8].system, Subsystem::Cargo { passengers: 20 });
        assert_eq!(
            slots[0].system,
            Subsystem::Weapon {
                heat: 0.0,
                charge: 0.0
            }
        );
        assert_eq!(slots[11].system, Subsystem::Repair);
    }

    #[test]
    fn test_new_slot_clamps_out_of_range_start() {
        let mut registry = ValueRegistry::default();
        registry.charge.start = 250.0;
        registry.cargo.start = -3.0;
        let weapon = Slot::new(0, &SHIP_LAYOUT[0], &registry);
        assert_eq!(weapon.value(ResourceKind::Charge), Some(100.0));
        let hold = Slot::new(8, &SHIP_LAYOUT[8], &registry);
        assert_eq!(hold.system, Subsystem::Cargo { passengers: 0 });
    }

    #[test]
    fn test_slot_value_respects_declarations() {
        let slots = fresh_slots();
        // Cargo declares no hull bar.
        assert_eq!(slots[8].value(ResourceKind::Hp), None);
        assert_eq!(slots[8].value(ResourceKind::Cargo), Some(20.0));
        // Repair has hull but no heat.
        assert_eq!(slots[11].value(ResourceKind::Hp), Some(100.0));
        assert_eq!(slots[11].value(ResourceKind::Heat), None);
        // Engines never expose charge.
        assert_eq!(slots[4].value(ResourceKind::Charge), None);
    }

    // ---- Aggregate ----

    #[test]
    fn test_aggregate_fresh_ship() {
        let slots = fresh_slots();
        let stats = ShipStats::aggregate(&slots, POWER_BASE);
        assert_eq!(stats.power, 0);
        assert_eq!(stats.gen, 3);
        assert_eq!(stats.cargo, 20.0);
        // 13 hull-bearing panels (cargo has no hull bar).
        assert_eq!(stats.hp, 1300.0);
    }

    #[test]
    fn test_aggregate_excludes_dead_slots_and_generators_from_power() {
        let mut slots = fresh_slots();
        slots[0].power = 1;
        slots[1].power = 1;
        slots[10].power = 1; // generator, draws nothing
        if let Subsystem::Generator { gen, .. } = &mut slots[10].system {
            *gen = 1.5;
        }
        slots[1].hp = 0;
        let stats = ShipStats::aggregate(&slots, POWER_BASE);
        assert_eq!(stats.power, 1);
        assert_eq!(stats.gen, 4, "3 + 1.5 floors to 4");
        assert_eq!(stats.hp, 1200.0);
    }

    #[test]
    fn test_aggregate_is_repeatable() {
        let mut slots = fresh_slots();
        slots[7].power = 1;
        if let Subsystem::Shield { shield, .. } = &mut slots[7].system {
            *shield = 42.0;
        }
        let a = ShipStats::aggregate(&slots, POWER_BASE);
        let b = ShipStats::aggregate(&slots, POWER_BASE);
        assert_eq!(a, b);
        assert_eq!(a.shield, 42.0);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        TuningConfig::default().validate().unwrap();
    }

    #[test]
    fn test_power_levels_capped_by_delta_tables() {
        let mut config = TuningConfig::default();
        assert_eq!(config.power_levels(SubsystemKind::Weapon), 2);
        assert_eq!(config.power_levels(SubsystemKind::Cargo), 1);

        config.max_power = 3;
        assert_eq!(config.power_levels(SubsystemKind::Weapon), 3);
        assert_eq!(config.power_levels(SubsystemKind::Shield), 3);
        // Two-entry tables cap these at on/off.
        assert_eq!(config.power_levels(SubsystemKind::LifeSupport), 2);
        assert_eq!(config.power_levels(SubsystemKind::Generator), 2);
        // No delta table at all: only max_power applies.
        assert_eq!(config.power_levels(SubsystemKind::Repair), 3);
    }

    #[test]
    fn test_delta_lookup() {
        let config = TuningConfig::default();
        assert_eq!(config.delta(ResourceKind::Heat, 2), 20.0);
        assert_eq!(config.delta(ResourceKind::O2, 0), -25.0);
        assert_eq!(config.delta(ResourceKind::Hp, 1), 0.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TuningConfig::from_json_str(r#"{ "tick_each_ms": 250, "wave": { "num_ships": 3 } }"#)
            .unwrap();
        assert_eq!(config.tick_each_ms, 250);
        assert_eq!(config.wave.num_ships, 3);
        assert_eq!(config.wave.max_hp, WAVE_MAX_HP);
        assert_eq!(config.heat_delta, HEAT_DELTA.to_vec());
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = TuningConfig::from_json_str(r#"{ "gen_delta": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = TuningConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_start_outside_bounds_rejected() {
        let above = r#"{ "values": { "charge": { "start": 250, "max": 100, "label": "CHARGE" } } }"#;
        let err = TuningConfig::from_json_str(above).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("Charge"));

        let negative = r#"{ "values": { "cargo": { "start": -1, "max": 20, "label": "CARGO" } } }"#;
        let err = TuningConfig::from_json_str(negative).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let at_max = r#"{ "values": { "shield": { "start": 100, "max": 100, "label": "SHIELD" } } }"#;
        let config = TuningConfig::from_json_str(at_max).unwrap();
        assert_eq!(config.values.shield.start, 100.0);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = TuningConfig::load(std::path::Path::new("/nonexistent/tuning.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tuning.json"));
    }

    // ---- Wire types ----

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::TogglePower { slot: 3 },
            PlayerCommand::CyclePowerDown { slot: 7 },
            PlayerCommand::NextWave,
            PlayerCommand::Restart,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
        let json = serde_json::to_string(&PlayerCommand::TogglePower { slot: 3 }).unwrap();
        assert_eq!(json, r#"{"type":"TogglePower","slot":3}"#);
    }

    #[test]
    fn test_command_outcome_serde() {
        let outcome = CommandOutcome::Ignored(IgnoreReason::Autocooling);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: CommandOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut snapshot = EncounterSnapshot::default();
        snapshot.events.push(SimEvent::SlotDestroyed {
            slot: 2,
            kind: SubsystemKind::Weapon,
            cause: DestructionCause::Heat,
        });
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("SlotDestroyed"));
        let back: EncounterSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.events, snapshot.events);
    }
}
