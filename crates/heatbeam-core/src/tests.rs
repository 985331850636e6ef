#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::components::{StatusEffects, UnitBody};
    use crate::definition::{CoolantConsumer, TurretDefinition};
    use crate::enums::*;
    use crate::error::HeatbeamError;
    use crate::state::{DrawCommand, LaserRegions, TurretSnapshot};
    use crate::types::*;

    #[test]
    fn test_status_effect_serde() {
        let variants = vec![
            StatusEffect::None,
            StatusEffect::Slow,
            StatusEffect::Wet,
            StatusEffect::Freezing,
            StatusEffect::Burning,
            StatusEffect::Melting,
            StatusEffect::Shocked,
            StatusEffect::Electrified,
            StatusEffect::Overclock,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: StatusEffect = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_sensor_key_json_names() {
        assert_eq!(serde_json::to_string(&SensorKey::Heat).unwrap(), "\"heat\"");
        assert_eq!(
            serde_json::to_string(&SensorKey::MaxHealth).unwrap(),
            "\"max_health\""
        );
    }

    #[test]
    fn test_team_hostility() {
        assert!(Team::SHARDED.is_hostile_to(Team::CRUX));
        assert!(Team::CRUX.is_hostile_to(Team::SHARDED));
        assert!(!Team::SHARDED.is_hostile_to(Team::SHARDED));
        assert!(!Team::SHARDED.is_hostile_to(Team::DERELICT));
    }

    #[test]
    fn test_check_target_filter() {
        let ground = UnitBody::default();
        let air = UnitBody {
            flying: true,
            ..Default::default()
        };
        assert!(ground.check_target(false, true));
        assert!(!ground.check_target(true, false));
        assert!(air.check_target(true, false));
        assert!(!air.check_target(false, true));
        assert!(!air.check_target(false, false));
    }

    #[test]
    fn test_status_apply_refreshes_longer_duration() {
        let mut effects = StatusEffects::default();
        effects.apply(StatusEffect::Slow, 100.0);
        effects.apply(StatusEffect::Slow, 40.0);
        assert_eq!(effects.remaining(StatusEffect::Slow), Some(100.0));
        effects.apply(StatusEffect::Slow, 250.0);
        assert_eq!(effects.remaining(StatusEffect::Slow), Some(250.0));
        assert_eq!(effects.active.len(), 1);
    }

    #[test]
    fn test_status_apply_ignores_none() {
        let mut effects = StatusEffects::default();
        effects.apply(StatusEffect::None, 100.0);
        assert!(effects.active.is_empty());
    }

    // ---- Angles ----

    #[test]
    fn test_angle_to_quadrants() {
        let o = Vec2::ZERO;
        assert!(angle_to(o, Vec2::new(1.0, 0.0)).abs() < 1e-5);
        assert!((angle_to(o, Vec2::new(0.0, 1.0)) - 90.0).abs() < 1e-4);
        assert!((angle_to(o, Vec2::new(-1.0, 0.0)) - 180.0).abs() < 1e-4);
        assert!((angle_to(o, Vec2::new(0.0, -1.0)) - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_angle_dist_wraps() {
        assert!((angle_dist(350.0, 10.0) - 20.0).abs() < 1e-5);
        assert!((angle_dist(10.0, 350.0) - 20.0).abs() < 1e-5);
        assert!((angle_dist(0.0, 180.0) - 180.0).abs() < 1e-5);
        assert!(angle_within(358.0, 3.0, 6.0));
        assert!(!angle_within(350.0, 3.0, 6.0));
    }

    #[test]
    fn test_move_toward_takes_short_arc() {
        // 350 -> 10 should go up through 0, not down through 180.
        assert!((move_toward(350.0, 10.0, 5.0) - 355.0).abs() < 1e-5);
        assert!((move_toward(10.0, 350.0, 5.0) - 5.0).abs() < 1e-5);
        // Snaps when within one step.
        assert!((move_toward(88.0, 90.0, 5.0) - 90.0).abs() < 1e-5);
    }

    #[test]
    fn test_move_toward_step_bounded() {
        let mut angle = 0.0;
        for _ in 0..30 {
            let next = move_toward(angle, 200.0, 7.0);
            assert!(angle_dist(angle, next) <= 7.0 + 1e-4);
            angle = next;
        }
        assert!((angle - 200.0).abs() < 1e-4);
    }

    #[test]
    fn test_lerp_delta_never_overshoots() {
        assert!((lerp_delta(0.0, 1.0, 0.1, 1.0) - 0.1).abs() < 1e-5);
        assert!((lerp_delta(0.0, 1.0, 0.1, 20.0) - 1.0).abs() < 1e-5);
        assert!((lerp_delta(0.5, 0.0, 0.1, 0.0) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_absin_range() {
        for i in 0..200 {
            let v = absin(i as f32 * 0.37, 4.0, 0.6);
            assert!((0.0..=0.6 + 1e-6).contains(&v));
        }
    }

    #[test]
    fn test_limit_clamps_only_when_longer() {
        let v = Vec2::new(30.0, 40.0);
        assert!((limit(v, 10.0).length() - 10.0).abs() < 1e-5);
        assert_eq!(limit(v, 100.0), v);
    }

    #[test]
    fn test_limit_negative_keeps_direction() {
        let v = Vec2::new(30.0, 40.0);
        let limited = limit(v, -10.0);
        assert!((limited.length() - 10.0).abs() < 1e-5);
        assert!(limited.dot(v) > 0.0);
    }

    #[test]
    fn test_color_lerp_endpoints() {
        assert_eq!(Color::RED.lerp(Color::YELLOW, 0.0), Color::RED);
        assert_eq!(Color::RED.lerp(Color::YELLOW, 1.0), Color::YELLOW);
        assert!((Color::RED.lerp(Color::YELLOW, 0.5).g - 0.5).abs() < 1e-5);
    }

    // ---- Definitions ----

    #[test]
    fn test_definition_defaults_from_empty_json() {
        let def = TurretDefinition::from_json("{}").unwrap();
        assert_eq!(def.retarget_time, 5.0);
        assert_eq!(def.shoot_cone, 6.0);
        assert_eq!(def.damage, 2000.0);
        assert!(!def.target_air);
        assert!(def.target_ground);
        assert!(def.status.is_none());
    }

    #[test]
    fn test_definition_partial_json() {
        let json = r#"{
            "name": "grav-lance",
            "range": 200.0,
            "status": "freezing",
            "coolant": { "amount": 0.5 }
        }"#;
        let def = TurretDefinition::from_json(json).unwrap();
        assert_eq!(def.name, "grav-lance");
        assert_eq!(def.range, 200.0);
        assert_eq!(def.status, StatusEffect::Freezing);
        assert_eq!(def.coolant, Some(CoolantConsumer { amount: 0.5 }));
        assert_eq!(def.laser_region(), "grav-lance-laser");
        assert_eq!(def.laser_cap_region(), "grav-lance-laserStart");
    }

    #[test]
    fn test_demo_definition_parses() {
        let def = TurretDefinition::from_json(include_str!("../../../demos/heat-tractor-beam.json"))
            .unwrap();
        assert_eq!(def.status, StatusEffect::Slow);
        assert!((def.laser_color.g - Color::LIGHT_ORANGE.g).abs() < 1e-6);
        assert_eq!(def.shoot_sound, "tractorbeam");
    }

    #[test]
    fn test_definition_rejects_bad_range() {
        let err = TurretDefinition::from_json(r#"{ "range": 0.0 }"#).unwrap_err();
        assert!(matches!(err, HeatbeamError::InvalidDefinition { .. }));
    }

    #[test]
    fn test_definition_rejects_unit_flash_threshold() {
        let err = TurretDefinition::from_json(r#"{ "flash_threshold": 1.0 }"#).unwrap_err();
        assert!(matches!(err, HeatbeamError::InvalidDefinition { .. }));
    }

    #[test]
    fn test_definition_malformed_json() {
        let err = TurretDefinition::from_json("{ range: ").unwrap_err();
        assert!(matches!(err, HeatbeamError::Json(_)));
    }

    #[test]
    fn test_definition_derived_values() {
        let def = TurretDefinition {
            range: 100.0,
            damage: 2.0,
            size: 3,
            ..Default::default()
        };
        assert!((def.clip_size() - 216.0).abs() < 1e-5);
        assert!((def.stats().damage_per_second - 120.0).abs() < 1e-5);
        assert_eq!(def.base_region(), "block-3size");
        assert_eq!(def.icon_regions()[1], def.name);
    }

    // ---- Snapshots ----

    #[test]
    fn test_turret_snapshot_serde() {
        let snap = TurretSnapshot {
            id: 3,
            team: Team::SHARDED,
            position: Vec2::new(4.0, 8.0),
            rotation: 45.0,
            phase: BeamPhase::Engaged,
            any: true,
            last_target: Vec2::new(40.0, 44.0),
            strength: 0.7,
            efficiency: 0.5,
            heat: 100.0,
            heating: 12.0,
            coolant: 1.2,
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: TurretSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }

    #[test]
    fn test_draw_command_tagged_json() {
        let cmd = DrawCommand::Laser {
            team: Team::SHARDED,
            regions: LaserRegions {
                body: "a-laser".into(),
                start: "a-laserStart".into(),
                end: "a-laserStart".into(),
            },
            from: Vec2::ZERO,
            to: Vec2::X,
            width: 0.3,
            mix: Color::WHITE.with_alpha(0.2),
            layer: Layer::Bullet,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"kind\":\"laser\""));
    }
}
