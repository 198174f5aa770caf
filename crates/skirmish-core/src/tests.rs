#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::errors::CommandError;
    use crate::events::CombatEvent;
    use crate::kinematics;
    use crate::presentation;
    use crate::state::GameStateSnapshot;
    use crate::types::{Health, Position, SimTime, Vector2, Viewport};

    #[test]
    fn test_weapon_type_serde() {
        for v in [WeaponType::Ranged, WeaponType::Melee] {
            let json = serde_json::to_string(&v).unwrap();
            let back: WeaponType = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Hosts send commands as tagged JSON objects.
    #[test]
    fn test_player_command_from_host_json() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"SelectWeapon","weapon":"Melee"}"#).unwrap();
        assert!(matches!(
            cmd,
            PlayerCommand::SelectWeapon {
                weapon: WeaponType::Melee
            }
        ));

        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"PointerMoved","x":12.5,"y":-3.0}"#).unwrap();
        match cmd {
            PlayerCommand::PointerMoved { x, y } => {
                assert_eq!(x, 12.5);
                assert_eq!(y, -3.0);
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"Trigger"}"#).unwrap();
        assert!(matches!(cmd, PlayerCommand::Trigger));
    }

    #[test]
    fn test_combat_event_serde() {
        let events = vec![
            CombatEvent::AttackTriggered {
                weapon: WeaponType::Ranged,
            },
            CombatEvent::ProjectileHit {
                projectile_id: 3,
                damage: 10.0,
                target_health: 90.0,
            },
            CombatEvent::MeleeFinished,
            CombatEvent::TargetDefeated,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: CombatEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.frame, back.time.frame);
        assert_eq!(snapshot.phase, back.phase);
        assert_eq!(back.phase, SessionPhase::WeaponSelect);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Health ----

    #[test]
    fn test_health_floors_at_zero() {
        let mut health = Health::full();
        assert_eq!(health.apply_damage(30.0), 30.0);
        assert_eq!(health.current, 70.0);

        let applied = health.apply_damage(500.0);
        assert_eq!(applied, 70.0);
        assert_eq!(health.current, 0.0);
        assert!(health.is_depleted());

        assert_eq!(health.apply_damage(10.0), 0.0);
        assert_eq!(health.current, 0.0);
    }

    #[test]
    fn test_health_never_heals() {
        let mut health = Health::full();
        health.apply_damage(-25.0);
        health.apply_damage(f64::NAN);
        assert_eq!(health.current, MAX_HEALTH);
    }

    // ---- Geometry ----

    #[test]
    fn test_position_center() {
        let c = Position::new(300.0, 300.0).center();
        assert_eq!(c, Vector2::new(315.0, 315.0));
    }

    #[test]
    fn test_viewport_clamp_box() {
        let vp = Viewport::new(800.0, 600.0);
        let clamped = vp.clamp_box(Vector2::new(-12.0, 900.0), ENTITY_SIZE);
        assert_eq!(clamped, Vector2::new(0.0, 570.0));

        let tiny = Viewport::new(10.0, 10.0);
        assert_eq!(tiny.clamp_box(Vector2::new(5.0, 5.0), ENTITY_SIZE), Vector2::ZERO);
    }

    #[test]
    fn test_viewport_margin() {
        let vp = Viewport::new(800.0, 600.0);
        assert!(vp.contains_with_margin(Vector2::new(-29.0, 10.0), BULLET_LENGTH));
        assert!(!vp.contains_with_margin(Vector2::new(-30.0, 10.0), BULLET_LENGTH));
        assert!(!vp.contains_with_margin(Vector2::new(10.0, 631.0), BULLET_LENGTH));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(16.0);
        }
        assert_eq!(time.frame, 60);
        assert!((time.elapsed_ms - 960.0).abs() < 1e-9);
    }

    // ---- Kinematics ----

    #[test]
    fn test_normalize_guards_zero() {
        assert!(kinematics::normalize(Vector2::ZERO).is_none());
        assert_eq!(kinematics::normalize_or_zero(Vector2::ZERO), Vector2::ZERO);

        let n = kinematics::normalize(Vector2::new(3.0, 4.0)).unwrap();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_alignment_cosine() {
        let left = Vector2::new(-1.0, 0.0);
        let impulse = Vector2::new(-5.0, 0.0);
        assert!((kinematics::alignment_cosine(left, impulse) - 1.0).abs() < 1e-12);
        assert!((kinematics::alignment_cosine(-left, impulse) + 1.0).abs() < 1e-12);
        assert_eq!(kinematics::alignment_cosine(left, Vector2::ZERO), 0.0);
    }

    // ---- Presentation ----

    #[test]
    fn test_swing_offset_envelope() {
        assert_eq!(presentation::swing_offset(0.0), 0.0);
        assert!((presentation::swing_offset(0.25) - 15.0).abs() < 1e-12);
        assert!((presentation::swing_offset(0.5) - MELEE_SWING_DISTANCE).abs() < 1e-12);
        assert!((presentation::swing_offset(0.75) - 15.0).abs() < 1e-12);
        assert!(presentation::swing_offset(1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weapon_dimensions() {
        let melee = presentation::weapon_dimensions(WeaponType::Melee);
        let ranged = presentation::weapon_dimensions(WeaponType::Ranged);
        assert!(melee.length > ranged.length);
        assert!(melee.width > ranged.width);
    }

    #[test]
    fn test_cooldown_label() {
        assert_eq!(presentation::cooldown_label(0.0), None);
        assert_eq!(presentation::cooldown_label(460.0).as_deref(), Some("0.5s"));
        assert_eq!(presentation::cooldown_label(120.0).as_deref(), Some("0.1s"));
    }

    #[test]
    fn test_health_bar_width() {
        let mut health = Health::full();
        health.apply_damage(50.0);
        assert!((presentation::health_bar_width(&health) - ENTITY_SIZE / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_weapon_origin_and_rotation() {
        let center = Vector2::new(100.0, 100.0);
        let aim = Vector2::new(0.0, 1.0);

        let idle = presentation::weapon_origin(center, aim, None);
        assert_eq!(idle, Vector2::new(100.0, 100.0 + ENTITY_SIZE / 2.0));

        let mid_swing = presentation::weapon_origin(center, aim, Some(0.5));
        assert!((mid_swing.y - (idle.y + MELEE_SWING_DISTANCE)).abs() < 1e-12);

        assert!((presentation::rotation(aim) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(presentation::rotation(Vector2::new(1.0, 0.0)), 0.0);
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::WeaponAlreadySelected {
            current: WeaponType::Ranged,
        };
        assert_eq!(err.to_string(), "weapon already selected: Ranged");
    }
}
