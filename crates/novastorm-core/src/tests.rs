#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::Hitbox;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::geometry::{bullets_clash, rects_overlap};
    use crate::state::GameSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    /// Verify enums round-trip through serde_json.
    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![EnemyKind::Boss, EnemyKind::Escort, EnemyKind::Grunt];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_mode_serde() {
        let variants = vec![
            GameMode::Classic,
            GameMode::Arcade,
            GameMode::Survival,
            GameMode::Challenge,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GameMode = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_attack_pattern_serde() {
        let variants = vec![
            AttackPattern::Dive,
            AttackPattern::Sweep { direction: -1.0 },
            AttackPattern::Zigzag {
                amplitude: 55.0,
                frequency: 0.012,
            },
            AttackPattern::CircleStrafe {
                radius: 120.0,
                angular_speed: 0.04,
                center: Position::new(240.0, 580.0),
            },
            AttackPattern::Wave { delay_ms: 400.0 },
        ];
        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: AttackPattern = serde_json::from_str(&json).unwrap();
            assert_eq!(*v, back);
        }
    }

    #[test]
    fn test_attack_pattern_default_is_dive() {
        assert_eq!(AttackPattern::default(), AttackPattern::Dive);
    }

    #[test]
    fn test_formation_pattern_classification() {
        assert!(AttackPattern::Wave { delay_ms: 0.0 }.is_formation());
        assert!(AttackPattern::Bombardment { delay_ms: 0.0 }.is_formation());
        assert!(!AttackPattern::Dive.is_formation());
        assert!(!AttackPattern::Sweep { direction: 1.0 }.is_formation());
        assert_eq!(AttackPattern::Wave { delay_ms: 600.0 }.delay_ms(), 600.0);
        assert_eq!(AttackPattern::Dive.delay_ms(), 0.0);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SelectMode {
                mode: GameMode::Arcade,
            },
            PlayerCommand::StartGame,
            PlayerCommand::SetInput {
                move_left: true,
                move_right: false,
                fire: true,
            },
            PlayerCommand::ToggleAutoFire,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::ReturnToMenu,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::WaveStarted {
                wave: 3,
                boss_wave: true,
            },
            GameEvent::EnemyDestroyed {
                kind: EnemyKind::Grunt,
                x: 100.0,
                y: 200.0,
                score: 110,
            },
            GameEvent::BulletClash { x: 10.0, y: 20.0 },
            GameEvent::GameOver {
                score: 4200,
                new_high_score: true,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 2048,
            "Empty snapshot should be small, was {} bytes",
            json.len()
        );
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_angle() {
        let origin = Position::new(0.0, 0.0);
        let right = Position::new(10.0, 0.0);
        assert!(origin.angle_to(&right).abs() < 1e-10);

        let below = Position::new(0.0, 10.0);
        assert!((origin.angle_to(&below) - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    }

    #[test]
    fn test_velocity_from_angle() {
        let v = Velocity::from_angle(std::f64::consts::FRAC_PI_2, 4.0);
        assert!(v.x.abs() < 1e-10);
        assert!((v.y - 4.0).abs() < 1e-10);
        assert!((v.speed() - 4.0).abs() < 1e-10);
    }

    /// Rectangle overlap is symmetric and center-anchored.
    #[test]
    fn test_rects_overlap() {
        let a = Position::new(100.0, 100.0);
        let b = Position::new(110.0, 110.0);
        let box30 = Hitbox::square(30.0);

        assert!(rects_overlap(a, &box30, b, &box30));
        assert!(rects_overlap(b, &box30, a, &box30), "overlap is symmetric");

        // Just touching edges do not overlap (strict inequality).
        let c = Position::new(130.0, 100.0);
        assert!(!rects_overlap(a, &box30, c, &box30));

        let far = Position::new(200.0, 200.0);
        assert!(!rects_overlap(a, &box30, far, &box30));
    }

    #[test]
    fn test_bullets_clash_distance() {
        let a_box = Hitbox {
            width: 4.0,
            height: 6.0,
        };
        let b_box = Hitbox {
            width: 2.4,
            height: 9.6,
        };
        let a = Position::new(50.0, 50.0);

        // Threshold is (4.0 + 2.4) / 2 = 3.2 pixels between centers.
        let near = Position::new(53.0, 50.0);
        assert!(bullets_clash(a, &a_box, near, &b_box));

        let apart = Position::new(53.5, 50.0);
        assert!(!bullets_clash(a, &a_box, apart, &b_box));
    }

    /// Verify SimTime advancement accumulates delta-scaled milliseconds.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0);
        }
        assert_eq!(time.tick, 60);
        assert!((time.now_ms - 1000.0).abs() < 1e-9);

        let mut half = SimTime::default();
        for _ in 0..120 {
            half.advance(0.5);
        }
        assert_eq!(half.tick, 120);
        assert!(
            (half.now_ms - time.now_ms).abs() < 1e-9,
            "half-delta ticks should cover the same wall-clock span"
        );
    }
}
