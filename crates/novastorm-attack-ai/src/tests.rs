#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use novastorm_core::components::AttackRun;
    use novastorm_core::constants::MS_PER_STEP;
    use novastorm_core::enums::{AttackPattern, EnemyKind};
    use novastorm_core::types::{Position, Velocity};

    use crate::patterns::{advance, is_finished, StepContext};
    use crate::profiles::{attack_chance, profile, roll_pattern};

    fn make_run(pattern: AttackPattern, start: Position, target: Position) -> AttackRun {
        AttackRun {
            pattern,
            progress: 0.0,
            start,
            started_ms: 0.0,
            target,
            max_speed: 1.6,
            current_speed: 0.0,
            acceleration: 0.05,
            velocity: Velocity::default(),
            friction: 0.95,
            max_velocity: 2.0,
            tracking: false,
        }
    }

    /// Run a pattern for `steps` ticks at the given delta, returning the
    /// final position.
    fn simulate(run: &mut AttackRun, start: Position, steps: u32, delta: f64) -> Position {
        let player = Position::new(240.0, 580.0);
        let mut pos = start;
        let mut elapsed_ms = 0.0;
        for _ in 0..steps {
            elapsed_ms += delta * MS_PER_STEP;
            let ctx = StepContext {
                delta,
                elapsed_ms,
                player,
                jitter: 0.0,
            };
            pos = advance(run, pos, &ctx);
        }
        pos
    }

    // ---- Dive ----

    #[test]
    fn test_dive_approaches_target() {
        let start = Position::new(100.0, 100.0);
        let target = Position::new(240.0, 690.0);
        let mut run = make_run(AttackPattern::Dive, start, target);

        let before = start.distance_to(&target);
        let end = simulate(&mut run, start, 500, 1.0);
        let after = end.distance_to(&target);

        assert!(
            after < before * 0.5,
            "dive should close at least half the distance: {before:.1} -> {after:.1}"
        );
        assert!(end.y > start.y, "dive should descend");
    }

    #[test]
    fn test_dive_holds_at_close_range() {
        // Within the 5px dead zone the unit vector is not computed and the
        // enemy coasts rather than producing NaN.
        let start = Position::new(240.0, 689.0);
        let target = Position::new(240.0, 690.0);
        let mut run = make_run(AttackPattern::Dive, start, target);
        run.current_speed = run.max_speed;

        let end = simulate(&mut run, start, 10, 1.0);
        assert!(end.x.is_finite() && end.y.is_finite());
        assert_eq!(end.x, start.x);
        assert_eq!(end.y, start.y);
    }

    #[test]
    fn test_dive_frame_rate_independence() {
        let start = Position::new(100.0, 100.0);
        let target = Position::new(240.0, 690.0);

        let mut run_a = make_run(AttackPattern::Dive, start, target);
        let end_a = simulate(&mut run_a, start, 120, 1.0);

        let mut run_b = make_run(AttackPattern::Dive, start, target);
        let end_b = simulate(&mut run_b, start, 240, 0.5);

        let drift = end_a.distance_to(&end_b);
        assert!(
            drift < 10.0,
            "same wall-clock dive at half steps drifted {drift:.2}px"
        );
    }

    // ---- Sweep ----

    #[test]
    fn test_sweep_direction_and_descent() {
        let start = Position::new(100.0, 100.0);
        let mut run = make_run(AttackPattern::Sweep { direction: 1.0 }, start, start);
        run.current_speed = run.max_speed;
        run.acceleration = 0.0;
        let end = simulate(&mut run, start, 60, 1.0);
        assert!(end.x > start.x, "left-half sweep drifts right");
        assert!(end.y > start.y, "sweep descends");

        let mut run = make_run(AttackPattern::Sweep { direction: -1.0 }, start, start);
        run.current_speed = run.max_speed;
        run.acceleration = 0.0;
        let end = simulate(&mut run, start, 60, 1.0);
        assert!(end.x < start.x, "right-half sweep drifts left");
    }

    #[test]
    fn test_sweep_frame_rate_independence() {
        let start = Position::new(100.0, 100.0);

        let mut run_a = make_run(AttackPattern::Sweep { direction: 1.0 }, start, start);
        run_a.current_speed = run_a.max_speed;
        let end_a = simulate(&mut run_a, start, 120, 1.0);

        let mut run_b = make_run(AttackPattern::Sweep { direction: 1.0 }, start, start);
        run_b.current_speed = run_b.max_speed;
        let end_b = simulate(&mut run_b, start, 240, 0.5);

        // The horizontal component is linear in delta, so it matches
        // exactly; the vertical wobble is a Riemann sum and may drift a
        // little.
        assert!((end_a.x - end_b.x).abs() < 1e-9);
        assert!((end_a.y - end_b.y).abs() < 3.0);
    }

    // ---- Zigzag ----

    #[test]
    fn test_zigzag_stays_in_envelope() {
        let start = Position::new(240.0, 100.0);
        let mut run = make_run(
            AttackPattern::Zigzag {
                amplitude: 60.0,
                frequency: 0.012,
            },
            start,
            start,
        );
        let player = Position::new(240.0, 580.0);
        let mut pos = start;
        let mut elapsed = 0.0;
        for _ in 0..600 {
            elapsed += MS_PER_STEP;
            let ctx = StepContext {
                delta: 1.0,
                elapsed_ms: elapsed,
                player,
                jitter: 0.0,
            };
            pos = advance(&mut run, pos, &ctx);
            assert!(
                (pos.x - start.x).abs() <= 60.0 * 0.7 + 1.0,
                "zigzag left its amplitude envelope at x={}",
                pos.x
            );
        }
        assert!(pos.y > start.y, "zigzag drifts downward");
    }

    // ---- Formation patterns ----

    #[test]
    fn test_wave_respects_attack_delay() {
        let start = Position::new(100.0, 100.0);
        let target = Position::new(300.0, 690.0);
        let mut run = make_run(AttackPattern::Wave { delay_ms: 500.0 }, start, target);

        // 20 steps = ~333ms, still inside the delay window.
        let end = simulate(&mut run, start, 20, 1.0);
        assert_eq!(end.x, start.x);
        assert_eq!(end.y, start.y);

        // Well past the delay it must be moving.
        let end = simulate(&mut run, end, 100, 1.0);
        assert!(end.distance_to(&start) > 10.0);
    }

    #[test]
    fn test_pincer_homes_on_target() {
        let start = Position::new(100.0, 100.0);
        let target = Position::new(140.0, 580.0);
        let mut run = make_run(AttackPattern::Pincer { delay_ms: 0.0 }, start, target);

        let end = simulate(&mut run, start, 600, 1.0);
        assert!(
            end.distance_to(&target) < start.distance_to(&target) * 0.1,
            "pincer should nearly reach its flank target"
        );
    }

    #[test]
    fn test_bombardment_holds_position() {
        let start = Position::new(200.0, 80.0);
        let target = Position::new(220.0, 192.0);
        let mut run = make_run(AttackPattern::Bombardment { delay_ms: 0.0 }, start, target);

        let end = simulate(&mut run, start, 900, 1.0);
        assert!(
            end.distance_to(&target) < 10.0,
            "bombardment should hover near its hold point, was {:.1}px away",
            end.distance_to(&target)
        );
    }

    // ---- Circle strafe ----

    #[test]
    fn test_circle_strafe_radius_floor() {
        let start = Position::new(100.0, 300.0);
        let mut run = make_run(
            AttackPattern::CircleStrafe {
                radius: 120.0,
                angular_speed: 0.04,
                center: Position::new(240.0, 580.0),
            },
            start,
            start,
        );

        simulate(&mut run, start, 1000, 1.0);
        let AttackPattern::CircleStrafe { radius, .. } = run.pattern else {
            panic!("pattern changed mid-run");
        };
        assert!(
            (radius - 40.0).abs() < 1e-9,
            "circle radius should shrink to the 40px floor, was {radius}"
        );
    }

    // ---- Kinematics shared by all patterns ----

    #[test]
    fn test_speed_ramps_to_max() {
        let start = Position::new(100.0, 100.0);
        let mut run = make_run(AttackPattern::Dive, start, Position::new(240.0, 690.0));
        simulate(&mut run, start, 60, 1.0);
        assert!((run.current_speed - run.max_speed).abs() < 1e-9);
    }

    #[test]
    fn test_progress_accumulates_with_delta() {
        let start = Position::new(100.0, 100.0);
        let mut run = make_run(AttackPattern::Dive, start, Position::new(240.0, 690.0));
        simulate(&mut run, start, 50, 0.5);
        assert!((run.progress - 0.25).abs() < 1e-9);
    }

    // ---- Terminal condition ----

    #[test]
    fn test_is_finished_bounds() {
        let w = 480.0;
        let h = 640.0;
        assert!(!is_finished(Position::new(240.0, 320.0), w, h));
        assert!(is_finished(Position::new(240.0, h + 51.0), w, h));
        assert!(is_finished(Position::new(-51.0, 100.0), w, h));
        assert!(is_finished(Position::new(w + 51.0, 100.0), w, h));
        // Exiting through the top does not end a run.
        assert!(!is_finished(Position::new(240.0, -200.0), w, h));
    }

    // ---- Profiles ----

    #[test]
    fn test_pattern_pools_respect_kind() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = Position::new(100.0, 100.0);
        let player = Position::new(240.0, 580.0);

        for _ in 0..200 {
            let p = roll_pattern(EnemyKind::Grunt, start, player, 480.0, &mut rng);
            assert!(
                matches!(
                    p,
                    AttackPattern::Dive
                        | AttackPattern::Zigzag { .. }
                        | AttackPattern::Strafe { .. }
                ),
                "grunt rolled out-of-pool pattern {p:?}"
            );
        }

        for _ in 0..200 {
            let p = roll_pattern(EnemyKind::Boss, start, player, 480.0, &mut rng);
            assert!(
                matches!(
                    p,
                    AttackPattern::SpiralDive { .. }
                        | AttackPattern::SweepBombard { .. }
                        | AttackPattern::StrafeRun { .. }
                        | AttackPattern::CircleStrafe { .. }
                ),
                "boss rolled out-of-pool pattern {p:?}"
            );
        }
    }

    #[test]
    fn test_sweep_direction_follows_spawn_side() {
        let mut rng = StdRng::seed_from_u64(11);
        let player = Position::new(240.0, 580.0);

        for _ in 0..100 {
            let left = roll_pattern(
                EnemyKind::Boss,
                Position::new(50.0, 100.0),
                player,
                480.0,
                &mut rng,
            );
            if let AttackPattern::SweepBombard { direction } = left {
                assert_eq!(direction, 1.0, "left-half spawn sweeps right");
            }
            let right = roll_pattern(
                EnemyKind::Boss,
                Position::new(430.0, 100.0),
                player,
                480.0,
                &mut rng,
            );
            if let AttackPattern::SweepBombard { direction } = right {
                assert_eq!(direction, -1.0, "right-half spawn sweeps left");
            }
        }
    }

    #[test]
    fn test_attack_chance_scales_with_wave() {
        for kind in [EnemyKind::Boss, EnemyKind::Escort, EnemyKind::Grunt] {
            assert!(attack_chance(kind, 5) > attack_chance(kind, 1));
        }
        // Escorts are the most eager attackers at any wave.
        assert!(attack_chance(EnemyKind::Escort, 3) > attack_chance(EnemyKind::Grunt, 3));
        assert!(attack_chance(EnemyKind::Escort, 3) > attack_chance(EnemyKind::Boss, 3));
    }

    #[test]
    fn test_aim_spread_widens_down_the_ranks() {
        let boss = profile(EnemyKind::Boss);
        let escort = profile(EnemyKind::Escort);
        let grunt = profile(EnemyKind::Grunt);
        assert!(boss.aim_spread < escort.aim_spread);
        assert!(escort.aim_spread < grunt.aim_spread);
        assert!(boss.tracking_chance > grunt.tracking_chance);
    }
}
