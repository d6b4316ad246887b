//! Per-kind behavior profiles and attack-pattern pools.
//!
//! Consolidates the tuning that differs by enemy kind: attack probability
//! curves, fire chances, aim spread, and which motion patterns each kind
//! may roll when it leaves formation.

use std::f64::consts::PI;

use rand::Rng;

use novastorm_core::enums::{AttackPattern, EnemyKind};
use novastorm_core::types::Position;

/// Behavioral profile for an enemy kind.
pub struct KindProfile {
    /// Base chance that a selected enemy actually commits to an attack.
    pub attack_chance_base: f64,
    /// Added to the base chance per wave.
    pub attack_chance_per_wave: f64,
    /// Per-tick fire probability while eligible to shoot.
    pub shoot_chance: f64,
    /// Nominal bullet speed (pixels per step).
    pub bullet_speed: f64,
    /// Chance a fired bullet homes on the player instead of using its
    /// pattern angle.
    pub tracking_chance: f64,
    /// Random spread applied around the aim angle (radians).
    pub aim_spread: f64,
}

/// Get the behavioral profile for a given enemy kind.
pub fn profile(kind: EnemyKind) -> KindProfile {
    match kind {
        EnemyKind::Boss => KindProfile {
            attack_chance_base: 0.2,
            attack_chance_per_wave: 0.03,
            shoot_chance: 0.008,
            bullet_speed: 2.5,
            tracking_chance: 0.3,
            aim_spread: PI / 8.0,
        },
        EnemyKind::Escort => KindProfile {
            attack_chance_base: 0.4,
            attack_chance_per_wave: 0.05,
            shoot_chance: 0.005,
            bullet_speed: 2.0,
            tracking_chance: 0.2,
            aim_spread: PI / 6.0,
        },
        EnemyKind::Grunt => KindProfile {
            attack_chance_base: 0.25,
            attack_chance_per_wave: 0.04,
            shoot_chance: 0.003,
            bullet_speed: 1.8,
            tracking_chance: 0.1,
            aim_spread: PI / 4.0,
        },
    }
}

/// Probability that a selected enemy of this kind commits to an attack.
pub fn attack_chance(kind: EnemyKind, wave: u32) -> f64 {
    let p = profile(kind);
    p.attack_chance_base + wave as f64 * p.attack_chance_per_wave
}

/// Roll a single-attack pattern from the kind's pool and fill in its
/// randomized parameters. Bosses get the aggressive runs, escorts the full
/// maneuver set, grunts the simple ones.
pub fn roll_pattern<R: Rng>(
    kind: EnemyKind,
    start: Position,
    player: Position,
    canvas_width: f64,
    rng: &mut R,
) -> AttackPattern {
    let pool: &[PatternSeed] = match kind {
        EnemyKind::Boss => &[
            PatternSeed::SpiralDive,
            PatternSeed::SweepBombard,
            PatternSeed::StrafeRun,
            PatternSeed::CircleStrafe,
        ],
        EnemyKind::Escort => &[
            PatternSeed::Dive,
            PatternSeed::Sweep,
            PatternSeed::Zigzag,
            PatternSeed::Spiral,
            PatternSeed::Strafe,
        ],
        EnemyKind::Grunt => &[PatternSeed::Dive, PatternSeed::Zigzag, PatternSeed::Strafe],
    };

    let seed = pool[rng.gen_range(0..pool.len())];
    let direction = if start.x < canvas_width / 2.0 { 1.0 } else { -1.0 };
    let amplitude = 40.0 + rng.gen::<f64>() * 60.0;
    let frequency = 0.008 + rng.gen::<f64>() * 0.015;

    match seed {
        PatternSeed::Dive => AttackPattern::Dive,
        PatternSeed::Sweep => AttackPattern::Sweep { direction },
        PatternSeed::Zigzag => AttackPattern::Zigzag {
            amplitude,
            frequency,
        },
        PatternSeed::Spiral => AttackPattern::Spiral {
            radius: 80.0 + rng.gen::<f64>() * 40.0,
            angular_speed: 0.05 + rng.gen::<f64>() * 0.03,
        },
        PatternSeed::SpiralDive => AttackPattern::SpiralDive {
            radius: 80.0 + rng.gen::<f64>() * 40.0,
            angular_speed: 0.05 + rng.gen::<f64>() * 0.03,
        },
        PatternSeed::Strafe => AttackPattern::Strafe { amplitude },
        PatternSeed::StrafeRun => AttackPattern::StrafeRun { amplitude },
        PatternSeed::SweepBombard => AttackPattern::SweepBombard { direction },
        PatternSeed::CircleStrafe => AttackPattern::CircleStrafe {
            radius: 100.0 + rng.gen::<f64>() * 50.0,
            angular_speed: 0.03 + rng.gen::<f64>() * 0.02,
            center: player,
        },
    }
}

#[derive(Debug, Clone, Copy)]
enum PatternSeed {
    Dive,
    Sweep,
    Zigzag,
    Spiral,
    SpiralDive,
    Strafe,
    StrafeRun,
    SweepBombard,
    CircleStrafe,
}
