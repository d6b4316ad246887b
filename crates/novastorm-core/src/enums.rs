//! Enumeration types and tuning tables used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Enemy category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Formation lead. Cycles through a cooldown-gated barrage table once
    /// in position.
    Boss,
    /// Mid-tier escort, tougher and more aggressive than grunts.
    Escort,
    #[default]
    Grunt,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Playing,
    Paused,
    GameOver,
}

/// Selectable game mode. Multipliers scale enemy aggression; the mode also
/// keys high-score storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Classic,
    Arcade,
    Survival,
    Challenge,
}

/// Base difficulty row. The engine runs on `Normal`; the table exists so
/// boss health and attack pacing stay tunable per difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Per-mode tuning record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModeSettings {
    pub lives: u32,
    pub enemy_speed_multiplier: f64,
    pub attack_frequency: f64,
    pub shoot_frequency: f64,
    pub wave_difficulty: f64,
}

/// Per-difficulty tuning record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub enemy_speed: f64,
    /// Attack selector cooldown in steps, before the mode multiplier.
    pub attack_cooldown: f64,
    /// Cap on simultaneously attacking enemies at the selector gate.
    pub max_attackers: usize,
    pub score_multiplier: f64,
}

impl GameMode {
    pub fn settings(self) -> ModeSettings {
        match self {
            GameMode::Classic => ModeSettings {
                lives: 3,
                enemy_speed_multiplier: 1.0,
                attack_frequency: 1.0,
                shoot_frequency: 1.0,
                wave_difficulty: 1.0,
            },
            GameMode::Arcade => ModeSettings {
                lives: 3,
                enemy_speed_multiplier: 1.3,
                attack_frequency: 1.5,
                shoot_frequency: 1.4,
                wave_difficulty: 1.2,
            },
            GameMode::Survival => ModeSettings {
                lives: 3,
                enemy_speed_multiplier: 1.1,
                attack_frequency: 1.2,
                shoot_frequency: 1.1,
                wave_difficulty: 1.15,
            },
            GameMode::Challenge => ModeSettings {
                lives: 1,
                enemy_speed_multiplier: 1.5,
                attack_frequency: 2.0,
                shoot_frequency: 1.8,
                wave_difficulty: 1.5,
            },
        }
    }
}

impl Difficulty {
    pub fn settings(self) -> DifficultySettings {
        match self {
            Difficulty::Easy => DifficultySettings {
                enemy_speed: 1.0,
                attack_cooldown: 200.0,
                max_attackers: 1,
                score_multiplier: 0.8,
            },
            Difficulty::Normal => DifficultySettings {
                enemy_speed: 1.5,
                attack_cooldown: 180.0,
                max_attackers: 2,
                score_multiplier: 1.0,
            },
            Difficulty::Hard => DifficultySettings {
                enemy_speed: 2.0,
                attack_cooldown: 150.0,
                max_attackers: 3,
                score_multiplier: 1.5,
            },
        }
    }
}

/// Attack motion pattern, assigned once when an attack run starts. The
/// payload carries the pattern-specific parameters rolled at attack start.
///
/// `Wave`, `Pincer`, `Bombardment`, and `CoordinatedDive` are the
/// formation-attack choreographies; the rest are single-enemy runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AttackPattern {
    /// Force-directed homing dive with a sinusoidal lateral curve.
    Dive,
    /// Constant horizontal drift with slow descent and vertical wobble.
    Sweep { direction: f64 },
    /// Slow descent easing toward a sine offset around the start column.
    Zigzag { amplitude: f64, frequency: f64 },
    /// Orbits the attack start point with shrinking radius and downward drift.
    Spiral { radius: f64, angular_speed: f64 },
    /// Spiral with a weak constant nudge toward the player.
    SpiralDive { radius: f64, angular_speed: f64 },
    /// Forward drift plus eased horizontal oscillation.
    Strafe { amplitude: f64 },
    /// Strafe with faster descent and per-tick jitter.
    StrafeRun { amplitude: f64 },
    /// Horizontal sweep; descent gated on a sinusoidal duty cycle.
    SweepBombard { direction: f64 },
    /// Eases toward a point orbiting the player at shrinking radius.
    CircleStrafe {
        radius: f64,
        angular_speed: f64,
        center: Position,
    },
    /// Formation: staggered straight-line homing with vertical wobble.
    Wave { delay_ms: f64 },
    /// Formation: straight-line homing onto a flank target.
    Pincer { delay_ms: f64 },
    /// Formation: move to a hold position, then hover in place.
    Bombardment { delay_ms: f64 },
    /// Formation: straight-line homing onto a ring slot around the player.
    CoordinatedDive { delay_ms: f64 },
}

impl Default for AttackPattern {
    /// Documented fallback: any attack without a meaningful pattern dives.
    fn default() -> Self {
        AttackPattern::Dive
    }
}

impl AttackPattern {
    /// Whether this pattern belongs to a coordinated formation attack.
    pub fn is_formation(&self) -> bool {
        matches!(
            self,
            AttackPattern::Wave { .. }
                | AttackPattern::Pincer { .. }
                | AttackPattern::Bombardment { .. }
                | AttackPattern::CoordinatedDive { .. }
        )
    }

    /// Pre-movement delay for staggered formation attacks.
    pub fn delay_ms(&self) -> f64 {
        match *self {
            AttackPattern::Wave { delay_ms }
            | AttackPattern::Pincer { delay_ms }
            | AttackPattern::Bombardment { delay_ms }
            | AttackPattern::CoordinatedDive { delay_ms } => delay_ms,
            _ => 0.0,
        }
    }
}

/// Barrage fired by in-position formation bosses, cycled on a cooldown table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarrageKind {
    Single,
    Spread,
    Burst,
    Circle,
}

/// Barrage fired by the mega-boss shooting path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MegaBarrage {
    CircleBarrage,
    SpiralBarrage,
    TrackingShots,
    WaveBarrage,
    ExplosiveRing,
    LaserSweep,
}

/// Power-up payload kinds. Timed kinds expire via `expires_at` sweeps;
/// permanent kinds stack and suppress the matching timed expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    DoubleShot,
    SpeedUp,
    Shield,
    ExtraLife,
    PermanentSpeed,
    PermanentShot,
}

/// Which side owns a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}
