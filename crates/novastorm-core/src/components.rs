//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods beyond small
//! accessors. Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, Velocity};

/// Marks an entity as the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Player status: movement tuning plus active power-up effects. Timed
/// effects store an absolute `_until_ms` deadline checked by the per-tick
/// expiry sweep; permanent stacks suppress the matching expiry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub base_speed: f64,
    pub invulnerable_until_ms: f64,
    pub shield_until_ms: f64,
    pub double_shot_until_ms: f64,
    pub speed_boost_until_ms: f64,
    pub permanent_speed_stacks: u32,
    pub permanent_shot_stacks: u32,
}

impl PlayerStatus {
    pub fn invulnerable(&self, now_ms: f64) -> bool {
        now_ms < self.invulnerable_until_ms
    }

    pub fn shielded(&self, now_ms: f64) -> bool {
        now_ms < self.shield_until_ms
    }

    pub fn double_shot_active(&self, now_ms: f64) -> bool {
        self.permanent_shot_stacks > 0 || now_ms < self.double_shot_until_ms
    }

    /// Effective movement speed after timed boost and permanent stacks.
    pub fn effective_speed(&self, now_ms: f64) -> f64 {
        let boost = if now_ms < self.speed_boost_until_ms {
            crate::constants::SPEED_UP_FACTOR
        } else {
            1.0
        };
        self.base_speed
            * boost
            * crate::constants::PERMANENT_SPEED_FACTOR.powi(self.permanent_speed_stacks as i32)
    }
}

/// Marks an entity as a formation enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Per-enemy combat profile, fixed at formation build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub kind: EnemyKind,
    pub is_mega_boss: bool,
    pub health: i32,
    /// Nominal movement speed (pixels per step before pattern scaling).
    pub speed: f64,
    pub bullet_speed: f64,
    pub bullet_damage: i32,
}

/// The enemy's assigned formation slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FormationSlot {
    pub target: Position,
}

/// Quadratic Bézier entry path, used only until the enemy is in position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntryPath {
    pub start: Position,
    pub control: Position,
    /// Progress along the curve in `[0, 1]`.
    pub progress: f64,
}

/// Mutable lifecycle flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EnemyState {
    pub in_position: bool,
    pub can_shoot: bool,
}

/// Shooting timers in steps. `cooldown` counts down to unlock the first
/// shot after arrival; the mega-boss reuses it as its barrage interval
/// accumulator against `interval`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShootTimer {
    pub cooldown: f64,
    pub interval: f64,
}

/// Live attack-run state. Present on an enemy exactly while it is
/// attacking; removed when the run leaves the canvas or the enemy dies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackRun {
    pub pattern: AttackPattern,
    /// Abstract pattern progress, advanced 0.01 per step.
    pub progress: f64,
    /// Position where the attack began.
    pub start: Position,
    pub started_ms: f64,
    pub target: Position,
    pub max_speed: f64,
    /// Ramps from zero to `max_speed` by `acceleration` per step.
    pub current_speed: f64,
    pub acceleration: f64,
    pub velocity: Velocity,
    pub friction: f64,
    pub max_velocity: f64,
    /// Whether the run re-aims its target column at the player each tick.
    pub tracking: bool,
}

/// Barrage cycle state for formation bosses.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BarrageCycle {
    /// Index into the barrage table.
    pub current: usize,
    /// Accumulated firing time toward the next rotation.
    pub pattern_timer_ms: f64,
    pub last_shot_ms: f64,
    pub burst_count: u32,
}

/// A projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub owner: BulletOwner,
    pub damage: i32,
    /// Homing enemy bullet aimed straight at the player at launch.
    pub is_tracking: bool,
}

/// Expanding-ring metadata carried by EXPLOSIVE_RING barrage bullets.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RingBullet {
    pub expansion_radius: f64,
    pub expansion_speed: f64,
}

/// Axis-aligned bounding box dimensions, centered on the entity position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub width: f64,
    pub height: f64,
}

impl Hitbox {
    pub fn square(size: f64) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

/// Bounded most-recent-first position history for trail rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trail {
    pub points: Vec<Position>,
}

impl Trail {
    pub fn push(&mut self, position: Position, max_len: usize) {
        self.points.insert(0, position);
        self.points.truncate(max_len);
    }
}

/// A falling power-up drop. Opens (applies) after `health` bullet hits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub health: i32,
}
