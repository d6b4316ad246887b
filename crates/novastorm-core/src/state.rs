//! Game state snapshot — the complete visible state handed to the host
//! after each tick. The renderer consumes this; the engine issues no
//! drawing calls itself.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete per-tick snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub wave: u32,
    pub score: u32,
    pub lives: u32,
    pub high_score: u32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub player_bullets: Vec<BulletView>,
    pub enemy_bullets: Vec<BulletView>,
    pub power_ups: Vec<PowerUpView>,
    pub attack_indicators: Vec<AttackIndicator>,
    pub boss: Option<BossView>,
    pub budget: BudgetView,
    pub wave_config: WaveConfigView,
    pub wave_stats: WaveStats,
    pub events: Vec<GameEvent>,
}

/// The player ship as the renderer sees it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub width: f64,
    pub height: f64,
    pub invulnerable: bool,
    pub shielded: bool,
    pub double_shot: bool,
    pub auto_fire: bool,
}

/// One formation enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub is_mega_boss: bool,
    pub position: Position,
    pub width: f64,
    pub height: f64,
    pub health: i32,
    pub in_position: bool,
    pub attacking: bool,
    /// Active pattern while attacking.
    pub pattern: Option<AttackPattern>,
}

/// One projectile, with its bounded trail (most-recent-first).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Position,
    pub velocity: Velocity,
    pub width: f64,
    pub height: f64,
    pub is_tracking: bool,
    pub trail: Vec<Position>,
}

/// One falling power-up drop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    pub position: Position,
    pub health: i32,
}

/// Transient attack telegraph line from the attacker to its target lane.
/// Owned by the core (created at attack start, alpha-decayed each tick,
/// pruned at zero) but rendered externally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttackIndicator {
    pub start: Position,
    pub end: Position,
    pub alpha: f64,
}

/// Mega-boss health bar state, present on boss waves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BossView {
    pub current_health: i32,
    pub max_health: i32,
    pub power_scale: f64,
}

/// Remaining per-wave aggression budget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetView {
    pub attacks_launched: u32,
    pub max_attacks: u32,
    pub shots_fired: u32,
    pub max_shots: u32,
}

/// The wave-config row for the current wave (HUD surface).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveConfigView {
    pub total_enemies: u32,
    pub boss_count: u32,
    pub escort_count: u32,
    pub speed_multiplier: f64,
}

/// Per-wave accuracy statistics for the host UI.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveStats {
    pub shots_fired: u32,
    pub hits: u32,
    pub enemies_defeated: u32,
}
