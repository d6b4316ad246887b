//! Simulation constants and tuning parameters.

/// Reference simulation step rate (Hz). `delta = 1.0` corresponds to one
/// step at this rate.
pub const STEP_RATE: u32 = 60;

/// Milliseconds per simulation step at the reference rate.
pub const MS_PER_STEP: f64 = 1000.0 / STEP_RATE as f64;

/// Maximum normalized frame-time multiplier. Slower frames are clamped to
/// this so a single huge tick cannot destabilize the integrators.
pub const MAX_DELTA: f64 = 3.0;

// --- Canvas ---

pub const DEFAULT_CANVAS_WIDTH: f64 = 480.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 640.0;

// --- Formation geometry ---

/// Horizontal margin inside which every formation slot is clamped.
pub const FORMATION_MARGIN: f64 = 30.0;

/// Formation slots never sit below this fraction of the canvas height.
pub const FORMATION_MAX_Y_FRACTION: f64 = 0.4;

/// Off-screen offset for entry-path spawn points.
pub const ENTRY_SPAWN_OFFSET: f64 = 50.0;

/// Entry-path control points sit this far above the target slot.
pub const ENTRY_CONTROL_LIFT: f64 = 30.0;

/// Entry-path progress gained per step.
pub const PATH_PROGRESS_PER_STEP: f64 = 0.01;

/// Idle sway while holding formation: `target_x + sin(now / period) * amp`.
pub const IDLE_SWAY_PERIOD_MS: f64 = 2000.0;
pub const IDLE_SWAY_AMPLITUDE: f64 = 10.0;

// --- Entity lifecycle ---

/// An enemy at or left of this x is logically destroyed: excluded from
/// collision, shooting, and attack selection even if still in storage.
pub const OFFSCREEN_X: f64 = -50.0;

/// Destroyed enemies are parked here until the wave sweep prunes them.
pub const DESPAWN_X: f64 = -100.0;

/// An attacking enemy ends its run once it leaves the canvas by this margin.
pub const ATTACK_EXIT_MARGIN: f64 = 50.0;

// --- Entity dimensions ---

pub const ENEMY_SIZE: f64 = 30.0;
pub const MEGA_BOSS_SIZE: f64 = 135.0;
pub const PLAYER_WIDTH: f64 = 30.0;
pub const PLAYER_HEIGHT: f64 = 30.0;
pub const POWER_UP_SIZE: f64 = 20.0;

// --- Player ---

pub const PLAYER_SPEED: f64 = 5.0;
pub const PLAYER_BULLET_SPEED: f64 = 7.0;
pub const PLAYER_BULLET_WIDTH: f64 = 2.4;
pub const PLAYER_BULLET_HEIGHT: f64 = 9.6;
pub const AUTO_FIRE_INTERVAL_MS: f64 = 150.0;

/// Invulnerability window after a hit.
pub const INVULNERABILITY_MS: f64 = 2000.0;

// --- Bullet trails (most-recent-first, bounded) ---

pub const PLAYER_TRAIL_LEN: usize = 10;
pub const ENEMY_TRAIL_LEN: usize = 16;

// --- Enemy bullets ---

pub const ENEMY_BULLET_WIDTH: f64 = 4.8;
pub const ENEMY_BULLET_HEIGHT: f64 = 7.2;
pub const MEGA_BOSS_BULLET_WIDTH: f64 = 7.2;
pub const MEGA_BOSS_BULLET_HEIGHT: f64 = 9.6;

/// Tracking bullets fly straight at the player at this fraction of the
/// nominal bullet speed.
pub const TRACKING_BULLET_SPEED_FACTOR: f64 = 0.7;

// --- Per-wave aggression budget ---

pub const MAX_ATTACKS_PER_WAVE: u32 = 10;
pub const MAX_SHOTS_PER_WAVE: u32 = 40;

// --- Attack selection ---

pub const FORMATION_ATTACK_BASE_CHANCE: f64 = 0.2;
pub const FORMATION_ATTACK_WAVE_BONUS: f64 = 0.03;

/// Formation attack groups cluster around a center enemy within this box.
pub const FORMATION_CLUSTER_DX: f64 = 100.0;
pub const FORMATION_CLUSTER_DY: f64 = 50.0;

/// Horizontal spread around the player for single-attack targets.
pub const SINGLE_ATTACK_TARGET_SPREAD: f64 = 120.0;

// --- Shooting ---

/// Waves at or below this get damped fire rates and bullet counts.
pub const EARLY_WAVE_LIMIT: u32 = 10;

/// Additive fire-chance bonus for enemies that are mid-attack.
pub const ATTACKING_SHOOT_BONUS: f64 = 0.005;

// --- Boss barrage cycle ---

/// Formation bosses rotate to the next barrage after this much firing time.
pub const BARRAGE_ROTATE_MS: f64 = 3000.0;

/// Shots per burst for the BURST barrage.
pub const BURST_LENGTH: u32 = 3;

// --- Scoring ---

pub const BOSS_SCORE: u32 = 300;
pub const ESCORT_SCORE: u32 = 200;
pub const GRUNT_SCORE: u32 = 100;

/// Mega-boss kill bonus per completed boss cycle (`1000 * wave / 3`).
pub const MEGA_BOSS_SCORE_PER_CYCLE: u32 = 1000;

// --- Indicators ---

/// Attack indicators fade by this much alpha per step.
pub const INDICATOR_FADE_PER_STEP: f64 = 0.05;

// --- Power-ups ---

pub const POWER_UP_HEALTH: i32 = 3;
pub const POWER_UP_FALL_SPEED: f64 = 1.0;

/// Chance that a destroyed regular enemy drops a power-up.
pub const POWER_UP_DROP_CHANCE: f64 = 0.1;

pub const DOUBLE_SHOT_DURATION_MS: f64 = 10_000.0;
pub const SPEED_UP_DURATION_MS: f64 = 8_000.0;
pub const SHIELD_DURATION_MS: f64 = 5_000.0;

pub const SPEED_UP_FACTOR: f64 = 1.5;
pub const PERMANENT_SPEED_FACTOR: f64 = 1.1;

// --- Wave progression ---

/// Real-time pause between clearing a wave and the next formation.
pub const WAVE_REGEN_DELAY_MS: f64 = 1000.0;

/// Wave number past which the wave-config curve is held flat for layout
/// sizing purposes.
pub const WAVE_CONFIG_CAP: u32 = 5;
