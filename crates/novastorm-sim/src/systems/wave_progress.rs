//! Wave progression — detects cleared waves, resets per-wave state, and
//! regenerates the next formation after the pacing delay.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::{Bullet, Enemy, EnemyProfile};
use novastorm_core::constants::{
    MAX_ATTACKS_PER_WAVE, MAX_SHOTS_PER_WAVE, MS_PER_STEP, OFFSCREEN_X, WAVE_REGEN_DELAY_MS,
};
use novastorm_core::enums::{BulletOwner, Difficulty, GameMode};
use novastorm_core::events::GameEvent;
use novastorm_core::state::{AttackIndicator, WaveStats};
use novastorm_core::types::Position;

use crate::boss::BossConfig;
use crate::formation;

/// Per-wave cap on aggressive actions. Exhaustion is not an error: further
/// attacks and shots are silently suppressed until the next wave resets.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveBudget {
    pub attacks_launched: u32,
    pub shots_fired: u32,
}

impl WaveBudget {
    pub fn can_attack(&self) -> bool {
        self.attacks_launched < MAX_ATTACKS_PER_WAVE
    }

    pub fn can_shoot(&self) -> bool {
        self.shots_fired < MAX_SHOTS_PER_WAVE
    }

    /// Shots left before the cap. Volleys clamp to this so the cap is a
    /// hard ceiling.
    pub fn remaining_shots(&self) -> u32 {
        MAX_SHOTS_PER_WAVE.saturating_sub(self.shots_fired)
    }

    pub fn note_attack(&mut self) {
        self.attacks_launched += 1;
    }

    pub fn note_shots(&mut self, count: u32) {
        self.shots_fired += count;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Check for a cleared wave and drive the regeneration countdown.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: &mut u32,
    mode: GameMode,
    difficulty: Difficulty,
    boss: &mut BossConfig,
    budget: &mut WaveBudget,
    attack_timer: &mut f64,
    regen_countdown_ms: &mut Option<f64>,
    indicators: &mut Vec<AttackIndicator>,
    stats: &mut WaveStats,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
    canvas_width: f64,
    canvas_height: f64,
    delta: f64,
) {
    // Countdown toward the next formation, if one is pending.
    if let Some(remaining) = regen_countdown_ms {
        *remaining -= delta * MS_PER_STEP;
        if *remaining <= 0.0 {
            *regen_countdown_ms = None;
            formation::spawn_wave(
                world,
                rng,
                *wave,
                mode,
                difficulty,
                boss,
                canvas_width,
                canvas_height,
            );
            events.push(GameEvent::WaveStarted {
                wave: *wave,
                boss_wave: formation::is_boss_wave(*wave),
            });
        }
        return;
    }

    let boss_wave = formation::is_boss_wave(*wave);
    let mut formation_exists = false;
    let mut any_left = false;
    for (_entity, (_enemy, profile, pos)) in world.query::<(&Enemy, &EnemyProfile, &Position)>().iter()
    {
        formation_exists = true;
        let alive = pos.x > OFFSCREEN_X;
        // On boss waves only the mega-boss keeps the wave going.
        if alive && (!boss_wave || profile.is_mega_boss) {
            any_left = true;
        }
    }

    if !formation_exists || any_left {
        return;
    }

    events.push(GameEvent::WaveCleared { wave: *wave });

    // Clear the dead formation and every enemy bullet in flight.
    despawn_buffer.clear();
    for (entity, _enemy) in world.query::<&Enemy>().iter() {
        despawn_buffer.push(entity);
    }
    for (entity, bullet) in world.query::<&Bullet>().iter() {
        if bullet.owner == BulletOwner::Enemy {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    indicators.clear();

    boss.reset();
    *wave += 1;
    budget.reset();
    *attack_timer = 0.0;
    *stats = WaveStats::default();
    *regen_countdown_ms = Some(WAVE_REGEN_DELAY_MS);
}
