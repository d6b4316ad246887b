//! Enemy shooting engine — per-tick stochastic fire decisions, aimed
//! shots, and pattern-correlated volleys.
//!
//! Shooting unlocks once an enemy reaches formation and its randomized
//! initial cooldown expires, and every shot is gated by the per-wave shot
//! budget. Early waves damp both fire chance and volley sizes.

use std::f64::consts::PI;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::*;
use novastorm_core::constants::*;
use novastorm_core::enums::{AttackPattern, BulletOwner, GameMode};
use novastorm_core::types::{Position, Velocity};

use novastorm_attack_ai::profiles;

use super::wave_progress::WaveBudget;

/// Where a bullet leaves an enemy: bottom-center of its box.
#[derive(Debug, Clone, Copy)]
pub(super) struct Muzzle {
    pub position: Position,
    pub damage: i32,
    pub mega: bool,
}

impl Muzzle {
    pub(super) fn for_enemy(pos: Position, hitbox: &Hitbox, profile: &EnemyProfile) -> Self {
        Self {
            position: Position::new(pos.x, pos.y + hitbox.height / 2.0),
            damage: profile.bullet_damage,
            mega: profile.is_mega_boss,
        }
    }
}

/// Spawn a bullet flying at a fixed angle.
pub(super) fn spawn_angle_bullet(world: &mut World, muzzle: Muzzle, angle: f64, speed: f64) {
    spawn_bullet(world, muzzle, Velocity::from_angle(angle, speed), false);
}

/// Spawn a bullet that may home on the player: with `tracking_chance` it
/// flies straight at the player at reduced speed, otherwise it uses the
/// given angle.
#[allow(clippy::too_many_arguments)]
pub(super) fn spawn_aimed_bullet(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    muzzle: Muzzle,
    angle: f64,
    speed: f64,
    tracking_chance: f64,
    player: Position,
) {
    let is_tracking = rng.gen::<f64>() < tracking_chance;
    let velocity = if is_tracking {
        let distance = muzzle.position.distance_to(&player);
        if distance > 0.0 {
            Velocity::new(
                (player.x - muzzle.position.x) / distance * speed * TRACKING_BULLET_SPEED_FACTOR,
                (player.y - muzzle.position.y) / distance * speed * TRACKING_BULLET_SPEED_FACTOR,
            )
        } else {
            // Degenerate zero-length aim: fall back to the pattern angle.
            Velocity::from_angle(angle, speed)
        }
    } else {
        Velocity::from_angle(angle, speed)
    };
    spawn_bullet(world, muzzle, velocity, is_tracking);
}

fn spawn_bullet(world: &mut World, muzzle: Muzzle, velocity: Velocity, is_tracking: bool) {
    let (width, height) = if muzzle.mega {
        (MEGA_BOSS_BULLET_WIDTH, MEGA_BOSS_BULLET_HEIGHT)
    } else {
        (ENEMY_BULLET_WIDTH, ENEMY_BULLET_HEIGHT)
    };
    world.spawn((
        Bullet {
            owner: BulletOwner::Enemy,
            damage: muzzle.damage,
            is_tracking,
        },
        muzzle.position,
        velocity,
        Hitbox { width, height },
        Trail::default(),
    ));
}

/// Early-wave fire-rate damping: ramps from 55% at wave 1 to full rate
/// past wave 10.
fn early_wave_damping(wave: u32) -> f64 {
    if wave <= EARLY_WAVE_LIMIT {
        0.5 + wave as f64 * 0.05
    } else {
        1.0
    }
}

/// Damp a volley's bullet count in early waves, with a floor.
fn damp_count(count: u32, wave: u32, divisor: f64, floor: u32) -> u32 {
    if wave <= EARLY_WAVE_LIMIT {
        let reduction = ((EARLY_WAVE_LIMIT + 1 - wave) as f64 / divisor).floor() as u32;
        count.saturating_sub(reduction).max(floor)
    } else {
        count
    }
}

/// One queued fire decision, resolved after the scan pass.
struct PendingShot {
    muzzle: Muzzle,
    kind_tracking: f64,
    aim_spread: f64,
    bullet_speed: f64,
    pattern: Option<AttackPattern>,
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    mode: GameMode,
    budget: &mut WaveBudget,
    player: Position,
    now_ms: f64,
    delta: f64,
) {
    // Unlock shooting for enemies that have settled into formation.
    for (_entity, (_enemy, profile, state, timer)) in
        world.query_mut::<(&Enemy, &EnemyProfile, &mut EnemyState, &mut ShootTimer)>()
    {
        if profile.is_mega_boss {
            continue;
        }
        if !state.can_shoot && state.in_position {
            timer.cooldown -= delta;
            if timer.cooldown <= 0.0 {
                state.can_shoot = true;
            }
        }
    }

    // Scan pass: roll fire decisions without touching the world shape.
    let mut pending: Vec<PendingShot> = Vec::new();
    {
        let mut query = world.query::<(
            &Enemy,
            &EnemyProfile,
            &EnemyState,
            &Position,
            &Hitbox,
            Option<&AttackRun>,
        )>();
        for (_entity, (_enemy, profile, state, pos, hitbox, attack)) in query.iter() {
            if profile.is_mega_boss || !state.can_shoot || pos.x <= OFFSCREEN_X {
                continue;
            }
            if !budget.can_shoot() {
                break;
            }

            let kind = profiles::profile(profile.kind);
            let mut chance = kind.shoot_chance * mode.settings().shoot_frequency;
            chance *= early_wave_damping(wave);
            if attack.is_some() {
                chance += ATTACKING_SHOOT_BONUS;
            }

            if rng.gen::<f64>() >= chance {
                continue;
            }

            pending.push(PendingShot {
                muzzle: Muzzle::for_enemy(*pos, hitbox, profile),
                kind_tracking: kind.tracking_chance,
                aim_spread: kind.aim_spread,
                bullet_speed: profile.bullet_speed.min(4.0),
                pattern: attack.map(|run| run.pattern),
            });
        }
    }

    // Fire pass.
    for shot in pending {
        match shot.pattern {
            Some(pattern) => fire_pattern_volley(world, rng, &shot, pattern, wave, budget, player, now_ms),
            None => {
                fire_standard_shot(world, rng, &shot, budget, player);
            }
        }
    }
}

/// Standard aimed shot: angle to the player plus kind-specific spread.
fn fire_standard_shot(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    shot: &PendingShot,
    budget: &mut WaveBudget,
    player: Position,
) {
    if budget.remaining_shots() == 0 {
        return;
    }
    let base_angle = shot.muzzle.position.angle_to(&player);
    let angle = base_angle + (rng.gen::<f64>() - 0.5) * shot.aim_spread;
    spawn_aimed_bullet(
        world,
        rng,
        shot.muzzle,
        angle,
        shot.bullet_speed,
        shot.kind_tracking,
        player,
    );
    budget.note_shots(1);
}

/// Pattern-correlated volley for mid-attack enemies.
#[allow(clippy::too_many_arguments)]
fn fire_pattern_volley(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    shot: &PendingShot,
    pattern: AttackPattern,
    wave: u32,
    budget: &mut WaveBudget,
    player: Position,
    now_ms: f64,
) {
    let speed = shot.bullet_speed;
    if budget.remaining_shots() == 0 {
        return;
    }
    match pattern {
        AttackPattern::Spiral { .. } | AttackPattern::SpiralDive { .. } => {
            let count = damp_count(3 + rng.gen_range(0..2), wave, 3.0, 1).min(budget.remaining_shots());
            let start_angle = rng.gen::<f64>() * std::f64::consts::TAU;
            for i in 0..count {
                let angle = start_angle + i as f64 * std::f64::consts::TAU / count as f64;
                spawn_angle_bullet(world, shot.muzzle, angle, speed * 0.8);
            }
            budget.note_shots(count);
        }
        AttackPattern::Sweep { .. } | AttackPattern::SweepBombard { .. } => {
            let count = damp_count(2 + rng.gen_range(0..2), wave, 4.0, 1).min(budget.remaining_shots());
            let spread = PI / 6.0;
            for i in 0..count {
                let angle = if count > 1 {
                    PI / 2.0 + spread * (i as f64 / (count - 1) as f64 - 0.5)
                } else {
                    PI / 2.0
                };
                spawn_angle_bullet(world, shot.muzzle, angle, speed);
            }
            budget.note_shots(count);
        }
        AttackPattern::Strafe { .. } | AttackPattern::StrafeRun { .. } => {
            let base_angle = shot.muzzle.position.angle_to(&player);
            let angle = base_angle + (rng.gen::<f64>() - 0.5) * PI / 8.0;
            spawn_aimed_bullet(
                world,
                rng,
                shot.muzzle,
                angle,
                speed * 1.1,
                shot.kind_tracking,
                player,
            );
            budget.note_shots(1);
        }
        AttackPattern::CircleStrafe { .. } => {
            let count = damp_count(4, wave, 5.0, 2).min(budget.remaining_shots());
            for i in 0..count {
                let angle = i as f64 / count as f64 * std::f64::consts::TAU;
                spawn_angle_bullet(world, shot.muzzle, angle, speed * 0.9);
            }
            budget.note_shots(count);
        }
        AttackPattern::Zigzag { .. } => {
            let count = damp_count(2, wave, 6.0, 1).min(budget.remaining_shots());
            let zigzag_offset = (now_ms * 0.01).sin() * PI / 6.0;
            for i in 0..count {
                let angle = PI / 2.0 + zigzag_offset + (i as f64 - 0.5) * PI / 12.0;
                spawn_angle_bullet(world, shot.muzzle, angle, speed);
            }
            budget.note_shots(count);
        }
        // Dive and the formation choreographies fire a tight aimed shot.
        _ => {
            let base_angle = shot.muzzle.position.angle_to(&player);
            let angle = base_angle + (rng.gen::<f64>() - 0.5) * PI / 12.0;
            spawn_aimed_bullet(
                world,
                rng,
                shot.muzzle,
                angle,
                speed * 1.2,
                shot.kind_tracking,
                player,
            );
            budget.note_shots(1);
        }
    }
}
