//! Boss barrage cycles.
//!
//! Formation bosses (kind `Boss`, non-mega) cycle through a cooldown-gated
//! barrage table once parked, rotating patterns every few seconds. The
//! mega-boss fires one of six heavy barrages each time its interval
//! elapses. Barrage bullets are exempt from the per-wave shot budget.

use std::f64::consts::PI;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::*;
use novastorm_core::constants::{BARRAGE_ROTATE_MS, BURST_LENGTH, EARLY_WAVE_LIMIT, OFFSCREEN_X};
use novastorm_core::enums::{BarrageKind, EnemyKind, MegaBarrage};
use novastorm_core::types::Position;

use super::shooting::{spawn_angle_bullet, Muzzle};

/// Barrage rotation order with per-barrage cooldowns in milliseconds.
const BARRAGE_TABLE: [(BarrageKind, f64); 4] = [
    (BarrageKind::Single, 1000.0),
    (BarrageKind::Spread, 800.0),
    (BarrageKind::Burst, 150.0),
    (BarrageKind::Circle, 1200.0),
];

const MEGA_BARRAGES: [MegaBarrage; 6] = [
    MegaBarrage::CircleBarrage,
    MegaBarrage::SpiralBarrage,
    MegaBarrage::TrackingShots,
    MegaBarrage::WaveBarrage,
    MegaBarrage::ExplosiveRing,
    MegaBarrage::LaserSweep,
];

/// Scale a barrage bullet count down in early waves, with a floor.
fn damp(count: u32, wave: u32, per_wave: f64, floor: u32) -> u32 {
    if wave <= EARLY_WAVE_LIMIT {
        let reduction = ((EARLY_WAVE_LIMIT + 1 - wave) as f64 * per_wave).floor() as u32;
        count.saturating_sub(reduction).max(floor)
    } else {
        count
    }
}

struct QueuedBarrage {
    muzzle: Muzzle,
    shape: Shape,
}

enum Shape {
    Cycle(BarrageKind),
    Mega(MegaBarrage),
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    now_ms: f64,
    delta: f64,
    player: Position,
) {
    let mut queued: Vec<QueuedBarrage> = Vec::new();

    // Formation bosses: advance the cycle state machine.
    for (_entity, (_enemy, profile, state, pos, hitbox, cycle)) in world.query_mut::<(
        &Enemy,
        &EnemyProfile,
        &EnemyState,
        &Position,
        &Hitbox,
        &mut BarrageCycle,
    )>() {
        if profile.is_mega_boss
            || profile.kind != EnemyKind::Boss
            || !state.in_position
            || pos.x <= OFFSCREEN_X
        {
            continue;
        }

        let (kind, cooldown) = BARRAGE_TABLE[cycle.current % BARRAGE_TABLE.len()];
        if now_ms - cycle.last_shot_ms < cooldown {
            continue;
        }

        if kind == BarrageKind::Burst {
            if cycle.burst_count < BURST_LENGTH {
                cycle.burst_count += 1;
                queued.push(QueuedBarrage {
                    muzzle: Muzzle::for_enemy(*pos, hitbox, profile),
                    shape: Shape::Cycle(kind),
                });
            } else {
                // Burst exhausted: move on without firing.
                cycle.burst_count = 0;
                cycle.current = (cycle.current + 1) % BARRAGE_TABLE.len();
            }
        } else {
            queued.push(QueuedBarrage {
                muzzle: Muzzle::for_enemy(*pos, hitbox, profile),
                shape: Shape::Cycle(kind),
            });
        }

        cycle.last_shot_ms = now_ms;
        cycle.pattern_timer_ms += cooldown;
        if cycle.pattern_timer_ms >= BARRAGE_ROTATE_MS {
            cycle.current = (cycle.current + 1) % BARRAGE_TABLE.len();
            cycle.pattern_timer_ms = 0.0;
            cycle.burst_count = 0;
        }
    }

    // Mega-boss: fire a random heavy barrage every interval.
    for (_entity, (_enemy, profile, state, pos, hitbox, timer)) in world.query_mut::<(
        &Enemy,
        &EnemyProfile,
        &EnemyState,
        &Position,
        &Hitbox,
        &mut ShootTimer,
    )>() {
        if !profile.is_mega_boss || !state.in_position || pos.x <= OFFSCREEN_X {
            continue;
        }
        timer.cooldown += delta;
        if timer.cooldown >= timer.interval {
            timer.cooldown = 0.0;
            let barrage = MEGA_BARRAGES[rng.gen_range(0..MEGA_BARRAGES.len())];
            queued.push(QueuedBarrage {
                muzzle: Muzzle::for_enemy(*pos, hitbox, profile),
                shape: Shape::Mega(barrage),
            });
        }
    }

    for barrage in queued {
        match barrage.shape {
            Shape::Cycle(kind) => fire_cycle_barrage(world, rng, barrage.muzzle, kind),
            Shape::Mega(kind) => fire_mega_barrage(world, rng, barrage.muzzle, kind, wave, now_ms, player),
        }
    }
}

/// The formation-boss barrage table.
fn fire_cycle_barrage(world: &mut World, rng: &mut ChaCha8Rng, muzzle: Muzzle, kind: BarrageKind) {
    match kind {
        BarrageKind::Single => {
            // One shot somewhere in a 60 degree downward cone.
            let angle = PI / 2.0 + (rng.gen::<f64>() - 0.5) * PI / 3.0;
            spawn_angle_bullet(world, muzzle, angle, 5.0);
        }
        BarrageKind::Spread => {
            let count = 2 + rng.gen_range(0..3);
            let base = PI / 2.0 + (rng.gen::<f64>() - 0.5) * PI / 6.0;
            let spread = PI / 4.0;
            for i in 0..count {
                let angle = base + spread * (i as f64 / (count - 1) as f64 - 0.5);
                spawn_angle_bullet(world, muzzle, angle, 5.0);
            }
        }
        BarrageKind::Burst => {
            let angle = PI / 2.0 + (rng.gen::<f64>() - 0.5) * PI / 4.0;
            spawn_angle_bullet(world, muzzle, angle, 5.0);
        }
        BarrageKind::Circle => {
            let count = 6 + rng.gen_range(0..3);
            let start = rng.gen::<f64>() * std::f64::consts::TAU;
            for i in 0..count {
                let angle = start + i as f64 * std::f64::consts::TAU / count as f64;
                spawn_angle_bullet(world, muzzle, angle, 5.0);
            }
        }
    }
}

/// The six mega-boss barrages. Bullet counts damp downward in early waves.
fn fire_mega_barrage(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    muzzle: Muzzle,
    kind: MegaBarrage,
    wave: u32,
    now_ms: f64,
    player: Position,
) {
    match kind {
        MegaBarrage::CircleBarrage => {
            let count = damp(20, wave, 1.5, 8);
            for i in 0..count {
                let angle = i as f64 / count as f64 * std::f64::consts::TAU;
                spawn_angle_bullet(world, muzzle, angle, 4.0);
            }
        }
        MegaBarrage::SpiralBarrage => {
            let count = damp(12, wave, 0.8, 4);
            // The whole spiral rotates over time.
            let phase = now_ms * 0.01;
            for i in 0..count {
                let angle = phase + i as f64 * std::f64::consts::TAU / count as f64;
                spawn_angle_bullet(world, muzzle, angle, 3.5);
            }
        }
        MegaBarrage::TrackingShots => {
            let count = damp(5, wave, 1.0 / 3.0, 2);
            let base = muzzle.position.angle_to(&player);
            let spread = PI / 6.0;
            for i in 0..count {
                let angle = if count > 1 {
                    base + spread * (i as f64 / (count - 1) as f64 - 0.5)
                } else {
                    base
                };
                spawn_angle_bullet(world, muzzle, angle, 5.0);
            }
        }
        MegaBarrage::WaveBarrage => {
            let count = damp(8, wave, 0.5, 3);
            let wave_offset = (now_ms * 0.005).sin() * PI / 4.0;
            for i in 0..count {
                let angle = PI / 2.0 + wave_offset + (i as f64 / count as f64 - 0.5) * PI / 2.0;
                spawn_angle_bullet(world, muzzle, angle, 4.5);
            }
        }
        MegaBarrage::ExplosiveRing => {
            let count = damp(16, wave, 1.2, 6);
            for i in 0..count {
                let angle = i as f64 / count as f64 * std::f64::consts::TAU;
                spawn_ring_bullet(world, muzzle, angle);
            }
        }
        MegaBarrage::LaserSweep => {
            let count = damp(10, wave, 1.0 / 1.5, 4);
            let sweep_angle = (now_ms * 0.002) % std::f64::consts::TAU;
            let sweep_width = PI / 3.0;
            for i in 0..count {
                let angle = if count > 1 {
                    sweep_angle + sweep_width * (i as f64 / (count - 1) as f64 - 0.5)
                } else {
                    sweep_angle
                };
                spawn_angle_bullet(world, muzzle, angle, 6.0);
            }
        }
    }
}

/// Expanding-ring bullet: slow radial flight plus renderer-facing
/// expansion metadata.
fn spawn_ring_bullet(world: &mut World, muzzle: Muzzle, angle: f64) {
    use novastorm_core::enums::BulletOwner;
    use novastorm_core::types::Velocity;

    world.spawn((
        Bullet {
            owner: BulletOwner::Enemy,
            damage: muzzle.damage,
            is_tracking: false,
        },
        muzzle.position,
        Velocity::from_angle(angle, 2.0),
        Hitbox {
            width: 6.0,
            height: 6.0,
        },
        Trail::default(),
        RingBullet {
            expansion_radius: 0.0,
            expansion_speed: 0.1,
        },
    ));
}
