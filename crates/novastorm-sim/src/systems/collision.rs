//! Collision & destruction resolver.
//!
//! Runs a read-only detection pass over the collected entity lists, then
//! applies every destroy/score/spawn side effect in a single post-pass.
//! Nothing is removed while any collision list is being iterated, so no
//! pair can be skipped by index shifts.

use std::collections::HashSet;

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::*;
use novastorm_core::constants::*;
use novastorm_core::enums::{BulletOwner, Difficulty, EnemyKind, GameMode, GamePhase};
use novastorm_core::events::GameEvent;
use novastorm_core::geometry::{bullets_clash, rects_overlap};
use novastorm_core::state::WaveStats;
use novastorm_core::types::Position;

use crate::boss::BossConfig;
use crate::scores::HighScores;

use super::power_ups;

#[derive(Clone, Copy)]
struct BulletRef {
    entity: Entity,
    position: Position,
    hitbox: Hitbox,
    damage: i32,
}

#[derive(Clone, Copy)]
struct EnemyRef {
    entity: Entity,
    position: Position,
    hitbox: Hitbox,
    kind: EnemyKind,
    is_mega_boss: bool,
    attacking: bool,
    health: i32,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    mode: GameMode,
    difficulty: Difficulty,
    boss: &mut BossConfig,
    score: &mut u32,
    lives: &mut u32,
    phase: &mut GamePhase,
    high_scores: &mut HighScores,
    stats: &mut WaveStats,
    events: &mut Vec<GameEvent>,
    now_ms: f64,
    canvas_width: f64,
    canvas_height: f64,
) {
    // --- Detection pass: collect everything up front. ---

    let mut player_bullets: Vec<BulletRef> = Vec::new();
    let mut enemy_bullets: Vec<BulletRef> = Vec::new();
    for (entity, (bullet, pos, hitbox)) in
        world.query::<(&Bullet, &Position, &Hitbox)>().iter()
    {
        let item = BulletRef {
            entity,
            position: *pos,
            hitbox: *hitbox,
            damage: bullet.damage,
        };
        match bullet.owner {
            BulletOwner::Player => player_bullets.push(item),
            BulletOwner::Enemy => enemy_bullets.push(item),
        }
    }

    let mut enemies: Vec<EnemyRef> = Vec::new();
    for (entity, (_enemy, profile, pos, hitbox, attack)) in world
        .query::<(&Enemy, &EnemyProfile, &Position, &Hitbox, Option<&AttackRun>)>()
        .iter()
    {
        // Already-destroyed enemies never participate in collisions.
        if pos.x <= OFFSCREEN_X {
            continue;
        }
        enemies.push(EnemyRef {
            entity,
            position: *pos,
            hitbox: *hitbox,
            kind: profile.kind,
            is_mega_boss: profile.is_mega_boss,
            attacking: attack.is_some(),
            health: profile.health,
        });
    }

    let mut power_ups: Vec<(Entity, Position, Hitbox, i32)> = Vec::new();
    for (entity, (power_up, pos, hitbox)) in
        world.query::<(&PowerUp, &Position, &Hitbox)>().iter()
    {
        power_ups.push((entity, *pos, *hitbox, power_up.health));
    }

    let player = world
        .query::<(&PlayerShip, &Position, &Hitbox, &PlayerStatus)>()
        .iter()
        .next()
        .map(|(entity, (_ship, pos, hitbox, status))| {
            (
                entity,
                *pos,
                *hitbox,
                status.invulnerable(now_ms),
                status.shielded(now_ms),
            )
        });

    let mut spent_player_bullets: HashSet<Entity> = HashSet::new();
    let mut spent_enemy_bullets: HashSet<Entity> = HashSet::new();
    let mut despawn: Vec<Entity> = Vec::new();

    // --- Player bullets vs enemies. ---

    let mut mega_hits = 0;
    let mut parked: HashSet<Entity> = HashSet::new();
    for bullet in &player_bullets {
        if spent_player_bullets.contains(&bullet.entity) {
            continue;
        }
        for enemy in &mut enemies {
            if enemy.health <= 0 && !enemy.is_mega_boss {
                continue;
            }
            if !rects_overlap(bullet.position, &bullet.hitbox, enemy.position, &enemy.hitbox) {
                continue;
            }

            spent_player_bullets.insert(bullet.entity);
            stats.hits += 1;

            if enemy.is_mega_boss {
                mega_hits += bullet.damage;
            } else {
                enemy.health -= bullet.damage;
                if enemy.health <= 0 {
                    let base = match enemy.kind {
                        EnemyKind::Boss => BOSS_SCORE,
                        EnemyKind::Escort => ESCORT_SCORE,
                        EnemyKind::Grunt => GRUNT_SCORE,
                    };
                    let awarded = (base as f64
                        * difficulty.settings().score_multiplier
                        * (1.0 + wave as f64 * 0.1))
                        .floor() as u32;
                    *score += awarded;
                    stats.enemies_defeated += 1;
                    events.push(GameEvent::EnemyDestroyed {
                        kind: enemy.kind,
                        x: enemy.position.x,
                        y: enemy.position.y,
                        score: awarded,
                    });
                    parked.insert(enemy.entity);
                    if rng.gen::<f64>() < POWER_UP_DROP_CHANCE {
                        power_ups::spawn(
                            world,
                            rng,
                            enemy.position,
                            canvas_width,
                            canvas_height,
                            events,
                        );
                    }
                }
            }
            break;
        }
    }

    // Write back damage and park the dead, in stable list order.
    for enemy in &enemies {
        if enemy.is_mega_boss {
            continue;
        }
        if let Ok(mut profile) = world.get::<&mut EnemyProfile>(enemy.entity) {
            profile.health = enemy.health;
        }
    }
    for enemy in &enemies {
        if parked.contains(&enemy.entity) {
            park_enemy(world, enemy.entity);
        }
    }

    // Mega-boss damage goes to the pooled boss health; at zero the whole
    // formation is cleared and exactly one power-up drops.
    if mega_hits > 0 {
        boss.current_health -= mega_hits;
        if boss.current_health > 0 {
            events.push(GameEvent::MegaBossDamaged {
                remaining: boss.current_health,
            });
        } else {
            let awarded = MEGA_BOSS_SCORE_PER_CYCLE * (wave / 3);
            *score += awarded;
            events.push(GameEvent::MegaBossDestroyed { score: awarded });

            let boss_position = enemies
                .iter()
                .find(|e| e.is_mega_boss)
                .map(|e| e.position)
                .unwrap_or_default();
            power_ups::spawn(world, rng, boss_position, canvas_width, canvas_height, events);

            let all: Vec<Entity> = world
                .query::<(&Enemy, &Position)>()
                .iter()
                .map(|(entity, _)| entity)
                .collect();
            for entity in all {
                park_enemy(world, entity);
            }
        }
    }

    // --- Bullet vs bullet clashes. ---

    for player_bullet in &player_bullets {
        if spent_player_bullets.contains(&player_bullet.entity) {
            continue;
        }
        for enemy_bullet in &enemy_bullets {
            if spent_enemy_bullets.contains(&enemy_bullet.entity) {
                continue;
            }
            if bullets_clash(
                player_bullet.position,
                &player_bullet.hitbox,
                enemy_bullet.position,
                &enemy_bullet.hitbox,
            ) {
                spent_player_bullets.insert(player_bullet.entity);
                spent_enemy_bullets.insert(enemy_bullet.entity);
                events.push(GameEvent::BulletClash {
                    x: (player_bullet.position.x + enemy_bullet.position.x) / 2.0,
                    y: (player_bullet.position.y + enemy_bullet.position.y) / 2.0,
                });
                break;
            }
        }
    }

    // --- Enemy bullets and charging enemies vs the player. ---

    if let Some((player_entity, player_pos, player_box, invulnerable, shielded)) = player {
        let mut hit_this_tick = false;

        for bullet in &enemy_bullets {
            if spent_enemy_bullets.contains(&bullet.entity) {
                continue;
            }
            if rects_overlap(bullet.position, &bullet.hitbox, player_pos, &player_box) {
                spent_enemy_bullets.insert(bullet.entity);
                if !invulnerable && !hit_this_tick {
                    hit_this_tick = true;
                }
            }
        }

        for enemy in &enemies {
            if parked.contains(&enemy.entity) {
                continue;
            }
            if !(enemy.attacking || enemy.is_mega_boss) {
                continue;
            }
            if rects_overlap(enemy.position, &enemy.hitbox, player_pos, &player_box) {
                if enemy.attacking && !enemy.is_mega_boss {
                    // The charger is spent by the impact either way.
                    park_enemy(world, enemy.entity);
                }
                if !invulnerable && !hit_this_tick {
                    hit_this_tick = true;
                }
            }
        }

        if hit_this_tick && !shielded {
            *lives = lives.saturating_sub(1);
            if let Ok(mut status) = world.get::<&mut PlayerStatus>(player_entity) {
                status.invulnerable_until_ms = now_ms + INVULNERABILITY_MS;
            }
            events.push(GameEvent::PlayerHit { lives_left: *lives });

            if *lives == 0 {
                *phase = GamePhase::GameOver;
                let new_record = high_scores.record(mode, *score);
                events.push(GameEvent::GameOver {
                    score: *score,
                    new_high_score: new_record,
                });
            }
        }
    }

    // --- Player bullets vs power-ups. ---

    for bullet in &player_bullets {
        if spent_player_bullets.contains(&bullet.entity) {
            continue;
        }
        for (power_up_entity, pos, hitbox, health) in &mut power_ups {
            if *health <= 0 {
                continue;
            }
            if rects_overlap(bullet.position, &bullet.hitbox, *pos, hitbox) {
                spent_player_bullets.insert(bullet.entity);
                *health -= 1;
                if *health <= 0 {
                    despawn.push(*power_up_entity);
                    let kind = world
                        .get::<&PowerUp>(*power_up_entity)
                        .map(|p| p.kind)
                        .ok();
                    if let Some(kind) = kind {
                        if let Some((_entity, status)) =
                            world.query_mut::<&mut PlayerStatus>().into_iter().next()
                        {
                            power_ups::apply(kind, status, lives, now_ms, events);
                        }
                    }
                } else if let Ok(mut power_up) = world.get::<&mut PowerUp>(*power_up_entity) {
                    power_up.health = *health;
                }
                break;
            }
        }
    }

    // --- Post-pass: drop every spent bullet and opened power-up. ---
    // Despawn in stable list order so entity slot reuse stays
    // deterministic across runs.

    for bullet in player_bullets.iter() {
        if spent_player_bullets.contains(&bullet.entity) {
            despawn.push(bullet.entity);
        }
    }
    for bullet in enemy_bullets.iter() {
        if spent_enemy_bullets.contains(&bullet.entity) {
            despawn.push(bullet.entity);
        }
    }
    for entity in despawn {
        let _ = world.despawn(entity);
    }
}

/// Retire an enemy: park it off-screen and strip its attack state. It
/// stays in storage until the wave sweep prunes the formation.
fn park_enemy(world: &mut World, entity: Entity) {
    let _ = world.remove_one::<AttackRun>(entity);
    if let Ok(mut pos) = world.get::<&mut Position>(entity) {
        pos.x = DESPAWN_X;
        pos.y = DESPAWN_X;
    }
    if let Ok(mut state) = world.get::<&mut EnemyState>(entity) {
        state.in_position = true;
    }
}
