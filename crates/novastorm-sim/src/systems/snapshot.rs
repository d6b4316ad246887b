//! Snapshot system: queries the ECS world and builds a complete
//! GameSnapshot. Read-only — it never modifies the world.

use hecs::World;

use novastorm_core::components::*;
use novastorm_core::constants::{MAX_ATTACKS_PER_WAVE, MAX_SHOTS_PER_WAVE, WAVE_CONFIG_CAP};
use novastorm_core::enums::{BulletOwner, GameMode, GamePhase};
use novastorm_core::events::GameEvent;
use novastorm_core::state::*;
use novastorm_core::types::{Position, SimTime, Velocity};

use crate::boss::BossConfig;
use crate::formation;
use crate::systems::wave_progress::WaveBudget;
use crate::waves;

/// Build a complete snapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    mode: GameMode,
    wave: u32,
    score: u32,
    lives: u32,
    high_score: u32,
    auto_fire: bool,
    boss: &BossConfig,
    budget: &WaveBudget,
    indicators: &[AttackIndicator],
    stats: &WaveStats,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        mode,
        wave,
        score,
        lives,
        high_score,
        player: build_player(world, time.now_ms, auto_fire),
        enemies: build_enemies(world),
        player_bullets: build_bullets(world, BulletOwner::Player),
        enemy_bullets: build_bullets(world, BulletOwner::Enemy),
        power_ups: build_power_ups(world),
        attack_indicators: indicators.to_vec(),
        boss: build_boss(boss, wave),
        budget: BudgetView {
            attacks_launched: budget.attacks_launched,
            max_attacks: MAX_ATTACKS_PER_WAVE,
            shots_fired: budget.shots_fired,
            max_shots: MAX_SHOTS_PER_WAVE,
        },
        // The HUD samples the config curve capped at its display plateau.
        wave_config: waves::config_for(wave.min(WAVE_CONFIG_CAP)),
        wave_stats: *stats,
        events,
    }
}

fn build_player(world: &World, now_ms: f64, auto_fire: bool) -> PlayerView {
    world
        .query::<(&PlayerShip, &Position, &Hitbox, &PlayerStatus)>()
        .iter()
        .next()
        .map(|(_, (_ship, pos, hitbox, status))| PlayerView {
            position: *pos,
            width: hitbox.width,
            height: hitbox.height,
            invulnerable: status.invulnerable(now_ms),
            shielded: status.shielded(now_ms),
            double_shot: status.double_shot_active(now_ms),
            auto_fire,
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(
            &Enemy,
            &EnemyProfile,
            &EnemyState,
            &Position,
            &Hitbox,
            Option<&AttackRun>,
        )>()
        .iter()
        .map(|(_, (_enemy, profile, state, pos, hitbox, attack))| EnemyView {
            kind: profile.kind,
            is_mega_boss: profile.is_mega_boss,
            position: *pos,
            width: hitbox.width,
            height: hitbox.height,
            health: profile.health,
            in_position: state.in_position,
            attacking: attack.is_some(),
            pattern: attack.map(|run| run.pattern),
        })
        .collect()
}

fn build_bullets(world: &World, owner: BulletOwner) -> Vec<BulletView> {
    world
        .query::<(&Bullet, &Position, &Velocity, &Hitbox, &Trail)>()
        .iter()
        .filter(|(_, (bullet, ..))| bullet.owner == owner)
        .map(|(_, (bullet, pos, vel, hitbox, trail))| BulletView {
            position: *pos,
            velocity: *vel,
            width: hitbox.width,
            height: hitbox.height,
            is_tracking: bullet.is_tracking,
            trail: trail.points.clone(),
        })
        .collect()
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    world
        .query::<(&PowerUp, &Position)>()
        .iter()
        .map(|(_, (power_up, pos))| PowerUpView {
            kind: power_up.kind,
            position: *pos,
            health: power_up.health,
        })
        .collect()
}

fn build_boss(boss: &BossConfig, wave: u32) -> Option<BossView> {
    if formation::is_boss_wave(wave) && boss.max_health > 0 {
        Some(BossView {
            current_health: boss.current_health.max(0),
            max_health: boss.max_health,
            power_scale: boss.power_scale,
        })
    } else {
        None
    }
}
