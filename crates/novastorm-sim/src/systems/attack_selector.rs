//! Attack selector — the per-tick decision process that launches single
//! and coordinated formation attacks.
//!
//! Gated by the attack timer, the per-wave attack budget, and the cap on
//! simultaneous attackers. Note the budget counts launch *attempts*: the
//! per-kind probability gate inside a single attack can still reject after
//! the budget was consumed, so real attacks per wave may undershoot the
//! cap. That mirrors the reference behavior and is deliberate.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::{
    AttackRun, Enemy, EnemyProfile, EnemyState,
};
use novastorm_core::constants::*;
use novastorm_core::enums::{AttackPattern, Difficulty, EnemyKind, GameMode};
use novastorm_core::events::GameEvent;
use novastorm_core::state::AttackIndicator;
use novastorm_core::types::{Position, Velocity};

use novastorm_attack_ai::profiles;

use super::wave_progress::WaveBudget;

/// One enemy eligible to start an attack.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    entity: Entity,
    position: Position,
    kind: EnemyKind,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    mode: GameMode,
    difficulty: Difficulty,
    budget: &mut WaveBudget,
    attack_timer: &mut f64,
    indicators: &mut Vec<AttackIndicator>,
    events: &mut Vec<GameEvent>,
    player: Position,
    canvas_width: f64,
    canvas_height: f64,
    now_ms: f64,
    delta: f64,
) {
    let formation_size = world.query_mut::<&Enemy>().into_iter().count();
    if formation_size == 0 {
        return;
    }

    *attack_timer += delta;
    let cooldown = difficulty.settings().attack_cooldown / mode.settings().attack_frequency;
    if *attack_timer < cooldown || !budget.can_attack() {
        return;
    }

    let mut available = Vec::new();
    let mut attacking_count = 0;
    for (entity, (_enemy, profile, state, pos, run)) in world
        .query::<(&Enemy, &EnemyProfile, &EnemyState, &Position, Option<&AttackRun>)>()
        .iter()
    {
        if run.is_some() {
            attacking_count += 1;
            continue;
        }
        if state.in_position && pos.x > OFFSCREEN_X && !profile.is_mega_boss {
            available.push(Candidate {
                entity,
                position: *pos,
                kind: profile.kind,
            });
        }
    }

    if !available.is_empty() && attacking_count < difficulty.settings().max_attackers {
        let formation_chance =
            FORMATION_ATTACK_BASE_CHANCE + wave as f64 * FORMATION_ATTACK_WAVE_BONUS;
        if rng.gen::<f64>() < formation_chance && available.len() >= 2 {
            start_formation_attack(world, rng, &available, player, canvas_width, canvas_height, now_ms, events);
        } else {
            let pick = available[rng.gen_range(0..available.len())];
            start_single_attack(
                world,
                rng,
                pick,
                attacking_count,
                wave,
                mode,
                player,
                canvas_width,
                canvas_height,
                now_ms,
                indicators,
                events,
            );
        }
        budget.note_attack();
    }

    *attack_timer = 0.0;
}

/// Begin a single-enemy attack. The per-kind probability roll can reject;
/// a failed roll is a no-op.
#[allow(clippy::too_many_arguments)]
fn start_single_attack(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    candidate: Candidate,
    attacking_count: usize,
    wave: u32,
    mode: GameMode,
    player: Position,
    canvas_width: f64,
    canvas_height: f64,
    now_ms: f64,
    indicators: &mut Vec<AttackIndicator>,
    events: &mut Vec<GameEvent>,
) {
    let max_attackers = (2 + wave as usize / 2).min(6);
    if attacking_count >= max_attackers {
        return;
    }

    let chance = profiles::attack_chance(candidate.kind, wave) * mode.settings().attack_frequency;
    if rng.gen::<f64>() > chance {
        return;
    }

    let pattern = profiles::roll_pattern(candidate.kind, candidate.position, player, canvas_width, rng);
    let target = Position::new(
        player.x + (rng.gen::<f64>() - 0.5) * SINGLE_ATTACK_TARGET_SPREAD,
        canvas_height + ATTACK_EXIT_MARGIN,
    );
    let speed = 1.2 + rng.gen::<f64>() * 0.8;
    let tracking = rng.gen::<f64>() < 0.6;

    let run = AttackRun {
        pattern,
        progress: 0.0,
        start: candidate.position,
        started_ms: now_ms,
        target,
        max_speed: speed,
        current_speed: 0.0,
        acceleration: 0.05,
        velocity: Velocity::default(),
        friction: 0.95,
        max_velocity: 2.0,
        tracking,
    };

    if let Ok(mut state) = world.get::<&mut EnemyState>(candidate.entity) {
        state.can_shoot = true;
    }
    let _ = world.insert_one(candidate.entity, run);

    indicators.push(AttackIndicator {
        start: candidate.position,
        end: Position::new(target.x, canvas_height - ATTACK_EXIT_MARGIN),
        alpha: 1.0,
    });
    events.push(GameEvent::AttackStarted {
        kind: candidate.kind,
        formation: false,
    });
}

/// Begin a coordinated formation attack: pick 2-4 spatially clustered
/// enemies and choreograph them under a shared pattern.
#[allow(clippy::too_many_arguments)]
fn start_formation_attack(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    available: &[Candidate],
    player: Position,
    canvas_width: f64,
    canvas_height: f64,
    now_ms: f64,
    events: &mut Vec<GameEvent>,
) {
    let group_size = (2 + rng.gen_range(0..3)).min(available.len());

    let center = available[rng.gen_range(0..available.len())];
    let mut selected = vec![center];

    // Prefer enemies clustered around the chosen center.
    for candidate in available {
        if selected.len() >= group_size {
            break;
        }
        if candidate.entity != center.entity
            && (candidate.position.x - center.position.x).abs() < FORMATION_CLUSTER_DX
            && (candidate.position.y - center.position.y).abs() < FORMATION_CLUSTER_DY
        {
            selected.push(*candidate);
        }
    }

    // Fall back to random fill if the neighborhood was too sparse.
    while selected.len() < group_size {
        let remaining: Vec<Candidate> = available
            .iter()
            .filter(|c| selected.iter().all(|s| s.entity != c.entity))
            .copied()
            .collect();
        if remaining.is_empty() {
            break;
        }
        selected.push(remaining[rng.gen_range(0..remaining.len())]);
    }

    let n = selected.len();
    let choreography = rng.gen_range(0..4);

    // PINCER assigns alternating members to the left and right flanks.
    if choreography == 1 {
        let left: Vec<Candidate> = selected.iter().copied().step_by(2).collect();
        let right: Vec<Candidate> = selected.iter().copied().skip(1).step_by(2).collect();
        let left_count = left.len();
        for (index, member) in left.into_iter().chain(right).enumerate() {
            let is_left = index < left_count;
            let target = Position::new(
                if is_left { player.x - 100.0 } else { player.x + 100.0 },
                player.y,
            );
            launch_member(
                world,
                member,
                AttackPattern::Pincer { delay_ms: 0.0 },
                target,
                1.8,
                0.04,
                now_ms,
                events,
            );
        }
        return;
    }

    for (index, member) in selected.iter().enumerate() {
        let (pattern, target, speed, acceleration) = match choreography {
            0 => {
                // Staggered wave across a band centered on the player.
                let spread = 150.0;
                (
                    AttackPattern::Wave {
                        delay_ms: index as f64 * 200.0,
                    },
                    Position::new(
                        player.x + (index as f64 - n as f64 / 2.0) * (spread / n as f64),
                        canvas_height + ATTACK_EXIT_MARGIN,
                    ),
                    1.5 + rng.gen::<f64>() * 0.5,
                    0.03,
                )
            }
            2 => {
                // Bombardment: hold positions spread across 80% of the canvas.
                let spread = canvas_width * 0.8;
                (
                    AttackPattern::Bombardment { delay_ms: 0.0 },
                    Position::new(
                        index as f64 / (n - 1) as f64 * spread + canvas_width * 0.1,
                        canvas_height * 0.3,
                    ),
                    1.2,
                    0.02,
                )
            }
            _ => {
                // Coordinated dive onto a ring of slots around the player.
                let angle = index as f64 / n as f64 * std::f64::consts::TAU;
                (
                    AttackPattern::CoordinatedDive { delay_ms: 0.0 },
                    Position::new(
                        player.x + angle.cos() * 80.0,
                        canvas_height + ATTACK_EXIT_MARGIN,
                    ),
                    1.6,
                    0.035,
                )
            }
        };
        launch_member(world, *member, pattern, target, speed, acceleration, now_ms, events);
    }
}

#[allow(clippy::too_many_arguments)]
fn launch_member(
    world: &mut World,
    member: Candidate,
    pattern: AttackPattern,
    target: Position,
    speed: f64,
    acceleration: f64,
    now_ms: f64,
    events: &mut Vec<GameEvent>,
) {
    let run = AttackRun {
        pattern,
        progress: 0.0,
        start: member.position,
        started_ms: now_ms,
        target,
        max_speed: speed,
        current_speed: 0.0,
        acceleration,
        velocity: Velocity::default(),
        friction: 0.95,
        max_velocity: 2.0,
        tracking: false,
    };

    if let Ok(mut state) = world.get::<&mut EnemyState>(member.entity) {
        state.can_shoot = true;
    }
    let _ = world.insert_one(member.entity, run);
    events.push(GameEvent::AttackStarted {
        kind: member.kind,
        formation: true,
    });
}
