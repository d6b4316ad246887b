//! Formation builder — procedural enemy layouts per wave.
//!
//! Layout placement is pure geometry: for a fixed wave number and canvas
//! size the same slots and kinds come out every time. Randomness only
//! enters at enemy creation (initial shot cooldowns are desynchronized).

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::*;
use novastorm_core::constants::*;
use novastorm_core::enums::{Difficulty, EnemyKind, GameMode};
use novastorm_core::types::Position;

use crate::boss::BossConfig;

/// One slot in a computed layout.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub target: Position,
    pub kind: EnemyKind,
    pub entry_start: Position,
    pub entry_control: Position,
    pub is_mega_boss: bool,
}

/// Whether this wave spawns the mega-boss layout.
pub fn is_boss_wave(wave: u32) -> bool {
    wave % 3 == 0
}

/// Compute the full layout for a wave. Every third wave is the BOSS_WAVE
/// layout; otherwise the wave number indexes the named pattern table.
pub fn layout(wave: u32, canvas_width: f64, canvas_height: f64) -> Vec<Placement> {
    let max_y = canvas_height * FORMATION_MAX_Y_FRACTION;
    let center_x = canvas_width / 2.0;

    if is_boss_wave(wave) {
        return boss_wave(center_x, max_y);
    }

    match wave % 7 {
        0 => arrow(center_x, max_y, canvas_width),
        1 => spiral(center_x, max_y),
        2 => fortress(center_x, max_y, canvas_width),
        3 => diamond(center_x, max_y, canvas_width),
        4 => cross(center_x, max_y),
        5 => wings(center_x, max_y, canvas_width),
        _ => hexagon(center_x, max_y, canvas_width),
    }
}

/// Spawn the formation for a wave into the world. On boss waves the boss
/// configuration is rescaled first so the mega-boss picks up its pooled
/// health.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    mode: GameMode,
    difficulty: Difficulty,
    boss: &mut BossConfig,
    canvas_width: f64,
    canvas_height: f64,
) {
    if is_boss_wave(wave) {
        boss.update_power_scale(wave);
    }

    for placement in layout(wave, canvas_width, canvas_height) {
        create_enemy(
            world,
            rng,
            wave,
            mode,
            difficulty,
            boss,
            placement,
            canvas_width,
            canvas_height,
        );
    }
}

/// Spawn one enemy from its placement, applying the per-wave stat scaling.
#[allow(clippy::too_many_arguments)]
fn create_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    mode: GameMode,
    difficulty: Difficulty,
    boss: &BossConfig,
    placement: Placement,
    canvas_width: f64,
    canvas_height: f64,
) -> hecs::Entity {
    let target = Position::new(
        placement
            .target
            .x
            .clamp(FORMATION_MARGIN, canvas_width - FORMATION_MARGIN),
        placement
            .target
            .y
            .clamp(FORMATION_MARGIN, canvas_height * FORMATION_MAX_Y_FRACTION),
    );

    let mode_s = mode.settings();
    let diff_s = difficulty.settings();
    let wave_mult = mode_s.wave_difficulty;
    let wave_f = wave as f64;

    let power_scale = (1.0 + wave_f * 0.1) * wave_mult;
    let speed_scale = (1.0 + wave_f * 0.05) * wave_mult;
    let health_scale = (1.0 + (wave / 3) as f64 * 0.2) * wave_mult;

    let health = if placement.is_mega_boss {
        boss.max_health
    } else if placement.kind == EnemyKind::Escort {
        (2.0 * health_scale).ceil() as i32
    } else {
        (1.0 * health_scale).ceil() as i32
    };

    let shoot_interval = if placement.is_mega_boss {
        boss.shoot_interval()
    } else {
        (45.0 - wave_f * 2.0).max(20.0)
    };

    let size = if placement.is_mega_boss {
        MEGA_BOSS_SIZE
    } else {
        ENEMY_SIZE
    };

    let profile = EnemyProfile {
        kind: placement.kind,
        is_mega_boss: placement.is_mega_boss,
        health,
        speed: diff_s.enemy_speed * speed_scale * mode_s.enemy_speed_multiplier,
        bullet_speed: (2.0 + wave_f * 0.2) * power_scale,
        bullet_damage: power_scale.ceil() as i32,
    };

    let entity = world.spawn((
        Enemy,
        placement.entry_start,
        FormationSlot { target },
        EntryPath {
            start: placement.entry_start,
            control: placement.entry_control,
            progress: 0.0,
        },
        EnemyState::default(),
        Hitbox::square(size),
        profile,
        ShootTimer {
            // First shots are desynchronized across the formation.
            cooldown: rng.gen_range(60.0..180.0),
            interval: shoot_interval,
        },
    ));

    // Formation bosses cycle a cooldown-gated barrage table once parked.
    if placement.kind == EnemyKind::Boss && !placement.is_mega_boss {
        let _ = world.insert_one(entity, BarrageCycle::default());
    }

    entity
}

/// Entry path swooping in from whichever side of center the slot lies on.
fn side_entry(target: Position, center_x: f64, canvas_width: f64) -> (Position, Position) {
    let start_x = if target.x < center_x {
        -ENTRY_SPAWN_OFFSET
    } else {
        canvas_width + ENTRY_SPAWN_OFFSET
    };
    (
        Position::new(start_x, -ENTRY_SPAWN_OFFSET),
        Position::new(target.x, target.y - ENTRY_CONTROL_LIFT),
    )
}

/// Entry path dropping straight in above the slot.
fn top_entry(target: Position) -> (Position, Position) {
    (
        Position::new(target.x, -ENTRY_SPAWN_OFFSET),
        Position::new(target.x, target.y - ENTRY_CONTROL_LIFT),
    )
}

fn placement(target: Position, kind: EnemyKind, entry: (Position, Position)) -> Placement {
    Placement {
        target,
        kind,
        entry_start: entry.0,
        entry_control: entry.1,
        is_mega_boss: false,
    }
}

/// Arrow head pointing down: one boss at the tip, escorts behind, grunts
/// filling the widening rows.
fn arrow(center_x: f64, max_y: f64, canvas_width: f64) -> Vec<Placement> {
    let start_y = 80.0_f64.min(max_y);
    let spacing = 35.0;
    let mut out = Vec::new();

    for row in 0..4_i32 {
        let width = (row + 1) * 2 - 1;
        for col in 0..width {
            let x = center_x + (col as f64 - width as f64 / 2.0 + 0.5) * spacing;
            let y = start_y + row as f64 * spacing;
            let kind = match row {
                0 => EnemyKind::Boss,
                1 => EnemyKind::Escort,
                _ => EnemyKind::Grunt,
            };
            let target = Position::new(x, y);
            out.push(placement(
                target,
                kind,
                side_entry(target, center_x, canvas_width),
            ));
        }
    }
    out
}

/// Twelve points along an expanding polar spiral; the innermost point is
/// the boss, the next four are escorts.
fn spiral(center_x: f64, max_y: f64) -> Vec<Placement> {
    let start_y = 80.0_f64.min(max_y);
    let count = 12;
    let mut out = Vec::new();

    for i in 0..count {
        let t = i as f64 / count as f64;
        let angle = t * std::f64::consts::PI * 4.0;
        let radius = t * 100.0;
        let target = Position::new(
            center_x + angle.cos() * radius,
            start_y + angle.sin() * radius,
        );
        let kind = if i == 0 {
            EnemyKind::Boss
        } else if i < 5 {
            EnemyKind::Escort
        } else {
            EnemyKind::Grunt
        };
        // Spiral members all swoop in from the top center.
        let entry = (
            Position::new(center_x, -ENTRY_SPAWN_OFFSET),
            Position::new(target.x, target.y - ENTRY_CONTROL_LIFT),
        );
        out.push(placement(target, kind, entry));
    }
    out
}

/// 5x5 ring of grunts with escort corners and a boss in the center.
fn fortress(center_x: f64, max_y: f64, canvas_width: f64) -> Vec<Placement> {
    let start_y = 60.0_f64.min(max_y);
    let spacing = 40.0;
    let mut out = Vec::new();

    for i in -2..=2_i32 {
        for j in -2..=2_i32 {
            if i.abs() == 2 || j.abs() == 2 {
                let target = Position::new(
                    center_x + i as f64 * spacing,
                    start_y + j as f64 * spacing,
                );
                out.push(placement(
                    target,
                    EnemyKind::Grunt,
                    side_entry(target, center_x, canvas_width),
                ));
            }
        }
    }

    for i in [-1.0, 1.0] {
        for j in [-1.0, 1.0] {
            let target = Position::new(center_x + i * spacing, start_y + j * spacing);
            out.push(placement(
                target,
                EnemyKind::Escort,
                side_entry(target, center_x, canvas_width),
            ));
        }
    }

    let boss_slot = Position::new(center_x, start_y);
    out.push(placement(boss_slot, EnemyKind::Boss, top_entry(boss_slot)));
    out
}

/// Diamond: rows of width 1-2-2-1, boss on top.
fn diamond(center_x: f64, max_y: f64, canvas_width: f64) -> Vec<Placement> {
    let start_y = 80.0_f64.min(max_y);
    let spacing = 40.0;
    let mut out = Vec::new();

    for layer in 0..4_i32 {
        let width = if layer < 2 { layer + 1 } else { 4 - layer };
        for i in 0..width {
            let x = center_x + (i as f64 - (width - 1) as f64 / 2.0) * spacing;
            let y = start_y + layer as f64 * spacing;
            let kind = match layer {
                0 => EnemyKind::Boss,
                1 => EnemyKind::Escort,
                _ => EnemyKind::Grunt,
            };
            let target = Position::new(x, y);
            out.push(placement(
                target,
                kind,
                side_entry(target, center_x, canvas_width),
            ));
        }
    }
    out
}

/// Plus sign of nine slots: boss center, escorts adjacent, grunts at the
/// arm tips.
fn cross(center_x: f64, max_y: f64) -> Vec<Placement> {
    let start_y = 80.0_f64.min(max_y);
    let spacing = 35.0;
    let mut out = Vec::new();

    for i in -2..=2_i32 {
        let kind = if i == 0 {
            EnemyKind::Boss
        } else if i.abs() == 1 {
            EnemyKind::Escort
        } else {
            EnemyKind::Grunt
        };
        let target = Position::new(center_x + i as f64 * spacing, start_y);
        out.push(placement(target, kind, top_entry(target)));

        if i != 0 {
            let kind = if i.abs() == 1 {
                EnemyKind::Escort
            } else {
                EnemyKind::Grunt
            };
            let target = Position::new(center_x, start_y + i as f64 * spacing);
            out.push(placement(target, kind, top_entry(target)));
        }
    }
    out
}

/// Center boss with two mirrored wedge wings.
fn wings(center_x: f64, max_y: f64, canvas_width: f64) -> Vec<Placement> {
    let start_y = 80.0_f64.min(max_y);
    let spacing = 35.0;
    let mut out = Vec::new();

    let boss_slot = Position::new(center_x, start_y);
    out.push(placement(boss_slot, EnemyKind::Boss, top_entry(boss_slot)));

    for side in [-1.0, 1.0] {
        for row in 0..3_i32 {
            for col in 1..=(3 - row) {
                let target = Position::new(
                    center_x + col as f64 * spacing * side,
                    start_y + row as f64 * spacing,
                );
                let kind = if row == 0 {
                    EnemyKind::Escort
                } else {
                    EnemyKind::Grunt
                };
                out.push(placement(
                    target,
                    kind,
                    side_entry(target, center_x, canvas_width),
                ));
            }
        }
    }
    out
}

/// Center boss ringed by six points alternating escort/grunt.
fn hexagon(center_x: f64, max_y: f64, canvas_width: f64) -> Vec<Placement> {
    let start_y = 80.0_f64.min(max_y);
    let radius = 60.0;
    let sides = 6;
    let mut out = Vec::new();

    let boss_slot = Position::new(center_x, start_y);
    out.push(placement(boss_slot, EnemyKind::Boss, top_entry(boss_slot)));

    for i in 0..sides {
        let angle = i as f64 / sides as f64 * std::f64::consts::TAU;
        let target = Position::new(
            center_x + angle.cos() * radius,
            start_y + angle.sin() * radius,
        );
        let kind = if i % 2 == 0 {
            EnemyKind::Escort
        } else {
            EnemyKind::Grunt
        };
        out.push(placement(
            target,
            kind,
            side_entry(target, center_x, canvas_width),
        ));
    }
    out
}

/// Single mega-boss at screen-center-top plus four escorts on a circle
/// around it.
fn boss_wave(center_x: f64, max_y: f64) -> Vec<Placement> {
    let start_y = 60.0_f64.min(max_y);
    let mut out = Vec::new();

    let boss_slot = Position::new(center_x, start_y);
    out.push(Placement {
        target: boss_slot,
        kind: EnemyKind::Boss,
        entry_start: Position::new(center_x, -90.0),
        entry_control: Position::new(center_x, start_y / 2.0),
        is_mega_boss: true,
    });

    let escort_count = 4;
    let radius = 60.0;
    for i in 0..escort_count {
        let angle = i as f64 / escort_count as f64 * std::f64::consts::TAU;
        let target = Position::new(
            center_x + angle.cos() * radius,
            start_y + angle.sin() * radius,
        );
        out.push(Placement {
            target,
            kind: EnemyKind::Escort,
            entry_start: Position::new(center_x + angle.cos() * 200.0, -ENTRY_SPAWN_OFFSET),
            entry_control: Position::new(target.x, target.y / 2.0),
            is_mega_boss: false,
        });
    }
    out
}
