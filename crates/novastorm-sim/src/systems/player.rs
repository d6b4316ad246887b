//! Player system — movement from held input and bullet spawning from the
//! fire action. Fire is edge-triggered on the held key; auto-fire repeats
//! on its own interval.

use hecs::World;

use novastorm_core::components::*;
use novastorm_core::constants::*;
use novastorm_core::enums::BulletOwner;
use novastorm_core::state::WaveStats;
use novastorm_core::types::{Position, Velocity};

/// Held state of the logical input actions, updated by `SetInput`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    input: InputState,
    auto_fire: bool,
    fire_was_held: &mut bool,
    last_auto_fire_ms: &mut f64,
    stats: &mut WaveStats,
    canvas_width: f64,
    now_ms: f64,
    delta: f64,
) {
    let mut fire_from: Option<(Position, f64, u32)> = None;

    for (_entity, (_ship, pos, status, hitbox)) in
        world.query_mut::<(&PlayerShip, &mut Position, &PlayerStatus, &Hitbox)>()
    {
        let speed = status.effective_speed(now_ms);
        if input.move_left {
            pos.x -= speed * delta;
        }
        if input.move_right {
            pos.x += speed * delta;
        }
        pos.x = pos.x.clamp(hitbox.width / 2.0, canvas_width - hitbox.width / 2.0);

        let shot_count = if status.double_shot_active(now_ms) {
            (2 + status.permanent_shot_stacks / 3).min(5)
        } else {
            1
        };
        fire_from = Some((*pos, hitbox.width, shot_count));
    }

    let Some((pos, width, shot_count)) = fire_from else {
        return;
    };

    let want_fire =
        input.fire || (auto_fire && now_ms - *last_auto_fire_ms >= AUTO_FIRE_INTERVAL_MS);
    if !want_fire {
        *fire_was_held = false;
        return;
    }
    if *fire_was_held {
        return;
    }
    *fire_was_held = true;
    if auto_fire {
        *last_auto_fire_ms = now_ms;
    }

    if shot_count == 1 {
        spawn_player_bullet(world, Position::new(pos.x, pos.y - PLAYER_HEIGHT / 2.0), 0.0);
    } else {
        for i in 0..shot_count {
            let spread = (i as f64 - (shot_count - 1) as f64 / 2.0) * 0.15;
            let x = pos.x - width / 2.0 + width * (i + 1) as f64 / (shot_count + 1) as f64;
            spawn_player_bullet(world, Position::new(x, pos.y - PLAYER_HEIGHT / 2.0), spread);
        }
    }
    stats.shots_fired += shot_count;
}

/// Player bullets fly upward; `angle` fans multi-shot volleys out.
fn spawn_player_bullet(world: &mut World, position: Position, angle: f64) {
    world.spawn((
        Bullet {
            owner: BulletOwner::Player,
            damage: 1,
            is_tracking: false,
        },
        position,
        Velocity::new(
            angle.sin() * PLAYER_BULLET_SPEED,
            -angle.cos() * PLAYER_BULLET_SPEED,
        ),
        Hitbox {
            width: PLAYER_BULLET_WIDTH,
            height: PLAYER_BULLET_HEIGHT,
        },
        Trail::default(),
    ));
}
