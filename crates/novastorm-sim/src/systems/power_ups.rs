//! Power-up drops and effect lifecycle.
//!
//! Effects are applied when a drop is shot open. Timed effects carry an
//! absolute expiry deadline checked once per tick here — no scheduled
//! callbacks — and permanent stacks suppress the matching timed expiry.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::{Hitbox, PlayerStatus, PowerUp};
use novastorm_core::constants::*;
use novastorm_core::enums::PowerUpKind;
use novastorm_core::events::GameEvent;
use novastorm_core::types::Position;

const DROP_KINDS: [PowerUpKind; 6] = [
    PowerUpKind::DoubleShot,
    PowerUpKind::SpeedUp,
    PowerUpKind::Shield,
    PowerUpKind::ExtraLife,
    PowerUpKind::PermanentSpeed,
    PowerUpKind::PermanentShot,
];

/// Spawn a random drop near a position, clamped onto the playfield.
pub fn spawn(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    at: Position,
    canvas_width: f64,
    canvas_height: f64,
    events: &mut Vec<GameEvent>,
) {
    let kind = DROP_KINDS[rng.gen_range(0..DROP_KINDS.len())];
    let position = Position::new(
        at.x.clamp(20.0, canvas_width - 40.0),
        at.y.clamp(20.0, canvas_height - 100.0),
    );
    world.spawn((
        PowerUp {
            kind,
            health: POWER_UP_HEALTH,
        },
        position,
        Hitbox::square(POWER_UP_SIZE),
    ));
    events.push(GameEvent::PowerUpSpawned {
        kind,
        x: position.x,
        y: position.y,
    });
}

/// Apply an opened power-up's effect to the player.
pub fn apply(
    kind: PowerUpKind,
    status: &mut PlayerStatus,
    lives: &mut u32,
    now_ms: f64,
    events: &mut Vec<GameEvent>,
) {
    match kind {
        PowerUpKind::DoubleShot => {
            if status.permanent_shot_stacks == 0 {
                status.double_shot_until_ms = now_ms + DOUBLE_SHOT_DURATION_MS;
            }
        }
        PowerUpKind::SpeedUp => {
            status.speed_boost_until_ms = now_ms + SPEED_UP_DURATION_MS;
        }
        PowerUpKind::Shield => {
            status.shield_until_ms = now_ms + SHIELD_DURATION_MS;
        }
        PowerUpKind::ExtraLife => {
            *lives += 1;
        }
        PowerUpKind::PermanentSpeed => {
            status.permanent_speed_stacks += 1;
        }
        PowerUpKind::PermanentShot => {
            status.permanent_shot_stacks += 1;
        }
    }
    events.push(GameEvent::PowerUpCollected { kind });
}

/// Expiry sweep: clear timed effects whose deadline has passed, emitting
/// one expiry event per effect. Permanent stacks keep the matching flag
/// alive without a deadline.
pub fn sweep(world: &mut World, now_ms: f64, events: &mut Vec<GameEvent>) {
    for (_entity, status) in world.query_mut::<&mut PlayerStatus>() {
        if status.double_shot_until_ms != 0.0 && now_ms >= status.double_shot_until_ms {
            status.double_shot_until_ms = 0.0;
            if status.permanent_shot_stacks == 0 {
                events.push(GameEvent::PowerUpExpired {
                    kind: PowerUpKind::DoubleShot,
                });
            }
        }
        if status.speed_boost_until_ms != 0.0 && now_ms >= status.speed_boost_until_ms {
            status.speed_boost_until_ms = 0.0;
            events.push(GameEvent::PowerUpExpired {
                kind: PowerUpKind::SpeedUp,
            });
        }
        if status.shield_until_ms != 0.0 && now_ms >= status.shield_until_ms {
            status.shield_until_ms = 0.0;
            events.push(GameEvent::PowerUpExpired {
                kind: PowerUpKind::Shield,
            });
        }
    }
}
