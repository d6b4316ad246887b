//! Cleanup system: removes projectiles and drops that left the canvas.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use novastorm_core::components::{Bullet, PowerUp};
use novastorm_core::types::Position;

pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    canvas_width: f64,
    canvas_height: f64,
) {
    despawn_buffer.clear();

    // Bullets are removed once they exit the canvas on any side.
    for (entity, (_bullet, pos)) in world.query_mut::<(&Bullet, &Position)>() {
        if pos.y < 0.0 || pos.y > canvas_height || pos.x < 0.0 || pos.x > canvas_width {
            despawn_buffer.push(entity);
        }
    }

    // Drops that fall off the bottom are gone.
    for (entity, (_power_up, pos)) in world.query_mut::<(&PowerUp, &Position)>() {
        if pos.y > canvas_height {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
