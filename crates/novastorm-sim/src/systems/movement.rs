//! Kinematic integration for projectiles and drops.
//!
//! Bullets integrate `position += velocity * delta` and record their
//! trails; ring bullets grow their expansion metadata; power-ups drift
//! down the screen.

use hecs::World;

use novastorm_core::components::{Bullet, PowerUp, RingBullet, Trail};
use novastorm_core::constants::{ENEMY_TRAIL_LEN, PLAYER_TRAIL_LEN, POWER_UP_FALL_SPEED};
use novastorm_core::enums::BulletOwner;
use novastorm_core::types::{Position, Velocity};

pub fn run(world: &mut World, delta: f64) {
    for (_entity, (bullet, pos, vel, trail)) in
        world.query_mut::<(&Bullet, &mut Position, &Velocity, &mut Trail)>()
    {
        pos.x += vel.x * delta;
        pos.y += vel.y * delta;

        let max_len = match bullet.owner {
            BulletOwner::Player => PLAYER_TRAIL_LEN,
            BulletOwner::Enemy => ENEMY_TRAIL_LEN,
        };
        trail.push(*pos, max_len);
    }

    for (_entity, ring) in world.query_mut::<&mut RingBullet>() {
        ring.expansion_radius += ring.expansion_speed * delta;
    }

    for (_entity, (_power_up, pos)) in world.query_mut::<(&PowerUp, &mut Position)>() {
        pos.y += POWER_UP_FALL_SPEED * delta;
    }
}
