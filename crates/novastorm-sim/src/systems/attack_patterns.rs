//! Attack pattern system — advances every attacking enemy along its
//! motion pattern and retires runs that leave the canvas.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use novastorm_core::components::{AttackRun, Enemy, EnemyProfile, EnemyState};
use novastorm_core::constants::DESPAWN_X;
use novastorm_core::types::Position;

use novastorm_attack_ai::patterns::{advance, is_finished, StepContext};

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    now_ms: f64,
    delta: f64,
    player: Position,
    canvas_width: f64,
    canvas_height: f64,
) {
    let mut finished: Vec<Entity> = Vec::new();

    for (entity, (_enemy, profile, pos, attack)) in
        world.query_mut::<(&Enemy, &EnemyProfile, &mut Position, &mut AttackRun)>()
    {
        if profile.is_mega_boss {
            continue;
        }

        // Single-enemy runs re-aim their target lane at the player's live
        // column; formation choreographies keep their assigned slots.
        if !attack.pattern.is_formation() {
            attack.target.x = player.x;
        }

        let ctx = StepContext {
            delta,
            elapsed_ms: now_ms - attack.started_ms,
            player,
            jitter: rng.gen::<f64>() - 0.5,
        };
        *pos = advance(attack, *pos, &ctx);

        if is_finished(*pos, canvas_width, canvas_height) {
            finished.push(entity);
        }
    }

    // A finished run leaves the enemy parked off-screen; it is not scored
    // and no longer interacts with anything.
    for entity in finished {
        let _ = world.remove_one::<AttackRun>(entity);
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.x = DESPAWN_X;
        }
        if let Ok(mut state) = world.get::<&mut EnemyState>(entity) {
            state.in_position = true;
        }
    }
}
