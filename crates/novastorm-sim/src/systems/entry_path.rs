//! Entry-path follower — advances enemies along their Bézier entry curves
//! into formation, then applies the idle sway while they hold position.

use hecs::World;

use novastorm_core::components::{AttackRun, EnemyState, EntryPath, FormationSlot};
use novastorm_core::constants::{
    IDLE_SWAY_AMPLITUDE, IDLE_SWAY_PERIOD_MS, OFFSCREEN_X, PATH_PROGRESS_PER_STEP,
};
use novastorm_core::types::Position;

/// Quadratic Bézier: `P(t) = (1-t)^2 P0 + 2(1-t)t P1 + t^2 P2`.
fn bezier(t: f64, p0: Position, p1: Position, p2: Position) -> Position {
    let u = 1.0 - t;
    Position::new(
        u * u * p0.x + 2.0 * u * t * p1.x + t * t * p2.x,
        u * u * p0.y + 2.0 * u * t * p1.y + t * t * p2.y,
    )
}

/// Advance every enemy that is not yet in position along its entry path;
/// sway everyone who is parked and not attacking.
pub fn run(world: &mut World, now_ms: f64, delta: f64) {
    let sway = (now_ms / IDLE_SWAY_PERIOD_MS).sin() * IDLE_SWAY_AMPLITUDE;

    for (_entity, (pos, slot, path, state, attack)) in world.query_mut::<(
        &mut Position,
        &FormationSlot,
        &mut EntryPath,
        &mut EnemyState,
        Option<&AttackRun>,
    )>() {
        // Destroyed enemies stay parked off-screen until the wave sweep.
        if state.in_position && pos.x <= OFFSCREEN_X {
            continue;
        }

        if !state.in_position {
            path.progress = (path.progress + PATH_PROGRESS_PER_STEP * delta).min(1.0);
            *pos = bezier(path.progress, path.start, path.control, slot.target);
            if path.progress >= 1.0 {
                state.in_position = true;
            }
        } else if attack.is_none() {
            pos.x = slot.target.x + sway;
        }
    }
}
