//! Attack motion patterns.
//!
//! One function per named pattern computes the attacker's next position
//! from its run state. Every incremental term is multiplied by the
//! normalized frame-time `delta`, so trajectories are invariant to the
//! simulation step size.

use glam::DVec2;

use novastorm_core::components::AttackRun;
use novastorm_core::constants::{ATTACK_EXIT_MARGIN, PATH_PROGRESS_PER_STEP};
use novastorm_core::enums::AttackPattern;
use novastorm_core::types::Position;

/// Per-tick inputs shared by all patterns.
pub struct StepContext {
    /// Normalized frame-time multiplier (1.0 = one 60 Hz step).
    pub delta: f64,
    /// Milliseconds since the attack run started.
    pub elapsed_ms: f64,
    /// Player ship position this tick.
    pub player: Position,
    /// Uniform sample in [-0.5, 0.5) for patterns with per-tick jitter.
    pub jitter: f64,
}

/// Advance one attack run by one tick. Mutates the run's kinematic state
/// (ramped speed, momentum, shrinking orbit radii) and returns the new
/// position.
pub fn advance(run: &mut AttackRun, position: Position, ctx: &StepContext) -> Position {
    // Smooth acceleration up to the pattern's nominal speed.
    if run.current_speed < run.max_speed {
        run.current_speed = (run.current_speed + run.acceleration * ctx.delta).min(run.max_speed);
    }
    run.progress += PATH_PROGRESS_PER_STEP * ctx.delta;

    let speed = run.current_speed;
    match run.pattern {
        AttackPattern::Dive => dive(run, position, speed, ctx),
        AttackPattern::Sweep { direction } => sweep(position, direction, speed, ctx),
        AttackPattern::Zigzag {
            amplitude,
            frequency,
        } => zigzag(run, position, amplitude, frequency, speed, ctx),
        AttackPattern::Spiral {
            radius,
            angular_speed,
        } => spiral(run, position, radius, angular_speed, ctx),
        AttackPattern::SpiralDive {
            radius,
            angular_speed,
        } => spiral_dive(run, position, radius, angular_speed, ctx),
        AttackPattern::Strafe { amplitude } => strafe(run, position, amplitude, speed, ctx),
        AttackPattern::StrafeRun { amplitude } => strafe_run(run, position, amplitude, speed, ctx),
        AttackPattern::SweepBombard { direction } => sweep_bombard(position, direction, speed, ctx),
        AttackPattern::CircleStrafe { .. } => circle_strafe(run, position, ctx),
        AttackPattern::Wave { delay_ms } => formation_homing(run, position, speed, ctx, delay_ms, true),
        AttackPattern::Pincer { delay_ms } => {
            formation_homing(run, position, speed, ctx, delay_ms, false)
        }
        AttackPattern::Bombardment { delay_ms } => bombardment(run, position, speed, ctx, delay_ms),
        AttackPattern::CoordinatedDive { delay_ms } => {
            formation_homing(run, position, speed, ctx, delay_ms, false)
        }
    }
}

/// Terminal condition for any attacking enemy: left the canvas through the
/// bottom or either side.
pub fn is_finished(position: Position, canvas_width: f64, canvas_height: f64) -> bool {
    position.y > canvas_height + ATTACK_EXIT_MARGIN
        || position.x < -ATTACK_EXIT_MARGIN
        || position.x > canvas_width + ATTACK_EXIT_MARGIN
}

/// Force-directed homing dive. Velocity integrates toward the desired
/// vector, decays by friction, and is clamped to the run's max velocity.
fn dive(run: &mut AttackRun, mut pos: Position, speed: f64, ctx: &StepContext) -> Position {
    let to_target = DVec2::new(run.target.x - pos.x, run.target.y - pos.y);
    let distance = to_target.length();
    if distance <= 5.0 {
        // Close enough that a unit vector would be unstable; coast.
        return pos;
    }

    let desired = to_target / distance * speed;
    let curve = (run.progress * 2.0).sin() * 0.2;
    let force_x = (desired.x + curve - run.velocity.x) * 0.1;
    let force_y = (desired.y - run.velocity.y) * 0.1;

    run.velocity.x += force_x * ctx.delta;
    run.velocity.y += force_y * ctx.delta;

    let friction = run.friction.powf(ctx.delta);
    run.velocity.x *= friction;
    run.velocity.y *= friction;

    let current = run.velocity.speed();
    if current > run.max_velocity {
        run.velocity.x = run.velocity.x / current * run.max_velocity;
        run.velocity.y = run.velocity.y / current * run.max_velocity;
    }

    pos.x += run.velocity.x * ctx.delta;
    pos.y += run.velocity.y * ctx.delta;
    pos
}

/// Horizontal drift toward `direction` with slow descent and a gentle
/// vertical wobble.
fn sweep(mut pos: Position, direction: f64, speed: f64, ctx: &StepContext) -> Position {
    pos.x += direction * speed * 0.6 * ctx.delta;
    pos.y += speed * 0.2 * ctx.delta;
    pos.y += (ctx.elapsed_ms * 0.005).sin() * 1.5 * ctx.delta;
    pos
}

fn zigzag(
    run: &AttackRun,
    mut pos: Position,
    amplitude: f64,
    frequency: f64,
    speed: f64,
    ctx: &StepContext,
) -> Position {
    pos.y += speed * 0.5 * ctx.delta;

    let offset = (ctx.elapsed_ms * frequency * 0.5).sin() * amplitude * 0.7;
    let target_x = run.start.x + offset;
    pos.x += (target_x - pos.x) * 0.1 * ctx.delta;
    pos
}

/// Eases toward a point orbiting the attack start with shrinking radius
/// and a constant downward drift.
fn spiral(
    run: &AttackRun,
    mut pos: Position,
    radius: f64,
    angular_speed: f64,
    ctx: &StepContext,
) -> Position {
    let angle = ctx.elapsed_ms * angular_speed * 0.5;
    let r = radius * 0.8 * (1.0 - run.progress * 0.3);

    let target_x = run.start.x + angle.cos() * r;
    let target_y = run.start.y + angle.sin() * r + ctx.elapsed_ms * 0.05;

    pos.x += (target_x - pos.x) * 0.08 * ctx.delta;
    pos.y += (target_y - pos.y) * 0.08 * ctx.delta;
    pos
}

/// Spiral with a faster descent and a weak constant nudge toward the
/// player while the run is tracking.
fn spiral_dive(
    run: &AttackRun,
    mut pos: Position,
    radius: f64,
    angular_speed: f64,
    ctx: &StepContext,
) -> Position {
    let angle = ctx.elapsed_ms * angular_speed * 0.4;
    let r = radius * 0.7 * (1.0 - run.progress * 0.2);

    let target_x = run.start.x + angle.cos() * r;
    let target_y = run.start.y + angle.sin() * r + ctx.elapsed_ms * 0.08;

    pos.x += (target_x - pos.x) * 0.06 * ctx.delta;
    pos.y += (target_y - pos.y) * 0.06 * ctx.delta;

    if run.tracking {
        pos.x += (ctx.player.x - pos.x) * 0.02 * ctx.delta;
    }
    pos
}

fn strafe(
    run: &AttackRun,
    mut pos: Position,
    amplitude: f64,
    speed: f64,
    ctx: &StepContext,
) -> Position {
    pos.y += speed * 0.3 * ctx.delta;

    let offset = (ctx.elapsed_ms * 0.008).sin() * amplitude * 0.6;
    let target_x = run.start.x + offset;
    pos.x += (target_x - pos.x) * 0.12 * ctx.delta;
    pos
}

/// Strafe with a faster run-in and small per-tick randomness.
fn strafe_run(
    run: &AttackRun,
    mut pos: Position,
    amplitude: f64,
    speed: f64,
    ctx: &StepContext,
) -> Position {
    pos.y += speed * 0.8 * 0.6 * ctx.delta;

    let offset = (ctx.elapsed_ms * 0.015).sin() * amplitude * 0.7;
    let target_x = run.start.x + offset;
    pos.x += (target_x - pos.x) * 0.15 * ctx.delta;
    pos.x += ctx.jitter * 0.8 * ctx.delta;
    pos
}

/// Continuous horizontal sweep; descent only while the duty-cycle sine is
/// above threshold, producing pause-move-pause bombardment runs.
fn sweep_bombard(mut pos: Position, direction: f64, speed: f64, ctx: &StepContext) -> Position {
    pos.x += direction * speed * 0.4 * ctx.delta;
    if (ctx.elapsed_ms * 0.015).sin() > 0.2 {
        pos.y += speed * 0.5 * ctx.delta;
    }
    pos
}

/// Eases toward a point orbiting the player, tightening the circle each
/// tick down to a floor radius.
fn circle_strafe(run: &mut AttackRun, mut pos: Position, ctx: &StepContext) -> Position {
    let AttackPattern::CircleStrafe {
        radius,
        angular_speed,
        center,
    } = &mut run.pattern
    else {
        return pos;
    };

    let angle = ctx.elapsed_ms * *angular_speed * 0.6;
    let target_x = center.x + angle.cos() * *radius;
    let target_y = center.y + angle.sin() * *radius;

    pos.x += (target_x - pos.x) * 0.08 * ctx.delta;
    pos.y += (target_y - pos.y) * 0.08 * ctx.delta;

    *radius = (*radius - 0.2 * ctx.delta).max(40.0);
    pos
}

/// Straight-line homing toward the assigned target, shared by the
/// formation choreographies. No movement until the stagger delay elapses.
fn formation_homing(
    run: &AttackRun,
    mut pos: Position,
    speed: f64,
    ctx: &StepContext,
    delay_ms: f64,
    wobble: bool,
) -> Position {
    if ctx.elapsed_ms < delay_ms {
        return pos;
    }

    let to_target = DVec2::new(run.target.x - pos.x, run.target.y - pos.y);
    let distance = to_target.length();
    if distance > speed {
        let dir = to_target / distance;
        pos.x += dir.x * speed * ctx.delta;
        pos.y += dir.y * speed * ctx.delta;
        if wobble {
            pos.y += (ctx.elapsed_ms * 0.02).sin() * 3.0 * ctx.delta;
        }
    }
    pos
}

/// Move to the hold position, then hover with idle jitter instead of
/// stopping dead.
fn bombardment(
    run: &AttackRun,
    mut pos: Position,
    speed: f64,
    ctx: &StepContext,
    delay_ms: f64,
) -> Position {
    if ctx.elapsed_ms < delay_ms {
        return pos;
    }

    let to_target = DVec2::new(run.target.x - pos.x, run.target.y - pos.y);
    let distance = to_target.length();
    if distance > speed {
        let dir = to_target / distance;
        pos.x += dir.x * speed * ctx.delta;
        pos.y += dir.y * speed * ctx.delta;
    } else {
        pos.x += (ctx.elapsed_ms * 0.01).sin() * ctx.delta;
        pos.y += (ctx.elapsed_ms * 0.015).cos() * 0.5 * ctx.delta;
    }
    pos
}
