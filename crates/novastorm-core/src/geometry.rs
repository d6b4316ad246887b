//! Overlap tests for collision resolution.
//!
//! Both operands are center-anchored: `(x, y)` is the box midpoint. The
//! test is symmetric in its arguments.

use crate::components::Hitbox;
use crate::types::Position;

/// Axis-aligned rectangle overlap between two center-anchored boxes.
pub fn rects_overlap(a: Position, a_box: &Hitbox, b: Position, b_box: &Hitbox) -> bool {
    (a.x - b.x).abs() * 2.0 < a_box.width + b_box.width
        && (a.y - b.y).abs() * 2.0 < a_box.height + b_box.height
}

/// Circular clash test for bullet-vs-bullet: centers closer than the sum
/// of half-widths.
pub fn bullets_clash(a: Position, a_box: &Hitbox, b: Position, b_box: &Hitbox) -> bool {
    a.distance_to(&b) < (a_box.width + b_box.width) / 2.0
}
