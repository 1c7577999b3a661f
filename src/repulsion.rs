//! Pointer repulsion: pushes nodes within one cell of the pointer away from it.

use macroquad::prelude::Vec2;

use crate::config::REPULSE_STRENGTH;
use crate::node::Node;

/// Distances at or below this are treated as the pointer sitting on the node.
pub const MIN_DISTANCE: f32 = 1e-6;

/// Adds a radial push to `node.impulse` when `pointer` is within `radius`.
///
/// The push falls off linearly from `REPULSE_STRENGTH` at the pointer to zero
/// at `radius`. A pointer on top of the node has no direction and adds nothing.
pub fn apply(node: &mut Node, pointer: Option<Vec2>, radius: f32) {
    let Some(pointer) = pointer else {
        return;
    };
    let d = node.pos - pointer;
    let dist = d.length();
    if !(dist > MIN_DISTANCE && dist < radius) {
        return;
    }
    let factor = (radius - dist) / radius;
    node.impulse += d / dist * REPULSE_STRENGTH * factor;
}
