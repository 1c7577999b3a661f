//! Per-tick motion update for nodes.

use macroquad::prelude::Vec2;

use crate::config::{DECAY, SMOOTH, TIME_SCALE};
use crate::node::Node;
use crate::repulsion;

/// Bounds and pointer state shared by every node in one integration pass.
#[derive(Debug, Clone, Copy)]
pub struct StepContext {
    pub width: f32,
    pub height: f32,
    pub pointer: Option<Vec2>,
    /// Repulsion radius, same as the grid cell size.
    pub radius: f32,
}

/// Advances one node by `delta` frame units.
///
/// Order per node: smoothed move toward `pos + (vel + impulse) * delta / TIME_SCALE`,
/// impulse decay (once per tick, not scaled by `delta`), pointer repulsion,
/// then velocity reflection at the viewport edges. Reflection only flips the
/// velocity sign; the position is not clamped.
pub fn step(node: &mut Node, delta: f32, ctx: &StepContext) {
    let speed = delta / TIME_SCALE;
    let target = node.pos + (node.vel + node.impulse) * speed;
    node.pos += (target - node.pos) * SMOOTH;

    node.impulse *= DECAY;

    repulsion::apply(node, ctx.pointer, ctx.radius);

    if node.pos.x < 0.0 || node.pos.x > ctx.width {
        node.vel.x = -node.vel.x;
    }
    if node.pos.y < 0.0 || node.pos.y > ctx.height {
        node.vel.y = -node.vel.y;
    }
}

pub fn step_all(nodes: &mut [Node], delta: f32, ctx: &StepContext) {
    for node in nodes.iter_mut() {
        step(node, delta, ctx);
    }
}
