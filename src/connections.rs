//! Pulsing lines between nodes that sit within one cell of each other.

use macroquad::prelude::{Color, Vec2};
use rayon::prelude::*;

use crate::config::{
    PairMode, LINE_WIDTH, MAX_LINE_ALPHA, PULSE_AMPLITUDE, PULSE_BASE_SPEED, PULSE_SPEED_RANGE,
};
use crate::grid::SpatialGrid;
use crate::node::Node;

/// One line to be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    /// Source node's tint with the computed alpha.
    pub color: Color,
    pub width: f32,
}

/// Line-drawing surface: the segments accumulated for the current frame.
#[derive(Debug, Default)]
pub struct LineBatch {
    segments: Vec<Segment>,
}

impl LineBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Opacity of a line of length `dist` at `time`, never negative.
///
/// A static part fades linearly from `MAX_LINE_ALPHA` to zero at `radius`; a
/// sine pulse is added whose speed grows as the nodes get closer.
pub fn line_alpha(dist: f32, radius: f32, time: f64) -> f32 {
    let closeness = (radius - dist) / radius;
    let base = closeness * MAX_LINE_ALPHA;
    let pulse_speed = PULSE_BASE_SPEED + (1.0 - dist / radius) * PULSE_SPEED_RANGE;
    // phase in f64: at large `time` an f32 product loses the sub-radian part
    let pulse = (time * pulse_speed as f64).sin() as f32 * PULSE_AMPLITUDE;
    (base + pulse).max(0.0)
}

/// Appends a segment for every qualifying (node, neighbor) pair to `batch`.
///
/// The grid must have been rebuilt from `nodes` this frame. Neighbors are
/// scanned per node in parallel; segments land in node order, then in
/// neighbor query order.
pub fn draw(
    batch: &mut LineBatch,
    nodes: &[Node],
    grid: &SpatialGrid,
    time: f64,
    mode: PairMode,
) {
    let radius = grid.cell_size();
    batch
        .segments
        .par_extend(nodes.par_iter().enumerate().flat_map_iter(move |(i, a)| {
            grid.neighbors(a.pos).filter_map(move |j| {
                if i == j || (mode == PairMode::Once && j < i) {
                    return None;
                }
                let b = &nodes[j];
                let dist = a.pos.distance(b.pos);
                if dist >= radius {
                    return None;
                }
                let mut color = a.tag.color();
                color.a = line_alpha(dist, radius, time);
                Some(Segment {
                    from: a.pos,
                    to: b.pos,
                    color,
                    width: LINE_WIDTH,
                })
            })
        }));
}
