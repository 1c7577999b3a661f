//! Particle records and their initial population.

use macroquad::prelude::{Color, Vec2};
use rand::Rng;

use crate::config::{AREA_PER_NODE, DENSITY_FACTOR, MAX_SPEED, PALETTE};

/// One of the three node tints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    A,
    B,
    C,
}

impl ColorTag {
    /// Tags cycle over creation order.
    pub fn for_index(i: usize) -> Self {
        match i % 3 {
            0 => ColorTag::A,
            1 => ColorTag::B,
            _ => ColorTag::C,
        }
    }

    pub fn hex(self) -> u32 {
        match self {
            ColorTag::A => PALETTE[0],
            ColorTag::B => PALETTE[1],
            ColorTag::C => PALETTE[2],
        }
    }

    /// Opaque color for this tag; callers set alpha per draw.
    pub fn color(self) -> Color {
        Color::from_hex(self.hex())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Transient push from the pointer, decays every tick.
    pub impulse: Vec2,
    pub tag: ColorTag,
}

impl Node {
    pub fn new(pos: Vec2, vel: Vec2, tag: ColorTag) -> Self {
        Self {
            pos,
            vel,
            impulse: Vec2::ZERO,
            tag,
        }
    }
}

/// Number of nodes for a viewport: `floor(w * h / 15000 * 1.3)`.
pub fn node_count(width: f32, height: f32) -> usize {
    let area = width.max(0.0) as f64 * height.max(0.0) as f64;
    (area / AREA_PER_NODE * DENSITY_FACTOR).floor() as usize
}

/// Scatters `node_count(width, height)` nodes uniformly over the viewport
/// with small random velocities.
pub fn populate<R: Rng>(rng: &mut R, width: f32, height: f32) -> Vec<Node> {
    let count = node_count(width, height);
    (0..count)
        .map(|i| {
            let pos = Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height);
            let vel = Vec2::new(
                (rng.random::<f32>() - 0.5) * 2.0 * MAX_SPEED,
                (rng.random::<f32>() - 0.5) * 2.0 * MAX_SPEED,
            );
            Node::new(pos, vel, ColorTag::for_index(i))
        })
        .collect()
}
