//! Uniform bucket grid over the viewport for neighbor queries.
//!
//! The grid is rebuilt from scratch every frame. Buckets hold node indices
//! into the caller's node slice, never the nodes themselves. Nodes that sit
//! outside the viewport are left out of every bucket until they drift back.

use macroquad::prelude::Vec2;

use crate::node::Node;

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f32,
    cols: usize,
    rows: usize,
    buckets: Vec<Vec<usize>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32, width: f32, height: f32) -> Self {
        let mut grid = Self {
            cell_size,
            cols: 0,
            rows: 0,
            buckets: Vec::new(),
        };
        grid.resize(width, height);
        grid
    }

    /// Recomputes `cols`/`rows` for a new viewport and reallocates empty buckets.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.cols = cells_along(width, self.cell_size);
        self.rows = cells_along(height, self.cell_size);
        self.buckets = vec![Vec::new(); self.cols * self.rows];
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Signed cell coordinates of a position; may lie outside the grid.
    pub fn cell_of(&self, pos: Vec2) -> (i64, i64) {
        (
            (pos.x / self.cell_size).floor() as i64,
            (pos.y / self.cell_size).floor() as i64,
        )
    }

    fn bucket_index(&self, col: i64, row: i64) -> Option<usize> {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    /// Clears every bucket, then files each node under the cell it currently occupies.
    pub fn rebuild(&mut self, nodes: &[Node]) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        for (i, node) in nodes.iter().enumerate() {
            let (col, row) = self.cell_of(node.pos);
            if let Some(idx) = self.bucket_index(col, row) {
                self.buckets[idx].push(i);
            }
        }
    }

    pub fn bucket(&self, col: usize, row: usize) -> &[usize] {
        &self.buckets[row * self.cols + col]
    }

    pub fn buckets(&self) -> impl Iterator<Item = &[usize]> {
        self.buckets.iter().map(Vec::as_slice)
    }

    /// Indices found in the 3x3 block of buckets around `pos`.
    ///
    /// The block is anchored on the position's own cell even when that cell
    /// is off-grid, so a node just outside the viewport still sees the edge
    /// buckets next to it. The result includes the querying node itself
    /// when it is bucketed.
    pub fn neighbors(&self, pos: Vec2) -> impl Iterator<Item = usize> + '_ {
        let (col, row) = self.cell_of(pos);
        (-1..=1)
            .flat_map(move |dy| (-1..=1).map(move |dx| (col + dx, row + dy)))
            .filter_map(move |(c, r)| self.bucket_index(c, r))
            .flat_map(move |idx| self.buckets[idx].iter().copied())
    }
}

fn cells_along(extent: f32, cell_size: f32) -> usize {
    if extent <= 0.0 || cell_size <= 0.0 {
        return 0;
    }
    (extent / cell_size).ceil() as usize
}
