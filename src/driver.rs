//! Frame driver and the simulation state it owns.

use macroquad::prelude::Vec2;
use rand::Rng;
use tracing::{debug, info, trace, warn};

use crate::clock::FrameClock;
use crate::config::{PairMode, CELL};
use crate::connections::{self, LineBatch};
use crate::grid::SpatialGrid;
use crate::input::PointerEvent;
use crate::integrator::{self, StepContext};
use crate::node::{self, Node};

/// Everything that changes from frame to frame.
#[derive(Debug)]
pub struct Simulation {
    nodes: Vec<Node>,
    grid: SpatialGrid,
    pointer: Option<Vec2>,
    clock: FrameClock,
    lines: LineBatch,
    width: f32,
    height: f32,
    pair_mode: PairMode,
}

impl Simulation {
    pub fn new(nodes: Vec<Node>, width: f32, height: f32, pair_mode: PairMode) -> Self {
        Self {
            nodes,
            grid: SpatialGrid::new(CELL, width, height),
            pointer: None,
            clock: FrameClock::new(),
            lines: LineBatch::new(),
            width,
            height,
            pair_mode,
        }
    }

    /// Builds a simulation with a freshly scattered node population.
    pub fn populate<R: Rng>(
        rng: &mut R,
        width: f32,
        height: f32,
        pair_mode: PairMode,
    ) -> Self {
        Self::new(node::populate(rng, width, height), width, height, pair_mode)
    }

    /// Runs one frame: grid rebuild, connection pass on the pre-move
    /// positions, then integration. Returns the lines to draw.
    pub fn tick(&mut self, delta: f32) -> &LineBatch {
        let delta = self.clock.tick(delta);

        self.lines.clear();
        self.grid.rebuild(&self.nodes);
        connections::draw(
            &mut self.lines,
            &self.nodes,
            &self.grid,
            self.clock.global_time(),
            self.pair_mode,
        );

        let ctx = StepContext {
            width: self.width,
            height: self.height,
            pointer: self.pointer,
            radius: self.grid.cell_size(),
        };
        integrator::step_all(&mut self.nodes, delta, &ctx);

        trace!(
            frame = self.clock.frame(),
            segments = self.lines.len(),
            "frame simulated"
        );
        &self.lines
    }

    /// New viewport bounds. Nodes are neither moved nor recounted.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.grid.resize(width, height);
        debug!(
            width,
            height,
            cols = self.grid.cols(),
            rows = self.grid.rows(),
            "viewport resized"
        );
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved(pos) => {
                if self.pointer.is_none() {
                    debug!(x = pos.x, y = pos.y, "pointer entered");
                }
                self.pointer = Some(pos);
            }
            PointerEvent::Left => {
                debug!("pointer left");
                self.pointer = None;
            }
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub fn lines(&self) -> &LineBatch {
        &self.lines
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn global_time(&self) -> f64 {
        self.clock.global_time()
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

enum Phase {
    Uninitialized,
    Running(Simulation),
}

/// Owns the simulation once it has been populated and forwards window events to it.
pub struct FrameDriver {
    phase: Phase,
    pair_mode: PairMode,
}

impl FrameDriver {
    pub fn new(pair_mode: PairMode) -> Self {
        Self {
            phase: Phase::Uninitialized,
            pair_mode,
        }
    }

    /// Populates the nodes for the initial viewport and starts running.
    /// Calling it again once running does nothing.
    pub fn start<R: Rng>(&mut self, rng: &mut R, width: f32, height: f32) {
        if let Phase::Running(_) = self.phase {
            return;
        }
        if width <= 0.0 || height <= 0.0 {
            warn!(width, height, "starting with an empty viewport, no nodes will be created");
        }
        let sim = Simulation::populate(rng, width, height, self.pair_mode);
        info!(
            nodes = sim.nodes().len(),
            cols = sim.grid().cols(),
            rows = sim.grid().rows(),
            "network initialized"
        );
        self.phase = Phase::Running(sim);
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        match &self.phase {
            Phase::Running(sim) => Some(sim),
            Phase::Uninitialized => None,
        }
    }

    /// Advances one frame. Before `start` there is nothing to simulate.
    pub fn frame(&mut self, delta: f32) -> Option<&Simulation> {
        match &mut self.phase {
            Phase::Running(sim) => {
                sim.tick(delta);
                Some(&*sim)
            }
            Phase::Uninitialized => None,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if let Phase::Running(sim) = &mut self.phase {
            sim.resize(width, height);
        }
    }

    pub fn pointer(&mut self, event: PointerEvent) {
        if let Phase::Running(sim) = &mut self.phase {
            sim.handle_pointer(event);
        }
    }
}
