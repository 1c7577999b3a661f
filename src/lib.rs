//! Neural Drift: an animated network of drifting nodes joined by pulsing
//! lines, pushed away by the pointer.
//!
//! Everything except `render` is plain simulation state and can run without
//! a window.

pub mod clock;
pub mod config;
pub mod connections;
pub mod driver;
pub mod error;
pub mod grid;
pub mod input;
pub mod integrator;
pub mod node;
pub mod render;
pub mod repulsion;

pub use config::{Cli, PairMode, Settings, CELL};
pub use connections::{line_alpha, LineBatch, Segment};
pub use driver::{FrameDriver, Simulation};
pub use error::RenderError;
pub use grid::SpatialGrid;
pub use input::{PointerEvent, PointerTracker};
pub use integrator::StepContext;
pub use node::{node_count, ColorTag, Node};
