//! Fixed simulation constants and the small amount of runtime configuration
//! the binary accepts on its command line.

use clap::Parser;
use macroquad::prelude::Conf;
use macroquad::miniquad::conf::Platform;

// --- Simulation constants ---

/// Side length of one spatial grid cell, also the connection and repulsion radius.
pub const CELL: f32 = 150.0;
/// Frame units per velocity unit of travel.
pub const TIME_SCALE: f32 = 1.6;
/// Low-pass factor applied when moving a node toward its target position.
pub const SMOOTH: f32 = 0.15;
/// Per-tick impulse decay, independent of the tick length.
pub const DECAY: f32 = 0.6;
/// Peak impulse contributed by the pointer at zero distance.
pub const REPULSE_STRENGTH: f32 = 2.0;

/// Viewport area that "pays" for one node before the density factor.
pub const AREA_PER_NODE: f64 = 15_000.0;
pub const DENSITY_FACTOR: f64 = 1.3;
/// Each initial velocity component is drawn from `[-MAX_SPEED, MAX_SPEED)`.
pub const MAX_SPEED: f32 = 0.3;

// --- Visual constants ---

pub const LINE_WIDTH: f32 = 1.2;
pub const NODE_RADIUS: f32 = 1.5;
pub const MAX_LINE_ALPHA: f32 = 0.4;
pub const PULSE_AMPLITUDE: f32 = 0.1;
pub const PULSE_BASE_SPEED: f32 = 0.1;
pub const PULSE_SPEED_RANGE: f32 = 0.3;

/// Tint of each color tag, in tag order.
pub const PALETTE: [u32; 3] = [
    0xaa00ff, // purple
    0x00aaff, // electric blue
    0x004de6, // deep blue
];

/// How often each unordered pair of nearby nodes gets a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairMode {
    /// Every node draws to every neighbor, so a pair is drawn from both ends.
    #[default]
    Both,
    /// Only the lower-indexed node of a pair draws.
    Once,
}

#[derive(Parser, Debug)]
#[command(name = "neural_drift")]
#[command(about = "Animated particle network with pointer repulsion")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Draw each connected pair once instead of from both endpoints
    #[arg(long)]
    pub single_draw: bool,

    /// Seed for node placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial window width
    #[arg(long, default_value_t = 1280)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = 800)]
    pub height: i32,
}

/// Runtime options resolved from the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub verbose: bool,
    pub pair_mode: PairMode,
    pub seed: Option<u64>,
    pub window_width: i32,
    pub window_height: i32,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            verbose: cli.verbose,
            pair_mode: if cli.single_draw {
                PairMode::Once
            } else {
                PairMode::Both
            },
            seed: cli.seed,
            window_width: cli.width.max(1),
            window_height: cli.height.max(1),
        }
    }
}

impl Settings {
    /// Window configuration: transparent, antialiased, dpi-aware and resizable.
    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: "Neural Drift".to_string(),
            window_width: self.window_width,
            window_height: self.window_height,
            high_dpi: true,
            sample_count: 4,
            window_resizable: true,
            platform: Platform {
                framebuffer_alpha: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Default log filter; `RUST_LOG` takes precedence when set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
