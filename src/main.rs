use clap::Parser;
use macroquad::prelude::{
    get_frame_time, mouse_position, next_frame, screen_dpi_scale, screen_height, screen_width,
    Conf, Vec2,
};
use rand::rngs::{StdRng, ThreadRng};
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use neural_drift::clock::seconds_to_frames;
use neural_drift::render::Renderer;
use neural_drift::{Cli, FrameDriver, PointerTracker, RenderError, Settings};

// parsed again in main; the window needs its size before main runs
fn settings() -> Settings {
    Settings::from(Cli::parse())
}

fn window_conf() -> Conf {
    settings().window_conf()
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(settings: Settings) -> Result<(), RenderError> {
    let renderer = Renderer::new()?;

    let (mut width, mut height) = (screen_width(), screen_height());
    info!(width, height, dpi_scale = screen_dpi_scale(), "window ready");

    let mut driver = FrameDriver::new(settings.pair_mode);
    match settings.seed {
        Some(seed) => driver.start(&mut StdRng::seed_from_u64(seed), width, height),
        None => driver.start(&mut ThreadRng::default(), width, height),
    }

    let mut pointer = PointerTracker::new();

    // --- Main Loop ---
    loop {
        let (w, h) = (screen_width(), screen_height());
        if (w, h) != (width, height) {
            (width, height) = (w, h);
            driver.resize(width, height);
        }

        if let Some(event) = pointer.sample(Vec2::from(mouse_position()), width, height) {
            driver.pointer(event);
        }

        if let Some(sim) = driver.frame(seconds_to_frames(get_frame_time())) {
            renderer.draw(sim);
        }

        next_frame().await
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let settings = settings();
    init_logging(&settings);
    info!(pair_mode = ?settings.pair_mode, seed = ?settings.seed, "starting Neural Drift");

    if let Err(e) = run(settings).await {
        error!("{e}");
    }
}
