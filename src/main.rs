//! RTS engine headless driver.
//!
//! Runs the simulation without a window. A scripted input session drags a
//! selection box over part of the playfield, issues a few move commands, and
//! then lets the units work them off while the frame loop logs progress.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --frames 600 --dump-draws
//! ```

use clap::Parser;
use std::path::PathBuf;

use rtsengine::input::{ButtonAction, InputRouter, InputSurface, Key, MouseButton};
use rtsengine::resources::simconfig::SimConfig;
use rtsengine::resources::texturestore::TextureHandle;
use rtsengine::simulation::Simulation;

const SURFACE_WIDTH: u32 = 800;
const SURFACE_HEIGHT: u32 = 600;

/// RTS engine headless simulation
#[derive(Parser)]
#[command(version, about = "Runs the RTS simulation core headless with a scripted input session.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Seconds per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Override the scatter seed from the configuration.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with debug point rendering enabled.
    #[arg(long)]
    debug: bool,

    /// Print every frame's draw calls as a JSON line on stdout.
    #[arg(long)]
    dump_draws: bool,
}

/// One scripted input at a given frame.
enum Scripted {
    Cursor(f64, f64),
    Button(MouseButton, ButtonAction),
    Key(Key),
}

/// Drag over the upper-left quadrant, then send two move orders.
fn script() -> Vec<(u64, Scripted)> {
    vec![
        (5, Scripted::Cursor(80.0, 60.0)),
        (6, Scripted::Button(MouseButton::Left, ButtonAction::Press)),
        (10, Scripted::Cursor(240.0, 180.0)),
        (15, Scripted::Cursor(400.0, 300.0)),
        (20, Scripted::Button(MouseButton::Left, ButtonAction::Release)),
        (30, Scripted::Cursor(600.0, 150.0)),
        (31, Scripted::Button(MouseButton::Right, ButtonAction::Press)),
        (32, Scripted::Button(MouseButton::Right, ButtonAction::Release)),
        (40, Scripted::Cursor(200.0, 450.0)),
        (41, Scripted::Button(MouseButton::Right, ButtonAction::Press)),
        (42, Scripted::Button(MouseButton::Right, ButtonAction::Release)),
        (300, Scripted::Key(Key::F11)),
    ]
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = SimConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{e}; using defaults");
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.debug |= cli.debug;

    // Headless: every texture key resolves to a fresh handle.
    let mut next_handle = 0;
    let mut loader = |key: &str| {
        next_handle += 1;
        log::debug!("Loaded texture '{}' as handle {}", key, next_handle);
        Some(TextureHandle(next_handle))
    };
    let mut simulation = Simulation::with_units(config, &mut loader);

    let mut surface = InputSurface::new("headless", SURFACE_WIDTH, SURFACE_HEIGHT);
    let mut router = match InputRouter::attach(&mut surface) {
        Ok(router) => router,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut script = script().into_iter().peekable();
    for frame in 0..cli.frames {
        while let Some((_, input)) = script.next_if(|(at, _)| *at == frame) {
            match input {
                Scripted::Cursor(x, y) => router.cursor_moved(&mut simulation, x, y),
                Scripted::Button(button, action) => {
                    router.mouse_button(&mut simulation, button, action)
                }
                Scripted::Key(key) => router.key(&mut simulation, key, ButtonAction::Press),
            }
        }

        simulation.advance(cli.dt);

        let draws = simulation.drain_draw_calls();
        if cli.dump_draws {
            match serde_json::to_string(&draws) {
                Ok(line) => println!("{line}"),
                Err(e) => log::error!("Failed to serialize draw calls: {e}"),
            }
        }
        if frame % 60 == 0 {
            simulation.log_summary();
        }
    }

    simulation.log_summary();
    router.detach(&mut surface);
}
