extern crate clap;
extern crate d20kit as dk;
extern crate rand_xoshiro;
extern crate serde_json;
#[macro_use]
extern crate slog;

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand_xoshiro::Xoshiro256StarStar;

use dk::render::{RecordingSurface, SvgSurface};
use dk::{EngineBuilder, Outcome, Progress, RollEngine, Settings};

/// Roll a twenty-sided die without a window, printing each outcome
/// as a line of JSON.
#[derive(Parser, Debug)]
#[command(name = "d20roll", version)]
struct Args {
    /// Seed for reproducible rolls; omit for fresh randomness.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    rolls: usize,
    /// Simulated frame rate driving the animation.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,
    /// Die colour, e.g. `#9b78dc` or `rgb(155, 120, 220)`.
    #[arg(long)]
    color: Option<String>,
    /// JSON settings file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Land every roll on this value instead of a random one.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=20))]
    value: Option<u8>,
    /// Write the last roll's final frame here as SVG.
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("d20roll: {}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let builder = EngineBuilder::new()
        .with_settings(settings)
        .with_viewport(args.width, args.height, args.dpr);
    let log = builder.root_log().new(o!("host" => "d20roll"));
    let mut engine = match args.seed {
        Some(seed) => builder.build_seeded(seed)?,
        None => builder.build()?,
    };
    if let Some(color) = &args.color {
        engine.set_theme_str(color);
    }

    let fps = if args.fps.is_finite() && args.fps > 0.0 {
        args.fps
    } else {
        warn!(log, "Ignoring nonsensical frame rate"; "fps" => args.fps);
        60.0
    };
    let frame_ms = 1000.0 / fps;

    let mut now = 0.0;
    let mut surface = RecordingSurface::new();
    for roll_index in 0..args.rolls {
        let started = match args.value {
            Some(value) => engine.roll_to(value),
            None => engine.roll(),
        };
        debug_assert!(started, "Previous roll should have settled");

        let (outcome, frames) = play_roll(&mut engine, &mut surface, &mut now, frame_ms);
        info!(log, "Rolled";
            "roll" => roll_index + 1,
            "value" => outcome.value,
            "frames" => frames
        );
        println!("{}", serde_json::to_string(&outcome)?);
    }

    if let Some(path) = &args.svg {
        let viewport = *engine.viewport();
        let mut svg = SvgSurface::new(viewport.width(), viewport.height());
        engine.draw(&mut svg);
        fs::write(path, svg.finish())?;
        info!(log, "Wrote final frame"; "path" => path.display().to_string());
    }

    Ok(())
}

// Drive frames until the roll in flight settles.
fn play_roll(
    engine: &mut RollEngine<Xoshiro256StarStar>,
    surface: &mut RecordingSurface,
    now: &mut f64,
    frame_ms: f64,
) -> (Outcome, usize) {
    let mut frames = 0;
    loop {
        surface.clear();
        let progress = engine.step(*now, surface);
        frames += 1;
        *now += frame_ms;
        match progress {
            Progress::Settled(outcome) => return (outcome, frames),
            Progress::Rolling(_) => {}
            // Nothing was in flight; report what's showing.
            Progress::Idle => {
                return (engine.last_outcome().unwrap_or_else(|| Outcome::new(20)), frames)
            }
        }
    }
}
