//! Hoppy Bunny headless runner
//!
//! Plays rounds without a window: the built-in headless physics stands in
//! for the engine, and taps come from the autopilot (or nowhere).
//!
//! Example:
//!   cargo run -- --seed 42 --autopilot --rounds 3 --json

use std::path::PathBuf;

use clap::Parser;

use hoppy_bunny::platform::{Autopilot, PhysicsConfig, Session};
use hoppy_bunny::sim::GameState;
use hoppy_bunny::{RenderSnapshot, SceneDescription, SetupError, Tuning};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run Hoppy Bunny rounds headless", long_about = None)]
struct Args {
    /// Spawn RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Tick limit per round
    #[arg(long, default_value_t = 60 * 60)]
    ticks: u64,
    /// Number of rounds to play; each restart uses the next seed
    #[arg(long, default_value_t = 1)]
    rounds: u32,
    /// Tuning JSON (defaults when omitted)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Scene JSON (default layout when omitted)
    #[arg(long)]
    scene: Option<PathBuf>,
    /// Headless physics JSON
    #[arg(long)]
    physics: Option<PathBuf>,
    /// Let the autopilot tap
    #[arg(long)]
    autopilot: bool,
    /// Print the final snapshot of each round as JSON
    #[arg(long)]
    json: bool,
}

fn build_session(args: &Args, seed: u64) -> Result<Session, SetupError> {
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let scene = match &args.scene {
        Some(path) => SceneDescription::load(path)?,
        None => SceneDescription::default(),
    };
    let physics = match &args.physics {
        Some(path) => PhysicsConfig::load(path)?,
        None => PhysicsConfig::default(),
    };

    let state = GameState::from_scene(&scene, tuning, seed)?;
    let mut session = Session::new(state, physics);
    if args.autopilot {
        session = session.with_autopilot(Autopilot::default());
    }
    Ok(session)
}

fn run(args: &Args) -> i32 {
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut session = match build_session(args, seed) {
        Ok(session) => session,
        Err(err) => {
            log::error!("Setup failed: {err}");
            return 2;
        }
    };

    for round in 0..args.rounds {
        if round > 0 {
            session.restart(seed.wrapping_add(u64::from(round)));
        }
        let stats = session.run(args.ticks);
        log::info!(
            "Round {} (seed {}): {} ticks, {} taps, {} obstacles passed, {}",
            round + 1,
            session.state.seed,
            stats.ticks,
            stats.taps,
            stats.obstacles_passed,
            if session.state.is_active() {
                "tick limit reached"
            } else {
                "crashed"
            }
        );
        if args.json {
            match RenderSnapshot::capture(&session.state).to_json() {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    log::error!("Snapshot serialization failed: {err}");
                    return 1;
                }
            }
        }
    }
    0
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Hoppy Bunny (headless) starting...");
    let args = Args::parse();
    std::process::exit(run(&args));
}
