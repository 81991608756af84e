//! space-shooter: headless runner for the twin-stick shooter simulation.
//!
//! Usage:
//!   space-shooter [--config <path>] [--seconds <n>] [--seed <n>] [--fast] [--manual]

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use space_shooter_app::autopilot::Autopilot;
use space_shooter_app::game_loop::{run_headless, spawn_game_loop};
use space_shooter_app::state::{GameLoopCommand, LoopStats};
use space_shooter_core::constants::TICK_RATE;
use space_shooter_core::state::GameStateSnapshot;
use space_shooter_sim::engine::SimConfig;

/// Interval between status lines in real-time mode.
const STATUS_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    seconds: Option<f64>,
    seed: Option<u64>,
    fast: bool,
    manual: bool,
}

fn main() -> Result<()> {
    init_logging();

    let args = parse_args(std::env::args().skip(1))?;
    let mut config = match &args.config {
        Some(path) => SimConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let seconds = args.seconds.unwrap_or(10.0);
    let autopilot = (!args.manual).then(|| Autopilot::new(config.seed));

    info!(seed = config.seed, seconds, fast = args.fast, "starting simulation");

    let (stats, last) = if args.fast {
        let ticks = (seconds * TICK_RATE as f64).round() as u64;
        run_headless(config, autopilot, ticks)
    } else {
        run_realtime(config, autopilot, seconds)?
    };

    report(&stats, &last);
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn run_realtime(
    config: SimConfig,
    autopilot: Option<Autopilot>,
    seconds: f64,
) -> Result<(LoopStats, GameStateSnapshot)> {
    let handle = spawn_game_loop(config, autopilot).context("spawning game loop thread")?;
    let deadline = Instant::now() + Duration::from_secs_f64(seconds);

    while Instant::now() < deadline {
        let remaining = deadline.saturating_duration_since(Instant::now());
        std::thread::sleep(remaining.min(STATUS_INTERVAL));
        if let Some(snapshot) = handle.snapshot() {
            if let Some(ship) = &snapshot.ship {
                info!(
                    tick = snapshot.time.tick,
                    x = ship.location.x,
                    y = ship.location.y,
                    z = ship.location.z,
                    projectiles = snapshot.projectiles.len(),
                    "status"
                );
            }
        }
    }

    let last = handle.snapshot().unwrap_or_default();
    if !handle.send(GameLoopCommand::Shutdown) {
        bail!("game loop exited early");
    }
    let stats = handle
        .thread
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;
    Ok((stats, last))
}

fn report(stats: &LoopStats, last: &GameStateSnapshot) {
    info!(
        ticks = stats.ticks,
        shots = stats.shots_fired,
        impacts = stats.projectile_impacts,
        sounds = stats.sounds_played,
        obstacles = last.obstacle_count,
        elapsed_secs = last.time.elapsed_secs,
        "simulation finished"
    );
}

fn print_usage() {
    eprintln!(
        "space-shooter: headless twin-stick shooter simulation\n\
         \n\
           --config <path>  JSON simulation config (optional)\n\
           --seconds <n>    Simulated duration in seconds (default: 10)\n\
           --seed <n>       Arena and autopilot seed (overrides config)\n\
           --fast           Run without real-time pacing\n\
           --manual         Disable the autopilot (ship stays idle)\n"
    );
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().context("--config requires a path")?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--seconds" => {
                let value = args.next().context("--seconds requires a value")?;
                let seconds: f64 = value
                    .parse()
                    .with_context(|| format!("invalid --seconds value: {value}"))?;
                if !seconds.is_finite() || seconds < 0.0 {
                    bail!("--seconds must be a non-negative number, got {value}");
                }
                parsed.seconds = Some(seconds);
            }
            "--seed" => {
                let value = args.next().context("--seed requires a value")?;
                parsed.seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid --seed value: {value}"))?,
                );
            }
            "--fast" => parsed.fast = true,
            "--manual" => parsed.manual = true,
            "help" | "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                print_usage();
                bail!("unknown argument: {other}");
            }
        }
    }
    Ok(parsed)
}
