//! Game loop thread: runs the simulation engine at the fixed tick rate and
//! publishes snapshots.
//!
//! The engine is created inside the thread so it never crosses threads.
//! Commands arrive via `mpsc`; the latest snapshot is stored in shared
//! state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use space_shooter_core::commands::PlayerCommand;
use space_shooter_core::constants::TICK_RATE;
use space_shooter_core::input::AxisInput;
use space_shooter_core::state::GameStateSnapshot;
use space_shooter_sim::engine::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::state::{GameLoopCommand, GameLoopHandle, LoopStats};

/// Wall-clock duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread. The match is started immediately.
pub fn spawn_game_loop(
    config: SimConfig,
    autopilot: Option<Autopilot>,
) -> io::Result<GameLoopHandle> {
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("space-shooter-game-loop".into())
        .spawn(move || run_game_loop(config, autopilot, command_rx, &shared))?;

    Ok(GameLoopHandle {
        command_tx,
        latest_snapshot,
        thread,
    })
}

/// Drives one engine, one tick per call, with input from the autopilot or
/// from the held input.
struct Driver {
    engine: SimulationEngine,
    autopilot: Option<Autopilot>,
    held_input: AxisInput,
    stats: LoopStats,
}

impl Driver {
    fn new(config: SimConfig, autopilot: Option<Autopilot>) -> Self {
        let mut engine = SimulationEngine::new(config);
        engine.queue_command(PlayerCommand::StartMatch);
        Self {
            engine,
            autopilot,
            held_input: AxisInput::default(),
            stats: LoopStats::default(),
        }
    }

    fn handle(&mut self, command: GameLoopCommand) -> bool {
        match command {
            GameLoopCommand::PlayerCommand(cmd) => self.engine.queue_command(cmd),
            GameLoopCommand::SetInput(input) => {
                if let Some(mut pilot) = self.autopilot.take() {
                    debug!("manual input received, autopilot disengaged");
                    self.engine.queue_commands(pilot.release_all());
                }
                self.held_input = input;
            }
            GameLoopCommand::Shutdown => return false,
        }
        true
    }

    fn step(&mut self) -> GameStateSnapshot {
        let input = match self.autopilot.as_mut() {
            Some(pilot) => {
                let (input, commands) = pilot.next_frame();
                self.engine.queue_commands(commands);
                input
            }
            None => self.held_input,
        };
        let snapshot = self.engine.tick_fixed(&input);
        self.stats.record(&snapshot);
        snapshot
    }
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    autopilot: Option<Autopilot>,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> LoopStats {
    let mut driver = Driver::new(config, autopilot);
    let mut next_tick_time = Instant::now();
    info!("game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(command) => {
                    if !driver.handle(command) {
                        info!(ticks = driver.stats.ticks, "game loop shut down");
                        return driver.stats;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return driver.stats,
            }
        }

        // 2. Advance one tick
        let snapshot = driver.step();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Runs `ticks` ticks as fast as possible on the calling thread.
pub fn run_headless(
    config: SimConfig,
    autopilot: Option<Autopilot>,
    ticks: u64,
) -> (LoopStats, GameStateSnapshot) {
    let mut driver = Driver::new(config, autopilot);
    let mut last = GameStateSnapshot::default();
    for _ in 0..ticks {
        last = driver.step();
    }
    (driver.stats, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use space_shooter_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartMatch))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartMatch)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_headless_run_starts_match_and_fires() {
        let (stats, last) = run_headless(SimConfig::default(), Some(Autopilot::new(1)), 120);

        assert_eq!(stats.ticks, 120);
        assert_eq!(last.phase, GamePhase::InProgress);
        assert!(last.ship.is_some());
        // Aim always points somewhere, so the gun fires once per cooldown.
        assert!(stats.shots_fired >= 10, "shots: {}", stats.shots_fired);
    }

    #[test]
    fn test_headless_run_is_deterministic() {
        let (stats_a, last_a) = run_headless(SimConfig::default(), Some(Autopilot::new(5)), 300);
        let (stats_b, last_b) = run_headless(SimConfig::default(), Some(Autopilot::new(5)), 300);

        assert_eq!(stats_a, stats_b);
        assert_eq!(
            serde_json::to_string(&last_a).unwrap(),
            serde_json::to_string(&last_b).unwrap()
        );
    }

    #[test]
    fn test_manual_input_disengages_autopilot() {
        let mut driver = Driver::new(SimConfig::default(), Some(Autopilot::new(2)));
        driver.step();
        assert!(driver.handle(GameLoopCommand::SetInput(AxisInput::default())));
        assert!(driver.autopilot.is_none());

        let before = driver.step().ship.unwrap().location;
        let after = driver.step().ship.unwrap().location;
        assert_eq!(before, after);
    }

    #[test]
    fn test_shutdown_stops_driver() {
        let mut driver = Driver::new(SimConfig::default(), None);
        assert!(!driver.handle(GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_game_loop_thread_publishes_snapshots() {
        let handle = spawn_game_loop(SimConfig::default(), Some(Autopilot::new(4))).unwrap();
        std::thread::sleep(Duration::from_millis(100));

        let snapshot = handle.snapshot().expect("no snapshot published");
        assert_eq!(snapshot.phase, GamePhase::InProgress);

        assert!(handle.send(GameLoopCommand::Shutdown));
        let stats = handle.thread.join().unwrap();
        assert!(stats.ticks > 0);
    }
}
