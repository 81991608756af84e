//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the timer queue, and the
//! game mode. It processes player commands, runs all systems once per
//! frame, and produces `GameStateSnapshot`s. Completely headless, so the
//! same inputs always give the same snapshots.

use std::collections::VecDeque;
use std::path::Path;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use space_shooter_core::commands::PlayerCommand;
use space_shooter_core::components::ShipVisuals;
use space_shooter_core::config::{load_json, ArenaConfig, ConfigError, ShipConfig};
use space_shooter_core::constants::DT;
use space_shooter_core::enums::GamePhase;
use space_shooter_core::events::{AudioEvent, GameEvent};
use space_shooter_core::input::AxisInput;
use space_shooter_core::state::GameStateSnapshot;
use space_shooter_core::types::SimTime;

use crate::game_mode::GameMode;
use crate::systems;
use crate::timers::{TimerAction, TimerQueue};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for the arena layout. Same seed = same arena.
    pub seed: u64,
    pub ship: ShipConfig,
    pub arena: ArenaConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ship: ShipConfig::default(),
            arena: ArenaConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config: SimConfig = load_json(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ship.validate()?;
        self.arena.validate()
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: SimConfig,
    rng: ChaCha8Rng,
    game_mode: GameMode,
    timers: TimerQueue,
    player: Option<Entity>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            game_mode: GameMode::new(),
            timers: TimerQueue::new(),
            player: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `delta_secs` with this frame's axis input
    /// and return the resulting snapshot. Negative or non-finite deltas
    /// count as zero.
    pub fn tick(&mut self, input: &AxisInput, delta_secs: f64) -> GameStateSnapshot {
        let dt = if delta_secs.is_finite() {
            delta_secs.max(0.0)
        } else {
            0.0
        };

        self.process_commands();

        if self.phase == GamePhase::InProgress {
            self.run_systems(input, dt);
            self.time.advance(dt);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, audio_events, events)
    }

    /// Advance by one fixed-rate tick.
    pub fn tick_fixed(&mut self, input: &AxisInput) -> GameStateSnapshot {
        self.tick(input, DT)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn game_mode(&self) -> &GameMode {
        &self.game_mode
    }

    /// The player's pawn, once a match has started.
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mesh and camera rig of the player's pawn.
    pub fn ship_visuals(&self) -> Option<ShipVisuals> {
        let player = self.player?;
        let visuals = self.world.get::<&ShipVisuals>(player).ok()?;
        Some((*visuals).clone())
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Remove the player's pawn, cancelling its pending timers.
    pub fn despawn_player(&mut self) {
        if let Some(player) = self.player.take() {
            self.despawn_buffer.push(player);
            systems::cleanup::despawn_entities(
                &mut self.world,
                &mut self.timers,
                &mut self.despawn_buffer,
            );
            info!("player pawn despawned");
        }
    }

    /// Mutable world access for tests that place extra geometry.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMatch => {
                if self.phase == GamePhase::WaitingToStart {
                    self.start_match();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::InProgress {
                    self.phase = GamePhase::Paused;
                    debug!(tick = self.time.tick, "paused");
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::InProgress;
                    debug!(tick = self.time.tick, "resumed");
                }
            }
            // Applied in any phase so a release during pause is not lost.
            PlayerCommand::PressAction { action } => {
                if let Some(player) = self.player {
                    systems::abilities::apply(&mut self.world, player, action, true);
                }
            }
            PlayerCommand::ReleaseAction { action } => {
                if let Some(player) = self.player {
                    systems::abilities::apply(&mut self.world, player, action, false);
                }
            }
        }
    }

    fn start_match(&mut self) {
        self.world.clear();
        self.timers = TimerQueue::new();
        self.time = SimTime::default();

        let obstacles = world_setup::setup_arena(&mut self.world, &mut self.rng, &self.config.arena);
        let start = self.config.arena.player_start;
        let player = self
            .game_mode
            .spawn_default_pawn(&mut self.world, start, &self.config.ship);
        self.player = Some(player);
        self.events.push(GameEvent::PawnSpawned { location: start });
        self.phase = GamePhase::InProgress;

        info!(
            seed = self.config.seed,
            obstacles,
            pawn = ?self.game_mode.default_pawn(),
            "match started"
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &AxisInput, dt: f64) {
        // 1. Expired timers (cooldowns from earlier frames)
        for action in self.timers.advance(dt) {
            match action {
                TimerAction::ShotCooldownExpired { ship } => {
                    systems::fire_control::on_cooldown_expired(&mut self.world, ship, &mut self.events);
                }
            }
        }
        // 2. Ship movement
        systems::movement::run(&mut self.world, input, dt);
        // 3. Fire control
        systems::fire_control::run(
            &mut self.world,
            &mut self.timers,
            input,
            &mut self.audio_events,
            &mut self.events,
        );
        // 4. Projectile flight
        systems::projectile::run(&mut self.world, dt, &mut self.despawn_buffer, &mut self.events);
        // 5. Cleanup
        systems::cleanup::run(
            &mut self.world,
            &mut self.timers,
            &mut self.despawn_buffer,
            self.config.arena.half_extent,
        );
    }
}
