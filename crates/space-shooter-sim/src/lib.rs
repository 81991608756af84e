//! Simulation engine for the space shooter.
//!
//! Owns the hecs ECS world, the timer queue, and the game mode, runs the
//! gameplay systems once per frame, and produces GameStateSnapshots.

pub mod collision;
pub mod engine;
pub mod game_mode;
pub mod systems;
pub mod timers;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use space_shooter_core as core;
