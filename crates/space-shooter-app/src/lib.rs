//! Headless runner for the space shooter simulation.
//!
//! Hosts the simulation engine on a game-loop thread, feeds it input from
//! a seeded autopilot or from commands sent by the caller, and publishes
//! the latest snapshot for polling.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use space_shooter_core as core;
