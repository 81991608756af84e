//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components, the timer queue,
//! and the engine.

pub mod abilities;
pub mod cleanup;
pub mod fire_control;
pub mod movement;
pub mod projectile;
pub mod snapshot;
