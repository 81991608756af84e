//! Core types and definitions for the space shooter simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, input bindings, configuration, state snapshots,
//! events, and constants. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
