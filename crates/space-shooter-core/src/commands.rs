//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next tick boundary. Axis input
//! is not a command; it is sampled per frame and passed to `tick`.

use serde::{Deserialize, Serialize};

use crate::input::InputAction;

/// All discrete player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Abilities ---
    /// An action binding was pressed.
    PressAction { action: InputAction },
    /// An action binding was released.
    ReleaseAction { action: InputAction },

    // --- Simulation control ---
    /// Build the arena and spawn the default pawn.
    StartMatch,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
