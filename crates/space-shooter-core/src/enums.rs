//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Overall match phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    WaitingToStart,
    InProgress,
    Paused,
}

/// Pawn types a game mode can spawn for a player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PawnClass {
    #[default]
    Ship,
}

/// How releasing the speed boost restores movement speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoostRelease {
    /// Subtract the boost delta from whatever the speed is now.
    /// Overlapping press/release pairs can leave the speed wrong.
    SubtractDelta,
    /// Restore the speed saved when the boost was pressed.
    #[default]
    RestoreSaved,
}
