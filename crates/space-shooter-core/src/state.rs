//! Game state snapshot: the visible state handed to the host each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::{AudioEvent, GameEvent};
use crate::types::{Rotator, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ship: Option<ShipView>,
    pub projectiles: Vec<ProjectileView>,
    pub obstacle_count: u32,
    pub audio_events: Vec<AudioEvent>,
    pub events: Vec<GameEvent>,
}

/// The player's ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub location: DVec3,
    pub rotation: Rotator,
    pub move_speed: f64,
    pub can_fire: bool,
    pub speed_boost_active: bool,
    pub vertical_boost: bool,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub location: DVec3,
    pub rotation: Rotator,
    pub lifespan_remaining_secs: f64,
}
