//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::BoostRelease;
use crate::types::{AssetHandle, Rotator, TimerHandle};

/// Marks the ship controlled by the local player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Movement tuning and ability state for a ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipMovement {
    /// Current speed in units per second.
    pub move_speed: f64,
    /// Speed applied while the speed boost is held.
    pub boost_speed: f64,
    /// Difference between boosted and base speed.
    pub boost_delta: f64,
    pub boost_release: BoostRelease,
    /// Speed saved by the last boost press (only used by `RestoreSaved`).
    pub saved_speed: Option<f64>,
    /// Whether the speed boost is currently held.
    pub speed_boost_active: bool,
    /// Whether the vertical boost is currently held.
    pub vertical_boost: bool,
    /// Vertical component mixed into the movement direction while boosted.
    pub vertical_lift: f64,
}

/// Gun state for a ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    /// Muzzle offset from the ship origin, ship-local.
    pub gun_offset: DVec3,
    /// Seconds between shots.
    pub fire_interval: f64,
    /// False while the cooldown timer is pending.
    pub can_fire: bool,
    /// Pending cooldown timer, if any.
    pub cooldown: Option<TimerHandle>,
    pub fire_sound: Option<AssetHandle>,
    /// Tuning for projectiles spawned by this gun.
    pub projectile_speed: f64,
    pub projectile_lifespan: f64,
    pub projectile_radius: f64,
}

/// Collision sphere used by sweeps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// A fired projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub speed: f64,
    /// Seconds until the projectile despawns on its own.
    pub lifespan_remaining_secs: f64,
}

/// Static geometry that blocks sweeps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle;

/// Spring arm holding the camera above the ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraBoom {
    pub arm_length: f64,
    pub rotation: Rotator,
    /// Ignore the ship's rotation (the arm does not turn with the ship).
    pub absolute_rotation: bool,
    /// Pull the camera in when the arm collides with the level.
    pub collision_test: bool,
}

/// Camera at the end of the boom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopDownCamera {
    pub use_pawn_control_rotation: bool,
}

/// Visual sub-objects of a ship. Handles are owned by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipVisuals {
    pub mesh: AssetHandle,
    pub camera_boom: CameraBoom,
    pub camera: TopDownCamera,
}

/// Mesh handle for anything rendered without extra state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshRef(pub AssetHandle);
