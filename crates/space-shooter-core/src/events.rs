//! Events emitted by the simulation for audio and presentation.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::{AssetHandle, Rotator};

/// Audio events for the host's sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Play a sound positioned in the world.
    PlaySound { sound: AssetHandle, location: DVec3 },
}

/// Gameplay events, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player's pawn was spawned by the game mode.
    PawnSpawned { location: DVec3 },
    /// A projectile left the gun.
    ShotFired { location: DVec3, rotation: Rotator },
    /// The gun cooldown ended; the next shot is allowed.
    WeaponReady,
    /// A projectile hit level geometry and was removed.
    ProjectileImpact { location: DVec3 },
    /// A projectile ran out of lifespan.
    ProjectileExpired { location: DVec3 },
}
