//! Game mode: decides which pawn a player gets.

use glam::DVec3;
use hecs::{Entity, World};

use space_shooter_core::config::ShipConfig;
use space_shooter_core::enums::PawnClass;

use crate::world_setup;

/// Match rules. Configured once at construction; no per-frame behavior.
#[derive(Debug, Clone)]
pub struct GameMode {
    default_pawn: PawnClass,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::new()
    }
}

impl GameMode {
    /// The ship is the default pawn for every player.
    pub fn new() -> Self {
        Self {
            default_pawn: PawnClass::Ship,
        }
    }

    pub fn default_pawn(&self) -> PawnClass {
        self.default_pawn
    }

    /// Spawn the default pawn for a player at `location`.
    pub fn spawn_default_pawn(
        &self,
        world: &mut World,
        location: DVec3,
        ship: &ShipConfig,
    ) -> Entity {
        match self.default_pawn {
            PawnClass::Ship => world_setup::spawn_ship(world, location, ship),
        }
    }
}
