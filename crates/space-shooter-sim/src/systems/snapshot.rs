//! Snapshot system: reads the world and builds a GameStateSnapshot.

use hecs::World;

use space_shooter_core::components::*;
use space_shooter_core::enums::GamePhase;
use space_shooter_core::events::{AudioEvent, GameEvent};
use space_shooter_core::state::{GameStateSnapshot, ProjectileView, ShipView};
use space_shooter_core::types::{Aabb, SimTime, Transform};

/// Build a complete snapshot of the visible game state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    audio_events: Vec<AudioEvent>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        ship: build_ship(world),
        projectiles: build_projectiles(world),
        obstacle_count: count_obstacles(world),
        audio_events,
        events,
    }
}

fn build_ship(world: &World) -> Option<ShipView> {
    let mut query = world.query::<(&Transform, &ShipMovement, &Weapon, &PlayerShip)>();
    let view = query
        .iter()
        .next()
        .map(|(_entity, (transform, movement, weapon, _ship))| ShipView {
            location: transform.location,
            rotation: transform.rotation,
            move_speed: movement.move_speed,
            can_fire: weapon.can_fire,
            speed_boost_active: movement.speed_boost_active,
            vertical_boost: movement.vertical_boost,
        });
    view
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut query = world.query::<(&Transform, &Projectile)>();
    let views = query
        .iter()
        .map(|(_entity, (transform, projectile))| ProjectileView {
            location: transform.location,
            rotation: transform.rotation,
            lifespan_remaining_secs: projectile.lifespan_remaining_secs,
        })
        .collect();
    views
}

fn count_obstacles(world: &World) -> u32 {
    let mut query = world.query::<(&Aabb, &Obstacle)>();
    let count = query.iter().count();
    count as u32
}
