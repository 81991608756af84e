//! Cleanup system: removes projectiles that are finished or out of bounds.

use hecs::{Entity, World};
use tracing::trace;

use space_shooter_core::components::Projectile;
use space_shooter_core::constants::OOB_MARGIN;
use space_shooter_core::types::Transform;

use crate::timers::TimerQueue;

/// Despawn everything already in `despawn_buffer`, plus projectiles that
/// escaped more than `OOB_MARGIN` past the arena walls.
pub fn run(
    world: &mut World,
    timers: &mut TimerQueue,
    despawn_buffer: &mut Vec<Entity>,
    arena_half_extent: f64,
) {
    let limit = arena_half_extent + OOB_MARGIN;
    for (entity, (transform, _projectile)) in world.query_mut::<(&Transform, &Projectile)>() {
        let loc = transform.location;
        if loc.x.abs() > limit || loc.y.abs() > limit || loc.z.abs() > limit {
            despawn_buffer.push(entity);
        }
    }

    despawn_entities(world, timers, despawn_buffer);
}

/// Despawn the buffered entities and cancel any timers aimed at them.
pub fn despawn_entities(world: &mut World, timers: &mut TimerQueue, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        timers.clear_for(entity);
        if world.despawn(entity).is_ok() {
            trace!(?entity, "despawned");
        }
    }
}
