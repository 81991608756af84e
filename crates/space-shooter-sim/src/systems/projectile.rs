//! Projectile flight: straight-line sweeps with a lifespan.

use glam::DVec3;
use hecs::{Entity, World};

use space_shooter_core::components::{Collider, Projectile};
use space_shooter_core::events::GameEvent;
use space_shooter_core::types::Transform;

use crate::collision;

/// Advance every projectile by `dt`. Projectiles that hit an obstacle or
/// run out of lifespan are pushed to `despawn_buffer`.
pub fn run(
    world: &mut World,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    let in_flight: Vec<(Entity, DVec3, DVec3, f64)> = world
        .query_mut::<(&Transform, &Projectile, Option<&Collider>)>()
        .into_iter()
        .map(|(entity, (transform, projectile, collider))| {
            let delta = transform.rotation.forward() * projectile.speed * dt;
            let radius = collider.map_or(0.0, |c| c.radius);
            (entity, transform.location, delta, radius)
        })
        .collect();

    for (entity, start, delta, radius) in in_flight {
        let hit = collision::sweep(world, start, delta, radius);

        let Ok((transform, projectile)) =
            world.query_one_mut::<(&mut Transform, &mut Projectile)>(entity)
        else {
            continue;
        };
        transform.location = hit.location;
        projectile.lifespan_remaining_secs -= dt;

        if hit.blocking {
            events.push(GameEvent::ProjectileImpact {
                location: hit.location,
            });
            despawn_buffer.push(entity);
        } else if projectile.lifespan_remaining_secs <= 0.0 {
            events.push(GameEvent::ProjectileExpired {
                location: hit.location,
            });
            despawn_buffer.push(entity);
        }
    }
}
