//! Ship movement: input-to-motion mapping with swept moves and wall sliding.

use glam::DVec3;
use hecs::{Entity, World};

use space_shooter_core::components::{Collider, PlayerShip, ShipMovement};
use space_shooter_core::constants::MAX_MOVE_INPUT;
use space_shooter_core::input::AxisInput;
use space_shooter_core::types::{clamp_to_max_size, plane_project, safe_normal_2d, Rotator, Transform};

use crate::collision::{self, SweepHit};

/// Movement direction for this frame's stick input, clamped so diagonal
/// input is no faster than straight input. The vertical boost mixes a
/// large upward component in before clamping.
pub fn movement_direction(input: &AxisInput, vertical_boost: bool, vertical_lift: f64) -> DVec3 {
    let lift = if vertical_boost { vertical_lift } else { 0.0 };
    let raw = DVec3::new(input.move_forward, input.move_right, lift);
    clamp_to_max_size(raw, MAX_MOVE_INPUT)
}

/// Move every player ship for one frame.
pub fn run(world: &mut World, input: &AxisInput, dt: f64) {
    let ships: Vec<(Entity, DVec3)> = world
        .query_mut::<(&ShipMovement, &PlayerShip)>()
        .into_iter()
        .map(|(entity, (movement, _ship))| {
            let direction =
                movement_direction(input, movement.vertical_boost, movement.vertical_lift);
            (entity, direction * movement.move_speed * dt)
        })
        .collect();

    for (entity, displacement) in ships {
        move_with_slide(world, entity, displacement);
    }
}

/// Sweep-move `entity` by `displacement`. On a blocking hit, slide the
/// unused part of the move along the surface. The slide is swept too, but
/// its own hit is not handled further.
pub fn move_with_slide(world: &mut World, entity: Entity, displacement: DVec3) {
    if displacement.length_squared() <= 0.0 {
        return;
    }

    let rotation = Rotator::from_direction(displacement);
    let hit = sweep_move(world, entity, displacement, rotation);

    if hit.blocking {
        let normal_2d = safe_normal_2d(hit.normal);
        let deflection = plane_project(displacement, normal_2d) * (1.0 - hit.time);
        sweep_move(world, entity, deflection, rotation);
    }
}

/// Move `entity` by `delta` until blocked, and face it along `rotation`.
/// Entities without a `Transform` are left alone and report no hit.
pub fn sweep_move(world: &mut World, entity: Entity, delta: DVec3, rotation: Rotator) -> SweepHit {
    let Ok(start) = world.get::<&Transform>(entity).map(|t| t.location) else {
        return SweepHit {
            blocking: false,
            time: 1.0,
            location: DVec3::ZERO,
            normal: DVec3::ZERO,
            entity: None,
        };
    };
    let radius = world
        .get::<&Collider>(entity)
        .map(|c| c.radius)
        .unwrap_or(0.0);

    let hit = collision::sweep(world, start, delta, radius);

    if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
        transform.location = hit.location;
        transform.rotation = rotation;
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_input_unchanged() {
        let dir = movement_direction(&AxisInput::movement(0.6, 0.0), false, 1000.0);
        assert_eq!(dir, DVec3::new(0.6, 0.0, 0.0));
    }

    #[test]
    fn test_diagonal_input_clamped_to_unit() {
        let dir = movement_direction(&AxisInput::movement(1.0, 1.0), false, 1000.0);
        assert!((dir.length() - 1.0).abs() < 1e-12);
        assert!((dir.x - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_exhaustive_grid() {
        for i in -10..=10 {
            for j in -10..=10 {
                let (f, r) = (i as f64 / 10.0, j as f64 / 10.0);
                let dir = movement_direction(&AxisInput::movement(f, r), false, 1000.0);
                if f * f + r * r > 1.0 {
                    assert!((dir.length() - 1.0).abs() < 1e-12, "({f}, {r})");
                } else {
                    assert_eq!(dir, DVec3::new(f, r, 0.0));
                }
            }
        }
    }

    #[test]
    fn test_vertical_boost_dominates_direction() {
        let dir = movement_direction(&AxisInput::movement(1.0, 0.0), true, 1000.0);
        assert!((dir.length() - 1.0).abs() < 1e-12);
        assert!(dir.z > 0.999);
        assert!(dir.x > 0.0 && dir.x < 0.002);

        // Lift applies even with the stick centered.
        let dir = movement_direction(&AxisInput::default(), true, 1000.0);
        assert!((dir - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_move_without_transform_is_noop() {
        let mut world = World::new();
        let entity = world.spawn(());
        let hit = sweep_move(&mut world, entity, DVec3::X, Rotator::ZERO);
        assert!(!hit.blocking);
    }
}
