//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the arena geometry, the player ship, and projectiles with
//! appropriate component bundles.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use space_shooter_core::components::*;
use space_shooter_core::config::{ArenaConfig, ShipConfig};
use space_shooter_core::constants::*;
use space_shooter_core::types::{Aabb, AssetHandle, Rotator, Transform};

/// Attempts per random obstacle before giving up on placing it.
const OBSTACLE_PLACEMENT_ATTEMPTS: u32 = 16;

/// Build the arena: boundary walls, a ceiling, and seeded random blocks.
/// Returns the number of obstacles spawned.
pub fn setup_arena(world: &mut World, rng: &mut ChaCha8Rng, arena: &ArenaConfig) -> u32 {
    let mut count = spawn_boundary(world, arena);
    for _ in 0..arena.obstacle_count {
        if spawn_random_obstacle(world, rng, arena).is_some() {
            count += 1;
        }
    }
    count
}

/// Spawn the four walls and the ceiling around the arena floor.
fn spawn_boundary(world: &mut World, arena: &ArenaConfig) -> u32 {
    let h = arena.half_extent;
    let t = arena.wall_thickness;
    let top = arena.ceiling;
    let bottom = -arena.ceiling;

    let walls = [
        // +x and -x
        Aabb::new(DVec3::new(h, -h - t, bottom), DVec3::new(h + t, h + t, top + t)),
        Aabb::new(DVec3::new(-h - t, -h - t, bottom), DVec3::new(-h, h + t, top + t)),
        // +y and -y
        Aabb::new(DVec3::new(-h - t, h, bottom), DVec3::new(h + t, h + t, top + t)),
        Aabb::new(DVec3::new(-h - t, -h - t, bottom), DVec3::new(h + t, -h, top + t)),
        // ceiling
        Aabb::new(DVec3::new(-h - t, -h - t, top), DVec3::new(h + t, h + t, top + t)),
    ];

    for bounds in walls {
        world.spawn((Obstacle, bounds));
    }
    walls.len() as u32
}

/// Place one block inside the walls, clear of the player start.
fn spawn_random_obstacle(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: &ArenaConfig,
) -> Option<Entity> {
    let limit = arena.half_extent - ARENA_OBSTACLE_MAX_HALF;
    if limit <= 0.0 {
        return None;
    }

    for _ in 0..OBSTACLE_PLACEMENT_ATTEMPTS {
        let center = DVec3::new(rng.gen_range(-limit..limit), rng.gen_range(-limit..limit), 0.0);
        let half = DVec3::new(
            rng.gen_range(ARENA_OBSTACLE_MIN_HALF..ARENA_OBSTACLE_MAX_HALF),
            rng.gen_range(ARENA_OBSTACLE_MIN_HALF..ARENA_OBSTACLE_MAX_HALF),
            arena.ceiling,
        );
        let bounds = Aabb::from_center(center, half);

        let clearance = bounds.expanded(PLAYER_START_CLEARANCE);
        let start = DVec3::new(arena.player_start.x, arena.player_start.y, 0.0);
        if clearance.contains(start) {
            continue;
        }
        return Some(world.spawn((Obstacle, bounds)));
    }
    None
}

/// Spawn the player ship with the given tuning.
pub fn spawn_ship(world: &mut World, location: DVec3, config: &ShipConfig) -> Entity {
    let movement = ShipMovement {
        move_speed: config.move_speed,
        boost_speed: config.boost_speed(),
        boost_delta: config.boost_delta,
        boost_release: config.boost_release,
        saved_speed: None,
        speed_boost_active: false,
        vertical_boost: false,
        vertical_lift: config.vertical_lift,
    };

    let weapon = Weapon {
        gun_offset: config.gun_offset,
        fire_interval: config.fire_interval,
        can_fire: true,
        cooldown: None,
        fire_sound: config.fire_sound.clone(),
        projectile_speed: config.projectile.speed,
        projectile_lifespan: config.projectile.lifespan_secs,
        projectile_radius: config.projectile.radius,
    };

    let visuals = ShipVisuals {
        mesh: config.mesh.clone(),
        camera_boom: CameraBoom {
            arm_length: CAMERA_ARM_LENGTH,
            rotation: Rotator::new(CAMERA_PITCH_DEG, 0.0),
            absolute_rotation: true,
            collision_test: false,
        },
        camera: TopDownCamera {
            use_pawn_control_rotation: false,
        },
    };

    world.spawn((
        PlayerShip,
        Transform::at(location),
        movement,
        weapon,
        Collider {
            radius: config.collision_radius,
        },
        visuals,
    ))
}

/// Spawn a projectile travelling along `rotation`.
pub fn spawn_projectile(
    world: &mut World,
    location: DVec3,
    rotation: Rotator,
    speed: f64,
    lifespan_secs: f64,
    radius: f64,
) -> Entity {
    world.spawn((
        Projectile {
            speed,
            lifespan_remaining_secs: lifespan_secs,
        },
        Transform::new(location, rotation),
        Collider { radius },
        MeshRef(AssetHandle::new(DEFAULT_PROJECTILE_MESH)),
    ))
}
