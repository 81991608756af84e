//! Simulation constants and tuning parameters.

use glam::DVec3;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Ship movement ---

/// Default ship speed in units per second.
pub const DEFAULT_MOVE_SPEED: f64 = 1000.0;

/// Speed added on top of the base speed while the speed boost is held.
pub const SPEED_BOOST_DELTA: f64 = 1500.0;

/// Vertical component mixed into the movement direction while the
/// vertical boost is held. Large enough to dominate after clamping.
pub const VERTICAL_BOOST_LIFT: f64 = 1000.0;

/// Maximum length of the movement direction (prevents diagonal speed-up).
pub const MAX_MOVE_INPUT: f64 = 1.0;

/// Ship collision sphere radius.
pub const SHIP_COLLISION_RADIUS: f64 = 50.0;

// --- Weapon ---

/// Muzzle offset from the ship origin, in ship-local space.
pub const DEFAULT_GUN_OFFSET: DVec3 = DVec3::new(90.0, 0.0, 0.0);

/// Seconds between shots.
pub const DEFAULT_FIRE_INTERVAL: f64 = 0.1;

// --- Projectiles ---

/// Projectile speed in units per second.
pub const PROJECTILE_SPEED: f64 = 3000.0;

/// Projectile lifespan in seconds.
pub const PROJECTILE_LIFESPAN: f64 = 3.0;

/// Projectile collision sphere radius.
pub const PROJECTILE_RADIUS: f64 = 5.0;

// --- Collision ---

/// Distance kept between a swept sphere and the surface it hit.
pub const SWEEP_SKIN: f64 = 0.1;

// --- Camera ---

/// Camera boom length above the ship.
pub const CAMERA_ARM_LENGTH: f64 = 1200.0;

/// Camera boom pitch in degrees (looking down at the ship).
pub const CAMERA_PITCH_DEG: f64 = -80.0;

// --- Arena ---

/// Half the width of the square arena floor.
pub const ARENA_HALF_EXTENT: f64 = 2500.0;

/// Height of the arena ceiling above the floor.
pub const ARENA_CEILING: f64 = 1000.0;

/// Thickness of the boundary walls and ceiling.
pub const ARENA_WALL_THICKNESS: f64 = 100.0;

/// Random obstacle blocks placed inside the arena.
pub const ARENA_OBSTACLE_COUNT: u32 = 6;

/// Half extent range of a random obstacle block.
pub const ARENA_OBSTACLE_MIN_HALF: f64 = 80.0;
pub const ARENA_OBSTACLE_MAX_HALF: f64 = 250.0;

/// Obstacles never overlap this radius around the player start.
pub const PLAYER_START_CLEARANCE: f64 = 400.0;

/// Margin past the arena walls before a stray entity is despawned.
pub const OOB_MARGIN: f64 = 500.0;

// --- Assets ---

pub const DEFAULT_SHIP_MESH: &str = "meshes/ship_ufo";
pub const DEFAULT_FIRE_SOUND: &str = "audio/ship_fire";
pub const DEFAULT_PROJECTILE_MESH: &str = "meshes/projectile";
