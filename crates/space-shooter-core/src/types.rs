//! Fundamental geometric and simulation types.
//!
//! World space is x = forward, y = right, z = up. Angles on `Rotator`
//! are in degrees.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Orientation as pitch (about the right axis) and yaw (about up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotator {
    pub pitch: f64,
    pub yaw: f64,
}

impl Rotator {
    pub const ZERO: Rotator = Rotator {
        pitch: 0.0,
        yaw: 0.0,
    };

    pub fn new(pitch: f64, yaw: f64) -> Self {
        Self { pitch, yaw }
    }

    /// The rotator that points the forward axis along `direction`.
    /// A zero vector yields `Rotator::ZERO`.
    pub fn from_direction(direction: DVec3) -> Self {
        let yaw = direction.y.atan2(direction.x).to_degrees();
        let horizontal = (direction.x * direction.x + direction.y * direction.y).sqrt();
        let pitch = direction.z.atan2(horizontal).to_degrees();
        Self { pitch, yaw }
    }

    pub fn to_quat(self) -> DQuat {
        DQuat::from_rotation_z(self.yaw.to_radians())
            * DQuat::from_rotation_y(-self.pitch.to_radians())
    }

    /// Rotate a vector from local space into this orientation.
    pub fn rotate_vector(self, v: DVec3) -> DVec3 {
        self.to_quat() * v
    }

    /// Unit forward vector of this orientation.
    pub fn forward(self) -> DVec3 {
        self.rotate_vector(DVec3::X)
    }
}

/// Location and orientation of an entity in the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub location: DVec3,
    pub rotation: Rotator,
}

impl Transform {
    pub fn new(location: DVec3, rotation: Rotator) -> Self {
        Self { location, rotation }
    }

    pub fn at(location: DVec3) -> Self {
        Self {
            location,
            rotation: Rotator::ZERO,
        }
    }
}

/// Axis-aligned box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center(center: DVec3, half_extents: DVec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Grow the box by `amount` on every side.
    pub fn expanded(&self, amount: f64) -> Self {
        Self {
            min: self.min - DVec3::splat(amount),
            max: self.max + DVec3::splat(amount),
        }
    }

    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }
}

/// Opaque reference to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u32);

/// Non-owning reference to a mesh, sound, or other asset by path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetHandle(pub String);

impl AssetHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Clamp the length of `v` to at most `max`, keeping its direction.
pub fn clamp_to_max_size(v: DVec3, max: f64) -> DVec3 {
    let len_sq = v.length_squared();
    if len_sq > max * max && len_sq > 0.0 {
        v * (max / len_sq.sqrt())
    } else {
        v
    }
}

/// Horizontal component of `v`, normalized. Zero if it has no horizontal part.
pub fn safe_normal_2d(v: DVec3) -> DVec3 {
    DVec3::new(v.x, v.y, 0.0).normalize_or_zero()
}

/// Project `v` onto the plane through the origin with unit normal `normal`.
pub fn plane_project(v: DVec3, normal: DVec3) -> DVec3 {
    v - normal * v.dot(normal)
}
