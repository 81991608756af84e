//! Swept-sphere collision queries against obstacle boxes.
//!
//! This is the smallest query that answers what movement needs: whether
//! a sphere moving along a segment is blocked, where, and by which
//! surface. The sphere is treated as a point against boxes grown by its
//! radius, so corners are square rather than rounded.

use glam::DVec3;
use hecs::{Entity, World};

use space_shooter_core::components::Obstacle;
use space_shooter_core::constants::SWEEP_SKIN;
use space_shooter_core::types::Aabb;

/// Result of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// True if something stopped the sweep.
    pub blocking: bool,
    /// Fraction of the requested move completed (1.0 when unblocked).
    pub time: f64,
    /// Where the sphere ends up.
    pub location: DVec3,
    /// Outward normal of the surface hit (zero when unblocked).
    pub normal: DVec3,
    /// The obstacle hit, if any.
    pub entity: Option<Entity>,
}

impl SweepHit {
    fn clear(start: DVec3, delta: DVec3) -> Self {
        Self {
            blocking: false,
            time: 1.0,
            location: start + delta,
            normal: DVec3::ZERO,
            entity: None,
        }
    }
}

/// Sweep a sphere of `radius` from `start` by `delta` through every obstacle.
pub fn sweep(world: &World, start: DVec3, delta: DVec3, radius: f64) -> SweepHit {
    let mut nearest: Option<(f64, DVec3, Entity)> = None;

    let mut query = world.query::<(&Aabb, &Obstacle)>();
    for (entity, (bounds, _obstacle)) in query.iter() {
        let grown = bounds.expanded(radius);
        let Some((t, normal)) = sweep_point_box(start, delta, &grown) else {
            continue;
        };
        if nearest.map_or(true, |(best, _, _)| t < best) {
            nearest = Some((t, normal, entity));
        }
    }

    let Some((t, normal, entity)) = nearest else {
        return SweepHit::clear(start, delta);
    };

    // Stop just short of the surface so the next sweep starts outside it.
    let length = delta.length();
    let time = if length > 0.0 {
        (t - SWEEP_SKIN / length).max(0.0)
    } else {
        0.0
    };

    SweepHit {
        blocking: true,
        time,
        location: start + delta * time,
        normal,
        entity: Some(entity),
    }
}

/// Entry time and surface normal of a point moving through a box.
fn sweep_point_box(start: DVec3, delta: DVec3, bounds: &Aabb) -> Option<(f64, DVec3)> {
    if bounds.contains(start) {
        // Already touching or inside: block only motion that goes deeper.
        let normal = nearest_face_normal(start, bounds);
        return (delta.dot(normal) < 0.0).then_some((0.0, normal));
    }

    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;
    let mut normal = DVec3::ZERO;

    for axis in 0..3 {
        let s = start[axis];
        let d = delta[axis];
        let (lo, hi) = (bounds.min[axis], bounds.max[axis]);

        if d.abs() < 1e-12 {
            if s < lo || s > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let mut t0 = (lo - s) * inv;
        let mut t1 = (hi - s) * inv;
        let mut face = -1.0;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
            face = 1.0;
        }

        if t0 > t_enter {
            t_enter = t0;
            normal = DVec3::ZERO;
            normal[axis] = face;
        }
        t_exit = t_exit.min(t1);
        if t_enter > t_exit || t_exit <= 0.0 {
            return None;
        }
    }

    if normal == DVec3::ZERO {
        return None;
    }
    Some((t_enter, normal))
}

fn nearest_face_normal(point: DVec3, bounds: &Aabb) -> DVec3 {
    let mut best_depth = f64::INFINITY;
    let mut normal = DVec3::Z;
    for axis in 0..3 {
        let to_min = point[axis] - bounds.min[axis];
        let to_max = bounds.max[axis] - point[axis];
        if to_min < best_depth {
            best_depth = to_min;
            normal = DVec3::ZERO;
            normal[axis] = -1.0;
        }
        if to_max < best_depth {
            best_depth = to_max;
            normal = DVec3::ZERO;
            normal[axis] = 1.0;
        }
    }
    normal
}
