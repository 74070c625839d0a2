//! Swept-sphere queries against a per-tick collision scene.
//!
//! The scene is an immutable copy of every collider taken at the start of
//! the movement systems. Boomerangs are not part of it, so flights never
//! collide with each other.

use std::collections::HashSet;

use glam::DVec3;
use hecs::World;

use boomerang_core::components::{Boomerang, Collider, ColliderShape, Position, Target};
use boomerang_core::enums::SurfaceCategory;
use boomerang_core::types::ActorId;
use boomerang_flight::classify::SweepHit;

use crate::ids;

const PARALLEL_EPSILON: f64 = 1e-12;

/// One collider in the scene.
#[derive(Debug, Clone, Copy)]
pub struct SceneCollider {
    pub actor: ActorId,
    pub position: DVec3,
    pub shape: ColliderShape,
    pub category: SurfaceCategory,
    pub is_target: bool,
}

/// Actors a sweep must pass straight through.
#[derive(Debug, Clone, Copy)]
pub struct SweepFilter<'a> {
    pub mover: ActorId,
    pub owner: Option<ActorId>,
    pub ignore: &'a HashSet<ActorId>,
}

impl SweepFilter<'_> {
    fn excludes(&self, actor: ActorId) -> bool {
        actor == self.mover || self.owner == Some(actor) || self.ignore.contains(&actor)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollisionScene {
    colliders: Vec<SceneCollider>,
}

impl CollisionScene {
    /// Copy every live collider out of the world. Destroyed targets and
    /// boomerangs are left out.
    pub fn gather(world: &World) -> Self {
        let mut colliders = Vec::new();
        for (entity, (pos, collider, target, boomerang)) in world
            .query::<(&Position, &Collider, Option<&Target>, Option<&Boomerang>)>()
            .iter()
        {
            if boomerang.is_some() || target.is_some_and(|t| t.destroyed) {
                continue;
            }
            colliders.push(SceneCollider {
                actor: ids::actor_id(entity),
                position: pos.0,
                shape: collider.shape,
                category: collider.category,
                is_target: target.is_some(),
            });
        }
        Self { colliders }
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Nearest contact of a sphere of `radius` moving from `from` to `to`.
    /// Ties go to the collider gathered first.
    pub fn sweep_sphere(
        &self,
        from: DVec3,
        to: DVec3,
        radius: f64,
        filter: &SweepFilter<'_>,
    ) -> Option<SweepHit> {
        let mut best: Option<SweepHit> = None;
        for c in &self.colliders {
            if filter.excludes(c.actor) {
                continue;
            }
            // Targets register on overlap, so touching one at the start counts
            // whichever way the mover is heading.
            let contact = if c.is_target {
                start_overlap(from, radius, c.position, &c.shape)
                    .map(|normal| (0.0, normal))
                    .or_else(|| sweep_shape(from, to, radius, c.position, &c.shape))
            } else {
                sweep_shape(from, to, radius, c.position, &c.shape)
            };
            let Some((toi, normal)) = contact else {
                continue;
            };
            if best.is_some_and(|b| b.time_of_impact <= toi) {
                continue;
            }
            best = Some(SweepHit {
                actor: c.actor,
                category: c.category,
                is_target: c.is_target,
                time_of_impact: toi,
                location: from + (to - from) * toi,
                normal,
            });
        }
        best
    }
}

/// Time of impact in [0, 1] and surface normal for one shape.
fn sweep_shape(
    from: DVec3,
    to: DVec3,
    radius: f64,
    center: DVec3,
    shape: &ColliderShape,
) -> Option<(f64, DVec3)> {
    match *shape {
        ColliderShape::Plane { normal } => sweep_plane(from, to, radius, center, normal),
        ColliderShape::Box { half_extents } => sweep_box(from, to, radius, center, half_extents),
        ColliderShape::Sphere { radius: r } => sweep_sphere_sphere(from, to, radius + r, center),
    }
}

/// Push-out normal when a sphere at `at` already touches the shape.
fn start_overlap(at: DVec3, radius: f64, center: DVec3, shape: &ColliderShape) -> Option<DVec3> {
    match *shape {
        ColliderShape::Plane { normal } => {
            let n = normal.normalize_or_zero();
            let d = (at - center).dot(n) - radius;
            (n != DVec3::ZERO && d < 0.0 && d >= -2.0 * radius).then_some(n)
        }
        ColliderShape::Box { half_extents } => {
            let local = at - center;
            let half = half_extents + DVec3::splat(radius);
            local.abs().cmple(half).all().then(|| least_penetration_normal(local, half))
        }
        ColliderShape::Sphere { radius: r } => {
            let m = at - center;
            let combined = radius + r;
            (m.length_squared() <= combined * combined)
                .then(|| m.try_normalize().unwrap_or(DVec3::Z))
        }
    }
}

/// Face normal of least penetration for a point inside a grown box.
fn least_penetration_normal(local: DVec3, half: DVec3) -> DVec3 {
    let depth = half - local.abs();
    let axis = if depth.x <= depth.y && depth.x <= depth.z {
        0
    } else if depth.y <= depth.z {
        1
    } else {
        2
    };
    let mut normal = DVec3::ZERO;
    normal[axis] = if local[axis] >= 0.0 { 1.0 } else { -1.0 };
    normal
}

fn sweep_plane(
    from: DVec3,
    to: DVec3,
    radius: f64,
    point: DVec3,
    normal: DVec3,
) -> Option<(f64, DVec3)> {
    let n = normal.normalize_or_zero();
    if n == DVec3::ZERO {
        return None;
    }
    let d0 = (from - point).dot(n) - radius;
    let d1 = (to - point).dot(n) - radius;
    let approach = (to - from).dot(n);

    if d0 < 0.0 {
        // Already touching: only report when pushing further in, and only if
        // the centre has not already fallen through.
        let touching = d0 >= -2.0 * radius;
        return (touching && approach < 0.0).then_some((0.0, n));
    }
    if d1 >= 0.0 {
        return None;
    }
    Some((d0 / (d0 - d1), n))
}

/// Sphere against an axis-aligned box, approximated as a ray against the
/// box grown by the radius (slab method).
fn sweep_box(
    from: DVec3,
    to: DVec3,
    radius: f64,
    center: DVec3,
    half_extents: DVec3,
) -> Option<(f64, DVec3)> {
    let half = half_extents + DVec3::splat(radius);
    let local = from - center;
    let delta = to - from;

    if local.abs().cmple(half).all() {
        // Overlapping at the start: only report when moving deeper.
        let normal = least_penetration_normal(local, half);
        return (delta.dot(normal) < 0.0).then_some((0.0, normal));
    }

    let mut t_min = 0.0_f64;
    let mut t_max = 1.0_f64;
    let mut entry_axis = None;
    for axis in 0..3 {
        let (enter, exit) = slab_interval(local[axis], delta[axis], half[axis])?;
        if enter > t_min {
            t_min = enter;
            entry_axis = Some(axis);
        }
        t_max = t_max.min(exit);
        if t_min > t_max {
            return None;
        }
    }

    let axis = entry_axis?;
    let mut normal = DVec3::ZERO;
    normal[axis] = if delta[axis] > 0.0 { -1.0 } else { 1.0 };
    Some((t_min, normal))
}

/// Parametric entry/exit of a moving coordinate through `[-half, half]`.
fn slab_interval(local: f64, dir: f64, half: f64) -> Option<(f64, f64)> {
    if dir.abs() > PARALLEL_EPSILON {
        let t1 = (-half - local) / dir;
        let t2 = (half - local) / dir;
        Some((t1.min(t2), t1.max(t2)))
    } else if local.abs() > half {
        None
    } else {
        Some((f64::NEG_INFINITY, f64::INFINITY))
    }
}

fn sweep_sphere_sphere(
    from: DVec3,
    to: DVec3,
    combined_radius: f64,
    center: DVec3,
) -> Option<(f64, DVec3)> {
    let m = from - center;
    let delta = to - from;
    let c = m.length_squared() - combined_radius * combined_radius;

    if c <= 0.0 {
        let normal = m.try_normalize().unwrap_or(DVec3::Z);
        return (delta.dot(m) < 0.0).then_some((0.0, normal));
    }

    let a = delta.length_squared();
    if a < PARALLEL_EPSILON {
        return None;
    }
    let b = m.dot(delta);
    if b >= 0.0 {
        return None;
    }
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let t = (-b - disc.sqrt()) / a;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    let normal = (m + delta * t).try_normalize().unwrap_or(DVec3::Z);
    Some((t, normal))
}
