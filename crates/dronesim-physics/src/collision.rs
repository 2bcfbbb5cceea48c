//! Overlap tests between body bounding spheres and static geometry.

use glam::Vec3;

use dronesim_core::world::{Aabb, HeightField};

/// Sphere/sphere overlap. Returns the contact point (midway between the
/// surface intersection) when the spheres intersect.
pub fn sphere_sphere(a_center: Vec3, a_radius: f32, b_center: Vec3, b_radius: f32) -> Option<Vec3> {
    let combined = a_radius + b_radius;
    if a_center.distance_squared(b_center) < combined * combined {
        Some((a_center + b_center) * 0.5)
    } else {
        None
    }
}

/// Sphere/AABB overlap. Returns the closest point on the box when the sphere
/// intersects it.
pub fn sphere_aabb(center: Vec3, radius: f32, aabb: &Aabb) -> Option<Vec3> {
    let closest = aabb.closest_point(center);
    if center.distance_squared(closest) < radius * radius {
        Some(closest)
    } else {
        None
    }
}

/// Sphere/heightfield overlap. The sphere collides when its lowest point
/// dips below the terrain height sampled at its horizontal position.
pub fn sphere_heightfield(center: Vec3, radius: f32, field: &HeightField) -> Option<Vec3> {
    let ground = field.height_at(center.x, center.z);
    if center.y - radius < ground {
        Some(Vec3::new(center.x, ground, center.z))
    } else {
        None
    }
}
