//! Ray-sphere intersection.

use haze_core::Sphere;
use haze_math::{DVec3, Ray};

/// Record of a ray-sphere intersection.
///
/// `distance` is the single source of truth for whether anything was
/// hit: finite means hit, infinite means miss. Minimum-distance scans
/// use ordinary `<`, so a miss never wins against any finite distance.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    /// World-space hit point
    pub position: DVec3,
    /// Unit-length outward surface normal
    pub normal: DVec3,
    /// Material color of the hit surface
    pub color: DVec3,
    /// Distance from the ray origin, or +inf for a miss
    pub distance: f64,
}

impl Intersection {
    /// The canonical "no hit" record.
    pub fn none() -> Self {
        Self {
            position: DVec3::ZERO,
            normal: DVec3::ZERO,
            color: DVec3::ONE,
            distance: f64::INFINITY,
        }
    }

    /// Whether this record represents an actual hit.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.distance.is_finite()
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self::none()
    }
}

/// Test a ray against a single sphere.
///
/// The ray direction must be unit length so that the projection
/// `c = direction . offset` is the distance to the sphere's closest
/// approach. Two early-outs:
///
/// - `c < 0`: the center projects behind the ray origin. This also
///   rejects rays starting inside a sphere whose center lies behind
///   them; that simplification is part of the rendering contract.
/// - negative discriminant: the ray passes outside the sphere.
///
/// Only the near root `c - sqrt(discriminant)` is ever reported.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Intersection {
    let offset = sphere.position - ray.origin();
    let c = ray.direction().dot(offset);
    if c < 0.0 {
        return Intersection::none();
    }

    let discriminant = c * c - offset.length_squared() + sphere.squared_radius;
    if discriminant < 0.0 {
        return Intersection::none();
    }

    let distance = c - discriminant.sqrt();
    let position = ray.at(distance);

    Intersection {
        position,
        // The hit point never coincides with the center, so this is
        // always a nonzero vector.
        normal: (position - sphere.position).normalize(),
        color: sphere.color,
        distance,
    }
}

/// Find the nearest intersection of a ray with a collection of spheres.
///
/// Seeded with the no-hit record, so an empty slice yields a
/// well-defined miss. Ties go to the first sphere seen.
pub fn intersect_world(ray: &Ray, spheres: &[Sphere]) -> Intersection {
    let mut nearest = Intersection::none();
    for sphere in spheres {
        let candidate = intersect_sphere(ray, sphere);
        if candidate.distance < nearest.distance {
            nearest = candidate;
        }
    }
    nearest
}
