//! Ray type for ray casting.
//!
//! A ray is defined by an origin point and a direction vector. Every
//! producing call site in HAZE supplies a unit-length direction, so the
//! parameter t of [`Ray::at`] is a world-space distance.

use glam::DVec3;

/// A ray with origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray
    origin: DVec3,
    /// Direction vector (unit length at every call site)
    direction: DVec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the ray's direction vector.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + t * self.direction
    }
}
