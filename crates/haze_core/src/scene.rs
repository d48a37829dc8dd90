//! Scene types for HAZE.
//!
//! The world is immutable once constructed: the renderer only ever reads
//! it. All colors are linear RGB with channels nominally in [0, 1]; the
//! bounds are conventional, not enforced.

use haze_math::DVec3;
use serde::{Deserialize, Serialize};

/// A sphere with a diffuse material color.
///
/// The radius is stored pre-squared; the intersection math only ever
/// needs r².
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Sphere {
    /// Center position in world space
    pub position: DVec3,

    /// Radius squared (non-negative)
    pub squared_radius: f64,

    /// Diffuse material color (linear RGB)
    pub color: DVec3,
}

impl Sphere {
    /// Create a sphere from its center and (unsquared) radius.
    pub fn new(position: DVec3, radius: f64, color: DVec3) -> Self {
        let radius = radius.max(0.0);
        Self {
            position,
            squared_radius: radius * radius,
            color,
        }
    }
}

/// A directional light.
///
/// `direction` is the direction the light travels, and is used as-is:
/// the shading geometry term scales with its length, so callers that
/// want physically meaningful cosine factors should supply unit vectors.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Light {
    /// Direction the light travels (not normalized by the system)
    pub direction: DVec3,

    /// Light color / intensity (linear RGB)
    pub color: DVec3,
}

/// A complete scene: spheres, directional lights, and the atmosphere tint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct World {
    /// All spheres in the scene
    pub spheres: Vec<Sphere>,

    /// All directional lights
    pub lights: Vec<Light>,

    /// Color of the depth-based atmospheric haze
    pub atmosphere_color: DVec3,
}

impl World {
    /// Build the fixed demo scene.
    ///
    /// Three unit spheres staggered in depth, plus two huge spheres whose
    /// near surfaces approximate ground and sky planes at y = ±1, lit by
    /// a warm key light and a cool fill light.
    pub fn demo() -> Self {
        const R: f64 = 100000.0;
        const MAX_C: f64 = 1.0;
        const MIN_C: f64 = 0.1;

        let spheres = vec![
            Sphere::new(
                DVec3::new(-2.0, 0.0, 6.0),
                1.0,
                DVec3::new(MAX_C, MAX_C, MIN_C),
            ),
            Sphere::new(
                DVec3::new(0.0, 0.0, 5.0),
                1.0,
                DVec3::new(MAX_C, MIN_C, MIN_C),
            ),
            Sphere::new(
                DVec3::new(2.0, 0.0, 4.0),
                1.0,
                DVec3::new(2.0 * MIN_C, 4.0 * MIN_C, MAX_C),
            ),
            // Ground: y grows downward in image space, so +y is below
            Sphere::new(
                DVec3::new(0.0, 1.0 + R, 0.0),
                R,
                DVec3::new(MIN_C, MAX_C, MIN_C),
            ),
            // Sky
            Sphere::new(
                DVec3::new(0.0, -1.0 - R, 0.0),
                R,
                DVec3::new(MAX_C, MAX_C, MAX_C),
            ),
        ];

        let lights = vec![
            Light {
                direction: DVec3::new(1.0, 1.0, 2.0),
                color: 0.4 * DVec3::new(1.0, 0.8, 0.5),
            },
            Light {
                direction: DVec3::new(-1.0, -1.0, -2.0),
                color: 0.4 * DVec3::new(0.5, 0.5, 1.0),
            },
        ];

        Self {
            spheres,
            lights,
            atmosphere_color: 0.3 * DVec3::new(0.5, 0.5, 1.0),
        }
    }

    /// Get the number of spheres in the world.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get the number of lights in the world.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_world_shape() {
        let world = World::demo();

        assert_eq!(world.sphere_count(), 5);
        assert_eq!(world.light_count(), 2);
        assert!(world.atmosphere_color.z > world.atmosphere_color.x);

        // The three small spheres are unit spheres: radius 1 squares to 1.
        for sphere in &world.spheres[..3] {
            assert_eq!(sphere.squared_radius, 1.0);
        }
    }

    #[test]
    fn test_demo_world_ground_and_sky() {
        let world = World::demo();

        // The two huge spheres sit opposite each other on the y axis,
        // surfaces at y = 1 and y = -1.
        let ground = &world.spheres[3];
        let sky = &world.spheres[4];
        assert_eq!(ground.position.y - ground.squared_radius.sqrt(), 1.0);
        assert_eq!(sky.position.y + sky.squared_radius.sqrt(), -1.0);
        assert_eq!(sky.color, DVec3::ONE);
    }

    #[test]
    fn test_sphere_new_squares_radius() {
        let sphere = Sphere::new(DVec3::ZERO, 3.0, DVec3::ONE);
        assert_eq!(sphere.squared_radius, 9.0);

        // Negative radii collapse to zero
        let degenerate = Sphere::new(DVec3::ZERO, -2.0, DVec3::ONE);
        assert_eq!(degenerate.squared_radius, 0.0);
    }
}
