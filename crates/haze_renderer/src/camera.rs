//! Pinhole camera for primary ray generation.

use haze_math::{DVec3, Ray};

/// A fixed pinhole camera at the origin looking down +z.
///
/// The image plane sits at distance `height / 2` along the forward
/// axis, which gives a 90 degree vertical field of view. y grows
/// downward, matching image scan order.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
}

impl Camera {
    /// Create a camera for the given image resolution.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
        }
    }

    /// Generate the primary ray through pixel (x, y).
    ///
    /// The unnormalized direction `(x - w/2, y - h/2, h/2)` always has a
    /// nonzero forward component, so normalization is well-defined for
    /// every pixel.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let direction = DVec3::new(
            x as f64 - self.image_width as f64 / 2.0,
            y as f64 - self.image_height as f64 / 2.0,
            self.image_height as f64 / 2.0,
        );
        Ray::new(DVec3::ZERO, direction.normalize())
    }
}

impl Default for Camera {
    /// The reference 800x600 resolution.
    fn default() -> Self {
        Self::new(800, 600)
    }
}
