//! Core ray casting renderer.
//!
//! One primary ray per pixel, nearest-hit query, shade, done. Every
//! pixel is a pure function of its coordinates and the immutable world,
//! so rows are rendered in parallel with rayon.

use haze_core::World;
use haze_math::DVec3;
use rayon::prelude::*;

use crate::{intersect::intersect_world, shade::shade, Camera};

/// Quantize a linear color channel to an 8-bit value.
///
/// Upper-clamped at 255; negative channels clamp to 0 so that loaded
/// scenes with out-of-range lights still produce well-formed output.
#[inline]
pub fn color_to_u8(c: f64) -> u8 {
    (255.0 * c).clamp(0.0, 255.0) as u8
}

/// Compute the color of a single pixel.
pub fn render_pixel(camera: &Camera, world: &World, x: u32, y: u32) -> DVec3 {
    let ray = camera.primary_ray(x, y);
    let intersection = intersect_world(&ray, &world.spheres);
    shade(&intersection, world)
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Linear colors in row-major order
    pub pixels: Vec<DVec3>,
}

impl ImageBuffer {
    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> DVec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Get the pixel at (x, y) quantized to 8-bit channels.
    pub fn get_rgb8(&self, x: u32, y: u32) -> [u8; 3] {
        let color = self.get(x, y);
        [
            color_to_u8(color.x),
            color_to_u8(color.y),
            color_to_u8(color.z),
        ]
    }
}

/// Render the world to an image buffer, one row per rayon task.
pub fn render(camera: &Camera, world: &World) -> ImageBuffer {
    let pixels = (0..camera.image_height)
        .into_par_iter()
        .flat_map_iter(|y| (0..camera.image_width).map(move |x| (x, y)))
        .map(|(x, y)| render_pixel(camera, world, x, y))
        .collect();

    ImageBuffer {
        width: camera.image_width,
        height: camera.image_height,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_u8_bounds() {
        assert_eq!(color_to_u8(0.0), 0);
        assert_eq!(color_to_u8(1.0), 255);
        assert_eq!(color_to_u8(2.0), 255);
        assert_eq!(color_to_u8(-0.5), 0);
    }

    #[test]
    fn test_color_to_u8_monotonic() {
        let mut previous = 0;
        for i in 0..=100 {
            let byte = color_to_u8(i as f64 / 100.0);
            assert!(byte >= previous);
            previous = byte;
        }
    }

    #[test]
    fn test_render_dimensions() {
        let camera = Camera::new(16, 12);
        let image = render(&camera, &World::demo());

        assert_eq!(image.width, 16);
        assert_eq!(image.height, 12);
        assert_eq!(image.pixels.len(), 16 * 12);
    }

    #[test]
    fn test_render_empty_world_is_all_white() {
        let camera = Camera::new(8, 8);
        let world = World::default();
        let image = render(&camera, &world);

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(image.get_rgb8(x, y), [255, 255, 255]);
            }
        }
    }

    #[test]
    fn test_render_demo_center_pixel() {
        // The (400,300) ray travels along (0,0,1), hits the red sphere
        // at distance 4, and quantizes to exactly (255, 92, 163).
        let camera = Camera::default();
        let image = render(&camera, &World::demo());

        assert_eq!(image.get_rgb8(400, 300), [255, 92, 163]);
    }

    #[test]
    fn test_render_demo_horizon_pixel_is_white() {
        // On the horizon row the ray is parallel to the ground and sky
        // planes and, at the left edge, clears all three small spheres.
        let camera = Camera::default();
        let image = render(&camera, &World::demo());

        assert_eq!(image.get_rgb8(0, 300), [255, 255, 255]);
    }

    #[test]
    fn test_render_demo_top_left_is_sky_sphere() {
        // The (0,0) ray points up-left and strikes the huge white sky
        // sphere near y = -1. With a (0,1,0)-ish normal only the cool
        // fill light contributes: red equals green, blue dominates.
        let camera = Camera::default();
        let image = render(&camera, &World::demo());

        let [r, g, b] = image.get_rgb8(0, 0);
        assert_eq!(r, g);
        assert!(b > g);
        assert_ne!([r, g, b], [255, 255, 255]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let camera = Camera::new(64, 48);
        let world = World::demo();

        let first = render(&camera, &world);
        let second = render(&camera, &world);
        assert_eq!(first.pixels, second.pixels);
    }
}
