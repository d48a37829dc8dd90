//! HAZE Renderer - CPU ray casting.
//!
//! A single-bounce ray caster: one primary ray per pixel, nearest sphere
//! hit, Lambertian shading from directional lights plus a depth-keyed
//! atmosphere tint. No reflections, no shadows, no sampling.

mod camera;
mod intersect;
mod ppm;
mod renderer;
mod shade;

pub use camera::Camera;
pub use intersect::{intersect_sphere, intersect_world, Intersection};
pub use ppm::{save_ppm, write_ppm};
pub use renderer::{color_to_u8, render, render_pixel, ImageBuffer};
pub use shade::shade;

/// Re-export math and scene types for convenience
pub use haze_core::{Light, Sphere, World};
pub use haze_math::{DVec3, Ray};
