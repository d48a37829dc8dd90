//! Shading: Lambertian directional lights plus a depth haze.

use haze_core::{Light, World};
use haze_math::DVec3;

use crate::intersect::Intersection;

/// Flat background color for rays that hit nothing.
const SKY: DVec3 = DVec3::ONE;

/// Compute the final linear color for an intersection.
///
/// Misses shade to flat white. Hits start from the atmosphere tint and
/// accumulate one Lambertian term per light. Channels are not clamped
/// here; that happens at quantization.
pub fn shade(intersection: &Intersection, world: &World) -> DVec3 {
    if !intersection.is_hit() {
        return SKY;
    }

    let mut color = shade_atmosphere(intersection, world.atmosphere_color);
    for light in &world.lights {
        color += shade_light(intersection, light);
    }
    color
}

/// Contribution of a single directional light.
///
/// The geometry term is the clamped cosine against the light's travel
/// direction; lights behind the surface contribute zero. The light
/// direction is used unnormalized, so its length scales the term.
fn shade_light(intersection: &Intersection, light: &Light) -> DVec3 {
    let geometry = (-light.direction.dot(intersection.normal)).max(0.0);
    geometry * (intersection.color * light.color)
}

/// Depth-keyed haze tint, growing with the square root of the hit
/// point's z coordinate.
///
/// z is clamped to zero before the square root: hits behind the viewing
/// plane would otherwise produce NaN channels. The demo scene never
/// yields a negative z, so the clamp changes nothing there.
fn shade_atmosphere(intersection: &Intersection, atmosphere_color: DVec3) -> DVec3 {
    intersection.position.z.max(0.0).sqrt() * atmosphere_color
}
