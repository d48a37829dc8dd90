//! HAZE command line renderer.
//!
//! Usage: `haze [SCENE.json] [OUTPUT.ppm]`
//!
//! With no arguments this renders the built-in demo scene at 800x600 to
//! `image.ppm`. Output is deterministic: the same scene always produces
//! the same file.

use anyhow::{Context, Result};
use haze_core::{load_world, World};
use haze_renderer::{render, save_ppm, Camera};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scene_path = args.next();
    let output_path = args.next().unwrap_or_else(|| "image.ppm".to_string());

    let world = match &scene_path {
        Some(path) => load_world(path).with_context(|| format!("loading scene {path}"))?,
        None => World::demo(),
    };

    let camera = Camera::default();
    println!(
        "Rendering {} spheres at {}x{}",
        world.sphere_count(),
        camera.image_width,
        camera.image_height
    );

    let start = Instant::now();
    let image = render(&camera, &world);
    log::info!("Rendered in {:?}", start.elapsed());

    println!("Saving image to {output_path}");
    save_ppm(&output_path, &image).with_context(|| format!("writing {output_path}"))?;

    Ok(())
}
