//! Scene file loading.
//!
//! Worlds are described as JSON documents matching the serde shape of
//! [`World`]: vectors serialize as three-element arrays.
//!
//! ```json
//! {
//!   "spheres": [
//!     { "position": [0.0, 0.0, 5.0], "squared_radius": 1.0, "color": [1.0, 0.1, 0.1] }
//!   ],
//!   "lights": [
//!     { "direction": [1.0, 1.0, 2.0], "color": [0.4, 0.32, 0.2] }
//!   ],
//!   "atmosphere_color": [0.15, 0.15, 0.3]
//! }
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::World;

/// Errors that can occur while loading a world description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a world description from a JSON file.
pub fn load_world<P: AsRef<Path>>(path: P) -> LoadResult<World> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let world = load_world_from_str(&text)?;
    log::info!(
        "Loaded world from {}: {} spheres, {} lights",
        path.display(),
        world.sphere_count(),
        world.light_count()
    );
    Ok(world)
}

/// Parse a world description from a JSON string.
pub fn load_world_from_str(text: &str) -> LoadResult<World> {
    Ok(serde_json::from_str(text)?)
}
