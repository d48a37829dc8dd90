//! HAZE Core - Scene model and scene loading.
//!
//! This crate provides:
//!
//! - **Scene types**: `Sphere`, `Light`, `World`
//! - **Scene loading**: JSON world descriptions via serde
//!
//! # Example
//!
//! ```ignore
//! use haze_core::load_world;
//!
//! let world = load_world("scene.json")?;
//! println!("Loaded {} spheres", world.spheres.len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_world, load_world_from_str, LoadError};
pub use scene::{Light, Sphere, World};
