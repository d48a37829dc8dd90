// Re-export glam for convenience
pub use glam::*;

// HAZE math types
mod ray;
pub use ray::Ray;
