// Re-export glam for convenience
pub use glam::*;

/// A 3-component vector of f64 coordinates.
pub type Vector = DVec3;

// hitkit math types
mod ray;
mod vector;
pub use ray::{Ray, RayError};
pub use vector::{add, cross_product, distance, dot_product, multiply, subtract};
