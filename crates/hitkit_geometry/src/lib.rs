//! hitkit geometry - boolean ray/primitive intersection.
//!
//! Answers a single question per query: does the forward half-line of a
//! ray strike the primitive? No hit distance, point or normal is reported.
//!
//! Supported primitives:
//! - [`Triangle`] via Möller-Trumbore
//! - [`Quad`] as two triangles split along the A-C diagonal
//! - [`Sphere`] via the ray/sphere quadratic discriminant

mod config;
mod error;
mod intersectable;
mod primitive;
mod quad;
mod sphere;
mod triangle;

pub use config::{IntersectConfig, QuadEvaluation};
pub use error::{GeometryError, GeometryResult};
pub use intersectable::Intersectable;
pub use primitive::{Primitive, PrimitiveList};
pub use quad::Quad;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export the math types from hitkit_math
pub use hitkit_math::{Ray, RayError, Vector};
