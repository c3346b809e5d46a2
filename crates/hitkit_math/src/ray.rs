use crate::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by [`Ray::try_new`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RayError {
    #[error("ray {0} is not finite")]
    NonFinite(&'static str),

    #[error("ray direction has zero length")]
    ZeroDirection,
}

/// A ray in 3D space with an origin and a direction.
///
/// Represents the half-line `origin + t * direction` for `t >= 0`.
/// The direction does not need to be normalized, but a zero-length
/// direction is meaningless for the intersection tests.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vector,
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray. No validation is performed.
    pub fn new(origin: Vector, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Create a new ray, rejecting non-finite input and a zero-length direction.
    pub fn try_new(origin: Vector, direction: Vector) -> Result<Self, RayError> {
        if !origin.is_finite() {
            return Err(RayError::NonFinite("origin"));
        }
        if !direction.is_finite() {
            return Err(RayError::NonFinite("direction"));
        }
        if direction.length_squared() == 0.0 {
            log::trace!("rejecting ray at {origin} with zero-length direction");
            return Err(RayError::ZeroDirection);
        }

        Ok(Self::new(origin, direction))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vector {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> Vector {
        self.origin + self.direction * t
    }
}
