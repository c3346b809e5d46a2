//! Errors from the checked primitive constructors.
//!
//! Intersection queries themselves never fail; degenerate geometry simply
//! reports no hit.

use hitkit_math::RayError;
use thiserror::Error;

/// Errors that can occur when validating geometry.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("{what} is not finite")]
    NonFinite { what: &'static str },

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error(transparent)]
    Ray(#[from] RayError),
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Fail with [`GeometryError::NonFinite`] unless every vertex is finite.
pub(crate) fn ensure_finite(what: &'static str, points: &[hitkit_math::Vector]) -> GeometryResult<()> {
    if points.iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { what })
    }
}
