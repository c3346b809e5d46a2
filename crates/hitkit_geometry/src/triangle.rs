//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{error::ensure_finite, GeometryResult, IntersectConfig, Intersectable, Ray, Vector};
use hitkit_math::{cross_product, dot_product, subtract};
use serde::{Deserialize, Serialize};

/// A triangle given by three vertices.
///
/// Winding does not matter: back faces are hit just like front faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vector,
    pub b: Vector,
    pub c: Vector,
}

impl Triangle {
    /// Create a new triangle from three vertices. No validation is performed.
    pub fn new(a: Vector, b: Vector, c: Vector) -> Self {
        Self { a, b, c }
    }

    /// Create a new triangle, rejecting non-finite vertices.
    pub fn try_new(a: Vector, b: Vector, c: Vector) -> GeometryResult<Self> {
        ensure_finite("triangle vertex", &[a, b, c])?;
        Ok(Self::new(a, b, c))
    }

    /// The vertices in construction order.
    pub fn vertices(&self) -> [Vector; 3] {
        [self.a, self.b, self.c]
    }
}

impl Intersectable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn intersect_with(&self, ray: &Ray, config: &IntersectConfig) -> bool {
        let epsilon = config.epsilon;

        let edge1 = subtract(self.b, self.a);
        let edge2 = subtract(self.c, self.a);

        let p = cross_product(ray.direction, edge2);
        let det = dot_product(edge1, p);

        // Ray is parallel to the triangle, or the triangle is degenerate
        if det > -epsilon && det < epsilon {
            log::trace!("ray {:?} is edge-on to triangle {:?} (det = {det})", ray, self);
            return false;
        }

        let f = 1.0 / det;
        let s = subtract(ray.origin, self.a);
        let u = f * dot_product(s, p);

        if !(0.0..=1.0).contains(&u) {
            return false;
        }

        let q = cross_product(s, edge1);
        let v = f * dot_product(ray.direction, q);

        if v < 0.0 || u + v > 1.0 {
            return false;
        }

        // Only count hits strictly in front of the origin
        let t = f * dot_product(edge2, q);
        t > epsilon
    }
}
