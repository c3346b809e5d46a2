//! Vector algebra helpers used by the intersection tests.
//!
//! Every function is pure and returns a fresh value; operands are taken by
//! value since `Vector` is `Copy`.

use crate::Vector;

/// Component-wise sum `a + b`.
#[inline]
pub fn add(a: Vector, b: Vector) -> Vector {
    a + b
}

/// Component-wise difference `a - b`.
#[inline]
pub fn subtract(a: Vector, b: Vector) -> Vector {
    a - b
}

/// Scale every component of `a` by `scalar`.
#[inline]
pub fn multiply(a: Vector, scalar: f64) -> Vector {
    a * scalar
}

/// Standard 3D dot product.
#[inline]
pub fn dot_product(a: Vector, b: Vector) -> f64 {
    a.dot(b)
}

/// Right-handed cross product:
/// `(aY*bZ - aZ*bY, aZ*bX - aX*bZ, aX*bY - aY*bX)`.
#[inline]
pub fn cross_product(a: Vector, b: Vector) -> Vector {
    a.cross(b)
}

/// Euclidean distance between two points. Always >= 0, zero iff `a == b`.
#[inline]
pub fn distance(a: Vector, b: Vector) -> f64 {
    a.distance(b)
}
