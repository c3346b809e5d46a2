//! Quadrilateral primitive.
//!
//! A quad is tested as two triangles sharing the A-C diagonal.

use crate::{error::ensure_finite, GeometryResult, IntersectConfig, Intersectable, QuadEvaluation, Ray, Triangle, Vector};
use serde::{Deserialize, Serialize};

/// A planar quadrilateral with vertices walking its boundary A -> B -> C -> D.
///
/// Only convex, planar quads are handled correctly. The split along the
/// fixed A-C diagonal does not adapt to the shape, so a concave quad whose
/// reflex vertex is B or D, or a non-planar quad, can report hits outside
/// its outline or miss points inside it. There is no general polygon
/// triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub a: Vector,
    pub b: Vector,
    pub c: Vector,
    pub d: Vector,
}

impl Quad {
    /// Create a new quad. No validation is performed.
    pub fn new(a: Vector, b: Vector, c: Vector, d: Vector) -> Self {
        Self { a, b, c, d }
    }

    /// Create a new quad, rejecting non-finite vertices.
    ///
    /// Planarity and convexity are not checked.
    pub fn try_new(a: Vector, b: Vector, c: Vector, d: Vector) -> GeometryResult<Self> {
        ensure_finite("quad vertex", &[a, b, c, d])?;
        Ok(Self::new(a, b, c, d))
    }

    /// The two triangles `(A, B, C)` and `(A, C, D)` this quad is tested as.
    pub fn triangles(&self) -> [Triangle; 2] {
        [
            Triangle::new(self.a, self.b, self.c),
            Triangle::new(self.a, self.c, self.d),
        ]
    }
}

impl Intersectable for Quad {
    fn intersect_with(&self, ray: &Ray, config: &IntersectConfig) -> bool {
        let [first, second] = self.triangles();

        // Both halves are always evaluated before combining
        let (hit_first, hit_second) = match config.quad_evaluation {
            QuadEvaluation::Parallel => rayon::join(
                || first.intersect_with(ray, config),
                || second.intersect_with(ray, config),
            ),
            QuadEvaluation::Sequential => (
                first.intersect_with(ray, config),
                second.intersect_with(ray, config),
            ),
        };

        hit_first || hit_second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SEQUENTIAL: IntersectConfig = IntersectConfig {
        epsilon: IntersectConfig::EPSILON,
        sphere_probe_step: IntersectConfig::SPHERE_PROBE_STEP,
        quad_evaluation: QuadEvaluation::Sequential,
    };

    fn unit_square() -> Quad {
        Quad::new(
            Vector::new(0.0, 0.0, 0.0),
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(1.0, 1.0, 0.0),
            Vector::new(0.0, 1.0, 0.0),
        )
    }

    fn down_at(x: f64, y: f64) -> Ray {
        Ray::new(Vector::new(x, y, 1.0), Vector::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_quad_hit_each_half() {
        let quad = unit_square();

        // Below the diagonal: (A, B, C)
        assert!(quad.intersect(&down_at(0.75, 0.25)));
        // Above the diagonal: (A, C, D)
        assert!(quad.intersect(&down_at(0.25, 0.75)));
        // On the diagonal itself
        assert!(quad.intersect(&down_at(0.5, 0.5)));
    }

    #[test]
    fn test_quad_miss() {
        let quad = unit_square();

        assert!(!quad.intersect(&down_at(1.5, 0.5)));
        assert!(!quad.intersect(&down_at(-0.5, -0.5)));
    }

    #[test]
    fn test_quad_pointing_away() {
        let ray = Ray::new(Vector::new(0.5, 0.5, 1.0), Vector::new(0.0, 0.0, 1.0));
        assert!(!unit_square().intersect(&ray));
    }

    #[test]
    fn test_quad_sequential_matches_parallel() {
        let quad = unit_square();
        for &(x, y) in &[(0.75, 0.25), (0.25, 0.75), (1.5, 0.5), (0.5, 0.5), (-0.1, 0.2)] {
            let ray = down_at(x, y);
            assert_eq!(quad.intersect(&ray), quad.intersect_with(&ray, &SEQUENTIAL));
        }
    }

    #[test]
    fn test_quad_triangles_split_on_ac() {
        let quad = unit_square();
        let [abc, acd] = quad.triangles();

        assert_eq!(abc.vertices(), [quad.a, quad.b, quad.c]);
        assert_eq!(acd.vertices(), [quad.a, quad.c, quad.d]);
    }

    #[test]
    fn test_concave_quad_limitation() {
        // Dart with its reflex vertex at B: the A-C diagonal runs outside it
        let dart = Quad::new(
            Vector::new(2.0, 0.0, 0.0),
            Vector::new(0.5, 0.5, 0.0),
            Vector::new(0.0, 2.0, 0.0),
            Vector::new(0.0, 0.0, 0.0),
        );

        // (1.0, 0.75) lies in the notch, outside the dart's outline
        assert!(dart.intersect(&down_at(1.0, 0.75)));

        // The same outline labelled from the reflex vertex splits correctly
        let relabelled = Quad::new(dart.b, dart.c, dart.d, dart.a);
        assert!(!relabelled.intersect(&down_at(1.0, 0.75)));
        assert!(relabelled.intersect(&down_at(0.3, 0.2)));
    }

    #[test]
    fn test_try_new_rejects_infinite_vertex() {
        let inf = Vector::new(0.0, 0.0, f64::INFINITY);
        assert!(Quad::try_new(Vector::ZERO, Vector::X, inf, Vector::Y).is_err());
        assert!(Quad::try_new(Vector::ZERO, Vector::X, Vector::ONE, Vector::Y).is_ok());
    }

    fn coordinate() -> impl Strategy<Value = f64> {
        -10.0..=10.0f64
    }

    fn arbitrary_vector() -> impl Strategy<Value = Vector> {
        (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| Vector::new(x, y, z))
    }

    proptest! {
        #[test]
        fn quad_hit_iff_one_half_hit(
            a in arbitrary_vector(),
            b in arbitrary_vector(),
            c in arbitrary_vector(),
            d in arbitrary_vector(),
            origin in arbitrary_vector(),
            direction in arbitrary_vector(),
        ) {
            prop_assume!(direction.length_squared() > 1e-4);

            let quad = Quad::new(a, b, c, d);
            let ray = Ray::new(origin, direction);
            let [abc, acd] = quad.triangles();

            let expected = abc.intersect(&ray) || acd.intersect(&ray);
            prop_assert_eq!(quad.intersect(&ray), expected);
            prop_assert_eq!(quad.intersect_with(&ray, &SEQUENTIAL), expected);
        }
    }
}
