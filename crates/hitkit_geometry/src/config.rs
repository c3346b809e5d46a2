//! Tolerances and evaluation strategy for intersection queries.

use serde::{Deserialize, Serialize};

/// How the two halves of a [`Quad`](crate::Quad) are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuadEvaluation {
    /// Test both triangles as a rayon fork-join pair.
    #[default]
    Parallel,
    /// Test both triangles one after the other on the calling thread.
    Sequential,
}

/// Intersection configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectConfig {
    /// Guard for the triangle determinant and the forward `t` check
    pub epsilon: f64,
    /// Scale applied to the ray direction when probing whether a sphere lies ahead
    pub sphere_probe_step: f64,
    /// Strategy used for quads
    pub quad_evaluation: QuadEvaluation,
}

impl IntersectConfig {
    /// Default triangle tolerance.
    pub const EPSILON: f64 = 1e-7;

    /// Default sphere directionality probe step.
    pub const SPHERE_PROBE_STEP: f64 = 0.01;
}

impl Default for IntersectConfig {
    fn default() -> Self {
        Self {
            epsilon: Self::EPSILON,
            sphere_probe_step: Self::SPHERE_PROBE_STEP,
            quad_evaluation: QuadEvaluation::Parallel,
        }
    }
}
