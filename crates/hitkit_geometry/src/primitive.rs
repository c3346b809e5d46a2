//! Closed set of primitives and a list of them.

use crate::{IntersectConfig, Intersectable, Quad, Ray, Sphere, Triangle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Any of the supported primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Triangle(Triangle),
    Quad(Quad),
    Sphere(Sphere),
}

impl Intersectable for Primitive {
    fn intersect_with(&self, ray: &Ray, config: &IntersectConfig) -> bool {
        match self {
            Primitive::Triangle(triangle) => triangle.intersect_with(ray, config),
            Primitive::Quad(quad) => quad.intersect_with(ray, config),
            Primitive::Sphere(sphere) => sphere.intersect_with(ray, config),
        }
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

impl From<Quad> for Primitive {
    fn from(quad: Quad) -> Self {
        Primitive::Quad(quad)
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

/// A list of primitives, hit if any member is hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveList {
    primitives: Vec<Primitive>,
}

impl PrimitiveList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the list.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
        log::debug!("primitive list now holds {} primitives", self.primitives.len());
    }

    /// Remove all primitives.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    /// Count how many of `rays` hit at least one primitive.
    ///
    /// Rays are distributed over the rayon thread pool.
    pub fn count_hits(&self, rays: &[Ray], config: &IntersectConfig) -> usize {
        rays.par_iter()
            .filter(|ray| self.intersect_with(ray, config))
            .count()
    }
}

impl FromIterator<Primitive> for PrimitiveList {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

impl Intersectable for PrimitiveList {
    fn intersect_with(&self, ray: &Ray, config: &IntersectConfig) -> bool {
        self.primitives
            .iter()
            .any(|primitive| primitive.intersect_with(ray, config))
    }
}
