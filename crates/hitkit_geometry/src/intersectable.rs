//! Intersectable trait shared by every primitive.

use crate::{IntersectConfig, Ray};

/// Trait for objects that can be tested against a ray.
///
/// Must be thread-safe so quads can fan their halves out to rayon and
/// callers can test primitives from parallel iterators.
pub trait Intersectable: Send + Sync {
    /// Test if the forward half-line of `ray` strikes this object, using
    /// the tolerances in `config`.
    fn intersect_with(&self, ray: &Ray, config: &IntersectConfig) -> bool;

    /// Test if the forward half-line of `ray` strikes this object with the
    /// default configuration.
    fn intersect(&self, ray: &Ray) -> bool {
        self.intersect_with(ray, &IntersectConfig::default())
    }
}

impl<T: Intersectable + ?Sized> Intersectable for Box<T> {
    fn intersect_with(&self, ray: &Ray, config: &IntersectConfig) -> bool {
        (**self).intersect_with(ray, config)
    }
}

impl<T: Intersectable + ?Sized> Intersectable for &T {
    fn intersect_with(&self, ray: &Ray, config: &IntersectConfig) -> bool {
        (**self).intersect_with(ray, config)
    }
}
