//! Ray representation.

use dustvol_math::{Point3, Vec3};

use crate::error::{RaytraceError, Result};

/// A ray in 3D space defined by origin and direction.
///
/// The direction is kept exactly as given, not normalized: every distance
/// `s` reported by the intersectors is measured in units of `|direction|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of travel.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// Fails if any component is non-finite or the direction is zero.
    pub fn new(origin: Point3, direction: Vec3) -> Result<Self> {
        if !origin.coords.iter().all(|c| c.is_finite()) {
            return Err(RaytraceError::NonFinite(
                "ray origin",
                [origin.x, origin.y, origin.z],
            ));
        }
        if !direction.iter().all(|c| c.is_finite()) {
            return Err(RaytraceError::NonFinite(
                "ray direction",
                [direction.x, direction.y, direction.z],
            ));
        }
        if direction.norm_squared() == 0.0 {
            return Err(RaytraceError::DegenerateRay);
        }
        Ok(Self { origin, direction })
    }

    /// Create a ray from plain coordinate triples.
    pub fn from_arrays(origin: [f64; 3], direction: [f64; 3]) -> Result<Self> {
        Self::new(Point3::from(origin), Vec3::from(direction))
    }

    /// Evaluate the ray at parameter `s`: `origin + s * direction`.
    #[inline]
    pub fn at(&self, s: f64) -> Point3 {
        self.origin + s * self.direction
    }
}
