//! Surfaces and the bounded volume they enclose.

use dustvol_math::{Point3, Vec3};

use crate::error::{RaytraceError, Result};

/// An infinite plane: all points `r` with `normal · r = offset`.
///
/// The normal is not required to be unit length; `offset` is measured in
/// the same scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal.
    pub normal: Vec3,
    /// Right-hand side of `normal · r = offset`.
    pub offset: f64,
}

impl Plane {
    /// Create a plane from normal and offset.
    pub fn new(normal: Vec3, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// The plane `z = offset`, with normal `(0, 0, 1)`.
    pub fn z(offset: f64) -> Self {
        Self::new(Vec3::z(), offset)
    }

    /// Signed residual `normal · p - offset` (zero on the plane).
    pub fn residual(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) - self.offset
    }
}

/// A finite cylinder around the z axis, closed by caps at `z = ±half_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CappedCylinder {
    /// Radius of the lateral surface.
    pub radius: f64,
    /// Distance from the midplane to each cap.
    pub half_height: f64,
}

impl CappedCylinder {
    /// Create a capped cylinder. Both dimensions must be finite and positive.
    pub fn new(radius: f64, half_height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(radius) || !valid(half_height) {
            return Err(RaytraceError::InvalidVolume {
                radius,
                half_height,
            });
        }
        Ok(Self {
            radius,
            half_height,
        })
    }

    /// The plane holding the top cap.
    pub fn top_cap(&self) -> Plane {
        Plane::z(self.half_height)
    }

    /// The plane holding the bottom cap.
    pub fn bottom_cap(&self) -> Plane {
        Plane::z(-self.half_height)
    }

    /// Whether `x² + y² ≤ r²`, i.e. the point projects into the cap disk.
    #[inline]
    pub fn within_disk(&self, p: &Point3) -> bool {
        p.x * p.x + p.y * p.y <= self.radius * self.radius
    }

    /// Whether `-h ≤ z ≤ h`.
    #[inline]
    pub fn within_height(&self, p: &Point3) -> bool {
        p.z >= -self.half_height && p.z <= self.half_height
    }

    /// Whether the point lies in the closed solid.
    pub fn contains(&self, p: &Point3) -> bool {
        self.within_disk(p) && self.within_height(p)
    }
}
