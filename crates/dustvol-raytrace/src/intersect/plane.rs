//! Ray-plane intersection (closed-form).

use dustvol_math::Tolerance;

use crate::volume::Plane;
use crate::Ray;

/// Distance `s` at which `origin + s * direction` meets the plane.
///
/// Returns NaN when `normal · direction < eps`. The test is one-sided: a ray
/// heading against the normal is rejected just like a parallel one, so only
/// crossings in the direction of the normal are ever reported.
pub fn intersect_plane(plane: &Plane, ray: &Ray, eps: f64) -> f64 {
    let denom = plane.normal.dot(&ray.direction);

    if denom < eps {
        return f64::NAN;
    }

    (plane.offset - plane.normal.dot(&ray.origin.coords)) / denom
}

/// [`intersect_plane`] with the default tolerance of `1e-10`.
pub fn intersect_plane_default(plane: &Plane, ray: &Ray) -> f64 {
    intersect_plane(plane, ray, Tolerance::DEFAULT.plane_parallel)
}
