//! Ray-cylinder intersection (quadratic equation).

use crate::Ray;

/// Intersect a ray with the infinite cylinder `x² + y² = radius²`.
///
/// Returns the two roots of `|P_xy(s)|² = r²` as `(plus, minus)`, where
/// `plus` takes `+√disc`. They are not sorted by value: for a direction with
/// positive leading coefficient `plus >= minus`.
///
/// Both roots are NaN when the ray misses (negative discriminant) or when it
/// runs parallel to the axis, where the quadratic degenerates (`a = 0`).
pub fn intersect_cylinder(radius: f64, ray: &Ray) -> (f64, f64) {
    let (x0, dx) = (&ray.origin, &ray.direction);

    let a = dx.x * dx.x + dx.y * dx.y;
    let b = 2.0 * (x0.x * dx.x + x0.y * dx.y);
    let c = x0.x * x0.x + x0.y * x0.y - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return (f64::NAN, f64::NAN);
    }

    // Parallel to the axis: the ray stays on (or off) the lateral surface
    let k = 1.0 / (2.0 * a);
    if !k.is_finite() {
        return (f64::NAN, f64::NAN);
    }

    let disc_term = k * discriminant.sqrt();
    let b_term = -k * b;

    (b_term + disc_term, b_term - disc_term)
}
