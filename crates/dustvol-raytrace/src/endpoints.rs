//! Boundary crossings of a ray with a capped cylinder.
//!
//! The solid is bounded by three surfaces: the top cap, the bottom cap and
//! the lateral wall. Each surface's raw crossing is only a boundary crossing
//! of the solid if it also lies inside the complementary bound: a cap
//! crossing must fall within the cap disk, a wall crossing between the caps.
//!
//! Two layers are exposed:
//!
//! - [`ray_endpoints`] returns the raw `[top, bottom, minus, plus]` array that
//!   the integration loop consumes. NaN marks "no real root" and `-1` marks
//!   "root outside the complementary bound"; crossings behind the origin keep
//!   their raw (non-positive) value.
//! - [`Endpoints`] carries the same four results as tagged [`Crossing`]s so
//!   callers never do arithmetic on a sentinel.

use serde::Serialize;

use crate::intersect::{intersect_cylinder, intersect_plane_default};
use crate::volume::CappedCylinder;
use crate::Ray;

/// Raw value written over a crossing that fails its bound check.
pub const OUT_OF_BOUNDS: f64 = -1.0;

/// Why a candidate surface yields no valid crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Miss {
    /// The surface has no real root (raw NaN). For caps this includes rays
    /// that run parallel to or against the cap normal.
    NoRoot,
    /// The root is at or behind the ray origin; holds the raw parameter.
    Behind(f64),
    /// The root lies outside the complementary bound (raw `-1`).
    OutOfBounds,
}

/// One candidate boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
    /// A forward crossing of the solid's boundary at ray parameter `s > 0`.
    Valid(f64),
    /// No crossing of the solid through this surface.
    Invalid(Miss),
}

impl Crossing {
    /// The ray parameter if this crossing is valid.
    pub fn distance(&self) -> Option<f64> {
        match *self {
            Crossing::Valid(s) => Some(s),
            Crossing::Invalid(_) => None,
        }
    }

    /// Whether this is a valid crossing.
    pub fn is_valid(&self) -> bool {
        matches!(self, Crossing::Valid(_))
    }

    /// The sentinel-encoded value, as found in [`ray_endpoints`] output.
    pub fn raw(&self) -> f64 {
        match *self {
            Crossing::Valid(s) => s,
            Crossing::Invalid(Miss::NoRoot) => f64::NAN,
            Crossing::Invalid(Miss::Behind(s)) => s,
            Crossing::Invalid(Miss::OutOfBounds) => OUT_OF_BOUNDS,
        }
    }
}

/// Gate a raw root: only strictly positive roots are checked against the
/// bound; NaN and non-positive values pass through untouched.
fn gate(s: f64, in_bounds: impl FnOnce(f64) -> bool) -> Crossing {
    if s.is_nan() {
        Crossing::Invalid(Miss::NoRoot)
    } else if s <= 0.0 {
        Crossing::Invalid(Miss::Behind(s))
    } else if in_bounds(s) {
        Crossing::Valid(s)
    } else {
        Crossing::Invalid(Miss::OutOfBounds)
    }
}

/// The four candidate crossings of a ray with a capped cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoints {
    /// Crossing of the cap at `z = +h`.
    pub top: Crossing,
    /// Crossing of the cap at `z = -h`.
    pub bottom: Crossing,
    /// Lateral root taken with `-√disc`.
    pub minus: Crossing,
    /// Lateral root taken with `+√disc`.
    pub plus: Crossing,
    /// Whether the ray origin lies inside the closed solid.
    pub origin_inside: bool,
}

impl Endpoints {
    /// Intersect `ray` with each bounding surface of `volume` and classify
    /// every candidate.
    pub fn resolve(volume: &CappedCylinder, ray: &Ray) -> Self {
        let point = |s: f64| ray.at(s);

        let s_top = intersect_plane_default(&volume.top_cap(), ray);
        let top = gate(s_top, |s| volume.within_disk(&point(s)));

        let s_bottom = intersect_plane_default(&volume.bottom_cap(), ray);
        let bottom = gate(s_bottom, |s| volume.within_disk(&point(s)));

        let (s_plus, s_minus) = intersect_cylinder(volume.radius, ray);
        let plus = gate(s_plus, |s| volume.within_height(&point(s)));
        let minus = gate(s_minus, |s| volume.within_height(&point(s)));

        Self {
            top,
            bottom,
            minus,
            plus,
            origin_inside: volume.contains(&ray.origin),
        }
    }

    /// Crossings in the fixed order `[top, bottom, minus, plus]`.
    pub fn crossings(&self) -> [Crossing; 4] {
        [self.top, self.bottom, self.minus, self.plus]
    }

    /// Sentinel-encoded values in the order `[top, bottom, minus, plus]`.
    pub fn raw(&self) -> [f64; 4] {
        self.crossings().map(|c| c.raw())
    }

    /// Ray parameters of the valid crossings, in candidate order.
    pub fn valid(&self) -> impl Iterator<Item = f64> {
        self.crossings().into_iter().filter_map(|c| c.distance())
    }

    /// The parametric interval the ray spends inside the volume.
    ///
    /// Entry is the nearest valid crossing and exit the farthest. A ray
    /// starting inside the volume enters at `0`. A single valid crossing
    /// from outside (possible when a cap is only crossed against its
    /// normal, which the cap test rejects) gives a zero-length interval.
    pub fn interval(&self) -> Option<Interval> {
        let (lo, hi) = self.valid().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s), hi.max(s))
        });
        if hi < lo {
            return None;
        }
        let entry = if self.origin_inside { 0.0 } else { lo };
        Some(Interval { entry, exit: hi })
    }
}

/// Entry and exit ray parameters of a ray through the volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    /// Ray parameter at which the ray enters the volume.
    pub entry: f64,
    /// Ray parameter at which the ray leaves the volume.
    pub exit: f64,
}

impl Interval {
    /// Parametric length `exit - entry`.
    pub fn length(&self) -> f64 {
        self.exit - self.entry
    }
}

/// Raw crossings of `ray` with `volume`, ordered `[top, bottom, minus, plus]`.
///
/// Entries are either a positive distance to a boundary crossing, NaN (no
/// real root), `-1` (root outside the complementary bound), or a
/// non-positive raw root behind the origin. Only positive entries are valid.
pub fn ray_endpoints(volume: &CappedCylinder, ray: &Ray) -> [f64; 4] {
    Endpoints::resolve(volume, ray).raw()
}

/// Smallest valid crossing in a raw endpoints array.
///
/// NaN, the `-1` sentinel and any other non-positive value are skipped.
pub fn min_positive_crossing(raw: &[f64; 4]) -> Option<f64> {
    raw.iter()
        .copied()
        .filter(|s| *s > 0.0)
        .min_by(|a, b| a.total_cmp(b))
}
