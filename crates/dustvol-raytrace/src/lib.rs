#![warn(missing_docs)]

//! Ray entry and exit against a capped cylindrical volume.
//!
//! Before a ray marcher can integrate a density field along a camera ray it
//! needs the parametric interval the ray spends inside the bounded volume.
//! This crate computes the candidate boundary crossings of a ray with a
//! cylinder of radius `r` around the z axis, capped at `z = ±h`.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and (unnormalized) direction
//! - [`Plane`], [`CappedCylinder`] - The bounding surfaces and the solid
//! - [`intersect`] - Raw ray-plane and ray-cylinder intersection
//! - [`endpoints`] - Domain-checked crossings and the entry/exit interval
//!
//! Every function is pure and allocation-free; parallelize over rays at the
//! call site.
//!
//! # Example
//!
//! ```
//! use dustvol_raytrace::{ray_endpoints, CappedCylinder, Endpoints, Ray};
//!
//! let volume = CappedCylinder::new(1.0, 0.5).unwrap();
//! let ray = Ray::from_arrays([-1.5, 0.0, 0.0], [1.0, 0.0, 0.1]).unwrap();
//!
//! assert_eq!(ray_endpoints(&volume, &ray), [-1.0, -5.0, 0.5, 2.5]);
//!
//! let interval = Endpoints::resolve(&volume, &ray).interval().unwrap();
//! assert_eq!((interval.entry, interval.exit), (0.5, 2.5));
//! ```

mod error;
mod ray;
mod volume;
pub mod endpoints;
pub mod intersect;

pub use endpoints::{min_positive_crossing, ray_endpoints, Crossing, Endpoints, Interval, Miss};
pub use error::{RaytraceError, Result};
pub use ray::Ray;
pub use volume::{CappedCylinder, Plane};
