//! Ray-surface intersection primitives.
//!
//! Each intersector returns raw ray parameters `s` with NaN standing for
//! "no real crossing". They do not clip to the positive half-line and do
//! not sort; the resolver in [`crate::endpoints`] decides what is valid.

mod cylinder;
mod plane;

pub use cylinder::intersect_cylinder;
pub use plane::{intersect_plane, intersect_plane_default};
