//! Error types for ray and volume construction.
//!
//! Intersection routines never return these: a missing or rejected crossing
//! is encoded in the numeric result. Errors only guard the inputs.

use thiserror::Error;

/// Errors raised when building rays or volumes from untrusted values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RaytraceError {
    /// Ray direction has zero length.
    #[error("ray direction is the zero vector")]
    DegenerateRay,

    /// A coordinate is NaN or infinite.
    #[error("non-finite {0}: {1:?}")]
    NonFinite(&'static str, [f64; 3]),

    /// Volume dimensions are not finite and positive.
    #[error("invalid volume: radius={radius}, half_height={half_height}")]
    InvalidVolume {
        /// Requested radius.
        radius: f64,
        /// Requested half-height.
        half_height: f64,
    },
}

/// Result type for raytrace operations.
pub type Result<T> = std::result::Result<T, RaytraceError>;
