//! Viewing and volume settings, read from a TOML file.

use std::path::{Path, PathBuf};

use dustvol_raytrace::{CappedCylinder, RaytraceError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::maps::MapVersion;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file could not be read.
    #[error("read {path:?}: {source}")]
    Read {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`Settings`].
    #[error("parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value lies outside its allowed range.
    #[error("{key} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Dotted key, e.g. `view.fov`.
        key: &'static str,
        /// Offending value.
        value: f64,
        /// Smallest accepted value.
        min: f64,
        /// Largest accepted value.
        max: f64,
    },

    /// Volume dimensions were rejected.
    #[error(transparent)]
    Volume(#[from] RaytraceError),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Largest number of rays (`width * height * n_samples`) one trace may request.
pub const MAX_RAYS: u64 = 1 << 22;

/// All user-controlled settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Observer and view direction.
    pub view: ViewOpts,
    /// Parameters handed to the integration loop.
    pub integration: IntegrationOpts,
    /// Output image size.
    pub image: ImageOpts,
    /// The bounded volume rays are resolved against.
    pub volume: VolumeOpts,
}

/// Observer and view direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOpts {
    /// Horizontal field of view (degrees).
    pub fov: f64,
    /// Longitude of the view direction (degrees).
    pub alpha: f64,
    /// Latitude of the view direction (degrees).
    pub beta: f64,
    /// Observer position (kpc).
    pub position: [f64; 3],
}

impl Default for ViewOpts {
    fn default() -> Self {
        Self {
            fov: 90.0,
            alpha: 0.0,
            beta: 0.0,
            position: [0.0; 3],
        }
    }
}

/// Parameters of the ray-marching loop that consumes the intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationOpts {
    /// Optical depth at which a ray is considered opaque.
    pub tau_max: f64,
    /// Maximum number of integration steps per ray.
    pub n_steps_max: u32,
    /// Rays per pixel.
    pub n_samples: u32,
    /// Scale parameter of the integrand; carried for the integrator only.
    pub xi: f64,
}

impl Default for IntegrationOpts {
    fn default() -> Self {
        Self {
            tau_max: 5.0,
            n_steps_max: 150,
            n_samples: 1,
            xi: 25.0,
        }
    }
}

/// Output image size in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOpts {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Colour scheme index used when the image is rendered.
    pub color: u32,
}

impl Default for ImageOpts {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            color: 0,
        }
    }
}

/// Which map is rendered and the volume it occupies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeOpts {
    /// Map version.
    pub map: MapVersion,
    /// Cylinder radius (kpc); defaults to the map's far distance.
    pub radius: Option<f64>,
    /// Cylinder half-height (kpc).
    pub half_height: f64,
}

impl Default for VolumeOpts {
    fn default() -> Self {
        Self {
            map: MapVersion::default(),
            radius: None,
            half_height: 1.0,
        }
    }
}

fn check_range(key: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    // Negated so that NaN is rejected too
    if !(value >= min && value <= max) {
        return Err(SettingsError::OutOfRange {
            key,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl Settings {
    /// Parse settings from TOML text and validate them.
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("loading {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        check_range("view.fov", self.view.fov, 0.0, 180.0)?;
        check_range("view.alpha", self.view.alpha, -360.0, 360.0)?;
        check_range("view.beta", self.view.beta, -90.0, 90.0)?;
        for (key, c) in ["view.position.x", "view.position.y", "view.position.z"]
            .into_iter()
            .zip(self.view.position)
        {
            check_range(key, c, -f64::MAX, f64::MAX)?;
        }

        let integration = &self.integration;
        check_range("integration.tau_max", integration.tau_max, 0.0, 100.0)?;
        check_range(
            "integration.n_steps_max",
            integration.n_steps_max as f64,
            0.0,
            10000.0,
        )?;
        check_range(
            "integration.n_samples",
            integration.n_samples as f64,
            1.0,
            100.0,
        )?;
        check_range("integration.xi", integration.xi, 0.0, 1000.0)?;

        let image = &self.image;
        check_range("image.width", image.width as f64, 1.0, 8192.0)?;
        check_range("image.height", image.height as f64, 1.0, 8192.0)?;
        let rays = image.width as u64 * image.height as u64 * integration.n_samples as u64;
        check_range(
            "image.width * image.height * integration.n_samples",
            rays as f64,
            1.0,
            MAX_RAYS as f64,
        )?;

        self.volume()?;
        Ok(())
    }

    /// The capped cylinder described by the volume settings.
    pub fn volume(&self) -> Result<CappedCylinder> {
        let radius = self
            .volume
            .radius
            .unwrap_or_else(|| self.volume.map.props().far_distance_kpc());
        Ok(CappedCylinder::new(radius, self.volume.half_height)?)
    }
}
