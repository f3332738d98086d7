//! Pinhole camera producing one primary ray per pixel sample.

use dustvol_math::{Point3, Transform, Vec3};
use dustvol_raytrace::{Ray, RaytraceError};

use crate::settings::Settings;

/// A pinhole camera looking along longitude `alpha`, latitude `beta`.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Point3,
    frame: Transform,
    /// `tan(fov / 2)`: lateral extent of the image plane at unit distance.
    half_width: f64,
    width: u32,
    height: u32,
    n_samples: u32,
}

/// A camera ray tagged with the pixel and sub-sample it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct PixelRay {
    /// Pixel column.
    pub i: u32,
    /// Pixel row, counted from the top.
    pub j: u32,
    /// Sub-sample index within the pixel.
    pub sample: u32,
    /// The ray itself.
    pub ray: Ray,
}

impl Camera {
    /// Build the camera described by `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        let view = &settings.view;
        // Local frame: forward +x, left +y, up +z. Tilt up by beta, then turn by alpha.
        let frame = Transform::rotation_z(view.alpha.to_radians())
            .then(&Transform::rotation_y(-view.beta.to_radians()));
        Self {
            origin: Point3::from(view.position),
            frame,
            half_width: (0.5 * view.fov.to_radians()).tan(),
            width: settings.image.width,
            height: settings.image.height,
            n_samples: settings.integration.n_samples.max(1),
        }
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        self.frame.apply_vec(&Vec3::x())
    }

    /// Unit vector towards the right edge of the image.
    pub fn right(&self) -> Vec3 {
        self.frame.apply_vec(&-Vec3::y())
    }

    /// Unit vector towards the top edge of the image.
    pub fn up(&self) -> Vec3 {
        self.frame.apply_vec(&Vec3::z())
    }

    /// Total number of rays in one image.
    pub fn ray_count(&self) -> usize {
        self.width as usize * self.height as usize * self.n_samples as usize
    }

    /// The ray through pixel `(i, j)` for sub-sample `sample`.
    ///
    /// Sub-samples are spread along the pixel diagonal; a single sample
    /// goes through the pixel centre.
    pub fn ray(&self, i: u32, j: u32, sample: u32) -> Result<Ray, RaytraceError> {
        let o = (sample as f64 + 0.5) / self.n_samples as f64;
        let u = 2.0 * (i as f64 + o) / self.width as f64 - 1.0;
        let v = 1.0 - 2.0 * (j as f64 + o) / self.height as f64;
        let aspect = self.height as f64 / self.width as f64;

        let direction =
            self.forward() + self.half_width * (u * self.right() + v * aspect * self.up());
        Ray::new(self.origin, direction)
    }

    /// The ray at flat index `idx`, counting sub-samples fastest and rows
    /// slowest, so `0..ray_count()` walks the image row by row.
    pub fn pixel_ray(&self, idx: usize) -> Result<PixelRay, RaytraceError> {
        let n = self.n_samples as usize;
        let w = self.width as usize;
        let sample = (idx % n) as u32;
        let i = (idx / n % w) as u32;
        let j = (idx / n / w) as u32;
        Ok(PixelRay {
            i,
            j,
            sample,
            ray: self.ray(i, j, sample)?,
        })
    }
}
