//! Resolve a full camera image against the volume.

use dustvol_raytrace::{CappedCylinder, Endpoints, Interval, RaytraceError};
use rayon::prelude::*;
use serde::Serialize;

use crate::camera::{Camera, PixelRay};
use crate::settings::Settings;

/// Resolution of a single camera ray.
#[derive(Debug, Clone, Serialize)]
pub struct RayRecord {
    /// Pixel column.
    pub i: u32,
    /// Pixel row.
    pub j: u32,
    /// Sub-sample within the pixel.
    pub sample: u32,
    /// Raw `[top, bottom, minus, plus]` crossings; NaN is written as `null`.
    pub raw: [f64; 4],
    /// Parametric interval inside the volume, if any.
    pub interval: Option<Interval>,
    /// Integration step length over the interval.
    pub step: Option<f64>,
}

/// Aggregate over all rays of an image.
#[derive(Debug, Clone, Serialize)]
pub struct TraceSummary {
    /// Rays traced.
    pub rays: usize,
    /// Rays with a non-empty interval.
    pub hits: usize,
    /// Mean interval length over hitting rays.
    pub mean_length: f64,
    /// Mean step length over hitting rays.
    pub mean_step: f64,
    /// Optical depth at which the integrator stops a ray.
    pub tau_max: f64,
}

fn resolve(volume: &CappedCylinder, n_steps: u32, pr: &PixelRay) -> RayRecord {
    let endpoints = Endpoints::resolve(volume, &pr.ray);
    let interval = endpoints.interval().filter(|iv| iv.length() > 0.0);
    let step = interval
        .filter(|_| n_steps > 0)
        .map(|iv| iv.length() / n_steps as f64);
    RayRecord {
        i: pr.i,
        j: pr.j,
        sample: pr.sample,
        raw: endpoints.raw(),
        interval,
        step,
    }
}

/// Resolve every camera ray of `settings` against its volume, in parallel.
pub fn trace(settings: &Settings) -> anyhow::Result<Vec<RayRecord>> {
    let volume = settings.volume()?;
    let camera = Camera::from_settings(settings);
    log::debug!("tracing {} rays against {:?}", camera.ray_count(), volume);

    let n_steps = settings.integration.n_steps_max;
    let records = (0..camera.ray_count())
        .into_par_iter()
        .map(|idx| -> Result<RayRecord, RaytraceError> {
            let pr = camera.pixel_ray(idx).map_err(|e| {
                log::warn!("camera produced an invalid ray at {idx}: {e}");
                e
            })?;
            Ok(resolve(&volume, n_steps, &pr))
        })
        .collect::<Result<Vec<_>, RaytraceError>>()?;
    Ok(records)
}

/// Summarize traced rays.
pub fn summarize(settings: &Settings, records: &[RayRecord]) -> TraceSummary {
    let hits: Vec<&RayRecord> = records.iter().filter(|r| r.interval.is_some()).collect();
    let mean = |values: Vec<f64>| {
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    };
    TraceSummary {
        rays: records.len(),
        hits: hits.len(),
        mean_length: mean(hits.iter().filter_map(|r| r.interval).map(|iv| iv.length()).collect()),
        mean_step: mean(hits.iter().filter_map(|r| r.step).collect()),
        tau_max: settings.integration.tau_max,
    }
}
