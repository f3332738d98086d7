//! Published dust-map versions and their distance grids.

use serde::{Deserialize, Serialize};

/// A released version of the 3D dust map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MapVersion {
    /// 2015 release.
    #[default]
    B15,
    /// 2019 release, finer distance sampling.
    B19,
}

/// Distance-modulus layout of a map's texture stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapProps {
    /// Number of RGBA textures holding the slices.
    pub n_textures: u32,
    /// Distance modulus of the nearest slice.
    pub dm_0: f64,
    /// Distance modulus of the farthest slice.
    pub dm_1: f64,
    /// Number of distance slices.
    pub n_dm: u32,
}

impl MapVersion {
    /// Every known version.
    pub const ALL: [MapVersion; 2] = [MapVersion::B15, MapVersion::B19];

    /// Short name as used in settings files.
    pub fn name(&self) -> &'static str {
        match self {
            MapVersion::B15 => "b15",
            MapVersion::B19 => "b19",
        }
    }

    /// Texture and distance layout of this version.
    pub fn props(&self) -> MapProps {
        match self {
            MapVersion::B15 => MapProps {
                n_textures: 4,
                dm_0: 4.0,
                dm_1: 19.0,
                n_dm: 31,
            },
            MapVersion::B19 => MapProps {
                n_textures: 15,
                dm_0: 4.0,
                dm_1: 18.875,
                n_dm: 120,
            },
        }
    }
}

impl MapProps {
    /// Distance in kpc for distance modulus `dm`: `10^(dm/5 - 2)`.
    pub fn distance_kpc(dm: f64) -> f64 {
        10f64.powf(dm / 5.0 - 2.0)
    }

    /// Distance modulus of slice `k` on the linear grid `dm_0..=dm_1`.
    pub fn slice_modulus(&self, k: u32) -> f64 {
        if self.n_dm < 2 {
            return self.dm_0;
        }
        self.dm_0 + (self.dm_1 - self.dm_0) * k as f64 / (self.n_dm - 1) as f64
    }

    /// Distance of the nearest slice in kpc.
    pub fn near_distance_kpc(&self) -> f64 {
        Self::distance_kpc(self.dm_0)
    }

    /// Distance of the farthest slice in kpc.
    pub fn far_distance_kpc(&self) -> f64 {
        Self::distance_kpc(self.dm_1)
    }
}
