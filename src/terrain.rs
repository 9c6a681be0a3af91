//! Height-field synthesis from fractal value noise.
//!
//! A [`TerrainConfig`] is validated up front and then turned into an
//! immutable [`Terrain`] grid of integer surface heights.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::noise;

/// Errors rejecting an invalid [`TerrainConfig`] before any generation work.
#[derive(Debug, Error, PartialEq)]
pub enum TerrainError {
    /// The height grid needs at least two samples per horizontal axis.
    #[error("width/depth must be >= 2 (got {width}x{depth})")]
    MapTooSmall {
        /// Requested grid width.
        width: usize,
        /// Requested grid depth.
        depth: usize,
    },
    /// Heights are scaled by `max_height`, which must be positive.
    #[error("max_height must be >= 1")]
    ZeroMaxHeight,
    /// fBm needs at least one octave to sum.
    #[error("octaves must be >= 1")]
    NoOctaves,
    /// Amplitude falloff outside `(0, 1]` either diverges or mutes everything.
    #[error("persistence must be in (0, 1] (got {0})")]
    PersistenceOutOfRange(f64),
    /// Frequency growth of 1 or less collapses the octaves onto each other.
    #[error("lacunarity must be > 1 (got {0})")]
    LacunarityTooSmall(f64),
}

/// Configuration for deterministic terrain generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Height-field width (X axis), in samples.
    pub width: usize,
    /// Height-field depth (Z axis), in samples.
    pub depth: usize,
    /// Seed mixed into every lattice hash.
    pub seed: i64,
    /// Heights are rounded into `[0, max_height]`.
    pub max_height: u32,
    /// Number of fBm octaves.
    pub octaves: u32,
    /// Amplitude multiplier between octaves, in `(0, 1]`.
    pub persistence: f64,
    /// Frequency multiplier between octaves, greater than 1.
    pub lacunarity: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 129,
            depth: 129,
            seed: 0,
            max_height: 64,
            octaves: 5,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl TerrainConfig {
    /// Check every field, failing fast on the first invalid one.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.width < 2 || self.depth < 2 {
            return Err(TerrainError::MapTooSmall {
                width: self.width,
                depth: self.depth,
            });
        }
        if self.max_height < 1 {
            return Err(TerrainError::ZeroMaxHeight);
        }
        if self.octaves < 1 {
            return Err(TerrainError::NoOctaves);
        }
        if !(self.persistence > 0.0 && self.persistence <= 1.0) {
            return Err(TerrainError::PersistenceOutOfRange(self.persistence));
        }
        if self.lacunarity <= 1.0 {
            return Err(TerrainError::LacunarityTooSmall(self.lacunarity));
        }
        Ok(())
    }
}

/// Immutable height field produced by [`generate_terrain`].
///
/// Heights are stored row-major as `[z][x]` and always lie in
/// `[0, config.max_height]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    config: TerrainConfig,
    heights: Vec<u32>,
}

impl Terrain {
    /// Build a terrain from precomputed heights.
    ///
    /// Useful for embedders and tests that need a hand-crafted surface.
    ///
    /// # Panics
    /// Panics if `heights.len() != config.width * config.depth`.
    pub fn from_heights(config: TerrainConfig, heights: Vec<u32>) -> Self {
        assert_eq!(
            heights.len(),
            config.width * config.depth,
            "heights must hold width * depth samples"
        );
        Self { config, heights }
    }

    /// The configuration this terrain was generated from.
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Grid width (X axis).
    pub fn width(&self) -> usize {
        self.config.width
    }

    /// Grid depth (Z axis).
    pub fn depth(&self) -> usize {
        self.config.depth
    }

    /// Surface height at grid cell `(x, z)`.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the grid.
    pub fn height(&self, x: usize, z: usize) -> u32 {
        assert!(x < self.config.width, "x out of bounds");
        assert!(z < self.config.depth, "z out of bounds");
        self.heights[z * self.config.width + x]
    }

    /// Raw row-major height samples, indexed `z * width + x`.
    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    /// Lowest surface height in the grid.
    pub fn min_height(&self) -> u32 {
        self.heights.iter().copied().min().unwrap_or(0)
    }

    /// Highest surface height in the grid.
    pub fn max_height(&self) -> u32 {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    /// Mean surface height across the grid.
    pub fn avg_height(&self) -> f64 {
        let sum: u64 = self.heights.iter().map(|&h| h as u64).sum();
        sum as f64 / self.heights.len() as f64
    }
}

/// Generate a deterministic height field from `config`.
///
/// Pure function: identical configurations yield byte-identical grids.
#[instrument(skip(config), fields(width = config.width, depth = config.depth, seed = config.seed, octaves = config.octaves))]
pub fn generate_terrain(config: &TerrainConfig) -> Result<Terrain, TerrainError> {
    config.validate()?;
    debug!("starting height-field generation");

    let mut heights = Vec::with_capacity(config.width * config.depth);
    for z in 0..config.depth {
        for x in 0..config.width {
            let v = noise::fbm(x, z, config);
            heights.push((v * config.max_height as f64).round() as u32);
        }
    }

    debug!("height-field generation complete");
    Ok(Terrain {
        config: config.clone(),
        heights,
    })
}
