//! Deterministic value noise for terrain generation.
//!
//! Lattice values come from a pure integer hash over (x, z, seed, octave), so
//! the same configuration produces byte-identical height fields on every
//! platform. All arithmetic is fixed 32-bit wrapping; do not "simplify" the
//! constants or the shift pattern, they are part of the output format.

use crate::terrain::TerrainConfig;

/// Smoothstep easing `t^2 * (3 - 2t)` applied on both interpolation axes.
#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Hash one lattice corner into 32 bits with an avalanche mix.
fn mix_u32(ix: i64, iz: i64, seed: i64, octave: u32) -> u32 {
    let mut n = (ix as u32).wrapping_mul(0x1F12_3BB5)
        ^ (iz as u32).wrapping_mul(0x0549_1333)
        ^ (seed as u32).wrapping_mul(0x9E37_79B9)
        ^ octave.wrapping_mul(0x85EB_CA6B);
    n ^= n >> 16;
    n = n.wrapping_mul(0x7FEB_352D);
    n ^= n >> 15;
    n = n.wrapping_mul(0x846C_A68B);
    n ^= n >> 16;
    n
}

/// Corner hash mapped onto `[0, 1)`.
fn rand01(ix: i64, iz: i64, seed: i64, octave: u32) -> f64 {
    mix_u32(ix, iz, seed, octave) as f64 / 4_294_967_296.0
}

/// Bilinear value noise at `(x, z)` for a single octave.
///
/// Interpolates the four surrounding lattice corners with smoothstep easing.
fn value_noise(x: f64, z: f64, seed: i64, octave: u32) -> f64 {
    let x0 = x.floor() as i64;
    let z0 = z.floor() as i64;
    let x1 = x0 + 1;
    let z1 = z0 + 1;

    let sx = smoothstep(x - x0 as f64);
    let sz = smoothstep(z - z0 as f64);

    let v00 = rand01(x0, z0, seed, octave);
    let v10 = rand01(x1, z0, seed, octave);
    let v01 = rand01(x0, z1, seed, octave);
    let v11 = rand01(x1, z1, seed, octave);

    let a = lerp(v00, v10, sx);
    let b = lerp(v01, v11, sx);
    lerp(a, b, sz)
}

/// Fractal (fBm) octave sum at grid cell `(x, z)`, normalized to `[0, 1]`.
///
/// Coordinates are normalized by `(width - 1)` and `(depth - 1)`; each octave
/// scales frequency by `lacunarity` and amplitude by `persistence`.
pub(crate) fn fbm(x: usize, z: usize, config: &TerrainConfig) -> f64 {
    // Degenerate one-cell axes would divide by zero below.
    if config.width == 1 || config.depth == 1 {
        return 0.0;
    }

    let nx = x as f64 / (config.width - 1) as f64;
    let nz = z as f64 / (config.depth - 1) as f64;

    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_amplitude = 0.0;

    for octave in 0..config.octaves {
        total += amplitude * value_noise(nx * frequency, nz * frequency, config.seed, octave);
        max_amplitude += amplitude;
        amplitude *= config.persistence;
        frequency *= config.lacunarity;
    }

    let v = if max_amplitude > 0.0 {
        total / max_amplitude
    } else {
        0.0
    };
    v.clamp(0.0, 1.0)
}
