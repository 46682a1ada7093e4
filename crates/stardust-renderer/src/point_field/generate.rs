//! Procedural point cloud on a flared, egg-like surface of revolution.

use std::f64::consts::{PI, TAU};

use rand::Rng;

/// Surface radius at the top pole (`v = 0`).
pub const RADIUS_BASE: f64 = 0.9;
/// Radius gained per radian of `v`; the bottom is wider than the top.
pub const RADIUS_GROWTH: f64 = 0.2;
/// Half-height of the cloud along Y.
pub const HEIGHT_SCALE: f64 = 1.5;

/// Generate `n × n` points as a flat `[x0, y0, z0, x1, ...]` buffer.
///
/// Each point draws fresh `u ∈ [0, 2π)` and `v ∈ [0, π)`. The sampling is
/// uniform in `(u, v)`, not in surface area, so points bunch at the poles.
/// Point `(i, j)` is stored at offset `3·(n·i + j)`.
pub fn generate_point_cloud<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f32> {
    let mut positions = vec![0.0f32; 3 * n * n];
    for i in 0..n {
        for j in 0..n {
            let u = rng.gen::<f64>() * TAU;
            let v = rng.gen::<f64>() * PI;
            let offset = 3 * (n * i + j);
            positions[offset..offset + 3].copy_from_slice(&surface_point(u, v));
        }
    }
    positions
}

/// Point on the surface at azimuth `u` and polar parameter `v`.
pub fn surface_point(u: f64, v: f64) -> [f32; 3] {
    let radius = RADIUS_BASE + RADIUS_GROWTH * v;
    [
        (radius * u.cos() * v.sin()) as f32,
        (HEIGHT_SCALE * v.cos()) as f32,
        (radius * u.sin() * v.sin()) as f32,
    ]
}
