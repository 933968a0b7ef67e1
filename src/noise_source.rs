//! Seeded 3D gradient noise.

use ::noise::{NoiseFn, Simplex};

/// Anything that can produce continuous 3D noise in [-1, 1].
pub trait Noise3 {
    fn noise3(&self, x: f32, y: f32, z: f32) -> f32;
}

/// Inputs beyond this magnitude read as 0. Simplex lattice math stops being
/// meaningful long before f64 overflows.
pub const MAX_COORD: f32 = 1.0e9;

/// Simplex noise with its permutation table built once from `seed`.
pub struct NoiseSource {
    simplex: Simplex,
    seed: u32,
}

impl NoiseSource {
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: Simplex::new(seed),
            seed,
        }
    }
}

impl Noise3 for NoiseSource {
    #[inline]
    fn noise3(&self, x: f32, y: f32, z: f32) -> f32 {
        if [x, y, z].iter().any(|c| !c.is_finite() || c.abs() > MAX_COORD) {
            return 0.0;
        }
        let v = self.simplex.get([x as f64, y as f64, z as f64]) as f32;
        v.clamp(-1.0, 1.0)
    }
}

impl std::fmt::Debug for NoiseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseSource").field("seed", &self.seed).finish()
    }
}
