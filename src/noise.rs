//! Coherent noise sources for the color channels.
//!
//! Using OpenSimplex noise for smooth, artifact-free variation.

use noise::{NoiseFn, OpenSimplex};
use rand::Rng;

/// A stateless 2D noise field
pub trait Noise2D {
    /// Sample the field at (x, y)
    fn sample_2d(&self, x: f64, y: f64) -> f64;
}

impl<F> Noise2D for F
where
    F: Fn(f64, f64) -> f64,
{
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// Noise generator for a single channel
pub struct NoiseGenerator {
    simplex: OpenSimplex,
    seed: u32,
}

impl NoiseGenerator {
    /// Create new noise generator with seed
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: OpenSimplex::new(seed),
            seed,
        }
    }

    /// Create a noise generator seeded from `rng`
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen())
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Noise2D for NoiseGenerator {
    /// Returns value in range [-1, 1] (nominal; callers clamp)
    fn sample_2d(&self, x: f64, y: f64) -> f64 {
        self.simplex.get([x, y])
    }
}
