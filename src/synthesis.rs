//! Image synthesis from per-channel noise fields.

use image::{Rgba, RgbaImage};
use log::debug;
use rand::Rng;

use crate::noise::{Noise2D, NoiseGenerator};
use crate::params::{ChannelMapping, SynthesisParams};

/// One independent noise field per RGBA channel
pub struct ChannelNoises<N> {
    pub red: N,
    pub green: N,
    pub blue: N,
    pub alpha: N,
}

impl ChannelNoises<NoiseGenerator> {
    /// Seed four OpenSimplex generators from `rng` (red, green, blue, alpha order)
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            red: NoiseGenerator::from_rng(rng),
            green: NoiseGenerator::from_rng(rng),
            blue: NoiseGenerator::from_rng(rng),
            alpha: NoiseGenerator::from_rng(rng),
        }
    }

    pub fn seeds(&self) -> [u32; 4] {
        [
            self.red.seed(),
            self.green.seed(),
            self.blue.seed(),
            self.alpha.seed(),
        ]
    }
}

impl<N: Noise2D> ChannelNoises<N> {
    /// Sample all four fields at (x, y) and map them to a pixel
    pub fn pixel_at(&self, x: f64, y: f64, mapping: &ChannelMapping) -> Rgba<u8> {
        Rgba([
            mapping.color_byte(self.red.sample_2d(x, y)),
            mapping.color_byte(self.green.sample_2d(x, y)),
            mapping.color_byte(self.blue.sample_2d(x, y)),
            mapping.alpha_byte(self.alpha.sample_2d(x, y)),
        ])
    }
}

/// Fill a `width` x `height` image from `noises`
///
/// Pixel (x, y) samples every field at (x * roughness, y * roughness).
pub fn render<N: Noise2D>(
    width: u32,
    height: u32,
    roughness: f64,
    noises: &ChannelNoises<N>,
    mapping: &ChannelMapping,
) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        noises.pixel_at(x as f64 * roughness, y as f64 * roughness, mapping)
    })
}

/// Synthesize a random noise image, drawing all randomness from `rng`
///
/// Draw order: roughness factor, then the red, green, blue and alpha seeds.
pub fn synthesize<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    params: &SynthesisParams,
    rng: &mut R,
) -> RgbaImage {
    let roughness = params.roughness.sample(rng, width);
    let noises = ChannelNoises::<NoiseGenerator>::from_rng(rng);

    debug!(
        "Synthesizing {}x{} image (roughness: {:.6}, seeds: {:?})",
        width,
        height,
        roughness,
        noises.seeds()
    );

    render(width, height, roughness, &noises, &params.mapping)
}
