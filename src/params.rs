//! Parameter definitions for image synthesis.
//!
//! Every constant that shapes the output lives here with its range and meaning.

use std::ops::Range;

use rand::Rng;

/// Mapping from a noise sample to channel bytes
#[derive(Debug, Clone)]
pub struct ChannelMapping {
    /// Scale applied to |noise| for the red, green and blue channels
    /// 255.0 = full byte range
    pub color_scale: f64,

    /// Scale applied to |noise| for the alpha channel
    /// 64.0 = roughly 6 bits of alpha variation
    pub alpha_scale: f64,

    /// Constant added to the scaled alpha value
    /// 191 keeps the image mostly opaque
    pub alpha_offset: u8,
}

impl Default for ChannelMapping {
    fn default() -> Self {
        Self {
            color_scale: 255.0,
            alpha_scale: 64.0,
            alpha_offset: 191,
        }
    }
}

impl ChannelMapping {
    /// Map a noise sample to a red/green/blue byte
    pub fn color_byte(&self, sample: f64) -> u8 {
        scaled_byte(sample, self.color_scale)
    }

    /// Map a noise sample to an alpha byte in `[alpha_offset, alpha_offset + alpha_scale]`
    pub fn alpha_byte(&self, sample: f64) -> u8 {
        scaled_byte(sample, self.alpha_scale).saturating_add(self.alpha_offset)
    }

    /// Validate that the scales stay within a byte
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=255.0).contains(&self.color_scale) {
            return Err(format!(
                "Color scale must be within 0..=255, got {}",
                self.color_scale
            ));
        }
        if !(0.0..=255.0).contains(&self.alpha_scale)
            || self.alpha_scale + self.alpha_offset as f64 > 255.0
        {
            return Err(format!(
                "Alpha scale {} plus offset {} must not exceed 255",
                self.alpha_scale, self.alpha_offset
            ));
        }
        Ok(())
    }
}

/// |sample| * scale, clamped to [0, scale] and truncated
fn scaled_byte(sample: f64, scale: f64) -> u8 {
    // NaN survives clamp and casts to 0
    (sample.abs() * scale).clamp(0.0, scale) as u8
}

/// Roughness derivation parameters
///
/// roughness = factor / width, with factor drawn uniformly from `factor_range`.
/// Smaller roughness = smoother image, larger = rougher.
#[derive(Debug, Clone)]
pub struct RoughnessParams {
    /// Range of the random grain factor (dimensionless)
    pub factor_range: Range<f64>,
}

impl Default for RoughnessParams {
    fn default() -> Self {
        Self {
            factor_range: 1.0..3.0,
        }
    }
}

impl RoughnessParams {
    /// Roughness for a given grain factor and image width
    pub fn roughness(factor: f64, width: u32) -> f64 {
        factor / width as f64
    }

    /// Draw a grain factor from `rng` and derive the roughness for `width`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, width: u32) -> f64 {
        Self::roughness(rng.gen_range(self.factor_range.clone()), width)
    }
}

/// All synthesis parameters
#[derive(Debug, Clone, Default)]
pub struct SynthesisParams {
    pub mapping: ChannelMapping,
    pub roughness: RoughnessParams,
}
