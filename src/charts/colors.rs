//! Display Color Module
//! Random per-series colors with channels drawn from a bounded mid-range.

use egui::Color32;
use rand::Rng;

/// Default channel bounds, a mid-range band away from both theme extremes.
pub const DEFAULT_CHANNEL_RANGE: ChannelRange = ChannelRange { min: 120, max: 210 };

/// Default alpha (fully opaque).
pub const DEFAULT_ALPHA: f32 = 1.0;

/// Inclusive bounds for each of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
    pub min: u8,
    pub max: u8,
}

impl Default for ChannelRange {
    fn default() -> Self {
        DEFAULT_CHANNEL_RANGE
    }
}

impl ChannelRange {
    fn sample(&self, rng: &mut impl Rng) -> u8 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Sample `count` display colors, each channel drawn independently and
/// uniformly from `range`, with a fixed `alpha` in 0.0..=1.0.
///
/// There is no uniqueness or perceptual-distinctness guarantee: two series
/// can come out visually similar. Callers that need stable colors should
/// sample once and hold on to the result.
pub fn sample_colors(
    count: usize,
    range: ChannelRange,
    alpha: f32,
    rng: &mut impl Rng,
) -> Vec<Color32> {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    (0..count)
        .map(|_| {
            Color32::from_rgba_unmultiplied(
                range.sample(rng),
                range.sample(rng),
                range.sample(rng),
                a,
            )
        })
        .collect()
}

/// Convenience wrapper over [`sample_colors`] with the default bounds, alpha
/// and the thread-local generator.
pub fn sample_default_colors(count: usize) -> Vec<Color32> {
    sample_colors(
        count,
        ChannelRange::default(),
        DEFAULT_ALPHA,
        &mut rand::thread_rng(),
    )
}
