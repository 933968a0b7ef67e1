use log::info;

use super::line::WaveLine;
use crate::config::WaveFieldConfig;
use crate::error::ConfigError;
use crate::noise_source::{Noise3, NoiseSource};
use crate::scroll::{is_visible, ComponentId, Fadeable};

/// Floats per vertex in the interleaved upload buffer: position then color.
pub const VERTEX_STRIDE: usize = 6;

/// The stack of wave lines behind the overlay.
///
/// Owns its noise source; every line samples the same one with the same time
/// and global opacity, so lines never depend on each other.
pub struct WaveField<N: Noise3 = NoiseSource> {
    config: WaveFieldConfig,
    noise: N,
    lines: Vec<WaveLine>,
    opacity: f32,
    visible: bool,
}

impl WaveField<NoiseSource> {
    pub fn new(config: WaveFieldConfig) -> Result<Self, ConfigError> {
        let noise = NoiseSource::new(config.seed);
        Self::with_noise(config, noise)
    }
}

impl<N: Noise3> WaveField<N> {
    pub fn with_noise(config: WaveFieldConfig, noise: N) -> Result<Self, ConfigError> {
        config.validate()?;
        let lines = (0..config.line_count)
            .map(|index| WaveLine::new(index, config.points_per_line))
            .collect();
        info!(
            "wave field: {} lines x {} points, width {}",
            config.line_count, config.points_per_line, config.width
        );
        Ok(Self {
            config,
            noise,
            lines,
            opacity: 0.0,
            visible: false,
        })
    }

    pub fn config(&self) -> &WaveFieldConfig {
        &self.config
    }

    pub fn lines(&self) -> &[WaveLine] {
        &self.lines
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// False when the last update was skipped; line buffers are then stale and
    /// must not be drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Recompute every line for `time`. Returns whether anything was computed.
    pub fn update(&mut self, time: f32) -> bool {
        self.visible = is_visible(self.opacity);
        if !self.visible {
            return false;
        }
        let (config, noise, opacity) = (&self.config, &self.noise, self.opacity);
        for line in &mut self.lines {
            line.update(config, noise, time, opacity);
        }
        true
    }

    pub fn interleaved_len(&self) -> usize {
        self.config.vertex_count() * VERTEX_STRIDE
    }

    /// Pack all lines, in index order, as `[x y z r g b]` vertices into `out`.
    /// `out` must hold at least `interleaved_len()` floats.
    pub fn write_interleaved(&self, out: &mut [f32]) {
        let mut v = 0;
        for line in &self.lines {
            for (p, c) in line
                .positions()
                .chunks_exact(3)
                .zip(line.colors().chunks_exact(3))
            {
                out[v..v + 3].copy_from_slice(p);
                out[v + 3..v + 6].copy_from_slice(c);
                v += VERTEX_STRIDE;
            }
        }
    }
}

impl<N: Noise3> Fadeable for WaveField<N> {
    fn component(&self) -> ComponentId {
        ComponentId::WaveField
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}
