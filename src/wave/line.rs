use std::f32::consts::PI;

use glam::Vec3;

use crate::color::Rgb;
use crate::config::WaveFieldConfig;
use crate::noise_source::Noise3;

/// Envelope that pins both ends of a line to zero height and zero brightness.
#[inline]
pub fn taper(t: f32) -> f32 {
    (t * PI).sin().max(0.0)
}

/// Position of the gradient lookup for a sample at `x`, in [0, 1].
#[inline]
pub fn color_phase(x: f32, time: f32) -> f32 {
    ((x * 0.15 + time * 0.3).sin() + 1.0) * 0.5
}

/// Depth of line `index` in a field of `total` lines, centered on z = 0.
#[inline]
pub fn z_offset(index: usize, total: usize, spacing: f32) -> f32 {
    (index as f32 - total as f32 / 2.0) * spacing
}

/// Parameter along the line for sample `i` of `points`, in [0, 1].
/// Lines with fewer than 2 points have no span and sit at `t = 0`.
#[inline]
pub fn sample_t(i: usize, points: usize) -> f32 {
    if points < 2 {
        return 0.0;
    }
    (i as f32 / (points - 1) as f32).min(1.0)
}

/// Position and pre-multiplied color of sample `i` on a line of `points`.
pub fn sample_point<N: Noise3 + ?Sized>(
    cfg: &WaveFieldConfig,
    noise: &N,
    index: usize,
    i: usize,
    points: usize,
    time: f32,
    opacity: f32,
) -> (Vec3, Rgb) {
    let t = sample_t(i, points);
    let x = (t - 0.5) * cfg.width;
    let z_off = z_offset(index, cfg.line_count, cfg.line_spacing);
    let envelope = taper(t);

    let flow = (x * 0.3 + time * cfg.speed + z_off * 1.5).sin();
    let secondary = (x * 0.2 - time * 0.1).cos();
    let n = noise.noise3(x * cfg.noise_scale, z_off * 0.5, time * 0.1);
    let y = (flow + secondary * 0.5 + n) * cfg.amplitude * envelope;

    let z = z_off + (x * 0.5 + time * 0.2).sin() * 0.3 * envelope;

    let base = cfg.gradient.sample(color_phase(x, time));
    let color = base.scale(cfg.color_intensity * envelope * opacity);

    (Vec3::new(x, y + cfg.vertical_offset, z), color)
}

/// One polyline of the field. Buffers are sized once and rewritten in place.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveLine {
    index: usize,
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl WaveLine {
    pub fn new(index: usize, points: usize) -> Self {
        Self {
            index,
            positions: vec![0.0; points * 3],
            colors: vec![1.0; points * 3],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `[x, y, z, x, y, z, ...]`.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat `[r, g, b, r, g, b, ...]`, already scaled by intensity.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    pub fn color(&self, i: usize) -> Rgb {
        let c = &self.colors[i * 3..i * 3 + 3];
        Rgb::new(c[0], c[1], c[2])
    }

    /// Rewrite every point. The sample spacing follows this line's own
    /// buffer, not `cfg.points_per_line`.
    pub fn update<N: Noise3 + ?Sized>(
        &mut self,
        cfg: &WaveFieldConfig,
        noise: &N,
        time: f32,
        opacity: f32,
    ) {
        let points = self.len();
        for i in 0..points {
            let (p, c) = sample_point(cfg, noise, self.index, i, points, time, opacity);
            self.positions[i * 3..i * 3 + 3].copy_from_slice(&p.to_array());
            self.colors[i * 3..i * 3 + 3].copy_from_slice(&c.to_array());
        }
    }
}
