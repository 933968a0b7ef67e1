//! Procedural wave field: tapered polylines animated by trig and noise.

mod field;
mod line;

pub use field::{WaveField, VERTEX_STRIDE};
pub use line::{color_phase, sample_point, sample_t, taper, z_offset, WaveLine};
