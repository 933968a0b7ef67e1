//! Compile-time scene constants and their validation.

use std::f32::consts::PI;

use glam::Vec3;

use crate::color::{Gradient, Rgb};
use crate::error::ConfigError;
use crate::scroll::FadeSchedule;

pub const LINE_COUNT: usize = 64;
pub const POINTS_PER_LINE: usize = 128;
pub const LINE_WIDTH: f32 = 32.0;
pub const LINE_SPACING: f32 = 0.06;

/// Upper bounds on the field's geometry. They keep every noise coordinate
/// well inside the range simplex noise handles.
pub const MAX_LINE_WIDTH: f32 = 1.0e4;
pub const MAX_LINE_SPACING: f32 = 1.0e3;
pub const MAX_NOISE_SCALE: f32 = 1.0e3;

/// Opacity at or below which a component is hidden and its update skipped.
pub const VISIBILITY_EPSILON: f32 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct WaveFieldConfig {
    pub line_count: usize,
    pub points_per_line: usize,
    /// Horizontal extent of each line in world units.
    pub width: f32,
    /// Depth distance between neighbouring lines.
    pub line_spacing: f32,
    pub amplitude: f32,
    pub speed: f32,
    pub noise_scale: f32,
    /// Constant shift on y so the field sits below the overlay card.
    pub vertical_offset: f32,
    pub color_intensity: f32,
    /// Rotation of the whole field about X, radians.
    pub tilt: f32,
    pub seed: u32,
    pub gradient: Gradient,
}

impl Default for WaveFieldConfig {
    fn default() -> Self {
        Self {
            line_count: LINE_COUNT,
            points_per_line: POINTS_PER_LINE,
            width: LINE_WIDTH,
            line_spacing: LINE_SPACING,
            amplitude: 1.5,
            speed: 0.15,
            noise_scale: 0.15,
            vertical_offset: -2.5,
            color_intensity: 0.8,
            tilt: 0.1,
            seed: 0x5EED,
            gradient: Gradient::brand(),
        }
    }
}

impl WaveFieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line_count == 0 {
            return Err(ConfigError::NoLines);
        }
        if self.points_per_line < 2 {
            return Err(ConfigError::TooFewPoints(self.points_per_line));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        for (name, value) in [
            ("line_spacing", self.line_spacing),
            ("amplitude", self.amplitude),
            ("speed", self.speed),
            ("noise_scale", self.noise_scale),
            ("vertical_offset", self.vertical_offset),
            ("color_intensity", self.color_intensity),
            ("tilt", self.tilt),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        for (name, value, limit) in [
            ("width", self.width, MAX_LINE_WIDTH),
            ("line_spacing", self.line_spacing, MAX_LINE_SPACING),
            ("noise_scale", self.noise_scale, MAX_NOISE_SCALE),
        ] {
            if value.abs() > limit {
                return Err(ConfigError::OutOfRange { name, value, limit });
            }
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.line_count * self.points_per_line
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view, degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 12.0),
            target: Vec3::ZERO,
            fov_y: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_y > 0.0 && self.fov_y < 180.0) {
            return Err(ConfigError::InvalidFov(self.fov_y));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(ConfigError::InvalidClip {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }
}

/// Orbit is rotate-only: no zoom, no pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub min_polar: f32,
    pub max_polar: f32,
    pub rotate_speed: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_polar: PI / 3.0,
            max_polar: PI / 2.0,
            rotate_speed: 0.5,
        }
    }
}

impl OrbitLimits {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0 <= self.min_polar && self.min_polar <= self.max_polar && self.max_polar <= PI) {
            return Err(ConfigError::InvalidPolarLimits {
                min: self.min_polar,
                max: self.max_polar,
            });
        }
        Ok(())
    }
}

/// Linear distance fog. Only the wave lines are fogged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogConfig {
    pub color: Rgb,
    pub near: f32,
    pub far: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            near: 5.0,
            far: 25.0,
        }
    }
}

impl FogConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0 <= self.near && self.near < self.far) {
            return Err(ConfigError::InvalidFog {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub wave: WaveFieldConfig,
    pub fades: FadeSchedule,
    pub camera: CameraConfig,
    pub orbit: OrbitLimits,
    pub fog: FogConfig,
    pub background: Rgb,
    /// Time constant in seconds of the smoothing applied to page scroll. Zero snaps.
    pub scroll_damping: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            wave: WaveFieldConfig::default(),
            fades: FadeSchedule::default(),
            camera: CameraConfig::default(),
            orbit: OrbitLimits::default(),
            fog: FogConfig::default(),
            background: Rgb::BLACK,
            scroll_damping: 0.25,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wave.validate()?;
        self.fades.validate()?;
        self.camera.validate()?;
        self.orbit.validate()?;
        self.fog.validate()?;
        if !(self.scroll_damping >= 0.0) {
            return Err(ConfigError::InvalidDamping(self.scroll_damping));
        }
        Ok(())
    }
}
