use thiserror::Error;

/// Construction-time misconfiguration. Nothing in the frame loop returns this;
/// every check runs before the first buffer is allocated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("line count must be at least 1")]
    NoLines,

    #[error("points per line must be at least 2, got {0}")]
    TooFewPoints(usize),

    #[error("line width must be positive and finite, got {0}")]
    InvalidWidth(f32),

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("{name} magnitude must be at most {limit}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        limit: f32,
    },

    #[error("gradient needs at least 2 color stops, got {0}")]
    TooFewStops(usize),

    #[error("color stop {index} offset {offset} is outside [0, 1]")]
    StopOutOfRange { index: usize, offset: f32 },

    #[error("color stop {index} offset {offset} is below the previous stop")]
    StopsUnordered { index: usize, offset: f32 },

    #[error("invalid hex color {0:?}")]
    InvalidHex(String),

    #[error("fade window for {component} is inverted: start {start} >= end {end}")]
    InvertedWindow {
        component: &'static str,
        start: f32,
        end: f32,
    },

    #[error("fade window for {component} lies outside [0, 1]: [{start}, {end}]")]
    WindowOutOfRange {
        component: &'static str,
        start: f32,
        end: f32,
    },

    #[error("fade schedule has two windows for {0}")]
    DuplicateComponent(&'static str),

    #[error("camera field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("camera clip planes must satisfy 0 < near < far, got near {near} far {far}")]
    InvalidClip { near: f32, far: f32 },

    #[error("orbit polar limits must satisfy 0 <= min <= max <= pi, got [{min}, {max}]")]
    InvalidPolarLimits { min: f32, max: f32 },

    #[error("fog must satisfy 0 <= near < far, got near {near} far {far}")]
    InvalidFog { near: f32, far: f32 },

    #[error("scroll damping must be >= 0, got {0}")]
    InvalidDamping(f32),
}
