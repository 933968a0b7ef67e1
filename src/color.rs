//! Linear RGB colors and piecewise-linear gradients.

use glam::Vec3;

use crate::error::ConfigError;

/// RGB triple with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidHex(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ConfigError::InvalidHex(hex.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    pub fn scale(self, k: f32) -> Rgb {
        Rgb::new(self.r * k, self.g * k, self.b * k)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb> for Vec3 {
    fn from(c: Rgb) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgb) -> Self {
        Self { offset, color }
    }
}

/// Ordered color stops. Construction validates ordering, so sampling never
/// has to deal with a malformed stop list.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn new(stops: Vec<ColorStop>) -> Result<Self, ConfigError> {
        if stops.len() < 2 {
            return Err(ConfigError::TooFewStops(stops.len()));
        }
        let mut prev = 0.0_f32;
        for (index, stop) in stops.iter().enumerate() {
            let offset = stop.offset;
            if !(0.0..=1.0).contains(&offset) {
                return Err(ConfigError::StopOutOfRange { index, offset });
            }
            if offset < prev {
                return Err(ConfigError::StopsUnordered { index, offset });
            }
            prev = offset;
        }
        Ok(Self { stops })
    }

    /// Build from `(offset, "#rrggbb")` pairs.
    pub fn from_hex_stops(stops: &[(f32, &str)]) -> Result<Self, ConfigError> {
        let stops = stops
            .iter()
            .map(|&(offset, hex)| Rgb::from_hex(hex).map(|color| ColorStop::new(offset, color)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(stops)
    }

    /// Pink / blush / violet / orchid, the heading gradient of the page.
    pub fn brand() -> Self {
        Self::from_hex_stops(&[
            (0.0, "#FF3BFF"),
            (0.3802, "#ECBFBF"),
            (0.7583, "#5C24FF"),
            (1.0, "#D94FD5"),
        ])
        .unwrap_or_else(|_| Self::fallback())
    }

    /// Blue-400 / indigo-400 / fuchsia-400.
    pub fn aurora() -> Self {
        Self::from_hex_stops(&[(0.0, "#60a5fa"), (0.5, "#818cf8"), (1.0, "#e879f9")])
            .unwrap_or_else(|_| Self::fallback())
    }

    fn fallback() -> Self {
        Self {
            stops: vec![ColorStop::new(0.0, Rgb::WHITE), ColorStop::new(1.0, Rgb::WHITE)],
        }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Piecewise-linear sample; `p` is clamped to the first/last stop.
    pub fn sample(&self, p: f32) -> Rgb {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if p.is_nan() || p <= first.offset {
            return first.color;
        }
        if p >= last.offset {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if p <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (p - a.offset) / span);
            }
        }
        last.color
    }

    /// Index of the segment (`stops[k]..stops[k + 1]`) that brackets `p`.
    pub fn segment_of(&self, p: f32) -> usize {
        let p = p.clamp(0.0, 1.0);
        self.stops
            .windows(2)
            .position(|pair| p <= pair[1].offset)
            .unwrap_or(self.stops.len() - 2)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::brand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_both_cases() {
        let a = Rgb::from_hex("#FF3BFF").unwrap();
        let b = Rgb::from_hex("ff3bff").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.r, 1.0);
        assert!((a.g - 59.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(matches!(Rgb::from_hex("#12345"), Err(ConfigError::InvalidHex(_))));
        assert!(matches!(Rgb::from_hex("#zzzzzz"), Err(ConfigError::InvalidHex(_))));
    }

    #[test]
    fn hex_rejects_signed_channels() {
        assert!(matches!(Rgb::from_hex("#+f+f+f"), Err(ConfigError::InvalidHex(_))));
        assert!(matches!(Rgb::from_hex("-1ffff"), Err(ConfigError::InvalidHex(_))));
    }

    #[test]
    fn presets_are_well_formed() {
        assert_eq!(Gradient::brand().stops().len(), 4);
        assert_eq!(Gradient::aurora().stops().len(), 3);
    }
}
