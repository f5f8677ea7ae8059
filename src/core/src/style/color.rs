use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channel-wise linear blend, `t` clamped to [0, 1] and rounded to the nearest channel value
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;

        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Linear colour scale over the positions of a transfer list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    pub start: Rgb,
    pub end: Rgb,
}

impl ColorRange {
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        ColorRange { start, end }
    }

    /// First entry maps to `start`, the last one to `end`. A single entry takes `start`.
    pub fn at(&self, index: usize, total: usize) -> Rgb {
        if total <= 1 {
            return self.start;
        }

        self.start.lerp(self.end, index as f64 / (total - 1) as f64)
    }
}
