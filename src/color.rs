//! Color value types used across the picker.
//!
//! [`Rgb`] stores channels as f64 in 0.0–1.0. [`Hsb`] carries the wheel's
//! hue/saturation pair together with the slider's brightness.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec;
use crate::error::PickerError;
use crate::math;

/// RGB color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };

    /// Create from f64 channels, clamping each to 0.0–1.0.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
        }
    }

    /// Create from 0–255 channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Convert to 0–255 channels. Truncates, matching the hex label.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (channel8(self.r), channel8(self.g), channel8(self.b))
    }

    pub fn to_hsb(&self) -> Hsb {
        let (hue, saturation, brightness) = math::rgb_to_hsb(self.r, self.g, self.b);
        Hsb {
            hue,
            saturation,
            brightness,
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::to_hex(self))
    }
}

/// Strict hex parsing: `#` optional, exactly 3 or 6 hex digits.
///
/// Use [`codec::from_hex`] when malformed text should quietly become black.
impl FromStr for Rgb {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PickerError::InvalidHex(s.to_string()));
        }
        let invalid = || PickerError::InvalidHex(s.to_string());
        match digits.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|n| n * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
                Ok(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&codec::to_hex(self))
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Hue, saturation and brightness, all normalized.
///
/// Hue is a fraction of a full turn in 0.0..1.0; saturation and brightness
/// are in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    /// Wraps hue into 0.0..1.0 and clamps saturation and brightness.
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        let hue = if hue.is_finite() { hue.rem_euclid(1.0) } else { 0.0 };
        Self {
            // rem_euclid can round up to exactly 1.0 for tiny negative inputs
            hue: if hue >= 1.0 { 0.0 } else { hue },
            saturation: unit(saturation),
            brightness: unit(brightness),
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        let (r, g, b) = math::hsb_to_rgb(self.hue, self.saturation, self.brightness);
        Rgb { r, g, b }
    }
}

fn unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

fn channel8(v: f64) -> u8 {
    (unit(v) * 255.0) as u8
}
