//! Picker configuration.
//!
//! Hosts usually build this in code, but it is serde-friendly so it can live
//! in a settings file next to the rest of their UI state.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::PickerError;
use crate::session::PickerSession;

/// Wheel radius used before the host's layout pass reports a real size.
pub const DEFAULT_RADIUS: f64 = 120.0;

/// Panel background behind the wheel.
pub const DEFAULT_BACKGROUND: Rgb = Rgb {
    r: 242.0 / 255.0,
    g: 242.0 / 255.0,
    b: 242.0 / 255.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub start_color: Rgb,
    pub background: Rgb,
    pub radius: f64,
    pub brightness: SliderRange,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            start_color: Rgb::WHITE,
            background: DEFAULT_BACKGROUND,
            radius: DEFAULT_RADIUS,
            brightness: SliderRange::default(),
        }
    }
}

impl PickerConfig {
    pub fn with_start_color(mut self, color: Rgb) -> Self {
        self.start_color = color;
        self
    }

    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Start a session from the configured starting color.
    pub fn open_session(&self) -> PickerSession {
        PickerSession::open(self.start_color)
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PickerError::InvalidRadius(self.radius));
        }
        self.brightness.validate()
    }
}

/// A continuous slider range with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.01,
        }
    }
}

impl SliderRange {
    pub fn validate(&self) -> Result<(), PickerError> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.step.is_finite();
        if !finite || self.min >= self.max || self.step <= 0.0 || self.step > self.max - self.min {
            return Err(PickerError::InvalidSliderRange {
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Clamp `value` into the range and round it to the nearest step.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Position of `value` within the range, 0.0–1.0.
    pub fn fraction(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PickerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.radius, DEFAULT_RADIUS);
        assert_eq!(config.brightness, SliderRange { min: 0.0, max: 1.0, step: 0.01 });
    }

    #[test]
    fn rejects_bad_radius_and_range() {
        let config = PickerConfig::default().with_radius(0.0);
        assert_eq!(config.validate(), Err(PickerError::InvalidRadius(0.0)));

        let range = SliderRange { min: 1.0, max: 0.0, step: 0.01 };
        assert!(matches!(range.validate(), Err(PickerError::InvalidSliderRange { .. })));
        let range = SliderRange { min: 0.0, max: 1.0, step: 0.0 };
        assert!(range.validate().is_err());
    }

    #[test]
    fn snap_rounds_to_step_and_clamps() {
        let range = SliderRange::default();
        assert!((range.snap(0.456) - 0.46).abs() < 1e-12);
        assert_eq!(range.snap(-3.0), 0.0);
        assert_eq!(range.snap(4.0), 1.0);
        assert_eq!(range.snap(f64::NAN), 0.0);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: PickerConfig =
            serde_json::from_str(r##"{ "start_color": "#3B82F6", "radius": 80.0 }"##).unwrap();
        assert_eq!(config.start_color, Rgb::from_rgb8(0x3B, 0x82, 0xF6));
        assert_eq!(config.radius, 80.0);
        assert_eq!(config.background, DEFAULT_BACKGROUND);
        assert_eq!(config.brightness, SliderRange::default());
    }

    #[test]
    fn serializes_colors_as_hex() {
        let json = serde_json::to_value(PickerConfig::default()).unwrap();
        assert_eq!(json["start_color"], "#FFFFFF");
        assert_eq!(json["background"], "#F2F2F2");
    }

    #[test]
    fn open_session_starts_from_start_color() {
        let config = PickerConfig::default().with_start_color(Rgb::from_rgb8(1, 2, 3));
        let session = config.open_session();
        assert_eq!(session.original(), Rgb::from_rgb8(1, 2, 3));
        assert!(!session.is_modified());
    }

    #[test]
    fn rejects_malformed_color_strings() {
        let result: Result<PickerConfig, _> = serde_json::from_str(r#"{ "background": "nope" }"#);
        assert!(result.is_err());
    }
}
