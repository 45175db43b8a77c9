//! Error type for the construction and validation boundaries of the picker.
//!
//! The wheel mapping and the hex codec are total and never fail; only
//! building a geometry, validating a config, or strict hex parsing can.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PickerError {
    #[error("circle radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
    #[error("invalid slider range: min {min}, max {max}, step {step}")]
    InvalidSliderRange { min: f64, max: f64, step: f64 },
}
