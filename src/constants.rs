//! Sizing and styling constants for the picker views.

/// Side length of the rasterized wheel image, scaled to widget size when drawn.
pub const WHEEL_RASTER_SIZE: u32 = 512;

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Cursor circle radius on the wheel
pub const CURSOR_RADIUS: f64 = 8.0;

/// Thumb radius on the brightness slider
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for swatches and buttons
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Opened/current swatch side length
pub const SWATCH_SIZE: f32 = 28.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Cancel/Save button label font size
pub const BUTTON_FONT: f32 = 12.0;
