//! # floem-wheel
//!
//! A circular hue/saturation color picker with a brightness slider for
//! [Floem](https://github.com/lapce/floem).
//!
//! The color math is usable without any UI: [`geometry`] maps a pointer
//! position on a wheel to hue and saturation, [`codec`] converts between
//! colors and `#RRGGBB` labels, and [`PickerSession`] holds the working
//! color between opening the picker and saving or cancelling it.
//!
//! The `widget` feature (on by default) adds the Floem views.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_wheel::{wheel_picker, PickerConfig, Rgb};
//!
//! let config = PickerConfig::default().with_start_color(Rgb::from_rgb8(0x3B, 0x82, 0xF6));
//! let session = RwSignal::new(config.open_session());
//! // Use `wheel_picker(session, config, |outcome| { ... })` in your view tree.
//! ```

pub mod codec;
mod color;
mod config;
mod error;
pub mod geometry;
mod math;
mod session;

#[cfg(feature = "widget")]
mod brightness_slider;
#[cfg(feature = "widget")]
mod color_wheel;
#[cfg(feature = "widget")]
mod constants;
#[cfg(feature = "widget")]
mod inputs;
#[cfg(feature = "widget")]
mod picker;

pub use codec::{from_hex, to_hex, RgbComponents};
pub use color::{Hsb, Rgb};
pub use config::{PickerConfig, SliderRange, DEFAULT_BACKGROUND, DEFAULT_RADIUS};
pub use error::PickerError;
pub use geometry::{CircleGeometry, Point, WheelHit};
pub use session::{Outcome, PickerSession};

#[cfg(feature = "widget")]
pub use picker::wheel_picker;
