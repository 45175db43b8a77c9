//! Hex label codec.
//!
//! [`to_hex`] renders `#RRGGBB` with truncated, uppercase channels.
//! [`from_hex`] is lenient: anything it cannot read becomes black.

use crate::color::{Hsb, Rgb};

/// A color that may or may not be able to expose RGB channels.
///
/// Host colors backed by patterns or non-RGB color spaces return `None`,
/// and [`to_hex`] renders them as an empty label.
pub trait RgbComponents {
    fn rgb_components(&self) -> Option<Rgb>;
}

impl RgbComponents for Rgb {
    fn rgb_components(&self) -> Option<Rgb> {
        Some(*self)
    }
}

impl RgbComponents for Hsb {
    fn rgb_components(&self) -> Option<Rgb> {
        Some(self.to_rgb())
    }
}

impl<T: RgbComponents> RgbComponents for Option<T> {
    fn rgb_components(&self) -> Option<Rgb> {
        self.as_ref().and_then(T::rgb_components)
    }
}

/// Format as `#RRGGBB`. Each channel is scaled to 0–255 and truncated.
///
/// Returns an empty string when `color` has no RGB components.
pub fn to_hex(color: &(impl RgbComponents + ?Sized)) -> String {
    match color.rgb_components() {
        Some(rgb) => {
            let (r, g, b) = rgb.to_rgb8();
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        }
        None => String::new(),
    }
}

/// Parse `text` as a hex color without ever failing.
///
/// Surrounding whitespace and one leading `#` are stripped. The rest is read
/// as an unsigned hex integer; text that is empty, contains anything but hex
/// digits, or overflows 64 bits reads as 0. Red comes from bits 16–23, green
/// from 8–15, blue from 0–7.
pub fn from_hex(text: &str) -> Rgb {
    let value = parse_hex_value(text);
    Rgb {
        r: ((value >> 16) & 0xFF) as f64 / 255.0,
        g: ((value >> 8) & 0xFF) as f64 / 255.0,
        b: (value & 0xFF) as f64 / 255.0,
    }
}

fn parse_hex_value(text: &str) -> u64 {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    // from_str_radix would also take a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return 0;
    }
    u64::from_str_radix(digits, 16).unwrap_or(0)
}
