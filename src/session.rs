//! The working color for one open/close cycle of the picker.
//!
//! The host owns a [`PickerSession`], feeds it pointer and slider events,
//! reads the current color back, and finally commits or cancels it.

use crate::codec;
use crate::color::{Hsb, Rgb};
use crate::geometry::{CircleGeometry, Point};

/// How a session was closed, carrying the color the host should keep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Saved(Rgb),
    Cancelled(Rgb),
}

impl Outcome {
    pub fn color(&self) -> Rgb {
        match *self {
            Outcome::Saved(c) | Outcome::Cancelled(c) => c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerSession {
    original: Rgb,
    current: Rgb,
    /// Kept separately from `current` so hue survives gray and black.
    hsb: Hsb,
}

impl PickerSession {
    pub fn open(start: Rgb) -> Self {
        tracing::debug!("color picker opened with {}", codec::to_hex(&start));
        Self {
            original: start,
            current: start,
            hsb: start.to_hsb(),
        }
    }

    /// Color captured when the session was opened (or last committed).
    pub fn original(&self) -> Rgb {
        self.original
    }

    pub fn current(&self) -> Rgb {
        self.current
    }

    pub fn hsb(&self) -> Hsb {
        self.hsb
    }

    pub fn hex_label(&self) -> String {
        codec::to_hex(&self.current)
    }

    pub fn is_modified(&self) -> bool {
        self.current != self.original
    }

    /// Apply a drag position. Returns the clamped cursor position.
    pub fn drag(&mut self, point: Point, geometry: &CircleGeometry) -> Point {
        let hit = geometry.hit(point, self.hsb.brightness, self.hsb.hue);
        self.set_hsb(hit.hsb);
        hit.cursor
    }

    pub fn set_brightness(&mut self, brightness: f64) {
        self.set_hsb(Hsb::new(self.hsb.hue, self.hsb.saturation, brightness));
    }

    pub fn set_hsb(&mut self, hsb: Hsb) {
        self.hsb = hsb;
        self.current = hsb.to_rgb();
    }

    /// Replace the current color, e.g. from hex entry.
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.current = rgb;
        self.hsb = hsb_keeping_hue(rgb, self.hsb.hue);
    }

    /// Keep the current color and make it the new baseline.
    pub fn commit(&mut self) -> Outcome {
        tracing::debug!("color picker saved {}", self.hex_label());
        self.original = self.current;
        Outcome::Saved(self.current)
    }

    /// Restore the color captured at open.
    pub fn cancel(&mut self) -> Outcome {
        tracing::debug!(
            "color picker cancelled, discarding {} for {}",
            self.hex_label(),
            codec::to_hex(&self.original)
        );
        self.set_rgb(self.original);
        Outcome::Cancelled(self.original)
    }
}

impl Default for PickerSession {
    fn default() -> Self {
        Self::open(Rgb::default())
    }
}

fn hsb_keeping_hue(rgb: Rgb, hue: f64) -> Hsb {
    let hsb = rgb.to_hsb();
    if hsb.saturation > 0.0 && hsb.brightness > 0.0 {
        hsb
    } else {
        Hsb { hue, ..hsb }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel() -> CircleGeometry {
        CircleGeometry::new(Point::new(50.0, 50.0), 50.0).unwrap()
    }

    #[test]
    fn drag_updates_current_color() {
        let mut session = PickerSession::open(Rgb::WHITE);
        let cursor = session.drag(Point::new(150.0, 50.0), &wheel());
        assert_eq!(cursor, Point::new(100.0, 50.0));
        assert_eq!(session.hex_label(), "#FF0000");
        assert!(session.is_modified());
    }

    #[test]
    fn brightness_is_carried_through_drags() {
        let mut session = PickerSession::open(Rgb::WHITE);
        session.set_brightness(0.5);
        session.drag(Point::new(100.0, 50.0), &wheel());
        assert_eq!(session.hsb().brightness, 0.5);
        assert_eq!(session.hex_label(), "#7F0000");
    }

    #[test]
    fn hue_survives_desaturating_and_darkening() {
        let mut session = PickerSession::open(Rgb::WHITE);
        session.drag(Point::new(50.0, 100.0), &wheel());
        let hue = session.hsb().hue;
        session.drag(Point::new(50.0, 50.0), &wheel());
        assert_eq!(session.hsb().hue, hue);
        session.set_brightness(0.0);
        session.set_rgb(Rgb::BLACK);
        assert_eq!(session.hsb().hue, hue);
    }

    #[test]
    fn cancel_restores_original_exactly() {
        let start = Rgb::new(0.2, 0.4, 0.6);
        let mut session = PickerSession::open(start);
        session.drag(Point::new(10.0, 10.0), &wheel());
        session.set_brightness(0.13);
        assert_eq!(session.cancel(), Outcome::Cancelled(start));
        assert_eq!(session.current(), start);
        assert!(!session.is_modified());
    }

    #[test]
    fn commit_moves_the_baseline() {
        let mut session = PickerSession::open(Rgb::WHITE);
        session.set_rgb(Rgb::from_rgb8(0, 128, 0));
        let saved = session.commit();
        assert_eq!(saved.color(), Rgb::from_rgb8(0, 128, 0));
        session.set_brightness(0.1);
        assert_eq!(session.cancel().color(), Rgb::from_rgb8(0, 128, 0));
    }
}
