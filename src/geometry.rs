//! Pointer position → hue/saturation on a circular wheel.
//!
//! Angle maps to hue and distance from the center maps to saturation.
//! Hue 0 points along +x and increases toward +y. In a y-down layout
//! space (Floem's) that is clockwise, starting at 3 o'clock.

use std::f64::consts::TAU;

use crate::color::Hsb;
use crate::error::PickerError;

/// A position in the host's layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(feature = "widget")]
impl From<floem::kurbo::Point> for Point {
    fn from(p: floem::kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

#[cfg(feature = "widget")]
impl From<Point> for floem::kurbo::Point {
    fn from(p: Point) -> Self {
        floem::kurbo::Point::new(p.x, p.y)
    }
}

/// The wheel's center and radius, fixed for the duration of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleGeometry {
    center: Point,
    radius: f64,
}

/// Result of mapping one pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelHit {
    pub hsb: Hsb,
    /// Where the cursor should be drawn. Never outside the circle.
    pub cursor: Point,
}

impl CircleGeometry {
    pub fn new(center: Point, radius: f64) -> Result<Self, PickerError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PickerError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Offset of `point` from the center, or `None` when it is not finite.
    ///
    /// A finite point far enough away that the subtraction overflows is
    /// offset at half scale. Only its direction matters then, and it is
    /// outside any representable circle.
    fn offset(&self, point: Point) -> Option<(f64, f64)> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        let (dx, dy) = (point.x - self.center.x, point.y - self.center.y);
        if dx.is_finite() && dy.is_finite() {
            return Some((dx, dy));
        }
        let (dx, dy) = (
            point.x * 0.5 - self.center.x * 0.5,
            point.y * 0.5 - self.center.y * 0.5,
        );
        (dx.is_finite() && dy.is_finite()).then_some((dx, dy))
    }

    /// Boundary point in the direction of a non-zero offset.
    fn boundary_toward(&self, dx: f64, dy: f64) -> Point {
        // normalize by the larger component first so hypot cannot overflow
        let scale = dx.abs().max(dy.abs());
        let (ux, uy) = (dx / scale, dy / scale);
        let len = ux.hypot(uy);
        Point::new(
            self.center.x + ux / len * self.radius,
            self.center.y + uy / len * self.radius,
        )
    }

    /// Pull `point` onto the boundary if it lies outside the circle.
    pub fn clamp(&self, point: Point) -> Point {
        let Some((dx, dy)) = self.offset(point) else {
            return self.center;
        };
        if dx.hypot(dy) > self.radius {
            self.boundary_toward(dx, dy)
        } else {
            point
        }
    }

    /// Map a raw pointer position to hue/saturation plus the clamped cursor.
    ///
    /// A pointer exactly on the center has no angle: hue stays at
    /// `previous_hue` and saturation is 0. Non-finite positions are treated
    /// the same way.
    pub fn hit(&self, point: Point, brightness: f64, previous_hue: f64) -> WheelHit {
        let offset = self.offset(point).filter(|&(dx, dy)| dx != 0.0 || dy != 0.0);
        let Some((dx, dy)) = offset else {
            return WheelHit {
                hsb: Hsb::new(previous_hue, 0.0, brightness),
                cursor: self.center,
            };
        };

        // hypot may overflow to infinity here, which still reads as outside
        let distance = dx.hypot(dy);
        let (cursor, saturation) = if distance > self.radius {
            (self.boundary_toward(dx, dy), 1.0)
        } else {
            (point, distance / self.radius)
        };

        // atan2 covers all four quadrants and the axes; fold -180..180 into 0..360
        let degrees = dy.atan2(dx).to_degrees().rem_euclid(360.0);

        WheelHit {
            hsb: Hsb::new(degrees / 360.0, saturation, brightness),
            cursor,
        }
    }

    /// Where a hue/saturation pair sits on the wheel.
    pub fn position_of(&self, hue: f64, saturation: f64) -> Point {
        let angle = hue * TAU;
        let r = saturation.clamp(0.0, 1.0) * self.radius;
        Point::new(
            self.center.x + angle.cos() * r,
            self.center.y + angle.sin() * r,
        )
    }
}

/// Map a pointer position to a color on the wheel described by `geometry`.
///
/// `brightness` is passed through. `previous_hue` is kept when the pointer
/// sits exactly on the center.
pub fn map(point: Point, geometry: &CircleGeometry, brightness: f64, previous_hue: f64) -> Hsb {
    geometry.hit(point, brightness, previous_hue).hsb
}
