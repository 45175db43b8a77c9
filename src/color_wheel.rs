//! Circular hue/saturation wheel view.
//!
//! Angle maps to hue and radius maps to saturation, using the same
//! [`CircleGeometry`] mapping for both the raster and pointer input. The
//! wheel is rasterized once to an RGBA8 buffer at full brightness and
//! scaled to widget size; brightness is shown as a dark overlay.

use std::f64::consts::TAU;
use std::sync::Arc;

use floem::kurbo::{self, BezPath, Circle, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Hsb;
use crate::constants;
use crate::geometry::{CircleGeometry, Point};
use crate::session::PickerSession;

/// Build a closed `BezPath` circle from line segments (no cubic curves).
fn circle_path(center: kurbo::Point, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    for i in 0..64 {
        let angle = TAU * i as f64 / 64.0;
        let pt = kurbo::Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        );
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path.close_path();
    path
}

/// Feather width in raster pixels for anti-aliasing the circle edge.
const FEATHER: f64 = 3.0;

/// Rasterize the wheel at full brightness to a square RGBA8 buffer.
///
/// Colors use the same circle the pointer maps against: centered, with a
/// radius of half the side. The anti-alias ramp fades alpha over the last
/// [`FEATHER`] pixels inside that circle without touching the color.
fn rasterize_wheel(side: u32) -> Vec<u8> {
    let half = side as f64 / 2.0;
    let mut buf = vec![0u8; (side * side * 4) as usize];
    let Ok(geometry) = CircleGeometry::new(Point::new(half, half), half) else {
        return buf;
    };
    let radius = geometry.radius();

    for py in 0..side {
        let row_offset = (py * side * 4) as usize;
        for px in 0..side {
            let pixel = Point::new(px as f64 + 0.5, py as f64 + 0.5);
            let dist = pixel.distance(geometry.center());
            if dist > radius {
                continue;
            }

            let alpha = ((radius - dist) / FEATHER).clamp(0.0, 1.0);
            let rgb = geometry.hit(pixel, 1.0, 0.0).hsb.to_rgb();

            let offset = row_offset + (px * 4) as usize;
            buf[offset] = (rgb.r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (rgb.g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (rgb.b * 255.0 + 0.5) as u8;
            buf[offset + 3] = (alpha * 255.0 + 0.5) as u8;
        }
    }

    buf
}

pub(crate) struct ColorWheel {
    id: ViewId,
    held: bool,
    hsb: Hsb,
    size: floem::taffy::prelude::Size<f32>,
    on_drag: Box<dyn Fn(Point, CircleGeometry)>,
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
}

/// Creates the wheel view bound to `session`.
///
/// `radius` is the preferred radius; the real one comes from layout.
pub(crate) fn color_wheel(session: RwSignal<PickerSession>, radius: f64) -> ColorWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let hsb = session.get().hsb();
        id.update_state(hsb);
    });

    let diameter = (radius * 2.0) as f32;
    ColorWheel {
        id,
        held: false,
        hsb: session.get_untracked().hsb(),
        size: Default::default(),
        on_drag: Box::new(move |point, geometry| {
            session.update(|s| {
                s.drag(point, &geometry);
            });
        }),
        wheel_img: None,
        wheel_hash: Vec::new(),
    }
    .style(move |s| {
        s.width(diameter)
            .aspect_ratio(1.0)
            .min_height(100.0)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl ColorWheel {
    fn center(&self) -> Point {
        Point::new(self.size.width as f64 / 2.0, self.size.height as f64 / 2.0)
    }

    fn radius(&self) -> f64 {
        (self.size.width as f64).min(self.size.height as f64) / 2.0
    }

    fn geometry(&self) -> Option<CircleGeometry> {
        match CircleGeometry::new(self.center(), self.radius()) {
            Ok(geometry) => Some(geometry),
            Err(err) => {
                tracing::debug!("wheel not laid out yet: {err}");
                None
            }
        }
    }

    fn wheel_rect(&self) -> Rect {
        let c = self.center();
        let r = self.radius();
        Rect::new(c.x - r, c.y - r, c.x + r, c.y + r)
    }

    fn drag_to(&mut self, pos: kurbo::Point) {
        let Some(geometry) = self.geometry() else {
            return;
        };
        let point = Point::from(pos);
        self.hsb = geometry.hit(point, self.hsb.brightness, self.hsb.hue).hsb;
        (self.on_drag)(point, geometry);
    }

    fn ensure_wheel_image(&mut self) {
        if self.wheel_img.is_some() {
            return;
        }
        let side = constants::WHEEL_RASTER_SIZE;
        let blob = Blob::new(Arc::new(rasterize_wheel(side)));
        self.wheel_hash = blob.id().to_le_bytes().to_vec();
        self.wheel_img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, side, side));
    }
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hsb) = state.downcast::<Hsb>() {
            self.hsb = *hsb;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.drag_to(e.pos);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.drag_to(e.pos);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let Some(geometry) = self.geometry() else {
            return;
        };
        let center: kurbo::Point = geometry.center().into();
        let radius = geometry.radius();

        let wheel_rect = self.wheel_rect();
        cx.save();
        cx.clip(&Circle::new(center, radius));
        self.ensure_wheel_image();
        if let Some(ref img) = self.wheel_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.wheel_hash,
                },
                wheel_rect,
            );
        }
        cx.restore();

        let overlay_alpha = 1.0 - self.hsb.brightness;
        if overlay_alpha > 0.001 {
            let overlay = circle_path(center, radius);
            cx.fill(&overlay, Color::rgba(0.0, 0.0, 0.0, overlay_alpha), 0.0);
        }

        // Cursor sits on the clamped position, never outside the wheel
        let cur_pt: kurbo::Point = geometry
            .position_of(self.hsb.hue, self.hsb.saturation)
            .into();
        let outer = Circle::new(cur_pt, constants::CURSOR_RADIUS + 1.0);
        cx.stroke(
            &outer,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let cursor = Circle::new(cur_pt, constants::CURSOR_RADIUS);
        cx.stroke(&cursor, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let inner = Circle::new(cur_pt, constants::CURSOR_RADIUS - 1.5);
        cx.stroke(
            &inner,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
