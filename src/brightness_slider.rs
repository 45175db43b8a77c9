//! Brightness slider.
//!
//! Renders a horizontal gradient from the current hue/saturation at full
//! brightness (left) to black (right) as a rasterized image. Values are
//! snapped to the configured [`SliderRange`] step.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::{Hsb, Rgb};
use crate::config::SliderRange;
use crate::constants;
use crate::session::PickerSession;

/// Rasterize a horizontal gradient: `base` on the left → black on the right.
fn rasterize_brightness_gradient(width: u32, height: u32, base: Rgb) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let cr = ((1.0 - t) * base.r * 255.0 + 0.5) as u8;
        let cg = ((1.0 - t) * base.g * 255.0 + 0.5) as u8;
        let cb = ((1.0 - t) * base.b * 255.0 + 0.5) as u8;
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = cr;
            buf[offset + 1] = cg;
            buf[offset + 2] = cb;
            buf[offset + 3] = 255;
        }
    }
    buf
}

/// Full-brightness color at the session's hue and saturation.
fn gradient_base(hsb: Hsb) -> Rgb {
    Hsb::new(hsb.hue, hsb.saturation, 1.0).to_rgb()
}

enum BrightnessUpdate {
    Value(f64),
    Base(Rgb),
}

pub(crate) struct BrightnessSlider {
    id: ViewId,
    held: bool,
    brightness: f64,
    base: Rgb,
    range: SliderRange,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
    cached_color: (u8, u8, u8),
    cached_dims: (u32, u32),
}

/// Creates a horizontal brightness slider bound to `session`.
///
/// Left is `range.max` (full color), right is `range.min` (black).
pub(crate) fn brightness_slider(
    session: RwSignal<PickerSession>,
    range: SliderRange,
) -> BrightnessSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let hsb = session.get().hsb();
        id.update_state(BrightnessUpdate::Value(hsb.brightness));
        id.update_state(BrightnessUpdate::Base(gradient_base(hsb)));
    });

    let hsb = session.get_untracked().hsb();
    BrightnessSlider {
        id,
        held: false,
        brightness: hsb.brightness,
        base: gradient_base(hsb),
        range,
        size: Default::default(),
        on_change: Box::new(move |val| {
            session.update(|s| s.set_brightness(val));
        }),
        grad_img: None,
        grad_hash: Vec::new(),
        cached_color: (0, 0, 0),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl BrightnessSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        let r = constants::THUMB_RADIUS;
        let usable = w - 2.0 * r;
        if usable > 0.0 {
            let t = ((x - r) / usable).clamp(0.0, 1.0);
            let span = self.range.max - self.range.min;
            self.brightness = self.range.snap(self.range.max - t * span);
        }
    }

    fn ensure_gradient_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let color_key = self.base.to_rgb8();
        let dims = (pw, ph);
        if self.cached_dims == dims && self.cached_color == color_key {
            return;
        }

        let blob = Blob::new(Arc::new(rasterize_brightness_gradient(pw, ph, self.base)));
        self.grad_hash = blob.id().to_le_bytes().to_vec();
        self.grad_img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, pw, ph));
        self.cached_color = color_key;
        self.cached_dims = dims;
    }
}

impl View for BrightnessSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<BrightnessUpdate>() {
            match *update {
                BrightnessUpdate::Value(val) => self.brightness = val,
                BrightnessUpdate::Base(rgb) => self.base = rgb,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                (self.on_change)(self.brightness);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos.x);
                (self.on_change)(self.brightness);
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
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        let scale = cx.scale();
        self.ensure_gradient_image(scale);
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb ring; left = max, right = min
        let radius = constants::THUMB_RADIUS;
        let t = 1.0 - self.range.fraction(self.brightness);
        let thumb_x = radius + t * (w - 2.0 * radius);
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let innermost = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 3.0);
        cx.stroke(
            &innermost,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_fades_to_black() {
        let buf = rasterize_brightness_gradient(11, 2, Rgb::new(1.0, 0.5, 0.0));
        assert_eq!(&buf[0..4], &[255, 128, 0, 255]);
        let last = ((10) * 4) as usize;
        assert_eq!(&buf[last..last + 4], &[0, 0, 0, 255]);
    }

    #[test]
    fn gradient_base_ignores_brightness() {
        let base = gradient_base(Hsb::new(0.0, 1.0, 0.2));
        assert_eq!(base.to_rgb8(), (255, 0, 0));
    }
}
