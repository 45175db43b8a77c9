//! Picker panel: wheel, swatches, hex row, brightness slider and the
//! Cancel/Save buttons that close the session.

use std::rc::Rc;
use std::sync::Once;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::text::FONT_SYSTEM;

use crate::brightness_slider::brightness_slider;
use crate::color::Rgb;
use crate::color_wheel::color_wheel;
use crate::config::PickerConfig;
use crate::constants;
use crate::inputs::{copy_button, hex_input};
use crate::session::{Outcome, PickerSession};

static LOAD_LUCIDE_FONT: Once = Once::new();

fn to_color(rgb: Rgb) -> Color {
    Color::rgba(rgb.r, rgb.g, rgb.b, 1.0)
}

fn swatch(color: impl Fn() -> Rgb + 'static) -> impl IntoView {
    empty().style(move |st| {
        st.width(constants::SWATCH_SIZE)
            .height(constants::SWATCH_SIZE)
            .border_radius(constants::RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(180, 180, 180))
            .background(to_color(color()))
    })
}

fn action_button(
    icon: lucide_icons::Icon,
    text: &'static str,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    h_stack((
        label(move || icon.unicode().to_string())
            .style(|s| s.font_size(14.0).font_family("lucide".to_string())),
        label(move || text).style(|s| s.font_size(constants::BUTTON_FONT)),
    ))
    .style(|s| {
        s.items_center()
            .gap(4.0)
            .padding_horiz(10.0)
            .padding_vert(4.0)
            .border(1.0)
            .border_color(Color::rgb8(200, 200, 200))
            .border_radius(constants::RADIUS)
            .background(Color::WHITE)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        on_click();
    })
}

/// Finalize the session and hand the outcome to the host.
fn close_with(
    session: RwSignal<PickerSession>,
    on_close: &dyn Fn(Outcome),
    finish: fn(&mut PickerSession) -> Outcome,
) {
    let mut s = session.get_untracked();
    let outcome = finish(&mut s);
    session.set(s);
    on_close(outcome);
}

/// Creates the top-level picker view.
///
/// The picker reads from and writes to `session`, which should be opened
/// from `config.start_color` (see [`PickerConfig::open_session`]). User
/// edits update it live. Cancel restores the opened color, Save keeps the
/// current one, and either way `on_close` receives the outcome.
pub fn wheel_picker(
    session: RwSignal<PickerSession>,
    config: PickerConfig,
    on_close: impl Fn(Outcome) + 'static,
) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });

    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            tracing::warn!("invalid picker config ({err}), falling back to default geometry");
            PickerConfig {
                radius: crate::config::DEFAULT_RADIUS,
                brightness: Default::default(),
                ..config
            }
        }
    };
    let on_close: Rc<dyn Fn(Outcome)> = Rc::new(on_close);
    let on_cancel = on_close.clone();
    let on_save = on_close;

    v_stack((
        color_wheel(session, config.radius).style(|s| s.margin_top(12.0)),
        h_stack((
            swatch(move || session.get().original()),
            swatch(move || session.get().current()),
            empty().style(|s| s.flex_grow(1.0)),
            hex_input(session),
            copy_button(move || session.get_untracked().hex_label()),
        ))
        .style(|st| st.items_center().gap(constants::GAP / 2.0)),
        brightness_slider(session, config.brightness),
        h_stack((
            empty().style(|s| s.flex_grow(1.0)),
            action_button(lucide_icons::Icon::X, "Cancel", move || {
                close_with(session, &*on_cancel, PickerSession::cancel)
            }),
            action_button(lucide_icons::Icon::Check, "Save", move || {
                close_with(session, &*on_save, PickerSession::commit)
            }),
        ))
        .style(|st| st.items_center().gap(constants::GAP)),
    ))
    .style(move |st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .justify_center()
            .background(to_color(config.background))
    })
}
