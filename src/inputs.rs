//! Hex entry field and clipboard button.

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::codec;
use crate::color::Rgb;
use crate::constants;
use crate::error::PickerError;
use crate::session::PickerSession;

/// True when `text` is a complete `#RRGGBB` (hash optional).
fn is_full_hex(text: &str) -> bool {
    let digits = text.trim().trim_start_matches('#');
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// True when `raw` is the session's own label, ignoring case and the `#`.
fn echoes_label(raw: &str, session: &PickerSession) -> bool {
    let label = session.hex_label();
    raw.trim()
        .trim_start_matches('#')
        .eq_ignore_ascii_case(label.trim_start_matches('#'))
}

/// Color a keystroke should apply, if any.
///
/// Only complete 6-digit text that differs from the session's label counts.
/// The label is what the field shows after the session changes, and it is
/// quantized to 8 bits, so applying it back would drift the color.
fn live_edit(raw: &str, session: &PickerSession) -> Option<Rgb> {
    if !is_full_hex(raw) || echoes_label(raw, session) {
        return None;
    }
    Some(codec::from_hex(raw))
}

/// Color to apply on Enter or focus loss. Unedited text yields `Ok(None)`.
fn committed_edit(raw: &str, session: &PickerSession) -> Result<Option<Rgb>, PickerError> {
    if echoes_label(raw, session) {
        return Ok(None);
    }
    raw.parse::<Rgb>().map(Some)
}

/// A hex text field bound to the session's current color.
///
/// Complete 6-digit values apply while typing. On Enter or focus loss the
/// text is parsed strictly (3 or 6 digits); anything else snaps back to
/// the current label.
pub(crate) fn hex_input(session: RwSignal<PickerSession>) -> impl IntoView {
    let text = RwSignal::new(session.get_untracked().hex_label());

    // Session → text
    create_effect(move |_| {
        let label = session.get().hex_label();
        if text.get_untracked() != label {
            text.set(label);
        }
    });

    // Text → session on every complete keystroke
    create_effect(move |_| {
        let raw = text.get();
        if let Some(typed) = live_edit(&raw, &session.get_untracked()) {
            session.update(|s| s.set_rgb(typed));
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        match committed_edit(&raw, &session.get_untracked()) {
            Ok(Some(rgb)) => session.update(|s| s.set_rgb(rgb)),
            Ok(None) => {}
            Err(err) => {
                tracing::debug!("{err}, restoring hex label");
                text.set(session.get_untracked().hex_label());
            }
        }
    };

    text_input(text)
        .style(|s| {
            s.width(constants::HEX_INPUT_WIDTH)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(3.0)
        })
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_commit();
        })
        .on_event(floem::event::EventListener::KeyDown, move |e| {
            if let floem::event::Event::KeyDown(ke) = e {
                if ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                {
                    on_commit();
                    return floem::event::EventPropagation::Stop;
                }
            }
            floem::event::EventPropagation::Continue
        })
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        let text = get_text();
        if text.is_empty() {
            return;
        }
        copy_to_clipboard(&text);
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                tracing::warn!("failed to copy {text} to clipboard: {err}");
            }
        }
        Err(err) => tracing::warn!("clipboard unavailable: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsb;

    /// Runs both bindings once, the way the effects fire after a session change.
    fn sync_field(session: &mut PickerSession, text: &mut String) {
        let label = session.hex_label();
        if *text != label {
            *text = label;
        }
        if let Some(typed) = live_edit(text, session) {
            session.set_rgb(typed);
        }
    }

    #[test]
    fn full_hex_detection() {
        assert!(is_full_hex("#3B82F6"));
        assert!(is_full_hex("3b82f6"));
        assert!(!is_full_hex("#3B82F"));
        assert!(!is_full_hex("#FFF"));
        assert!(!is_full_hex("#3B82FG"));
    }

    #[test]
    fn own_label_is_never_applied() {
        let mut session = PickerSession::open(Rgb::new(0.3, 0.55, 0.8));
        session.set_hsb(Hsb::new(0.37, 0.3, 0.61));
        let label = session.hex_label();
        assert_eq!(live_edit(&label, &session), None);
        assert_eq!(live_edit(&label.to_lowercase(), &session), None);
        assert_eq!(live_edit(label.trim_start_matches('#'), &session), None);
        assert!(matches!(committed_edit(&label, &session), Ok(None)));
    }

    #[test]
    fn brightness_round_trip_keeps_saturation() {
        let mut session = PickerSession::open(Rgb::WHITE);
        let mut text = session.hex_label();
        session.set_hsb(Hsb::new(0.0, 0.3, 1.0));
        sync_field(&mut session, &mut text);

        session.set_brightness(0.01);
        sync_field(&mut session, &mut text);
        session.set_brightness(1.0);
        sync_field(&mut session, &mut text);

        let hsb = session.hsb();
        assert!((hsb.saturation - 0.3).abs() < 1e-9, "saturation drifted to {}", hsb.saturation);
        assert_eq!(hsb.brightness, 1.0);
        assert_eq!(text, session.hex_label());
    }

    #[test]
    fn typed_text_applies() {
        let mut session = PickerSession::open(Rgb::WHITE);
        assert_eq!(live_edit("#00ff00", &session), Some(Rgb::from_rgb8(0, 255, 0)));
        // incomplete text waits for more keystrokes
        assert_eq!(live_edit("#00ff0", &session), None);

        let mut text = String::from("#3B82F6");
        if let Some(typed) = live_edit(&text, &session) {
            session.set_rgb(typed);
        }
        sync_field(&mut session, &mut text);
        assert_eq!(session.current(), Rgb::from_rgb8(0x3B, 0x82, 0xF6));
        assert_eq!(text, "#3B82F6");
    }

    #[test]
    fn commit_parses_strictly() {
        let session = PickerSession::open(Rgb::BLACK);
        assert_eq!(committed_edit("#FFF", &session).unwrap(), Some(Rgb::WHITE));
        assert!(matches!(
            committed_edit("#12", &session),
            Err(PickerError::InvalidHex(_))
        ));
    }
}
