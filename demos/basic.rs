//! Standalone demo: opens a window with the wheel picker and logs the result.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_wheel::{wheel_picker, Outcome, PickerConfig, Rgb};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = PickerConfig::default().with_start_color(Rgb::from_rgb8(0x3B, 0x82, 0xF6));
    let session = RwSignal::new(config.open_session());

    floem::Application::new()
        .window(
            move |_| {
                wheel_picker(session, config, |outcome| {
                    match outcome {
                        Outcome::Saved(c) => tracing::info!("saved {c}"),
                        Outcome::Cancelled(c) => tracing::info!("cancelled, keeping {c}"),
                    }
                    floem::quit_app();
                })
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((280.0, 420.0))
                    .title("floem-wheel"),
            ),
        )
        .run();
}
