use floem_wheel::{CircleGeometry, Outcome, PickerConfig, PickerSession, Point, Rgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn wheel() -> CircleGeometry {
    CircleGeometry::new(Point::new(120.0, 120.0), 120.0).unwrap()
}

#[test]
fn cancel_after_random_edits_restores_the_opened_color() {
    let mut rng = StdRng::seed_from_u64(7);
    let g = wheel();
    for _ in 0..50 {
        let start = Rgb::new(rng.gen(), rng.gen(), rng.gen());
        let mut session = PickerSession::open(start);
        for _ in 0..rng.gen_range(1..40) {
            match rng.gen_range(0..3) {
                0 => {
                    let p = Point::new(rng.gen_range(-200.0..440.0), rng.gen_range(-200.0..440.0));
                    let cursor = session.drag(p, &g);
                    assert!(cursor.distance(g.center()) <= g.radius() + 1e-9);
                }
                1 => session.set_brightness(rng.gen_range(0.0..=1.0)),
                _ => session.set_rgb(Rgb::from_rgb8(rng.gen(), rng.gen(), rng.gen())),
            }
            let hsb = session.hsb();
            assert!((0.0..=1.0).contains(&hsb.saturation));
            assert!((0.0..1.0).contains(&hsb.hue));
        }
        assert_eq!(session.cancel(), Outcome::Cancelled(start));
        assert_eq!(session.current(), start);
    }
}

#[test]
fn save_keeps_the_dragged_color() {
    let config = PickerConfig::default().with_start_color(Rgb::BLACK);
    let mut session = config.open_session();
    session.set_brightness(1.0);
    session.drag(Point::new(120.0, 500.0), &wheel());
    let outcome = session.commit();
    assert!(matches!(outcome, Outcome::Saved(_)));
    assert_eq!(session.hex_label(), floem_wheel::to_hex(&outcome.color()));
    assert_ne!(outcome.color(), Rgb::BLACK);
}

#[test]
fn hex_label_follows_every_update() {
    let mut session = PickerSession::open(Rgb::WHITE);
    assert_eq!(session.hex_label(), "#FFFFFF");
    session.drag(Point::new(240.0, 120.0), &wheel());
    assert_eq!(session.hex_label(), "#FF0000");
    session.set_brightness(0.0);
    assert_eq!(session.hex_label(), "#000000");
    session.set_rgb(floem_wheel::from_hex("#00ff00"));
    assert_eq!(session.hex_label(), "#00FF00");
}
