//! Viewport transform laws over arbitrary pan/zoom histories.

use stageplot::geometry::Point;
use stageplot::viewport::Viewport;

fn assert_round_trips(vp: &Viewport, p: Point) {
    let back = vp.screen_to_document(vp.document_to_screen(p));
    assert!(
        (back.x - p.x).abs() < 1e-2 && (back.y - p.y).abs() < 1e-2,
        "round trip drifted: {:?} -> {:?}",
        p,
        back
    );
}

#[test]
fn round_trip_holds_across_pan_zoom_history() {
    let mut vp = Viewport::with_origin((1280.0, 720.0), (1100.0, 850.0), Point::new(44.0, 40.0));
    let steps: &[(f32, f32, f32)] = &[
        // (zoom factor, pan dx, pan dy)
        (1.1, 0.0, 0.0),
        (1.1, -80.0, 20.0),
        (0.9, 300.0, -150.0),
        (2.0, 12.5, 12.5),
        (0.25, -5.0, 999.0),
    ];

    let probes = [
        Point::ZERO,
        Point::new(550.0, 425.0),
        Point::new(-100.0, 2000.0),
    ];

    for &(factor, dx, dy) in steps {
        vp.set_zoom(factor);
        vp.pan(dx, dy);
        for &p in &probes {
            assert_round_trips(&vp, p);
        }
    }
}

#[test]
fn zoom_stays_clamped_for_any_factor_sequence() {
    let mut vp = Viewport::new((800.0, 600.0), (800.0, 600.0));
    let factors = [10.0, 0.0001, 1.0, 3.3, 3.3, 0.5, 100.0, 0.9];
    for f in factors {
        let z = vp.set_zoom(f);
        assert!((0.2..=5.0).contains(&z), "zoom {} out of range", z);
        assert_eq!(z, vp.zoom());
    }
}

#[test]
fn no_op_zoom_factor_keeps_view_identical() {
    let mut vp = Viewport::new((800.0, 600.0), (800.0, 600.0));
    vp.set_zoom(1.6);
    vp.pan(30.0, -10.0);
    let before = (vp.zoom(), vp.pan_offset());
    vp.set_zoom(1.0);
    assert_eq!((vp.zoom(), vp.pan_offset()), before);
}
