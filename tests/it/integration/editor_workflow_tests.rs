//! Tool-mode workflows end to end: stamp placement, drag, space-pan, zoom.
//!
//! The default test session centers an 1100x850 sheet on an 800x600
//! surface, so at zoom 1.0 a screen point maps to `screen + (150, 125)`
//! in document coordinates.

use stageplot::geometry::Point;
use stageplot::input::{KeyInput, ToolMode};

use crate::helpers::{session_with_stage, TestSessionBuilder};

#[test]
fn stamping_a_fixture_places_one_element_and_reverts_to_select() {
    let mut session = session_with_stage();
    session.pick_fixture(Default::default());
    assert_eq!(session.controller.mode(), ToolMode::AddFixture);

    session.pointer_down(Point::new(100.0, 100.0)).unwrap();
    assert_eq!(session.scene.len(), 1);
    assert_eq!(session.controller.mode(), ToolMode::Select);

    let id = session.scene.ids()[0].clone();
    let placed = session.scene.find_by_id(&id).unwrap();
    assert_eq!(placed.position(), Point::new(250.0, 225.0));
    assert_eq!(placed.prop_text("channel"), "1");

    // A second click is now a plain select-mode press, not another stamp
    session.pointer_down(Point::new(400.0, 400.0)).unwrap();
    assert_eq!(session.scene.len(), 1);
}

#[test]
fn placement_click_without_a_picked_fixture_is_a_noop() {
    let mut session = session_with_stage();
    session.controller.set_mode(ToolMode::AddFixture);

    session.pointer_down(Point::new(100.0, 100.0)).unwrap();
    assert!(session.scene.is_empty());
    assert_eq!(session.controller.mode(), ToolMode::AddFixture);
}

#[test]
fn click_and_drag_selects_and_moves_a_fixture() {
    let mut session = TestSessionBuilder::new()
        .with_fixture((250.0, 225.0))
        .build();
    let id = session.scene.ids()[0].clone();

    session.pointer_down(Point::new(100.0, 100.0)).unwrap();
    assert_eq!(session.scene.selected_id(), Some(&id));

    session.pointer_move(Point::new(180.0, 140.0));
    session.pointer_up(Point::new(180.0, 140.0));
    assert_eq!(
        session.scene.find_by_id(&id).unwrap().position(),
        Point::new(330.0, 265.0)
    );
    assert!(session.controller.gesture().is_idle());
}

#[test]
fn clicking_empty_space_deselects() {
    let mut session = TestSessionBuilder::new()
        .with_fixture((250.0, 225.0))
        .build();
    session.pointer_down(Point::new(100.0, 100.0)).unwrap();
    assert!(session.scene.selected_id().is_some());

    session.pointer_up(Point::new(100.0, 100.0));
    session.pointer_down(Point::new(700.0, 500.0)).unwrap();
    assert_eq!(session.scene.selected_id(), None);
}

#[test]
fn double_click_locks_and_blocks_dragging() {
    let mut session = TestSessionBuilder::new()
        .with_pipe("Electric 1", 10.0, (250.0, 225.0))
        .build();
    let id = session.scene.ids()[0].clone();

    session.double_click(Point::new(100.0, 100.0));
    assert!(session.scene.find_by_id(&id).unwrap().is_locked());

    session.pointer_down(Point::new(100.0, 100.0)).unwrap();
    session.pointer_move(Point::new(300.0, 300.0));
    session.pointer_up(Point::new(300.0, 300.0));
    assert_eq!(
        session.scene.find_by_id(&id).unwrap().position(),
        Point::new(250.0, 225.0)
    );

    // Locked elements still take selection
    assert_eq!(session.scene.selected_id(), Some(&id));
}

#[test]
fn space_pan_shifts_the_view_and_restores_the_tool() {
    let mut session = session_with_stage();
    let before = session.viewport.pan_offset();

    session.key_input(KeyInput::SpaceDown { repeat: false });
    assert_eq!(session.controller.mode(), ToolMode::Pan);

    session.pointer_down(Point::new(200.0, 200.0)).unwrap();
    session.pointer_move(Point::new(230.0, 180.0));
    session.pointer_up(Point::new(230.0, 180.0));
    session.key_input(KeyInput::SpaceUp);

    assert_eq!(session.controller.mode(), ToolMode::Select);
    let after = session.viewport.pan_offset();
    assert!((after.x - before.x - 30.0).abs() < 1e-4);
    assert!((after.y - before.y + 20.0).abs() < 1e-4);
}

#[test]
fn wheel_and_button_zoom_use_their_own_factors() {
    let mut session = session_with_stage();
    session.wheel_zoom(true);
    assert!((session.viewport.zoom() - 1.1).abs() < 1e-4);
    session.button_zoom(false);
    assert!((session.viewport.zoom() - 1.1 * 0.8).abs() < 1e-4);
}

#[test]
fn pointer_leave_ends_the_gesture() {
    let mut session = TestSessionBuilder::new()
        .with_fixture((250.0, 225.0))
        .build();
    session.pointer_down(Point::new(100.0, 100.0)).unwrap();
    assert!(!session.controller.gesture().is_idle());

    session.pointer_leave();
    assert!(session.controller.gesture().is_idle());

    // Moves after the pointer left the surface drag nothing
    let id = session.scene.ids()[0].clone();
    session.pointer_move(Point::new(500.0, 500.0));
    assert_eq!(
        session.scene.find_by_id(&id).unwrap().position(),
        Point::new(250.0, 225.0)
    );
}
