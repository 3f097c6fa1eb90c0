//! Save/load through the store trait, including failure atomicity.

use stageplot::editor::EditorSession;
use stageplot::error::EditorError;
use stageplot::geometry::Point;
use stageplot::persist::StoreError;

use crate::helpers::{session_with_stage, FailingStore, MemoryStore, TestSessionBuilder, SURFACE};

#[test]
fn first_save_adopts_the_server_plot_id() {
    let mut session = TestSessionBuilder::new()
        .with_fixture((250.0, 225.0))
        .build();
    let mut store = MemoryStore::default();

    let plot_id = session.save_to(&mut store).unwrap();
    assert_eq!(plot_id, "101");
    assert_eq!(session.meta.plot_id.as_deref(), Some("101"));
    assert_eq!(store.save_count, 1);

    // A second save updates in place under the same id
    session.save_to(&mut store).unwrap();
    assert_eq!(session.meta.plot_id.as_deref(), Some("101"));
    assert_eq!(store.save_count, 2);
}

#[test]
fn saving_without_a_stage_never_reaches_the_store() {
    let mut session = EditorSession::new(SURFACE).unwrap();
    let mut store = MemoryStore::default();

    assert!(matches!(
        session.save_to(&mut store),
        Err(EditorError::Validation(_))
    ));
    assert_eq!(store.save_count, 0);
}

#[test]
fn transport_failure_leaves_the_session_untouched() {
    let mut session = TestSessionBuilder::new()
        .with_fixture((250.0, 225.0))
        .build();

    let err = session.save_to(&mut FailingStore).unwrap_err();
    assert!(matches!(err, EditorError::Store(StoreError::Transport(_))));
    assert_eq!(session.meta.plot_id, None);

    let err = session.load_from(&mut FailingStore, "101").unwrap_err();
    assert!(matches!(err, EditorError::Store(StoreError::Transport(_))));
    assert_eq!(session.scene.len(), 1);
}

#[test]
fn loading_an_unknown_plot_is_not_found() {
    let mut session = session_with_stage();
    let mut store = MemoryStore::default();
    session.save_to(&mut store).unwrap();

    assert!(matches!(
        session.load_from(&mut store, "999"),
        Err(EditorError::Store(StoreError::NotFound(_)))
    ));
}

#[test]
fn save_then_load_rebuilds_the_whole_session() {
    let mut original = TestSessionBuilder::new()
        .with_fixture((250.0, 225.0))
        .with_fixture((400.0, 300.0))
        .with_pipe("Electric 1", 10.0, (300.0, 150.0))
        .build();
    original.meta.title = "Macbeth".to_string();
    let pipe_id = original.scene.ids()[2].clone();
    {
        let events = &original.events;
        let pipe = original.scene.find_by_id_mut(&pipe_id).unwrap();
        pipe.rotate(90.0);
        pipe.double_click(events); // lock
    }
    original.wheel_zoom(true);

    let mut store = MemoryStore::default();
    let plot_id = original.save_to(&mut store).unwrap();

    let mut restored = EditorSession::new(SURFACE).unwrap();
    restored.load_from(&mut store, &plot_id).unwrap();

    assert_eq!(restored.scene.len(), 3);
    assert_eq!(restored.meta.plot_id.as_deref(), Some("101"));
    assert_eq!(restored.meta.title, "Macbeth");
    assert_eq!(
        restored.stage.as_ref().map(|s| s.stage_id.as_str()),
        Some("3")
    );

    // Fixtures come back under server-assigned ids, in save order
    let f1 = restored.scene.find_by_id("f1").unwrap();
    assert_eq!(f1.position(), Point::new(250.0, 225.0));
    let f2 = restored.scene.find_by_id("f2").unwrap();
    assert_eq!(f2.position(), Point::new(400.0, 300.0));

    // The pipe keeps its client-generated id, rotation and lock
    let pipe = restored.scene.find_by_id(&pipe_id).unwrap();
    assert_eq!(pipe.position(), Point::new(300.0, 150.0));
    assert_eq!(pipe.rotation(), 90.0);
    assert!(pipe.is_locked());
    assert_eq!(pipe.prop_number("length"), 10.0);

    assert_eq!(restored.viewport.zoom(), original.viewport.zoom());
    assert_eq!(
        restored.viewport.pan_offset(),
        original.viewport.pan_offset()
    );
}
