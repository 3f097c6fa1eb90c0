//! Save payload shape and serialize/deserialize round-trip laws.

use stageplot::persist::{deserialize, serialize, LoadResponse};

use crate::helpers::{session_with_stage, TestSessionBuilder, SURFACE};

#[test]
fn empty_scene_payload_shape() {
    let session = session_with_stage();
    let payload = session.save_payload().unwrap();
    insta::assert_json_snapshot!(payload, @r###"
    {
      "plot_id": null,
      "title": "",
      "stage_id": "3",
      "fixtures": [],
      "pipes": [],
      "plot_data": {
        "paperSize": {
          "width": 1100.0,
          "height": 850.0
        },
        "stageDimensions": {
          "width": 12.0,
          "depth": 10.0,
          "fohDepth": 3.0
        },
        "viewportInfo": {
          "zoom": 1.0,
          "pan": {
            "x": -150.0,
            "y": -125.0
          }
        }
      }
    }
    "###);
}

#[test]
fn optional_metadata_is_omitted_when_unset() {
    let session = session_with_stage();
    let payload = session.save_payload().unwrap();
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("show_name").is_none());
    assert!(value.get("venue").is_none());
}

#[test]
fn round_trip_preserves_ids_positions_and_locks() {
    // Two fixtures and one pipe, one element locked
    let mut session = TestSessionBuilder::new()
        .with_fixture((100.0, 100.0))
        .with_fixture((200.0, 150.0))
        .with_pipe("Electric 1", 10.0, (150.0, 40.0))
        .build();
    let pipe_id = session.scene.ids()[2].clone();
    {
        let events = &session.events;
        let pipe = session.scene.find_by_id_mut(&pipe_id).unwrap();
        pipe.rotate(90.0);
        pipe.double_click(events); // lock
    }

    let payload = session.save_payload().unwrap();

    // Shape the payload the way the backend would serve it back
    let response: LoadResponse = serde_json::from_value(serde_json::json!({
        "plot": {
            "stage_id": payload.stage_id.clone(),
            "plot_data": serde_json::to_value(&payload.plot_data).unwrap(),
        },
        "fixtures": payload.fixtures.iter().enumerate().map(|(i, f)| {
            let mut v = serde_json::to_value(f).unwrap();
            v["id"] = serde_json::json!(format!("f{}", i + 1));
            v
        }).collect::<Vec<_>>(),
        "pipes": serde_json::to_value(&payload.pipes).unwrap(),
    }))
    .unwrap();

    let plot = deserialize(&response, SURFACE).unwrap();
    let reserialized = serialize(
        &{
            let mut scene = stageplot::scene::Scene::new();
            for element in plot.elements {
                scene.add(element).unwrap();
            }
            scene
        },
        &plot.viewport,
        &plot.stage,
        &stageplot::persist::PlotMeta::default(),
    );

    assert_eq!(reserialized.fixtures, payload.fixtures);
    assert_eq!(reserialized.pipes, payload.pipes);
    assert_eq!(reserialized.plot_data, payload.plot_data);
    let pipe = &reserialized.pipes[0];
    assert_eq!(pipe.pipe_id, pipe_id);
    assert!(pipe.locked);
    assert_eq!(pipe.rotation, 90.0);
}
