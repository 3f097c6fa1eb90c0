//! Persistence payload types and scene/viewport (de)serialization.
//!
//! Field names match the backend wire format exactly: snake_case records,
//! camelCase inside the `plot_data` block. Missing optional fields default
//! (empty strings, rotation 0, unlocked).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::{Element, ElementKind, FixtureTemplate, PipeKind};
use crate::error::{EditorError, EditorResult};
use crate::geometry::Point;
use crate::scene::Scene;
use crate::stage::{PaperSize, StageConfig};
use crate::viewport::Viewport;

/// Plot-level metadata carried by the session and sent with every save.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotMeta {
    /// `None` until the first successful save assigns a server id.
    pub plot_id: Option<String>,
    pub title: String,
    pub show_name: Option<String>,
    pub venue: Option<String>,
    pub designer: Option<String>,
    pub date: Option<String>,
}

/// One placed fixture in a save request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    /// Library fixture-type id.
    pub fixture_id: String,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub dimmer: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub notes: String,
}

/// A fixture in a load response: the save-request fields plus the
/// server-assigned element id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadFixtureRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub record: FixtureRecord,
}

/// One placed pipe/truss; identical in save requests and load responses
/// (pipe ids are client-generated and round-trip verbatim).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipeRecord {
    #[serde(default)]
    pub pipe_id: String,
    #[serde(default)]
    pub pipe_name: String,
    #[serde(default)]
    pub pipe_type: PipeKind,
    #[serde(default)]
    pub pipe_length: f32,
    #[serde(default)]
    pub pipe_original_length: f32,
    #[serde(default)]
    pub pipe_color: String,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub locked: bool,
}

/// Stage dimensions inside `plot_data`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageDimensions {
    pub width: f32,
    pub depth: f32,
    pub foh_depth: f32,
}

/// Pan/zoom state inside `plot_data`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportInfo {
    pub zoom: f32,
    pub pan: Point,
}

/// The `plot_data` block: everything about the drawing that is not an
/// element record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotData {
    pub paper_size: PaperSize,
    pub stage_dimensions: StageDimensions,
    pub viewport_info: ViewportInfo,
}

/// A complete save request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavePayload {
    pub plot_id: Option<String>,
    pub title: String,
    pub stage_id: String,
    pub fixtures: Vec<FixtureRecord>,
    pub pipes: Vec<PipeRecord>,
    pub plot_data: PlotData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Build a save payload from the live scene, viewport and stage config.
/// Positions are read from each element's current center at call time.
pub fn serialize(
    scene: &Scene,
    viewport: &Viewport,
    stage: &StageConfig,
    meta: &PlotMeta,
) -> SavePayload {
    let mut fixtures = Vec::new();
    let mut pipes = Vec::new();

    for element in scene.iter() {
        let position = element.position();
        match element.kind() {
            ElementKind::Fixture => fixtures.push(FixtureRecord {
                fixture_id: element.prop_text("fixture_id").to_string(),
                x: position.x,
                y: position.y,
                rotation: element.rotation(),
                channel: element.prop_text("channel").to_string(),
                dimmer: element.prop_text("dimmer").to_string(),
                color: element.prop_text("color").to_string(),
                purpose: element.prop_text("purpose").to_string(),
                notes: element.prop_text("notes").to_string(),
            }),
            ElementKind::Pipe => pipes.push(PipeRecord {
                pipe_id: element.id().clone(),
                pipe_name: element.prop_text("name").to_string(),
                pipe_type: element.pipe_kind().unwrap_or_default(),
                pipe_length: element.prop_number("length") as f32,
                pipe_original_length: element.prop_number("originalLength") as f32,
                pipe_color: element.prop_text("color").to_string(),
                x: position.x,
                y: position.y,
                rotation: element.rotation(),
                locked: element.is_locked(),
            }),
        }
    }

    SavePayload {
        plot_id: meta.plot_id.clone(),
        title: meta.title.clone(),
        stage_id: stage.stage_id.clone(),
        fixtures,
        pipes,
        plot_data: PlotData {
            paper_size: stage.paper_size,
            stage_dimensions: StageDimensions {
                width: stage.width,
                depth: stage.depth,
                foh_depth: stage.foh_depth,
            },
            viewport_info: ViewportInfo {
                zoom: viewport.zoom(),
                pan: viewport.pan_offset(),
            },
        },
        show_name: meta.show_name.clone(),
        venue: meta.venue.clone(),
        designer: meta.designer.clone(),
        date: meta.date.clone(),
    }
}

/// Everything rebuilt from a load response, ready to install atomically.
pub struct DeserializedPlot {
    pub elements: Vec<Element>,
    pub viewport: Viewport,
    pub stage: StageConfig,
}

/// Rebuild elements, viewport and stage config from a load response.
///
/// Element ids are preserved; rotation is applied after construction and
/// lock state last of all, so a persisted lock cannot be bypassed by
/// default-unlocked behavior wiring in between. Duplicate ids in the
/// response fail before any scene is touched.
pub fn deserialize(
    response: &crate::persist::LoadResponse,
    surface: (f32, f32),
) -> EditorResult<DeserializedPlot> {
    let plot_data = &response.plot.plot_data;

    let mut stage = StageConfig::new(
        response.plot.stage_id.clone(),
        plot_data.stage_dimensions.width,
        plot_data.stage_dimensions.depth,
        plot_data.stage_dimensions.foh_depth,
    );
    stage.paper_size = plot_data.paper_size;

    let mut viewport = Viewport::new(surface, (stage.paper_size.width, stage.paper_size.height));
    viewport.restore(plot_data.viewport_info.zoom, plot_data.viewport_info.pan);

    let mut elements = Vec::new();

    for loaded in &response.fixtures {
        let record = &loaded.record;
        let id = loaded
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let template = FixtureTemplate {
            fixture_id: record.fixture_id.clone(),
            name: String::new(),
            channel: record.channel.clone(),
            dimmer: record.dimmer.clone(),
            color: record.color.clone(),
            purpose: record.purpose.clone(),
            notes: record.notes.clone(),
        };
        let mut element =
            Element::fixture_with_id(id, &template, Point::new(record.x, record.y));
        element.restore_rotation(record.rotation);
        elements.push(element);
    }

    for record in &response.pipes {
        let id = if record.pipe_id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            record.pipe_id.clone()
        };
        let mut element = Element::pipe_with_id(
            id,
            &record.pipe_name,
            record.pipe_length,
            record.pipe_type,
            Point::new(record.x, record.y),
        );
        {
            let state = element.state_mut();
            state
                .properties
                .insert("originalLength".to_string(), (record.pipe_original_length as f64).into());
            state
                .properties
                .insert("color".to_string(), record.pipe_color.as_str().into());
        }
        element.restore_rotation(record.rotation);
        // Lock goes last; nothing after this point may mutate the element
        element.restore_locked(record.locked);
        elements.push(element);
    }

    let mut seen = std::collections::HashSet::new();
    for element in &elements {
        if !seen.insert(element.id().clone()) {
            return Err(EditorError::Validation(format!(
                "load response repeats element id {}",
                element.id()
            )));
        }
    }

    Ok(DeserializedPlot {
        elements,
        viewport,
        stage,
    })
}
