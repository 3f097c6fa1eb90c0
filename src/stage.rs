//! Stage and paper configuration.

use serde::{Deserialize, Serialize};

/// Measurement unit for stage dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "ft")]
    Feet,
}

/// Drawing sheet size in document pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaperSize {
    pub width: f32,
    pub height: f32,
}

impl Default for PaperSize {
    fn default() -> Self {
        // US letter landscape at 100 px/inch
        Self {
            width: 1100.0,
            height: 850.0,
        }
    }
}

/// Physical dimensions of the drawn venue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    pub stage_id: String,
    pub name: String,
    pub unit: Unit,
    /// Stage width in `unit`s.
    pub width: f32,
    /// Stage depth in `unit`s.
    pub depth: f32,
    /// Front-of-house depth in `unit`s.
    pub foh_depth: f32,
    pub paper_size: PaperSize,
}

impl StageConfig {
    pub fn new(stage_id: impl Into<String>, width: f32, depth: f32, foh_depth: f32) -> Self {
        Self {
            stage_id: stage_id.into(),
            name: String::new(),
            unit: Unit::default(),
            width,
            depth,
            foh_depth,
            paper_size: PaperSize::default(),
        }
    }
}
