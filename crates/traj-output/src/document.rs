//! Wire types of a `.simularium` document.
//!
//! ```text
//! { "trajectoryInfo": { version, timeUnits, timeStepSize, totalSteps, spatialUnits,
//!                       size, cameraDefault, typeMapping, trajectoryTitle?, modelInfo? },
//!   "spatialData":    { version, msgType, bundleStart, bundleSize,
//!                       bundleData: [ { frameNumber, time, data: [f64] } ] },
//!   "plotData":       { version, data: [Plot] } }
//! ```
//!
//! The binary container carries the same three sections, so both readers
//! produce a [`SimulariumDocument`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use traj_core::constants::{DEFAULT_BOX_SIZE, SPATIAL_DATA_MSG_TYPE, current_version};
use traj_core::{CameraData, DisplayType, ModelMetaData, Plot, UnitData, Vec3};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulariumDocument {
    pub trajectory_info: TrajectoryInfo,
    pub spatial_data:    SpatialData,
    #[serde(default)]
    pub plot_data:       PlotDataBlock,
}

// ── trajectoryInfo ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryInfo {
    pub version:        u32,
    pub time_units:     UnitData,
    pub time_step_size: f64,
    pub total_steps:    usize,
    pub spatial_units:  UnitData,
    #[serde(default = "default_size")]
    pub size:           Vec3,
    #[serde(default)]
    pub camera_default: CameraData,
    /// Keyed by the decimal type ID, in ascending ID order.
    pub type_mapping:   IndexMap<String, TypeEntry>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub trajectory_title: String,
    #[serde(default, skip_serializing_if = "ModelMetaData::is_default")]
    pub model_info:     ModelMetaData,
}

fn default_size() -> Vec3 {
    Vec3::splat(DEFAULT_BOX_SIZE)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeEntry {
    pub name:     String,
    #[serde(default)]
    pub geometry: Geometry,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    #[serde(default)]
    pub display_type: DisplayType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url:          Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color:        Option<String>,
}

// ── spatialData ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialData {
    pub version:      u32,
    pub msg_type:     u32,
    pub bundle_start: usize,
    pub bundle_size:  usize,
    pub bundle_data:  Vec<FrameData>,
}

impl SpatialData {
    pub fn new(bundle_start: usize, bundle_data: Vec<FrameData>) -> Self {
        Self {
            version: current_version::SPATIAL_DATA,
            msg_type: SPATIAL_DATA_MSG_TYPE,
            bundle_start,
            bundle_size: bundle_data.len(),
            bundle_data,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameData {
    pub frame_number: usize,
    pub time:         f32,
    pub data:         Vec<f64>,
}

// ── plotData ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotDataBlock {
    pub version: u32,
    pub data:    Vec<Plot>,
}

impl PlotDataBlock {
    pub fn new(data: Vec<Plot>) -> Self {
        Self { version: current_version::PLOT_DATA, data }
    }
}

impl Default for PlotDataBlock {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
