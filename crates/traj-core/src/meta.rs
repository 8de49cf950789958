//! Scene and provenance metadata carried in the trajectory header.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BOX_SIZE, default_camera};
use crate::Vec3;

/// Initial camera placement, also used when the viewer resets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraData {
    pub position: Vec3,
    pub look_at_position: Vec3,
    pub up_vector: Vec3,
    pub fov_degrees: f32,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            position:         Vec3::from_array(default_camera::POSITION),
            look_at_position: Vec3::from_array(default_camera::LOOK_AT),
            up_vector:        Vec3::from_array(default_camera::UP_VECTOR),
            fov_degrees:      default_camera::FOV_DEGREES,
        }
    }
}

/// Free-text provenance for the model that produced a trajectory.
///
/// Every field is optional and omitted from output when unset.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code_license_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_data_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output_data_url: Option<String>,
}

impl ModelMetaData {
    pub fn is_default(&self) -> bool {
        *self == ModelMetaData::default()
    }
}

/// Scene-level metadata for one trajectory.
#[derive(Clone, Debug, PartialEq)]
pub struct MetaData {
    /// Bounding volume.  `None` until set; written as the default box.
    pub box_size: Option<Vec3>,
    pub camera_defaults: CameraData,
    /// Multiplier already applied to the spatial data.
    pub scale_factor: f32,
    pub trajectory_title: String,
    pub model_meta_data: ModelMetaData,
}

impl Default for MetaData {
    fn default() -> Self {
        Self {
            box_size:         None,
            camera_defaults:  CameraData::default(),
            scale_factor:     1.0,
            trajectory_title: String::new(),
            model_meta_data:  ModelMetaData::default(),
        }
    }
}

impl MetaData {
    pub fn with_box_size(mut self, box_size: Vec3) -> Self {
        self.box_size = Some(box_size);
        self
    }

    /// Box size as written to the header.
    pub fn box_size_or_default(&self) -> Vec3 {
        self.box_size.unwrap_or(Vec3::splat(DEFAULT_BOX_SIZE))
    }

    /// Resolve the box after scaling.
    ///
    /// An existing box is multiplied by `scale_factor`.  Otherwise `fallback`
    /// is used (also scaled), or the default box if there is none.  The
    /// default box is never scaled.
    pub fn set_box_size(&mut self, fallback: Option<Vec3>) {
        self.box_size = Some(match (self.box_size, fallback) {
            (Some(b), _) => b * self.scale_factor,
            (None, Some(b)) => b * self.scale_factor,
            (None, None) => Vec3::splat(DEFAULT_BOX_SIZE),
        });
    }
}
