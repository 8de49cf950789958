//! Runtime options for the converter.
//!
//! Both structs deserialize from JSON with every field optional:
//!
//! ```json
//! { "scale": { "fixed": 0.1 }, "center": true, "draw_fiber_points": false }
//! { "binary": true, "validate_ids": true, "max_binary_bytes": 2000000000 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use traj_core::constants::binary::MAX_BYTES;

use crate::{ConvertError, ConvertResult};

/// How spatial data is brought into the viewer's range.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Leave coordinates as they are.
    #[default]
    None,
    /// Measure the extent and pick a factor.
    Auto,
    /// Multiply by the given factor.
    Fixed(f32),
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub scale:             ScaleMode,
    /// Center the scene on the origin before scaling.
    pub center:            bool,
    /// Overrides the store's own setting when present.
    pub draw_fiber_points: Option<bool>,
}

impl ConverterConfig {
    pub fn from_json(text: &str) -> ConvertResult<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| ConvertError::config(format!("converter config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConvertResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::config(format!("reading {}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// A fixed scale must be finite and positive.
    pub fn validate(&self) -> ConvertResult<()> {
        match self.scale {
            ScaleMode::Fixed(f) if !(f.is_finite() && f > 0.0) => {
                Err(ConvertError::config(format!("fixed scale factor {f} must be finite and positive")))
            }
            _ => Ok(()),
        }
    }
}

/// Where and how [`TrajectoryConverter::save`](crate::TrajectoryConverter::save)
/// writes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveOptions {
    /// Binary `.simularium` when set, JSON otherwise.
    pub binary:           bool,
    /// Check unique IDs before writing anything.
    pub validate_ids:     bool,
    /// Byte budget of one binary file.  Larger trajectories are split.
    pub max_binary_bytes: u64,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { binary: true, validate_ids: true, max_binary_bytes: MAX_BYTES }
    }
}

impl SaveOptions {
    pub fn json() -> Self {
        Self { binary: false, ..Self::default() }
    }

    pub fn binary() -> Self {
        Self::default()
    }

    pub fn with_validate_ids(mut self, on: bool) -> Self {
        self.validate_ids = on;
        self
    }

    pub fn with_max_binary_bytes(mut self, max_bytes: u64) -> Self {
        self.max_binary_bytes = max_bytes;
        self
    }

    pub fn from_json(text: &str) -> ConvertResult<Self> {
        serde_json::from_str(text).map_err(|e| ConvertError::config(format!("save options: {e}")))
    }
}
