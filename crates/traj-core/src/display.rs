//! Per-type rendering metadata.
//!
//! [`VizType`] is the numeric tag carried in every frame record.
//! [`DisplayType`] and [`DisplayData`] live only in the trajectory header's
//! type mapping and never appear in frame buffers.

use serde::{Deserialize, Serialize};

use crate::constants::{VIZ_TYPE_DEFAULT, VIZ_TYPE_FIBER};
use crate::{TrajError, TrajResult};

/// How the viewer draws one agent record: as a point or as a polyline.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum VizType {
    /// Point-like agent.
    #[default]
    Default,
    /// Polyline through the agent's subpoints.
    Fiber,
}

impl VizType {
    /// The float tag written to slot 0 of a record.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            VizType::Default => VIZ_TYPE_DEFAULT,
            VizType::Fiber => VIZ_TYPE_FIBER,
        }
    }

    /// Parse the float tag from slot 0 of a record.
    pub fn from_f64(v: f64) -> TrajResult<Self> {
        if v == VIZ_TYPE_DEFAULT {
            Ok(VizType::Default)
        } else if v == VIZ_TYPE_FIBER {
            Ok(VizType::Fiber)
        } else {
            Err(TrajError::data(format!("{v} is not a known viz type tag")))
        }
    }

    #[inline]
    pub fn is_fiber(self) -> bool {
        matches!(self, VizType::Fiber)
    }
}

/// Geometry kind shown for a type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayType {
    #[default]
    Sphere,
    Pdb,
    Obj,
    Fiber,
    /// A cluster of spheres given as agent-relative `(x, y, z, r)` subpoints.
    SphereGroup,
    Cube,
    Gizmo,
}

impl DisplayType {
    /// Values per subpoint item for this display type.
    #[inline]
    pub fn subpoint_item_len(self) -> usize {
        match self {
            DisplayType::SphereGroup => 4,
            _ => 3,
        }
    }

    /// `true` for the display types whose records carry subpoints.
    #[inline]
    pub fn has_subpoints(self) -> bool {
        matches!(self, DisplayType::Fiber | DisplayType::SphereGroup)
    }

    /// Display used when a type has none of its own.
    #[inline]
    pub fn default_for(viz: VizType) -> Self {
        match viz {
            VizType::Fiber => DisplayType::Fiber,
            VizType::Default => DisplayType::Sphere,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayType::Sphere => "SPHERE",
            DisplayType::Pdb => "PDB",
            DisplayType::Obj => "OBJ",
            DisplayType::Fiber => "FIBER",
            DisplayType::SphereGroup => "SPHERE_GROUP",
            DisplayType::Cube => "CUBE",
            DisplayType::Gizmo => "GIZMO",
        }
    }
}

impl std::fmt::Display for DisplayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DisplayType {
    type Err = TrajError;
    fn from_str(s: &str) -> TrajResult<Self> {
        match s {
            "SPHERE" => Ok(DisplayType::Sphere),
            "PDB" => Ok(DisplayType::Pdb),
            "OBJ" => Ok(DisplayType::Obj),
            "FIBER" => Ok(DisplayType::Fiber),
            "SPHERE_GROUP" => Ok(DisplayType::SphereGroup),
            "CUBE" => Ok(DisplayType::Cube),
            "GIZMO" => Ok(DisplayType::Gizmo),
            other => Err(TrajError::unsupported("display type", other)),
        }
    }
}

/// Rendering metadata for one display-type name.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayData {
    pub name: String,
    /// Radius override applied by engine readers.  `None` keeps the data's own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<DisplayType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DisplayData {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_display_type(mut self, display_type: DisplayType) -> Self {
        self.display_type = Some(display_type);
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the hex color.  Only `#rgb` and `#rrggbb` are accepted.
    pub fn with_color(mut self, color: impl Into<String>) -> TrajResult<Self> {
        let color = color.into();
        validate_color(&color)?;
        self.color = Some(color);
        Ok(self)
    }

    /// `true` when nothing beyond the name has been set.
    pub fn is_default(&self) -> bool {
        self.display_type.is_none()
            && self.url.as_deref().is_none_or(str::is_empty)
            && self.color.as_deref().is_none_or(str::is_empty)
    }

    /// Display type, falling back to the default for `viz`.
    #[inline]
    pub fn display_type_or(&self, viz: VizType) -> DisplayType {
        self.display_type.unwrap_or_else(|| DisplayType::default_for(viz))
    }
}

/// Check a `#rgb` / `#rrggbb` color string.
pub fn validate_color(color: &str) -> TrajResult<()> {
    let ok = (color.len() == 4 || color.len() == 7)
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if ok {
        Ok(())
    } else {
        Err(TrajError::data(format!("{color} should be provided as '#xxxxxx'")))
    }
}
