//! The `TrajectoryWriter` trait implemented by the JSON and binary writers,
//! plus the preparation both share.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use traj_agent::{AgentData, HashMap, TrajectoryData, TypeIds, TypeMapping, get_type_ids_and_mapping};
use traj_codec::{FramePrecision, check_encoded_ids, check_types_match_subpoints, validate_ids};
use traj_core::VizType;
use traj_core::constants::current_version;

use crate::document::{Geometry, TrajectoryInfo, TypeEntry};
use crate::OutputResult;

/// File extension of every trajectory file.
pub const SIMULARIUM_EXTENSION: &str = "simularium";

/// Trait implemented by [`JsonWriter`](crate::JsonWriter) and
/// [`BinaryWriter`](crate::BinaryWriter).
pub trait TrajectoryWriter {
    /// Write `data` next to `output_path`, which has no extension, and
    /// return every file created.
    ///
    /// With `validate_ids` the unique IDs are checked first and nothing is
    /// written if any is out of range or repeated within a frame, counting
    /// fiber markers and IDs as the file's value width stores them.
    fn save(&self, data: &TrajectoryData, output_path: &Path, validate_ids: bool) -> OutputResult<Vec<PathBuf>>;
}

/// `output_path` with `suffix` and the `.simularium` extension appended.
pub fn output_file(output_path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(output_path.as_os_str());
    name.push(suffix);
    name.push(".");
    name.push(SIMULARIUM_EXTENSION);
    PathBuf::from(name)
}

// ── Preparation ───────────────────────────────────────────────────────────────

/// A trajectory checked and given type IDs, ready to encode.
pub struct Prepared<'a> {
    pub data:         &'a TrajectoryData,
    pub type_ids:     TypeIds,
    pub type_mapping: IndexMap<String, TypeEntry>,
}

impl<'a> Prepared<'a> {
    /// With `id_check` set, unique IDs are validated on the store and then
    /// on every encoded frame at that precision.
    pub fn new(data: &'a TrajectoryData, id_check: Option<FramePrecision>) -> OutputResult<Self> {
        let agents = &data.agent_data;
        check_types_match_subpoints(agents)?;
        if id_check.is_some() {
            validate_ids(agents)?;
        }
        let (type_ids, mapping) = get_type_ids_and_mapping(agents)?;
        if let Some(precision) = id_check {
            check_encoded_ids(agents, &type_ids, precision)?;
        }
        let type_mapping = type_mapping_entries(agents, &mapping);
        Ok(Self { data, type_ids, type_mapping })
    }

    #[inline]
    pub fn agents(&self) -> &'a AgentData {
        &self.data.agent_data
    }

    /// The header for a document holding `total_steps` frames.
    pub fn trajectory_info(&self, total_steps: usize) -> TrajectoryInfo {
        let data = self.data;
        let meta = &data.meta_data;
        TrajectoryInfo {
            version:          current_version::TRAJECTORY_INFO,
            time_units:       data.time_units.clone(),
            time_step_size:   data.time_step_size(),
            total_steps,
            spatial_units:    data.spatial_units.clone(),
            size:             meta.box_size_or_default(),
            camera_default:   meta.camera_defaults.clone(),
            type_mapping:     self.type_mapping.clone(),
            trajectory_title: meta.trajectory_title.clone(),
            model_info:       meta.model_meta_data.clone(),
        }
    }
}

/// The `typeMapping` table, in ascending ID order.
///
/// Each type's geometry comes from its display data, or from the viz type
/// of the first agent seen with that name.
pub fn type_mapping_entries(agents: &AgentData, mapping: &TypeMapping) -> IndexMap<String, TypeEntry> {
    let mut first_viz: HashMap<&str, VizType> = HashMap::default();
    for (t, a) in agents.occupied() {
        first_viz.entry(agents.type_name(t, a)).or_insert_with(|| agents.viz_type(t, a));
    }

    mapping
        .iter()
        .map(|(id, name)| {
            let viz = first_viz.get(name).copied().unwrap_or_default();
            let display = agents.display_data.get(name);
            let geometry = Geometry {
                display_type: agents.display_type_for(name, viz),
                url:          display.and_then(|d| d.url.clone()),
                color:        display.and_then(|d| d.color.clone()),
            };
            (id.to_string(), TypeEntry { name: name.to_owned(), geometry })
        })
        .collect()
}
