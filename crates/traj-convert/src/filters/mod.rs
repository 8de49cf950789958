//! Whole-trajectory transformation passes.
//!
//! | Filter                 | Effect                                          |
//! |------------------------|-------------------------------------------------|
//! | [`EveryNthAgent`]      | Keep every nth agent of each type per frame     |
//! | [`EveryNthTimestep`]   | Keep every nth frame                            |
//! | [`EveryNthSubpoint`]   | Keep every nth subpoint item                    |
//! | [`Translate`]          | Move agents, per type                           |
//! | [`MultiplySpace`]      | Scale space and divide the spatial unit         |
//! | [`MultiplyTime`]       | Scale frame times                               |
//! | [`TransformSpatialAxes`] | Permute and flip axes                         |
//! | [`ReorderAgents`]      | Renumber type IDs                               |
//! | [`AddAgents`]          | Append another store's agents to every frame    |
//!
//! Every filter takes a trajectory by value and returns a self-consistent
//! one.  [`TrajectoryConverter::filter_data`](crate::TrajectoryConverter::filter_data)
//! hands them a clone, so the converter's own data is never touched.

mod agents;
mod spatial;
mod time;

pub use agents::{AddAgents, EveryNthAgent, ReorderAgents};
pub use spatial::{AxisMapping, EveryNthSubpoint, MultiplySpace, TransformSpatialAxes, Translate};
pub use time::{EveryNthTimestep, MultiplyTime};

use std::collections::BTreeMap;

use traj_agent::{AgentData, TrajectoryData};
use traj_core::DimensionData;

use crate::ConvertResult;

/// One transformation pass.
pub trait Filter {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    fn apply(&self, data: TrajectoryData) -> ConvertResult<TrajectoryData>;
}

/// A store with `src`'s capacity per frame and rendering settings, holding
/// `total_steps` empty frames.
pub(crate) fn empty_like(src: &AgentData, total_steps: usize) -> AgentData {
    let dims = DimensionData { total_steps, ..src.get_dimensions() };
    let mut out = AgentData::from_dimensions(dims);
    out.display_data = src.display_data.clone();
    out.draw_fiber_points = src.draw_fiber_points;
    out.type_id_overrides = src.type_id_overrides.clone();
    out
}

/// Value for `name`, falling back to `default`.
pub(crate) fn per_type<T: Copy>(map: &BTreeMap<String, T>, default: T, name: &str) -> T {
    map.get(name).copied().unwrap_or(default)
}
