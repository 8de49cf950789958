//! The export-ready envelope around an [`AgentData`].

use traj_core::units::round_sig_figs;
use traj_core::{MetaData, Plot, TrajResult, UnitData};

use crate::AgentData;

/// Everything a writer needs: agents, scene metadata, units and plots.
///
/// Owns its `agent_data` exclusively.  Use `clone()` (a deep copy) to get an
/// independent trajectory for further mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryData {
    pub meta_data:     MetaData,
    pub agent_data:    AgentData,
    pub time_units:    UnitData,
    pub spatial_units: UnitData,
    pub plots:         Vec<Plot>,
}

impl TrajectoryData {
    /// Wrap `agent_data` with default metadata, 1 s / 1 m units and no plots.
    pub fn new(agent_data: AgentData) -> Self {
        Self {
            meta_data:     MetaData::default(),
            agent_data,
            time_units:    UnitData::default_time(),
            spatial_units: UnitData::default_spatial(),
            plots:         Vec::new(),
        }
    }

    pub fn with_meta_data(mut self, meta_data: MetaData) -> Self {
        self.meta_data = meta_data;
        self
    }

    pub fn with_time_units(mut self, units: UnitData) -> Self {
        self.time_units = units;
        self
    }

    pub fn with_spatial_units(mut self, units: UnitData) -> Self {
        self.spatial_units = units;
        self
    }

    /// `times[1] - times[0]` to four significant figures, or 0 for fewer
    /// than two frames.
    pub fn time_step_size(&self) -> f64 {
        match self.agent_data.times() {
            [t0, t1, ..] => round_sig_figs(f64::from(*t1) - f64::from(*t0), 4),
            _ => 0.0,
        }
    }

    /// Append `new_agents` to every frame.  See [`AgentData::append_agents`].
    pub fn append_agents(&mut self, new_agents: &AgentData) -> TrajResult<()> {
        self.agent_data = self.agent_data.append_agents(new_agents)?;
        Ok(())
    }
}
