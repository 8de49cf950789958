use std::collections::BTreeMap;

use traj_agent::{AgentData, HashMap, TrajectoryData, TypeMapping, get_type_ids_and_mapping};
use traj_core::TypeId;

use super::{Filter, empty_like, per_type};
use crate::ConvertResult;

// ── EveryNthAgent ─────────────────────────────────────────────────────────────

/// Keep the 0th, nth, 2nth… agent of each type in every frame.  An `n` of
/// 0 removes the type.
#[derive(Clone, Debug, PartialEq)]
pub struct EveryNthAgent {
    pub n_per_type: BTreeMap<String, usize>,
    pub default_n:  usize,
}

impl EveryNthAgent {
    pub fn new(default_n: usize) -> Self {
        Self { n_per_type: BTreeMap::new(), default_n }
    }

    pub fn with_type(mut self, name: impl Into<String>, n: usize) -> Self {
        self.n_per_type.insert(name.into(), n);
        self
    }
}

impl Filter for EveryNthAgent {
    fn name(&self) -> &'static str {
        "every nth agent"
    }

    fn apply(&self, mut data: TrajectoryData) -> ConvertResult<TrajectoryData> {
        let src = &data.agent_data;
        let mut out = empty_like(src, src.total_steps());
        for t in 0..src.total_steps() {
            out.set_time(t, src.time(t));
            let mut seen: HashMap<&str, usize> = HashMap::default();
            for a in 0..src.n_agents(t) {
                let name = src.type_name(t, a);
                let count = seen.entry(name).or_insert(0);
                let index = *count;
                *count += 1;
                let n = per_type(&self.n_per_type, self.default_n, name);
                if n == 0 || index % n != 0 {
                    continue;
                }
                out.push_agent(t, src.agent(t, a));
            }
        }
        log::debug!("filtered down to {} agents per frame at most", out.max_n_agents());
        data.agent_data = out;
        Ok(data)
    }
}

// ── ReorderAgents ─────────────────────────────────────────────────────────────

/// Give types new IDs so the viewer lists (and colors) them in a different
/// order.  Types not in the map keep their current ID.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ReorderAgents {
    pub type_id_mapping: BTreeMap<u32, u32>,
}

impl ReorderAgents {
    pub fn new(type_id_mapping: BTreeMap<u32, u32>) -> Self {
        Self { type_id_mapping }
    }
}

impl Filter for ReorderAgents {
    fn name(&self) -> &'static str {
        "reorder agents"
    }

    /// Fails if two types would end up with the same ID.
    fn apply(&self, mut data: TrajectoryData) -> ConvertResult<TrajectoryData> {
        let (_, current) = get_type_ids_and_mapping(&data.agent_data)?;
        let mut pinned = TypeMapping::new();
        for (id, name) in current.iter() {
            let new_id = self.type_id_mapping.get(&id.0).copied().map_or(id, TypeId);
            pinned.insert(new_id, name)?;
        }
        data.agent_data.type_id_overrides = pinned.iter().map(|(id, name)| (name.to_owned(), id)).collect();
        Ok(data)
    }
}

// ── AddAgents ─────────────────────────────────────────────────────────────────

/// Append the agents of another store to every frame.  Colliding unique
/// IDs are moved to free ones.
#[derive(Clone, Debug)]
pub struct AddAgents {
    pub agents: AgentData,
}

impl AddAgents {
    pub fn new(agents: AgentData) -> Self {
        Self { agents }
    }
}

impl Filter for AddAgents {
    fn name(&self) -> &'static str {
        "add agents"
    }

    /// Both stores must have the same number of frames.
    fn apply(&self, mut data: TrajectoryData) -> ConvertResult<TrajectoryData> {
        data.append_agents(&self.agents)?;
        Ok(data)
    }
}
